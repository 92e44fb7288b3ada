use chart_hooks::{HookChain, PaddingArg, PaddingEdges};
use serde_json::json;

fn base() -> serde_json::Value {
    json!({ "type": "bar", "options": {} })
}

#[test]
fn legend_accepts_bare_display_flag() {
    let built = HookChain::new().legend(false).apply(&base());
    assert_eq!(built["options"]["legend"], json!({ "display": false }));
}

#[test]
fn legend_accepts_options_fragment() {
    let built = HookChain::new()
        .legend(json!({ "display": true, "position": "bottom" }))
        .apply(&base());
    assert_eq!(
        built["options"]["legend"],
        json!({ "display": true, "position": "bottom" })
    );
}

#[test]
fn legend_fragment_merges_with_existing_options() {
    let base = json!({ "options": { "legend": { "position": "top" } } });
    let built = HookChain::new().legend(false).apply(&base);
    assert_eq!(built["options"]["legend"]["position"], json!("top"));
    assert_eq!(built["options"]["legend"]["display"], json!(false));
}

#[test]
fn bare_title_text_is_displayed_by_default() {
    let built = HookChain::new().title("Revenue").apply(&base());
    assert_eq!(
        built["options"]["title"],
        json!({ "text": "Revenue", "display": true })
    );
}

#[test]
fn explicit_title_display_wins_over_default() {
    let built = HookChain::new()
        .title(json!({ "text": "Revenue", "display": false }))
        .apply(&base());
    assert_eq!(
        built["options"]["title"],
        json!({ "text": "Revenue", "display": false })
    );
}

#[test]
fn empty_title_options_still_display() {
    let built = HookChain::new().title(json!({})).apply(&base());
    assert_eq!(built["options"]["title"], json!({ "display": true }));
}

#[test]
fn uniform_padding_merges_under_layout() {
    let built = HookChain::new().padding(10.0).apply(&base());
    assert_eq!(built["options"]["layout"]["padding"], json!(10.0));
}

#[test]
fn stock_padding_is_five() {
    let built = HookChain::new().padding(PaddingArg::default()).apply(&base());
    assert_eq!(built["options"]["layout"]["padding"], json!(5.0));
}

#[test]
fn per_edge_padding_merges_as_object() {
    let edges = PaddingEdges {
        left: 4.0,
        right: 4.0,
        top: 0.0,
        bottom: 12.0,
    };
    let built = HookChain::new().padding(edges).apply(&base());
    assert_eq!(
        built["options"]["layout"]["padding"],
        json!({ "left": 4.0, "right": 4.0, "top": 0.0, "bottom": 12.0 })
    );
}

#[test]
fn responsive_merges_aspect_ratio_flag() {
    let built = HookChain::new().responsive(true).apply(&base());
    assert_eq!(built["options"]["maintainAspectRatio"], json!(true));

    let built = HookChain::new().responsive(false).apply(&base());
    assert_eq!(built["options"]["maintainAspectRatio"], json!(false));
}
