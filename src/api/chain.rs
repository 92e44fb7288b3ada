use std::fmt;

use serde_json::{Value, json};
use tracing::{debug, trace};

use crate::core::{DEFAULT_PALETTE, cycled, dataset_entries_mut, deep_merge};

use super::{DatasetSpec, LegendArg, PaddingArg, TitleArg};

/// Chart kind used by the dataset hooks when no general kind is given.
pub const DEFAULT_CHART_KIND: &str = "bar";

type Hook = Box<dyn Fn(Value) -> Value + Send + Sync>;

/// Ordered, append-only chain of configuration transformations.
///
/// Each registration method validates and normalizes its argument up front,
/// appends one pure hook closing over the normalized copy, and returns the
/// chain for fluent reuse. [`HookChain::apply`] folds the hooks in
/// registration order over a caller-supplied base configuration without
/// consuming the chain, so one chain can template several charts.
///
/// Registration order is semantically meaningful: later hooks observe the
/// output of earlier ones, and the merge is last-write-wins on conflicting
/// leaves.
#[derive(Default)]
pub struct HookChain {
    hooks: Vec<Hook>,
}

impl fmt::Debug for HookChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookChain")
            .field("hooks", &self.hooks.len())
            .finish()
    }
}

impl HookChain {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered hooks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    fn register<F>(mut self, hook: F) -> Self
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        self.hooks.push(Box::new(hook));
        self
    }

    /// Registers a plain structural merge of `fragment`.
    fn merge_fragment(self, fragment: Value) -> Self {
        self.register(move |config| deep_merge(config, fragment.clone()))
    }

    /// Cycles the default palette over the dataset sequence.
    #[must_use]
    pub fn colors(self) -> Self {
        self.colors_with_palette(Vec::new())
    }

    /// Cycles `palette` over the dataset sequence, setting `borderColor` and
    /// `backgroundColor` of dataset `i` to `palette[i mod palette.len()]`.
    ///
    /// An empty palette falls back to the process default. The hook is a
    /// silent no-op when the configuration has no `data.datasets` array at
    /// application time.
    #[must_use]
    pub fn colors_with_palette(self, palette: Vec<String>) -> Self {
        let palette = if palette.is_empty() {
            DEFAULT_PALETTE.iter().map(|c| (*c).to_owned()).collect()
        } else {
            palette
        };
        self.register(move |mut config| {
            match dataset_entries_mut(&mut config) {
                Some(entries) => {
                    for (index, entry) in entries.iter_mut().enumerate() {
                        if let Some(color) = cycled(&palette, index) {
                            let existing = entry.take();
                            *entry = deep_merge(
                                existing,
                                json!({ "borderColor": color, "backgroundColor": color }),
                            );
                        }
                    }
                }
                None => trace!("colors hook skipped: no dataset sequence"),
            }
            config
        })
    }

    /// Merges `{options: {maintainAspectRatio}}`.
    #[must_use]
    pub fn responsive(self, maintain_aspect_ratio: bool) -> Self {
        self.merge_fragment(json!({
            "options": { "maintainAspectRatio": maintain_aspect_ratio }
        }))
    }

    /// Merges a legend fragment under `options.legend`.
    ///
    /// Accepts a bare display flag or a legend-options fragment, see
    /// [`LegendArg`].
    #[must_use]
    pub fn legend(self, value: impl Into<LegendArg>) -> Self {
        let legend = value.into().into_fragment();
        self.merge_fragment(json!({ "options": { "legend": legend } }))
    }

    /// Toggles axis visibility.
    ///
    /// With `strict` the shared scales display flag is merged; otherwise a
    /// single-entry display array is merged for each of the x and y axes.
    /// The axis arrays replace wholesale, so a repeated call replaces the
    /// earlier entries rather than accumulating them.
    #[must_use]
    pub fn display_axes(self, display: bool, strict: bool) -> Self {
        let scales = if strict {
            json!({ "display": display })
        } else {
            json!({
                "xAxes": [{ "display": display }],
                "yAxes": [{ "display": display }],
            })
        };
        self.merge_fragment(json!({ "options": { "scales": scales } }))
    }

    /// Convenience composite: hides (or restores) legend and axes in one
    /// call, registered at this position in the chain.
    #[must_use]
    pub fn minimalist(self, value: bool) -> Self {
        self.legend(!value).display_axes(!value, false)
    }

    /// Merges `{options: {layout: {padding}}}`.
    #[must_use]
    pub fn padding(self, value: impl Into<PaddingArg>) -> Self {
        let padding = value.into().into_fragment();
        self.merge_fragment(json!({
            "options": { "layout": { "padding": padding } }
        }))
    }

    /// Types and styles the dataset sequence with the stock general kind.
    #[must_use]
    pub fn datasets<I>(self, specs: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<DatasetSpec>,
    {
        self.datasets_with_kind(specs, DEFAULT_CHART_KIND)
    }

    /// Sets the top-level chart kind to `general_kind` and merges
    /// `specs[i mod specs.len()]` onto dataset `i`.
    ///
    /// Dataset-level merges preserve existing entry fields except those the
    /// cycled fragment overrides. An empty spec list sets the general kind
    /// only; a missing dataset sequence skips the per-entry styling.
    #[must_use]
    pub fn datasets_with_kind<I>(self, specs: I, general_kind: impl Into<String>) -> Self
    where
        I: IntoIterator,
        I::Item: Into<DatasetSpec>,
    {
        let fragments: Vec<Value> = specs
            .into_iter()
            .map(|spec| spec.into().into_fragment())
            .collect();
        let general_kind = general_kind.into();
        self.register(move |config| {
            let mut config = deep_merge(config, json!({ "type": general_kind.clone() }));
            if fragments.is_empty() {
                return config;
            }
            match dataset_entries_mut(&mut config) {
                Some(entries) => {
                    for (index, entry) in entries.iter_mut().enumerate() {
                        if let Some(fragment) = cycled(&fragments, index) {
                            let existing = entry.take();
                            *entry = deep_merge(existing, fragment.clone());
                        }
                    }
                }
                None => trace!("datasets hook skipped per-entry styling: no dataset sequence"),
            }
            config
        })
    }

    /// Merges a title fragment under `options.title`, see [`TitleArg`].
    #[must_use]
    pub fn title(self, value: impl Into<TitleArg>) -> Self {
        let title = value.into().into_fragment();
        self.merge_fragment(json!({ "options": { "title": title } }))
    }

    /// Anchors the y-axis tick range at zero.
    ///
    /// Merges a single-entry `yAxes` array; like [`HookChain::display_axes`]
    /// this is a wholesale array replacement.
    #[must_use]
    pub fn begin_at_zero(self, value: bool) -> Self {
        self.merge_fragment(json!({
            "options": { "scales": { "yAxes": [{ "ticks": { "beginAtZero": value } }] } }
        }))
    }

    /// Applies the chain to `base`, folding the hooks in registration order.
    ///
    /// The base is cloned first; an empty chain therefore yields a deep-equal
    /// copy. The chain is not consumed and can be re-applied to another base.
    #[must_use]
    pub fn apply(&self, base: &Value) -> Value {
        debug!(hook_count = self.hooks.len(), "applying hook chain");
        self.hooks
            .iter()
            .fold(base.clone(), |config, hook| hook(config))
    }
}
