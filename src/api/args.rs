use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Legend argument: a bare display flag or a legend-options fragment.
///
/// Replaces the runtime boolean-vs-object inspection of dynamic front-ends
/// with an explicit variant resolved at the call site via `From`.
#[derive(Debug, Clone, PartialEq)]
pub enum LegendArg {
    Display(bool),
    Options(Value),
}

impl LegendArg {
    pub(crate) fn into_fragment(self) -> Value {
        match self {
            Self::Display(display) => json!({ "display": display }),
            Self::Options(options) => options,
        }
    }
}

impl From<bool> for LegendArg {
    fn from(display: bool) -> Self {
        Self::Display(display)
    }
}

impl From<Value> for LegendArg {
    fn from(options: Value) -> Self {
        Self::Options(options)
    }
}

/// Title argument: bare text or a title-options fragment.
#[derive(Debug, Clone, PartialEq)]
pub enum TitleArg {
    Text(String),
    Options(Value),
}

impl TitleArg {
    /// Normalizes into the fragment merged under `options.title`.
    ///
    /// Bare text becomes `{text, display: true}`. An options fragment gets
    /// `display: true` unless it carries its own `display`. Non-object
    /// option values pass through untouched for the downstream renderer's
    /// own validation to reject.
    pub(crate) fn into_fragment(self) -> Value {
        match self {
            Self::Text(text) => json!({ "text": text, "display": true }),
            Self::Options(mut options) => {
                if let Some(map) = options.as_object_mut() {
                    map.entry("display").or_insert(Value::Bool(true));
                }
                options
            }
        }
    }
}

impl From<&str> for TitleArg {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for TitleArg {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Value> for TitleArg {
    fn from(options: Value) -> Self {
        Self::Options(options)
    }
}

/// Per-edge layout padding.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddingEdges {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

/// Padding argument: one value for every edge, or per-edge values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaddingArg {
    Uniform(f64),
    Edges(PaddingEdges),
}

impl PaddingArg {
    pub(crate) fn into_fragment(self) -> Value {
        match self {
            Self::Uniform(padding) => json!(padding),
            Self::Edges(edges) => json!({
                "left": edges.left,
                "right": edges.right,
                "top": edges.top,
                "bottom": edges.bottom,
            }),
        }
    }
}

impl Default for PaddingArg {
    /// The stock padding applied when a host has no opinion.
    fn default() -> Self {
        Self::Uniform(5.0)
    }
}

impl From<f64> for PaddingArg {
    fn from(padding: f64) -> Self {
        Self::Uniform(padding)
    }
}

impl From<u32> for PaddingArg {
    fn from(padding: u32) -> Self {
        Self::Uniform(f64::from(padding))
    }
}

impl From<PaddingEdges> for PaddingArg {
    fn from(edges: PaddingEdges) -> Self {
        Self::Edges(edges)
    }
}

/// One entry of the ordered dataset style list cycled over dataset entries.
///
/// A bare kind tag normalizes to `{type: tag}`; a style fragment merges onto
/// the dataset entry as given.
#[derive(Debug, Clone, PartialEq)]
pub enum DatasetSpec {
    Kind(String),
    Style(Value),
}

impl DatasetSpec {
    pub(crate) fn into_fragment(self) -> Value {
        match self {
            Self::Kind(kind) => json!({ "type": kind }),
            Self::Style(fragment) => fragment,
        }
    }
}

impl From<&str> for DatasetSpec {
    fn from(kind: &str) -> Self {
        Self::Kind(kind.to_owned())
    }
}

impl From<String> for DatasetSpec {
    fn from(kind: String) -> Self {
        Self::Kind(kind)
    }
}

impl From<Value> for DatasetSpec {
    fn from(fragment: Value) -> Self {
        Self::Style(fragment)
    }
}
