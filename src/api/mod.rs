pub mod args;
pub mod chain;

pub use args::{DatasetSpec, LegendArg, PaddingArg, PaddingEdges, TitleArg};
pub use chain::{DEFAULT_CHART_KIND, HookChain};
