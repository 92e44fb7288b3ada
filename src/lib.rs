//! chart-hooks: declarative hook pipeline for chart rendering configurations.
//!
//! A caller assembles an ordered chain of small configuration transformations
//! ("hooks") and applies them to a base configuration supplied by the host
//! application. The crate never talks to a renderer: it produces a finished
//! configuration value for the host to hand off.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{DatasetSpec, HookChain, LegendArg, PaddingArg, PaddingEdges, TitleArg};
pub use core::{DEFAULT_PALETTE, deep_merge};
pub use error::{ChartError, ChartResult};
