pub mod config;
pub mod cycle;
pub mod merge;
pub mod palette;

pub use config::{config_from_json_str, config_to_json_pretty};
pub use cycle::{cycled, dataset_entries, dataset_entries_mut};
pub use merge::deep_merge;
pub use palette::DEFAULT_PALETTE;
