use serde_json::Value;

use crate::error::{ChartError, ChartResult};

/// Parses a base configuration from JSON text.
///
/// Host applications that persist chart setup as JSON can load it through
/// this boundary instead of inventing their own ad-hoc parsing.
pub fn config_from_json_str(input: &str) -> ChartResult<Value> {
    serde_json::from_str(input)
        .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
}

/// Serializes a configuration to pretty JSON for debug/config files.
pub fn config_to_json_pretty(config: &Value) -> ChartResult<String> {
    serde_json::to_string_pretty(config)
        .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
}
