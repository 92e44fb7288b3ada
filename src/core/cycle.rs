use serde_json::Value;

/// Selects element `index mod list.len()`.
///
/// Cycling is the resolution strategy for indices past the end of a finite
/// style/color list, not an error path. Returns `None` only for an empty
/// list.
#[must_use]
pub fn cycled<T>(list: &[T], index: usize) -> Option<&T> {
    if list.is_empty() {
        None
    } else {
        Some(&list[index % list.len()])
    }
}

/// Returns the dataset sequence at `data.datasets`, when present.
#[must_use]
pub fn dataset_entries(config: &Value) -> Option<&Vec<Value>> {
    config.get("data")?.get("datasets")?.as_array()
}

/// Mutable view of the dataset sequence at `data.datasets`.
pub fn dataset_entries_mut(config: &mut Value) -> Option<&mut Vec<Value>> {
    config.get_mut("data")?.get_mut("datasets")?.as_array_mut()
}
