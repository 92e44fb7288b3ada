use serde_json::Value;

/// Merges a partial configuration fragment onto a base configuration.
///
/// When both sides are objects, their key sets are merged recursively: the
/// union of keys survives, fragment values win on leaf conflicts, and keys
/// present only in the base are preserved unchanged. Every other pairing
/// (scalar, array, null, or a type mismatch between the two sides) replaces
/// the base value wholesale.
///
/// Arrays are atomic: a fragment array fully replaces the base array at that
/// key. Hooks that need "rewrite element `i`, preserve the others" read the
/// running configuration's array and rebuild it positionally themselves.
#[must_use]
pub fn deep_merge(base: Value, fragment: Value) -> Value {
    match (base, fragment) {
        (Value::Object(mut base_map), Value::Object(fragment_map)) => {
            for (key, fragment_value) in fragment_map {
                match base_map.get_mut(&key) {
                    // Update the slot in place so merged keys keep their
                    // original position in the object.
                    Some(slot) => {
                        let existing = slot.take();
                        *slot = deep_merge(existing, fragment_value);
                    }
                    None => {
                        base_map.insert(key, fragment_value);
                    }
                }
            }
            Value::Object(base_map)
        }
        (_, fragment) => fragment,
    }
}
