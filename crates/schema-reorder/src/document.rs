use serde_json::{Map, Value};

use crate::diagnostics::{ReorderError, json_type_name};
use crate::order::{ReorderReport, reorder_keys};

/// Path from the document root to the rule definitions, one object key per
/// segment.
pub const TARGET_PATH: &[&str] = &["properties", "configureRules", "properties"];

/// JSON pointer form of [`TARGET_PATH`], for messages.
pub fn target_pointer() -> String {
    TARGET_PATH.iter().fold(String::new(), |mut acc, segment| {
        acc.push('/');
        acc.push_str(segment);
        acc
    })
}

/// Walk [`TARGET_PATH`] and return the rule definitions object.
///
/// Returns `Ok(None)` when any segment is absent. A segment that exists but
/// is not an object is an error.
///
/// # Errors
///
/// Returns [`ReorderError::NotAnObject`] naming the offending pointer.
pub fn find_target(doc: &mut Value) -> Result<Option<&mut Map<String, Value>>, ReorderError> {
    let mut current = doc;
    let mut pointer = String::new();
    for segment in TARGET_PATH {
        let found = json_type_name(current);
        let Some(map) = current.as_object_mut() else {
            return Err(ReorderError::NotAnObject {
                pointer: if pointer.is_empty() {
                    "/".to_string()
                } else {
                    pointer
                },
                found,
            });
        };
        pointer.push('/');
        pointer.push_str(segment);
        let Some(next) = map.get_mut(*segment) else {
            tracing::debug!(%pointer, "segment absent, nothing to reorder");
            return Ok(None);
        };
        current = next;
    }

    let found = json_type_name(current);
    match current {
        Value::Object(map) => Ok(Some(map)),
        _ => Err(ReorderError::NotAnObject { pointer, found }),
    }
}

/// Reorder the rule definitions of `doc` in place.
///
/// Returns `Ok(None)` and leaves the document untouched when the schema has
/// no `configureRules` rule definitions.
///
/// # Errors
///
/// See [`find_target`].
pub fn reorder_document(
    doc: &mut Value,
    order: &[&str],
) -> Result<Option<ReorderReport>, ReorderError> {
    let Some(target) = find_target(doc)? else {
        return Ok(None);
    };
    Ok(Some(reorder_keys(target, order)))
}
