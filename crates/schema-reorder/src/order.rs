use serde_json::{Map, Value};

/// Canonical order of the `configureRules` rule definitions.
///
/// Kept by hand in sync with the rules the schema defines. Rules missing here
/// are still preserved, but they are reported and moved to the end.
pub const DESIRED_ORDER: &[&str] = &[
    "3DFileCompletenessRule",
    "BuildingTableRule",
    "GeometryEquivalenceRule",
    "LinksGeometryRule",
    "LinksTableRule",
    "ObjMtlReferenceRule",
    "PoiTableRule",
    "RdfIntegrityRule",
    "RootStructureRule",
    "ShapefileCompletenessRule",
    "ShapefilePrjRule",
    "dataTypeValidationRule",
];

/// Outcome of a single reorder pass over one object.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReorderReport {
    /// Keys from the desired order that the object did not contain, once per
    /// occurrence in the desired order.
    pub missing: Vec<String>,
    /// Keys the object contained that the desired order does not name, in
    /// their original order. These were appended after the known keys.
    pub extra: Vec<String>,
    /// Number of entries in the object before reordering.
    pub original_len: usize,
    /// Key order after reordering.
    pub new_order: Vec<String>,
    /// Whether any key moved.
    pub changed: bool,
}

impl ReorderReport {
    pub fn has_warnings(&self) -> bool {
        !self.missing.is_empty() || !self.extra.is_empty()
    }
}

/// Rebuild `target` so its keys follow `order`, with unknown keys appended
/// in their original relative order.
///
/// Values are moved, never cloned or modified, and no key is added or lost.
pub fn reorder_keys(target: &mut Map<String, Value>, order: &[&str]) -> ReorderReport {
    let original_len = target.len();
    let before: Vec<String> = target.keys().cloned().collect();
    let mut old = core::mem::take(target);

    let mut missing = Vec::new();
    for &key in order {
        if let Some(value) = old.shift_remove(key) {
            target.insert(key.to_string(), value);
        } else if !target.contains_key(key) {
            missing.push(key.to_string());
        }
    }

    // Whatever is left was never named by `order`; `old` still iterates in
    // the original sequence.
    let extra: Vec<String> = old.keys().cloned().collect();
    for (key, value) in old {
        target.insert(key, value);
    }

    let new_order: Vec<String> = target.keys().cloned().collect();
    let changed = new_order != before;

    tracing::debug!(
        original_len,
        missing = missing.len(),
        extra = extra.len(),
        changed,
        "reordered object keys"
    );

    ReorderReport {
        missing,
        extra,
        original_len,
        new_order,
        changed,
    }
}
