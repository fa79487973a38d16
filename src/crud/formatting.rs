//! Field and value formatting for the generic detail view and grid cells.

use serde::Serialize;
use serde_json::Value;

/// Placeholder shown for absent, null and empty values.
pub const EMPTY_PLACEHOLDER: &str = "N/A";

/// Turns a camelCase field name into a label.
///
/// # Examples
/// ```
/// use radmin::crud::formatting::humanize_field;
///
/// assert_eq!(humanize_field("orderNumber"), "Order Number");
/// assert_eq!(humanize_field("id"), "Id");
/// ```
pub fn humanize_field(field: &str) -> String {
    let mut label = String::with_capacity(field.len() + 4);
    let mut chars = field.chars();
    if let Some(first) = chars.next() {
        label.extend(first.to_uppercase());
    }
    for ch in chars {
        if ch.is_ascii_uppercase() {
            label.push(' ');
        }
        label.push(ch);
    }
    label
}

/// Renders a JSON value as plain text; null and empty strings become `N/A`.
pub fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => EMPTY_PLACEHOLDER.to_string(),
        Some(Value::String(s)) if s.is_empty() => EMPTY_PLACEHOLDER.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => match n.as_f64() {
            // whole floats print without a trailing ".0"
            Some(f) if n.is_f64() => f.to_string(),
            _ => n.to_string(),
        },
        Some(other) => other.to_string(),
    }
}

/// Serializes a record into its field map, keeping declaration order.
///
/// Records that do not serialize to an object yield an empty map.
pub fn to_fields<T: Serialize>(item: &T) -> serde_json::Map<String, Value> {
    match serde_json::to_value(item) {
        Ok(Value::Object(map)) => map,
        Ok(_) => serde_json::Map::new(),
        Err(err) => {
            tracing::warn!(error = %err, "record could not be serialized");
            serde_json::Map::new()
        }
    }
}

/// Humanized (label, value) pairs for every field of a record.
pub fn detail_rows<T: Serialize>(item: &T) -> Vec<(String, String)> {
    to_fields(item)
        .iter()
        .map(|(key, value)| (humanize_field(key), display_value(Some(value))))
        .collect()
}
