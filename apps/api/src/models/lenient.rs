//! Tolerant deserializers for LLM-produced résumé payloads.
//!
//! Upstream JSON is shaped by a function schema but not guaranteed to honor it:
//! sections arrive as `null`, list items arrive as bare strings or numbers, and
//! flags arrive as `null`. Everything here degrades to "absent" instead of failing
//! the whole record.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

/// Deserializes a list of entry objects, dropping any item that is not an object
/// or does not fit the entry shape. A missing, `null`, or non-array value yields
/// an empty list.
pub fn entries<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    let Some(Value::Array(items)) = raw else {
        return Ok(Vec::new());
    };

    Ok(items
        .into_iter()
        .filter_map(|item| {
            if !item.is_object() {
                debug!(item = %item, "Dropping non-object section entry");
                return None;
            }
            match serde_json::from_value(item) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    debug!(error = %e, "Dropping malformed section entry");
                    None
                }
            }
        })
        .collect())
}

/// Deserializes a list of strings, keeping only string items.
pub fn strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    let Some(Value::Array(items)) = raw else {
        return Ok(Vec::new());
    };

    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(s) => Some(s),
            _ => None,
        })
        .collect())
}

/// Deserializes an optional text value. Numbers are accepted and stringified
/// (`"startYear": 2019` is common); any other non-string value becomes `None`.
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Deserializes a nested object, falling back to its default when the value is
/// `null`, not an object, or does not fit the shape.
pub fn object<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(item @ Value::Object(_)) => serde_json::from_value(item).unwrap_or_else(|e| {
            debug!(error = %e, "Replacing malformed object with defaults");
            T::default()
        }),
        _ => T::default(),
    })
}

/// Like [`text`], but absent values become an empty string.
pub fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text(deserializer)?.unwrap_or_default())
}

/// Deserializes a presence flag. Anything other than a literal `true` is `false`.
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(matches!(raw, Some(Value::Bool(true))))
}

/// Deserializes an optional boolean, treating non-boolean values as `None`.
pub fn opt_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::Bool(b)) => Some(b),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        name: String,
    }

    #[derive(Debug, Default, Deserialize, PartialEq)]
    #[serde(default)]
    struct Inner {
        on: bool,
    }

    #[derive(Debug, Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "object")]
        inner: Inner,
        #[serde(default, deserialize_with = "text_or_empty")]
        label: String,
        #[serde(default, deserialize_with = "entries")]
        items: Vec<Item>,
        #[serde(default, deserialize_with = "strings")]
        tags: Vec<String>,
        #[serde(default, deserialize_with = "text")]
        year: Option<String>,
        #[serde(default, deserialize_with = "flag")]
        enabled: bool,
        #[serde(default, deserialize_with = "opt_bool")]
        relocate: Option<bool>,
    }

    #[test]
    fn test_entries_drops_non_objects_and_malformed() {
        let holder: Holder = serde_json::from_value(json!({
            "items": [{"name": "a"}, "junk", 42, {"other": true}, {"name": "b"}]
        }))
        .unwrap();
        assert_eq!(
            holder.items,
            vec![
                Item {
                    name: "a".to_string()
                },
                Item {
                    name: "b".to_string()
                }
            ]
        );
    }

    #[test]
    fn test_entries_null_or_scalar_is_empty() {
        let holder: Holder = serde_json::from_value(json!({ "items": null })).unwrap();
        assert!(holder.items.is_empty());
        let holder: Holder = serde_json::from_value(json!({ "items": "nope" })).unwrap();
        assert!(holder.items.is_empty());
    }

    #[test]
    fn test_strings_keeps_only_strings() {
        let holder: Holder =
            serde_json::from_value(json!({ "tags": ["Rust", 3, null, "Go"] })).unwrap();
        assert_eq!(holder.tags, vec!["Rust".to_string(), "Go".to_string()]);
    }

    #[test]
    fn test_text_accepts_numbers() {
        let holder: Holder = serde_json::from_value(json!({ "year": 2019 })).unwrap();
        assert_eq!(holder.year.as_deref(), Some("2019"));
        let holder: Holder = serde_json::from_value(json!({ "year": ["x"] })).unwrap();
        assert_eq!(holder.year, None);
    }

    #[test]
    fn test_object_null_or_scalar_is_default() {
        let holder: Holder = serde_json::from_value(json!({ "inner": null })).unwrap();
        assert_eq!(holder.inner, Inner::default());
        let holder: Holder = serde_json::from_value(json!({ "inner": [1, 2] })).unwrap();
        assert_eq!(holder.inner, Inner::default());
        let holder: Holder = serde_json::from_value(json!({ "inner": { "on": "x" } })).unwrap();
        assert_eq!(holder.inner, Inner::default());
        let holder: Holder = serde_json::from_value(json!({ "inner": { "on": true } })).unwrap();
        assert!(holder.inner.on);
    }

    #[test]
    fn test_text_or_empty_null_is_empty() {
        let holder: Holder = serde_json::from_value(json!({ "label": null })).unwrap();
        assert_eq!(holder.label, "");
        let holder: Holder = serde_json::from_value(json!({ "label": "Jane" })).unwrap();
        assert_eq!(holder.label, "Jane");
    }

    #[test]
    fn test_flag_null_is_false() {
        let holder: Holder =
            serde_json::from_value(json!({ "enabled": null, "relocate": "yes" })).unwrap();
        assert!(!holder.enabled);
        assert_eq!(holder.relocate, None);

        let holder: Holder = serde_json::from_value(json!({ "enabled": true })).unwrap();
        assert!(holder.enabled);
    }
}
