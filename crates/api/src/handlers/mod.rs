//! Request handlers, one module per resource.

pub mod auth;
pub mod sub_task;
pub mod task;
pub mod user;
pub mod workspace;

use serde::{Deserialize, Deserializer};

/// Deserialize an optional string, treating `""` the same as an absent field.
pub(crate) fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "super::empty_string_as_none")]
        name: Option<String>,
    }

    #[test]
    fn test_empty_string_becomes_none() {
        let patch: Patch = serde_json::from_str(r#"{"name": ""}"#).unwrap();
        assert_eq!(patch.name, None);
    }

    #[test]
    fn test_missing_and_present_fields() {
        let patch: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(patch.name, None);

        let patch: Patch = serde_json::from_str(r#"{"name": "Eng"}"#).unwrap();
        assert_eq!(patch.name.as_deref(), Some("Eng"));
    }
}
