use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// A single candidate Chinese name
///
/// Values are produced once per request and never mutated. Fields absent
/// from a provider payload, or set to `null`, decode as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GeneratedName {
    /// 2-3 Chinese characters
    #[serde(default, deserialize_with = "null_as_empty")]
    #[schema(example = "艾乐轩")]
    pub chinese: String,
    /// Pinyin with tone marks
    #[serde(default, rename = "pinyin", deserialize_with = "null_as_empty")]
    #[schema(example = "Ài Lè Xuān")]
    pub romanization: String,
    /// Short English gloss
    #[serde(default, deserialize_with = "null_as_empty")]
    #[schema(example = "Joyful Adventurer")]
    pub meaning: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub reason: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of `POST /api/generate`
///
/// `name` is optional at the serde level so that a missing name surfaces as a
/// validation error rather than a body rejection.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct NamingRequest {
    #[serde(default)]
    #[schema(example = "Alice")]
    pub name: Option<String>,
    #[serde(default)]
    #[schema(example = "I love music and travelling")]
    pub description: Option<String>,
}

impl NamingRequest {
    /// The given name, if present and non-empty
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }

    /// The description, treating an empty string as absent
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }
}
