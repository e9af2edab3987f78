//! File-level configuration values.

use serde::{Deserialize, Deserializer, Serialize};

/// Settings read from `visualgen.toml` / `visualgen.yml`.
///
/// List fields accept either a comma-separated string or an array of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    #[serde(deserialize_with = "optional_list")]
    pub compile_extensions: Option<Vec<String>>,
    #[serde(deserialize_with = "optional_list")]
    pub include_extensions: Option<Vec<String>>,
    #[serde(deserialize_with = "list")]
    pub exclude_dirs: Vec<String>,
    pub project_guid: Option<String>,
    pub follow_symlinks: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrList {
    One(String),
    Many(Vec<String>),
}

impl StringOrList {
    fn into_items(self) -> Vec<String> {
        let raw = match self {
            StringOrList::One(s) => s.split(',').map(str::to_string).collect(),
            StringOrList::Many(v) => v,
        };
        raw.into_iter()
            .map(|item| item.trim().to_string())
            .filter(|item| !item.is_empty())
            .collect()
    }
}

fn optional_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Some(StringOrList::deserialize(deserializer)?.into_items()))
}

fn list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(StringOrList::deserialize(deserializer)?.into_items())
}
