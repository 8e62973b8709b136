//! Caller supplied support configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// A single string or a list of strings. A bare string behaves exactly like a
/// one element list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StringOrList {
    One(String),
    Many(Vec<String>),
}

impl StringOrList {
    /// Entries in declaration order.
    pub fn entries(&self) -> Vec<&str> {
        match self {
            StringOrList::One(entry) => vec![entry.as_str()],
            StringOrList::Many(entries) => entries.iter().map(String::as_str).collect(),
        }
    }
}

impl From<&str> for StringOrList {
    fn from(entry: &str) -> Self {
        StringOrList::One(entry.to_string())
    }
}

impl From<String> for StringOrList {
    fn from(entry: String) -> Self {
        StringOrList::One(entry)
    }
}

impl From<Vec<String>> for StringOrList {
    fn from(entries: Vec<String>) -> Self {
        StringOrList::Many(entries)
    }
}

impl From<Vec<&str>> for StringOrList {
    fn from(entries: Vec<&str>) -> Self {
        StringOrList::Many(entries.into_iter().map(str::to_string).collect())
    }
}

/// What an application requires from a browser.
///
/// JSON keys follow the camelCase names: `blacklist`, `whitelist`,
/// `browserFeatures` and `browserPlugins`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SupportSpec {
    /// Rules such as `"ie 6-8"` that are never supported.
    pub blacklist: Vec<String>,

    /// Rules such as `"chrome"` that are always supported unless blacklisted.
    pub whitelist: Vec<String>,

    /// `"<provider>:<featureName>"` entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_features: Option<StringOrList>,

    /// `"<pluginProductName> <versionRange>"` entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_plugins: Option<StringOrList>,
}

impl SupportSpec {
    pub fn new() -> Self {
        SupportSpec::default()
    }

    pub fn with_blacklist(mut self, rules: Vec<&str>) -> Self {
        self.blacklist = rules.into_iter().map(str::to_string).collect();
        self
    }

    pub fn with_whitelist(mut self, rules: Vec<&str>) -> Self {
        self.whitelist = rules.into_iter().map(str::to_string).collect();
        self
    }

    pub fn with_features(mut self, features: impl Into<StringOrList>) -> Self {
        self.browser_features = Some(features.into());
        self
    }

    pub fn with_plugins(mut self, plugins: impl Into<StringOrList>) -> Self {
        self.browser_plugins = Some(plugins.into());
        self
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigurationError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigurationError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigurationError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }
}
