//! Browser feature compatibility data.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;
use crate::parser::Version;

/// Support for one feature in one browser.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrowserFeature {
    pub supported: bool,

    /// First version with the feature. Only meaningful when `supported`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub since: Option<Version>,
}

impl BrowserFeature {
    pub fn supported_since(since: Version) -> Self {
        BrowserFeature {
            supported: true,
            since: Some(since),
        }
    }

    pub fn unsupported() -> Self {
        BrowserFeature {
            supported: false,
            since: None,
        }
    }
}

/// Browser name to feature support, as returned by a [`FeatureLookup`].
pub type FeatureSupport = HashMap<String, BrowserFeature>;

/// Source of feature compatibility data, consulted once per declared feature
/// while a [`BrowserSupport`](super::BrowserSupport) is being configured.
///
/// Any `Fn(&str, &str) -> FeatureSupport` closure is a lookup.
pub trait FeatureLookup {
    fn lookup(&self, provider: &str, feature: &str) -> FeatureSupport;
}

impl<F> FeatureLookup for F
where
    F: Fn(&str, &str) -> FeatureSupport,
{
    fn lookup(&self, provider: &str, feature: &str) -> FeatureSupport {
        self(provider, feature)
    }
}

/// In-memory feature data keyed by provider, then feature name.
///
/// JSON layout:
/// ```json
/// {
///   "acme": {
///     "flexbox": {
///       "chrome": { "supported": true, "since": 29 },
///       "ie": { "supported": false }
///     }
///   }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureTable {
    providers: HashMap<String, HashMap<String, FeatureSupport>>,
}

impl FeatureTable {
    pub fn new() -> Self {
        FeatureTable::default()
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

    pub fn insert(
        &mut self,
        provider: impl Into<String>,
        feature: impl Into<String>,
        browser: impl Into<String>,
        support: BrowserFeature,
    ) -> &mut Self {
        self.providers
            .entry(provider.into())
            .or_default()
            .entry(feature.into())
            .or_default()
            .insert(browser.into(), support);
        self
    }
}

impl FeatureLookup for FeatureTable {
    fn lookup(&self, provider: &str, feature: &str) -> FeatureSupport {
        self.providers
            .get(provider)
            .and_then(|features| features.get(feature))
            .cloned()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_from_json() {
        let table = FeatureTable::from_json(
            r#"{
                "acme": {
                    "flexbox": {
                        "chrome": { "supported": true, "since": 29 },
                        "ie": { "supported": false }
                    }
                }
            }"#,
        )
        .unwrap();

        let support = table.lookup("acme", "flexbox");
        assert_eq!(support.len(), 2);
        assert_eq!(support["chrome"], BrowserFeature::supported_since(29.0));
        assert_eq!(support["ie"], BrowserFeature::unsupported());
    }

    #[test]
    fn test_missing_entries_are_empty() {
        let mut table = FeatureTable::new();
        table.insert("acme", "flexbox", "chrome", BrowserFeature::supported_since(29.0));
        assert!(table.lookup("acme", "grid").is_empty());
        assert!(table.lookup("other", "flexbox").is_empty());
    }

    #[test]
    fn test_closure_lookup() {
        let lookup = |provider: &str, feature: &str| {
            let mut support = FeatureSupport::new();
            if provider == "acme" && feature == "a:b" {
                support.insert("chrome".to_string(), BrowserFeature::unsupported());
            }
            support
        };
        assert_eq!(lookup.lookup("acme", "a:b").len(), 1);
        assert!(lookup.lookup("acme", "a").is_empty());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(matches!(
            FeatureTable::from_json("{\"acme\": 3}"),
            Err(ConfigurationError::Json(_))
        ));
    }
}
