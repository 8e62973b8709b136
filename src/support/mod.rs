//! Browser support resolution.
//!
//! A [`BrowserSupport`] is configured once from a [`SupportSpec`] and then
//! answers any number of `(browser, version)` queries. Evidence is consulted
//! in a fixed order and the first conclusive source wins:
//!
//! ```text
//! 1. blacklist / whitelist          -> supported | unsupported
//! 2. declared browser features      -> supported | unsupported
//! 3. required plugins (all of them) -> supported with conditions | unsupported
//! 4. nothing conclusive             -> unknown
//! ```

mod feature;
mod list;
mod spec;

pub use feature::{BrowserFeature, FeatureLookup, FeatureSupport, FeatureTable};
pub use list::{BrowserRule, BrowserSupportList};
pub use spec::{StringOrList, SupportSpec};

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::ConfigurationError;
use crate::parser::{ProductVersionParser, Version, VersionRange};
use crate::plugin::{PluginRegistry, PLUGINS};

/// Tri-state support answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Support {
    Supported,
    Unsupported,
    Unknown,
}

impl Support {
    pub fn as_str(&self) -> &'static str {
        match self {
            Support::Supported => "supported",
            Support::Unsupported => "unsupported",
            Support::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Support {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a support query.
///
/// `conditions` is only present when support depends on required plugins;
/// its elements are whatever the caller's requirement generator produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict<T> {
    pub support: Support,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Vec<T>>,
}

impl<T> Verdict<T> {
    pub fn supported() -> Self {
        Verdict {
            support: Support::Supported,
            conditions: None,
        }
    }

    pub fn unsupported() -> Self {
        Verdict {
            support: Support::Unsupported,
            conditions: None,
        }
    }

    pub fn unknown() -> Self {
        Verdict {
            support: Support::Unknown,
            conditions: None,
        }
    }

    pub fn conditional(conditions: Vec<T>) -> Self {
        Verdict {
            support: Support::Supported,
            conditions: Some(conditions),
        }
    }
}

/// Decides whether an application supports a given browser.
///
/// Immutable once built; queries take `&self` and may run concurrently.
pub struct BrowserSupport<'r> {
    /// Browsers where every declared feature is present from `since` on.
    supported_browsers: HashMap<String, BrowserFeature>,

    /// Browsers missing at least one declared feature in every version.
    unsupported_browsers: HashSet<String>,

    /// Canonical plugin id -> required versions, in declaration order.
    required_plugins: Vec<(String, VersionRange)>,

    support_list: BrowserSupportList,

    plugins: &'r PluginRegistry,
}

impl BrowserSupport<'static> {
    /// Configure against the global [`PLUGINS`] registry.
    pub fn new<L>(spec: &SupportSpec, lookup: &L) -> Result<Self, ConfigurationError>
    where
        L: FeatureLookup + ?Sized,
    {
        BrowserSupport::with_registry(spec, lookup, &*PLUGINS)
    }
}

impl<'r> BrowserSupport<'r> {
    /// Configure against a caller supplied plugin registry.
    ///
    /// Feature data is looked up synchronously, one declared feature at a
    /// time. Plugin requirements are validated eagerly: an unparsable string
    /// or an unknown plugin fails configuration.
    pub fn with_registry<L>(
        spec: &SupportSpec,
        lookup: &L,
        plugins: &'r PluginRegistry,
    ) -> Result<Self, ConfigurationError>
    where
        L: FeatureLookup + ?Sized,
    {
        let mut support = BrowserSupport {
            supported_browsers: HashMap::new(),
            unsupported_browsers: HashSet::new(),
            required_plugins: Vec::new(),
            support_list: BrowserSupportList::new(&spec.blacklist, &spec.whitelist)?,
            plugins,
        };

        if let Some(features) = &spec.browser_features {
            for browser_feature in features.entries() {
                support.record_feature(lookup, browser_feature);
            }
        }

        if let Some(requirements) = &spec.browser_plugins {
            for requirement in requirements.entries() {
                support.require_plugin(requirement)?;
            }
        }

        Ok(support)
    }

    fn record_feature<L>(&mut self, lookup: &L, browser_feature: &str)
    where
        L: FeatureLookup + ?Sized,
    {
        let (provider, feature) = split_feature(browser_feature);
        for (browser, status) in lookup.lookup(provider, feature) {
            debug!(provider, feature, browser = %browser, supported = status.supported, since = ?status.since, "recorded feature support");
            // Later declarations win, whichever way they go.
            if status.supported {
                self.unsupported_browsers.remove(&browser);
                self.supported_browsers.insert(browser, status);
            } else {
                self.supported_browsers.remove(&browser);
                self.unsupported_browsers.insert(browser);
            }
        }
    }

    fn require_plugin(&mut self, requirement: &str) -> Result<(), ConfigurationError> {
        let parsed = ProductVersionParser::parse_product_version_string(requirement)
            .ok_or_else(|| ConfigurationError::UnparsablePluginRequirement(requirement.to_string()))?;
        let id = self
            .plugins
            .parse_plugin_name(&parsed.product)
            .ok_or_else(|| ConfigurationError::UnknownPlugin(parsed.product.clone()))?
            .to_string();

        debug!(plugin = %id, versions = %parsed.versions, "required plugin");
        match self.required_plugins.iter_mut().find(|(existing, _)| *existing == id) {
            Some(entry) => entry.1 = parsed.versions,
            None => self.required_plugins.push((id, parsed.versions)),
        }
        Ok(())
    }

    /// Resolve support for `name` at `version`.
    ///
    /// `plugin_requirement` receives each required plugin's display name and
    /// its required version rendered as `"<min>+"`. It is only called when
    /// support hinges on plugins, once per plugin in declaration order.
    pub fn get_browser_support<T, F>(
        &self,
        name: &str,
        version: Version,
        mut plugin_requirement: F,
    ) -> Verdict<T>
    where
        F: FnMut(&str, &str) -> T,
    {
        // Explicit indicators are unconditional.
        if let Some(explicit) = self.support_list.check(name, version) {
            trace!(name, version, explicit, "explicit support list decided");
            return if explicit {
                Verdict::supported()
            } else {
                Verdict::unsupported()
            };
        }

        // A supported entry without a threshold is not conclusive either way.
        let since = self
            .supported_browsers
            .get(name)
            .and_then(|entry| entry.since);
        if let Some(since) = since {
            if version >= since {
                trace!(name, version, since, "all features present");
                return Verdict::supported();
            }
        }
        let below_threshold = since.map_or(false, |since| version < since);
        if self.unsupported_browsers.contains(name) || below_threshold {
            trace!(name, version, "a declared feature is missing");
            return Verdict::unsupported();
        }

        if !self.required_plugins.is_empty() {
            let mut supported_plugins = Vec::with_capacity(self.required_plugins.len());
            for (id, versions) in &self.required_plugins {
                let info = match self.plugins.get(id) {
                    Some(info) => info,
                    None => return Verdict::unsupported(),
                };
                if !info.supports(name, version) {
                    trace!(name, version, plugin = %id, "required plugin unavailable");
                    return Verdict::unsupported();
                }
                supported_plugins.push((info.human_readable_name.as_str(), versions.requirement()));
            }

            trace!(name, version, "supported through required plugins");
            return Verdict::conditional(
                supported_plugins
                    .into_iter()
                    .map(|(display_name, required)| plugin_requirement(display_name, required.as_str()))
                    .collect(),
            );
        }

        Verdict::unknown()
    }

    /// Required plugins as `(canonical id, versions)`, in declaration order.
    pub fn required_plugins(&self) -> impl Iterator<Item = (&str, &VersionRange)> {
        self.required_plugins
            .iter()
            .map(|(id, versions)| (id.as_str(), versions))
    }

    pub fn support_list(&self) -> &BrowserSupportList {
        &self.support_list
    }
}

/// `"provider:feature"` splits at the first colon; later colons stay in the
/// feature name. Without a colon both halves are the whole entry.
fn split_feature(browser_feature: &str) -> (&str, &str) {
    match browser_feature.find(':') {
        Some(idx) => (&browser_feature[..idx], &browser_feature[idx + 1..]),
        None => (browser_feature, browser_feature),
    }
}
