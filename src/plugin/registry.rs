//! Registry of known plugins and their name aliases.

use std::collections::HashMap;

use tracing::debug;

use super::types::PluginInfo;
use crate::parser::VersionRange;
use crate::support::{BrowserRule, BrowserSupportList};

lazy_static! {
    /// Registry used by [`BrowserSupport::new`](crate::support::BrowserSupport::new).
    pub static ref PLUGINS: PluginRegistry = PluginRegistry::with_core();
}

/// Resolves `name` against the global [`PLUGINS`] registry.
pub fn parse_plugin_name(name: &str) -> Option<&'static str> {
    PLUGINS.parse_plugin_name(name)
}

/// Known plugins, addressable by id, display name or alias.
pub struct PluginRegistry {
    /// Canonical id -> plugin.
    plugins: HashMap<String, PluginInfo>,

    /// Normalized name -> canonical id.
    names: HashMap<String, String>,
}

impl PluginRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        PluginRegistry {
            plugins: HashMap::new(),
            names: HashMap::new(),
        }
    }

    /// Create a registry with the built-in plugin catalogue.
    pub fn with_core() -> Self {
        let mut registry = Self::new();

        registry.register(
            PluginInfo::new("flash", "Adobe Flash Player")
                .with_aliases(&["adobe flash", "flashplayer", "shockwave flash"])
                .with_browser_support(BrowserSupportList::whitelist_only(vec![
                    BrowserRule::new("ie", VersionRange::at_least(6.0)),
                    BrowserRule::new("edge", VersionRange::between(12.0, 87.0)),
                    BrowserRule::new("firefox", VersionRange::between(1.0, 84.0)),
                    BrowserRule::new("chrome", VersionRange::between(1.0, 87.0)),
                    BrowserRule::new("safari", VersionRange::between(3.0, 13.1)),
                    BrowserRule::new("opera", VersionRange::between(9.0, 72.0)),
                ])),
        );
        registry.register(
            PluginInfo::new("silverlight", "Microsoft Silverlight")
                .with_aliases(&["ms silverlight"])
                .with_browser_support(BrowserSupportList::whitelist_only(vec![
                    BrowserRule::new("ie", VersionRange::at_least(6.0)),
                    BrowserRule::new("firefox", VersionRange::between(3.0, 51.0)),
                    BrowserRule::new("chrome", VersionRange::between(4.0, 44.0)),
                    BrowserRule::new("safari", VersionRange::between(3.0, 11.1)),
                ])),
        );
        registry.register(
            PluginInfo::new("java", "Java Runtime Environment")
                .with_aliases(&["jre", "java applet"])
                .with_browser_support(BrowserSupportList::whitelist_only(vec![
                    BrowserRule::new("ie", VersionRange::at_least(6.0)),
                    BrowserRule::new("firefox", VersionRange::between(1.0, 51.0)),
                    BrowserRule::new("chrome", VersionRange::between(1.0, 41.0)),
                    BrowserRule::new("safari", VersionRange::between(3.0, 11.1)),
                ])),
        );
        registry.register(
            PluginInfo::new("quicktime", "Apple QuickTime")
                .with_aliases(&["qt", "quicktime player"])
                .with_browser_support(BrowserSupportList::whitelist_only(vec![
                    BrowserRule::new("ie", VersionRange::between(6.0, 11.0)),
                    BrowserRule::new("firefox", VersionRange::between(1.0, 51.0)),
                    BrowserRule::new("chrome", VersionRange::between(1.0, 41.0)),
                    BrowserRule::new("safari", VersionRange::at_least(1.0)),
                ])),
        );

        registry
    }

    /// Register a plugin. Its id, display name and aliases all resolve to it;
    /// re-registering an id replaces the previous entry.
    pub fn register(&mut self, info: PluginInfo) {
        debug!(plugin = %info.id, "registering plugin");
        let id = info.id.clone();
        for name in std::iter::once(&info.id)
            .chain(std::iter::once(&info.human_readable_name))
            .chain(info.aliases.iter())
        {
            self.names.insert(normalize_name(name), id.clone());
        }
        self.plugins.insert(id, info);
    }

    /// Get a plugin by canonical id.
    pub fn get(&self, id: &str) -> Option<&PluginInfo> {
        self.plugins.get(id)
    }

    pub fn has_plugin(&self, id: &str) -> bool {
        self.plugins.contains_key(id)
    }

    /// Canonical id for a product name as written in a requirement string.
    /// Matching ignores case and surrounding or repeated whitespace.
    pub fn parse_plugin_name(&self, name: &str) -> Option<&str> {
        self.names.get(&normalize_name(name)).map(String::as_str)
    }

    pub fn plugin_ids(&self) -> Vec<&str> {
        self.plugins.keys().map(String::as_str).collect()
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::with_core()
    }
}

fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_aliases() {
        let registry = PluginRegistry::with_core();
        assert_eq!(registry.parse_plugin_name("flash"), Some("flash"));
        assert_eq!(registry.parse_plugin_name("Adobe  Flash"), Some("flash"));
        assert_eq!(registry.parse_plugin_name("Adobe Flash Player"), Some("flash"));
        assert_eq!(registry.parse_plugin_name(" JRE "), Some("java"));
        assert_eq!(registry.parse_plugin_name("UnknownPluginXYZ"), None);
    }

    #[test]
    fn test_global_registry() {
        assert_eq!(parse_plugin_name("Silverlight"), Some("silverlight"));
        assert!(PLUGINS.has_plugin("quicktime"));
        assert_eq!(PLUGINS.plugin_ids().len(), 4);
    }

    #[test]
    fn test_register_custom_plugin() {
        let mut registry = PluginRegistry::new();
        assert!(registry.parse_plugin_name("unity").is_none());

        registry.register(
            PluginInfo::new("unity", "Unity Web Player")
                .with_aliases(&["unity3d"])
                .with_browser_support(BrowserSupportList::whitelist_only(vec![
                    BrowserRule::new("firefox", VersionRange::at_least(3.0)),
                ])),
        );

        assert_eq!(registry.parse_plugin_name("Unity3D"), Some("unity"));
        let info = registry.get("unity").unwrap();
        assert_eq!(info.human_readable_name, "Unity Web Player");
        assert!(info.supports("firefox", 30.0));
        assert!(!info.supports("firefox", 2.0));
        assert!(!info.supports("chrome", 30.0));
    }
}
