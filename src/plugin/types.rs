//! Core types for the plugin registry.

use crate::parser::Version;
use crate::support::BrowserSupportList;

/// A browser plugin an application may require, e.g. Adobe Flash Player.
#[derive(Debug, Clone)]
pub struct PluginInfo {
    /// Canonical identity (e.g. "flash").
    pub id: String,

    /// Name shown to users (e.g. "Adobe Flash Player").
    pub human_readable_name: String,

    /// Other names requirement strings may use for this plugin.
    pub aliases: Vec<String>,

    /// Browsers the plugin is available for.
    pub browser_support: BrowserSupportList,
}

impl PluginInfo {
    pub fn new(id: impl Into<String>, human_readable_name: impl Into<String>) -> Self {
        PluginInfo {
            id: id.into(),
            human_readable_name: human_readable_name.into(),
            aliases: Vec::new(),
            browser_support: BrowserSupportList::default(),
        }
    }

    pub fn with_aliases(mut self, aliases: &[&str]) -> Self {
        self.aliases = aliases.iter().map(|a| a.to_string()).collect();
        self
    }

    pub fn with_browser_support(mut self, browser_support: BrowserSupportList) -> Self {
        self.browser_support = browser_support;
        self
    }

    /// Only an explicit whitelist match counts as support.
    pub fn supports(&self, name: &str, version: Version) -> bool {
        self.browser_support.check(name, version) == Some(true)
    }
}
