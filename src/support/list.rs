//! Explicit blacklist/whitelist rules.

use tracing::trace;

use crate::error::ConfigurationError;
use crate::parser::{ProductVersionParser, Version, VersionRange};

/// A browser name with the versions a rule covers.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowserRule {
    pub browser: String,
    pub versions: VersionRange,
}

impl BrowserRule {
    pub fn new(browser: impl Into<String>, versions: VersionRange) -> Self {
        BrowserRule {
            browser: browser.into(),
            versions,
        }
    }

    /// Parses `"<browser>"` or `"<browser> <versionRange>"`.
    pub fn parse(rule: &str) -> Result<Self, ConfigurationError> {
        ProductVersionParser::parse_browser_rule(rule)
            .map(|parsed| BrowserRule::new(parsed.product, parsed.versions))
            .ok_or_else(|| ConfigurationError::UnparsableBrowserRule(rule.to_string()))
    }

    /// Browser names match exactly and case-sensitively.
    pub fn matches(&self, name: &str, version: Version) -> bool {
        self.browser == name && self.versions.contains(version)
    }
}

/// Explicit support indicators. A matching blacklist rule wins over a
/// matching whitelist rule.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrowserSupportList {
    blacklist: Vec<BrowserRule>,
    whitelist: Vec<BrowserRule>,
}

impl BrowserSupportList {
    pub fn new<S: AsRef<str>>(blacklist: &[S], whitelist: &[S]) -> Result<Self, ConfigurationError> {
        Ok(BrowserSupportList {
            blacklist: parse_rules(blacklist)?,
            whitelist: parse_rules(whitelist)?,
        })
    }

    pub fn from_rules(blacklist: Vec<BrowserRule>, whitelist: Vec<BrowserRule>) -> Self {
        BrowserSupportList {
            blacklist,
            whitelist,
        }
    }

    pub fn whitelist_only(whitelist: Vec<BrowserRule>) -> Self {
        Self::from_rules(Vec::new(), whitelist)
    }

    /// `Some(false)` if blacklisted, `Some(true)` if whitelisted, `None` when
    /// no rule applies.
    pub fn check(&self, name: &str, version: Version) -> Option<bool> {
        if let Some(rule) = self.blacklist.iter().find(|r| r.matches(name, version)) {
            trace!(name, version, rule = %rule.versions, "blacklisted");
            return Some(false);
        }
        if let Some(rule) = self.whitelist.iter().find(|r| r.matches(name, version)) {
            trace!(name, version, rule = %rule.versions, "whitelisted");
            return Some(true);
        }
        None
    }

    pub fn is_empty(&self) -> bool {
        self.blacklist.is_empty() && self.whitelist.is_empty()
    }
}

fn parse_rules<S: AsRef<str>>(rules: &[S]) -> Result<Vec<BrowserRule>, ConfigurationError> {
    rules.iter().map(|rule| BrowserRule::parse(rule.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_has_no_opinion() {
        let list = BrowserSupportList::default();
        assert!(list.is_empty());
        assert_eq!(list.check("chrome", 50.0), None);
    }

    #[test]
    fn test_whitelist_and_blacklist() {
        let list = BrowserSupportList::new(&["ie 6-8"], &["ie", "firefox 40+"]).unwrap();
        assert_eq!(list.check("ie", 7.0), Some(false));
        assert_eq!(list.check("ie", 11.0), Some(true));
        assert_eq!(list.check("firefox", 45.0), Some(true));
        assert_eq!(list.check("firefox", 39.0), None);
        assert_eq!(list.check("Firefox", 45.0), None);
    }

    #[test]
    fn test_unparsable_rule_fails() {
        let empty: [&str; 0] = [];
        match BrowserSupportList::new(&["   "], &empty) {
            Err(ConfigurationError::UnparsableBrowserRule(rule)) => assert_eq!(rule, "   "),
            other => panic!("expected an unparsable rule error, got {:?}", other),
        }
    }
}
