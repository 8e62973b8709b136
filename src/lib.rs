//! # browser-support - does an application support this browser?
//!
//! Combines three independent kinds of evidence into one tri-state verdict
//! (`supported` / `unsupported` / `unknown`):
//! - an explicit blacklist / whitelist
//! - declared browser features (`"<provider>:<featureName>"`) with their
//!   per-browser compatibility data
//! - required plugins (`"Adobe Flash 10+"`) with their own browser
//!   compatibility data
//!
//! ## Quick Start
//!
//! ```
//! use browser_support::{BrowserFeature, BrowserSupport, FeatureSupport, Support, SupportSpec};
//!
//! let spec = SupportSpec::new().with_features("acme:flexbox");
//! let lookup = |_provider: &str, _feature: &str| {
//!     let mut support = FeatureSupport::new();
//!     support.insert("chrome".to_string(), BrowserFeature::supported_since(29.0));
//!     support
//! };
//! let support = BrowserSupport::new(&spec, &lookup).unwrap();
//!
//! let verdict = support.get_browser_support("chrome", 30.0, |name, version| format!("{} {}", name, version));
//! assert_eq!(verdict.support, Support::Supported);
//! let verdict = support.get_browser_support("chrome", 20.0, |name, version| format!("{} {}", name, version));
//! assert_eq!(verdict.support, Support::Unsupported);
//! let verdict = support.get_browser_support("firefox", 50.0, |name, version| format!("{} {}", name, version));
//! assert_eq!(verdict.support, Support::Unknown);
//! ```
//!
//! ### Plugin Requirements
//!
//! When neither the lists nor the features decide, every required plugin
//! must be available for the browser. Support is then conditional and the
//! caller turns each plugin into a condition of its own type:
//!
//! ```
//! use browser_support::{BrowserSupport, FeatureTable, Support, SupportSpec};
//!
//! let spec = SupportSpec::new().with_plugins("flash 10+");
//! let support = BrowserSupport::new(&spec, &FeatureTable::new()).unwrap();
//!
//! let verdict = support.get_browser_support("ie", 9.0, |name, version| format!("{} {}", name, version));
//! assert_eq!(verdict.support, Support::Supported);
//! assert_eq!(verdict.conditions, Some(vec!["Adobe Flash Player 10+".to_string()]));
//! ```
//!
//! ## Versions
//!
//! Versions are plain `f64` values everywhere (callers, feature data, plugin
//! data) and are compared numerically. `"10.0"` style strings are not
//! normalized; convert them before querying.
//!
//! ## Architecture
//!
//! - **[`parser`]** - PEG grammar for `"<product> <versionRange>"` strings
//! - **[`plugin`]** - Plugin registry and name resolution
//! - **[`support`]** - Configuration, support lists and the resolver itself

#[macro_use]
extern crate lazy_static;

pub mod error;
pub mod parser;
pub mod plugin;
pub mod support;

pub use error::ConfigurationError;
pub use parser::{ProductVersion, ProductVersionParser, Version, VersionRange};
pub use plugin::{parse_plugin_name, PluginInfo, PluginRegistry, PLUGINS};
pub use support::{
    BrowserFeature, BrowserRule, BrowserSupport, BrowserSupportList, FeatureLookup, FeatureSupport,
    FeatureTable, StringOrList, Support, SupportSpec, Verdict,
};
