//! Plugin registry.
//!
//! Applications can require browser plugins (`"Adobe Flash 10+"`). A
//! requirement names the plugin loosely, so the registry maps ids, display
//! names and aliases to one canonical id, and holds each plugin's own browser
//! compatibility list.
//!
//! ```
//! use browser_support::plugin::{parse_plugin_name, PLUGINS};
//!
//! assert_eq!(parse_plugin_name("Adobe Flash"), Some("flash"));
//! let flash = PLUGINS.get("flash").unwrap();
//! assert_eq!(flash.human_readable_name, "Adobe Flash Player");
//! assert!(flash.supports("ie", 11.0));
//! ```

pub mod registry;
pub mod types;

pub use registry::{parse_plugin_name, PluginRegistry, PLUGINS};
pub use types::PluginInfo;
