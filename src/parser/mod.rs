//! PEG grammar for `"<product> <versionRange>"` strings.
//!
//! Used for plugin requirements (`"Adobe Flash 10+"`) and for blacklist or
//! whitelist rules (`"ie 6-8"`, `"opera"`). Ranges are one of `N+`, `N-M`,
//! `N` or `*`.

mod api;
mod types;
#[cfg(test)]
mod unit_tests;

pub use api::{parse_to_pairs, ProductVersionParser, Rule};
pub use types::{ProductVersion, Version, VersionRange};
