//! Structured output of the product/version grammar.

use std::fmt;

/// Browser and plugin versions.
///
/// Every source (callers, feature data, plugin data) uses the same numeric
/// representation, so plain `>=`/`<` is the whole comparison scheme.
pub type Version = f64;

/// An inclusive range of versions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VersionRange {
    /// Lowest matching version.
    pub min: Version,

    /// Highest matching version, `None` for open ended ranges.
    pub max: Option<Version>,
}

impl VersionRange {
    /// `N+`
    pub fn at_least(min: Version) -> Self {
        VersionRange { min, max: None }
    }

    /// `N-M`
    pub fn between(min: Version, max: Version) -> Self {
        VersionRange {
            min,
            max: Some(max),
        }
    }

    /// `N`
    pub fn exactly(version: Version) -> Self {
        VersionRange::between(version, version)
    }

    /// `*`
    pub fn any() -> Self {
        VersionRange::at_least(0.0)
    }

    pub fn contains(&self, version: Version) -> bool {
        version >= self.min && self.max.map_or(true, |max| version <= max)
    }

    /// Requirement shown to callers. Only the lower bound is rendered.
    pub fn requirement(&self) -> String {
        format!("{}+", self.min)
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            None => write!(f, "{}+", self.min),
            Some(max) if max == self.min => write!(f, "{}", self.min),
            Some(max) => write!(f, "{}-{}", self.min, max),
        }
    }
}

/// A product name together with the versions it applies to,
/// e.g. `"Adobe Flash 10+"`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductVersion {
    pub product: String,
    pub versions: VersionRange,
}
