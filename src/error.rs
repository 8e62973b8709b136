use std::path::PathBuf;

/// Failures raised while building a [`BrowserSupport`](crate::support::BrowserSupport)
/// or loading its inputs. Queries never fail.
#[derive(thiserror::Error, Debug)]
pub enum ConfigurationError {
    #[error("unable to parse plugin product/version string: {0}")]
    UnparsablePluginRequirement(String),

    #[error("plugin {0} is unknown")]
    UnknownPlugin(String),

    #[error("unable to parse browser rule: {0}")]
    UnparsableBrowserRule(String),

    #[error("unable to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
