//! CLI wrapper around the browser support resolver.
//!
//! Usage:
//!   browser-support --spec spec.json chrome 30
//!   browser-support --spec spec.json --features features.json --compact ie 9

use std::path::PathBuf;
use std::process::ExitCode;

use browser_support::{BrowserSupport, ConfigurationError, FeatureTable, SupportSpec, Version};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "browser-support",
    version,
    about = "Decide whether an application supports a browser"
)]
struct Cli {
    /// JSON support spec (blacklist, whitelist, browserFeatures, browserPlugins)
    #[arg(long)]
    spec: PathBuf,

    /// JSON feature data: provider -> feature -> browser -> {supported, since}
    #[arg(long)]
    features: Option<PathBuf>,

    /// Print the verdict on a single line
    #[arg(long)]
    compact: bool,

    /// Browser name, e.g. "chrome"
    browser: String,

    /// Browser version, e.g. 30 or 10.1
    #[arg(value_name = "VERSION")]
    browser_version: Version,
}

/// Condition attached to plugin dependent support.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PluginRequirement {
    name: String,
    required_version: String,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "configuration failed");
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<String, ConfigurationError> {
    let spec = SupportSpec::load(&cli.spec)?;
    let features = match &cli.features {
        Some(path) => FeatureTable::load(path)?,
        None => FeatureTable::new(),
    };

    let support = BrowserSupport::new(&spec, &features)?;
    let verdict = support.get_browser_support(&cli.browser, cli.browser_version, |name, required_version| {
        PluginRequirement {
            name: name.to_string(),
            required_version: required_version.to_string(),
        }
    });

    let output = if cli.compact {
        serde_json::to_string(&verdict)?
    } else {
        serde_json::to_string_pretty(&verdict)?
    };
    Ok(output)
}
