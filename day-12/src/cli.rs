use std::path::{Path, PathBuf};

use clap::Parser;
use miette::{IntoDiagnostic, Result, WrapErr};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

/// Command line shared by the garden binaries.
#[derive(Debug, Parser)]
#[command(version)]
pub struct Args {
    /// Garden map, one row of plots per line
    pub input: Option<PathBuf>,
}

impl Args {
    pub fn input_or<'a>(&'a self, default: &'a str) -> &'a Path {
        self.input.as_deref().unwrap_or_else(|| Path::new(default))
    }
}

/// Installs the fmt subscriber on stderr, leaving stdout to the answers.
/// `RUST_LOG` overrides the `day_12=info` default.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("day_12=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_span_events(FmtSpan::NONE)
        .try_init();
}

pub fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read garden map from {}", path.display()))
}
