use clap::Parser;
use sbom_dashboard::application::dto::{DashboardTab, OutputFormat};
use std::path::PathBuf;

/// Render an SBOM dashboard correlating components with known vulnerabilities
#[derive(Parser, Debug)]
#[command(name = "sbom-dashboard")]
#[command(version)]
#[command(
    about = "Render an SBOM dashboard correlating components with known vulnerabilities",
    long_about = None
)]
pub struct Args {
    /// Output format: json or markdown [default: markdown]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Tab to render: overview, components, security or licenses.
    /// Can be specified multiple times; all tabs are rendered when omitted
    #[arg(short, long = "tab", value_name = "TAB")]
    pub tabs: Vec<DashboardTab>,

    /// Case-insensitive substring matched against component name and group
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only show components of this ecosystem (e.g. maven, npm, or ALL)
    #[arg(short, long)]
    pub ecosystem: Option<String>,

    /// Only show components under this license (e.g. MIT, or ALL)
    #[arg(short, long)]
    pub license: Option<String>,

    /// Only show components with at least one known vulnerability
    #[arg(long, overrides_with = "no_vulnerable_only")]
    pub vulnerable_only: bool,

    /// Show clean components too, even if the config file sets vulnerable_only
    #[arg(long, overrides_with = "vulnerable_only")]
    pub no_vulnerable_only: bool,

    /// Exit with code 1 if the shown components include vulnerable ones
    #[arg(long, overrides_with = "no_fail_on_vulnerable")]
    pub fail_on_vulnerable: bool,

    /// Exit with code 0 on vulnerable components, even if the config file sets fail_on_vulnerable
    #[arg(long, overrides_with = "fail_on_vulnerable")]
    pub no_fail_on_vulnerable: bool,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to a config file (defaults to ./sbom-dashboard.config.yml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
