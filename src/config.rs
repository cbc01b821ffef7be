//! Configuration file support for sbom-dashboard.
//!
//! Provides YAML-based configuration through `sbom-dashboard.config.yml`
//! files, and the merge of config values with command-line arguments.

use anyhow::Context;
use sbom_dashboard::application::dto::{DashboardRequest, DashboardTab, OutputFormat};
use sbom_dashboard::inventory::domain::{FilterCriteria, Selector};
use sbom_dashboard::shared::error::DashboardError;
use sbom_dashboard::shared::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::cli::Args;

pub const CONFIG_FILENAME: &str = "sbom-dashboard.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub tabs: Option<Vec<String>>,
    pub search: Option<String>,
    pub ecosystem: Option<String>,
    pub license: Option<String>,
    pub vulnerable_only: Option<bool>,
    pub fail_on_vulnerable: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty file is a valid, empty config
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(path, &config)?;

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(path: &Path, config: &ConfigFile) -> Result<()> {
    if let Some(format) = &config.format {
        OutputFormat::from_str(format).map_err(|reason| DashboardError::ConfigError {
            path: path.to_path_buf(),
            reason,
            hint: "Use 'json' or 'markdown'.".to_string(),
        })?;
    }

    if let Some(tabs) = &config.tabs {
        for tab in tabs {
            DashboardTab::from_str(tab).map_err(|reason| DashboardError::ConfigError {
                path: path.to_path_buf(),
                reason,
                hint: "Valid tabs are: overview, components, security, licenses.".to_string(),
            })?;
        }
    }

    Ok(())
}

/// Warning lines for unknown fields in the config file, sorted by key.
pub fn unknown_field_warnings(config: &ConfigFile) -> Vec<String> {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    keys.into_iter()
        .map(|key| format!("Unknown config field '{}' will be ignored.", key))
        .collect()
}

/// Effective settings after merging CLI arguments over config values over defaults.
#[derive(Debug)]
pub struct Settings {
    pub format: OutputFormat,
    pub request: DashboardRequest,
    pub fail_on_vulnerable: bool,
    pub output: Option<PathBuf>,
}

impl Settings {
    pub fn resolve(args: Args, config: ConfigFile) -> Result<Self> {
        let format = match (args.format, config.format.as_deref()) {
            (Some(format), _) => format,
            (None, Some(value)) => OutputFormat::from_str(value).map_err(anyhow::Error::msg)?,
            (None, None) => OutputFormat::default(),
        };

        let tabs = if args.tabs.is_empty() {
            config
                .tabs
                .unwrap_or_default()
                .iter()
                .map(|t| DashboardTab::from_str(t).map_err(anyhow::Error::msg))
                .collect::<Result<Vec<_>>>()?
        } else {
            args.tabs
        };

        let criteria = FilterCriteria {
            search_text: args.search.or(config.search).unwrap_or_default(),
            ecosystem: Self::selector(args.ecosystem.or(config.ecosystem)),
            license: Self::selector(args.license.or(config.license)),
            vulnerable_only: Self::switch(
                args.vulnerable_only,
                args.no_vulnerable_only,
                config.vulnerable_only,
            ),
        };

        Ok(Self {
            format,
            request: DashboardRequest::new(criteria, tabs),
            fail_on_vulnerable: Self::switch(
                args.fail_on_vulnerable,
                args.no_fail_on_vulnerable,
                config.fail_on_vulnerable,
            ),
            output: args.output,
        })
    }

    /// `--flag` / `--no-flag` pair over an optional config value; off by default
    fn switch(enabled: bool, disabled: bool, config: Option<bool>) -> bool {
        match (enabled, disabled) {
            (true, _) => true,
            (_, true) => false,
            _ => config.unwrap_or(false),
        }
    }

    fn selector(value: Option<String>) -> Selector {
        value.map(|v| Selector::parse(&v)).unwrap_or_default()
    }
}
