//! `rxmatch.toml` configuration.
//!
//! ```toml
//! [catalog]
//! threshold = 0.5
//!
//! [interaction]
//! outer_threshold = 0.2
//! window = 5
//! inner_threshold = 0.35
//!
//! [severity.labels]
//! major = "Severe"
//!
//! [medications]
//! max_medications = 16
//! ```
//!
//! Every section and key is optional; missing values take the defaults.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use rxmatch_core::MedicationOptions;
use rxmatch_map::{CatalogMatchOptions, InteractionMatchOptions, MatchOptions};
use rxmatch_model::{Severity, SeverityCode, SeverityTable};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub catalog: CatalogMatchOptions,
    pub interaction: InteractionMatchOptions,
    pub severity: SeverityConfig,
    pub medications: MedicationOptions,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeverityConfig {
    /// Replaces the standard code table when present.
    pub codes: Option<Vec<SeverityCode>>,
    /// Severity name → display label overrides.
    pub labels: BTreeMap<String, String>,
}

impl SeverityConfig {
    pub fn table(&self) -> Result<SeverityTable> {
        let mut table = self
            .codes
            .clone()
            .map_or_else(SeverityTable::standard, SeverityTable::new);
        for (severity, label) in &self.labels {
            let severity: Severity = severity
                .parse()
                .with_context(|| format!("invalid [severity.labels] key '{severity}'"))?;
            table = table.with_label(severity, label.clone());
        }
        Ok(table)
    }
}

impl AppConfig {
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).context("parse config")?;
        config.validate()?;
        Ok(config)
    }

    /// Read `path`, or use defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::from_toml(&contents).with_context(|| format!("load config {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        self.match_options().validate().context("invalid matcher options")?;
        self.severity.table()?;
        Ok(())
    }

    pub fn match_options(&self) -> MatchOptions {
        MatchOptions {
            catalog: self.catalog,
            interaction: self.interaction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config.catalog.threshold, 0.5);
        assert_eq!(config.interaction.window, 5);
        assert_eq!(config.medications.max_medications, 16);
        assert_eq!(config.severity.table().unwrap(), SeverityTable::standard());
    }

    #[test]
    fn overrides_and_labels() {
        let config = AppConfig::from_toml(
            r#"
            [interaction]
            window = 4

            [severity.labels]
            major = "Severe"
            "#,
        )
        .unwrap();
        assert_eq!(config.interaction.window, 4);
        assert_eq!(config.interaction.inner_threshold, 0.35);
        assert_eq!(config.severity.table().unwrap(), SeverityTable::severe());
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(AppConfig::from_toml("[interaction]\nwindow = 0\n").is_err());
        assert!(AppConfig::from_toml("[severity.labels]\nfatal = \"x\"\n").is_err());
        assert!(AppConfig::from_toml("[unknown]\n").is_err());
    }
}
