//! Tunable thresholds for catalog lookup and interaction-name matching.

use serde::{Deserialize, Serialize};

use crate::error::{MatchError, Result};

/// Default acceptance threshold for catalog lookups.
pub const DEFAULT_CATALOG_THRESHOLD: f64 = 0.5;
/// Default value of [`InteractionMatchOptions::outer_threshold`].
pub const DEFAULT_OUTER_THRESHOLD: f64 = 0.2;
/// Default sliding-window length for interaction matching.
pub const DEFAULT_WINDOW: usize = 5;
/// Default per-window threshold for interaction matching.
pub const DEFAULT_INNER_THRESHOLD: f64 = 0.35;

/// Catalog lookup settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogMatchOptions {
    /// An entry is a candidate only when its similarity ratio is strictly
    /// greater than this value (default: 0.5).
    pub threshold: f64,
}

impl Default for CatalogMatchOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_CATALOG_THRESHOLD,
        }
    }
}

impl CatalogMatchOptions {
    pub fn validate(&self) -> Result<()> {
        check_threshold("threshold", self.threshold)
    }
}

/// Interaction-name matching settings.
///
/// Normalized distances are `distance / max(len_a, len_b)`; a comparison
/// passes when its normalized distance is at or below the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionMatchOptions {
    /// Threshold of the containment step (default: 0.2).
    ///
    /// Containment is exact, so this is validated and carried in config but
    /// not consulted when matching. Older callers passed this value where
    /// `inner_threshold` now goes; set `inner_threshold` to 0.2 for that
    /// stricter window scan.
    pub outer_threshold: f64,
    /// Length in characters of each scanned window (default: 5).
    pub window: usize,
    /// Threshold for comparing one window against the target (default: 0.35).
    pub inner_threshold: f64,
}

impl Default for InteractionMatchOptions {
    fn default() -> Self {
        Self {
            outer_threshold: DEFAULT_OUTER_THRESHOLD,
            window: DEFAULT_WINDOW,
            inner_threshold: DEFAULT_INNER_THRESHOLD,
        }
    }
}

impl InteractionMatchOptions {
    pub fn validate(&self) -> Result<()> {
        if self.window == 0 {
            return Err(MatchError::InvalidWindow);
        }
        check_threshold("outer_threshold", self.outer_threshold)?;
        check_threshold("inner_threshold", self.inner_threshold)
    }
}

/// Both matcher configurations, as read from a config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchOptions {
    pub catalog: CatalogMatchOptions,
    pub interaction: InteractionMatchOptions,
}

impl MatchOptions {
    pub fn validate(&self) -> Result<()> {
        self.catalog.validate()?;
        self.interaction.validate()
    }
}

fn check_threshold(name: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(MatchError::InvalidThreshold { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let options = MatchOptions::default();
        assert!(options.validate().is_ok());
        assert_eq!(options.catalog.threshold, 0.5);
        assert_eq!(options.interaction.window, 5);
        assert_eq!(options.interaction.inner_threshold, 0.35);
        assert_eq!(options.interaction.outer_threshold, 0.2);
    }

    #[test]
    fn rejects_zero_window() {
        let options = InteractionMatchOptions {
            window: 0,
            ..Default::default()
        };
        assert_eq!(options.validate(), Err(MatchError::InvalidWindow));
    }

    #[test]
    fn rejects_nan_and_out_of_range() {
        let nan = CatalogMatchOptions { threshold: f64::NAN };
        assert!(matches!(
            nan.validate(),
            Err(MatchError::InvalidThreshold { name: "threshold", .. })
        ));
        let high = InteractionMatchOptions {
            inner_threshold: 1.2,
            ..Default::default()
        };
        assert!(matches!(
            high.validate(),
            Err(MatchError::InvalidThreshold {
                name: "inner_threshold",
                ..
            })
        ));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let options: MatchOptions =
            serde_json::from_str(r#"{"interaction": {"window": 4}}"#).unwrap();
        assert_eq!(options.interaction.window, 4);
        assert_eq!(options.interaction.inner_threshold, 0.35);
        assert_eq!(options.catalog.threshold, 0.5);
    }
}
