//! Interaction severity and the code → label lookup table.
//!
//! Upstream sources classify each interaction with a short code (`int_3`,
//! `int_2`, ...). The code decides the [`Severity`]; the label shown to users
//! is presentation and varies between sources ("Major" vs "Severe"), so it is
//! kept in an injectable [`SeverityTable`] instead of on the enum.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::interaction::RawInteractionFragment;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Major,
    Moderate,
    Minor,
    Unknown,
}

impl Severity {
    /// Whether the severity is classified. Only known interactions carry
    /// long-form descriptions.
    pub fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }

    pub fn default_label(self) -> &'static str {
        match self {
            Self::Major => "Major",
            Self::Moderate => "Moderate",
            Self::Minor => "Minor",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.default_label())
    }
}

impl FromStr for Severity {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "major" | "severe" | "major/severe" => Ok(Self::Major),
            "moderate" => Ok(Self::Moderate),
            "minor" => Ok(Self::Minor),
            "unknown" => Ok(Self::Unknown),
            _ => Err(ModelError::UnknownSeverity {
                value: s.to_string(),
            }),
        }
    }
}

/// One row of a [`SeverityTable`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCode {
    pub code: String,
    pub severity: Severity,
    pub label: String,
}

impl SeverityCode {
    pub fn new(code: impl Into<String>, severity: Severity, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            severity,
            label: label.into(),
        }
    }
}

/// Lookup from upstream severity codes to a [`Severity`] and its label.
///
/// Codes missing from the table are not interactions at all: upstream list
/// items with other codes are skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityTable {
    codes: Vec<SeverityCode>,
}

impl Default for SeverityTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl SeverityTable {
    pub fn new(codes: Vec<SeverityCode>) -> Self {
        Self { codes }
    }

    /// `int_3` Major, `int_2` Moderate, `int_1` Minor, `int_0` Unknown.
    pub fn standard() -> Self {
        Self::new(vec![
            SeverityCode::new("int_3", Severity::Major, "Major"),
            SeverityCode::new("int_2", Severity::Moderate, "Moderate"),
            SeverityCode::new("int_1", Severity::Minor, "Minor"),
            SeverityCode::new("int_0", Severity::Unknown, "Unknown"),
        ])
    }

    /// The standard table with `int_3` labelled "Severe".
    pub fn severe() -> Self {
        Self::standard().with_label(Severity::Major, "Severe")
    }

    /// Relabel every code that maps to `severity`.
    #[must_use]
    pub fn with_label(mut self, severity: Severity, label: impl Into<String>) -> Self {
        let label = label.into();
        for code in self.codes.iter_mut().filter(|c| c.severity == severity) {
            code.label.clone_from(&label);
        }
        self
    }

    pub fn codes(&self) -> &[SeverityCode] {
        &self.codes
    }

    pub fn classify(&self, code: &str) -> Option<&SeverityCode> {
        self.codes.iter().find(|c| c.code == code)
    }

    /// Label for `severity`, falling back to [`Severity::default_label`] when
    /// no code in the table maps to it.
    pub fn label(&self, severity: Severity) -> &str {
        self.codes
            .iter()
            .find(|c| c.severity == severity)
            .map_or(severity.default_label(), |c| c.label.as_str())
    }

    /// Build a fragment from an upstream list item, or `None` when `code` is
    /// not a severity code.
    pub fn fragment(
        &self,
        name: impl Into<String>,
        reference: impl Into<String>,
        code: &str,
    ) -> Option<RawInteractionFragment> {
        let entry = self.classify(code)?;
        Some(RawInteractionFragment {
            name: name.into(),
            reference: reference.into(),
            severity: entry.severity,
            label: entry.label.clone(),
        })
    }
}
