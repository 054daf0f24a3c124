use serde::{Deserialize, Serialize};

use crate::severity::Severity;

/// A medication name that resolved to a catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedMedication {
    /// Name as the user typed it.
    pub input: String,
    /// Canonical catalog name.
    pub drug_name: String,
    #[serde(rename = "url")]
    pub reference: String,
}

/// Result of resolving a list of medication names against a drug catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicationResolution {
    pub valid_drugs: Vec<ResolvedMedication>,
    pub not_found_drugs: Vec<String>,
}

impl MedicationResolution {
    pub fn all_found(&self) -> bool {
        self.not_found_drugs.is_empty()
    }
}

/// A known interaction of `drug` whose name refers to the prescribed drug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossCheckHit {
    pub drug: String,
    pub interaction: String,
    #[serde(rename = "severity_level")]
    pub severity: Severity,
    #[serde(rename = "severity")]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub professional_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossCheckReport {
    pub prescribed_drug: String,
    pub interactions: Vec<CrossCheckHit>,
}

impl CrossCheckReport {
    pub fn has_interactions(&self) -> bool {
        !self.interactions.is_empty()
    }
}
