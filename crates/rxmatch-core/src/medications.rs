//! Resolving a user's medication list against the drug catalog.

use rxmatch_map::CatalogMatcher;
use rxmatch_model::{MedicationResolution, ResolvedMedication};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoreError, Result};

/// Largest medication list accepted by default.
pub const DEFAULT_MAX_MEDICATIONS: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MedicationOptions {
    pub max_medications: usize,
}

impl Default for MedicationOptions {
    fn default() -> Self {
        Self {
            max_medications: DEFAULT_MAX_MEDICATIONS,
        }
    }
}

/// Look up every name in `names`, keeping input order in both result lists.
///
/// Blank names are reported as not found.
///
/// # Errors
///
/// Returns [`CoreError::TooManyMedications`] when the list exceeds
/// `options.max_medications`.
pub fn resolve_medications<N: AsRef<str>>(
    names: &[N],
    drugs: &CatalogMatcher,
    options: &MedicationOptions,
) -> Result<MedicationResolution> {
    if names.len() > options.max_medications {
        return Err(CoreError::TooManyMedications {
            count: names.len(),
            limit: options.max_medications,
        });
    }

    let mut resolution = MedicationResolution::default();
    for name in names {
        let input = name.as_ref();
        match drugs.find_best(input.trim()) {
            Some(found) => resolution.valid_drugs.push(ResolvedMedication {
                input: input.to_string(),
                drug_name: found.entry.name,
                reference: found.entry.reference,
            }),
            None => resolution.not_found_drugs.push(input.to_string()),
        }
    }
    debug!(
        valid = resolution.valid_drugs.len(),
        not_found = resolution.not_found_drugs.len(),
        "resolved medication list"
    );
    Ok(resolution)
}
