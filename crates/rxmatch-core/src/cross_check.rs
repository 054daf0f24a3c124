//! Checking a list of drugs against a prescribed drug.
//!
//! For each listed drug, its known interactions are collected and every entry
//! whose name refers to the prescribed drug is reported.

use rxmatch_map::{CatalogMatcher, InteractionNameMatcher};
use rxmatch_model::{CrossCheckHit, CrossCheckReport};
use tracing::{debug, info, info_span};

use crate::collect::collect_interactions;
use crate::error::Result;
use crate::source::InteractionSource;

/// Split a comma-separated drug list, trimming entries and dropping blanks.
pub fn parse_drug_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

pub struct CrossChecker<'a, S> {
    source: &'a S,
    drugs: &'a CatalogMatcher,
    names: InteractionNameMatcher,
}

impl<'a, S: InteractionSource> CrossChecker<'a, S> {
    pub fn new(source: &'a S, drugs: &'a CatalogMatcher, names: InteractionNameMatcher) -> Self {
        Self {
            source,
            drugs,
            names,
        }
    }

    /// Known interactions of each drug in `drugs` that name `prescribed`.
    ///
    /// Hits are reported in drug order, then interaction-list order.
    ///
    /// # Errors
    ///
    /// Propagates the first source failure.
    pub fn check<D: AsRef<str>>(&self, prescribed: &str, drugs: &[D]) -> Result<CrossCheckReport> {
        let span = info_span!("cross_check", drugs = drugs.len());
        let _guard = span.enter();

        let mut interactions = Vec::new();
        for drug in drugs {
            let drug = drug.as_ref();
            let set = collect_interactions(self.source, self.drugs, drug)?;
            for record in set.knowns() {
                let Some(reason) = self.names.explain(record.name(), prescribed) else {
                    continue;
                };
                debug!(?reason, "interaction names the prescribed drug");
                interactions.push(CrossCheckHit {
                    drug: drug.to_string(),
                    interaction: record.name().to_string(),
                    severity: record.severity(),
                    label: record.fragment.label.clone(),
                    professional_description: record.professional_description.clone(),
                    patient_description: record.patient_description.clone(),
                });
            }
        }

        info!(hits = interactions.len(), "cross-check complete");
        Ok(CrossCheckReport {
            prescribed_drug: prescribed.to_string(),
            interactions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_list() {
        assert_eq!(
            parse_drug_list(" aspirin, Tylenol ,, ibuprofen ,"),
            vec!["aspirin", "Tylenol", "ibuprofen"]
        );
        assert!(parse_drug_list(" , ").is_empty());
    }
}
