//! Collecting the full interaction set for one drug.

use rxmatch_map::CatalogMatcher;
use rxmatch_model::InteractionSet;
use tracing::{info, info_span, warn};

use crate::aggregate::InteractionAggregator;
use crate::error::{CoreError, Result};
use crate::source::InteractionSource;

/// Resolve `drug` in the drug catalog and assemble its interaction set.
///
/// A drug that matches no catalog entry has no interactions; this is not an
/// error. Descriptions are requested only for the known partition.
///
/// # Errors
///
/// Returns [`CoreError::Source`] when the source fails.
pub fn collect_interactions<S>(source: &S, drugs: &CatalogMatcher, drug: &str) -> Result<InteractionSet>
where
    S: InteractionSource,
{
    let span = info_span!("collect_interactions");
    let _guard = span.enter();

    let Some(found) = drugs.find_best(drug) else {
        warn!("drug not found in catalog, no interactions collected");
        return Ok(InteractionSet::default());
    };

    let fragments = source
        .fragments(&found.entry)
        .map_err(|e| CoreError::from_source(drug, e))?;
    let set = InteractionSet::from_fragments(fragments);

    let (professional, patient) = {
        let knowns = set.known_fragments();
        let professional = source
            .professional_descriptions(&knowns)
            .map_err(|e| CoreError::from_source(drug, e))?;
        let patient = source
            .patient_descriptions(&knowns)
            .map_err(|e| CoreError::from_source(drug, e))?;
        (professional, patient)
    };

    let set = InteractionAggregator::new().describe(set, professional, patient);
    info!(
        interactions = set.len(),
        knowns = set.known_count(),
        unknowns = set.unknown_count(),
        "collected interactions"
    );
    Ok(set)
}
