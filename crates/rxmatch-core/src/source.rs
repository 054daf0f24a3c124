//! The seam to whatever fetches interaction data.

use rxmatch_model::{CatalogEntry, RawInteractionFragment};

/// Supplier of raw interaction data for catalog drugs.
///
/// Implementations own retrieval and extraction. Description sequences are
/// positionally aligned with the `knowns` slice they were asked about; an
/// implementation that fails to fetch one entry may stop early and return a
/// shorter sequence.
pub trait InteractionSource {
    type Error: Into<Box<dyn std::error::Error + Send + Sync>>;

    /// Interaction list items for the drug `entry` refers to, in source order.
    fn fragments(&self, entry: &CatalogEntry) -> Result<Vec<RawInteractionFragment>, Self::Error>;

    /// Clinician-facing description for each fragment in `knowns`.
    fn professional_descriptions(
        &self,
        knowns: &[&RawInteractionFragment],
    ) -> Result<Vec<String>, Self::Error>;

    /// Patient-facing description for each fragment in `knowns`.
    fn patient_descriptions(
        &self,
        knowns: &[&RawInteractionFragment],
    ) -> Result<Vec<String>, Self::Error>;
}
