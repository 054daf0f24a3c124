//! Data model shared by the rxmatch crates.
//!
//! Catalogs are immutable name → reference mappings. Interaction data moves
//! from [`RawInteractionFragment`] to [`InteractionRecord`] once long-form
//! descriptions are attached, and is grouped per drug in an [`InteractionSet`].

pub mod catalog;
pub mod error;
pub mod interaction;
pub mod report;
pub mod severity;

pub use catalog::{Catalog, CatalogEntry, CatalogMatch, MatchResult};
pub use error::{ModelError, Result};
pub use interaction::{InteractionRecord, InteractionSet, RawInteractionFragment};
pub use report::{CrossCheckHit, CrossCheckReport, MedicationResolution, ResolvedMedication};
pub use severity::{Severity, SeverityCode, SeverityTable};
