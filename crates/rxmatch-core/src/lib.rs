#![deny(unsafe_code)]

//! Interaction aggregation and the workflows built on the matchers.
//!
//! Nothing here performs I/O. Interaction lists and descriptions come from an
//! [`InteractionSource`] supplied by the caller.

pub mod aggregate;
pub mod collect;
pub mod cross_check;
pub mod error;
pub mod medications;
pub mod source;

pub use aggregate::InteractionAggregator;
pub use collect::collect_interactions;
pub use cross_check::{CrossChecker, parse_drug_list};
pub use error::{CoreError, Result};
pub use medications::{DEFAULT_MAX_MEDICATIONS, MedicationOptions, resolve_medications};
pub use source::InteractionSource;
