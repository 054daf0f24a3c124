#![deny(unsafe_code)]

//! Approximate name matching under Levenshtein edit distance.
//!
//! - [`distance`]: the edit-distance primitive.
//! - [`CatalogMatcher`]: nearest catalog entry for a typed name.
//! - [`InteractionNameMatcher`]: whether an interaction entry names a drug.
//!
//! Case folding happens once per lookup in [`FoldedName`]; callers pass names
//! as typed.

mod catalog;
mod distance;
mod error;
mod interaction;
mod normalize;
mod options;

pub use catalog::{CatalogMatcher, find_best};
pub use distance::{distance, similarity};
pub use error::{MatchError, Result};
pub use interaction::{InteractionNameMatcher, NameMatch, matches};
pub use normalize::FoldedName;
pub use options::{CatalogMatchOptions, InteractionMatchOptions, MatchOptions};
