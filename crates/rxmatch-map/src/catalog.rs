//! Nearest-neighbour lookup of a typed name in a catalog.

use std::borrow::Borrow;

use rxmatch_model::{Catalog, CatalogEntry, CatalogMatch, MatchResult};
use tracing::debug;

use crate::distance::similarity;
use crate::error::Result;
use crate::normalize::FoldedName;
use crate::options::CatalogMatchOptions;

/// Catalog lookup with the catalog's names folded once up front.
///
/// Build one per loaded catalog and reuse it across lookups.
#[derive(Debug, Clone)]
pub struct CatalogMatcher {
    catalog: Catalog,
    folded: Vec<FoldedName>,
    options: CatalogMatchOptions,
}

impl CatalogMatcher {
    /// # Errors
    ///
    /// Returns an error when `options` is invalid.
    pub fn new(catalog: Catalog, options: CatalogMatchOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self::build(catalog, options))
    }

    /// Matcher with the default 0.5 threshold.
    pub fn with_defaults(catalog: Catalog) -> Self {
        Self::build(catalog, CatalogMatchOptions::default())
    }

    fn build(catalog: Catalog, options: CatalogMatchOptions) -> Self {
        let folded = catalog.iter().map(|e| FoldedName::new(&e.name)).collect();
        Self {
            catalog,
            folded,
            options,
        }
    }

    /// Closest entry to `query` whose similarity exceeds the threshold.
    ///
    /// Candidates are ranked by absolute edit distance; on a tie the entry
    /// declared first in the catalog wins. Returned names keep the catalog's
    /// casing.
    pub fn find_best(&self, query: &str) -> MatchResult {
        let query = FoldedName::new(query);
        select_best(
            &query,
            self.catalog.iter().zip(self.folded.iter()),
            self.options.threshold,
        )
    }
}

/// One-shot lookup of `query` in `catalog`, folding names per call.
pub fn find_best(query: &str, catalog: &Catalog, threshold: f64) -> MatchResult {
    let query = FoldedName::new(query);
    select_best(
        &query,
        catalog.iter().map(|e| (e, FoldedName::new(&e.name))),
        threshold,
    )
}

fn select_best<'c, I, F>(query: &FoldedName, candidates: I, threshold: f64) -> MatchResult
where
    I: IntoIterator<Item = (&'c CatalogEntry, F)>,
    F: Borrow<FoldedName>,
{
    if query.is_empty() {
        debug!("empty query, no catalog match");
        return None;
    }

    let mut best: Option<(&CatalogEntry, usize, f64)> = None;
    let mut scanned = 0usize;
    for (entry, name) in candidates {
        scanned += 1;
        let name = name.borrow();
        let distance = query.distance(name);
        let ratio = similarity(distance, query.len(), name.len());
        if ratio > threshold && best.is_none_or(|(_, best_distance, _)| distance < best_distance) {
            best = Some((entry, distance, ratio));
        }
    }

    match best {
        Some((entry, distance, ratio)) => {
            debug!(scanned, distance, similarity = ratio, "catalog match accepted");
            Some(CatalogMatch {
                entry: entry.clone(),
                distance,
                similarity: ratio,
            })
        }
        None => {
            debug!(scanned, threshold, "no catalog entry above threshold");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(pairs: &[(&str, &str)]) -> Catalog {
        Catalog::new(pairs.iter().copied()).unwrap()
    }

    #[test]
    fn exact_match_wins_over_longer_name() {
        let catalog = catalog(&[("Tylenol PM", "u2"), ("Tylenol", "u1")]);
        let found = find_best("Tylenol", &catalog, 0.5).unwrap();
        assert_eq!(found.name(), "Tylenol");
        assert_eq!(found.reference(), "u1");
        assert_eq!(found.distance, 0);
        assert_eq!(found.similarity, 1.0);
    }

    #[test]
    fn tie_goes_to_first_declared_entry() {
        // both are one substitution away from "abc"
        let catalog = catalog(&[("abd", "first"), ("abe", "second")]);
        let found = find_best("abc", &catalog, 0.5).unwrap();
        assert_eq!(found.reference(), "first");
    }

    #[test]
    fn threshold_is_strict() {
        // "ab" vs "ax": distance 1, ratio exactly 0.5
        let catalog = catalog(&[("ax", "u1")]);
        assert!(find_best("ab", &catalog, 0.5).is_none());
        assert!(find_best("ab", &catalog, 0.49).is_some());
    }

    #[test]
    fn folds_case_but_returns_catalog_casing() {
        let matcher = CatalogMatcher::with_defaults(catalog(&[("Lipitor", "u1")]));
        let found = matcher.find_best("LIPITOR").unwrap();
        assert_eq!(found.name(), "Lipitor");
        assert_eq!(found.distance, 0);
    }

    #[test]
    fn empty_query_and_catalog_yield_no_match() {
        let matcher = CatalogMatcher::with_defaults(catalog(&[("Lipitor", "u1")]));
        assert!(matcher.find_best("").is_none());
        let empty = CatalogMatcher::with_defaults(Catalog::default());
        assert!(empty.find_best("Lipitor").is_none());
    }

    #[test]
    fn defaults_match_explicit_default_options() {
        let pairs = catalog(&[("Lipitor", "u1"), ("Lopid", "u2")]);
        let defaults = CatalogMatcher::with_defaults(pairs.clone());
        let explicit = CatalogMatcher::new(pairs, CatalogMatchOptions::default()).unwrap();
        for query in ["lipitr", "LOPID", "xyz"] {
            assert_eq!(defaults.find_best(query), explicit.find_best(query), "{query}");
        }
    }

    #[test]
    fn rejects_invalid_threshold() {
        let result = CatalogMatcher::new(
            catalog(&[("Lipitor", "u1")]),
            CatalogMatchOptions { threshold: -0.1 },
        );
        assert!(result.is_err());
    }
}
