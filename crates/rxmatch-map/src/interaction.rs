//! Deciding whether an interaction entry's name refers to a given drug.
//!
//! Interaction lists name the interacting product, often a combination
//! ("aspirin / dipyridamole", "Tylenol with Codeine"). A target drug counts as
//! named when, after case folding, either:
//!
//! 1. the target occurs verbatim inside the candidate, or
//! 2. some `window`-character slice of the candidate is within
//!    `inner_threshold` of the target.
//!
//! The window scan tolerates suffix and spelling differences for short targets
//! embedded in long names. The whole candidate is never compared against the
//! target, so a near-miss spelling of the full name does not count on its own.

use serde::Serialize;
use tracing::trace;

use crate::distance::{char_distance, normalized_distance};
use crate::error::Result;
use crate::normalize::FoldedName;
use crate::options::InteractionMatchOptions;

/// Which check accepted a candidate name.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NameMatch {
    /// The target occurs inside the candidate.
    Containment,
    /// The window starting at character `offset` is close to the target.
    Window {
        offset: usize,
        normalized_distance: f64,
    },
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InteractionNameMatcher {
    options: InteractionMatchOptions,
}

impl InteractionNameMatcher {
    /// # Errors
    ///
    /// Returns an error when the window is 0 or a threshold is outside `[0, 1]`.
    pub fn new(options: InteractionMatchOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn matches(&self, candidate: &str, target: &str) -> bool {
        self.explain(candidate, target).is_some()
    }

    /// The first check that accepts `candidate` as naming `target`, or `None`.
    ///
    /// An empty target names nothing.
    pub fn explain(&self, candidate: &str, target: &str) -> Option<NameMatch> {
        let candidate = FoldedName::new(candidate);
        let target = FoldedName::new(target);
        if target.is_empty() {
            return None;
        }

        if candidate.contains(&target) {
            return Some(NameMatch::Containment);
        }

        let hit = self.scan_windows(&candidate, &target);
        if hit.is_none() {
            trace!(
                candidate_len = candidate.len(),
                target_len = target.len(),
                "interaction name rejected"
            );
        }
        hit
    }

    fn scan_windows(&self, candidate: &FoldedName, target: &FoldedName) -> Option<NameMatch> {
        let width = self.options.window;
        candidate
            .windows(width)
            .enumerate()
            .find_map(|(offset, window)| {
                let d = char_distance(window, target.chars());
                let normalized = normalized_distance(d, window.len(), target.len());
                (normalized <= self.options.inner_threshold).then_some(NameMatch::Window {
                    offset,
                    normalized_distance: normalized,
                })
            })
    }
}

/// [`InteractionNameMatcher::matches`] with the default options.
pub fn matches(candidate: &str, target: &str) -> bool {
    InteractionNameMatcher::default().matches(candidate, target)
}
