//! Drug interaction fragments, records, and per-drug interaction sets.

use serde::{Deserialize, Serialize};

use crate::severity::Severity;

/// An interaction list item as handed over by the upstream source, before
/// any long-form description is attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInteractionFragment {
    /// Display name of the interacting drug or drug combination.
    pub name: String,
    /// Locator of the interaction detail page.
    #[serde(rename = "url")]
    pub reference: String,
    #[serde(rename = "severity_level")]
    pub severity: Severity,
    /// Human label for `severity` taken from the severity table.
    #[serde(rename = "severity")]
    pub label: String,
}

impl RawInteractionFragment {
    /// Fragment labelled with the severity's default label.
    pub fn new(name: impl Into<String>, reference: impl Into<String>, severity: Severity) -> Self {
        Self {
            name: name.into(),
            reference: reference.into(),
            severity,
            label: severity.default_label().to_string(),
        }
    }

    pub fn is_known(&self) -> bool {
        self.severity.is_known()
    }
}

/// A fragment plus its optional professional and patient descriptions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionRecord {
    #[serde(flatten)]
    pub fragment: RawInteractionFragment,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub professional_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_description: Option<String>,
}

impl InteractionRecord {
    pub fn name(&self) -> &str {
        &self.fragment.name
    }

    pub fn severity(&self) -> Severity {
        self.fragment.severity
    }

    /// True only when both descriptions are present.
    pub fn is_complete(&self) -> bool {
        self.professional_description.is_some() && self.patient_description.is_some()
    }
}

impl From<RawInteractionFragment> for InteractionRecord {
    fn from(fragment: RawInteractionFragment) -> Self {
        Self {
            fragment,
            professional_description: None,
            patient_description: None,
        }
    }
}

/// All interaction records for one drug, in upstream order.
///
/// The known/unknown partition is decided from each fragment's severity when
/// the set is built and is never recomputed: editing a record through
/// [`InteractionSet::record_mut`] leaves its partition membership as it was.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InteractionSet {
    #[serde(rename = "interactions")]
    records: Vec<InteractionRecord>,
    #[serde(skip)]
    knowns: Vec<usize>,
    #[serde(skip)]
    unknowns: Vec<usize>,
}

impl InteractionSet {
    pub fn from_fragments(fragments: Vec<RawInteractionFragment>) -> Self {
        let mut knowns = Vec::new();
        let mut unknowns = Vec::new();
        for (index, fragment) in fragments.iter().enumerate() {
            if fragment.is_known() {
                knowns.push(index);
            } else {
                unknowns.push(index);
            }
        }
        Self {
            records: fragments.into_iter().map(InteractionRecord::from).collect(),
            knowns,
            unknowns,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Every record in upstream order, knowns and unknowns interleaved.
    pub fn records(&self) -> &[InteractionRecord] {
        &self.records
    }

    pub fn record_mut(&mut self, index: usize) -> Option<&mut InteractionRecord> {
        self.records.get_mut(index)
    }

    pub fn known_count(&self) -> usize {
        self.knowns.len()
    }

    pub fn unknown_count(&self) -> usize {
        self.unknowns.len()
    }

    pub fn knowns(&self) -> impl Iterator<Item = &InteractionRecord> {
        self.knowns.iter().map(|&index| &self.records[index])
    }

    pub fn unknowns(&self) -> impl Iterator<Item = &InteractionRecord> {
        self.unknowns.iter().map(|&index| &self.records[index])
    }

    /// Mutable access to the known partition, in order.
    pub fn knowns_mut(&mut self) -> impl Iterator<Item = &mut InteractionRecord> {
        let knowns = &self.knowns;
        self.records
            .iter_mut()
            .enumerate()
            .filter(move |(index, _)| knowns.binary_search(index).is_ok())
            .map(|(_, record)| record)
    }

    /// The fragments of the known partition, for fetching their descriptions.
    pub fn known_fragments(&self) -> Vec<&RawInteractionFragment> {
        self.knowns().map(|record| &record.fragment).collect()
    }
}
