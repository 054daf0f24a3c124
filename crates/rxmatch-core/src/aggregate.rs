//! Merging interaction fragments with their fetched descriptions.

use rxmatch_model::{InteractionRecord, InteractionSet, RawInteractionFragment};
use tracing::{debug, warn};

/// Builds [`InteractionSet`]s from fragments and description sequences.
///
/// Descriptions pair index-for-index with the known partition. Pairing stops
/// at the shorter side: known records past the end of a description sequence
/// keep no description, and surplus descriptions are dropped. Unknown
/// records never receive descriptions.
#[derive(Debug, Clone, Copy, Default)]
pub struct InteractionAggregator;

impl InteractionAggregator {
    pub fn new() -> Self {
        Self
    }

    pub fn build<P, Q>(
        &self,
        fragments: Vec<RawInteractionFragment>,
        professional_descriptions: P,
        patient_descriptions: Q,
    ) -> InteractionSet
    where
        P: IntoIterator<Item = String>,
        Q: IntoIterator<Item = String>,
    {
        self.describe(
            InteractionSet::from_fragments(fragments),
            professional_descriptions,
            patient_descriptions,
        )
    }

    /// Attach descriptions to the known partition of an existing set.
    pub fn describe<P, Q>(
        &self,
        mut set: InteractionSet,
        professional_descriptions: P,
        patient_descriptions: Q,
    ) -> InteractionSet
    where
        P: IntoIterator<Item = String>,
        Q: IntoIterator<Item = String>,
    {
        let knowns = set.known_count();
        let professional = pair(&mut set, professional_descriptions, |record, text| {
            record.professional_description = Some(text);
        });
        let patient = pair(&mut set, patient_descriptions, |record, text| {
            record.patient_description = Some(text);
        });

        if professional < knowns || patient < knowns {
            warn!(
                knowns,
                professional, patient, "description sequences shorter than known interactions"
            );
        } else {
            debug!(knowns, "all known interactions described");
        }
        set
    }
}

fn pair<I, F>(set: &mut InteractionSet, descriptions: I, mut assign: F) -> usize
where
    I: IntoIterator<Item = String>,
    F: FnMut(&mut InteractionRecord, String),
{
    let mut paired = 0;
    for (record, text) in set.knowns_mut().zip(descriptions) {
        assign(record, text);
        paired += 1;
    }
    paired
}

#[cfg(test)]
mod tests {
    use rxmatch_model::Severity;

    use super::*;

    fn fragment(name: &str, severity: Severity) -> RawInteractionFragment {
        RawInteractionFragment::new(name, format!("https://example.test/{name}"), severity)
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn short_patient_sequence_leaves_partial_record() {
        let set = InteractionAggregator::new().build(
            vec![
                fragment("aspirin", Severity::Major),
                fragment("vitamin e", Severity::Unknown),
                fragment("ibuprofen", Severity::Moderate),
            ],
            strings(&["pro aspirin", "pro ibuprofen"]),
            strings(&["patient aspirin"]),
        );

        let knowns: Vec<_> = set.knowns().collect();
        assert_eq!(knowns.len(), 2);
        assert!(knowns[0].is_complete());
        assert_eq!(knowns[0].patient_description.as_deref(), Some("patient aspirin"));
        assert_eq!(
            knowns[1].professional_description.as_deref(),
            Some("pro ibuprofen")
        );
        assert!(knowns[1].patient_description.is_none());
        assert!(!knowns[1].is_complete());

        let unknown = set.unknowns().next().unwrap();
        assert!(unknown.professional_description.is_none());
        assert!(unknown.patient_description.is_none());
    }

    #[test]
    fn surplus_descriptions_are_ignored() {
        let set = InteractionAggregator::new().build(
            vec![fragment("aspirin", Severity::Minor)],
            strings(&["one", "two"]),
            strings(&["one", "two", "three"]),
        );
        assert_eq!(set.len(), 1);
        assert!(set.records()[0].is_complete());
    }

    #[test]
    fn no_fragments_builds_empty_set() {
        let set = InteractionAggregator::new().build(Vec::new(), strings(&["x"]), Vec::new());
        assert!(set.is_empty());
    }

    #[test]
    fn descriptions_follow_known_order_not_list_order() {
        let set = InteractionAggregator::new().build(
            vec![
                fragment("a", Severity::Unknown),
                fragment("b", Severity::Major),
                fragment("c", Severity::Unknown),
                fragment("d", Severity::Minor),
            ],
            strings(&["pro b", "pro d"]),
            strings(&["patient b", "patient d"]),
        );
        let records = set.records();
        assert_eq!(records[1].professional_description.as_deref(), Some("pro b"));
        assert_eq!(records[3].patient_description.as_deref(), Some("patient d"));
        assert!(records[0].professional_description.is_none());
        assert!(records[2].patient_description.is_none());
    }
}
