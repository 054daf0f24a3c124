use proptest::prelude::*;

use rxmatch_model::{
    Catalog, InteractionRecord, InteractionSet, RawInteractionFragment, Severity, SeverityTable,
};

fn severity_strategy() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Major),
        Just(Severity::Moderate),
        Just(Severity::Minor),
        Just(Severity::Unknown),
    ]
}

proptest! {
    #[test]
    fn partition_covers_every_fragment_once(severities in proptest::collection::vec(severity_strategy(), 0..24)) {
        let fragments: Vec<RawInteractionFragment> = severities
            .iter()
            .enumerate()
            .map(|(i, &severity)| RawInteractionFragment::new(format!("drug{i}"), format!("/{i}"), severity))
            .collect();
        let set = InteractionSet::from_fragments(fragments.clone());

        prop_assert_eq!(set.known_count() + set.unknown_count(), fragments.len());
        prop_assert!(set.knowns().all(|r| r.severity().is_known()));
        prop_assert!(set.unknowns().all(|r| !r.severity().is_known()));

        let mut names: Vec<&str> = set.knowns().chain(set.unknowns()).map(InteractionRecord::name).collect();
        names.sort_unstable();
        let mut expected: Vec<&str> = fragments.iter().map(|f| f.name.as_str()).collect();
        expected.sort_unstable();
        prop_assert_eq!(names, expected);
    }
}

#[test]
fn catalog_round_trips_through_json() {
    let catalog = Catalog::new([("Tylenol", "u1"), ("Advil", "u2")]).unwrap();
    let json = serde_json::to_string(&catalog).unwrap();
    let parsed: Catalog = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, catalog);
}

#[test]
fn severity_table_is_configurable_from_json() {
    let json = r#"{"codes": [
        {"code": "int_3", "severity": "major", "label": "Severe"},
        {"code": "int_0", "severity": "unknown", "label": "Unknown"}
    ]}"#;
    let table: SeverityTable = serde_json::from_str(json).unwrap();
    let fragment = table.fragment("Coumadin", "/c", "int_3").unwrap();
    assert_eq!(fragment.label, "Severe");
    assert!(table.fragment("Coumadin", "/c", "int_2").is_none());
}
