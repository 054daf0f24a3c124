use rxmatch_map::{
    CatalogMatcher, InteractionMatchOptions, InteractionNameMatcher, NameMatch, find_best, matches,
};
use rxmatch_model::Catalog;

fn tylenol_catalog() -> Catalog {
    Catalog::new([("Tylenol", "u1"), ("Tylenol PM", "u2")]).unwrap()
}

#[test]
fn exact_name_is_found() {
    let found = find_best("Tylenol", &tylenol_catalog(), 0.5).unwrap();
    assert_eq!((found.name(), found.reference()), ("Tylenol", "u1"));
}

#[test]
fn one_edit_typo_is_tolerated() {
    let catalog = Catalog::new([("Tylenol", "u1")]).unwrap();
    let found = find_best("Tyenol", &catalog, 0.5).unwrap();
    assert_eq!(found.name(), "Tylenol");
    assert_eq!(found.distance, 1);
}

#[test]
fn unrelated_query_is_not_found() {
    let catalog = Catalog::new([("Tylenol", "u1")]).unwrap();
    assert!(find_best("Xyz", &catalog, 0.5).is_none());
}

#[test]
fn matcher_and_free_function_agree() {
    let catalog = Catalog::new([
        ("Zocor", "z"),
        ("Zoloft", "zl"),
        ("Zofran", "zf"),
        ("Zyrtec", "zy"),
    ])
    .unwrap();
    let matcher = CatalogMatcher::with_defaults(catalog.clone());
    for query in ["zolof", "ZOFRAN", "zyrtek", "zocr", "aspirin", ""] {
        assert_eq!(matcher.find_best(query), find_best(query, &catalog, 0.5), "{query}");
    }
}

#[test]
fn lookup_is_deterministic() {
    let matcher = CatalogMatcher::with_defaults(tylenol_catalog());
    let first = matcher.find_best("tylenol p");
    for _ in 0..3 {
        assert_eq!(matcher.find_best("tylenol p"), first);
    }
    assert_eq!(first.unwrap().reference(), "u2");
}

#[test]
fn interaction_name_examples() {
    assert!(matches("Aspirin and Warfarin", "warfarin"));
    assert!(matches("Warfarinn", "warfarin"));
    assert!(!matches("ab", "warfarin"));
}

#[test]
fn combination_product_names_the_drug() {
    let matcher = InteractionNameMatcher::default();
    assert_eq!(
        matcher.explain("acetaminophen / hydrocodone", "Hydrocodone"),
        Some(NameMatch::Containment)
    );
    assert!(matches!(
        matcher.explain("Motrn / famotidine", "motrin"),
        Some(NameMatch::Window { offset: 0, .. })
    ));
}

#[test]
fn only_containment_or_a_close_window_names_the_drug() {
    let matcher = InteractionNameMatcher::default();
    for (candidate, target) in [
        ("Warfarin", "Warfarinx"),
        ("Coumadin", "Coumadine"),
        ("Lisinoprel", "lisinopril"),
    ] {
        assert_eq!(matcher.explain(candidate, target), None, "{candidate} / {target}");
    }
    // a loose containment threshold changes nothing
    let loose = InteractionNameMatcher::new(InteractionMatchOptions {
        outer_threshold: 1.0,
        ..Default::default()
    })
    .unwrap();
    assert!(!loose.matches("Warfarin", "Warfarinx"));
}
