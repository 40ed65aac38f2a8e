//! End-to-end tests for relationship edits through the public API.
//!
//! Each test checks both directions of every edge it touches, and that a
//! failed edit leaves the graph exactly as it found it.

use pedigree_graph::{
    FamilyGraph, Gender, GraphConfig, PersonId, ReassignPolicy, RelatedPersonError,
    get_gender, genders_string_mappings, get_related_persons_name,
};

// ============================================================================
// Helpers
// ============================================================================

/// kid (NA), mom (f), dad (m), created from string codes.
fn setup_family() -> (FamilyGraph, PersonId, PersonId, PersonId) {
    let mut graph = FamilyGraph::new();
    let kid = graph.add_person_with_code("kid", "NA").unwrap();
    let mom = graph.add_person_with_code("mom", "f").unwrap();
    let dad = graph.add_person_with_code("dad", "m").unwrap();
    (graph, kid, mom, dad)
}

fn snapshot(graph: &FamilyGraph) -> Vec<String> {
    let mut lines: Vec<String> = graph
        .iter()
        .map(|p| {
            let mut children: Vec<PersonId> = p.children().iter().copied().collect();
            children.sort();
            format!("{} {:?} {:?} {:?} {:?}", p.id(), p.gender(), p.father(), p.mother(), children)
        })
        .collect();
    lines.sort();
    lines
}

// ============================================================================
// 1. Gender codes
// ============================================================================

#[test]
fn test_gender_codes() {
    assert_eq!(get_gender("Male").unwrap(), Gender::Male);
    assert_eq!(get_gender("NA").unwrap(), Gender::Unknown);

    let err = get_gender("---").unwrap_err();
    assert!(matches!(err, RelatedPersonError::UnknownGenderCode { .. }));
    assert!(genders_string_mappings().contains("'f' -> 'F'"));
}

#[test]
fn test_gender_serializes_as_label() {
    let json = serde_json::to_string(&[Gender::Male, Gender::Female, Gender::Unknown]).unwrap();
    assert_eq!(json, r#"["M","F","NA"]"#);
}

// ============================================================================
// 2. Display helpers
// ============================================================================

#[test]
fn test_get_related_persons_name() {
    let (graph, kid, _, _) = setup_family();
    assert_eq!(get_related_persons_name(Some(graph.person(kid).unwrap())), "kid");
    assert_eq!(get_related_persons_name(None), "NA");
}

#[test]
fn test_describe() {
    let (mut graph, kid, mom, dad) = setup_family();
    graph.set_father(kid, dad).unwrap();
    assert_eq!(graph.describe(kid).unwrap(), "kid (NA) father: dad, mother: NA, children: 0");

    graph.add_child(mom, kid).unwrap();
    assert_eq!(graph.describe(mom).unwrap(), "mom (F) father: NA, mother: NA, children: 1");
}

// ============================================================================
// 3. Father and mother slots
// ============================================================================

#[test]
fn test_set_and_remove_both_parents() {
    let (mut graph, kid, mom, dad) = setup_family();
    graph.set_father(kid, dad).unwrap();
    graph.set_mother(kid, mom).unwrap();

    let k = graph.person(kid).unwrap();
    assert_eq!((k.father(), k.mother()), (Some(dad), Some(mom)));
    assert!(graph.person(dad).unwrap().has_child(kid));
    assert!(graph.person(mom).unwrap().has_child(kid));

    assert_eq!(graph.remove_mother(kid).unwrap(), mom);
    assert!(!graph.person(mom).unwrap().has_child(kid));
    assert!(graph.person(kid).unwrap().mother().is_none());
    assert_eq!(graph.person(kid).unwrap().father(), Some(dad));

    assert_eq!(graph.remove_father(kid).unwrap(), dad);
    assert!(graph.person(dad).unwrap().children().is_empty());
}

#[test]
fn test_wrong_gender_parent_changes_nothing() {
    let (mut graph, kid, mom, dad) = setup_family();
    let before = snapshot(&graph);

    let err = graph.set_father(kid, mom).unwrap_err();
    assert!(err.to_string().contains("is not male"));
    let err = graph.set_mother(kid, dad).unwrap_err();
    assert!(err.to_string().contains("is not female"));
    let err = graph.set_father(kid, kid).unwrap_err();
    assert!(matches!(err, RelatedPersonError::WrongParentGender { .. }));

    assert_eq!(snapshot(&graph), before);
}

#[test]
fn test_remove_unset_parent() {
    let (mut graph, kid, _, _) = setup_family();
    let err = graph.remove_father(kid).unwrap_err();
    assert!(err.to_string().contains("father is not set and cannot be removed"));
    assert!(err.to_string().contains("as it is not set"));
    let err = graph.remove_mother(kid).unwrap_err();
    assert!(err.to_string().contains("mother is not set and cannot be removed"));
    assert!(err.to_string().contains("as it is not set"));
}

#[test]
fn test_reassign_father_replaces_back_reference() {
    let (mut graph, kid, _, dad) = setup_family();
    let stepdad = graph.add_person("stepdad", Gender::Male);

    graph.set_father(kid, dad).unwrap();
    graph.set_father(kid, stepdad).unwrap();

    assert_eq!(graph.person(kid).unwrap().father(), Some(stepdad));
    assert!(graph.person(dad).unwrap().children().is_empty());
    assert!(graph.person(stepdad).unwrap().has_child(kid));
}

#[test]
fn test_reassign_rejected_by_config() {
    let mut graph = FamilyGraph::with_config(GraphConfig { reassign: ReassignPolicy::Reject });
    let kid = graph.add_person("kid", Gender::Unknown);
    let mom = graph.add_person("mom", Gender::Female);
    let other = graph.add_person("other", Gender::Female);

    graph.add_child(mom, kid).unwrap();
    let before = snapshot(&graph);
    let err = graph.add_child(other, kid).unwrap_err();
    assert!(err.to_string().contains("already has a mother"));
    assert_eq!(snapshot(&graph), before);

    graph.remove_mother(kid).unwrap();
    graph.add_child(other, kid).unwrap();
    assert_eq!(graph.person(kid).unwrap().mother(), Some(other));
}

// ============================================================================
// 4. add_child guards
// ============================================================================

#[test]
fn test_add_child_routes_by_gender() {
    let (mut graph, kid, mom, dad) = setup_family();
    graph.add_child(dad, kid).unwrap();
    graph.add_child(mom, kid).unwrap();
    // Adding twice is a no-op.
    graph.add_child(mom, kid).unwrap();

    let k = graph.person(kid).unwrap();
    assert_eq!((k.father(), k.mother()), (Some(dad), Some(mom)));
    assert_eq!(graph.person(mom).unwrap().children().len(), 1);
}

#[test]
fn test_add_child_guards_leave_graph_unchanged() {
    let (mut graph, kid, _, dad) = setup_family();
    let grandpa = graph.add_person("grandpa", Gender::Male);
    graph.set_gender(kid, Gender::Male).unwrap();
    graph.set_father(kid, dad).unwrap();
    graph.set_father(dad, grandpa).unwrap();
    let before = snapshot(&graph);

    // Deep cycle: grandpa is two generations above kid.
    let err = graph.add_child(kid, grandpa).unwrap_err();
    assert!(err.to_string().contains("would create ancestor cycle"));

    let err = graph.add_child(dad, dad).unwrap_err();
    assert!(err.to_string().contains("cannot add him/herself as a child"));

    let unknown = graph.add_person("unknown", Gender::Unknown);
    let err = graph.add_child(unknown, kid).unwrap_err();
    assert!(matches!(err, RelatedPersonError::UnknownParentGender { .. }));
    assert!(graph.person(unknown).unwrap().children().is_empty());

    graph.remove_person(unknown).unwrap();
    assert_eq!(snapshot(&graph), before);
}

#[test]
fn test_dangling_handle() {
    let (mut graph, kid, _, _) = setup_family();
    let ghost = PersonId(999);
    assert_eq!(graph.set_father(kid, ghost).unwrap_err(), RelatedPersonError::NotFound(ghost));
    assert_eq!(graph.add_child(ghost, kid).unwrap_err(), RelatedPersonError::NotFound(ghost));
}

// ============================================================================
// 5. Lifecycle
// ============================================================================

#[test]
fn test_remove_person_clears_every_edge() {
    let (mut graph, kid, mom, dad) = setup_family();
    let sibling = graph.add_person("sibling", Gender::Female);
    for child in [kid, sibling] {
        graph.add_child(dad, child).unwrap();
        graph.add_child(mom, child).unwrap();
    }

    graph.remove_person(dad).unwrap();

    for child in [kid, sibling] {
        let c = graph.person(child).unwrap();
        assert!(c.father().is_none());
        assert_eq!(c.mother(), Some(mom));
    }
    assert_eq!(graph.person(mom).unwrap().children().len(), 2);
    assert_eq!(graph.len(), 3);
}
