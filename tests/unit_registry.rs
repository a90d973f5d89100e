// tests/unit_registry.rs
//! Identifier registry: claims, conflicts, assignment, and stability.

use lattice_core::corpus::Corpus;
use lattice_core::error::LatticeError;
use lattice_core::registry::{
    assign_missing, collect_claims, compute_next_id, detect_reassignment, Registry,
};
use lattice_core::types::{Entity, Kind, Page};

fn entity(slug: &str, id: Option<&str>) -> Entity {
    Entity {
        slug: slug.to_string(),
        numeric_id: id.map(String::from),
        kind: Kind::Concept,
        title: slug.to_string(),
        tags: Vec::new(),
        declared_relations: Vec::new(),
        last_updated: None,
    }
}

fn page(slug: &str, id: Option<&str>) -> Page {
    Page {
        slug: slug.to_string(),
        numeric_id: id.map(String::from),
        category: None,
        quality: None,
        importance: None,
        subcategory: None,
        body: None,
    }
}

#[test]
fn claims_are_bidirectional() {
    let corpus = Corpus::in_memory(vec![entity("alpha", Some("E7"))], Vec::new());
    let claims = collect_claims(&corpus).unwrap();
    assert_eq!(claims.id_to_slug.get("E7").map(String::as_str), Some("alpha"));
    assert_eq!(claims.id_for("alpha"), Some("E7"));
}

#[test]
fn conflicting_claims_are_fatal_and_exhaustive() {
    let corpus = Corpus::in_memory(
        vec![
            entity("alpha", Some("E1")),
            entity("beta", Some("E1")),
            entity("gamma", Some("E2")),
            entity("delta", Some("E2")),
        ],
        Vec::new(),
    );
    let err = collect_claims(&corpus).unwrap_err();
    let LatticeError::IdConflict(conflicts) = err else {
        panic!("expected IdConflict, got {err}");
    };
    // Both conflicts reported in one pass, not just the first.
    assert_eq!(conflicts.len(), 2);
    assert_eq!(conflicts[0].id, "E1");
    assert_eq!(conflicts[0].slugs, vec!["alpha", "beta"]);
    assert_eq!(conflicts[1].id, "E2");
}

#[test]
fn page_backing_an_entity_defers_to_it() {
    // The page repeats the entity's id; not a conflict.
    let corpus = Corpus::in_memory(
        vec![entity("alpha", Some("E1"))],
        vec![page("alpha", Some("E1"))],
    );
    let claims = collect_claims(&corpus).unwrap();
    assert_eq!(claims.id_for("alpha"), Some("E1"));
}

#[test]
fn next_id_exceeds_every_observed_suffix() {
    let corpus = Corpus::in_memory(
        vec![entity("alpha", Some("E3")), entity("beta", Some("E41"))],
        Vec::new(),
    );
    let claims = collect_claims(&corpus).unwrap();
    assert_eq!(compute_next_id(&claims, &Registry::empty()), 42);
}

#[test]
fn next_id_respects_retired_registry_entries() {
    // E9's record was deleted from the corpus; its id must stay retired.
    let corpus = Corpus::in_memory(vec![entity("alpha", Some("E3"))], Vec::new());
    let claims = collect_claims(&corpus).unwrap();
    let mut previous = Registry::empty();
    previous
        .entities
        .insert("E9".to_string(), "deleted".to_string());
    assert_eq!(compute_next_id(&claims, &previous), 10);
}

#[test]
fn assigns_in_scan_order_entities_first() {
    // Empty registry, three unassigned records.
    let mut corpus = Corpus::in_memory(
        vec![entity("alpha", None), entity("beta", None)],
        vec![page("standalone", None)],
    );
    let mut claims = collect_claims(&corpus).unwrap();
    let mut next = compute_next_id(&claims, &Registry::empty());
    assert_eq!(next, 1);

    let assigned = assign_missing(&mut corpus, &mut claims, &mut next).unwrap();
    let ids: Vec<&str> = assigned.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["E1", "E2", "E3"]);
    assert_eq!(next, 4);
    assert_eq!(corpus.entities[0].numeric_id.as_deref(), Some("E1"));
    assert_eq!(corpus.pages[0].numeric_id.as_deref(), Some("E3"));

    // Second pass assigns nothing: idempotence.
    let again = assign_missing(&mut corpus, &mut claims, &mut next).unwrap();
    assert!(again.is_empty());
    assert_eq!(next, 4);
}

#[test]
fn page_sharing_entity_slug_inherits_its_id() {
    let mut corpus = Corpus::in_memory(
        vec![entity("alpha", Some("E5"))],
        vec![page("alpha", None)],
    );
    let mut claims = collect_claims(&corpus).unwrap();
    let mut next = compute_next_id(&claims, &Registry::empty());
    let assigned = assign_missing(&mut corpus, &mut claims, &mut next).unwrap();
    assert!(assigned.is_empty());
    assert_eq!(corpus.pages[0].numeric_id.as_deref(), Some("E5"));
}

#[test]
fn reassignment_is_fatal_by_default() {
    // Registry says E42 -> acme-corp; the corpus now claims E42 for acme-labs.
    let corpus = Corpus::in_memory(vec![entity("acme-labs", Some("E42"))], Vec::new());
    let claims = collect_claims(&corpus).unwrap();
    let mut previous = Registry::empty();
    previous
        .entities
        .insert("E42".to_string(), "acme-corp".to_string());

    let err = detect_reassignment(&previous, &claims, false).unwrap_err();
    let LatticeError::Reassignment(moved) = err else {
        panic!("expected Reassignment, got {err}");
    };
    assert_eq!(moved.len(), 1);
    assert_eq!(moved[0].id, "E42");
    assert_eq!(moved[0].previous_slug, "acme-corp");
    assert_eq!(moved[0].current_slug, "acme-labs");
}

#[test]
fn reassignment_override_reports_without_aborting() {
    let corpus = Corpus::in_memory(vec![entity("acme-labs", Some("E42"))], Vec::new());
    let claims = collect_claims(&corpus).unwrap();
    let mut previous = Registry::empty();
    previous
        .entities
        .insert("E42".to_string(), "acme-corp".to_string());

    let moved = detect_reassignment(&previous, &claims, true).unwrap();
    assert_eq!(moved.len(), 1);
}

#[test]
fn retired_ids_are_not_reassignments() {
    let corpus = Corpus::in_memory(vec![entity("alpha", Some("E1"))], Vec::new());
    let claims = collect_claims(&corpus).unwrap();
    let mut previous = Registry::empty();
    previous.entities.insert("E1".to_string(), "alpha".to_string());
    previous.entities.insert("E2".to_string(), "gone".to_string());

    let moved = detect_reassignment(&previous, &claims, false).unwrap();
    assert!(moved.is_empty());
}

#[test]
fn missing_or_corrupt_registry_resets_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("registry.json");
    assert_eq!(Registry::load(&missing), Registry::empty());

    let corrupt = dir.path().join("corrupt.json");
    std::fs::write(&corrupt, "{ not json").unwrap();
    assert_eq!(Registry::load(&corrupt), Registry::empty());
}

#[test]
fn persist_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("registry.json");

    let mut registry = Registry::empty();
    registry.next_id = 4;
    registry.entities.insert("E1".to_string(), "alpha".to_string());
    registry.entities.insert("E3".to_string(), "beta".to_string());
    registry.persist(&path).unwrap();

    assert_eq!(Registry::load(&path), registry);
    // Atomic write leaves no temp file behind.
    assert!(!dir.path().join("registry.json.tmp").exists());
}
