// tests/integration_compile.rs
//! End-to-end compiles against a real on-disk corpus.

use std::fs;
use std::path::Path;

use lattice_core::compiler;
use lattice_core::config::Config;
use lattice_core::error::LatticeError;
use lattice_core::registry::Registry;

fn write(path: &Path, body: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, body).unwrap();
}

fn seed_corpus(root: &Path) {
    write(
        &root.join("entities/miri.json"),
        r#"{
            "slug": "miri",
            "type": "organization",
            "title": "MIRI",
            "tags": ["alignment"],
            "declaredRelations": [{"id": "deceptive-alignment", "relationship": "researches"}]
        }"#,
    );
    write(
        &root.join("entities/deceptive-alignment.json"),
        r#"{
            "slug": "deceptive-alignment",
            "type": "risk",
            "title": "Deceptive Alignment",
            "tags": ["alignment"]
        }"#,
    );
    write(
        &root.join("entities/anthropic.json"),
        r#"{"slug": "anthropic", "type": "organization", "title": "Anthropic"}"#,
    );
    write(
        &root.join("entities/anthropic-ipo.json"),
        r#"{"slug": "anthropic-ipo", "type": "concept", "title": "Anthropic IPO"}"#,
    );
    write(
        &root.join("pages/deceptive-alignment.json"),
        r#"{
            "slug": "deceptive-alignment",
            "category": "risks",
            "quality": 80,
            "importance": 90,
            "body": "See [[miri]] for the research group."
        }"#,
    );
}

fn config_for(root: &Path) -> Config {
    Config::new(
        root.to_path_buf(),
        root.join("build"),
        root.join("registry.json"),
    )
}

#[test]
fn first_run_assigns_second_run_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    seed_corpus(dir.path());
    let config = config_for(dir.path());

    let first = compiler::run(&config).unwrap();
    // Four entities, scan order sorted by file path.
    assert_eq!(first.stats.assigned.len(), 4);
    assert_eq!(first.registry.next_id, 5);
    // Scan order sorts file paths bytewise: "anthropic-ipo.json" precedes
    // "anthropic.json" ('-' < '.').
    assert_eq!(
        first.registry.entities.get("E1").map(String::as_str),
        Some("anthropic-ipo")
    );
    assert_eq!(
        first.registry.entities.get("E4").map(String::as_str),
        Some("miri")
    );

    // Fresh ids were written back into the record files.
    let raw = fs::read_to_string(dir.path().join("entities/miri.json")).unwrap();
    assert!(raw.contains("numericId"));

    // The registry file round-trips.
    assert_eq!(Registry::load(&dir.path().join("registry.json")), first.registry);

    let second = compiler::run(&config).unwrap();
    assert!(second.stats.assigned.is_empty());
    assert_eq!(second.registry, first.registry);
    assert_eq!(second.graph, first.graph);
}

#[test]
fn artifacts_land_in_the_output_directory() {
    let dir = tempfile::tempdir().unwrap();
    seed_corpus(dir.path());
    let config = config_for(dir.path());
    compiler::run(&config).unwrap();

    for artifact in ["graph.json", "backlinks.json", "tags.json"] {
        assert!(
            dir.path().join("build").join(artifact).exists(),
            "missing {artifact}"
        );
    }
}

#[test]
fn graph_carries_the_expected_relationships() {
    let dir = tempfile::tempdir().unwrap();
    seed_corpus(dir.path());
    let config = config_for(dir.path());
    let output = compiler::run(&config).unwrap();

    let miri_id = output
        .registry
        .entities
        .iter()
        .find(|(_, slug)| *slug == "miri")
        .map(|(id, _)| id.clone())
        .unwrap();
    let da_id = output
        .registry
        .entities
        .iter()
        .find(|(_, slug)| *slug == "deceptive-alignment")
        .map(|(id, _)| id.clone())
        .unwrap();

    let miri_neighbors = &output.graph.0[&miri_id];
    let da_entry = miri_neighbors.iter().find(|n| n.id == da_id).unwrap();
    assert_eq!(da_entry.label.as_deref(), Some("researches"));

    // The reverse edge exists but carries no auto-label ("researches" has no
    // defined inverse).
    let da_neighbors = &output.graph.0[&da_id];
    let miri_entry = da_neighbors.iter().find(|n| n.id == miri_id).unwrap();
    assert_eq!(miri_entry.label, None);

    // Prefix affinity relates the anthropic pair symmetrically.
    let anthropic_id = output
        .registry
        .entities
        .iter()
        .find(|(_, slug)| *slug == "anthropic")
        .map(|(id, _)| id.clone())
        .unwrap();
    assert!(output.graph.0.contains_key(&anthropic_id));
}

#[test]
fn id_conflicts_abort_before_any_write() {
    let dir = tempfile::tempdir().unwrap();
    write(
        &dir.path().join("entities/a.json"),
        r#"{"slug": "a", "numericId": "E1", "type": "concept", "title": "A"}"#,
    );
    write(
        &dir.path().join("entities/b.json"),
        r#"{"slug": "b", "numericId": "E1", "type": "concept", "title": "B"}"#,
    );
    let config = config_for(dir.path());

    let err = compiler::run(&config).unwrap_err();
    assert!(matches!(err, LatticeError::IdConflict(_)));
    // Nothing was persisted.
    assert!(!dir.path().join("registry.json").exists());
    assert!(!dir.path().join("build").exists());
}

#[test]
fn reassignment_aborts_unless_acknowledged() {
    let dir = tempfile::tempdir().unwrap();
    write(
        &dir.path().join("entities/acme-labs.json"),
        r#"{"slug": "acme-labs", "numericId": "E42", "type": "organization", "title": "Acme Labs"}"#,
    );
    write(
        &dir.path().join("registry.json"),
        r#"{"nextId": 43, "entities": {"E42": "acme-corp"}}"#,
    );

    let mut config = config_for(dir.path());
    let err = compiler::run(&config).unwrap_err();
    assert!(matches!(err, LatticeError::Reassignment(_)));
    // The previous registry survives a failed run.
    let registry = Registry::load(&dir.path().join("registry.json"));
    assert_eq!(registry.entities.get("E42").map(String::as_str), Some("acme-corp"));

    config.allow_reassignment = true;
    let output = compiler::run(&config).unwrap();
    assert_eq!(output.stats.reassigned.len(), 1);
    assert_eq!(
        output.registry.entities.get("E42").map(String::as_str),
        Some("acme-labs")
    );
}

#[test]
fn similarity_report_feeds_the_graph_when_present() {
    let dir = tempfile::tempdir().unwrap();
    write(
        &dir.path().join("entities/alpha.json"),
        r#"{"slug": "alpha", "type": "concept", "title": "Alpha"}"#,
    );
    write(
        &dir.path().join("entities/beta.json"),
        r#"{"slug": "beta", "type": "concept", "title": "Beta"}"#,
    );
    write(
        &dir.path().join("similarity.json"),
        r#"{"alpha": [{"id": "beta", "similarityPercent": 90}]}"#,
    );

    let mut config = config_for(dir.path());
    config.similarity_path = Some(dir.path().join("similarity.json"));
    let output = compiler::run(&config).unwrap();

    // 0.9 * 3 = 2.7 raw, boosted by defaults to 3.38.
    let alpha_id = output
        .registry
        .entities
        .iter()
        .find(|(_, slug)| *slug == "alpha")
        .map(|(id, _)| id.clone())
        .unwrap();
    assert_eq!(output.graph.0[&alpha_id][0].score, 3.38);
}

#[test]
fn tuning_file_overrides_selection_limits() {
    let dir = tempfile::tempdir().unwrap();
    seed_corpus(dir.path());
    write(
        &dir.path().join("lattice.toml"),
        "[graph]\nmax_per_entity = 1\n",
    );

    let mut config = config_for(dir.path());
    config.load_tuning().unwrap();
    assert_eq!(config.tuning.max_per_entity, 1);

    let output = compiler::run(&config).unwrap();
    for neighbors in output.graph.0.values() {
        assert!(neighbors.len() <= 1);
    }
}
