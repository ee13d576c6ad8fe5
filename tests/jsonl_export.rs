use std::fs;

use npc_gen::flush::export_population;
use npc_gen::testutil::MemoryStore;
use npc_gen::{GenerationConfig, Npc, generate_population};

fn line_count(dir: &std::path::Path, file: &str) -> usize {
    fs::read_to_string(dir.join(file))
        .unwrap_or_else(|e| panic!("reading {file}: {e}"))
        .lines()
        .count()
}

#[tokio::test]
async fn export_writes_one_line_per_record() {
    let mut store = MemoryStore::new();
    let config = GenerationConfig {
        population_size: 20,
        seed: 42,
        ..GenerationConfig::default()
    };
    let report = generate_population(&mut store, 7, &config).await.unwrap();

    let dir = tempfile::tempdir().unwrap();
    export_population(&store, 7, dir.path()).await.unwrap();

    assert_eq!(line_count(dir.path(), "locations.jsonl"), report.locations);
    assert_eq!(
        line_count(dir.path(), "organizations.jsonl"),
        report.organizations
    );
    assert_eq!(line_count(dir.path(), "npcs.jsonl"), report.npcs);
    assert_eq!(
        line_count(dir.path(), "memberships.jsonl"),
        report.memberships
    );
    assert_eq!(
        line_count(dir.path(), "relationships.jsonl"),
        report.relationships
    );
    assert_eq!(line_count(dir.path(), "generation_records.jsonl"), 1);
}

#[tokio::test]
async fn exported_npcs_parse_back() {
    let mut store = MemoryStore::new();
    let config = GenerationConfig {
        population_size: 5,
        seed: 9,
        ..GenerationConfig::default()
    };
    generate_population(&mut store, 7, &config).await.unwrap();

    let dir = tempfile::tempdir().unwrap();
    export_population(&store, 7, dir.path()).await.unwrap();

    let contents = fs::read_to_string(dir.path().join("npcs.jsonl")).unwrap();
    let parsed: Vec<Npc> = contents
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(parsed.len(), 5);
    for npc in &parsed {
        assert_eq!(npc.world_id, 7);
        assert!(!npc.name.is_empty());
    }
}

#[tokio::test]
async fn export_of_empty_world_writes_empty_files() {
    let store = MemoryStore::new();
    let dir = tempfile::tempdir().unwrap();
    export_population(&store, 99, dir.path()).await.unwrap();

    assert_eq!(line_count(dir.path(), "npcs.jsonl"), 0);
    assert_eq!(line_count(dir.path(), "locations.jsonl"), 0);
}
