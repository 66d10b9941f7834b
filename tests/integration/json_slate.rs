//! JSON slate loading feeding the ranker.

use std::path::PathBuf;

use parlay_ranker::slate::{load_slate, JsonSlate, PropSource, SampleSlate};
use parlay_ranker::{rank_parlays, RankConfig};

fn temp_path() -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("parlay_slate_{}.json", uuid::Uuid::new_v4()));
    p
}

#[test]
fn test_json_slate_ranks_like_sample() {
    let path = temp_path();
    let props = SampleSlate::props();
    std::fs::write(&path, serde_json::to_string_pretty(&props).unwrap()).unwrap();

    let source = JsonSlate::new(&path);
    let loaded = load_slate(&source).unwrap();

    let config = RankConfig::default();
    assert_eq!(rank_parlays(&loaded, &config), rank_parlays(&props, &config));

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_json_slate_rejects_bad_odds() {
    let path = temp_path();
    let mut props = SampleSlate::props();
    props[3].odds_american = -40;
    std::fs::write(&path, serde_json::to_string(&props).unwrap()).unwrap();

    let err = JsonSlate::new(&path).load().unwrap_err();
    assert!(format!("{err:#}").contains("Invalid American odds: -40"));

    std::fs::remove_file(&path).unwrap();
}
