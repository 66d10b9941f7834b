//! Invariant checks over the sample slate and synthetic slates.
//!
//! Every ranked output must be same-sport, positive-EV, within the leg
//! bounds, densely ranked and EV-sorted, and no longer than `top_n`.

use parlay_ranker::slate::SampleSlate;
use parlay_ranker::strategy::combinations::{combination_count, total_combinations};
use parlay_ranker::types::{PropMarket, Selection, Sport};
use parlay_ranker::{rank_parlays, ParlayRanker, PlayerProp, RankConfig, RankedParlay, RiskTier};

fn prop(id: &str, sport: Sport, odds: i32, prob: f64) -> PlayerProp {
    PlayerProp {
        id: id.to_string(),
        sport,
        player: format!("Player {id}"),
        team: "HOM".to_string(),
        opponent: "AWY".to_string(),
        market: PropMarket::Points,
        selection: Selection::Over,
        line: 10.5,
        odds_american: odds,
        implied_probability: prob,
    }
}

/// Deterministic mixed slate with a spread of prices and probabilities.
fn synthetic_slate(n: usize) -> Vec<PlayerProp> {
    let prices = [-140, -125, -110, -105, 100, 110, 125, 150];
    (0..n)
        .map(|i| {
            let sport = if i % 3 == 0 { Sport::Nhl } else { Sport::Nba };
            let odds = prices[i % prices.len()];
            let prob = 0.35 + 0.03 * (i % 9) as f64;
            prop(&format!("s{i}"), sport, odds, prob)
        })
        .collect()
}

fn assert_invariants(parlays: &[RankedParlay], config: &RankConfig) {
    assert!(parlays.len() <= config.top_n);
    for (i, p) in parlays.iter().enumerate() {
        assert_eq!(p.rank, i + 1, "ranks must be dense from 1");
        assert!(p.expected_value_pct > 0.0);
        assert!(p.legs.len() >= 2 && p.legs.len() <= config.max_legs);
        assert!(p.is_same_sport());
        assert!(p.suggested_stake >= 0.0 && p.suggested_stake <= 5.0 + 1e-9);

        let joined: Vec<&str> = p.legs.iter().map(|l| l.prop.id.as_str()).collect();
        assert_eq!(p.id, joined.join("-"));
    }
    for pair in parlays.windows(2) {
        assert!(pair[0].expected_value_pct >= pair[1].expected_value_pct);
    }
}

#[test]
fn test_sample_slate_invariants() {
    let slate = SampleSlate::props();
    for max_legs in 2..=4 {
        for top_n in [1, 5, 8, 50] {
            let config = RankConfig { max_legs, top_n };
            assert_invariants(&rank_parlays(&slate, &config), &config);
        }
    }
}

#[test]
fn test_synthetic_slate_invariants() {
    let slate = synthetic_slate(14);
    let config = RankConfig { max_legs: 4, top_n: 25 };
    let parlays = rank_parlays(&slate, &config);
    assert!(!parlays.is_empty());
    assert_invariants(&parlays, &config);
}

#[test]
fn test_sample_slate_default_page() {
    let parlays = rank_parlays(&SampleSlate::props(), &RankConfig::default());
    assert_eq!(parlays.len(), 8);
    // Three strong legs beat any pair on this slate.
    assert_eq!(parlays[0].legs.len(), 3);
}

#[test]
fn test_idempotent_on_sample() {
    let slate = SampleSlate::props();
    let config = RankConfig { max_legs: 3, top_n: 20 };
    assert_eq!(rank_parlays(&slate, &config), rank_parlays(&slate, &config));
}

#[test]
fn test_input_not_mutated() {
    let slate = SampleSlate::props();
    let before = slate.clone();
    let _ = rank_parlays(&slate, &RankConfig { max_legs: 3, top_n: 8 });
    assert_eq!(slate, before);
}

#[test]
fn test_report_counts_cover_every_combination() {
    let slate = SampleSlate::props();
    let config = RankConfig { max_legs: 3, top_n: 8 };
    let report = ParlayRanker::default()
        .rank_with_report(&slate, &config, None)
        .unwrap();

    assert_eq!(report.combinations_evaluated, total_combinations(11, 3));
    assert_eq!(
        report.combinations_evaluated,
        report.cross_sport_skipped + report.non_positive_ev + report.positive_ev
    );

    // Same-sport pool: C(8,2) + C(8,3) NBA, C(3,2) + C(3,3) NHL
    let same_sport = combination_count(8, 2)
        + combination_count(8, 3)
        + combination_count(3, 2)
        + combination_count(3, 3);
    assert_eq!(report.combinations_evaluated - report.cross_sport_skipped, same_sport);
}

#[test]
fn test_cross_sport_excluded_regardless_of_ev() {
    let slate = vec![
        prop("nba", Sport::Nba, 400, 0.95),
        prop("nhl", Sport::Nhl, 400, 0.95),
        prop("nba2", Sport::Nba, -110, 0.40),
    ];
    let parlays = rank_parlays(&slate, &RankConfig { max_legs: 3, top_n: 10 });
    // The lone NHL prop can never be paired, however good its price.
    let ids: Vec<&str> = parlays.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["nba-nba2"]);
}

#[test]
fn test_end_to_end_two_leg_values() {
    let slate = vec![
        prop("a", Sport::Nba, -110, 0.6),
        prop("b", Sport::Nba, -105, 0.55),
    ];
    let parlays = rank_parlays(&slate, &RankConfig { max_legs: 3, top_n: 5 });
    assert_eq!(parlays.len(), 1);

    let p = &parlays[0];
    assert!((p.win_probability - 0.33).abs() < 1e-12);
    assert!((p.payout_multiplier - 3.7272727).abs() < 1e-6);
    assert!((p.expected_value_pct - 0.23).abs() < 1e-9);
    assert!((p.suggested_stake - 5.0).abs() < 1e-9);
    assert!((p.estimated_profit - 1.15).abs() < 1e-9);
    assert_eq!(p.risk, RiskTier::Medium);
}

#[test]
fn test_truncation_keeps_best() {
    let slate = SampleSlate::props();
    let all = rank_parlays(&slate, &RankConfig { max_legs: 3, top_n: usize::MAX });
    let top = rank_parlays(&slate, &RankConfig { max_legs: 3, top_n: 5 });
    assert_eq!(top.len(), 5);
    for (a, b) in top.iter().zip(&all) {
        assert_eq!(a, b);
    }
}
