//! Pack assembly and session simulation tests.

use card_forge::packs::build_pool;
use card_forge::{
    run_pack, CardGenError, CardRng, DistributionPlotter, Histogram, Odds, Rarity, SimulationConfig,
    Simulator, StatDistribution,
};

// =============================================================================
// Single Packs
// =============================================================================

#[test]
fn test_pack_has_fifteen_cards_whenever_pool_allows() {
    let config = SimulationConfig::default();

    for seed in 0..300 {
        let (_, pool) = build_pool(&mut CardRng::new(seed), &config).unwrap();
        let result = run_pack(&mut CardRng::new(seed), &config);

        if pool.len() >= 15 {
            let pack = result.unwrap();
            assert_eq!(pack.len(), 15, "seed {seed}");
            assert_eq!(pack.cards_made, pool.len());
        } else {
            assert!(matches!(result, Err(CardGenError::InsufficientPoolSize { .. })));
        }
    }
}

#[test]
fn test_pack_slots_are_distinct_pool_members() {
    let config = SimulationConfig::default();
    let (_, pool) = build_pool(&mut CardRng::new(17), &config).unwrap();
    let pack = run_pack(&mut CardRng::new(17), &config).unwrap();

    assert_eq!(pack.worst(), pool.first());
    assert_eq!(pack.best(), pool.last());

    // Random picks come from the interior only, each at most once.
    let interior = &pool[1..pool.len() - 1];
    let mut used = vec![false; interior.len()];
    for card in &pack.slots[1..pack.len() - 1] {
        let position = interior
            .iter()
            .enumerate()
            .position(|(i, c)| !used[i] && c == card)
            .expect("pick not in interior");
        used[position] = true;
    }
}

#[test]
fn test_logistic_packs() {
    let config = SimulationConfig::default().with_distribution(StatDistribution::Logistic, 50.0, 32.0);
    let pack = run_pack(&mut CardRng::new(4), &config).unwrap();
    assert_eq!(pack.len(), 15);
}

#[test]
fn test_insufficient_pool_is_surfaced() {
    let config = SimulationConfig::default().with_sample_count(14);
    let err = run_pack(&mut CardRng::new(42), &config).unwrap_err();
    assert!(matches!(err, CardGenError::InsufficientPoolSize { required: 13, .. }));

    let sim = Simulator::new(config).unwrap();
    assert!(sim.run_session().is_err());
    assert!(sim.run_session_parallel().is_err());
}

// =============================================================================
// Sessions
// =============================================================================

#[test]
fn test_thousand_packs_tally_fifteen_thousand_slots() {
    let sim = Simulator::new(SimulationConfig::default().with_pack_count(1000)).unwrap();
    let tally = sim.run_session().unwrap();

    assert_eq!(tally.packs, 1000);
    assert_eq!(tally.total_slots, 15_000);
    assert_eq!(tally.rarity_counts.iter().sum::<u64>(), 15_000);

    let summary = tally.summary();
    let percent: f64 = summary.rarities.iter().map(|l| l.percentage).sum();
    assert!((percent - 100.0).abs() < 1e-6);

    // The guaranteed weakest slot makes Common appear in every pack.
    assert!(tally.count(Rarity::Common) >= 1000);
    assert!(matches!(summary.line(Rarity::Common).unwrap().odds, Odds::OneIn(_)));
}

#[test]
fn test_session_is_reproducible() {
    let config = SimulationConfig::default().with_seed(2024).with_pack_count(25);
    let a = Simulator::new(config.clone()).unwrap().run_session().unwrap();
    let b = Simulator::new(config).unwrap().run_session().unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_different_seeds_differ() {
    let a = Simulator::new(SimulationConfig::default().with_seed(1)).unwrap().run_session().unwrap();
    let b = Simulator::new(SimulationConfig::default().with_seed(2)).unwrap().run_session().unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_parallel_matches_sequential() {
    let sim = Simulator::new(SimulationConfig::default().with_seed(9).with_pack_count(200)).unwrap();
    let sequential = sim.run_session().unwrap();
    let parallel = sim.run_session_parallel().unwrap();
    assert_eq!(sequential, parallel);
    assert_eq!(sequential.summary(), parallel.summary());
}

#[test]
fn test_pack_independent_of_order() {
    let sim = Simulator::new(SimulationConfig::default()).unwrap();
    let late_first = sim.run_pack(7).unwrap();
    let _ = sim.run_pack(0).unwrap();
    assert_eq!(sim.run_pack(7).unwrap(), late_first);
}

#[test]
fn test_best_card_is_session_maximum() {
    let sim = Simulator::new(SimulationConfig::default().with_pack_count(50)).unwrap();
    let tally = sim.run_session().unwrap();
    let best = tally.best_card.as_ref().unwrap().power_rating;

    for index in 0..50 {
        let pack = sim.run_pack(index).unwrap();
        assert!(pack.iter().all(|c| c.power_rating <= best));
    }
}

#[test]
fn test_plotter_sees_every_sample() {
    struct Recorder {
        calls: usize,
        samples: usize,
    }

    impl DistributionPlotter for Recorder {
        fn plot(&mut self, samples: &[f64], _title: &str) {
            self.calls += 1;
            self.samples += samples.len();
        }
    }

    let sim = Simulator::new(SimulationConfig::default().with_pack_count(12)).unwrap();
    let mut recorder = Recorder { calls: 0, samples: 0 };
    let observed = sim.run_session_with(&mut recorder).unwrap();

    assert_eq!(recorder.calls, 12);
    assert_eq!(recorder.samples, 12 * 28);
    assert_eq!(observed, sim.run_session().unwrap());

    let mut histogram = Histogram::default();
    sim.run_session_with(&mut histogram).unwrap();
    assert_eq!(histogram.total(), 12 * 28);
}

#[test]
fn test_summary_json() {
    let sim = Simulator::new(SimulationConfig::default().with_pack_count(3)).unwrap();
    let summary = sim.run_session().unwrap().summary();

    let json = serde_json::to_string(&summary).unwrap();
    let back: card_forge::SessionSummary = serde_json::from_str(&json).unwrap();
    assert_eq!(back, summary);
}
