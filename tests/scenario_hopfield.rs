// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Hopfield recall end-to-end tests
//!
//! Three random patterns are imprinted into 150 sigmoid units; the network is
//! cued with the last one plus a little noise and must keep recalling it.

use netsy::config::HopfieldConfig;
use netsy::network::similarity_to_all;
use netsy::scenarios::{hopfield, Hopfield};

const TICKS: usize = 140;

fn build(seed: u64) -> Hopfield {
    let config = HopfieldConfig {
        neurons: 150,
        patterns: 3,
        cue_pattern: Some(2),
        ..Default::default()
    };
    hopfield(&config, Some(seed)).unwrap()
}

fn similarity_trace(seed: u64) -> Vec<Vec<f64>> {
    let Hopfield {
        mut network,
        population,
        patterns,
    } = build(seed);
    let (samples, series) = network
        .run_and_get_results(TICKS, 1, |net| {
            similarity_to_all(net, &population, &patterns).unwrap()
        })
        .unwrap();
    assert_eq!(series.len(), TICKS);
    samples
}

#[test]
fn test_cued_pattern_stays_most_similar() {
    for seed in [7, 21, 1234] {
        let trace = similarity_trace(seed);
        assert_eq!(trace.len(), TICKS);

        for (tick, similarities) in trace.iter().enumerate() {
            let cued = similarities[2];
            assert!(
                similarities.iter().all(|&s| cued >= s),
                "seed {} tick {}: cued pattern lost to {:?}",
                seed,
                tick,
                similarities
            );
        }
        let last = trace.last().unwrap();
        assert!(last[2] >= 0.9, "seed {}: final recall {}", seed, last[2]);
    }
}

#[test]
fn test_cue_is_recognisable_before_the_first_tick() {
    let hf = build(7);
    let similarities = hf.similarities().unwrap();
    // Noise (0.1) is smaller than the cue magnitude (0.5), so no sign flips
    assert_eq!(similarities[2], 1.0);
}

#[test]
fn test_recall_is_seed_reproducible() {
    assert_eq!(similarity_trace(99), similarity_trace(99));
}

#[test]
fn test_patterns_are_stored_symmetrically() {
    let hf = build(7);
    let weights = hf.network.connectivity().as_array();
    let n = hf.population.len();
    for i in 0..n {
        for j in 0..n {
            assert!((weights[[i, j]] - weights[[j, i]]).abs() < 1e-12);
        }
    }
}
