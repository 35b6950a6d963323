// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Network Invariant Test Suite
//!
//! Drives small networks through the public API and checks the properties
//! every run must preserve.
//!
//! # Coverage
//!
//! ## Range Enforcement
//! - Relay, threshold, binary noise and white noise stay inside their range
//! - Sigmoid activation is never clamped
//!
//! ## Mortality
//! - A dead neuron emits zero forever and feeds nothing downstream
//!
//! ## Refractory Periods
//! - A spike is followed by exactly `refractory_time` silent ticks
//!
//! ## Noise
//! - Binary noise fires at rate ≈ p and ignores its input
//!
//! ## Connectivity
//! - Growth keeps the matrix square and sized to the population
//! - Setting twice is idempotent; increasing by v then -v restores the weight

use netsy_network::{ConnectionWeight, Network, NeuronId};
use netsy_neural::{
    BinaryNoiseParameters, ModelKind, NeuronConfig, SigmoidParameters, WhiteNoiseParameters,
    SPIKE_SIZE,
};
use proptest::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

/// Relay that keeps re-emitting `level` through a unit self-loop
fn constant_driver(network: &mut Network, level: f64) -> NeuronId {
    let driver = network.create_neuron(ModelKind::Relay).unwrap();
    network.set_connections(driver, driver, 1.0).unwrap();
    network.set_activation(driver, level).unwrap();
    driver
}

fn assert_within(values: &[f64], low: f64, high: f64) {
    for v in values {
        assert!(*v >= low && *v <= high, "{} outside [{}, {}]", v, low, high);
    }
}

// ============================================================================
// Range Enforcement
// ============================================================================

#[test]
fn test_clamped_models_stay_in_range() {
    let mut network = Network::with_seed(11);
    let driver = constant_driver(&mut network, 2.0);

    let relay = network.create_neuron(ModelKind::Relay).unwrap();
    let threshold = network.create_neuron(ModelKind::Threshold).unwrap();
    let noise = network
        .create_neuron(NeuronConfig::new(BinaryNoiseParameters { p: 0.5 }))
        .unwrap();
    let white = network
        .create_neuron(NeuronConfig::new(WhiteNoiseParameters { mean: 3.0 }))
        .unwrap();

    // Overdrive everything, excitatory and inhibitory
    network
        .send_to(driver, vec![relay, threshold, noise, white], 50.0)
        .unwrap();

    for _ in 0..200 {
        network.step().unwrap();
        for id in [relay, threshold, noise, white] {
            let neuron = network.neuron(id).unwrap();
            let range = neuron.range();
            assert!(
                range.contains(neuron.get_activation()),
                "{} activation {} escaped {:?}",
                neuron.get_name(),
                neuron.get_activation(),
                range
            );
        }
    }

    network.set_connections(vec![relay, threshold], driver, -50.0).unwrap();
    for _ in 0..50 {
        network.step().unwrap();
        assert_eq!(network.neuron(relay).unwrap().get_activation(), -1.5);
        assert!(network.neuron(threshold).unwrap().get_activation() >= -1.5);
    }
}

#[test]
fn test_sigmoid_is_not_clamped() {
    let mut network = Network::with_seed(1);
    let sigmoid = network
        .create_neuron(NeuronConfig::new(SigmoidParameters {
            bias: 10.0,
            init: Some(0.0),
            der_step: 0.1,
            ..Default::default()
        }))
        .unwrap();

    network.run(200).unwrap();
    let activation = network.neuron(sigmoid).unwrap().get_activation();
    assert!(activation > 9.0, "sigmoid settled at {}", activation);
    assert!(!network.neuron(sigmoid).unwrap().range().contains(activation));
}

// ============================================================================
// Mortality
// ============================================================================

#[test]
fn test_dead_neuron_feeds_nothing_downstream() {
    let mut network = Network::with_seed(1);
    let source = network
        .create_neuron(NeuronConfig::new(ModelKind::Relay).with_lifespan(3))
        .unwrap();
    network.set_connections(source, source, 1.0).unwrap();
    network.set_activation(source, 1.0).unwrap();

    let downstream = network.create_neuron(ModelKind::Relay).unwrap();
    network.send_to(source, downstream, 1.0).unwrap();

    let series = network.run(30).unwrap();
    let src = series.neuron(source).unwrap();
    let down = series.neuron(downstream).unwrap();

    assert_eq!(&src[..3], &[1.0, 1.0, 1.0]);
    assert!(src[3..].iter().all(|v| *v == 0.0));
    // Downstream sees the last live signal one tick later, then silence
    assert_eq!(down[3], 1.0);
    assert!(down[4..].iter().all(|v| *v == 0.0));
    assert!(!network.neuron(source).unwrap().is_alive());
}

#[test]
fn test_bulk_lifespan() {
    let mut network = Network::with_seed(1);
    let ids = network
        .create_neuron_array(5, NeuronConfig::new(ModelKind::Relay))
        .unwrap();
    network.set_lifespan(ids[..3].to_vec(), Some(1)).unwrap();
    network.set_lifespan(ids[3..4].to_vec(), Some(0)).unwrap();

    network.step().unwrap();
    assert!(ids.iter().all(|id| network.neuron(*id).unwrap().is_alive()));

    network.run(10).unwrap();
    let alive: Vec<bool> = ids
        .iter()
        .map(|id| network.neuron(*id).unwrap().is_alive())
        .collect();
    assert_eq!(alive, vec![false, false, false, true, true]);
}

// ============================================================================
// Refractory Periods
// ============================================================================

#[test]
fn test_threshold_refractory_gap() {
    let mut network = Network::with_seed(1);
    let driver = constant_driver(&mut network, 2.0);
    let unit = network
        .create_neuron(NeuronConfig::new(ModelKind::Threshold).with_refractory_time(3))
        .unwrap();
    network.send_to(driver, unit, 1.0).unwrap();

    let trace = network.run(12).unwrap().neuron(unit).unwrap();

    // -1.5 decays to -1.35, +2 = 0.65 (quiet); 0.585 + 2 fires.
    // Then 3 suppressed ticks; the input held meanwhile fires the recovery tick.
    let mut expected = vec![0.0; 12];
    for t in [1, 5, 9] {
        expected[t] = SPIKE_SIZE;
    }
    assert_eq!(trace, expected);
}

// ============================================================================
// Noise
// ============================================================================

#[test]
fn test_binary_noise_rate_and_deafness() {
    const TICKS: usize = 10_000;
    let mut network = Network::with_seed(2024);
    let driver = constant_driver(&mut network, 2.0);
    let noise = network
        .create_neuron(NeuronConfig::new(BinaryNoiseParameters { p: 0.3 }).with_range(0.0, 1.0))
        .unwrap();
    network.send_to(driver, noise, 100.0).unwrap();

    let trace = network.run(TICKS).unwrap().neuron(noise).unwrap();
    assert!(trace.iter().all(|v| *v == 0.0 || *v == 1.0));

    let rate = trace.iter().sum::<f64>() / TICKS as f64;
    assert!((rate - 0.3).abs() < 0.03, "firing rate {}", rate);
}

#[test]
fn test_same_seed_replays_identically() {
    let run = |seed: u64| {
        let mut network = Network::with_seed(seed);
        let noise = network
            .create_neuron_array(8, NeuronConfig::new(ModelKind::WhiteNoise))
            .unwrap();
        let out = network.create_neuron(ModelKind::Relay).unwrap();
        network.listen_to(out, noise, ConnectionWeight::Random).unwrap();
        network.run(100).unwrap()
    };
    assert_eq!(run(5), run(5));
    assert_ne!(run(5), run(6));
}

// ============================================================================
// Connectivity
// ============================================================================

#[test]
fn test_connectivity_tracks_population() {
    let mut network = Network::with_seed(1);
    for batch in [1usize, 4, 0, 7] {
        network
            .create_neuron_array(batch, NeuronConfig::new(ModelKind::Relay))
            .unwrap();
        let (rows, cols) = network.connectivity().as_array().dim();
        assert_eq!(rows, network.len());
        assert_eq!(cols, network.len());
    }
    assert_eq!(network.len(), 12);
}

#[test]
fn test_set_twice_is_idempotent() {
    let mut network = Network::with_seed(1);
    let ids = network
        .create_neuron_array(4, NeuronConfig::new(ModelKind::Relay))
        .unwrap();

    network.set_connections(ids[2..].to_vec(), ids[..2].to_vec(), 0.7).unwrap();
    let once = network.connectivity().clone();
    network.set_connections(ids[2..].to_vec(), ids[..2].to_vec(), 0.7).unwrap();
    assert_eq!(network.connectivity(), &once);
    assert_eq!(network.connectivity().synapse_count(), 4);
}

proptest! {
    #[test]
    fn prop_increase_then_decrease_restores_unset_weight(
        source in 0usize..6,
        target in 0usize..6,
        delta in -100.0f64..100.0,
    ) {
        let mut network = Network::with_seed(0);
        network.create_neuron_array(6, NeuronConfig::new(ModelKind::Relay)).unwrap();
        let (s, t) = (NeuronId(source), NeuronId(target));

        network.increase_connections(t, s, delta).unwrap();
        prop_assert_eq!(network.weight(s, t).unwrap(), delta);
        network.increase_connections(t, s, -delta).unwrap();
        prop_assert_eq!(network.weight(s, t).unwrap(), 0.0);
    }

    #[test]
    fn prop_increase_then_decrease_restores_set_weight(
        base in -1024i32..1024,
        step in -1024i32..1024,
    ) {
        // Multiples of 1/64 add and subtract without rounding
        let (base, delta) = (base as f64 / 64.0, step as f64 / 64.0);
        let mut network = Network::with_seed(0);
        let ids = network.create_neuron_array(2, NeuronConfig::new(ModelKind::Relay)).unwrap();

        network.set_connections(ids[1], ids[0], base).unwrap();
        network.increase_connections(ids[1], ids[0], delta).unwrap();
        network.increase_connections(ids[1], ids[0], -delta).unwrap();
        prop_assert_eq!(network.weight(ids[0], ids[1]).unwrap(), base);
    }
}
