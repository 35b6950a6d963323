// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Step Throughput Benchmarks
//!
//! Purpose:
//! - Track the cost of one synchronous tick as the population grows.
//! - Compare sequential and rayon-parallel per-neuron phases.
//!
//! Notes:
//! - Fixed seeds, no I/O.
//! - Dense all-to-all sigmoid populations (the Hopfield workload).

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use netsy_network::{ConnectionWeight, Network};
use netsy_neural::{NeuronConfig, SigmoidParameters};

fn build_population(size: usize, parallel: bool) -> Network {
    let mut network = Network::with_seed(17);
    let config = NeuronConfig::new(SigmoidParameters {
        init: Some(0.0),
        der_step: 0.01,
        ..Default::default()
    });
    let ids = network.create_neuron_array(size, config).unwrap();
    network
        .all_to_all_connectivity(ids, ConnectionWeight::Random)
        .unwrap();
    network.apply_noise(0.5).unwrap();
    network.set_parallel(parallel);
    network
}

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("network_step");
    group.sample_size(20);
    group.warm_up_time(Duration::from_millis(500));
    group.measurement_time(Duration::from_secs(2));

    for size in [150usize, 500, 1000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("sequential", size), &size, |b, &size| {
            let mut network = build_population(size, false);
            b.iter(|| {
                network.step().unwrap();
                black_box(network.activations()[0]);
            });
        });

        group.bench_with_input(BenchmarkId::new("parallel", size), &size, |b, &size| {
            let mut network = build_population(size, true);
            b.iter(|| {
                network.step().unwrap();
                black_box(network.activations()[0]);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_step);
criterion_main!(benches);
