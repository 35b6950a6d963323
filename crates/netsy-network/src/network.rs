// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*
 * Copyright 2025 Neuraville Inc.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! # Network
//!
//! Owns the neuron population, the connectivity matrix and the activation
//! vector, and drives the synchronous tick loop.
//!
//! ## Tick Phases
//! ```text
//! 1. Freeze:    a(t) = activation vector published by the previous tick
//! 2. Propagate: input = Wᵀ · a(t)
//! 3. Tick:      every neuron receives its input and advances (rayon-parallel
//!               when enabled, each neuron touched by exactly one worker)
//! 4. Publish:   a(t+1) = emitted signals
//! ```
//!
//! No neuron observes another neuron's state from the same tick.

use std::sync::OnceLock;

use ndarray::Array1;
use netsy_neural::{NetsyError, Neuron, NeuronConfig, NeuronId, NeuronSet, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, info, trace, warn};

use crate::connectivity::{ensure_finite_weight, Connectivity};
use crate::recording::ActivationSeries;

/// Runtime-gated tracing of per-neuron inputs during propagation.
/// Enable with:
/// - NETSY_TRACE_PROPAGATION=1
///   Optional filter:
/// - NETSY_TRACE_NEURON=<neuron index>
struct PropagationTraceCfg {
    enabled: bool,
    neuron_filter: Option<usize>,
}

fn propagation_trace_cfg() -> &'static PropagationTraceCfg {
    static CFG: OnceLock<PropagationTraceCfg> = OnceLock::new();
    CFG.get_or_init(|| {
        let enabled = std::env::var("NETSY_TRACE_PROPAGATION")
            .ok()
            .as_deref()
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        let neuron_filter = std::env::var("NETSY_TRACE_NEURON")
            .ok()
            .and_then(|v| v.parse().ok());

        PropagationTraceCfg {
            enabled,
            neuron_filter,
        }
    })
}

/// Weight assigned by the wiring helpers
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConnectionWeight {
    Fixed(f64),
    /// Independent uniform draw in `[0, 1)` for every connected pair
    Random,
}

impl ConnectionWeight {
    fn validate(&self) -> Result<()> {
        match self {
            ConnectionWeight::Fixed(w) => ensure_finite_weight("weight", *w),
            ConnectionWeight::Random => Ok(()),
        }
    }

    fn draw<R: Rng>(&self, rng: &mut R) -> f64 {
        match self {
            ConnectionWeight::Fixed(w) => *w,
            ConnectionWeight::Random => rng.gen::<f64>(),
        }
    }
}

impl From<f64> for ConnectionWeight {
    fn from(weight: f64) -> Self {
        ConnectionWeight::Fixed(weight)
    }
}

pub struct Network {
    neurons: Vec<Neuron>,
    connectivity: Connectivity,
    /// Signal published by each neuron on the last tick
    activations: Array1<f64>,
    rng: StdRng,
    ticks: u64,
    parallel: bool,
}

impl Default for Network {
    fn default() -> Self {
        Self::new()
    }
}

impl Network {
    /// Empty network seeded from OS entropy
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Empty network whose random draws (noise neurons, random weights,
    /// `apply_noise`) are reproducible
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            neurons: Vec::new(),
            connectivity: Connectivity::new(),
            activations: Array1::zeros(0),
            rng,
            ticks: 0,
            parallel: false,
        }
    }

    /// Run the per-neuron tick phase on the rayon pool
    ///
    /// Results are identical to sequential stepping. Without the `parallel`
    /// feature the request is logged and ignored.
    pub fn set_parallel(&mut self, parallel: bool) {
        if cfg!(feature = "parallel") {
            self.parallel = parallel;
        } else if parallel {
            warn!("netsy-network built without the `parallel` feature; stepping sequentially");
        }
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    // ---------------------------------------------------------------------
    // Population
    // ---------------------------------------------------------------------

    pub fn create_neuron(&mut self, config: impl Into<NeuronConfig>) -> Result<NeuronId> {
        let config = config.into();
        let neuron = self.build_neuron(&config, self.neurons.len())?;
        let ids = self.append(vec![neuron]);
        Ok(ids[0])
    }

    /// Create `size` neurons from one template
    ///
    /// A named template yields `name_0 .. name_{size-1}`. Either every neuron
    /// is created or none is.
    pub fn create_neuron_array(
        &mut self,
        size: usize,
        config: impl Into<NeuronConfig>,
    ) -> Result<Vec<NeuronId>> {
        let template = config.into();
        let start = self.neurons.len();

        let mut batch = Vec::with_capacity(size);
        for i in 0..size {
            let neuron = match &template.name {
                Some(base) => {
                    let config = template.clone().named(format!("{}_{}", base, i));
                    self.build_neuron(&config, start + i)?
                }
                None => self.build_neuron(&template, start + i)?,
            };
            batch.push(neuron);
        }
        Ok(self.append(batch))
    }

    fn build_neuron(&mut self, config: &NeuronConfig, index: usize) -> Result<Neuron> {
        let seed = self.rng.gen::<u64>();
        Neuron::new(NeuronId(index), config, seed)
    }

    /// Push validated neurons and grow connectivity in the same step
    fn append(&mut self, batch: Vec<Neuron>) -> Vec<NeuronId> {
        let added = batch.len();
        let ids: Vec<NeuronId> = batch.iter().map(Neuron::id).collect();

        let mut activations = Vec::with_capacity(self.neurons.len() + added);
        activations.extend(self.activations.iter().copied());
        activations.extend(batch.iter().map(Neuron::signal));

        self.connectivity.grow(added);
        self.activations = Array1::from(activations);
        self.neurons.extend(batch);

        debug!(
            added,
            total = self.neurons.len(),
            "Created neurons, connectivity grown to {}x{}",
            self.connectivity.size(),
            self.connectivity.size()
        );
        ids
    }

    pub fn len(&self) -> usize {
        self.neurons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neurons.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = NeuronId> + '_ {
        self.neurons.iter().map(Neuron::id)
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn neuron(&self, id: NeuronId) -> Result<&Neuron> {
        let count = self.neurons.len();
        self.neurons
            .get(id.index())
            .ok_or(NetsyError::NeuronOutOfRange {
                index: id.index(),
                count,
            })
    }

    fn neuron_mut(&mut self, id: NeuronId) -> Result<&mut Neuron> {
        let count = self.neurons.len();
        self.neurons
            .get_mut(id.index())
            .ok_or(NetsyError::NeuronOutOfRange {
                index: id.index(),
                count,
            })
    }

    fn check_ids(&self, set: &NeuronSet) -> Result<()> {
        let count = self.neurons.len();
        match set.iter().find(|id| id.index() >= count) {
            Some(id) => Err(NetsyError::NeuronOutOfRange {
                index: id.index(),
                count,
            }),
            None => Ok(()),
        }
    }

    pub fn names(&self) -> Vec<String> {
        self.neurons
            .iter()
            .map(|n| n.get_name().to_string())
            .collect()
    }

    /// Completed ticks
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Signals published by the last tick; this is what the next tick propagates
    pub fn activations(&self) -> &Array1<f64> {
        &self.activations
    }

    /// Internal activation of every neuron
    pub fn neuron_activations(&self) -> Vec<f64> {
        self.neurons.iter().map(Neuron::get_activation).collect()
    }

    pub fn connectivity(&self) -> &Connectivity {
        &self.connectivity
    }

    // ---------------------------------------------------------------------
    // Wiring
    // ---------------------------------------------------------------------

    /// Connect every source to every target (`source -> target`), replacing
    /// existing weights
    pub fn set_connections(
        &mut self,
        targets: impl Into<NeuronSet>,
        sources: impl Into<NeuronSet>,
        weight: impl Into<ConnectionWeight>,
    ) -> Result<()> {
        let (targets, sources, weight) = (targets.into(), sources.into(), weight.into());
        self.check_ids(&targets)?;
        self.check_ids(&sources)?;
        weight.validate()?;

        for target in targets.iter() {
            for source in sources.iter() {
                let w = weight.draw(&mut self.rng);
                self.connectivity.set(source, target, w)?;
            }
        }
        trace!(
            targets = targets.len(),
            sources = sources.len(),
            "Set connections"
        );
        Ok(())
    }

    /// `listener` receives from every source
    pub fn listen_to(
        &mut self,
        listener: impl Into<NeuronSet>,
        sources: impl Into<NeuronSet>,
        weight: impl Into<ConnectionWeight>,
    ) -> Result<()> {
        self.set_connections(listener, sources, weight)
    }

    /// `source` projects to every target
    pub fn send_to(
        &mut self,
        source: impl Into<NeuronSet>,
        targets: impl Into<NeuronSet>,
        weight: impl Into<ConnectionWeight>,
    ) -> Result<()> {
        self.set_connections(targets, source, weight)
    }

    /// Symmetric connection `a <-> b`; a random weight is drawn once and
    /// mirrored
    pub fn connect_mutual(
        &mut self,
        a: NeuronId,
        b: NeuronId,
        weight: impl Into<ConnectionWeight>,
    ) -> Result<()> {
        let weight = weight.into();
        weight.validate()?;
        self.neuron(a)?;
        self.neuron(b)?;

        let w = weight.draw(&mut self.rng);
        self.connectivity.set(a, b, w)?;
        self.connectivity.set(b, a, w)
    }

    /// Every member projects to every member, self-loops included
    pub fn all_to_all_connectivity(
        &mut self,
        population: impl Into<NeuronSet>,
        weight: impl Into<ConnectionWeight>,
    ) -> Result<()> {
        let population = population.into();
        self.set_connections(population.clone(), population, weight)
    }

    /// Add `delta` to every `source -> target` weight
    pub fn increase_connections(
        &mut self,
        targets: impl Into<NeuronSet>,
        sources: impl Into<NeuronSet>,
        delta: f64,
    ) -> Result<()> {
        let (targets, sources) = (targets.into(), sources.into());
        self.check_ids(&targets)?;
        self.check_ids(&sources)?;
        ensure_finite_weight("delta", delta)?;

        for target in targets.iter() {
            for source in sources.iter() {
                self.connectivity.increase(source, target, delta)?;
            }
        }
        Ok(())
    }

    /// Current `source -> target` weight (0 when not connected)
    pub fn weight(&self, source: NeuronId, target: NeuronId) -> Result<f64> {
        self.connectivity.weight(source, target)
    }

    // ---------------------------------------------------------------------
    // Per-neuron and bulk state manipulation
    // ---------------------------------------------------------------------

    pub fn set_lifespan(&mut self, neurons: impl Into<NeuronSet>, lifespan: Option<u64>) -> Result<()> {
        let neurons = neurons.into();
        self.check_ids(&neurons)?;
        for id in neurons.iter() {
            self.neurons[id.index()].set_lifespan(lifespan);
        }
        Ok(())
    }

    pub fn show_log(&mut self, neurons: impl Into<NeuronSet>, enabled: bool) -> Result<()> {
        let neurons = neurons.into();
        self.check_ids(&neurons)?;
        for id in neurons.iter() {
            self.neurons[id.index()].show_log(enabled);
        }
        Ok(())
    }

    /// Manually set an activation; the new value propagates on the next tick
    pub fn set_activation(&mut self, id: NeuronId, value: f64) -> Result<()> {
        ensure_finite_weight("activation", value)?;
        let neuron = self.neuron_mut(id)?;
        neuron.set_activation(value);
        let signal = neuron.signal();
        self.activations[id.index()] = signal;
        Ok(())
    }

    /// Deliver external input, added to the propagated input of the next tick
    pub fn inject(&mut self, id: NeuronId, signal: f64) -> Result<()> {
        ensure_finite_weight("signal", signal)?;
        self.neuron_mut(id)?.receive(signal);
        Ok(())
    }

    /// Set pattern members to `+magnitude` and every other neuron to `-magnitude`
    pub fn apply_pattern(&mut self, pattern: impl Into<NeuronSet>, magnitude: f64) -> Result<()> {
        let pattern = pattern.into();
        self.check_ids(&pattern)?;
        ensure_finite_weight("magnitude", magnitude)?;

        for index in 0..self.neurons.len() {
            let id = NeuronId(index);
            let polarity = if pattern.contains(id) {
                magnitude
            } else {
                -magnitude
            };
            self.set_activation(id, polarity)?;
        }
        Ok(())
    }

    /// Perturb every live neuron by a uniform draw in `(-scale, scale)`
    pub fn apply_noise(&mut self, scale: f64) -> Result<()> {
        if !scale.is_finite() || scale < 0.0 {
            return Err(NetsyError::invalid(
                "scale",
                format!("must be finite and non-negative, got {}", scale),
            ));
        }
        if scale == 0.0 {
            return Ok(());
        }

        for index in 0..self.neurons.len() {
            if !self.neurons[index].is_alive() {
                continue;
            }
            let delta = self.rng.gen_range(-scale..scale);
            let current = self.neurons[index].get_activation();
            self.set_activation(NeuronId(index), current + delta)?;
        }
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Simulation
    // ---------------------------------------------------------------------

    /// Advance every neuron by one tick
    pub fn step(&mut self) -> Result<()> {
        self.connectivity.ensure_size(self.neurons.len())?;

        let inputs = self.connectivity.propagate(&self.activations)?;
        self.trace_inputs(&inputs);

        let signals = if self.parallel {
            self.tick_parallel(&inputs)
        } else {
            self.tick_sequential(&inputs)
        };

        self.activations = Array1::from(signals);
        self.ticks += 1;
        trace!(tick = self.ticks, neurons = self.neurons.len(), "Tick complete");
        Ok(())
    }

    fn tick_sequential(&mut self, inputs: &Array1<f64>) -> Vec<f64> {
        self.neurons
            .iter_mut()
            .zip(inputs.iter())
            .map(|(neuron, &input)| {
                neuron.receive(input);
                neuron.tick()
            })
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn tick_parallel(&mut self, inputs: &Array1<f64>) -> Vec<f64> {
        let inputs = inputs.to_vec();
        self.neurons
            .par_iter_mut()
            .zip(inputs.par_iter())
            .map(|(neuron, &input)| {
                neuron.receive(input);
                neuron.tick()
            })
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn tick_parallel(&mut self, inputs: &Array1<f64>) -> Vec<f64> {
        self.tick_sequential(inputs)
    }

    fn trace_inputs(&self, inputs: &Array1<f64>) {
        let cfg = propagation_trace_cfg();
        if !cfg.enabled {
            return;
        }
        for (index, input) in inputs.iter().enumerate() {
            if cfg.neuron_filter.map_or(true, |only| only == index) {
                debug!(
                    target: "netsy::propagation",
                    tick = self.ticks + 1,
                    neuron = index,
                    input,
                    "Propagated input"
                );
            }
        }
    }

    /// Run `steps` ticks and record the activation vector after each one
    pub fn run(&mut self, steps: usize) -> Result<ActivationSeries> {
        let mut series = ActivationSeries::new(self.names());
        self.run_into(&mut series, steps)?;
        Ok(series)
    }

    /// Continue an existing recording, e.g. after rewiring between runs
    pub fn run_into(&mut self, series: &mut ActivationSeries, steps: usize) -> Result<()> {
        if series.neuron_count() != self.neurons.len() {
            return Err(NetsyError::ConnectivityMismatch {
                expected: self.neurons.len(),
                actual: series.neuron_count(),
            });
        }

        info!(steps, start_tick = self.ticks, neurons = self.neurons.len(), "Running network");
        for _ in 0..steps {
            self.step()?;
            series.push(self.activations.to_vec())?;
        }
        info!(end_tick = self.ticks, "Run finished");
        Ok(())
    }

    /// Run `steps` ticks, evaluating `metric` every `sample_every` ticks
    pub fn run_and_get_results<M, F>(
        &mut self,
        steps: usize,
        sample_every: usize,
        mut metric: F,
    ) -> Result<(Vec<M>, ActivationSeries)>
    where
        F: FnMut(&Network) -> M,
    {
        if sample_every == 0 {
            return Err(NetsyError::invalid("sample_every", "must be at least 1"));
        }

        let mut series = ActivationSeries::new(self.names());
        let mut results = Vec::with_capacity(steps / sample_every);

        info!(steps, sample_every, start_tick = self.ticks, "Running network with sampling");
        for tick in 1..=steps {
            self.step()?;
            series.push(self.activations.to_vec())?;
            if tick % sample_every == 0 {
                results.push(metric(self));
            }
        }
        info!(end_tick = self.ticks, samples = results.len(), "Run finished");
        Ok((results, series))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use netsy_neural::{ModelKind, ThresholdParameters, SPIKE_SIZE};

    fn relays(network: &mut Network, count: usize) -> Vec<NeuronId> {
        network
            .create_neuron_array(count, NeuronConfig::new(ModelKind::Relay))
            .unwrap()
    }

    #[test]
    fn test_creation_grows_connectivity() {
        let mut network = Network::with_seed(1);
        let first = network.create_neuron(ModelKind::Relay).unwrap();
        assert_eq!(first, NeuronId(0));

        let batch = relays(&mut network, 4);
        assert_eq!(batch, (1..5).map(NeuronId).collect::<Vec<_>>());
        assert_eq!(network.connectivity().size(), 5);
        assert_eq!(network.activations().len(), 5);
    }

    #[test]
    fn test_array_names_are_suffixed() {
        let mut network = Network::with_seed(1);
        let ids = network
            .create_neuron_array(3, NeuronConfig::new(ModelKind::Threshold).named("layer"))
            .unwrap();
        let names: Vec<&str> = ids
            .iter()
            .map(|id| network.neuron(*id).unwrap().get_name())
            .collect();
        assert_eq!(names, vec!["[TH] layer_0", "[TH] layer_1", "[TH] layer_2"]);
    }

    #[test]
    fn test_failed_batch_leaves_network_unchanged() {
        let mut network = Network::with_seed(1);
        relays(&mut network, 2);

        let bad = NeuronConfig::new(ThresholdParameters {
            decay_coefficient: 2.0,
            ..Default::default()
        });
        assert!(network.create_neuron_array(3, bad).is_err());
        assert_eq!(network.len(), 2);
        assert_eq!(network.connectivity().size(), 2);
    }

    #[test]
    fn test_relay_chain_delays_by_one_tick() {
        let mut network = Network::with_seed(1);
        let ids = relays(&mut network, 3);
        network.send_to(ids[0], ids[1], 1.0).unwrap();
        network.send_to(ids[1], ids[2], 1.0).unwrap();

        network.inject(ids[0], 1.0).unwrap();
        let series = network.run(3).unwrap();

        assert_eq!(series.tick(0).unwrap(), &[1.0, 0.0, 0.0]);
        assert_eq!(series.tick(1).unwrap(), &[0.0, 1.0, 0.0]);
        assert_eq!(series.tick(2).unwrap(), &[0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_update_is_synchronous() {
        // Two relays exciting each other: with a frozen snapshot they swap
        // values instead of one seeing the other's fresh output.
        let mut network = Network::with_seed(1);
        let ids = relays(&mut network, 2);
        network.connect_mutual(ids[0], ids[1], 1.0).unwrap();
        network.set_activation(ids[0], 1.0).unwrap();

        network.step().unwrap();
        assert_eq!(network.activations().to_vec(), vec![0.0, 1.0]);
        network.step().unwrap();
        assert_eq!(network.activations().to_vec(), vec![1.0, 0.0]);
    }

    #[test]
    fn test_out_of_range_ids_are_rejected() {
        let mut network = Network::with_seed(1);
        let ids = relays(&mut network, 2);

        let err = network.set_connections(NeuronId(5), ids.clone(), 1.0).unwrap_err();
        assert_eq!(err, NetsyError::NeuronOutOfRange { index: 5, count: 2 });
        assert!(network.weight(NeuronId(0), NeuronId(2)).is_err());
        assert!(network.set_activation(NeuronId(9), 0.0).is_err());
        assert_eq!(network.connectivity().size(), 2);
        assert_eq!(network.connectivity().synapse_count(), 0);
    }

    #[test]
    fn test_random_weights_are_unit_interval_and_seeded() {
        let build = || {
            let mut network = Network::with_seed(42);
            let ids = relays(&mut network, 10);
            network
                .all_to_all_connectivity(ids, ConnectionWeight::Random)
                .unwrap();
            network
        };
        let a = build();
        let b = build();

        assert_eq!(a.connectivity(), b.connectivity());
        assert!(a.connectivity().as_array().iter().all(|w| (0.0..1.0).contains(w)));
        // Independent draws, not one shared value
        assert!(a.weight(NeuronId(0), NeuronId(1)).unwrap() != a.weight(NeuronId(1), NeuronId(0)).unwrap());
    }

    #[test]
    fn test_connect_mutual_mirrors_random_weight() {
        let mut network = Network::with_seed(3);
        let ids = relays(&mut network, 2);
        network
            .connect_mutual(ids[0], ids[1], ConnectionWeight::Random)
            .unwrap();
        assert_eq!(
            network.weight(ids[0], ids[1]).unwrap(),
            network.weight(ids[1], ids[0]).unwrap()
        );
    }

    #[test]
    fn test_threshold_fires_from_two_sources() {
        let mut network = Network::with_seed(1);
        let inputs = relays(&mut network, 2);
        let top = network
            .create_neuron(NeuronConfig::new(ModelKind::Threshold).with_range(0.0, 3.0))
            .unwrap();
        network.listen_to(top, inputs.clone(), 0.6).unwrap();

        network.set_activation(inputs[0], 1.0).unwrap();
        network.set_activation(inputs[1], 1.0).unwrap();
        network.step().unwrap();
        assert_eq!(network.activations()[top.index()], SPIKE_SIZE);
    }

    #[test]
    fn test_apply_pattern_and_noise() {
        let mut network = Network::with_seed(5);
        let ids = network
            .create_neuron_array(
                4,
                NeuronConfig::new(netsy_neural::SigmoidParameters {
                    init: Some(0.0),
                    ..Default::default()
                }),
            )
            .unwrap();

        network.apply_pattern(vec![ids[0], ids[2]], 0.5).unwrap();
        assert_eq!(network.neuron_activations(), vec![0.5, -0.5, 0.5, -0.5]);
        assert_eq!(network.activations().to_vec(), vec![0.5, -0.5, 0.5, -0.5]);

        let before = network.neuron_activations();
        network.apply_noise(0.1).unwrap();
        for (old, new) in before.iter().zip(network.neuron_activations()) {
            assert!((new - old).abs() < 0.1);
        }

        assert!(network.apply_noise(-1.0).is_err());
        let frozen = network.neuron_activations();
        network.apply_noise(0.0).unwrap();
        assert_eq!(network.neuron_activations(), frozen);
    }

    #[test]
    fn test_run_and_get_results_sampling() {
        let mut network = Network::with_seed(1);
        relays(&mut network, 2);

        let (results, series) = network
            .run_and_get_results(10, 3, |net| net.ticks())
            .unwrap();
        assert_eq!(results, vec![3, 6, 9]);
        assert_eq!(series.len(), 10);

        assert!(network.run_and_get_results(10, 0, |_| ()).is_err());
    }

    #[test]
    fn test_run_into_continues_after_rewiring() {
        let mut network = Network::with_seed(1);
        let ids = relays(&mut network, 2);

        let mut series = network.run(2).unwrap();
        network.send_to(ids[0], ids[1], 1.0).unwrap();
        network.run_into(&mut series, 3).unwrap();
        assert_eq!(series.len(), 5);

        network.create_neuron(ModelKind::Relay).unwrap();
        assert!(network.run_into(&mut series, 1).is_err());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let build = |parallel: bool| {
            let mut network = Network::with_seed(9);
            let noise = network
                .create_neuron_array(
                    20,
                    NeuronConfig::new(netsy_neural::BinaryNoiseParameters { p: 0.3 })
                        .with_range(0.0, 1.0),
                )
                .unwrap();
            let relays = relays(&mut network, 5);
            network.set_connections(relays, noise, ConnectionWeight::Random).unwrap();
            network.set_parallel(parallel);
            network.run(50).unwrap()
        };
        assert_eq!(build(false), build(true));
    }
}
