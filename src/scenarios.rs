// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Scenario Presets
//!
//! Ready-wired networks for the three reference experiments:
//! - **Phase space**: an excitatory/inhibitory sigmoid pair spiralling
//!   slowly away from its fixed point
//! - **Hopfield**: a sigmoid attractor network holding random patterns
//! - **Noise cascade**: mortal white noise feeding a threshold layer and a
//!   threshold top unit
//!
//! Every builder takes an optional seed; the same seed rebuilds the same
//! network and replays the same run.

use netsy_config::{HopfieldConfig, NoiseCascadeConfig, PhaseSpaceConfig};
use netsy_network::{imprint_pattern, similarity_to_all, ConnectionWeight, Network};
use netsy_neural::{
    NeuronConfig, NeuronId, NeuronSet, Result, SigmoidParameters, ThresholdParameters,
    WhiteNoiseParameters,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

fn network_for(seed: Option<u64>) -> Network {
    match seed {
        Some(seed) => Network::with_seed(seed),
        None => Network::new(),
    }
}

pub struct PhaseSpace {
    pub network: Network,
    pub inhibitory: NeuronId,
    pub excitatory: NeuronId,
}

/// Two sigmoid units; the excitatory one also listens to itself
pub fn phase_space(config: &PhaseSpaceConfig, seed: Option<u64>) -> Result<PhaseSpace> {
    let mut network = network_for(seed);
    let unit = |name: &str, tanh_bias: f64| {
        NeuronConfig::new(SigmoidParameters {
            bias: config.bias,
            tanh_bias,
            init: Some(config.init),
            der_step: config.der_step,
            ..Default::default()
        })
        .named(name)
    };

    let inhibitory = network.create_neuron(unit("in", config.thei))?;
    let excitatory = network.create_neuron(unit("ex", config.thee))?;

    network.listen_to(excitatory, inhibitory, -config.j)?;
    network.listen_to(excitatory, excitatory, config.jee)?;
    network.listen_to(inhibitory, excitatory, config.j)?;

    Ok(PhaseSpace {
        network,
        inhibitory,
        excitatory,
    })
}

pub struct Hopfield {
    pub network: Network,
    pub population: NeuronSet,
    pub patterns: Vec<NeuronSet>,
}

impl Hopfield {
    /// Current similarity to every stored pattern
    pub fn similarities(&self) -> Result<Vec<f64>> {
        similarity_to_all(&self.network, &self.population, &self.patterns)
    }
}

/// Sigmoid population storing random patterns, optionally cued and perturbed
pub fn hopfield(config: &HopfieldConfig, seed: Option<u64>) -> Result<Hopfield> {
    let mut network = network_for(seed);
    // Pattern draws use their own stream so they do not shift the network's
    let mut pattern_rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
        None => StdRng::from_entropy(),
    };

    let neuron = NeuronConfig::new(SigmoidParameters {
        init: Some(0.0),
        der_step: config.der_step,
        ..Default::default()
    });
    let population: NeuronSet = network.create_neuron_array(config.neurons, neuron)?.into();
    network.all_to_all_connectivity(population.clone(), 0.0)?;

    let strength = 1.0 / config.patterns as f64;
    let mut patterns = Vec::with_capacity(config.patterns);
    for _ in 0..config.patterns {
        let pattern: NeuronSet = population
            .iter()
            .filter(|_| pattern_rng.gen::<f64>() < config.pattern_probability)
            .collect();
        imprint_pattern(&mut network, population.clone(), pattern.clone(), strength)?;
        debug!(size = pattern.len(), "Imprinted pattern");
        patterns.push(pattern);
    }

    if let Some(cue) = config.cue_pattern {
        let pattern = patterns.get(cue).ok_or_else(|| {
            netsy_neural::NetsyError::invalid(
                "cue_pattern",
                format!("{} but only {} patterns are stored", cue, patterns.len()),
            )
        })?;
        network.apply_pattern(pattern.clone(), config.cue_magnitude)?;
    }
    network.apply_noise(config.noise)?;

    Ok(Hopfield {
        network,
        population,
        patterns,
    })
}

pub struct NoiseCascade {
    pub network: Network,
    pub noise: Vec<NeuronId>,
    pub layer: Vec<NeuronId>,
    pub top: NeuronId,
}

/// White noise -> randomly weighted threshold layer -> threshold top unit
pub fn noise_cascade(config: &NoiseCascadeConfig, seed: Option<u64>) -> Result<NoiseCascade> {
    let mut network = network_for(seed);
    let [low, high] = config.noise_range;

    let mut noise_config = NeuronConfig::new(WhiteNoiseParameters {
        mean: config.noise_mean,
    })
    .named("noise")
    .with_range(low, high);
    noise_config.lifespan = config.noise_lifespan;
    let noise = network.create_neuron_array(config.noise_size, noise_config)?;

    let mut layer_config = NeuronConfig::new(ThresholdParameters::default()).named("layer");
    layer_config.lifespan = config.layer_lifespan;
    let layer = network.create_neuron_array(config.layer_size, layer_config)?;
    network.set_connections(layer.clone(), noise.clone(), ConnectionWeight::Random)?;

    let top = network.create_neuron(
        NeuronConfig::new(ThresholdParameters {
            threshold: config.top_threshold,
            ..Default::default()
        })
        .named("top"),
    )?;
    network.listen_to(top, layer.clone(), config.top_weight)?;

    Ok(NoiseCascade {
        network,
        noise,
        layer,
        top,
    })
}
