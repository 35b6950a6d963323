// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Pattern Helpers
//!
//! Hopfield-style imprinting and recall scoring over a population.
//!
//! ```text
//! q_i = +1 if i ∈ pattern else -1
//! W[i, j] += strength × q_i × q_j          (imprint, self-loops included)
//!
//! similarity = 1 - |active Δ pattern| / n  (active: activation > 0)
//! ```
//!
//! Imprinting only sets weights; nothing here learns during a run.

use netsy_neural::{NeuronSet, Result};

use crate::network::Network;

/// Add one pattern to the population's weights with the Hebbian outer product
pub fn imprint_pattern(
    network: &mut Network,
    population: impl Into<NeuronSet>,
    pattern: impl Into<NeuronSet>,
    strength: f64,
) -> Result<()> {
    let population = population.into();
    let pattern = pattern.into();

    let (members, others): (Vec<_>, Vec<_>) =
        population.iter().partition(|id| pattern.contains(*id));
    let (members, others) = (NeuronSet::from(members), NeuronSet::from(others));

    // Same side reinforces, opposite sides inhibit
    network.increase_connections(members.clone(), members.clone(), strength)?;
    network.increase_connections(others.clone(), others.clone(), strength)?;
    network.increase_connections(members.clone(), others.clone(), -strength)?;
    network.increase_connections(others, members, -strength)
}

/// Fraction of the population whose on/off state agrees with `pattern`
///
/// Returns 0 for an empty population.
pub fn pattern_similarity(
    network: &Network,
    population: &NeuronSet,
    pattern: &NeuronSet,
) -> Result<f64> {
    if population.is_empty() {
        return Ok(0.0);
    }

    let mut wrong = 0usize;
    for id in population.iter() {
        let active = network.neuron(id)?.get_activation() > 0.0;
        if active != pattern.contains(id) {
            wrong += 1;
        }
    }
    Ok(1.0 - wrong as f64 / population.len() as f64)
}

/// [`pattern_similarity`] against each pattern in turn
pub fn similarity_to_all(
    network: &Network,
    population: &NeuronSet,
    patterns: &[NeuronSet],
) -> Result<Vec<f64>> {
    patterns
        .iter()
        .map(|pattern| pattern_similarity(network, population, pattern))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use netsy_neural::{ModelKind, NeuronConfig, NeuronId, SigmoidParameters};

    fn sigmoids(network: &mut Network, count: usize) -> NeuronSet {
        let config = NeuronConfig::new(SigmoidParameters {
            init: Some(0.0),
            ..Default::default()
        });
        network.create_neuron_array(count, config).unwrap().into()
    }

    #[test]
    fn test_imprint_is_outer_product() {
        let mut network = Network::with_seed(0);
        let population = sigmoids(&mut network, 3);
        let pattern = NeuronSet::from(vec![NeuronId(0)]);

        imprint_pattern(&mut network, population, pattern, 0.5).unwrap();

        let w = |s: usize, t: usize| network.weight(NeuronId(s), NeuronId(t)).unwrap();
        assert_eq!(w(0, 0), 0.5);
        assert_eq!(w(1, 2), 0.5);
        assert_eq!(w(0, 1), -0.5);
        assert_eq!(w(2, 0), -0.5);
    }

    #[test]
    fn test_similarity_counts_mismatches() {
        let mut network = Network::with_seed(0);
        let population = sigmoids(&mut network, 4);
        network.set_activation(NeuronId(0), 0.3).unwrap();
        network.set_activation(NeuronId(1), 0.3).unwrap();

        let exact = NeuronSet::from(vec![NeuronId(0), NeuronId(1)]);
        let shifted = NeuronSet::from(vec![NeuronId(1), NeuronId(2)]);
        assert_eq!(pattern_similarity(&network, &population, &exact).unwrap(), 1.0);
        assert_eq!(pattern_similarity(&network, &population, &shifted).unwrap(), 0.5);

        let scores = similarity_to_all(&network, &population, &[exact, shifted]).unwrap();
        assert_eq!(scores, vec![1.0, 0.5]);
    }

    #[test]
    fn test_empty_population_scores_zero() {
        let mut network = Network::with_seed(0);
        network.create_neuron(ModelKind::Relay).unwrap();
        let score =
            pattern_similarity(&network, &NeuronSet::new(), &NeuronSet::from(NeuronId(0))).unwrap();
        assert_eq!(score, 0.0);
    }
}
