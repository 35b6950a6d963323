// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Connectivity Matrix
//!
//! Dense square weight matrix indexed `W[source, target]`; a zero entry means
//! no synapse. The matrix is owned by the network and grows in lock-step with
//! the neuron population.
//!
//! ## Propagation
//! ```text
//! input[target] = Σ_source W[source, target] × activation[source]
//!              = (Wᵀ · a)[target]
//! ```

use ndarray::{s, Array1, Array2, ArrayView1};
use netsy_neural::{NetsyError, NeuronId, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Connectivity {
    weights: Array2<f64>,
}

impl Default for Connectivity {
    fn default() -> Self {
        Self::new()
    }
}

impl Connectivity {
    pub fn new() -> Self {
        Self {
            weights: Array2::zeros((0, 0)),
        }
    }

    /// Fully disconnected matrix for `size` neurons
    pub fn with_size(size: usize) -> Self {
        Self {
            weights: Array2::zeros((size, size)),
        }
    }

    /// Number of neurons the matrix addresses
    pub fn size(&self) -> usize {
        self.weights.nrows()
    }

    /// Add `additional` zeroed rows and columns, preserving existing weights
    pub fn grow(&mut self, additional: usize) {
        if additional == 0 {
            return;
        }
        let size = self.size();
        let mut grown = Array2::zeros((size + additional, size + additional));
        grown.slice_mut(s![..size, ..size]).assign(&self.weights);
        self.weights = grown;
    }

    /// Fail with `ConnectivityMismatch` unless the matrix addresses exactly
    /// `expected` neurons
    pub fn ensure_size(&self, expected: usize) -> Result<()> {
        let (rows, cols) = self.weights.dim();
        if rows != expected || cols != expected {
            return Err(NetsyError::ConnectivityMismatch {
                expected,
                actual: rows.max(cols),
            });
        }
        Ok(())
    }

    #[inline]
    fn index(&self, id: NeuronId) -> Result<usize> {
        let count = self.size();
        if id.index() < count {
            Ok(id.index())
        } else {
            Err(NetsyError::NeuronOutOfRange {
                index: id.index(),
                count,
            })
        }
    }

    pub fn weight(&self, source: NeuronId, target: NeuronId) -> Result<f64> {
        let (s, t) = (self.index(source)?, self.index(target)?);
        Ok(self.weights[[s, t]])
    }

    /// Overwrite the `source -> target` weight
    pub fn set(&mut self, source: NeuronId, target: NeuronId, weight: f64) -> Result<()> {
        ensure_finite_weight("weight", weight)?;
        let (s, t) = (self.index(source)?, self.index(target)?);
        self.weights[[s, t]] = weight;
        Ok(())
    }

    /// Add `delta` to the `source -> target` weight
    pub fn increase(&mut self, source: NeuronId, target: NeuronId, delta: f64) -> Result<()> {
        ensure_finite_weight("delta", delta)?;
        let (s, t) = (self.index(source)?, self.index(target)?);
        self.weights[[s, t]] += delta;
        Ok(())
    }

    /// Weights arriving at `target`, one per source
    pub fn incoming(&self, target: NeuronId) -> Result<ArrayView1<'_, f64>> {
        let t = self.index(target)?;
        Ok(self.weights.column(t))
    }

    /// Weights leaving `source`, one per target
    pub fn outgoing(&self, source: NeuronId) -> Result<ArrayView1<'_, f64>> {
        let s = self.index(source)?;
        Ok(self.weights.row(s))
    }

    /// Number of non-zero incoming weights of `target`
    pub fn in_degree(&self, target: NeuronId) -> Result<usize> {
        Ok(self.incoming(target)?.iter().filter(|w| **w != 0.0).count())
    }

    /// Number of non-zero entries
    pub fn synapse_count(&self) -> usize {
        self.weights.iter().filter(|w| **w != 0.0).count()
    }

    /// Weighted input for every neuron given the frozen activation vector
    pub fn propagate(&self, activations: &Array1<f64>) -> Result<Array1<f64>> {
        self.ensure_size(activations.len())?;
        Ok(self.weights.t().dot(activations))
    }

    pub fn as_array(&self) -> &Array2<f64> {
        &self.weights
    }
}

pub(crate) fn ensure_finite_weight(field: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(NetsyError::invalid(field, format!("must be finite, got {}", value)))
    }
}
