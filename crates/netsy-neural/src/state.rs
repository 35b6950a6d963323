// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Mutable per-neuron state shared by every model
//!
//! The model-specific steps of a tick read and write this state; the fixed
//! steps (liveness, lifespan, refractory bookkeeping) live in [`crate::Neuron`].

use crate::types::ActivationRange;

/// Refractory bookkeeping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Refractory {
    pub active: bool,
    pub timer: u32,
    /// Number of ticks output stays suppressed after entry
    pub duration: u32,
}

impl Refractory {
    pub fn new(duration: u32) -> Self {
        Self {
            active: false,
            timer: 0,
            duration,
        }
    }

    /// Start a refractory period; the timer counts from 1
    #[inline]
    pub fn enter(&mut self) {
        self.active = true;
        self.timer = 1;
    }

    /// Advance one tick. Returns `true` when this tick is suppressed.
    #[inline]
    pub fn advance(&mut self) -> bool {
        if !self.active {
            return false;
        }
        if self.timer > self.duration {
            self.active = false;
            return false;
        }
        self.timer += 1;
        true
    }
}

/// State a model operates on during a tick
#[derive(Debug, Clone, PartialEq)]
pub struct NeuronState {
    pub activation: f64,
    /// Input accumulated since the last tick
    pub input: f64,
    pub range: ActivationRange,
    pub ticks: u64,
    pub refractory: Refractory,
}

impl NeuronState {
    pub fn new(range: ActivationRange, activation: f64, refractory_time: u32) -> Self {
        Self {
            activation,
            input: 0.0,
            range,
            ticks: 0,
            refractory: Refractory::new(refractory_time),
        }
    }
}
