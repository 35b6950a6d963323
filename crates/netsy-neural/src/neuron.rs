// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Neuron
//!
//! A neuron owns its identity, its [`NeuronState`] and one [`Model`]. The
//! network drives it through `receive` (accumulate input) and `tick` (advance
//! one step and emit).

use tracing::debug;

use crate::config::{NeuronConfig, DEFAULT_NEURON_NAME};
use crate::models::{Model, ModelKind};
use crate::state::NeuronState;
use crate::types::{ActivationRange, NeuronId, Result};

#[derive(Debug, Clone)]
pub struct Neuron {
    id: NeuronId,
    name: String,
    state: NeuronState,
    lifespan: Option<u64>,
    alive: bool,
    log: bool,
    /// Signal emitted on the last tick
    signal: f64,
    model: Model,
}

impl Neuron {
    /// Build a neuron from a validated configuration
    ///
    /// `seed` initializes the RNG of noise models and is ignored by the others.
    pub fn new(id: NeuronId, config: &NeuronConfig, seed: u64) -> Result<Self> {
        config.validate()?;

        let range = config.effective_range();
        let activation = config.model.parameters().initial_activation(&range);
        let state = NeuronState::new(range, activation, config.effective_refractory_time());
        let model = Model::from_config(&config.model, seed);
        let signal = model.initial_signal(&state);

        let base_name = config.name.as_deref().unwrap_or(DEFAULT_NEURON_NAME);
        let name = format!("[{}] {}", model.kind().type_identifier(), base_name);

        let neuron = Self {
            id,
            name,
            state,
            lifespan: active_lifespan(config.lifespan),
            alive: true,
            log: config.log,
            signal,
            model,
        };
        neuron.trace("start, activation", neuron.state.activation);
        Ok(neuron)
    }

    pub fn id(&self) -> NeuronId {
        self.id
    }

    /// Display name, prefixed with the model tag (e.g. `[TH] top`)
    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_activation(&self) -> f64 {
        self.state.activation
    }

    /// Signal emitted on the last tick (zero once dead)
    pub fn signal(&self) -> f64 {
        self.signal
    }

    pub fn kind(&self) -> ModelKind {
        self.model.kind()
    }

    pub fn range(&self) -> ActivationRange {
        self.state.range
    }

    pub fn ticks(&self) -> u64 {
        self.state.ticks
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn is_refractory(&self) -> bool {
        self.state.refractory.active
    }

    pub fn lifespan(&self) -> Option<u64> {
        self.lifespan
    }

    pub fn pending_input(&self) -> f64 {
        self.state.input
    }

    pub fn state(&self) -> &NeuronState {
        &self.state
    }

    /// Change the lifespan. A dead neuron stays dead; 0 turns mortality off.
    pub fn set_lifespan(&mut self, lifespan: Option<u64>) {
        self.lifespan = active_lifespan(lifespan);
    }

    pub fn show_log(&mut self, enabled: bool) {
        self.log = enabled;
        self.trace("start log, ticks", self.state.ticks as f64);
    }

    /// Manually set the activation
    ///
    /// Clamped for range-enforcing models. Updates the published signal so the
    /// next tick propagates the new value. Ignored once dead.
    pub fn set_activation(&mut self, value: f64) {
        if !self.alive {
            return;
        }
        self.trace("manual activation", value);
        self.state.activation = if self.model.clamps_activation() {
            self.state.range.clamp(value)
        } else {
            value
        };
        self.signal = self.model.current_signal(&self.state);
    }

    /// Accumulate input for the next tick
    #[inline]
    pub fn receive(&mut self, signal: f64) {
        self.state.input += signal;
    }

    /// Advance one tick and return the emitted signal
    pub fn tick(&mut self) -> f64 {
        if !self.alive {
            self.state.input = 0.0;
            self.signal = 0.0;
            return 0.0;
        }

        self.state.ticks += 1;
        if let Some(lifespan) = self.lifespan {
            if self.state.ticks > lifespan {
                self.die();
                return 0.0;
            }
        }

        self.model.internal_process(&mut self.state);

        // Suppressed ticks keep the pending input for the first recovered tick
        if self.state.refractory.advance() {
            self.state.activation = self.state.range.low;
            self.trace("in refractory period", self.state.refractory.timer as f64);
        } else {
            let input = core::mem::take(&mut self.state.input);
            self.trace("input", input);
            self.model.apply_input(&mut self.state, input);
        }

        if self.model.clamps_activation() {
            self.state.activation = self.state.range.clamp(self.state.activation);
        }

        self.signal = self.model.emit(&mut self.state);
        self.trace("signal", self.signal);
        self.signal
    }

    fn die(&mut self) {
        self.alive = false;
        self.state.activation = 0.0;
        self.state.input = 0.0;
        self.state.refractory.active = false;
        self.signal = 0.0;
        self.trace("lifespan exceeded, ticks", self.state.ticks as f64);
    }

    fn trace(&self, what: &str, value: f64) {
        if self.log {
            debug!(
                target: "netsy::neuron",
                tick = self.state.ticks,
                neuron = %self.name,
                "{} = {}",
                what,
                value
            );
        }
    }
}

fn active_lifespan(lifespan: Option<u64>) -> Option<u64> {
    lifespan.filter(|ticks| *ticks > 0)
}
