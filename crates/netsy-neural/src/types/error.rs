// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Error types for netsy operations

/// Error types for netsy operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NetsyError {
    /// A model name did not resolve to any known neuron variant
    #[error("Unknown neuron model: {0}")]
    UnknownModel(String),

    /// A construction-time parameter was malformed or out of its valid domain
    #[error("Invalid configuration for {field}: {reason}")]
    InvalidConfiguration { field: String, reason: String },

    /// A neuron index does not address any neuron in the network
    #[error("Neuron index {index} out of range (network holds {count} neurons)")]
    NeuronOutOfRange { index: usize, count: usize },

    /// Connectivity dimension drifted away from the neuron count
    #[error("Connectivity size mismatch: expected {expected}, got {actual}")]
    ConnectivityMismatch { expected: usize, actual: usize },
}

impl NetsyError {
    /// Shorthand for [`NetsyError::InvalidConfiguration`]
    pub fn invalid(field: impl Into<String>, reason: impl ToString) -> Self {
        NetsyError::InvalidConfiguration {
            field: field.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = core::result::Result<T, NetsyError>;
pub type Error = NetsyError;

/// Reject NaN and infinities for a named parameter
pub(crate) fn ensure_finite(field: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(NetsyError::invalid(field, format!("must be finite, got {}", value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = NetsyError::NeuronOutOfRange { index: 7, count: 3 };
        assert_eq!(
            err.to_string(),
            "Neuron index 7 out of range (network holds 3 neurons)"
        );

        let err = NetsyError::invalid("p", "must be within [0, 1]");
        assert_eq!(err.to_string(), "Invalid configuration for p: must be within [0, 1]");
    }

    #[test]
    fn test_ensure_finite() {
        assert!(ensure_finite("bias", 1.0).is_ok());
        assert!(ensure_finite("bias", f64::NAN).is_err());
        assert!(ensure_finite("bias", f64::INFINITY).is_err());
    }
}
