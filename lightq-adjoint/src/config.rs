//! Adjoint Jacobian configuration

use lightq_core::{KernelConfig, Result};
use serde::{Deserialize, Serialize};

/// Configuration for [`AdjointJacobian`](crate::AdjointJacobian)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdjointConfig {
    /// Settings for the inner products of the backward sweep
    ///
    /// Default: [`KernelConfig::default`]
    pub kernel: KernelConfig,

    /// Run the circuit forward before the backward sweep
    ///
    /// When false the supplied state is taken to be the final state of the
    /// circuit already, as when the caller has just simulated it.
    ///
    /// Default: true
    pub apply_operations: bool,
}

impl AdjointConfig {
    /// Set the kernel configuration
    pub fn with_kernel(mut self, kernel: KernelConfig) -> Self {
        self.kernel = kernel;
        self
    }

    /// Set whether the forward pass runs
    pub fn with_apply_operations(mut self, apply_operations: bool) -> Self {
        self.apply_operations = apply_operations;
        self
    }

    /// Check the configuration is usable
    pub fn validate(&self) -> Result<()> {
        self.kernel.validate()
    }
}

impl Default for AdjointConfig {
    fn default() -> Self {
        Self {
            kernel: KernelConfig::default(),
            apply_operations: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AdjointConfig::default();
        assert!(config.apply_operations);
        assert_eq!(config.kernel, KernelConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = AdjointConfig::default()
            .with_apply_operations(false)
            .with_kernel(KernelConfig::sequential());
        assert!(!config.apply_operations);
        assert_eq!(config.kernel.num_threads, 1);

        let broken = config.with_kernel(KernelConfig::default().with_threads(0));
        assert!(broken.validate().is_err());
    }
}
