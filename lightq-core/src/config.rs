//! Kernel configuration

use crate::error::Result;
use crate::validate;
use serde::{Deserialize, Serialize};

/// Configuration for the threaded linear-algebra kernels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelConfig {
    /// Number of workers the threaded fallback kernels fan out to
    ///
    /// Each worker receives one contiguous chunk of rows (or vector entries);
    /// the last chunk absorbs the remainder.
    ///
    /// Default: 2
    pub num_threads: usize,

    /// Minimum vector length (or row count) before work is split across workers
    ///
    /// Shorter inputs run on the calling thread to avoid fan-out overhead.
    ///
    /// Default: 1024
    pub parallel_threshold: usize,
}

impl KernelConfig {
    /// Config that always runs on the calling thread
    pub fn sequential() -> Self {
        Self {
            num_threads: 1,
            ..Default::default()
        }
    }

    /// Set the worker count
    pub fn with_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = num_threads;
        self
    }

    /// Set the length above which kernels go parallel
    pub fn with_parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = parallel_threshold;
        self
    }

    /// Check the configuration is usable
    pub fn validate(&self) -> Result<()> {
        validate!(self.num_threads > 0, "num_threads must be at least 1");
        Ok(())
    }

    /// Whether an input of `len` elements should be split across workers
    #[inline]
    pub fn is_parallel_for(&self, len: usize) -> bool {
        self.num_threads > 1 && len >= self.parallel_threshold
    }
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            num_threads: 2,
            parallel_threshold: 1 << 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = KernelConfig::default();
        assert_eq!(config.num_threads, 2);
        assert_eq!(config.parallel_threshold, 1024);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_threads_rejected() {
        let config = KernelConfig::default().with_threads(0);
        assert!(config.validate().unwrap_err().is_validation());
    }

    #[test]
    fn test_parallel_decision() {
        let config = KernelConfig::default().with_parallel_threshold(8);
        assert!(config.is_parallel_for(8));
        assert!(!config.is_parallel_for(7));
        assert!(!KernelConfig::sequential().is_parallel_for(1 << 20));
    }
}
