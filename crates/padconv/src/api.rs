//! High-level API for padded convolution.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points: a fluent
//! builder that produces a reusable [`Convolver`], and a one-shot
//! [`convolve_boundary_padded`] function.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called; buffers
//!   and extents are validated on every call.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`ConvolutionBuilder`] via `Convolution::new()`.
//! 2. Chain configuration methods (`.nan_interpolate()`, `.threads()`).
//! 3. Call `.build()` and then `.convolve(...)` as many times as needed.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{ConvolveConfig, ConvolveExecutor, ConvolvePassFn};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::primitives::errors::ConvolveError;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring padded convolution.
#[derive(Debug, Clone)]
pub struct ConvolutionBuilder<T> {
    /// Skip NaN samples and renormalize (default: false).
    pub nan_interpolate: Option<bool>,

    /// Requested number of worker threads, honoured by parallel passes.
    pub threads: Option<usize>,

    // ======================================
    // DEV
    // ======================================
    /// Custom pass function.
    #[doc(hidden)]
    pub custom_pass: Option<ConvolvePassFn<T>>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for ConvolutionBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ConvolutionBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            nan_interpolate: None,
            threads: None,
            custom_pass: None,
            duplicate_param: None,
        }
    }

    /// Skip NaN samples and renormalize by the kernel weight actually used.
    ///
    /// Cells whose whole footprint is NaN (or whose used weight sums to zero)
    /// receive the unconvolved center sample.
    pub fn nan_interpolate(mut self, enabled: bool) -> Self {
        if self.nan_interpolate.is_some() {
            self.duplicate_param = Some("nan_interpolate");
        }
        self.nan_interpolate = Some(enabled);
        self
    }

    /// Set the number of worker threads (must be at least 1).
    pub fn threads(mut self, n_threads: usize) -> Self {
        if self.threads.is_some() {
            self.duplicate_param = Some("threads");
        }
        self.threads = Some(n_threads);
        self
    }

    // ==========================
    // Development Options
    // ==========================

    /// Set a custom pass function for execution (only for dev)
    #[doc(hidden)]
    pub fn custom_pass(mut self, pass: ConvolvePassFn<T>) -> Self {
        self.custom_pass = Some(pass);
        self
    }

    /// Build the convolver.
    pub fn build(self) -> Result<Convolver<T>, ConvolveError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        if let Some(n) = self.threads {
            Validator::validate_threads(n)?;
        }

        Ok(Convolver {
            config: ConvolveConfig {
                nan_interpolate: self.nan_interpolate.unwrap_or(false),
                n_threads: self.threads,
                custom_pass: self.custom_pass,
            },
        })
    }
}

// ============================================================================
// Convolver
// ============================================================================

/// Reusable, validated convolution configuration.
#[derive(Debug, Clone, Copy)]
pub struct Convolver<T> {
    config: ConvolveConfig<T>,
}

impl<T: Float> Convolver<T> {
    /// Convolve a padded input with a kernel into `result`.
    ///
    /// * `dims` are the unpadded extents (also the extents of `result`).
    /// * `padded` holds `dims[a] + 2 * (kernel_dims[a] / 2)` cells along each axis.
    /// * All buffers are dense and row-major.
    pub fn convolve(
        &self,
        result: &mut [T],
        padded: &[T],
        kernel: &[T],
        dims: &[usize],
        kernel_dims: &[usize],
    ) -> Result<(), ConvolveError> {
        ConvolveExecutor::run(&self.config, result, padded, kernel, dims, kernel_dims)
    }

    /// Resolved execution configuration.
    pub fn config(&self) -> &ConvolveConfig<T> {
        &self.config
    }
}

// ============================================================================
// One-shot Function
// ============================================================================

/// Convolve a padded input with a kernel on the calling thread.
pub fn convolve_boundary_padded<T: Float>(
    result: &mut [T],
    padded: &[T],
    kernel: &[T],
    dims: &[usize],
    kernel_dims: &[usize],
    nan_interpolate: bool,
) -> Result<(), ConvolveError> {
    let config = ConvolveConfig {
        nan_interpolate,
        ..ConvolveConfig::default()
    };
    ConvolveExecutor::run(&config, result, padded, kernel, dims, kernel_dims)
}
