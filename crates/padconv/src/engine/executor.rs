//! Execution engine for padded convolution.
//!
//! ## Purpose
//!
//! This module provides the executor that turns a validated convolution
//! request into a pass over the result buffer. It is the single place where
//! the accumulation strategy is chosen and where an extension crate can
//! substitute its own (e.g. parallel) pass.
//!
//! ## Design notes
//!
//! * **Validate once**: All checks run before the first result cell is written;
//!   on error the result buffer is left untouched.
//! * **Dispatch once**: `nan_interpolate` selects a monomorphized slab loop, so no
//!   mode test happens per sample.
//! * **Pluggable pass**: `custom_pass` replaces the sequential pass. Any
//!   replacement must write every result cell exactly once.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * The padded input and the kernel are only read.
//! * The sequential pass and any conforming custom pass produce identical bits.
//!
//! ## Non-goals
//!
//! * This module does not allocate or pad buffers (caller's responsibility).
//! * This module does not schedule threads itself (handled by extension crates).

// External dependencies
use log::{debug, trace};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::accumulate::{NanInterpolatedSum, PlainSum};
use crate::algorithms::convolution::convolve_sequential;
use crate::engine::validator::Validator;
use crate::math::geometry::Geometry;
use crate::primitives::errors::ConvolveError;

// ============================================================================
// Type Definitions
// ============================================================================

/// Signature for a custom convolution pass.
#[doc(hidden)]
pub type ConvolvePassFn<T> = fn(
    &Geometry,     // validated geometry
    &[T],          // padded input
    &[T],          // kernel
    &mut [T],      // result
    bool,          // nan_interpolate
    Option<usize>, // n_threads
) -> Result<(), ConvolveError>;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for one convolution call.
#[derive(Debug, Clone, Copy)]
pub struct ConvolveConfig<T> {
    /// Skip NaN samples and renormalize by the weight actually used.
    pub nan_interpolate: bool,

    /// Requested number of worker threads (`None` lets the pass decide).
    pub n_threads: Option<usize>,

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++
    /// Custom pass function (enables parallel execution).
    #[doc(hidden)]
    pub custom_pass: Option<ConvolvePassFn<T>>,
}

impl<T> Default for ConvolveConfig<T> {
    fn default() -> Self {
        Self {
            nan_interpolate: false,
            n_threads: None,
            custom_pass: None,
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Unified executor for padded convolution.
pub struct ConvolveExecutor;

impl ConvolveExecutor {
    /// Validate a flat-buffer request and run it.
    pub fn run<T: Float>(
        config: &ConvolveConfig<T>,
        result: &mut [T],
        padded: &[T],
        kernel: &[T],
        dims: &[usize],
        kernel_dims: &[usize],
    ) -> Result<(), ConvolveError> {
        let geometry = Self::prepare(config, dims, kernel_dims)?;
        Validator::validate_buffers(&geometry, result.len(), padded.len(), kernel.len())?;

        Self::run_validated(config, &geometry, result, padded, kernel)
    }

    /// Validate the execution parameters and the extents, and build the geometry.
    pub fn prepare<T>(
        config: &ConvolveConfig<T>,
        dims: &[usize],
        kernel_dims: &[usize],
    ) -> Result<Geometry, ConvolveError> {
        if let Some(n) = config.n_threads {
            Validator::validate_threads(n)?;
        }
        Validator::validate_dims(dims, kernel_dims)?;

        Ok(Geometry::new(dims, kernel_dims))
    }

    /// Run a request whose buffers have already been validated against `geometry`.
    pub fn run_validated<T: Float>(
        config: &ConvolveConfig<T>,
        geometry: &Geometry,
        result: &mut [T],
        padded: &[T],
        kernel: &[T],
    ) -> Result<(), ConvolveError> {
        debug!(
            "padded convolution: rank={} dims={:?} kernel={:?} nan_interpolate={} threads={:?}",
            geometry.rank,
            geometry.dims(),
            geometry.kernel_dims(),
            config.nan_interpolate,
            config.n_threads
        );

        match config.custom_pass {
            Some(pass) => {
                trace!("padded convolution: using injected pass");
                pass(
                    geometry,
                    padded,
                    kernel,
                    result,
                    config.nan_interpolate,
                    config.n_threads,
                )
            }
            None => {
                trace!("padded convolution: using sequential pass");
                Self::sequential(geometry, padded, kernel, result, config.nan_interpolate);
                Ok(())
            }
        }
    }

    /// Sequential pass with the accumulation strategy selected once.
    pub fn sequential<T: Float>(
        geometry: &Geometry,
        padded: &[T],
        kernel: &[T],
        result: &mut [T],
        nan_interpolate: bool,
    ) {
        if nan_interpolate {
            convolve_sequential::<T, NanInterpolatedSum<T>>(geometry, padded, kernel, result);
        } else {
            convolve_sequential::<T, PlainSum<T>>(geometry, padded, kernel, result);
        }
    }
}
