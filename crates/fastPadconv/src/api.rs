//! High-level API for padded convolution with parallel execution support.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point of `fastPadconv`.
//! It extends the `padconv` builder with a rayon-backed parallel pass, a
//! caller-sized thread pool, and `ndarray` inputs.
//!
//! ## Design notes
//!
//! * **Fluent Integration**: Wraps the base `padconv` builder.
//! * **Parallel-First**: Defaults to parallel execution; `.parallel(false)` keeps the
//!   sequential pass of the base crate.
//! * **Pool reuse**: A pool sized by `.threads(n)` is built once in `.build()` and
//!   reused by every call of the resulting [`ParallelConvolver`].
//!
//! ### Configuration Flow
//!
//! 1. Create a [`ParallelConvolutionBuilder`] via `Convolution::new()`.
//! 2. Chain configuration methods (`.nan_interpolate()`, `.threads()`, `.parallel()`).
//! 3. Call `.build()` and then `.convolve(...)` or `.convolve_array(...)`.

// Feature-gated imports
#[cfg(feature = "cpu")]
use crate::engine::executor::convolve_pass_parallel;
#[cfg(feature = "cpu")]
use log::debug;
#[cfg(feature = "cpu")]
use rayon::{ThreadPool, ThreadPoolBuilder};
#[cfg(feature = "cpu")]
use std::sync::Arc;

// External dependencies
use ndarray::{ArrayBase, Data, DataMut, Dimension};
use num_traits::Float;

// Export dependencies from padconv crate
use padconv::internals::engine::executor::ConvolveExecutor;
use padconv::internals::engine::validator::Validator;

// Internal dependencies
use crate::input::{ConvolveInput, ConvolveOutput};

// Publicly re-exported types
pub use padconv::internals::api::{ConvolutionBuilder, ConvolveError, Convolver};

// ============================================================================
// Parallel Builder
// ============================================================================

/// Builder for a convolver with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelConvolutionBuilder<T: Float> {
    /// Base builder from the padconv crate
    pub base: ConvolutionBuilder<T>,

    /// Parallel execution mode (default: true)
    pub parallel: Option<bool>,
}

impl<T: Float + Send + Sync> Default for ParallelConvolutionBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float + Send + Sync> ParallelConvolutionBuilder<T> {
    /// Create a new builder with default parameters.
    ///
    /// # Defaults
    ///
    /// * nan_interpolate: false
    /// * threads: rayon's global pool
    /// * parallel: true (fastPadconv extension)
    pub fn new() -> Self {
        Self {
            base: ConvolutionBuilder::new(),
            parallel: None,
        }
    }

    /// Skip NaN samples and renormalize by the kernel weight actually used.
    pub fn nan_interpolate(mut self, enabled: bool) -> Self {
        self.base = self.base.nan_interpolate(enabled);
        self
    }

    /// Set the number of worker threads (must be at least 1).
    pub fn threads(mut self, n_threads: usize) -> Self {
        self.base = self.base.threads(n_threads);
        self
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        if self.parallel.is_some() {
            self.base.duplicate_param = Some("parallel");
        }
        self.parallel = Some(parallel);
        self
    }

    /// Build the parallel convolver.
    #[cfg(feature = "cpu")]
    pub fn build(self) -> Result<ParallelConvolver<T>, ConvolveError> {
        let parallel = self.parallel.unwrap_or(true);
        let threads = self.base.threads;

        let base = if parallel {
            self.base.custom_pass(convolve_pass_parallel::<T>)
        } else {
            self.base
        };
        let inner = base.build()?;

        let pool = match threads {
            Some(n) if parallel && n > 1 => Some(Arc::new(build_pool(n)?)),
            _ => None,
        };

        Ok(ParallelConvolver { inner, pool })
    }

    /// Build the convolver (sequential pass only without the `cpu` feature).
    #[cfg(not(feature = "cpu"))]
    pub fn build(self) -> Result<ParallelConvolver<T>, ConvolveError> {
        Ok(ParallelConvolver {
            inner: self.base.build()?,
        })
    }
}

#[cfg(feature = "cpu")]
fn build_pool(n_threads: usize) -> Result<ThreadPool, ConvolveError> {
    debug!("building convolution thread pool with {n_threads} threads");
    ThreadPoolBuilder::new()
        .num_threads(n_threads)
        .thread_name(|i| format!("padconv-{i}"))
        .build()
        .map_err(|e| ConvolveError::ThreadPool(e.to_string()))
}

// ============================================================================
// Parallel Convolver
// ============================================================================

/// Convolver that runs the parallel pass, optionally in a dedicated pool.
#[derive(Debug, Clone)]
pub struct ParallelConvolver<T> {
    inner: Convolver<T>,

    #[cfg(feature = "cpu")]
    pool: Option<Arc<ThreadPool>>,
}

impl<T: Float + Send + Sync> ParallelConvolver<T> {
    /// Convolve flat row-major buffers.
    ///
    /// Accepts slices, vectors and contiguous `ndarray` arrays; `dims` and
    /// `kernel_dims` describe the logical shapes.
    pub fn convolve<R, P, K>(
        &self,
        result: &mut R,
        padded: &P,
        kernel: &K,
        dims: &[usize],
        kernel_dims: &[usize],
    ) -> Result<(), ConvolveError>
    where
        R: ConvolveOutput<T> + ?Sized,
        P: ConvolveInput<T> + ?Sized,
        K: ConvolveInput<T> + ?Sized,
    {
        let padded = padded.as_convolve_slice()?;
        let kernel = kernel.as_convolve_slice()?;
        let result = result.as_convolve_slice_mut()?;

        self.in_pool(|| {
            self.inner
                .convolve(result, padded, kernel, dims, kernel_dims)
        })
    }

    /// Convolve `ndarray` arrays of rank 1 to 3.
    ///
    /// The unpadded extents are taken from `result`, the kernel extents from
    /// `kernel`, and every axis of `padded` is checked against
    /// `result + 2 * (kernel / 2)`.
    pub fn convolve_array<SR, SP, SK, D>(
        &self,
        result: &mut ArrayBase<SR, D>,
        padded: &ArrayBase<SP, D>,
        kernel: &ArrayBase<SK, D>,
    ) -> Result<(), ConvolveError>
    where
        SR: DataMut<Elem = T>,
        SP: Data<Elem = T>,
        SK: Data<Elem = T>,
        D: Dimension,
    {
        let config = self.inner.config();
        let dims = result.shape().to_vec();
        let geometry = ConvolveExecutor::prepare(config, &dims, kernel.shape())?;
        Validator::validate_padded_shape(&geometry, padded.shape())?;

        let padded = padded.as_convolve_slice()?;
        let kernel = kernel.as_convolve_slice()?;
        let result = result.as_convolve_slice_mut()?;
        Validator::validate_buffers(&geometry, result.len(), padded.len(), kernel.len())?;

        self.in_pool(|| ConvolveExecutor::run_validated(config, &geometry, result, padded, kernel))
    }

    /// Resolved execution configuration of the underlying convolver.
    pub fn convolver(&self) -> &Convolver<T> {
        &self.inner
    }

    fn in_pool<F>(&self, op: F) -> Result<(), ConvolveError>
    where
        F: FnOnce() -> Result<(), ConvolveError> + Send,
    {
        #[cfg(feature = "cpu")]
        if let Some(pool) = &self.pool {
            return pool.install(op);
        }
        op()
    }
}

// ============================================================================
// One-shot Function
// ============================================================================

/// Convolve a padded input with a kernel on `n_threads` worker threads.
///
/// `n_threads = 1` runs on the calling thread; any larger count builds a
/// dedicated pool for this call.
pub fn convolve_boundary_padded<T: Float + Send + Sync>(
    result: &mut [T],
    padded: &[T],
    kernel: &[T],
    dims: &[usize],
    kernel_dims: &[usize],
    nan_interpolate: bool,
    n_threads: usize,
) -> Result<(), ConvolveError> {
    ParallelConvolutionBuilder::new()
        .nan_interpolate(nan_interpolate)
        .threads(n_threads)
        .build()?
        .convolve(result, padded, kernel, dims, kernel_dims)
}
