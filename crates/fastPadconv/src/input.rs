//! Input abstractions for padded convolution.
//!
//! ## Purpose
//!
//! This module provides a unified abstraction over convolution buffers,
//! allowing the `convolve` methods to process multiple data formats (slices,
//! vectors, ndarray) through a single interface.
//!
//! ## Design notes
//!
//! * **Zero-copy**: Provides direct slice access to underlying data buffers.
//! * **Interoperability**: Bridges standard Rust collections with `ndarray`.
//! * **Fail-fast validation**: Rejects arrays that are not in standard (row-major,
//!   contiguous) layout before any computation.
//!
//! ## Key concepts
//!
//! * **ConvolveInput**: Read-only view of a padded input or kernel.
//! * **ConvolveOutput**: Writable view of a result buffer.
//!
//! ## Invariants
//!
//! * Returned slices represent all elements in row-major order.
//! * Non-contiguous or non-row-major inputs return an error.
//!
//! ## Non-goals
//!
//! * This module does not copy, pad or reshape data.

// External dependencies
use ndarray::{ArrayBase, Data, DataMut, Dimension};
use num_traits::Float;

// Export dependencies from padconv crate
use padconv::internals::primitives::errors::ConvolveError;

/// Types that can be read as a padded input or kernel.
pub trait ConvolveInput<T: Float> {
    /// Convert the input to a contiguous row-major slice.
    fn as_convolve_slice(&self) -> Result<&[T], ConvolveError>;
}

/// Types that can receive a convolution result.
pub trait ConvolveOutput<T: Float> {
    /// Convert the output to a contiguous row-major mutable slice.
    fn as_convolve_slice_mut(&mut self) -> Result<&mut [T], ConvolveError>;
}

impl<T: Float> ConvolveInput<T> for [T] {
    fn as_convolve_slice(&self) -> Result<&[T], ConvolveError> {
        Ok(self)
    }
}

impl<T: Float> ConvolveInput<T> for Vec<T> {
    fn as_convolve_slice(&self) -> Result<&[T], ConvolveError> {
        Ok(self.as_slice())
    }
}

impl<T: Float, S, D> ConvolveInput<T> for ArrayBase<S, D>
where
    S: Data<Elem = T>,
    D: Dimension,
{
    fn as_convolve_slice(&self) -> Result<&[T], ConvolveError> {
        self.as_slice().ok_or_else(|| {
            ConvolveError::InvalidInput(
                "ndarray input must be contiguous in row-major order".to_string(),
            )
        })
    }
}

impl<T: Float> ConvolveOutput<T> for [T] {
    fn as_convolve_slice_mut(&mut self) -> Result<&mut [T], ConvolveError> {
        Ok(self)
    }
}

impl<T: Float> ConvolveOutput<T> for Vec<T> {
    fn as_convolve_slice_mut(&mut self) -> Result<&mut [T], ConvolveError> {
        Ok(self.as_mut_slice())
    }
}

impl<T: Float, S, D> ConvolveOutput<T> for ArrayBase<S, D>
where
    S: DataMut<Elem = T>,
    D: Dimension,
{
    fn as_convolve_slice_mut(&mut self) -> Result<&mut [T], ConvolveError> {
        self.as_slice_mut().ok_or_else(|| {
            ConvolveError::InvalidInput(
                "ndarray output must be contiguous in row-major order".to_string(),
            )
        })
    }
}
