//! Input validation for padded convolution.
//!
//! ## Purpose
//!
//! This module provides the boundary checks of a convolution call: rank,
//! extents, buffer lengths, padded shapes and execution parameters.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Boundary-only**: Nothing here runs inside the convolution loops.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//!
//! ## Key concepts
//!
//! * **Shape law**: A padded extent must equal `extent + 2 * (kernel_extent / 2)`.
//! * **Rank**: Only 1, 2 and 3 axes are supported; anything else is an error.
//! * **Element counts**: Result, padded and kernel cell counts must fit in `usize`,
//!   so every later length and stride computation is exact.
//!
//! ## Invariants
//!
//! * A request that passes validation can be convolved without any out-of-bounds read.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not check kernel extents for oddness.
//! * This module does not inspect sample values (NaN and Inf are valid data).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// Internal dependencies
use crate::math::geometry::{Geometry, MAX_RANK};
use crate::math::kernel::half_width;
use crate::primitives::errors::ConvolveError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for convolution requests.
///
/// Provides static methods that return `Result<(), ConvolveError>` and fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Geometry Validation
    // ========================================================================

    /// Validate the unpadded extents and the kernel extents.
    pub fn validate_dims(dims: &[usize], kernel_dims: &[usize]) -> Result<(), ConvolveError> {
        // Check 1: Supported rank
        let rank = dims.len();
        if rank == 0 || rank > MAX_RANK {
            return Err(ConvolveError::UnsupportedRank(rank));
        }

        // Check 2: Kernel rank matches data rank
        if kernel_dims.len() != rank {
            return Err(ConvolveError::RankMismatch {
                data: rank,
                kernel: kernel_dims.len(),
            });
        }

        // Check 3: Non-empty axes
        if let Some(axis) = dims.iter().position(|&n| n == 0) {
            return Err(ConvolveError::EmptyExtent { axis });
        }
        if let Some(axis) = kernel_dims.iter().position(|&n| n == 0) {
            return Err(ConvolveError::EmptyKernel { axis });
        }

        // Check 4: Element counts are representable
        Self::validate_count("result", dims.iter().map(|&n| Some(n)))?;
        Self::validate_count("kernel", kernel_dims.iter().map(|&k| Some(k)))?;
        Self::validate_count(
            "padded",
            dims.iter()
                .zip(kernel_dims)
                .map(|(&n, &k)| n.checked_add(2 * half_width(k))),
        )
    }

    fn validate_count<I>(buffer: &'static str, mut extents: I) -> Result<(), ConvolveError>
    where
        I: Iterator<Item = Option<usize>>,
    {
        extents
            .try_fold(1usize, |acc, n| acc.checked_mul(n?))
            .map(|_| ())
            .ok_or(ConvolveError::ExtentOverflow { buffer })
    }

    // ========================================================================
    // Buffer Validation
    // ========================================================================

    /// Validate flat buffer lengths against the geometry.
    pub fn validate_buffers(
        geometry: &Geometry,
        result_len: usize,
        padded_len: usize,
        kernel_len: usize,
    ) -> Result<(), ConvolveError> {
        Self::validate_len("result", geometry.result_len(), result_len)?;
        Self::validate_len("padded", geometry.padded_len(), padded_len)?;
        Self::validate_len("kernel", geometry.kernel_len(), kernel_len)
    }

    /// Validate the extents of a padded input against the shape law.
    pub fn validate_padded_shape(
        geometry: &Geometry,
        padded_shape: &[usize],
    ) -> Result<(), ConvolveError> {
        if padded_shape.len() != geometry.rank {
            return Err(ConvolveError::InvalidInput(format!(
                "padded input has {} axes, expected {}",
                padded_shape.len(),
                geometry.rank
            )));
        }

        for (axis, (&got, &expected)) in padded_shape.iter().zip(&geometry.padded).enumerate() {
            if got != expected {
                return Err(ConvolveError::ShapeMismatch {
                    axis,
                    expected,
                    got,
                });
            }
        }

        Ok(())
    }

    fn validate_len(buffer: &'static str, expected: usize, got: usize) -> Result<(), ConvolveError> {
        if expected != got {
            return Err(ConvolveError::LengthMismatch {
                buffer,
                expected,
                got,
            });
        }
        Ok(())
    }

    // ========================================================================
    // Execution Validation
    // ========================================================================

    /// Validate the requested number of worker threads.
    pub fn validate_threads(n_threads: usize) -> Result<(), ConvolveError> {
        if n_threads == 0 {
            return Err(ConvolveError::InvalidThreadCount(n_threads));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), ConvolveError> {
        if let Some(param) = duplicate_param {
            return Err(ConvolveError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
