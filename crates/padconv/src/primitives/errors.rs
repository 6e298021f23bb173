//! Error types for padded convolution.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can be reported by the
//! convolution engine: unsupported ranks, shape and length disagreements
//! between the result, padded input and kernel buffers, and invalid
//! execution configuration.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (axis, expected vs. actual).
//! * **Boundary-only**: Every error is raised before the first result cell is written.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Geometry validation**: Rank, empty extents, kernel extents.
//! 2. **Buffer validation**: Slice lengths and padded shapes against the geometry.
//! 3. **Execution configuration**: Thread counts and duplicated builder parameters.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Axis numbers are 0-based, outermost first.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * Degenerate NaN-aware footprints are not errors and have no variant here.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for padded convolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvolveError {
    /// Only ranks 1, 2 and 3 are supported.
    UnsupportedRank(usize),

    /// Data and kernel must have the same number of axes.
    RankMismatch {
        /// Number of data axes.
        data: usize,
        /// Number of kernel axes.
        kernel: usize,
    },

    /// A data axis has zero extent.
    EmptyExtent {
        /// Offending axis.
        axis: usize,
    },

    /// A kernel axis has zero extent.
    EmptyKernel {
        /// Offending axis.
        axis: usize,
    },

    /// A flat buffer does not hold the number of elements implied by the geometry.
    LengthMismatch {
        /// Which buffer ("result", "padded" or "kernel").
        buffer: &'static str,
        /// Number of elements implied by the geometry.
        expected: usize,
        /// Number of elements provided.
        got: usize,
    },

    /// A padded extent differs from `extent + 2 * (kernel_extent / 2)`.
    ShapeMismatch {
        /// Offending axis.
        axis: usize,
        /// Expected padded extent.
        expected: usize,
        /// Padded extent provided.
        got: usize,
    },

    /// The number of elements implied by the extents does not fit in `usize`.
    ExtentOverflow {
        /// Which buffer ("result", "padded" or "kernel").
        buffer: &'static str,
    },

    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),

    /// Thread count must be at least 1.
    InvalidThreadCount(usize),

    /// The worker pool could not be created.
    ThreadPool(String),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for ConvolveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::UnsupportedRank(rank) => {
                write!(f, "Unsupported rank: {rank} (must be 1, 2 or 3)")
            }
            Self::RankMismatch { data, kernel } => {
                write!(f, "Rank mismatch: data has {data} axes, kernel has {kernel}")
            }
            Self::EmptyExtent { axis } => write!(f, "Data axis {axis} has zero extent"),
            Self::EmptyKernel { axis } => write!(f, "Kernel axis {axis} has zero extent"),
            Self::LengthMismatch {
                buffer,
                expected,
                got,
            } => {
                write!(
                    f,
                    "Length mismatch: {buffer} buffer has {got} elements, expected {expected}"
                )
            }
            Self::ShapeMismatch {
                axis,
                expected,
                got,
            } => {
                write!(
                    f,
                    "Shape mismatch: padded axis {axis} has extent {got}, expected {expected}"
                )
            }
            Self::ExtentOverflow { buffer } => {
                write!(f, "Extent overflow: {buffer} element count exceeds usize::MAX")
            }
            Self::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            Self::InvalidThreadCount(n) => {
                write!(f, "Invalid thread count: {n} (must be at least 1)")
            }
            Self::ThreadPool(msg) => write!(f, "Failed to build thread pool: {msg}"),
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for ConvolveError {}
