//! Rank-promoted geometry of a padded convolution.
//!
//! ## Purpose
//!
//! This module describes the shapes involved in one convolution call (result,
//! padded input, kernel) with fixed-size arrays, so that a single loop nest
//! serves ranks 1, 2 and 3.
//!
//! ## Design notes
//!
//! * **Promotion**: Lower ranks are completed with trailing unit axes (extent 1,
//!   kernel extent 1, half-width 0), which leaves the row-major layout unchanged.
//! * **Copy**: `Geometry` is a small `Copy` value and is shared by reference across
//!   worker threads.
//!
//! ## Invariants
//!
//! * `padded[a] == extents[a] + 2 * half[a]` for every axis.
//! * Axes at index `>= rank` have extent 1 and kernel extent 1.
//!
//! ## Non-goals
//!
//! * This module does not validate its inputs (handled by `validator`).

// Internal dependencies
use crate::math::kernel::{half_width, padded_extent};

/// Maximum supported rank.
pub const MAX_RANK: usize = 3;

/// Shapes of the result, padded input and kernel, promoted to three axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    /// Number of axes declared by the caller (1, 2 or 3).
    pub rank: usize,

    /// Unpadded (result) extents.
    pub extents: [usize; MAX_RANK],

    /// Kernel extents.
    pub kernel: [usize; MAX_RANK],

    /// Kernel half-widths.
    pub half: [usize; MAX_RANK],

    /// Padded input extents.
    pub padded: [usize; MAX_RANK],
}

impl Geometry {
    /// Build the promoted geometry from validated extents.
    ///
    /// `dims` and `kernel_dims` must have the same length in `1..=MAX_RANK`.
    pub fn new(dims: &[usize], kernel_dims: &[usize]) -> Self {
        debug_assert!((1..=MAX_RANK).contains(&dims.len()));
        debug_assert_eq!(dims.len(), kernel_dims.len());

        let mut extents = [1; MAX_RANK];
        let mut kernel = [1; MAX_RANK];
        extents[..dims.len()].copy_from_slice(dims);
        kernel[..kernel_dims.len()].copy_from_slice(kernel_dims);

        Self {
            rank: dims.len(),
            extents,
            kernel,
            half: kernel.map(half_width),
            padded: core::array::from_fn(|a| padded_extent(extents[a], kernel[a])),
        }
    }

    /// Number of result cells.
    #[inline]
    pub fn result_len(&self) -> usize {
        self.extents.iter().product()
    }

    /// Number of padded input cells.
    #[inline]
    pub fn padded_len(&self) -> usize {
        self.padded.iter().product()
    }

    /// Number of kernel cells.
    #[inline]
    pub fn kernel_len(&self) -> usize {
        self.kernel.iter().product()
    }

    /// Number of result cells sharing one outermost index.
    #[inline]
    pub fn slab_len(&self) -> usize {
        self.extents[1] * self.extents[2]
    }

    /// Row-major strides of the padded input.
    #[inline]
    pub fn padded_strides(&self) -> [usize; MAX_RANK] {
        row_major_strides(&self.padded)
    }

    /// Row-major strides of the kernel.
    #[inline]
    pub fn kernel_strides(&self) -> [usize; MAX_RANK] {
        row_major_strides(&self.kernel)
    }

    /// Unpadded extents as declared by the caller (without promotion).
    #[inline]
    pub fn dims(&self) -> &[usize] {
        &self.extents[..self.rank]
    }

    /// Kernel extents as declared by the caller (without promotion).
    #[inline]
    pub fn kernel_dims(&self) -> &[usize] {
        &self.kernel[..self.rank]
    }
}

/// Row-major strides of a three-axis shape.
#[inline]
pub fn row_major_strides(shape: &[usize; MAX_RANK]) -> [usize; MAX_RANK] {
    [shape[1] * shape[2], shape[2], 1]
}
