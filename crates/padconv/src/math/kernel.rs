//! Kernel footprint arithmetic.
//!
//! ## Purpose
//!
//! This module provides the per-axis index relations between an output
//! coordinate, the padded input and the kernel.
//!
//! ## Key concepts
//!
//! * **Half-width**: `w = k / 2` (integer division). It is both the pad amount and
//!   the footprint radius.
//! * **Flip**: Kernel offset `d` of the footprint reads kernel cell `k - 1 - d`,
//!   which makes the operation a convolution rather than a cross-correlation.
//!
//! ## Invariants
//!
//! * For an output index `i < n` and offset `d < k`, `i + d < n + 2 * (k / 2)`,
//!   so every footprint read is in bounds of the padded axis (odd or even `k`).
//!
//! ## Non-goals
//!
//! * This module does not normalize kernels or validate that extents are odd.

/// Kernel half-width along one axis.
#[inline]
pub const fn half_width(kernel_extent: usize) -> usize {
    kernel_extent / 2
}

/// Extent of a padded axis given its unpadded extent and the kernel extent.
#[inline]
pub const fn padded_extent(extent: usize, kernel_extent: usize) -> usize {
    extent + 2 * half_width(kernel_extent)
}

/// Kernel index read at footprint offset `offset` (flipped).
#[inline]
pub const fn flipped(offset: usize, kernel_extent: usize) -> usize {
    kernel_extent - 1 - offset
}
