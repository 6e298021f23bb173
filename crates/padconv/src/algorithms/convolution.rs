//! Rank-generic padded convolution loop.
//!
//! ## Purpose
//!
//! This module computes the convolution of a pre-padded input with a kernel,
//! one outer-axis slab at a time. The slab is the unit of work for both the
//! sequential pass here and the parallel pass of extension crates, which is
//! what makes the two produce bit-identical results.
//!
//! ## Design notes
//!
//! * **Single loop nest**: Ranks 1 and 2 run through the same three-axis loop over
//!   a promoted [`Geometry`].
//! * **Strategy generic**: The loop is monomorphized per [`Accumulate`] strategy,
//!   so the plain variant carries no NaN test in its inner loop.
//! * **No bounds arithmetic**: The padded input already contains the halo; every
//!   footprint read is in bounds by construction.
//!
//! ## Key concepts
//!
//! For an output coordinate `(i, j, k)` and footprint offset `(di, dj, dk)`:
//!
//! ```text
//! value  = padded[(i + di, j + dj, k + dk)]
//! weight = kernel[(nkx - 1 - di, nky - 1 - dj, nkz - 1 - dk)]
//! center = padded[(i + wx, j + wy, k + wz)]
//! ```
//!
//! ## Invariants
//!
//! * Every cell of the slab is written exactly once.
//! * Only `out` is written; `padded` and `kernel` are read-only.
//!
//! ## Non-goals
//!
//! * This module does not validate buffer lengths (handled by `validator`).
//! * This module does not schedule slabs across threads.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::accumulate::Accumulate;
use crate::math::geometry::Geometry;
use crate::math::kernel::flipped;

// ============================================================================
// Slab Kernel
// ============================================================================

/// Convolve the result slab at outermost index `i`.
///
/// `out` must hold exactly [`Geometry::slab_len`] cells.
pub fn convolve_slab<T, A>(geometry: &Geometry, padded: &[T], kernel: &[T], i: usize, out: &mut [T])
where
    T: Float,
    A: Accumulate<T>,
{
    let [_, ny, nz] = geometry.extents;
    let [nkx, nky, nkz] = geometry.kernel;
    let [wx, wy, wz] = geometry.half;
    let [psx, psy, _] = geometry.padded_strides();
    let [ksx, ksy, _] = geometry.kernel_strides();

    debug_assert_eq!(out.len(), ny * nz);

    let center_row = (i + wx) * psx;

    for j in 0..ny {
        let center_col = center_row + (j + wy) * psy + wz;
        let out_row = &mut out[j * nz..(j + 1) * nz];

        for (k, cell) in out_row.iter_mut().enumerate() {
            let mut acc = A::start();

            for di in 0..nkx {
                let in_x = (i + di) * psx;
                let ker_x = flipped(di, nkx) * ksx;

                for dj in 0..nky {
                    let in_xy = in_x + (j + dj) * psy + k;
                    let ker_xy = ker_x + flipped(dj, nky) * ksy;

                    for dk in 0..nkz {
                        acc.push(padded[in_xy + dk], kernel[ker_xy + flipped(dk, nkz)]);
                    }
                }
            }

            *cell = acc.finish(padded[center_col + k]);
        }
    }
}

// ============================================================================
// Sequential Pass
// ============================================================================

/// Convolve every slab in order on the calling thread.
pub fn convolve_sequential<T, A>(geometry: &Geometry, padded: &[T], kernel: &[T], result: &mut [T])
where
    T: Float,
    A: Accumulate<T>,
{
    let slab = geometry.slab_len();
    for (i, out) in result.chunks_mut(slab).enumerate() {
        convolve_slab::<T, A>(geometry, padded, kernel, i, out);
    }
}
