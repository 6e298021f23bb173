//! Parallel execution engine for padded convolution.
//!
//! ## Purpose
//!
//! This module provides the parallel pass that is injected into the `padconv`
//! crate's executor. It distributes the outer-axis slabs of the result across
//! CPU cores.
//!
//! ## Design notes
//!
//! * **Implementation**: Provides a drop-in replacement for the sequential pass.
//! * **Parallelism**: Uses `rayon` work stealing over disjoint `par_chunks_mut` slabs.
//! * **Pool-agnostic**: Runs in whatever rayon pool is current; callers that need a
//!   specific thread count install the pass in a dedicated pool.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Slab**: All result cells that share the outermost index `i`.
//! * **Disjoint writes**: Each slab is owned by exactly one task, so no locking is needed.
//! * **Integration**: Plugs into the `padconv` executor via the `ConvolvePassFn` hook.
//!
//! ## Invariants
//!
//! * Results are bit-identical to the sequential pass for any thread count.
//! * Accumulators are created per cell inside each task.
//!
//! ## Non-goals
//!
//! * This module does not validate buffers (handled by `validator`).
//! * This module does not build thread pools (handled by the API layer).

// External dependencies
use log::trace;
use num_traits::Float;
use rayon::prelude::*;

// Export dependencies from padconv crate
use padconv::internals::algorithms::accumulate::{Accumulate, NanInterpolatedSum, PlainSum};
use padconv::internals::algorithms::convolution::convolve_slab;
use padconv::internals::engine::executor::ConvolveExecutor;
use padconv::internals::math::geometry::Geometry;
use padconv::internals::primitives::errors::ConvolveError;

// ============================================================================
// Parallel Convolution Pass
// ============================================================================

/// Convolve all outer-axis slabs in parallel.
pub fn convolve_pass_parallel<T>(
    geometry: &Geometry,
    padded: &[T],
    kernel: &[T],
    result: &mut [T],
    nan_interpolate: bool,
    n_threads: Option<usize>,
) -> Result<(), ConvolveError>
where
    T: Float + Send + Sync,
{
    // A single worker gains nothing from task splitting
    if n_threads == Some(1) || geometry.extents[0] == 1 {
        trace!("parallel pass: falling back to sequential slabs");
        ConvolveExecutor::sequential(geometry, padded, kernel, result, nan_interpolate);
        return Ok(());
    }

    trace!(
        "parallel pass: {} slabs of {} cells on {} threads",
        geometry.extents[0],
        geometry.slab_len(),
        rayon::current_num_threads()
    );

    if nan_interpolate {
        convolve_slabs_parallel::<T, NanInterpolatedSum<T>>(geometry, padded, kernel, result);
    } else {
        convolve_slabs_parallel::<T, PlainSum<T>>(geometry, padded, kernel, result);
    }

    Ok(())
}

fn convolve_slabs_parallel<T, A>(geometry: &Geometry, padded: &[T], kernel: &[T], result: &mut [T])
where
    T: Float + Send + Sync,
    A: Accumulate<T>,
{
    result
        .par_chunks_mut(geometry.slab_len())
        .enumerate()
        .for_each(|(i, out)| convolve_slab::<T, A>(geometry, padded, kernel, i, out));
}
