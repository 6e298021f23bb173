//! # padconv — Padded-boundary convolution for Rust
//!
//! Dense 1D, 2D and 3D discrete convolution over an input that the caller has
//! already padded by the kernel half-width on every side, with optional
//! NaN-aware renormalization.
//!
//! ## What is padded convolution?
//!
//! For every output cell the engine computes a weighted sum of the kernel over
//! the matching footprint of the padded input. The kernel is flipped along
//! each axis (true convolution, not cross-correlation). Because the halo is
//! already present in the input, the loops carry no boundary checks.
//!
//! With `nan_interpolate` enabled, NaN samples are skipped and each cell is
//! renormalized by the kernel weight actually used, so gaps in the data do not
//! bias their neighbours. If no usable weight is left, the cell receives the
//! unconvolved center sample.
//!
//! ## Quick Start
//!
//! ```rust
//! use padconv::prelude::*;
//!
//! // Logical data of length 5, padded by 1 on each side for a 3-wide kernel.
//! let padded = vec![0.0, f64::NAN, 0.0, 5.0, f64::NAN, 7.0, 0.0];
//! let kernel = vec![1.0, 1.0, 1.0];
//! let mut result = vec![0.0; 5];
//!
//! let conv = Convolution::new().nan_interpolate(true).build()?;
//! conv.convolve(&mut result, &padded, &kernel, &[5], &[3])?;
//!
//! assert_eq!(result, vec![0.0, 2.5, 2.5, 6.0, 3.5]);
//! # Result::<(), ConvolveError>::Ok(())
//! ```
//!
//! ### One-shot use
//!
//! ```rust
//! use padconv::prelude::*;
//!
//! // 2x2 image padded to 4x4 for a 3x3 box kernel.
//! let padded = vec![
//!     0.0, 0.0, 0.0, 0.0,
//!     0.0, 1.0, 2.0, 0.0,
//!     0.0, 3.0, 4.0, 0.0,
//!     0.0, 0.0, 0.0, 0.0,
//! ];
//! let kernel = vec![1.0; 9];
//! let mut result = vec![0.0; 4];
//!
//! convolve_boundary_padded(&mut result, &padded, &kernel, &[2, 2], &[3, 3], false)?;
//! assert_eq!(result, vec![10.0, 10.0, 10.0, 10.0]);
//! # Result::<(), ConvolveError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Every entry point returns `Result<(), ConvolveError>`. All checks (rank,
//! extents, buffer lengths, thread count) run before the first cell is
//! written, so on error the result buffer is untouched:
//!
//! ```rust
//! use padconv::prelude::*;
//!
//! let mut result = vec![0.0; 4];
//! let err = convolve_boundary_padded(&mut result, &[0.0; 16], &[1.0; 9], &[1, 2, 2, 1], &[1, 3, 3, 1], false);
//!
//! assert_eq!(err, Err(ConvolveError::UnsupportedRank(4)));
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! padconv = { version = "0.3", default-features = false }
//! ```
//!
//! ## Parallel execution
//!
//! This crate runs on the calling thread. The `fastPadconv` crate injects a
//! rayon-backed pass over the outermost axis and produces bit-identical results.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - error types.
mod primitives;

// Layer 2: Math - index arithmetic.
mod math;

// Layer 3: Algorithms - accumulators and the slab loop.
mod algorithms;

// Layer 4: Engine - validation and execution control.
mod engine;

// High-level fluent API for padded convolution.
mod api;

// Standard padconv prelude.
pub mod prelude {
    pub use crate::api::{
        ConvolutionBuilder as Convolution, ConvolveError, Convolver, convolve_boundary_padded,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
