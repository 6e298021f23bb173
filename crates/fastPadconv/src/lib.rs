//! # fastPadconv — Parallel padded-boundary convolution for Rust
//!
//! Multi-threaded extension of [`padconv`](https://docs.rs/padconv). The
//! convolution is identical; `fastPadconv` distributes the outermost axis of
//! the result across a rayon thread pool and accepts `ndarray` arrays.
//!
//! ## Quick Start
//!
//! ```rust
//! use fastPadconv::prelude::*;
//!
//! // 3x3 image padded to 5x5 for a 3x3 kernel (fill value 0).
//! let mut padded = vec![0.0; 25];
//! for i in 0..3 {
//!     for j in 0..3 {
//!         padded[(i + 1) * 5 + (j + 1)] = (i * 3 + j) as f64;
//!     }
//! }
//! let kernel = vec![0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0];
//! let mut result = vec![0.0; 9];
//!
//! let conv = Convolution::new().threads(4).build()?;
//! conv.convolve(&mut result, &padded, &kernel, &[3, 3], &[3, 3])?;
//!
//! // A centered delta kernel reproduces the image.
//! assert_eq!(result, (0..9).map(|v| v as f64).collect::<Vec<_>>());
//! # Result::<(), ConvolveError>::Ok(())
//! ```
//!
//! ### One-shot use
//!
//! ```rust
//! use fastPadconv::prelude::*;
//!
//! let padded = vec![0.0, 1.0, f64::NAN, 3.0, 0.0];
//! let mut result = vec![0.0; 3];
//!
//! // (result, padded, kernel, dims, kernel_dims, nan_interpolate, n_threads)
//! convolve_boundary_padded(&mut result, &padded, &[1.0, 1.0, 1.0], &[3], &[3], true, 2)?;
//! assert_eq!(result, vec![0.5, 2.0, 1.5]);
//! # Result::<(), ConvolveError>::Ok(())
//! ```
//!
//! ### ndarray Integration
//!
//! ```rust
//! use fastPadconv::prelude::*;
//! use ndarray::{Array2, array};
//!
//! let padded = Array2::<f64>::ones((6, 7));
//! let kernel = array![[1.0, 2.0, 1.0], [2.0, 4.0, 2.0], [1.0, 2.0, 1.0]];
//! let mut result = Array2::<f64>::zeros((4, 5));
//!
//! let conv = Convolution::new().build()?;
//! conv.convolve_array(&mut result, &padded, &kernel)?;
//!
//! assert!(result.iter().all(|&v| v == 16.0));
//! # Result::<(), ConvolveError>::Ok(())
//! ```
//!
//! The padded array must satisfy `padded = result + 2 * (kernel / 2)` along
//! every axis; otherwise `ConvolveError::ShapeMismatch` is returned before any
//! cell is written.
//!
//! ## Determinism
//!
//! Each output cell is computed by exactly one task with its own accumulator,
//! so results are bit-identical for every thread count, including the
//! sequential pass of `padconv`.

#![allow(non_snake_case)]

// Layer 4: Engine - parallel execution.
mod engine;

// High-level fluent API for parallel padded convolution.
mod api;

// Input data handling.
mod input;

// Standard fastPadconv prelude.
pub mod prelude {
    pub use crate::api::{
        ConvolveError, ParallelConvolutionBuilder as Convolution, ParallelConvolver,
        convolve_boundary_padded,
    };
    pub use crate::input::{ConvolveInput, ConvolveOutput};
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
    pub mod input {
        pub use crate::input::*;
    }
}
