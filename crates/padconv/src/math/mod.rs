//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the index arithmetic of padded convolution: kernel
//! half-widths, padded extents, flipped kernel offsets and row-major
//! linearization over a rank-promoted geometry.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Kernel footprint arithmetic.
pub mod kernel;

/// Rank-promoted shape and stride bookkeeping.
pub mod geometry;
