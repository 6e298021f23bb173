//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the convolution itself: the accumulation strategies
//! and the rank-generic slab loop.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Plain and NaN-aware accumulation strategies.
pub mod accumulate;

/// Slab loop and sequential pass.
pub mod convolution;
