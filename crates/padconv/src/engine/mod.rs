//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer validates a convolution request at the call boundary, selects
//! the accumulation strategy once, and runs either the sequential pass or a
//! pass injected by an extension crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Execution engine for padded convolution.
pub mod executor;

/// Validation utilities.
pub mod validator;
