//! Layer 4: Engine
//!
//! This layer provides the parallel execution engine for padded convolution.
//! It distributes outer-axis slabs of the result across CPU cores.

// Parallel execution engine using CPU threads
#[cfg(feature = "cpu")]
pub mod executor;
