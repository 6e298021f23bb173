//! Footprint accumulators.
//!
//! ## Purpose
//!
//! This module provides the two accumulation strategies of padded convolution.
//! The slab loop is generic over [`Accumulate`], so the choice between plain
//! and NaN-aware accumulation is made once per call and compiled into two
//! separate loop bodies.
//!
//! ## Key concepts
//!
//! * **PlainSum**: `top += value * weight`; the kernel's own scale is used as-is.
//!   NaN and infinities propagate like ordinary floating-point arithmetic.
//! * **NanInterpolatedSum**: NaN samples are skipped. The result is renormalized by
//!   the weight actually used, `top / bot`. When `bot == 0` the unconvolved
//!   center sample is passed through.
//!
//! ## Invariants
//!
//! * Accumulators are created per output cell and never shared between threads.
//! * Only NaN is treated as missing; infinities are regular samples.
//!
//! ## Non-goals
//!
//! * This module does not apply a tolerance to `bot == 0`; the comparison is exact.

// External dependencies
use num_traits::Float;

/// Accumulation strategy for one output cell.
pub trait Accumulate<T: Float>: Sized {
    /// Fresh accumulator for a new output cell.
    fn start() -> Self;

    /// Add one footprint sample.
    fn push(&mut self, value: T, weight: T);

    /// Final value of the output cell; `center` is the unconvolved sample.
    fn finish(self, center: T) -> T;
}

/// Plain weighted sum.
#[derive(Debug, Clone, Copy)]
pub struct PlainSum<T> {
    top: T,
}

impl<T: Float> Accumulate<T> for PlainSum<T> {
    #[inline(always)]
    fn start() -> Self {
        Self { top: T::zero() }
    }

    #[inline(always)]
    fn push(&mut self, value: T, weight: T) {
        self.top = self.top + value * weight;
    }

    #[inline(always)]
    fn finish(self, _center: T) -> T {
        self.top
    }
}

/// Weighted sum that skips NaN samples and renormalizes.
#[derive(Debug, Clone, Copy)]
pub struct NanInterpolatedSum<T> {
    top: T,
    bot: T,
}

impl<T: Float> Accumulate<T> for NanInterpolatedSum<T> {
    #[inline(always)]
    fn start() -> Self {
        Self {
            top: T::zero(),
            bot: T::zero(),
        }
    }

    #[inline(always)]
    fn push(&mut self, value: T, weight: T) {
        if !value.is_nan() {
            self.top = self.top + value * weight;
            self.bot = self.bot + weight;
        }
    }

    #[inline(always)]
    fn finish(self, center: T) -> T {
        if self.bot == T::zero() {
            center
        } else {
            self.top / self.bot
        }
    }
}
