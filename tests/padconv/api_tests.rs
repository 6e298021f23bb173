//! Tests for the public padconv API.
//!
//! These tests verify the numerical contract of padded convolution through the
//! user-facing entry points:
//! - NaN-aware renormalization and the center-sample fallback
//! - Kernel flipping (convolution, not correlation)
//! - Linearity, full-weight identity and separability
//! - Shape law and boundary error reporting
//!
//! ## Test Organization
//!
//! 1. **Missing Data** - NaN skipping, renormalization, fallback
//! 2. **Flip** - Asymmetric kernels in 1D and 2D
//! 3. **Algebraic Properties** - Linearity, identity, separability
//! 4. **Errors** - Shape law, rank, builder parameters

use approx::assert_relative_eq;
use padconv::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

/// Pad a row-major array of rank 1 to 3 with `fill` by the kernel half-widths.
fn pad(data: &[f64], dims: &[usize], kernel_dims: &[usize], fill: f64) -> Vec<f64> {
    let mut e = [1usize; 3];
    let mut w = [0usize; 3];
    for a in 0..dims.len() {
        e[a] = dims[a];
        w[a] = kernel_dims[a] / 2;
    }
    let p = [e[0] + 2 * w[0], e[1] + 2 * w[1], e[2] + 2 * w[2]];

    let mut out = vec![fill; p[0] * p[1] * p[2]];
    for i in 0..e[0] {
        for j in 0..e[1] {
            for k in 0..e[2] {
                out[((i + w[0]) * p[1] + (j + w[1])) * p[2] + (k + w[2])] =
                    data[(i * e[1] + j) * e[2] + k];
            }
        }
    }
    out
}

/// Deterministic pseudo-random samples in [-1, 1).
fn samples(n: usize, seed: u64) -> Vec<f64> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    (0..n)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((state >> 11) as f64 / (1u64 << 53) as f64) * 2.0 - 1.0
        })
        .collect()
}

fn convolve(
    data: &[f64],
    dims: &[usize],
    kernel: &[f64],
    kernel_dims: &[usize],
    nan_interpolate: bool,
) -> Vec<f64> {
    let padded = pad(data, dims, kernel_dims, 0.0);
    let mut result = vec![0.0; data.len()];
    convolve_boundary_padded(&mut result, &padded, kernel, dims, kernel_dims, nan_interpolate)
        .unwrap();
    result
}

// ============================================================================
// Missing Data Tests
// ============================================================================

/// Test renormalized averages around NaN gaps.
///
/// Verifies the reference example with kernel [1, 1, 1].
#[test]
fn test_nan_interpolate_reference_example() {
    let padded = vec![0.0, f64::NAN, 0.0, 5.0, f64::NAN, 7.0, 0.0];
    let kernel = vec![1.0, 1.0, 1.0];
    let mut result = vec![-1.0; 5];

    let conv = Convolution::new().nan_interpolate(true).build().unwrap();
    conv.convolve(&mut result, &padded, &kernel, &[5], &[3])
        .unwrap();

    assert_eq!(result, vec![0.0, 2.5, 2.5, 6.0, 3.5]);
}

/// Test that a fully missing footprint yields the center sample.
///
/// With an odd kernel the center is part of the footprint, so it is NaN too.
#[test]
fn test_all_nan_footprint_passes_center() {
    let padded = vec![0.0, f64::NAN, f64::NAN, f64::NAN, 4.0];
    let mut result = vec![0.0; 3];

    convolve_boundary_padded(&mut result, &padded, &[1.0, 1.0, 1.0], &[3], &[3], true).unwrap();

    assert_eq!(result[0], 0.0);
    assert!(result[1].is_nan(), "All-NaN footprint should pass the center through");
    assert_eq!(result[2], 4.0);
}

/// Test that zero usable weight yields the center sample.
///
/// Only the center is finite, but its kernel weight is zero.
#[test]
fn test_zero_used_weight_passes_center() {
    let padded = vec![0.0, f64::NAN, 3.0, f64::NAN, 0.0];
    let mut result = vec![0.0; 3];

    convolve_boundary_padded(&mut result, &padded, &[1.0, 0.0, 1.0], &[3], &[3], true).unwrap();

    assert_eq!(result, vec![1.5, 3.0, 1.5]);
}

/// Test that plain mode propagates NaN.
#[test]
fn test_plain_mode_propagates_nan() {
    let padded = vec![0.0, f64::NAN, 0.0, 5.0, f64::NAN, 7.0, 0.0];
    let mut result = vec![0.0; 5];

    convolve_boundary_padded(&mut result, &padded, &[1.0, 1.0, 1.0], &[5], &[3], false).unwrap();

    assert!(result.iter().all(|v| v.is_nan()), "Every footprint holds a NaN");
}

/// Test that infinities are regular samples in both modes.
#[test]
fn test_infinity_is_not_missing() {
    let padded = vec![0.0, 1.0, f64::INFINITY, 1.0, 0.0, 0.0, 0.0];
    let expected = vec![f64::INFINITY, f64::INFINITY, f64::INFINITY, 1.0, 0.0];

    for nan_interpolate in [false, true] {
        let mut result = vec![0.0; 5];
        convolve_boundary_padded(&mut result, &padded, &[1.0, 1.0, 1.0], &[5], &[3], nan_interpolate)
            .unwrap();
        assert_eq!(result[..3], expected[..3]);
        assert_eq!(result[3], if nan_interpolate { 1.0 / 3.0 } else { 1.0 });
        assert_eq!(result[4], 0.0);
    }
}

/// Test NaN-aware mode in 2D around a single gap.
///
/// The gap cell is replaced by the mean of its eight neighbours.
#[test]
fn test_nan_interpolate_fills_gap_2d() {
    let mut data = vec![2.0; 25];
    data[12] = f64::NAN;

    let result = convolve(&data, &[5, 5], &[1.0; 9], &[3, 3], true);

    assert_eq!(result[12], 2.0);
    // Corner footprint: 4 data cells of 2.0 and 5 padding zeros.
    assert_relative_eq!(result[0], 8.0 / 9.0, epsilon = 1e-15);
}

// ============================================================================
// Flip Tests
// ============================================================================

/// Test that an asymmetric kernel is flipped.
///
/// Convolving a ramp with [1, 0, -1] gives a positive derivative; the
/// unflipped correlation would give a negative one.
#[test]
fn test_flip_1d_ramp() {
    let data = vec![0.0, 1.0, 2.0, 3.0, 4.0];
    let result = convolve(&data, &[5], &[1.0, 0.0, -1.0], &[3], false);

    assert_eq!(result, vec![1.0, 2.0, 2.0, 2.0, -3.0]);
    assert_ne!(result, vec![-1.0, -2.0, -2.0, -2.0, 3.0]);
}

/// Test flipping along both axes of a 2D kernel.
///
/// A delta at kernel cell (0, 0) reads the padded cell (i + 2, j + 2),
/// i.e. the data cell (i + 1, j + 1).
#[test]
fn test_flip_2d_corner_delta() {
    let data: Vec<f64> = (1..=9).map(f64::from).collect();
    let mut kernel = vec![0.0; 9];
    kernel[0] = 1.0;

    let result = convolve(&data, &[3, 3], &kernel, &[3, 3], false);

    assert_eq!(result, vec![5.0, 6.0, 0.0, 8.0, 9.0, 0.0, 0.0, 0.0, 0.0]);
}

/// Test that even kernel extents read `k` cells from the output coordinate.
#[test]
fn test_even_kernel_extent() {
    let padded = vec![0.0, 1.0, 2.0, 3.0, 0.0];
    let mut result = vec![0.0; 3];

    convolve_boundary_padded(&mut result, &padded, &[1.0, 2.0], &[3], &[2], false).unwrap();

    // result[i] = padded[i] * k[1] + padded[i + 1] * k[0]
    assert_eq!(result, vec![1.0, 4.0, 7.0]);
}

// ============================================================================
// Algebraic Property Tests
// ============================================================================

/// Test linearity of plain mode.
#[test]
fn test_linearity_plain_mode() {
    let dims = [6, 7];
    let kernel_dims = [3, 5];
    let x1 = samples(42, 1);
    let x2 = samples(42, 2);
    let kernel = samples(15, 3);
    let (a, b) = (1.75, -0.5);

    let combined: Vec<f64> = x1.iter().zip(&x2).map(|(p, q)| a * p + b * q).collect();

    let lhs = convolve(&combined, &dims, &kernel, &kernel_dims, false);
    let r1 = convolve(&x1, &dims, &kernel, &kernel_dims, false);
    let r2 = convolve(&x2, &dims, &kernel, &kernel_dims, false);

    for (l, (p, q)) in lhs.iter().zip(r1.iter().zip(&r2)) {
        assert_relative_eq!(*l, a * p + b * q, epsilon = 1e-12);
    }
}

/// Test that NaN-aware mode without NaNs divides by the kernel sum.
#[test]
fn test_full_weight_identity() {
    let dims = [4, 5, 6];
    let kernel_dims = [3, 3, 3];
    let data = samples(120, 7);
    let kernel: Vec<f64> = samples(27, 8).iter().map(|v| v.abs() + 0.1).collect();
    let kernel_sum: f64 = kernel.iter().sum();

    let plain = convolve(&data, &dims, &kernel, &kernel_dims, false);
    let aware = convolve(&data, &dims, &kernel, &kernel_dims, true);

    for (p, n) in plain.iter().zip(&aware) {
        assert_relative_eq!(*n, p / kernel_sum, epsilon = 1e-12, max_relative = 1e-12);
    }
}

/// Test that 2D convolution of separable data equals the 1D outer product.
#[test]
fn test_separable_2d_matches_1d() {
    let u = vec![1.0, 2.0, -3.0, 4.0];
    let v = vec![0.5, -1.0, 2.0, 3.0, 1.0];
    let kx = vec![1.0, 2.0, 1.0];
    let ky = vec![0.25, 0.5, 0.25, 0.125, -0.5];

    let data: Vec<f64> = u.iter().flat_map(|a| v.iter().map(move |b| a * b)).collect();
    let kernel: Vec<f64> = kx.iter().flat_map(|a| ky.iter().map(move |b| a * b)).collect();

    let full = convolve(&data, &[4, 5], &kernel, &[3, 5], false);
    let cu = convolve(&u, &[4], &kx, &[3], false);
    let cv = convolve(&v, &[5], &ky, &[5], false);

    for i in 0..4 {
        for j in 0..5 {
            assert_relative_eq!(full[i * 5 + j], cu[i] * cv[j], epsilon = 1e-12);
        }
    }
}

/// Test that 3D convolution of separable data equals the 1D outer product.
#[test]
fn test_separable_3d_matches_1d() {
    let u = samples(3, 11);
    let v = samples(4, 12);
    let w = samples(5, 13);
    let kx = vec![1.0, -2.0, 1.0];
    let ky = vec![0.5, 1.0, 0.5];
    let kz = vec![1.0, 4.0, 6.0, 4.0, 1.0];

    let mut data = Vec::with_capacity(60);
    for a in &u {
        for b in &v {
            for c in &w {
                data.push(a * b * c);
            }
        }
    }
    let mut kernel = Vec::with_capacity(45);
    for a in &kx {
        for b in &ky {
            for c in &kz {
                kernel.push(a * b * c);
            }
        }
    }

    let full = convolve(&data, &[3, 4, 5], &kernel, &[3, 3, 5], false);
    let cu = convolve(&u, &[3], &kx, &[3], false);
    let cv = convolve(&v, &[4], &ky, &[3], false);
    let cw = convolve(&w, &[5], &kz, &[5], false);

    for i in 0..3 {
        for j in 0..4 {
            for k in 0..5 {
                assert_relative_eq!(
                    full[(i * 4 + j) * 5 + k],
                    cu[i] * cv[j] * cw[k],
                    epsilon = 1e-12
                );
            }
        }
    }
}

/// Test that single-precision buffers are supported.
#[test]
fn test_f32_support() {
    let padded: Vec<f32> = vec![0.0, 1.0, 2.0, 3.0, 0.0];
    let mut result = vec![0.0f32; 3];

    convolve_boundary_padded(&mut result, &padded, &[1.0f32, 1.0, 1.0], &[3], &[3], false).unwrap();

    assert_eq!(result, vec![3.0f32, 6.0, 5.0]);
}

// ============================================================================
// Error Tests
// ============================================================================

/// Test that a padded buffer violating the shape law is reported.
///
/// Verifies the result buffer is left untouched.
#[test]
fn test_shape_law_violation() {
    let mut result = vec![42.0; 5];
    // Padded for a 3-wide kernel, but a 5-wide kernel is declared.
    let padded = vec![0.0; 7];
    let res = convolve_boundary_padded(&mut result, &padded, &[1.0; 5], &[5], &[5], false);

    assert_eq!(
        res,
        Err(ConvolveError::LengthMismatch {
            buffer: "padded",
            expected: 9,
            got: 7
        })
    );
    assert!(result.iter().all(|&v| v == 42.0), "Result must be untouched");
}

/// Test that the result length is checked.
#[test]
fn test_result_length_mismatch() {
    let mut result = vec![0.0; 4];
    let res = convolve_boundary_padded(&mut result, &[0.0; 7], &[1.0; 3], &[5], &[3], false);

    assert_eq!(
        res,
        Err(ConvolveError::LengthMismatch {
            buffer: "result",
            expected: 5,
            got: 4
        })
    );
}

/// Test that unsupported ranks are rejected.
#[test]
fn test_unsupported_rank() {
    let mut result = vec![0.0; 1];

    let res = convolve_boundary_padded(&mut result, &[0.0], &[1.0], &[], &[], false);
    assert_eq!(res, Err(ConvolveError::UnsupportedRank(0)));

    let res = convolve_boundary_padded(
        &mut result,
        &[0.0],
        &[1.0],
        &[1, 1, 1, 1],
        &[1, 1, 1, 1],
        false,
    );
    assert_eq!(res, Err(ConvolveError::UnsupportedRank(4)));
}

/// Test that data and kernel ranks must agree.
#[test]
fn test_rank_mismatch() {
    let mut result = vec![0.0; 4];
    let res = convolve_boundary_padded(&mut result, &[0.0; 16], &[1.0; 3], &[2, 2], &[3], false);

    assert_eq!(res, Err(ConvolveError::RankMismatch { data: 2, kernel: 1 }));
}

/// Test that extents with an unrepresentable cell count are rejected.
///
/// The buffers match the wrapped-around product, so only the overflow check
/// can catch this request.
#[test]
fn test_extent_overflow() {
    let mut result = vec![42.0; 4];
    let res = convolve_boundary_padded(
        &mut result,
        &[1.0; 4],
        &[1.0],
        &[usize::MAX / 4 + 2, 4],
        &[1, 1],
        false,
    );

    assert_eq!(res, Err(ConvolveError::ExtentOverflow { buffer: "result" }));
    assert_eq!(result, vec![42.0; 4]);
}

/// Test builder parameter validation.
#[test]
fn test_builder_validation() {
    let res = Convolution::<f64>::new()
        .nan_interpolate(true)
        .nan_interpolate(false)
        .build();
    assert!(matches!(
        res,
        Err(ConvolveError::DuplicateParameter {
            parameter: "nan_interpolate"
        })
    ));

    let res = Convolution::<f64>::new().threads(0).build();
    assert!(matches!(res, Err(ConvolveError::InvalidThreadCount(0))));
}

/// Test that error messages carry their context.
#[test]
fn test_error_display() {
    assert_eq!(
        ConvolveError::UnsupportedRank(4).to_string(),
        "Unsupported rank: 4 (must be 1, 2 or 3)"
    );
    assert_eq!(
        ConvolveError::ShapeMismatch {
            axis: 1,
            expected: 7,
            got: 6
        }
        .to_string(),
        "Shape mismatch: padded axis 1 has extent 6, expected 7"
    );
    assert_eq!(
        ConvolveError::ExtentOverflow { buffer: "padded" }.to_string(),
        "Extent overflow: padded element count exceeds usize::MAX"
    );
}
