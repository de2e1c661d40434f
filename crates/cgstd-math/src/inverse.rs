//! Square matrix inverse by Gauss-Jordan elimination with partial pivoting.
//!
//! Rows are reordered logically through a permutation vector rather than
//! physically swapped; the final result is de-permuted row by row.
//!
//! [`inverse`] does not detect singular input. A zero or tiny pivot is divided
//! by like any other, so the result is then large or non-finite. Callers that
//! cannot rule out degenerate matrices use [`try_inverse`], which runs the same
//! elimination and rejects it instead.

use thiserror::Error;

use crate::determinant::{det1, det2, det3, det4};
use crate::{Matrix, Scalar};

/// Reasons [`try_inverse`] refuses to produce an inverse.
#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum InverseError {
    /// A selected pivot fell to or below `epsilon * N * max|a_ij|`.
    #[error("matrix is singular: pivot {pivot:e} in column {column} is below tolerance")]
    Singular { column: usize, pivot: f64 },
    #[error("matrix contains NaN or infinite elements")]
    NonFinite,
}

mod sealed {
    pub trait Sealed {}
}

/// Square matrices of the sizes Cg provides, 1x1 through 4x4.
pub trait Invertible: Copy + sealed::Sealed {
    type Elem: Scalar;

    /// Inverse with no singularity check.
    fn inverse(self) -> Self;

    /// Inverse, or an error if the matrix is singular or non-finite.
    fn try_inverse(self) -> Result<Self, InverseError>;

    fn determinant(&self) -> Self::Elem;
}

macro_rules! impl_invertible {
    ($($n:literal => $det:ident),+) => {
        $(
            impl<T: Scalar> sealed::Sealed for Matrix<T, $n, $n> {}

            impl<T: Scalar> Invertible for Matrix<T, $n, $n> {
                type Elem = T;

                #[inline]
                fn inverse(self) -> Self {
                    eliminate(&self, T::neg_infinity()).inverse
                }

                #[inline]
                fn try_inverse(self) -> Result<Self, InverseError> {
                    checked_inverse(&self)
                }

                #[inline]
                fn determinant(&self) -> T {
                    $det(&self.0)
                }
            }
        )+
    };
}

impl_invertible!(1 => det1, 2 => det2, 3 => det3, 4 => det4);

/// Cg `inverse(m)`.
#[inline]
pub fn inverse<M: Invertible>(m: M) -> M {
    m.inverse()
}

#[inline]
pub fn try_inverse<M: Invertible>(m: M) -> Result<M, InverseError> {
    m.try_inverse()
}

/// Cg `determinant(m)`.
#[inline]
pub fn determinant<M: Invertible>(m: M) -> M::Elem {
    m.determinant()
}

struct Elimination<T, const N: usize> {
    inverse: Matrix<T, N, N>,
    /// `perm[j]` is the row that supplied the pivot for column `j`.
    perm: [usize; N],
    /// First pivot column whose magnitude was not above the threshold.
    weak_pivot: Option<(usize, T)>,
}

fn eliminate<T: Scalar, const N: usize>(input: &Matrix<T, N, N>, threshold: T) -> Elimination<T, N> {
    let mut matrix = input.0;
    let mut scratch = Matrix::<T, N, N>::identity().0;
    let mut perm: [usize; N] = core::array::from_fn(|i| i);

    let mut weak_pivot = None;

    for j in 0..N {
        let mut best = j;
        let mut best_abs = matrix[perm[j]][j].abs();
        for k in (j + 1)..N {
            let candidate = matrix[perm[k]][j].abs();
            if best_abs < candidate {
                best = k;
                best_abs = candidate;
            }
        }
        if best != j {
            perm.swap(j, best);
        }

        let p = perm[j];
        let pivot = matrix[p][j];
        if weak_pivot.is_none() && !(pivot.abs() > threshold) {
            weak_pivot = Some((j, pivot));
        }

        for c in (j + 1)..N {
            matrix[p][c] /= pivot;
        }
        for c in 0..N {
            scratch[p][c] /= pivot;
        }

        let pivot_row = matrix[p];
        let pivot_scratch = scratch[p];
        for &r in &perm[(j + 1)..] {
            let factor = matrix[r][j];
            for c in (j + 1)..N {
                matrix[r][c] -= factor * pivot_row[c];
            }
            for c in 0..N {
                scratch[r][c] -= factor * pivot_scratch[c];
            }
        }
    }

    // `matrix` now holds a unit upper-triangular factor (in permuted row
    // order). Substitute back bottom row first; within a row the terms are
    // subtracted left to right, which fixes the rounding of the result.
    for i in (0..N).rev() {
        let r = perm[i];
        for c in 0..N {
            for j in (i + 1)..N {
                let solved = scratch[perm[j]][c];
                scratch[r][c] -= matrix[r][j] * solved;
            }
        }
    }

    Elimination {
        inverse: Matrix(core::array::from_fn(|i| scratch[perm[i]])),
        perm,
        weak_pivot,
    }
}

fn checked_inverse<T: Scalar, const N: usize>(
    input: &Matrix<T, N, N>,
) -> Result<Matrix<T, N, N>, InverseError> {
    if !input.is_finite() {
        log::debug!("rejecting {}{N}x{N} inverse: non-finite input", T::CG_NAME);
        return Err(InverseError::NonFinite);
    }

    let threshold = T::epsilon() * T::of(N as f64) * input.max_abs();
    let result = eliminate(input, threshold);

    match result.weak_pivot {
        None => Ok(result.inverse),
        Some((column, pivot)) => {
            let pivot = pivot.to_f64().unwrap_or(f64::NAN);
            log::debug!(
                "rejecting {}{N}x{N} inverse: pivot {pivot:e} in column {column} (row {})",
                T::CG_NAME,
                result.perm[column]
            );
            Err(InverseError::Singular { column, pivot })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Double1x1, Double2x2, Double3x3, Double4x4, Float1x1, Float2x2, Float3x3, Float4x4,
        Vector,
    };

    fn assert_near<T: Scalar, const N: usize>(a: &Matrix<T, N, N>, b: &Matrix<T, N, N>, eps: f64) {
        let diff = a.max_abs_diff(b);
        assert!(diff <= T::of(eps), "max diff {diff} > {eps}\n{a}\n--\n{b}");
    }

    fn assert_round_trip<T, const N: usize>(a: Matrix<T, N, N>, eps: f64)
    where
        T: Scalar,
        Matrix<T, N, N>: Invertible<Elem = T>,
    {
        let inv = inverse(a);
        let identity = Matrix::<T, N, N>::identity();
        assert_near(&(a * inv), &identity, eps);
        assert_near(&(inv * a), &identity, eps);
    }

    fn well_conditioned_3() -> Double3x3 {
        Matrix::new([[2.0, -1.0, 0.0], [-1.0, 2.0, -1.0], [0.0, -1.0, 2.0]])
    }

    fn well_conditioned_4() -> Double4x4 {
        Matrix::new([
            [4.0, 1.0, 2.0, 0.5],
            [1.0, 5.0, 0.0, 1.0],
            [2.0, 0.0, 6.0, 1.5],
            [0.5, 1.0, 1.5, 3.0],
        ])
    }

    // ── round trip ────────────────────────────────────────────────────────

    #[test]
    fn round_trip_f64_all_sizes() {
        assert_round_trip(Double1x1::new([[-3.0]]), 1e-12);
        assert_round_trip(Double2x2::new([[1.0, 2.0], [3.0, 4.0]]), 1e-12);
        assert_round_trip(well_conditioned_3(), 1e-12);
        assert_round_trip(well_conditioned_4(), 1e-12);
    }

    #[test]
    fn round_trip_f32_all_sizes() {
        assert_round_trip(Float1x1::new([[0.5]]), 1e-4);
        assert_round_trip(Float2x2::new([[4.0, 7.0], [2.0, 6.0]]), 1e-4);
        assert_round_trip(
            Float3x3::new([[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]]),
            1e-4,
        );
        assert_round_trip(
            Float4x4::new([
                [1.0, 0.0, 2.0, -1.0],
                [3.0, 0.0, 0.0, 5.0],
                [2.0, 1.0, 4.0, -3.0],
                [1.0, 0.0, 5.0, 0.0],
            ]),
            1e-4,
        );
    }

    #[test]
    fn round_trip_affine_transform() {
        // rotation about z by 90 degrees, then translation
        let m = Float4x4::new([
            [0.0, -1.0, 0.0, 3.0],
            [1.0, 0.0, 0.0, -2.0],
            [0.0, 0.0, 1.0, 0.5],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        let p = Vector::xyzw(1.0, 2.0, 3.0, 1.0);
        let back = inverse(m) * (m * p);
        assert!((back - p).0.iter().all(|c| c.abs() < 1e-5));
    }

    #[test]
    fn double_inverse_returns_original() {
        let a = well_conditioned_4();
        assert_near(&inverse(inverse(a)), &a, 1e-12);
    }

    // ── exact cases ───────────────────────────────────────────────────────

    #[test]
    fn identity_is_fixed_point() {
        assert_eq!(inverse(Float1x1::identity()), Float1x1::identity());
        assert_eq!(inverse(Float2x2::identity()), Float2x2::identity());
        assert_eq!(inverse(Double3x3::identity()), Double3x3::identity());
        assert_eq!(inverse(Double4x4::identity()), Double4x4::identity());
    }

    #[test]
    fn one_by_one_is_reciprocal() {
        for x in [2.0f32, -0.25, 3.0, 1e-3] {
            assert_eq!(inverse(Float1x1::from_rows([[x]]))[0][0], 1.0 / x);
        }
    }

    #[test]
    fn diagonal_inverts_elementwise() {
        let d = Vector::xyzw(2.0, -4.0, 0.5, 3.0);
        let expected = Vector::xyzw(0.5, -0.25, 2.0, 1.0 / 3.0);
        assert_eq!(
            inverse(Double4x4::from_diagonal(d)),
            Double4x4::from_diagonal(expected)
        );
    }

    #[test]
    fn permutation_inverts_to_transpose() {
        let p = Float4x4::new([
            [0.0, 0.0, 1.0, 0.0],
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
            [0.0, 1.0, 0.0, 0.0],
        ]);
        assert_eq!(inverse(p), p.transpose());

        let swap = Double2x2::new([[0.0, 1.0], [1.0, 0.0]]);
        assert_eq!(inverse(swap), swap);
    }

    // ── known values ──────────────────────────────────────────────────────

    #[test]
    fn two_by_two_concrete() {
        let a = Double2x2::new([[4.0, 7.0], [2.0, 6.0]]);
        let expected = Double2x2::new([[0.6, -0.7], [-0.2, 0.4]]);
        assert_near(&inverse(a), &expected, 1e-12);
    }

    #[test]
    fn four_by_four_f32_bits_are_stable() {
        // pivots on row 1 first; the back substitution order shows up in
        // the last bit of two entries
        let a = Float4x4::new([
            [0.5, 3.0, -2.0, 1.25],
            [4.0, -1.0, 0.75, 2.0],
            [-1.5, 2.5, 3.0, -0.5],
            [2.0, 0.25, -1.0, 5.0],
        ]);
        let expected: [[u32; 4]; 4] = [
            [0x3e1025b3, 0x3e990493, 0xbd097e8b, 0xbe21e372],
            [0x3e7ee1c6, 0x3d57428b, 0x3e0477b8, 0xbd8fffda],
            [0xbe1d4e2a, 0x3db4aa22, 0x3e5e5b3d, 0x3ccb6eb5],
            [0xbdcbba67, 0xbdd613c2, 0x3d4e63aa, 0x3e8b1edf],
        ];
        assert_eq!(eliminate(&a, f32::NEG_INFINITY).perm, [1, 0, 2, 3]);
        assert_eq!(inverse(a).0.map(|row| row.map(f32::to_bits)), expected);
    }

    #[test]
    fn two_by_two_matches_closed_form() {
        for [a, b, c, d] in [
            [1.0, 2.0, 3.0, 4.0],
            [0.0, 1.0, -2.0, 5.0],
            [-3.0, 0.5, 7.0, 2.0],
            [1e-3, 1.0, 1.0, 1.0],
        ] {
            let det = a * d - b * c;
            let expected = Double2x2::new([[d, -b], [-c, a]]) * (1.0 / det);
            assert_near(&inverse(Double2x2::new([[a, b], [c, d]])), &expected, 1e-9);
        }
    }

    #[test]
    fn zero_leading_entry_needs_pivoting() {
        let a = Double3x3::new([[0.0, 1.0, 2.0], [1.0, 0.0, 3.0], [4.0, -3.0, 8.0]]);
        let expected = Double3x3::new([[-4.5, 7.0, -1.5], [-2.0, 4.0, -1.0], [1.5, -2.0, 0.5]]);
        assert_near(&inverse(a), &expected, 1e-12);
    }

    #[test]
    fn pivot_ties_keep_first_row() {
        let a = Double3x3::new([[2.0, 1.0, 0.0], [-2.0, 3.0, 1.0], [1.0, 0.0, 5.0]]);
        assert_eq!(eliminate(&a, f64::NEG_INFINITY).perm, [0, 1, 2]);
    }

    #[test]
    fn largest_magnitude_becomes_pivot() {
        let a = Double3x3::new([[1.0, 2.0, 0.0], [-6.0, 1.0, 0.0], [3.0, 0.0, 1.0]]);
        let e = eliminate(&a, f64::NEG_INFINITY);
        assert_eq!(e.perm[0], 1);
        let mut sorted = e.perm;
        sorted.sort_unstable();
        assert_eq!(sorted, [0, 1, 2]);
    }

    // ── singular input ────────────────────────────────────────────────────

    #[test]
    fn singular_input_is_not_guarded() {
        let s = Double3x3::new([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [1.0, 0.0, 1.0]]);
        let inv = inverse(s);
        assert!(!inv.is_finite() || inv.max_abs() > 1e12);

        let zero = Float2x2::zero();
        assert!(!inverse(zero).is_finite());
    }

    #[test]
    fn try_inverse_rejects_singular() {
        let s = Double2x2::new([[1.0, 2.0], [2.0, 4.0]]);
        match try_inverse(s) {
            Err(InverseError::Singular { column, .. }) => assert_eq!(column, 1),
            other => panic!("expected singular, got {other:?}"),
        }
        assert!(matches!(
            try_inverse(Double4x4::zero()),
            Err(InverseError::Singular { column: 0, .. })
        ));
    }

    #[test]
    fn try_inverse_rejects_non_finite() {
        let a = Float2x2::new([[1.0, f64::NAN], [0.0, 1.0]]);
        assert_eq!(try_inverse(a), Err(InverseError::NonFinite));
        let b = Float1x1::new([[f64::INFINITY]]);
        assert_eq!(try_inverse(b), Err(InverseError::NonFinite));
    }

    #[test]
    fn try_inverse_matches_inverse_when_regular() {
        let a = well_conditioned_4();
        assert_eq!(try_inverse(a), Ok(inverse(a)));
        let tiny = Double2x2::new([[1e-200, 0.0], [0.0, 1e-200]]);
        assert!(try_inverse(tiny).is_ok());
    }

    // ── determinant ───────────────────────────────────────────────────────

    #[test]
    fn determinant_values() {
        assert_eq!(determinant(Double4x4::identity()), 1.0);
        assert_eq!(determinant(Double2x2::new([[0.0, 1.0], [1.0, 0.0]])), -1.0);
        assert_eq!(determinant(Double1x1::new([[-7.0]])), -7.0);
        assert!((determinant(Double2x2::new([[4.0, 7.0], [2.0, 6.0]])) - 10.0).abs() < 1e-12);
        assert!((determinant(well_conditioned_3()) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn determinant_of_integer_matrices_is_exact() {
        assert_eq!(determinant(Float3x3::new([[2.0, 7.0, 1.0], [3.0, 5.0, 9.0], [6.0, 4.0, 11.0]])), 167.0);
        assert_eq!(determinant(Float3x3::new([[7.0, 2.0, 5.0], [3.0, 9.0, 1.0], [4.0, 6.0, 8.0]])), 332.0);
        assert_eq!(
            determinant(Float4x4::new([
                [1.0, 0.0, 2.0, -1.0],
                [3.0, 0.0, 0.0, 5.0],
                [2.0, 1.0, 4.0, -3.0],
                [1.0, 0.0, 5.0, 0.0],
            ])),
            30.0
        );
    }

    #[test]
    fn determinant_of_inverse_is_reciprocal() {
        let a = well_conditioned_4();
        let product = determinant(a) * determinant(inverse(a));
        assert!((product - 1.0).abs() < 1e-12);
    }
}
