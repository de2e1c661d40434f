use core::fmt;
use core::ops::{Index, IndexMut, Mul};

use bytemuck::{Pod, Zeroable};

use crate::{Scalar, Vector};

/// Row-major `R`x`C` matrix, ie Cg `float3x4` is `Matrix<f32, 3, 4>`.
///
/// `m[row][col]` addresses a single element; `m[row]` is the whole row.
#[derive(Debug, Copy, Clone, PartialEq)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize>(pub [[T; C]; R]);

pub type Float1x1 = Matrix<f32, 1, 1>;
pub type Float2x2 = Matrix<f32, 2, 2>;
pub type Float3x3 = Matrix<f32, 3, 3>;
pub type Float4x4 = Matrix<f32, 4, 4>;
pub type Double1x1 = Matrix<f64, 1, 1>;
pub type Double2x2 = Matrix<f64, 2, 2>;
pub type Double3x3 = Matrix<f64, 3, 3>;
pub type Double4x4 = Matrix<f64, 4, 4>;

// SAFETY: transparent over `[[T; C]; R]`, which is Pod for Pod `T`.
unsafe impl<T: Scalar, const R: usize, const C: usize> Zeroable for Matrix<T, R, C> {}
unsafe impl<T: Scalar, const R: usize, const C: usize> Pod for Matrix<T, R, C> {}

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    #[inline]
    pub const fn from_rows(rows: [[T; C]; R]) -> Self {
        Self(rows)
    }

    /// Builds a matrix from `f64` literals, converting to `T`.
    pub fn new(rows: [[f64; C]; R]) -> Self {
        Self(rows.map(|row| row.map(T::of)))
    }

    #[inline]
    pub fn zero() -> Self {
        Self([[T::zero(); C]; R])
    }

    #[inline]
    pub fn row(&self, r: usize) -> Vector<T, C> {
        Vector(self.0[r])
    }

    #[inline]
    pub fn col(&self, c: usize) -> Vector<T, R> {
        Vector(core::array::from_fn(|r| self.0[r][c]))
    }

    pub fn transpose(&self) -> Matrix<T, C, R> {
        Matrix(core::array::from_fn(|c| core::array::from_fn(|r| self.0[r][c])))
    }

    #[inline]
    pub fn map(self, mut f: impl FnMut(T) -> T) -> Self {
        Self(self.0.map(|row| row.map(&mut f)))
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.0.iter().flatten().all(|e| e.is_finite())
    }

    /// Largest absolute element, zero for an empty matrix.
    pub fn max_abs(&self) -> T {
        self.0
            .iter()
            .flatten()
            .fold(T::zero(), |acc, e| acc.max(e.abs()))
    }

    /// Largest absolute elementwise difference. NaN anywhere yields NaN.
    pub fn max_abs_diff(&self, other: &Self) -> T {
        let mut max = T::zero();
        for (a, b) in self.0.iter().flatten().zip(other.0.iter().flatten()) {
            let d = (*a - *b).abs();
            if d.is_nan() {
                return d;
            }
            max = max.max(d);
        }
        max
    }

    #[inline]
    pub fn approx_eq(&self, other: &Self, eps: T) -> bool {
        self.max_abs_diff(other) <= eps
    }

    /// Raw bytes in row-major order, suitable for a uniform upload.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    pub fn identity() -> Self {
        Self(core::array::from_fn(|r| {
            core::array::from_fn(|c| if r == c { T::one() } else { T::zero() })
        }))
    }

    pub fn from_diagonal(diagonal: Vector<T, N>) -> Self {
        let mut m = Self::zero();
        for i in 0..N {
            m.0[i][i] = diagonal[i];
        }
        m
    }

    pub fn diagonal(&self) -> Vector<T, N> {
        Vector(core::array::from_fn(|i| self.0[i][i]))
    }
}

impl<T: Scalar, const R: usize, const C: usize> Default for Matrix<T, R, C> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T, const R: usize, const C: usize> From<[[T; C]; R]> for Matrix<T, R, C> {
    #[inline]
    fn from(rows: [[T; C]; R]) -> Self {
        Self(rows)
    }
}

impl<T, const R: usize, const C: usize> Index<usize> for Matrix<T, R, C> {
    type Output = [T; C];
    #[inline]
    fn index(&self, r: usize) -> &[T; C] {
        &self.0[r]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<usize> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, r: usize) -> &mut [T; C] {
        &mut self.0[r]
    }
}

impl<T: Scalar, const R: usize, const K: usize, const C: usize> Mul<Matrix<T, K, C>>
    for Matrix<T, R, K>
{
    type Output = Matrix<T, R, C>;

    fn mul(self, rhs: Matrix<T, K, C>) -> Matrix<T, R, C> {
        Matrix(core::array::from_fn(|r| {
            core::array::from_fn(|c| {
                let mut acc = T::zero();
                for k in 0..K {
                    acc += self.0[r][k] * rhs.0[k][c];
                }
                acc
            })
        }))
    }
}

impl<T: Scalar, const R: usize, const C: usize> Mul<Vector<T, C>> for Matrix<T, R, C> {
    type Output = Vector<T, R>;

    fn mul(self, rhs: Vector<T, C>) -> Vector<T, R> {
        Vector(core::array::from_fn(|r| crate::dot(self.row(r), rhs)))
    }
}

impl<T: Scalar, const R: usize, const C: usize> Mul<T> for Matrix<T, R, C> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: T) -> Self {
        self.map(|e| e * rhs)
    }
}

impl<T: Scalar, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (j, e) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                match f.precision() {
                    Some(p) => write!(f, "{e:.p$}")?,
                    None => write!(f, "{e}")?,
                }
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}
