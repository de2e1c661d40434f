use core::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

use bytemuck::{Pod, Zeroable};

use crate::Scalar;

/// Fixed-size column vector, ie Cg `float3`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>(pub [T; N]);

pub type Float2 = Vector<f32, 2>;
pub type Float3 = Vector<f32, 3>;
pub type Float4 = Vector<f32, 4>;
pub type Double2 = Vector<f64, 2>;
pub type Double3 = Vector<f64, 3>;
pub type Double4 = Vector<f64, 4>;

// SAFETY: transparent over `[T; N]`, which is Pod for Pod `T`.
unsafe impl<T: Scalar, const N: usize> Zeroable for Vector<T, N> {}
unsafe impl<T: Scalar, const N: usize> Pod for Vector<T, N> {}

impl<T: Scalar, const N: usize> Vector<T, N> {
    #[inline]
    pub const fn new(components: [T; N]) -> Self {
        Self(components)
    }

    #[inline]
    pub fn zero() -> Self {
        Self([T::zero(); N])
    }

    #[inline]
    pub fn splat(value: T) -> Self {
        Self([value; N])
    }

    /// Applies `f` to every component.
    #[inline]
    pub fn map(self, f: impl FnMut(T) -> T) -> Self {
        Self(self.0.map(f))
    }

    /// Combines two vectors component by component.
    #[inline]
    pub fn zip_map(self, rhs: Self, mut f: impl FnMut(T, T) -> T) -> Self {
        Self(core::array::from_fn(|i| f(self.0[i], rhs.0[i])))
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.iter().all(|c| c.is_finite())
    }
}

impl<T: Scalar> Vector<T, 2> {
    #[inline]
    pub const fn xy(x: T, y: T) -> Self {
        Self([x, y])
    }
}

impl<T: Scalar> Vector<T, 3> {
    #[inline]
    pub const fn xyz(x: T, y: T, z: T) -> Self {
        Self([x, y, z])
    }
}

impl<T: Scalar> Vector<T, 4> {
    #[inline]
    pub const fn xyzw(x: T, y: T, z: T, w: T) -> Self {
        Self([x, y, z, w])
    }
}

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(components: [T; N]) -> Self {
        Self(components)
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;
    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.0[i]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.0[i]
    }
}

impl<T: Scalar, const N: usize> Add for Vector<T, N> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.zip_map(rhs, |a, b| a + b)
    }
}

impl<T: Scalar, const N: usize> Sub for Vector<T, N> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.zip_map(rhs, |a, b| a - b)
    }
}

impl<T: Scalar, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: T) -> Self {
        self.map(|c| c * rhs)
    }
}

impl<T: Scalar, const N: usize> Div<T> for Vector<T, N> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: T) -> Self {
        self.map(|c| c / rhs)
    }
}

impl<T: Scalar, const N: usize> Neg for Vector<T, N> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self.map(|c| -c)
    }
}
