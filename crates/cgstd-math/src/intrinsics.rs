//! Componentwise intrinsics with Cg semantics.
//!
//! The scalar functions accept either a bare [`Scalar`] or a [`Vector`] of
//! them, matching the overloads the shading language provides.

use num_traits::{Float, One, Zero};

use crate::{Scalar, Vector};

/// Values an intrinsic can be applied to component by component.
pub trait Componentwise: Copy {
    type Elem: Scalar;

    fn map(self, f: impl FnMut(Self::Elem) -> Self::Elem) -> Self;

    fn zip3_map(
        self,
        b: Self,
        c: Self,
        f: impl FnMut(Self::Elem, Self::Elem, Self::Elem) -> Self::Elem,
    ) -> Self;
}

impl<T: Scalar> Componentwise for T {
    type Elem = T;

    #[inline]
    fn map(self, mut f: impl FnMut(T) -> T) -> T {
        f(self)
    }

    #[inline]
    fn zip3_map(self, b: T, c: T, mut f: impl FnMut(T, T, T) -> T) -> T {
        f(self, b, c)
    }
}

impl<T: Scalar, const N: usize> Componentwise for Vector<T, N> {
    type Elem = T;

    #[inline]
    fn map(self, f: impl FnMut(T) -> T) -> Self {
        Vector::map(self, f)
    }

    #[inline]
    fn zip3_map(self, b: Self, c: Self, mut f: impl FnMut(T, T, T) -> T) -> Self {
        Vector(core::array::from_fn(|i| f(self[i], b[i], c[i])))
    }
}

#[inline]
pub fn abs<V: Componentwise>(x: V) -> V {
    x.map(|c| c.abs())
}

/// -1, 0 or 1. Zero maps to zero, unlike `f32::signum`.
#[inline]
pub fn sign<V: Componentwise>(x: V) -> V {
    x.map(|c| {
        if c > V::Elem::zero() {
            V::Elem::one()
        } else if c < V::Elem::zero() {
            -V::Elem::one()
        } else {
            V::Elem::zero()
        }
    })
}

/// Fractional part `x - floor(x)`, always in `[0, 1)` for finite input.
#[inline]
pub fn frac<V: Componentwise>(x: V) -> V {
    x.map(|c| c - c.floor())
}

/// Clamps to `[0, 1]`.
#[inline]
pub fn saturate<V: Componentwise>(x: V) -> V {
    x.map(|c| c.max(V::Elem::zero()).min(V::Elem::one()))
}

/// `a + w * (b - a)`; `w` is not clamped.
#[inline]
pub fn lerp<V: Componentwise>(a: V, b: V, w: V) -> V {
    a.zip3_map(b, w, |a, b, w| a + w * (b - a))
}

#[inline]
pub fn dot<T: Scalar, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> T {
    let mut acc = T::zero();
    for i in 0..N {
        acc += a[i] * b[i];
    }
    acc
}

#[inline]
pub fn cross<T: Scalar>(a: Vector<T, 3>, b: Vector<T, 3>) -> Vector<T, 3> {
    Vector::xyz(
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    )
}

#[inline]
pub fn length<T: Scalar, const N: usize>(v: Vector<T, N>) -> T {
    dot(v, v).sqrt()
}

/// Unit vector in the direction of `v`. A zero vector yields NaN components.
#[inline]
pub fn normalize<T: Scalar, const N: usize>(v: Vector<T, N>) -> Vector<T, N> {
    v / length(v)
}
