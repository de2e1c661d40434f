//! Closed-form determinants for 1x1 through 4x4.
//!
//! Cofactor expansion along the first row. Integer-valued input small enough
//! to be exact in `T` gives an exact result.

use crate::Scalar;

#[inline]
pub(crate) fn det1<T: Scalar>(m: &[[T; 1]; 1]) -> T {
    m[0][0]
}

#[inline]
pub(crate) fn det2<T: Scalar>(m: &[[T; 2]; 2]) -> T {
    m[0][0] * m[1][1] - m[0][1] * m[1][0]
}

pub(crate) fn det3<T: Scalar>(m: &[[T; 3]; 3]) -> T {
    let cofactor = |k: usize| {
        let (a, b) = ((k + 1) % 3, (k + 2) % 3);
        m[1][a] * m[2][b] - m[1][b] * m[2][a]
    };
    m[0][0] * cofactor(0) + m[0][1] * cofactor(1) + m[0][2] * cofactor(2)
}

pub(crate) fn det4<T: Scalar>(m: &[[T; 4]; 4]) -> T {
    // columns rotated by k; the first-row signs alternate +, -, +, -
    let cofactor = |k: usize| {
        let (a, b, c) = ((k + 1) % 4, (k + 2) % 4, (k + 3) % 4);
        m[1][a] * (m[2][b] * m[3][c] - m[2][c] * m[3][b])
            + m[1][b] * (m[2][c] * m[3][a] - m[2][a] * m[3][c])
            + m[1][c] * (m[2][a] * m[3][b] - m[2][b] * m[3][a])
    };
    let signed = |k: usize| if k % 2 == 0 { m[0][k] } else { -m[0][k] };
    signed(0) * cofactor(0) + signed(1) * cofactor(1) + signed(2) * cofactor(2)
        + signed(3) * cofactor(3)
}
