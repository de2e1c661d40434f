use bytemuck::Pod;
use num_traits::{Float, NumAssign};
use std::fmt::{Debug, Display};

mod sealed {
    #[doc(hidden)]
    pub trait Sealed {}

    macro_rules! impl_sealed {
        ($($t:ty),+) => {
            $(
                impl Sealed for $t {}
            )+
        };
    }

    impl_sealed!(f32, f64);
}
use sealed::Sealed;

/// Element types supported by vectors and matrices.
///
/// Implemented for `f32` (Cg `float`) and `f64` (Cg `double`) only.
pub trait Scalar:
    Float + NumAssign + Pod + Default + Debug + Display + Send + Sync + Sealed + 'static
{
    /// Cg spelling of the type, ie "float" or "double".
    const CG_NAME: &'static str;

    /// Converts an `f64` literal, rounding to the nearest value for `f32`.
    fn of(value: f64) -> Self;
}

impl Scalar for f32 {
    const CG_NAME: &'static str = "float";

    #[inline]
    fn of(value: f64) -> Self {
        value as f32
    }
}

impl Scalar for f64 {
    const CG_NAME: &'static str = "double";

    #[inline]
    fn of(value: f64) -> Self {
        value
    }
}
