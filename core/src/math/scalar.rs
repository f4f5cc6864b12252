//! The element type of vectors and matrices.

use core::fmt::Debug;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// Trait for the real-number types that vectors and matrices are made of.
///
/// Implemented for `f32`, the default, and for `f64` when more precision is
/// wanted. The transcendental functions are only available if at least one
/// of the floating-point features (`std`, `libm`, `mm`) is enabled.
pub trait Scalar:
    Copy
    + Default
    + Debug
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
{
    /// The additive identity.
    const ZERO: Self;
    /// The multiplicative identity.
    const ONE: Self;

    /// Converts `x` to `Self`, rounding if necessary.
    fn from_f64(x: f64) -> Self;

    /// Converts `self` to an `f64`.
    fn to_f64(self) -> f64;

    /// Converts `self` to another scalar type, rounding if necessary.
    ///
    /// # Examples
    /// ```
    /// use gimbal_core::math::Scalar;
    ///
    /// assert_eq!(0.5f32.cast::<f64>(), 0.5);
    /// ```
    #[inline]
    fn cast<T: Scalar>(self) -> T {
        T::from_f64(self.to_f64())
    }

    fn abs(self) -> Self;
    fn sqrt(self) -> Self;
    fn is_finite(self) -> bool;

    #[cfg(feature = "fp")]
    fn sin(self) -> Self;
    #[cfg(feature = "fp")]
    fn cos(self) -> Self;
    #[cfg(feature = "fp")]
    fn tan(self) -> Self;
}

/// Implements `Scalar` for a primitive float in terms of the
/// corresponding function set in [`float`][super::float].
macro_rules! impl_scalar {
    ($ty:ident) => {
        impl Scalar for $ty {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            #[inline]
            fn from_f64(x: f64) -> Self {
                x as $ty
            }
            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn abs(self) -> Self {
                use super::float::$ty;
                $ty::abs(self)
            }
            #[inline]
            fn sqrt(self) -> Self {
                use super::float::$ty;
                $ty::sqrt(self)
            }
            #[inline]
            fn is_finite(self) -> bool {
                <$ty>::is_finite(self)
            }

            #[cfg(feature = "fp")]
            #[inline]
            fn sin(self) -> Self {
                use super::float::$ty;
                $ty::sin(self)
            }
            #[cfg(feature = "fp")]
            #[inline]
            fn cos(self) -> Self {
                use super::float::$ty;
                $ty::cos(self)
            }
            #[cfg(feature = "fp")]
            #[inline]
            fn tan(self) -> Self {
                use super::float::$ty;
                $ty::tan(self)
            }
        }
    };
}

impl_scalar!(f32);
impl_scalar!(f64);
