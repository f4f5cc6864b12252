//! Three-component vectors.
//!
//! All operations take their operands by value and compute every output
//! component from local copies of the inputs, so the result may always be
//! stored back into one of the operands:
//! ```
//! use gimbal_core::math::vec3;
//!
//! let mut a = vec3(1.0f32, 0.0, 0.0);
//! a = a.cross(vec3(0.0, 1.0, 0.0));
//! assert_eq!(a, vec3(0.0, 0.0, 1.0));
//! ```

use core::fmt::{self, Debug, Formatter};
use core::ops;

use crate::math::approx::ApproxEq;
use crate::math::scalar::Scalar;

/// Length at or below which [`Vec3::normalize`] yields the zero vector
/// rather than dividing by a vanishing length.
pub const NORMALIZE_EPSILON: f64 = 1e-5;

/// A 3-vector (or 3-point) with components of type `S`.
#[repr(transparent)]
#[derive(Copy, Clone, Default, PartialEq)]
pub struct Vec3<S = f32>(pub [S; 3]);

/// Returns a 3-vector with components `x`, `y`, and `z`.
#[inline]
pub const fn vec3<S>(x: S, y: S, z: S) -> Vec3<S> {
    Vec3([x, y, z])
}

/// Returns a 3-vector with all components equal to `s`.
#[inline]
pub const fn splat<S: Copy>(s: S) -> Vec3<S> {
    Vec3([s; 3])
}

impl<S> Vec3<S> {
    #[inline]
    pub const fn new(els: [S; 3]) -> Self {
        Self(els)
    }

    /// Returns the underlying components.
    #[inline]
    pub const fn as_array(&self) -> &[S; 3] {
        &self.0
    }
}

impl<S: Scalar> Vec3<S> {
    /// Returns the zero vector.
    #[inline]
    pub fn zero() -> Self {
        splat(S::ZERO)
    }

    /// Returns the x component of `self`.
    #[inline]
    pub fn x(&self) -> S {
        self.0[0]
    }
    /// Returns the y component of `self`.
    #[inline]
    pub fn y(&self) -> S {
        self.0[1]
    }
    /// Returns the z component of `self`.
    #[inline]
    pub fn z(&self) -> S {
        self.0[2]
    }

    /// Returns the component-wise sum of `self` and `other`.
    #[inline]
    pub fn add(self, other: Self) -> Self {
        let ([a0, a1, a2], [b0, b1, b2]) = (self.0, other.0);
        vec3(a0 + b0, a1 + b1, a2 + b2)
    }

    /// Returns the component-wise difference of `self` and `other`.
    #[inline]
    pub fn sub(self, other: Self) -> Self {
        let ([a0, a1, a2], [b0, b1, b2]) = (self.0, other.0);
        vec3(a0 - b0, a1 - b1, a2 - b2)
    }

    /// Returns the component-wise (Hadamard) product of `self` and `other`.
    #[inline]
    pub fn multiply(self, other: Self) -> Self {
        let ([a0, a1, a2], [b0, b1, b2]) = (self.0, other.0);
        vec3(a0 * b0, a1 * b1, a2 * b2)
    }

    /// Returns the component-wise quotient of `self` and `other`.
    ///
    /// Zero components in `other` yield infinities or NaNs.
    #[inline]
    pub fn divide(self, other: Self) -> Self {
        let ([a0, a1, a2], [b0, b1, b2]) = (self.0, other.0);
        vec3(a0 / b0, a1 / b1, a2 / b2)
    }

    /// Returns `self` multiplied by the scalar `k`.
    #[inline]
    pub fn mul_scalar(self, k: S) -> Self {
        let [a0, a1, a2] = self.0;
        vec3(a0 * k, a1 * k, a2 * k)
    }

    /// Returns `self` divided by the scalar `k`.
    ///
    /// If `k` is zero, the result consists of infinities or NaNs.
    #[inline]
    pub fn div_scalar(self, k: S) -> Self {
        let [a0, a1, a2] = self.0;
        vec3(a0 / k, a1 / k, a2 / k)
    }

    /// Returns the additive inverse of `self`.
    #[inline]
    pub fn neg(self) -> Self {
        let [a0, a1, a2] = self.0;
        vec3(-a0, -a1, -a2)
    }

    /// Linearly interpolates between `self` and `other`.
    ///
    /// Returns `(1 - t) * self + t * other`; `t` outside [0, 1] extrapolates.
    ///
    /// # Examples
    /// ```
    /// use gimbal_core::math::vec3;
    ///
    /// let a = vec3(0.0f32, 2.0, -4.0);
    /// let b = vec3(4.0, 2.0, 4.0);
    /// assert_eq!(a.lerp(b, 0.25), vec3(1.0, 2.0, -2.0));
    /// ```
    #[inline]
    pub fn lerp(self, other: Self, t: S) -> Self {
        let ([a0, a1, a2], [b0, b1, b2]) = (self.0, other.0);
        let s = S::ONE - t;
        vec3(s * a0 + t * b0, s * a1 + t * b1, s * a2 + t * b2)
    }

    /// Returns the cross product of `self` and `other`.
    ///
    /// The result is perpendicular to both operands, and its direction is
    /// given by the right-hand rule. `a.cross(b) == -b.cross(a)`.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        let ([a0, a1, a2], [b0, b1, b2]) = (self.0, other.0);
        vec3(a1 * b2 - a2 * b1, a2 * b0 - a0 * b2, a0 * b1 - a1 * b0)
    }

    /// Returns the dot product of `self` and `other`.
    #[inline]
    pub fn dot(self, other: Self) -> S {
        let ([a0, a1, a2], [b0, b1, b2]) = (self.0, other.0);
        a0 * b0 + a1 * b1 + a2 * b2
    }

    /// Returns the squared Euclidean length of `self`.
    #[inline]
    pub fn len_sqr(self) -> S {
        self.dot(self)
    }

    /// Returns the Euclidean length of `self`.
    #[inline]
    pub fn len(self) -> S {
        self.len_sqr().sqrt()
    }

    /// Returns the squared Euclidean distance between `self` and `other`.
    #[inline]
    pub fn distance_sqr(self, other: Self) -> S {
        self.sub(other).len_sqr()
    }

    /// Returns the Euclidean distance between `self` and `other`.
    #[inline]
    pub fn distance(self, other: Self) -> S {
        self.sub(other).len()
    }

    /// Returns a unit vector in the direction of `self`.
    ///
    /// If the length of `self` is at most [`NORMALIZE_EPSILON`] (or NaN),
    /// returns the zero vector instead.
    ///
    /// # Examples
    /// ```
    /// use gimbal_core::math::{Vec3, vec3};
    ///
    /// assert_eq!(vec3(0.0f32, 3.0, 0.0).normalize(), vec3(0.0, 1.0, 0.0));
    /// assert_eq!(vec3(1e-6f32, 0.0, 0.0).normalize(), Vec3::zero());
    /// ```
    pub fn normalize(self) -> Self {
        let len = self.len();
        if len > S::from_f64(NORMALIZE_EPSILON) {
            self.div_scalar(len)
        } else {
            #[cfg(feature = "tracing")]
            tracing::trace!(v = ?self, "normalizing a near-zero vector");
            Self::zero()
        }
    }

    /// Writes the components of `self` to `dst` and returns `dst`.
    #[inline]
    pub fn copy_to(self, dst: &mut Self) -> &mut Self {
        *dst = self;
        dst
    }

    /// Converts the components of `self` to another scalar type.
    #[inline]
    pub fn cast<T: Scalar>(self) -> Vec3<T> {
        Vec3(self.0.map(S::cast))
    }
}

//
// Foreign trait impls
//

impl<S: Debug> Debug for Vec3<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Vec3{:?}", self.0)
    }
}

impl<S> From<[S; 3]> for Vec3<S> {
    #[inline]
    fn from(els: [S; 3]) -> Self {
        Self(els)
    }
}

impl<S> From<Vec3<S>> for [S; 3] {
    #[inline]
    fn from(v: Vec3<S>) -> Self {
        v.0
    }
}

impl<S> ops::Index<usize> for Vec3<S> {
    type Output = S;
    #[inline]
    fn index(&self, i: usize) -> &S {
        &self.0[i]
    }
}

impl<S> ops::IndexMut<usize> for Vec3<S> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut S {
        &mut self.0[i]
    }
}

impl<S: Scalar> ops::AddAssign for Vec3<S> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = Vec3::add(*self, rhs);
    }
}

impl<S: Scalar> ops::SubAssign for Vec3<S> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = Vec3::sub(*self, rhs);
    }
}

impl<S: Scalar> ops::MulAssign<S> for Vec3<S> {
    #[inline]
    fn mul_assign(&mut self, rhs: S) {
        *self = self.mul_scalar(rhs);
    }
}

impl<S: Scalar> ops::DivAssign<S> for Vec3<S> {
    #[inline]
    fn div_assign(&mut self, rhs: S) {
        *self = self.div_scalar(rhs);
    }
}

/// Implements an operator trait in terms of an op-assign trait.
macro_rules! impl_op {
    ($trait:ident :: $method:ident, $rhs:ty, $op:tt) => {
        impl<S: Scalar> ops::$trait<$rhs> for Vec3<S> {
            type Output = Self;
            #[inline]
            fn $method(mut self, rhs: $rhs) -> Self {
                self $op rhs;
                self
            }
        }
    };
}

impl_op!(Add::add, Vec3<S>, +=);
impl_op!(Sub::sub, Vec3<S>, -=);
impl_op!(Mul::mul, S, *=);
impl_op!(Div::div, S, /=);

impl<S: Scalar> ops::Neg for Vec3<S> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Vec3::neg(self)
    }
}

impl<S: ApproxEq> ApproxEq<Self, S> for Vec3<S> {
    fn approx_eq_eps(&self, other: &Self, eps: &S) -> bool {
        self.0.approx_eq_eps(&other.0, eps)
    }
    fn relative_epsilon() -> S {
        S::relative_epsilon()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq;

    mod single {
        use super::*;

        #[test]
        fn addition_and_subtraction() {
            let a = vec3(1.0f32, 2.0, 3.0);
            let b = vec3(4.0, 5.0, 6.0);
            assert_eq!(a.add(b), vec3(5.0, 7.0, 9.0));
            assert_eq!(a + b, vec3(5.0, 7.0, 9.0));
            assert_eq!(b.sub(a), vec3(3.0, 3.0, 3.0));
            assert_eq!(a - b, vec3(-3.0, -3.0, -3.0));
        }

        #[test]
        fn scalar_multiplication_and_division() {
            let v = vec3(1.0f32, -2.0, 3.0);
            assert_eq!(v.mul_scalar(3.0), vec3(3.0, -6.0, 9.0));
            assert_eq!(v * 0.0, vec3(0.0, -0.0, 0.0));
            assert_eq!(v.div_scalar(2.0), vec3(0.5, -1.0, 1.5));
            assert_eq!(v / 4.0, vec3(0.25, -0.5, 0.75));
        }

        #[test]
        fn division_by_zero_is_not_an_error() {
            let v = vec3(1.0f32, -1.0, 0.0).div_scalar(0.0);
            assert_eq!(v.x(), f32::INFINITY);
            assert_eq!(v.y(), f32::NEG_INFINITY);
            assert!(v.z().is_nan());

            let w = vec3(1.0f32, 1.0, 1.0).divide(vec3(2.0, 0.0, 1.0));
            assert_eq!(w.x(), 0.5);
            assert_eq!(w.y(), f32::INFINITY);
        }

        #[test]
        fn componentwise_multiply_and_divide() {
            let a = vec3(1.0f32, 2.0, 3.0);
            let b = vec3(-2.0, 0.5, 3.0);
            assert_eq!(a.multiply(b), vec3(-2.0, 1.0, 9.0));
            assert_eq!(a.divide(b), vec3(-0.5, 4.0, 1.0));
        }

        #[test]
        fn negation() {
            let v = vec3(1.0f32, -2.0, 0.5);
            assert_eq!(v.neg(), vec3(-1.0, 2.0, -0.5));
            assert_eq!(-v, vec3(-1.0, 2.0, -0.5));
        }

        #[test]
        fn op_assign() {
            let mut v = vec3(1.0f32, 2.0, 3.0);
            v += vec3(1.0, 1.0, 1.0);
            assert_eq!(v, vec3(2.0, 3.0, 4.0));
            v -= vec3(2.0, 2.0, 2.0);
            assert_eq!(v, vec3(0.0, 1.0, 2.0));
            v *= 2.0;
            assert_eq!(v, vec3(0.0, 2.0, 4.0));
            v /= 4.0;
            assert_eq!(v, vec3(0.0, 0.5, 1.0));
        }

        #[test]
        fn lerp() {
            let a = vec3(-2.0f32, 1.0, 0.0);
            let b = vec3(2.0, 3.0, -4.0);
            assert_eq!(a.lerp(b, 0.0), a);
            assert_eq!(a.lerp(b, 1.0), b);
            assert_eq!(a.lerp(b, 0.5), vec3(0.0, 2.0, -2.0));
            assert_eq!(a.lerp(b, 2.0), vec3(6.0, 5.0, -8.0));
        }

        #[test]
        fn dot_product() {
            assert_eq!(vec3(1.0f32, 0.0, 0.0).dot(vec3(0.0, 1.0, 0.0)), 0.0);
            assert_eq!(vec3(1.0f32, 2.0, 3.0).dot(vec3(4.0, -5.0, 6.0)), 12.0);
        }

        #[test]
        fn cross_product() {
            let x = vec3(1.0f32, 0.0, 0.0);
            let y = vec3(0.0, 1.0, 0.0);
            let z = vec3(0.0, 0.0, 1.0);
            assert_eq!(x.cross(y), z);
            assert_eq!(y.cross(z), x);
            assert_eq!(z.cross(x), y);
            assert_eq!(z.cross(y), -x);
        }

        #[test]
        fn cross_product_into_operand() {
            let mut a = vec3(1.0f32, 2.0, 3.0);
            let b = vec3(-1.0, 0.5, 2.0);
            let expected = a.cross(b);

            a = a.cross(b);
            assert_eq!(a, expected);

            let a = vec3(1.0f32, 2.0, 3.0);
            let mut b = vec3(-1.0, 0.5, 2.0);
            b = a.cross(b);
            assert_eq!(b, expected);
        }

        #[test]
        fn lengths_and_distances() {
            let v = vec3(2.0f32, 3.0, 6.0);
            assert_eq!(v.len_sqr(), 49.0);
            assert_eq!(v.len(), 7.0);

            let p = vec3(1.0f32, 1.0, 1.0);
            let q = vec3(4.0, 5.0, 1.0);
            assert_eq!(p.distance_sqr(q), 25.0);
            assert_eq!(p.distance(q), 5.0);
            assert_eq!(q.distance(p), 5.0);
        }

        #[test]
        fn normalize() {
            let v = vec3(3.0f32, 0.0, -4.0).normalize();
            assert_approx_eq!(v, vec3(0.6, 0.0, -0.8));
            assert_approx_eq!(v.len(), 1.0);
        }

        #[test]
        fn normalize_near_zero_yields_zero() {
            assert_eq!(Vec3::<f32>::zero().normalize(), Vec3::zero());
            assert_eq!(vec3(1e-6f32, -1e-6, 0.0).normalize(), Vec3::zero());
        }

        #[test]
        fn normalize_nan_yields_zero() {
            let v = vec3(f32::NAN, 1.0, 0.0);
            assert_eq!(v.normalize(), Vec3::zero());
        }

        #[test]
        fn copy_to_returns_destination() {
            let mut dst = Vec3::zero();
            let v = vec3(1.0f32, 2.0, 3.0);
            *v.copy_to(&mut dst) *= 2.0;
            assert_eq!(dst, vec3(2.0, 4.0, 6.0));
        }

        #[test]
        fn from_array_and_back() {
            let v = Vec3::from([1.0f32, -2.0, 4.0]);
            assert_eq!(v, vec3(1.0, -2.0, 4.0));
            assert_eq!(<[f32; 3]>::from(v), [1.0, -2.0, 4.0]);
            assert_eq!(v[1], -2.0);
        }

        #[test]
        fn index_mut() {
            let mut v = Vec3::<f32>::zero();
            v[2] = 5.0;
            assert_eq!(v, vec3(0.0, 0.0, 5.0));
        }
    }

    mod double {
        use super::*;

        #[test]
        fn arithmetic() {
            let a = vec3(1.0f64, 2.0, 3.0);
            let b = vec3(4.0, 5.0, 6.0);
            assert_eq!(a + b, vec3(5.0, 7.0, 9.0));
            assert_eq!(a.cross(b), vec3(-3.0, 6.0, -3.0));
            assert_eq!(a.dot(b), 32.0);
        }

        #[test]
        fn normalize() {
            let v = vec3(1.0f64, 1.0, 1.0).normalize();
            assert_approx_eq!(v.len(), 1.0);
            assert_approx_eq!(v.x(), 1.0 / Scalar::sqrt(3.0f64));
        }

        #[test]
        fn cast() {
            let v = vec3(0.5f64, -1.25, 2.0);
            assert_eq!(v.cast::<f32>(), vec3(0.5f32, -1.25, 2.0));
        }
    }

    #[test]
    fn debug() {
        assert_eq!(
            std::format!("{:?}", vec3(1.0f32, -2.0, 3.0)),
            "Vec3[1.0, -2.0, 3.0]"
        );
    }
}
