use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// Scalar types that compose [`Vector`] objects.
pub trait Scalar:
    Sync
    + Send
    + Copy
    + Default
    + PartialEq
    + PartialOrd
    + AddAssign
    + SubAssign
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Square root operation.
    fn sqrt(self) -> Self;

    /// Maximum between two scalars.
    fn max(self, rhs: Self) -> Self;
}

/// Vectors the force computations operate on.
///
/// These traits abstract the few vector operations used by the built-in
/// [`ComputeMethods`](crate::compute_method::ComputeMethod) so they can run in single or double precision.
pub trait Vector:
    Sync
    + Send
    + Copy
    + Default
    + PartialEq
    + AddAssign
    + SubAssign
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + Mul<Self::Scalar, Output = Self>
    + Div<Self::Scalar, Output = Self>
{
    /// The scalar type of the vector.
    type Scalar: Scalar;

    /// Norm squared, defined by the dot product on itself.
    fn length_squared(self) -> Self::Scalar;
}

macro_rules! vector {
    ($s: ty, $v: ty) => {
        impl Scalar for $s {
            #[inline]
            fn sqrt(self) -> $s {
                <$s>::sqrt(self)
            }

            #[inline]
            fn max(self, rhs: Self) -> $s {
                <$s>::max(self, rhs)
            }
        }

        impl Vector for $v {
            type Scalar = $s;

            #[inline]
            fn length_squared(self) -> $s {
                <$v>::length_squared(self)
            }
        }
    };
}

vector!(f32, glam::Vec2);
vector!(f64, glam::DVec2);
