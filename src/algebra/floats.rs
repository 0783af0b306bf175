#![allow(non_snake_case)]
use num_traits::{Float, FromPrimitive, NumAssign};
use std::fmt::{Debug, Display};

/// Core traits for matrix element values.
///
/// `FloatT` relies on [`num_traits`](num_traits) for most of its constituent
/// trait bounds.  It is implemented for every type satisfying them, which in
/// practice means `f32` (the default element type) and `f64`.
pub trait FloatT:
    'static + Float + NumAssign + Default + FromPrimitive + Display + Debug + std::iter::Sum + Sized
{
}

impl<T> FloatT for T where
    T: 'static
        + Float
        + NumAssign
        + Default
        + FromPrimitive
        + Display
        + Debug
        + std::iter::Sum
        + Sized
{
}

/// Trait for converting Rust primitives to [`FloatT`](crate::algebra::FloatT)
///
/// Used internally for constants and by the
/// [comparison settings](crate::algebra::ComparisonSettings) for converting
/// defaults of primitive type.

// NB: `AsFloatT` lets us write (0.01).as_T() on constants, rather
// than T::from_f64(0.01).unwrap()
pub trait AsFloatT<T>: 'static {
    fn as_T(&self) -> T;
}

macro_rules! impl_as_FloatT {
    ($ty:ty, $ident:ident) => {
        impl<T> AsFloatT<T> for $ty
        where
            T: FromPrimitive + 'static,
        {
            #[inline]
            fn as_T(&self) -> T {
                T::$ident(*self).unwrap()
            }
        }
    };
}
impl_as_FloatT!(u32, from_u32);
impl_as_FloatT!(u64, from_u64);
impl_as_FloatT!(usize, from_usize);
impl_as_FloatT!(f32, from_f32);
impl_as_FloatT!(f64, from_f64);
