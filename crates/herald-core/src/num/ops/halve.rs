// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use core::ops::Div;

/// A trait for types that support halving by value (no references).
///
/// This mirrors the semantics of dividing by two with the implementing
/// type's own division operator, but provides a trait-based API that
/// generic code can require without taking references.
///
/// For the primitive integer types the result truncates toward zero,
/// matching Rust's `/` operator.
///
/// # Examples
///
/// ```rust
/// # use herald_core::num::ops::halve::HalveVal;
/// let even: i64 = 4;
/// assert_eq!(even.halve_val(), 2);
/// let odd: i64 = 5;
/// assert_eq!(odd.halve_val(), 2); // Truncates toward zero
/// ```
pub trait HalveVal: Sized + Div<Self, Output = Self> {
    /// Halves the value, truncating toward zero for integer types.
    fn halve_val(self) -> Self;
}

macro_rules! halve_impl_val {
    ($t:ty) => {
        impl HalveVal for $t {
            #[inline(always)]
            fn halve_val(self) -> $t {
                self / 2
            }
        }
    };
}

halve_impl_val!(u8);
halve_impl_val!(u16);
halve_impl_val!(u32);
halve_impl_val!(u64);
halve_impl_val!(usize);
halve_impl_val!(u128);

halve_impl_val!(i8);
halve_impl_val!(i16);
halve_impl_val!(i32);
halve_impl_val!(i64);
halve_impl_val!(isize);
halve_impl_val!(i128);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_halve_even_values() {
        assert_eq!(4i64.halve_val(), 2);
        assert_eq!(100u32.halve_val(), 50);
        assert_eq!(0i8.halve_val(), 0);
    }

    #[test]
    fn test_halve_odd_values_truncate() {
        assert_eq!(5i64.halve_val(), 2);
        assert_eq!(1u8.halve_val(), 0);
        assert_eq!(255u8.halve_val(), 127);
    }

    #[test]
    fn test_halve_negative_values_truncate_toward_zero() {
        assert_eq!((-4i32).halve_val(), -2);
        assert_eq!((-5i32).halve_val(), -2);
    }

    #[test]
    fn test_halve_type_extremes() {
        assert_eq!(i64::MAX.halve_val(), i64::MAX / 2);
        assert_eq!(i64::MIN.halve_val(), i64::MIN / 2);
        assert_eq!(u128::MAX.halve_val(), u128::MAX / 2);
    }
}
