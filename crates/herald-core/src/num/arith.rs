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

use num_traits::Num;

/// Returns the arithmetic sum of two operands of the same numeric type.
///
/// No validation is performed: overflow, precision, and rounding follow
/// the operand type's own addition semantics.
///
/// # Examples
///
/// ```rust
/// # use herald_core::num::arith::add;
/// assert_eq!(add(1, 2), 3);
/// assert_eq!(add(1.5, 2.25), 3.75);
/// assert_eq!(add(-7i64, 7i64), 0);
/// ```
#[inline(always)]
pub fn add<T>(a: T, b: T) -> T
where
    T: Num,
{
    a + b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_integers() {
        assert_eq!(add(1, 2), 3);
        assert_eq!(add(0i64, 0i64), 0);
        assert_eq!(add(-3i32, 5i32), 2);
    }

    #[test]
    fn test_add_floats() {
        assert_eq!(add(1.5f64, 2.25f64), 3.75);
        assert_eq!(add(-0.5f32, 0.5f32), 0.0);
    }

    #[test]
    fn test_add_unsigned() {
        assert_eq!(add(200u8, 55u8), 255);
        assert_eq!(add(1u128, u128::MAX - 1), u128::MAX);
    }
}
