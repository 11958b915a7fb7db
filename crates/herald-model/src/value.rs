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

//! # Operand Values
//!
//! A tagged union for loosely typed operands. Instead of inspecting
//! runtime types at each call site, callers construct a [`Value`] once and
//! every consumer branches on its variant. The halving operation is the
//! only type-guarded operation in the workspace: it applies to
//! integer-typed values and short-circuits to `None` for everything else.
//!
//! Classification is by variant, never by payload: `Value::Real(4.0)` is
//! numerically whole but is not an integer-typed value, so halving it
//! yields `None`.

use herald_core::num::ops::halve::HalveVal;

/// A dynamically classified operand value.
///
/// # Examples
///
/// ```rust
/// # use herald_model::value::Value;
///
/// assert_eq!(Value::from(4).halve(), Some(2));
/// assert_eq!(Value::from("two").halve(), None);
/// assert_eq!(Value::from(4.0).halve(), None); // Type-based, not value-based
/// ```
#[derive(Clone, PartialEq, Debug)]
pub enum Value {
    /// A whole number carrying an integer runtime type.
    Integer(i64),
    /// A floating-point number. Whole-valued reals such as `4.0` still
    /// classify as `Real`.
    Real(f64),
    /// A text value.
    Text(String),
}

/// Coarse classification of a [`Value`] as seen by the halving guard.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ValueKind {
    /// The value carries an integer runtime type.
    Integer,
    /// Any non-integer value (reals included).
    Other,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueKind::Integer => write!(f, "Integer"),
            ValueKind::Other => write!(f, "Other"),
        }
    }
}

impl Value {
    /// Returns the coarse classification of this value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use herald_model::value::{Value, ValueKind};
    ///
    /// assert_eq!(Value::Integer(4).kind(), ValueKind::Integer);
    /// assert_eq!(Value::Real(4.0).kind(), ValueKind::Other);
    /// assert_eq!(Value::from("two").kind(), ValueKind::Other);
    /// ```
    #[inline]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Integer(_) => ValueKind::Integer,
            Value::Real(_) | Value::Text(_) => ValueKind::Other,
        }
    }

    /// Returns `true` if the value carries an integer runtime type.
    #[inline]
    pub fn is_integer(&self) -> bool {
        self.kind() == ValueKind::Integer
    }

    /// Halves an integer-typed value, truncating toward zero.
    ///
    /// Returns `None` for any value whose classification is not
    /// [`ValueKind::Integer`]; this is the sentinel "no value" result, and
    /// the only failure mode of the operation. Never panics.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use herald_model::value::Value;
    ///
    /// assert_eq!(Value::Integer(4).halve(), Some(2));
    /// assert_eq!(Value::Integer(5).halve(), Some(2)); // Truncating
    /// assert_eq!(Value::Real(4.0).halve(), None);
    /// assert_eq!(Value::Text("two".into()).halve(), None);
    /// ```
    #[inline]
    pub fn halve(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(n.halve_val()),
            Value::Real(_) | Value::Text(_) => None,
        }
    }
}

impl From<i64> for Value {
    #[inline]
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<i32> for Value {
    #[inline]
    fn from(n: i32) -> Self {
        Value::Integer(n as i64)
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(x: f64) -> Self {
        Value::Real(x)
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    #[inline]
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            Value::Real(x) => write!(f, "{}", x),
            Value::Text(s) => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_halve_even_integer() {
        assert_eq!(Value::Integer(4).halve(), Some(2));
    }

    #[test]
    fn test_halve_odd_integer_truncates() {
        assert_eq!(Value::Integer(5).halve(), Some(2));
        assert_eq!(Value::Integer(-5).halve(), Some(-2));
    }

    #[test]
    fn test_halve_text_is_none() {
        assert_eq!(Value::from("two").halve(), None);
        assert_eq!(Value::Text(String::new()).halve(), None);
    }

    #[test]
    fn test_halve_whole_real_is_none() {
        // Discrimination is by runtime type, not numeric value.
        assert_eq!(Value::Real(4.0).halve(), None);
        assert_eq!(Value::from(4.5).halve(), None);
    }

    #[test]
    fn test_kind_classification() {
        assert_eq!(Value::Integer(0).kind(), ValueKind::Integer);
        assert_eq!(Value::Real(0.0).kind(), ValueKind::Other);
        assert_eq!(Value::from("x").kind(), ValueKind::Other);
        assert!(Value::Integer(1).is_integer());
        assert!(!Value::Real(1.0).is_integer());
    }

    #[test]
    fn test_display_renders_payload() {
        assert_eq!(format!("{}", Value::Integer(7)), "7");
        assert_eq!(format!("{}", Value::Real(2.5)), "2.5");
        assert_eq!(format!("{}", Value::from("two")), "two");
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(format!("{}", ValueKind::Integer), "Integer");
        assert_eq!(format!("{}", ValueKind::Other), "Other");
    }
}
