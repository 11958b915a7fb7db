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

//! # Herald Model
//!
//! Domain model for the Herald greeting and arithmetic toolkit: the
//! recipient of a greeting and the dynamically classified operand values
//! consumed by the halving operation.
//!
//! ## Modules
//!
//! - `name`: The `Name` newtype with its documented default literal,
//!   including the optional-parameter constructor used by the greeting
//!   crate.
//! - `value`: The `Value` tagged union classifying loosely typed operands
//!   (integer, real, text) and the type-guarded halving operation.
//!
//! ## Purpose
//!
//! Keeping recipients and operands as explicit types lets the greeting and
//! arithmetic surfaces stay small and total: classification happens once,
//! at construction, rather than through runtime type inspection scattered
//! across call sites.

pub mod name;
pub mod value;
