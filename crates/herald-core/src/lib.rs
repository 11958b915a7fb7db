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

//! # Herald Core
//!
//! Foundational numeric utilities for the Herald greeting and arithmetic
//! toolkit. This crate consolidates the reusable numeric building blocks
//! that underpin the higher-level model and greeting crates.
//!
//! ## Modules
//!
//! - `num`: Integer-centric utilities including the by-value halving trait
//!   (`HalveVal`) implemented across all primitive integer types, and free
//!   generic arithmetic helpers (`add`) bounded via `num-traits`.
//!
//! ## Purpose
//!
//! These primitives keep arithmetic semantics in one place so that the
//! model and greeting crates can stay free of ad hoc per-type code, while
//! keeping runtime overhead minimal.
//!
//! Refer to each module for detailed APIs and examples.

pub mod num;
