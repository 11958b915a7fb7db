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

//! # Herald Greet
//!
//! Greeting emission for the Herald toolkit. Rendering is pure
//! (`Display`-based) and the write-to-output effect lives behind a small
//! sink trait, so greetings can be tested without capturing the process
//! output stream.
//!
//! ## Modules
//!
//! - `greeting`: The pure `Greeting` view rendering `Hello, {name}!`.
//! - `sink`: The `GreetingSink` seam with stdout, in-memory, and no-op
//!   implementations.
//! - `greeter`: The `Greeter` orchestrator and the module-level
//!   convenience functions that write to standard output.
//!
//! ## Motivation
//!
//! Mixing formatting with printing makes the printed half untestable and
//! the pure half inseparable. Splitting the two keeps each operation a
//! one-liner while leaving the output destination pluggable.

pub mod greeter;
pub mod greeting;
pub mod sink;
