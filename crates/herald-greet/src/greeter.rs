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

//! # Greeter
//!
//! High-level orchestration of greeting emission. A `Greeter` owns a sink
//! and exposes the three greeting operations; the module-level functions
//! are the stdout-backed convenience surface.
//!
//! ## Motivation
//!
//! The operations differ only in how the recipient is obtained (canonical
//! default, explicit, or optional-with-default). Centralizing them on one
//! type keeps the sink choice orthogonal to the operation choice.

use crate::greeting::Greeting;
use crate::sink::{GreetingSink, StdoutSink};
use herald_model::name::Name;
use std::io;

/// Orchestrates greeting emission over a pluggable sink.
///
/// # Examples
///
/// ```rust
/// # use herald_greet::greeter::Greeter;
/// # use herald_greet::sink::BufferSink;
///
/// let mut greeter = Greeter::new(BufferSink::new());
/// greeter.greet_programmer().unwrap();
/// greeter.greet_with_default(Some("Sunny")).unwrap();
/// assert_eq!(
///     greeter.sink().lines(),
///     ["Hello, programmer!", "Hello, Sunny!"]
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct Greeter<S>
where
    S: GreetingSink,
{
    sink: S,
}

impl<S> Greeter<S>
where
    S: GreetingSink,
{
    /// Creates a greeter emitting to the given sink.
    #[inline]
    pub fn new(sink: S) -> Self {
        Greeter { sink }
    }

    /// Returns a reference to the underlying sink.
    #[inline]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consumes the greeter and returns the underlying sink.
    #[inline]
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Greets the canonical recipient: emits `Hello, programmer!`.
    pub fn greet_programmer(&mut self) -> io::Result<()> {
        self.greet(&Name::default())
    }

    /// Greets the given recipient: emits `Hello, {name}!`.
    pub fn greet(&mut self, name: &Name) -> io::Result<()> {
        self.sink.emit(&Greeting::new(name))
    }

    /// Greets an optionally named recipient, substituting the default
    /// literal when the name is absent.
    pub fn greet_with_default(&mut self, name: Option<&str>) -> io::Result<()> {
        self.greet(&Name::from_option(name))
    }
}

impl Greeter<StdoutSink> {
    /// Creates a greeter writing to standard output.
    #[inline]
    pub fn stdout() -> Self {
        Greeter::new(StdoutSink::new())
    }
}

/// Prints `Hello, programmer!` to standard output.
///
/// # Examples
///
/// ```rust,no_run
/// herald_greet::greeter::greet_programmer().unwrap();
/// ```
pub fn greet_programmer() -> io::Result<()> {
    Greeter::stdout().greet_programmer()
}

/// Prints `Hello, {name}!` to standard output.
///
/// # Examples
///
/// ```rust,no_run
/// # use herald_model::name::Name;
/// herald_greet::greeter::greet(&Name::new("Naureen")).unwrap();
/// ```
pub fn greet(name: &Name) -> io::Result<()> {
    Greeter::stdout().greet(name)
}

/// Prints `Hello, {name}!` to standard output, substituting the default
/// literal `programmer` when no name is given.
///
/// # Examples
///
/// ```rust,no_run
/// herald_greet::greeter::greet_with_default(None).unwrap();
/// herald_greet::greeter::greet_with_default(Some("Sunny")).unwrap();
/// ```
pub fn greet_with_default(name: Option<&str>) -> io::Result<()> {
    Greeter::stdout().greet_with_default(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::BufferSink;

    fn buffered() -> Greeter<BufferSink> {
        Greeter::new(BufferSink::new())
    }

    #[test]
    fn test_greet_programmer_emits_canonical_line() {
        let mut greeter = buffered();
        greeter.greet_programmer().unwrap();
        assert_eq!(greeter.sink().lines(), ["Hello, programmer!"]);
    }

    #[test]
    fn test_greet_emits_given_name() {
        let mut greeter = buffered();
        greeter.greet(&Name::new("Naureen")).unwrap();
        assert_eq!(greeter.sink().lines(), ["Hello, Naureen!"]);
    }

    #[test]
    fn test_greet_with_default_absent() {
        let mut greeter = buffered();
        greeter.greet_with_default(None).unwrap();
        assert_eq!(greeter.sink().lines(), ["Hello, programmer!"]);
    }

    #[test]
    fn test_greet_with_default_present() {
        let mut greeter = buffered();
        greeter.greet_with_default(Some("Sunny")).unwrap();
        assert_eq!(greeter.sink().lines(), ["Hello, Sunny!"]);
    }

    #[test]
    fn test_operations_share_one_sink() {
        let mut greeter = buffered();
        greeter.greet_programmer().unwrap();
        greeter.greet(&Name::new("Ada")).unwrap();
        greeter.greet_with_default(Some("Sunny")).unwrap();
        assert_eq!(
            greeter.into_sink().into_lines(),
            ["Hello, programmer!", "Hello, Ada!", "Hello, Sunny!"]
        );
    }
}
