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

//! Output seam for greeting emission.
//!
//! A `GreetingSink` receives rendered greetings one at a time. The
//! standard-output sink is the production destination; the buffer sink
//! captures lines for assertions; the no-op sink discards everything.
//! Mixing and matching sinks never touches the greeting logic itself.

use crate::greeting::Greeting;
use std::io::{self, Write};

/// Trait for emitting rendered greetings to an output destination.
///
/// Methods take `&mut self`; sinks are assumed single-threaded. Emission
/// reports I/O failures through `io::Result` rather than panicking.
pub trait GreetingSink {
    /// Returns the name of the sink.
    fn name(&self) -> &str;
    /// Emits a single greeting as one line of output.
    fn emit(&mut self, greeting: &Greeting<'_>) -> io::Result<()>;
}

/// A sink that writes each greeting as one line to standard output.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl StdoutSink {
    /// Creates a new `StdoutSink`.
    #[inline]
    pub fn new() -> Self {
        StdoutSink
    }
}

impl GreetingSink for StdoutSink {
    #[inline]
    fn name(&self) -> &str {
        "StdoutSink"
    }

    fn emit(&mut self, greeting: &Greeting<'_>) -> io::Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        writeln!(lock, "{}", greeting)
    }
}

/// A sink that captures rendered greetings in memory.
///
/// Intended for tests and tooling that assert on emitted lines without
/// touching the process output stream.
///
/// # Examples
///
/// ```rust
/// # use herald_greet::greeting::Greeting;
/// # use herald_greet::sink::{BufferSink, GreetingSink};
/// # use herald_model::name::Name;
///
/// let mut sink = BufferSink::new();
/// let name = Name::new("Sunny");
/// sink.emit(&Greeting::new(&name)).unwrap();
/// assert_eq!(sink.lines(), ["Hello, Sunny!"]);
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct BufferSink {
    lines: Vec<String>,
}

impl BufferSink {
    /// Creates an empty `BufferSink`.
    #[inline]
    pub fn new() -> Self {
        BufferSink { lines: Vec::new() }
    }

    /// Returns the captured lines in emission order.
    #[inline]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Consumes the sink and returns the captured lines.
    #[inline]
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl GreetingSink for BufferSink {
    #[inline]
    fn name(&self) -> &str {
        "BufferSink"
    }

    fn emit(&mut self, greeting: &Greeting<'_>) -> io::Result<()> {
        self.lines.push(greeting.to_string());
        Ok(())
    }
}

/// A no-operation sink that discards every greeting.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct NoOpSink;

impl NoOpSink {
    /// Creates a new `NoOpSink`.
    #[inline(always)]
    pub fn new() -> Self {
        NoOpSink
    }
}

impl GreetingSink for NoOpSink {
    #[inline(always)]
    fn name(&self) -> &str {
        "NoOpSink"
    }

    #[inline(always)]
    fn emit(&mut self, _greeting: &Greeting<'_>) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use herald_model::name::Name;

    #[test]
    fn test_buffer_sink_captures_lines_in_order() {
        let mut sink = BufferSink::new();
        let first = Name::new("Ada");
        let second = Name::new("Sunny");
        sink.emit(&Greeting::new(&first)).unwrap();
        sink.emit(&Greeting::new(&second)).unwrap();
        assert_eq!(sink.lines(), ["Hello, Ada!", "Hello, Sunny!"]);
    }

    #[test]
    fn test_buffer_sink_into_lines() {
        let mut sink = BufferSink::new();
        let name = Name::default();
        sink.emit(&Greeting::new(&name)).unwrap();
        assert_eq!(sink.into_lines(), vec!["Hello, programmer!".to_string()]);
    }

    #[test]
    fn test_no_op_sink_discards() {
        let mut sink = NoOpSink::new();
        let name = Name::new("Ada");
        assert!(sink.emit(&Greeting::new(&name)).is_ok());
    }

    #[test]
    fn test_sink_names() {
        assert_eq!(StdoutSink::new().name(), "StdoutSink");
        assert_eq!(BufferSink::new().name(), "BufferSink");
        assert_eq!(NoOpSink::new().name(), "NoOpSink");
    }
}
