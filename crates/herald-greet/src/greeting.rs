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

use herald_model::name::Name;

/// A greeting for a single recipient.
///
/// `Greeting` borrows its recipient and renders through `Display`,
/// producing exactly `Hello, {name}!`. It performs no I/O; emission is the
/// sink's job.
///
/// # Examples
///
/// ```rust
/// # use herald_greet::greeting::Greeting;
/// # use herald_model::name::Name;
///
/// let name = Name::new("Naureen");
/// assert_eq!(format!("{}", Greeting::new(&name)), "Hello, Naureen!");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Greeting<'a> {
    name: &'a Name,
}

impl<'a> Greeting<'a> {
    /// Creates a greeting for the given recipient.
    #[inline]
    pub fn new(name: &'a Name) -> Self {
        Greeting { name }
    }

    /// Returns the recipient of this greeting.
    #[inline]
    pub fn name(&self) -> &Name {
        self.name
    }
}

impl std::fmt::Display for Greeting<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Hello, {}!", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_renders_hello_line() {
        let name = Name::new("Naureen");
        assert_eq!(format!("{}", Greeting::new(&name)), "Hello, Naureen!");
    }

    #[test]
    fn test_display_with_default_name() {
        let name = Name::default();
        assert_eq!(format!("{}", Greeting::new(&name)), "Hello, programmer!");
    }

    #[test]
    fn test_name_accessor() {
        let name = Name::new("Ada");
        assert_eq!(Greeting::new(&name).name(), &name);
    }
}
