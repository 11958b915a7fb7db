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

/// The name substituted when a greeting is requested without one.
pub const DEFAULT_NAME: &str = "programmer";

/// The recipient of a greeting.
///
/// A thin wrapper around `String` so that APIs taking a recipient cannot
/// be handed arbitrary text by accident. The default recipient is the
/// literal [`DEFAULT_NAME`].
///
/// # Examples
///
/// ```rust
/// # use herald_model::name::Name;
///
/// let name = Name::new("Naureen");
/// assert_eq!(name.as_str(), "Naureen");
/// assert_eq!(Name::default().as_str(), "programmer");
/// ```
#[repr(transparent)]
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Name(String);

impl Name {
    /// Creates a new `Name` from anything convertible into a `String`.
    #[inline]
    pub fn new(name: impl Into<String>) -> Self {
        Name(name.into())
    }

    /// Creates a `Name` from an optional string slice.
    ///
    /// When the argument is absent, the default literal [`DEFAULT_NAME`]
    /// is substituted. This is the explicit form of an optional parameter
    /// with a default value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use herald_model::name::Name;
    ///
    /// assert_eq!(Name::from_option(Some("Sunny")).as_str(), "Sunny");
    /// assert_eq!(Name::from_option(None).as_str(), "programmer");
    /// ```
    #[inline]
    pub fn from_option(name: Option<&str>) -> Self {
        match name {
            Some(n) => Name(n.to_string()),
            None => Name::default(),
        }
    }

    /// Returns the name as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Name` and returns the underlying `String`.
    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Default for Name {
    #[inline]
    fn default() -> Self {
        Name(DEFAULT_NAME.to_string())
    }
}

impl From<&str> for Name {
    #[inline]
    fn from(name: &str) -> Self {
        Name(name.to_string())
    }
}

impl From<String> for Name {
    #[inline]
    fn from(name: String) -> Self {
        Name(name)
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
