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

//! # Strongly Typed Identifiers
//!
//! Phantom-tagged wrappers around string identifiers to prevent mixing
//! identifiers from different domains (e.g., appointments vs. doctors).
//! `TypedId<T>` carries a tag type `T: TypedIdTag` that encodes intent at the
//! type level, while equality, ordering and hashing only ever look at the
//! underlying string.
//!
//! ## Usage
//!
//! ```rust
//! use clinic_core::utils::id::{TypedId, TypedIdTag};
//!
//! #[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
//! struct DoctorTag;
//! impl TypedIdTag for DoctorTag { const NAME: &'static str = "DoctorId"; }
//!
//! type DoctorId = TypedId<DoctorTag>;
//! let d = DoctorId::new("D1");
//! assert_eq!(d.as_str(), "D1");
//! assert_eq!(format!("{}", d), "D1");
//! assert_eq!(format!("{:?}", d), "DoctorId(D1)");
//! ```

/// A trait to tag typed identifiers with a name for debugging purposes.
pub trait TypedIdTag: Clone {
    const NAME: &'static str;
}

/// A strongly typed identifier associated with a specific tag type `T`.
///
/// `Display` renders the raw identifier so it can be embedded in
/// human-readable messages; `Debug` prefixes it with the tag name.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypedId<T> {
    value: Box<str>,
    _marker: std::marker::PhantomData<T>,
}

impl<T> TypedId<T> {
    /// Creates a new `TypedId` from anything convertible into a `String`.
    #[inline]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into().into_boxed_str(),
            _marker: std::marker::PhantomData,
        }
    }

    /// Returns the identifier as a string slice.
    #[inline(always)]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns `true` if the identifier is the empty string.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl<T> std::fmt::Debug for TypedId<T>
where
    T: TypedIdTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::NAME, self.value)
    }
}

impl<T> std::fmt::Display for TypedId<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

impl<T> From<&str> for TypedId<T> {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl<T> From<String> for TypedId<T> {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl<T> AsRef<str> for TypedId<T> {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    #[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
    struct TestTag;

    impl TypedIdTag for TestTag {
        const NAME: &'static str = "TestId";
    }

    type TestId = TypedId<TestTag>;

    fn hash_of<H: Hash>(value: &H) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_new_and_as_str() {
        let id = TestId::new("A-17");
        assert_eq!(id.as_str(), "A-17");
        assert!(!id.is_empty());
        assert!(TestId::new("").is_empty());
    }

    #[test]
    fn test_conversions() {
        let a: TestId = "X".into();
        let b: TestId = String::from("X").into();
        assert_eq!(a, b);
        assert_eq!(a.as_ref(), "X");
    }

    #[test]
    fn test_debug_and_display() {
        let id = TestId::new("Y");
        assert_eq!(format!("{}", id), "Y");
        assert_eq!(format!("{:?}", id), "TestId(Y)");
    }

    #[test]
    fn test_equality_and_hash_follow_value() {
        let a = TestId::new("D1");
        let b = TestId::new(String::from("D1"));
        let c = TestId::new("D2");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert!(a < c);
    }
}
