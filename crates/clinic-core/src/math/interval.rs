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

use num_traits::PrimInt;

/// A half-open time window `[start, end)`.
///
/// Appointment windows, conflict reports and overlap checks are all phrased in
/// terms of this type. Two windows that merely touch (`a.end() == b.start()`)
/// do **not** overlap, so back-to-back appointments for the same doctor are
/// admissible.
///
/// # Invariants
/// `start <= end` always holds.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClosedOpenInterval<T>
where
    T: PrimInt,
{
    start_inclusive: T,
    end_exclusive: T,
}

impl<T> ClosedOpenInterval<T>
where
    T: PrimInt,
{
    /// Creates the window `[start_inclusive, end_exclusive)`.
    ///
    /// # Panics
    ///
    /// Panics if `start_inclusive > end_exclusive`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use clinic_core::math::interval::ClosedOpenInterval;
    ///
    /// let iv = ClosedOpenInterval::new(600, 630);
    /// assert_eq!(iv.len(), 30);
    /// ```
    #[inline]
    pub fn new(start_inclusive: T, end_exclusive: T) -> Self {
        assert!(
            start_inclusive <= end_exclusive,
            "called `ClosedOpenInterval::new` with a start after its end"
        );
        Self {
            start_inclusive,
            end_exclusive,
        }
    }

    /// Creates the window `[start, start + length)`.
    ///
    /// Returns `None` if `length` is negative or if `start + length`
    /// overflows `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use clinic_core::math::interval::ClosedOpenInterval;
    ///
    /// let iv = ClosedOpenInterval::with_length(600i64, 30).unwrap();
    /// assert_eq!(iv.end(), 630);
    /// assert!(ClosedOpenInterval::with_length(600i64, -1).is_none());
    /// assert!(ClosedOpenInterval::with_length(i64::MAX, 1).is_none());
    /// ```
    #[inline]
    pub fn with_length(start_inclusive: T, length: T) -> Option<Self> {
        if length < T::zero() {
            return None;
        }
        let end_exclusive = start_inclusive.checked_add(&length)?;
        Some(Self {
            start_inclusive,
            end_exclusive,
        })
    }

    #[inline]
    pub const fn start(&self) -> T {
        self.start_inclusive
    }

    #[inline]
    pub const fn end(&self) -> T {
        self.end_exclusive
    }

    /// Returns `end - start`.
    #[inline]
    pub fn len(&self) -> T {
        self.end_exclusive - self.start_inclusive
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start_inclusive == self.end_exclusive
    }

    /// Returns `true` if the two windows overlap, i.e.
    /// `start1 < end2 && start2 < end1`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use clinic_core::math::interval::ClosedOpenInterval;
    ///
    /// let a = ClosedOpenInterval::new(0, 10);
    /// assert!(a.intersects(ClosedOpenInterval::new(5, 15)));
    /// assert!(!a.intersects(ClosedOpenInterval::new(10, 20)));
    /// ```
    #[inline]
    pub fn intersects(&self, other: Self) -> bool {
        self.start_inclusive < other.end_exclusive && other.start_inclusive < self.end_exclusive
    }
}

impl<T> std::fmt::Debug for ClosedOpenInterval<T>
where
    T: PrimInt + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}, {:?})", self.start_inclusive, self.end_exclusive)
    }
}

impl<T> std::fmt::Display for ClosedOpenInterval<T>
where
    T: PrimInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start_inclusive, self.end_exclusive)
    }
}

impl<T> From<std::ops::Range<T>> for ClosedOpenInterval<T>
where
    T: PrimInt,
{
    #[inline]
    fn from(range: std::ops::Range<T>) -> Self {
        Self::new(range.start, range.end)
    }
}
