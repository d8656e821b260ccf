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

//! Error types for the collections in this crate.
//!
//! Only caller errors (violated preconditions) are represented here. Expected
//! misses such as a key that is not in a table are reported through `Option`
//! or `bool` and never through these types.

/// A collection was constructed with a capacity of zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{collection} capacity must be positive, got {requested}")]
pub struct CapacityError {
    /// The name of the collection that rejected the capacity.
    pub collection: &'static str,
    /// The capacity that was requested.
    pub requested: usize,
}

/// The error type for heap operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HeapError {
    /// The heap contains no elements.
    #[error("heap is empty")]
    Empty,
    /// The value is already held by another element of an indexed heap.
    #[error("value is already present in the indexed heap")]
    DuplicateValue,
    /// A 1-based heap position outside `1..=len` was supplied.
    #[error("heap position {position} is out of bounds for a heap of length {len}")]
    PositionOutOfBounds {
        /// The offending 1-based position.
        position: usize,
        /// The number of elements in the heap.
        len: usize,
    },
}

/// The error type for circular buffer operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BufferError {
    /// The buffer contains no elements.
    #[error("circular buffer is empty")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_error_display() {
        let err = CapacityError {
            collection: "HashTable",
            requested: 0,
        };
        assert_eq!(err.to_string(), "HashTable capacity must be positive, got 0");
    }

    #[test]
    fn test_heap_error_display() {
        assert_eq!(HeapError::Empty.to_string(), "heap is empty");
        assert_eq!(
            HeapError::PositionOutOfBounds {
                position: 7,
                len: 3
            }
            .to_string(),
            "heap position 7 is out of bounds for a heap of length 3"
        );
    }

    #[test]
    fn test_errors_are_std_errors() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&HeapError::DuplicateValue);
        assert_error(&BufferError::Empty);
    }
}
