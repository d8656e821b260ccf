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

use super::{HeapOrder, heapify, satisfies_order, sift_down, sift_up};
use crate::error::HeapError;

/// An array-backed binary heap with a configurable [`HeapOrder`].
///
/// # Examples
///
/// ```rust
/// # use clinic_collections::heap::{BinaryHeap, HeapOrder};
///
/// let mut heap = BinaryHeap::new();
/// heap.build_heap([5, 3, 8, 1, 9, 2]);
/// assert_eq!(heap.peek(), Ok(&1));
///
/// let mut max = BinaryHeap::with_order(HeapOrder::Max);
/// max.add(4);
/// max.add(7);
/// assert_eq!(max.poll(), Ok(7));
/// ```
#[derive(Clone)]
pub struct BinaryHeap<T> {
    data: Vec<T>,
    order: HeapOrder,
}

impl<T> BinaryHeap<T>
where
    T: Ord,
{
    /// Creates an empty min-heap.
    #[inline]
    pub fn new() -> Self {
        Self::with_order(HeapOrder::Min)
    }

    /// Creates an empty heap with the given order.
    #[inline]
    pub fn with_order(order: HeapOrder) -> Self {
        Self {
            data: Vec::new(),
            order,
        }
    }

    /// Creates an empty heap with the given order and room for `capacity`
    /// elements.
    #[inline]
    pub fn with_capacity_and_order(capacity: usize, order: HeapOrder) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            order,
        }
    }

    /// Returns the number of elements in the heap.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the heap contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the order fixed at construction.
    #[inline]
    pub fn order(&self) -> HeapOrder {
        self.order
    }

    /// Inserts `value` and restores the heap property by sifting it up.
    pub fn add(&mut self, value: T) {
        self.data.push(value);
        let last = self.data.len() - 1;
        sift_up(&mut self.data, self.order, last, |_, _| {});
    }

    /// Removes and returns the root.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::Empty`] if the heap has no elements.
    pub fn poll(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::Empty);
        }
        let root = self.data.swap_remove(0);
        if !self.data.is_empty() {
            sift_down(&mut self.data, self.order, 0, |_, _| {});
        }
        Ok(root)
    }

    /// Returns a reference to the root without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::Empty`] if the heap has no elements.
    #[inline]
    pub fn peek(&self) -> Result<&T, HeapError> {
        self.data.first().ok_or(HeapError::Empty)
    }

    /// Replaces the contents of the heap with `elements`, arranged bottom-up
    /// in linear time.
    pub fn build_heap<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.data.clear();
        self.data.extend(elements);
        heapify(&mut self.data, self.order);
    }

    /// Returns `true` if every parent satisfies the order against its
    /// children.
    #[inline]
    pub fn is_valid_heap(&self) -> bool {
        satisfies_order(&self.data, self.order)
    }

    /// Removes every element.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Returns an iterator over the elements in array order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consumes the heap and returns its elements in extraction order:
    /// ascending for a min-heap, descending for a max-heap.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Ok(value) = self.poll() {
            sorted.push(value);
        }
        sorted
    }
}

impl<T> Default for BinaryHeap<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for BinaryHeap<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut heap = Self::new();
        heap.build_heap(iter);
        heap
    }
}

impl<T> Extend<T> for BinaryHeap<T>
where
    T: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T> std::fmt::Debug for BinaryHeap<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BinaryHeap")
            .field("order", &self.order)
            .field("data", &self.data)
            .finish()
    }
}
