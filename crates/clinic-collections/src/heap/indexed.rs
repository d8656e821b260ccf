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
use crate::{error::HeapError, hash_table::HashTable, key::TableKey};

/// A binary heap that also maps every element to its current position.
///
/// The reverse index is a [`HashTable`] from element to 1-based position. It
/// is patched for every element the sift routines move, so `add`, `poll`,
/// `remove` and the update operations stay logarithmic while
/// [`index_of`](Self::index_of) and [`contains`](Self::contains) are
/// constant time on average.
///
/// Elements double as index keys, so they must be pairwise distinct:
/// inserting a value equal to one already present is rejected with
/// [`HeapError::DuplicateValue`].
///
/// # Examples
///
/// ```rust
/// # use clinic_collections::heap::IndexedBinaryHeap;
///
/// let mut heap = IndexedBinaryHeap::new();
/// heap.add(30).unwrap();
/// heap.add(10).unwrap();
/// heap.add(20).unwrap();
///
/// assert_eq!(heap.index_of(&10), Some(1));
/// assert!(heap.update(&30, 5).unwrap());
/// assert_eq!(heap.peek(), Ok(&5));
/// assert_eq!(heap.index_of(&30), None);
/// ```
#[derive(Clone)]
pub struct IndexedBinaryHeap<T> {
    data: Vec<T>,
    order: HeapOrder,
    index: HashTable<T, usize>,
}

/// Writes the 1-based position of a moved element into the index.
#[inline]
fn record_position<T>(index: &mut HashTable<T, usize>, value: &T, slot: usize)
where
    T: TableKey,
{
    if let Some(position) = index.get_mut(value) {
        *position = slot + 1;
    }
}

impl<T> IndexedBinaryHeap<T>
where
    T: Ord + Clone + TableKey,
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
            index: HashTable::new(),
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

    /// Returns the 1-based position of `value`, if present.
    #[inline]
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.index.get(value).copied()
    }

    /// Returns `true` if `value` is in the heap.
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.index.contains_key(value)
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

    /// Inserts `value`.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::DuplicateValue`] if an equal element is already
    /// present; the heap is left unchanged.
    pub fn add(&mut self, value: T) -> Result<(), HeapError> {
        if self.index.contains_key(&value) {
            return Err(HeapError::DuplicateValue);
        }
        self.index.put(value.clone(), self.data.len() + 1);
        self.data.push(value);

        let last = self.data.len() - 1;
        let index = &mut self.index;
        sift_up(&mut self.data, self.order, last, |v, slot| {
            record_position(index, v, slot)
        });
        Ok(())
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
        Ok(self.take_slot(0))
    }

    /// Removes `value` from the heap and returns it.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let position = self.index.get(value).copied()?;
        Some(self.take_slot(position - 1))
    }

    /// Replaces `old` with `new` and restores the heap property.
    ///
    /// Returns `Ok(false)` and leaves the heap unchanged if `old` is not
    /// present.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::DuplicateValue`] if `new` equals a different
    /// element already in the heap.
    pub fn update(&mut self, old: &T, new: T) -> Result<bool, HeapError> {
        match self.index_of(old) {
            Some(position) => self.update_at(position, new).map(|_| true),
            None => Ok(false),
        }
    }

    /// Replaces the element at the 1-based `position` with `new`, restores
    /// the heap property and returns the replaced element.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::PositionOutOfBounds`] if `position` is not in
    /// `1..=len`, or [`HeapError::DuplicateValue`] if `new` equals a
    /// different element already in the heap.
    pub fn update_at(&mut self, position: usize, new: T) -> Result<T, HeapError> {
        let len = self.data.len();
        if position == 0 || position > len {
            return Err(HeapError::PositionOutOfBounds { position, len });
        }
        let slot = position - 1;
        if new != self.data[slot] && self.index.contains_key(&new) {
            return Err(HeapError::DuplicateValue);
        }

        let replaced = std::mem::replace(&mut self.data[slot], new);
        self.index.remove(&replaced);
        self.index.put(self.data[slot].clone(), position);
        self.restore(slot);
        Ok(replaced)
    }

    /// Replaces the contents of the heap with `elements`, arranged bottom-up
    /// in linear time, and rebuilds the index.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::DuplicateValue`] if `elements` holds two equal
    /// values; the heap is left unchanged.
    pub fn build_heap<I>(&mut self, elements: I) -> Result<(), HeapError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut data: Vec<T> = elements.into_iter().collect();
        if has_duplicates(&data) {
            return Err(HeapError::DuplicateValue);
        }

        heapify(&mut data, self.order);
        self.data = data;
        self.rebuild_index();
        Ok(())
    }

    /// Discards the index and recomputes it from the array.
    pub fn rebuild_index(&mut self) {
        self.index.clear();
        for (slot, value) in self.data.iter().enumerate() {
            self.index.put(value.clone(), slot + 1);
        }
    }

    /// Returns `true` if the index holds exactly one entry per element, each
    /// pointing at that element's current position.
    pub fn is_index_consistent(&self) -> bool {
        self.index.len() == self.data.len()
            && self
                .data
                .iter()
                .enumerate()
                .all(|(slot, value)| self.index.get(value) == Some(&(slot + 1)))
    }

    /// Returns `true` if every parent satisfies the order against its
    /// children.
    #[inline]
    pub fn is_valid_heap(&self) -> bool {
        satisfies_order(&self.data, self.order)
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.data.clear();
        self.index.clear();
    }

    /// Returns an iterator over the elements in array order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Removes the element at `slot`, fills the hole with the last element
    /// and restores the heap property around it.
    fn take_slot(&mut self, slot: usize) -> T {
        let taken = self.data.swap_remove(slot);
        self.index.remove(&taken);
        if slot < self.data.len() {
            record_position(&mut self.index, &self.data[slot], slot);
            self.restore(slot);
        }
        taken
    }

    /// Sifts the element at `slot` up, or down if it did not move up.
    fn restore(&mut self, slot: usize) {
        let index = &mut self.index;
        let settled = sift_up(&mut self.data, self.order, slot, |v, s| {
            record_position(index, v, s)
        });
        if settled == slot {
            sift_down(&mut self.data, self.order, slot, |v, s| {
                record_position(index, v, s)
            });
        }
    }
}

/// Returns `true` if two elements of `values` compare equal.
fn has_duplicates<T>(values: &[T]) -> bool
where
    T: TableKey,
{
    let mut seen = HashTable::with_capacity(values.len().max(1) * 2);
    values.iter().any(|value| seen.put(value, ()).is_some())
}

impl<T> Default for IndexedBinaryHeap<T>
where
    T: Ord + Clone + TableKey,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for IndexedBinaryHeap<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndexedBinaryHeap")
            .field("order", &self.order)
            .field("data", &self.data)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn assert_consistent<T>(heap: &IndexedBinaryHeap<T>)
    where
        T: Ord + Clone + TableKey + std::fmt::Debug,
    {
        assert!(heap.is_valid_heap(), "heap order broken: {:?}", heap);
        assert!(heap.is_index_consistent(), "index out of sync: {:?}", heap);
        for (slot, value) in heap.iter().enumerate() {
            assert_eq!(heap.index_of(value), Some(slot + 1));
        }
    }

    #[test]
    fn test_index_follows_add_and_poll() {
        let mut heap = IndexedBinaryHeap::new();
        for value in [50, 20, 40, 10, 30] {
            heap.add(value).unwrap();
            assert_consistent(&heap);
        }
        assert_eq!(heap.index_of(&10), Some(1));

        assert_eq!(heap.poll(), Ok(10));
        assert_eq!(heap.index_of(&10), None);
        assert!(!heap.contains(&10));
        assert_consistent(&heap);
    }

    #[test]
    fn test_duplicate_add_is_rejected() {
        let mut heap = IndexedBinaryHeap::new();
        heap.add("a").unwrap();
        assert_eq!(heap.add("a"), Err(HeapError::DuplicateValue));
        assert_eq!(heap.len(), 1);
        assert_consistent(&heap);
    }

    #[test]
    fn test_update_missing_value_is_false() {
        let mut heap = IndexedBinaryHeap::new();
        heap.add(1).unwrap();
        assert_eq!(heap.update(&7, 3), Ok(false));
        assert_eq!(heap.iter().copied().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_update_moves_in_both_directions() {
        let mut heap = IndexedBinaryHeap::new();
        heap.build_heap([10, 20, 30, 40, 50, 60]).unwrap();

        assert_eq!(heap.update(&60, 5), Ok(true));
        assert_eq!(heap.peek(), Ok(&5));
        assert_consistent(&heap);

        assert_eq!(heap.update(&5, 99), Ok(true));
        assert_eq!(heap.peek(), Ok(&10));
        assert!(heap.contains(&99));
        assert_consistent(&heap);
    }

    #[test]
    fn test_update_to_existing_value_is_rejected() {
        let mut heap = IndexedBinaryHeap::new();
        heap.build_heap([1, 2, 3]).unwrap();
        assert_eq!(heap.update(&3, 1), Err(HeapError::DuplicateValue));
        // Replacing a value with itself is allowed.
        assert_eq!(heap.update(&3, 3), Ok(true));
        assert_consistent(&heap);
    }

    #[test]
    fn test_update_at_bounds() {
        let mut heap = IndexedBinaryHeap::with_order(HeapOrder::Max);
        heap.build_heap([4, 8, 6]).unwrap();
        assert_eq!(
            heap.update_at(0, 1),
            Err(HeapError::PositionOutOfBounds {
                position: 0,
                len: 3
            })
        );
        assert_eq!(
            heap.update_at(4, 1),
            Err(HeapError::PositionOutOfBounds {
                position: 4,
                len: 3
            })
        );
        assert_eq!(heap.update_at(1, 2), Ok(8));
        assert_eq!(heap.peek(), Ok(&6));
        assert_consistent(&heap);
    }

    #[test]
    fn test_remove_interior_element() {
        let mut heap = IndexedBinaryHeap::new();
        heap.build_heap(1..=15).unwrap();
        assert_eq!(heap.remove(&6), Some(6));
        assert_eq!(heap.remove(&6), None);
        assert_eq!(heap.len(), 14);
        assert_consistent(&heap);

        let drained: Vec<_> = std::iter::from_fn(|| heap.poll().ok()).collect();
        let expected: Vec<_> = (1..=15).filter(|v| *v != 6).collect();
        assert_eq!(drained, expected);
    }

    #[test]
    fn test_build_heap_with_duplicates_leaves_heap_untouched() {
        let mut heap = IndexedBinaryHeap::new();
        heap.add(42).unwrap();
        assert_eq!(heap.build_heap([1, 2, 1]), Err(HeapError::DuplicateValue));
        assert_eq!(heap.len(), 1);
        assert_eq!(heap.index_of(&42), Some(1));
    }

    #[test]
    fn test_rebuild_index_recovers_from_clear() {
        let mut heap = IndexedBinaryHeap::new();
        heap.build_heap([3, 1, 2]).unwrap();
        heap.index.clear();
        assert!(!heap.is_index_consistent());
        heap.rebuild_index();
        assert_consistent(&heap);
    }

    #[test]
    fn test_random_interleaving_keeps_index_in_sync() {
        let mut rng = StdRng::seed_from_u64(7);
        for order in [HeapOrder::Min, HeapOrder::Max] {
            let mut heap = IndexedBinaryHeap::with_order(order);
            for _ in 0..3_000 {
                let value: u32 = rng.random_range(0..400);
                match rng.random_range(0..4) {
                    0 => {
                        let duplicate = heap.contains(&value);
                        assert_eq!(heap.add(value).is_err(), duplicate);
                    }
                    1 => {
                        if let Ok(root) = heap.poll() {
                            assert!(!heap.contains(&root));
                        }
                    }
                    2 => {
                        let present = heap.contains(&value);
                        assert_eq!(heap.remove(&value).is_some(), present);
                    }
                    _ => {
                        if let Some(&old) = heap.iter().next() {
                            let target = rng.random_range(0..400);
                            if let Err(err) = heap.update(&old, target) {
                                assert_eq!(err, HeapError::DuplicateValue);
                                assert_ne!(target, old);
                            }
                        }
                    }
                }
                assert_consistent(&heap);
            }
            heap.clear();
            assert!(heap.is_empty());
            assert!(heap.is_index_consistent());
        }
    }
}
