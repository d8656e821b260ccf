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

//! Fixed-slot FIFO ring buffer with a choice of full-buffer behaviour.

use crate::error::{BufferError, CapacityError};

/// What [`CircularBuffer::enqueue`] does when the buffer is full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BufferMode {
    /// Grow the slot array to `capacity * 3 / 2` (at least `capacity + 1`)
    /// and keep every element.
    #[default]
    Growable,
    /// Overwrite the oldest element; the capacity is fixed.
    Overwrite,
}

impl std::fmt::Display for BufferMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BufferMode::Growable => write!(f, "growable"),
            BufferMode::Overwrite => write!(f, "overwrite"),
        }
    }
}

/// A FIFO ring buffer.
///
/// `front` is the slot of the oldest element and `rear` the slot the next
/// element is written to; both wrap modulo the capacity.
///
/// # Examples
///
/// ```rust
/// # use clinic_collections::circular_buffer::{BufferMode, CircularBuffer};
///
/// let mut recent = CircularBuffer::new(3, BufferMode::Overwrite);
/// for value in 1..=5 {
///     recent.enqueue(value);
/// }
/// assert_eq!(recent.len(), 3);
/// assert_eq!(recent.iter().copied().collect::<Vec<_>>(), vec![3, 4, 5]);
/// assert_eq!(recent.dequeue(), Ok(3));
/// ```
#[derive(Clone)]
pub struct CircularBuffer<T> {
    slots: Vec<Option<T>>,
    front: usize,
    rear: usize,
    len: usize,
    mode: BufferMode,
}

impl<T> CircularBuffer<T> {
    /// Creates an empty buffer with `capacity` slots.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize, mode: BufferMode) -> Self {
        assert!(
            capacity > 0,
            "called `CircularBuffer::new` with a capacity of zero"
        );
        Self {
            slots: Self::empty_slots(capacity),
            front: 0,
            rear: 0,
            len: 0,
            mode,
        }
    }

    /// Creates an empty buffer with `capacity` slots.
    ///
    /// # Errors
    ///
    /// Returns a [`CapacityError`] if `capacity` is zero.
    pub fn try_new(capacity: usize, mode: BufferMode) -> Result<Self, CapacityError> {
        if capacity == 0 {
            return Err(CapacityError {
                collection: "CircularBuffer",
                requested: capacity,
            });
        }
        Ok(Self::new(capacity, mode))
    }

    /// Returns the number of stored elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no elements are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if every slot is occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// Returns the number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the mode fixed at construction.
    #[inline]
    pub fn mode(&self) -> BufferMode {
        self.mode
    }

    /// Appends `value` at the rear.
    ///
    /// In [`BufferMode::Overwrite`] a full buffer evicts its oldest element,
    /// which is returned. In [`BufferMode::Growable`] a full buffer grows
    /// first and nothing is ever returned.
    pub fn enqueue(&mut self, value: T) -> Option<T> {
        if self.is_full() {
            match self.mode {
                BufferMode::Growable => self.grow(),
                BufferMode::Overwrite => {
                    let evicted = self.slots[self.rear].replace(value);
                    self.rear = self.wrap(self.rear + 1);
                    self.front = self.rear;
                    return evicted;
                }
            }
        }

        self.slots[self.rear] = Some(value);
        self.rear = self.wrap(self.rear + 1);
        self.len += 1;
        None
    }

    /// Removes and returns the oldest element.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Empty`] if the buffer has no elements.
    pub fn dequeue(&mut self) -> Result<T, BufferError> {
        if self.is_empty() {
            return Err(BufferError::Empty);
        }
        let value = self.slots[self.front].take().ok_or(BufferError::Empty)?;
        self.front = self.wrap(self.front + 1);
        self.len -= 1;
        Ok(value)
    }

    /// Returns a reference to the oldest element.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Empty`] if the buffer has no elements.
    #[inline]
    pub fn front(&self) -> Result<&T, BufferError> {
        if self.is_empty() {
            return Err(BufferError::Empty);
        }
        self.slots[self.front].as_ref().ok_or(BufferError::Empty)
    }

    /// Removes every element. The capacity is kept.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.front = 0;
        self.rear = 0;
        self.len = 0;
    }

    /// Returns an iterator from the oldest to the newest element.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.len).filter_map(move |offset| self.slots[self.wrap(self.front + offset)].as_ref())
    }

    #[inline]
    fn wrap(&self, slot: usize) -> usize {
        slot % self.slots.len()
    }

    /// Moves the elements into a larger slot array, oldest first.
    fn grow(&mut self) {
        let capacity = self.slots.len();
        let new_capacity = (capacity.saturating_mul(3) / 2).max(capacity + 1);

        let mut slots = Self::empty_slots(new_capacity);
        for (offset, slot) in slots.iter_mut().enumerate().take(self.len) {
            let from = self.wrap(self.front + offset);
            *slot = self.slots[from].take();
        }

        self.slots = slots;
        self.front = 0;
        self.rear = self.len;
    }

    fn empty_slots(capacity: usize) -> Vec<Option<T>> {
        (0..capacity).map(|_| None).collect()
    }
}

impl<T> Extend<T> for CircularBuffer<T> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.enqueue(value);
        }
    }
}

impl<T> std::fmt::Debug for CircularBuffer<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CircularBuffer")
            .field("mode", &self.mode)
            .field("capacity", &self.capacity())
            .field("elements", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;
    use std::collections::VecDeque;

    fn contents<T: Clone>(buffer: &CircularBuffer<T>) -> Vec<T> {
        buffer.iter().cloned().collect()
    }

    #[test]
    fn test_zero_capacity() {
        let err = CircularBuffer::<u8>::try_new(0, BufferMode::Overwrite).unwrap_err();
        assert_eq!(err.collection, "CircularBuffer");
        assert_eq!(
            err.to_string(),
            "CircularBuffer capacity must be positive, got 0"
        );
    }

    #[test]
    #[should_panic(expected = "capacity of zero")]
    fn test_zero_capacity_panics() {
        let _ = CircularBuffer::<u8>::new(0, BufferMode::Growable);
    }

    #[test]
    fn test_empty_buffer_errors() {
        let mut buffer: CircularBuffer<u8> = CircularBuffer::new(2, BufferMode::Growable);
        assert_eq!(buffer.dequeue(), Err(BufferError::Empty));
        assert_eq!(buffer.front(), Err(BufferError::Empty));
        assert!(buffer.is_empty());
        assert!(!buffer.is_full());
    }

    #[test]
    fn test_overwrite_keeps_most_recent() {
        let mut buffer = CircularBuffer::new(3, BufferMode::Overwrite);
        let evicted: Vec<_> = (1..=5).filter_map(|v| buffer.enqueue(v)).collect();
        assert_eq!(evicted, vec![1, 2]);
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.capacity(), 3);
        assert!(buffer.is_full());
        assert_eq!(contents(&buffer), vec![3, 4, 5]);
        assert_eq!(buffer.front(), Ok(&3));
    }

    #[test]
    fn test_growable_expands_by_half() {
        let mut buffer = CircularBuffer::new(4, BufferMode::Growable);
        buffer.extend(1..=4);
        assert!(buffer.is_full());
        assert_eq!(buffer.enqueue(5), None);
        assert_eq!(buffer.capacity(), 6);
        assert_eq!(contents(&buffer), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_growable_from_capacity_one_grows_by_at_least_one() {
        let mut buffer = CircularBuffer::new(1, BufferMode::Growable);
        buffer.enqueue('a');
        buffer.enqueue('b');
        assert_eq!(buffer.capacity(), 2);
        buffer.enqueue('c');
        assert_eq!(buffer.capacity(), 3);
        assert_eq!(contents(&buffer), vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_growth_unwraps_a_wrapped_buffer() {
        let mut buffer = CircularBuffer::new(3, BufferMode::Growable);
        buffer.extend([1, 2, 3]);
        assert_eq!(buffer.dequeue(), Ok(1));
        assert_eq!(buffer.dequeue(), Ok(2));
        buffer.extend([4, 5]);
        // Slots are now [4, 5, 3] with the front at the last slot.
        buffer.enqueue(6);
        assert_eq!(contents(&buffer), vec![3, 4, 5, 6]);
        assert_eq!(buffer.capacity(), 4);
        assert_eq!(buffer.front, 0);
        assert!(buffer.is_full());
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut buffer = CircularBuffer::new(2, BufferMode::Growable);
        buffer.extend(0..10);
        let capacity = buffer.capacity();
        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), capacity);
        assert_eq!(buffer.mode(), BufferMode::Growable);
    }

    #[test]
    fn test_random_growable_never_loses_elements() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let mut buffer = CircularBuffer::new(1, BufferMode::Growable);
        let mut oracle = VecDeque::new();
        for step in 0..4_000u32 {
            if rng.random_bool(0.55) {
                assert_eq!(buffer.enqueue(step), None);
                oracle.push_back(step);
            } else {
                assert_eq!(buffer.dequeue().ok(), oracle.pop_front());
            }
            assert_eq!(buffer.len(), oracle.len());
            assert!(buffer.len() <= buffer.capacity());
        }
        assert!(buffer.iter().eq(oracle.iter()));
    }

    #[test]
    fn test_random_overwrite_matches_bounded_deque() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let capacity = 5;
        let mut buffer = CircularBuffer::new(capacity, BufferMode::Overwrite);
        let mut oracle = VecDeque::new();
        for step in 0..2_000u32 {
            if rng.random_bool(0.7) {
                let expected = if oracle.len() == capacity {
                    oracle.pop_front()
                } else {
                    None
                };
                oracle.push_back(step);
                assert_eq!(buffer.enqueue(step), expected);
            } else {
                assert_eq!(buffer.dequeue().ok(), oracle.pop_front());
            }
            assert_eq!(buffer.capacity(), capacity);
            assert!(buffer.iter().eq(oracle.iter()));
        }
    }
}
