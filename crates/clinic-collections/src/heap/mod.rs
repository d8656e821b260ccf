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

//! Array-backed binary heaps.
//!
//! [`BinaryHeap`] is a plain priority queue. [`IndexedBinaryHeap`] adds a
//! reverse index from element to position so membership, lookup and
//! in-place priority updates run without scanning the array.
//!
//! Both heaps store their elements densely in a `Vec`. Positions handed to
//! callers are 1-based (`parent(i) = i / 2`, `children(i) = 2i, 2i + 1`);
//! the sift routines below work on 0-based slots.

pub mod binary;
pub mod indexed;

pub use binary::BinaryHeap;
pub use indexed::IndexedBinaryHeap;

/// The ordering a heap maintains between a parent and its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HeapOrder {
    /// The smallest element is at the root.
    #[default]
    Min,
    /// The largest element is at the root.
    Max,
}

impl HeapOrder {
    /// Returns `true` if `a` must sit strictly above `b`.
    #[inline]
    pub fn precedes<T>(self, a: &T, b: &T) -> bool
    where
        T: Ord,
    {
        match self {
            HeapOrder::Min => a < b,
            HeapOrder::Max => a > b,
        }
    }

    /// Returns `true` if `parent` and `child` break the heap property.
    #[inline]
    pub fn violates<T>(self, parent: &T, child: &T) -> bool
    where
        T: Ord,
    {
        self.precedes(child, parent)
    }
}

impl std::fmt::Display for HeapOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeapOrder::Min => write!(f, "min"),
            HeapOrder::Max => write!(f, "max"),
        }
    }
}

#[inline(always)]
const fn parent(slot: usize) -> usize {
    (slot - 1) / 2
}

#[inline(always)]
const fn left_child(slot: usize) -> usize {
    2 * slot + 1
}

/// Moves the element at `slot` towards the root while it strictly violates
/// the order with its parent and returns its final slot.
///
/// `on_move` is called with every element whose slot changed, together with
/// its new slot.
pub(crate) fn sift_up<T, F>(data: &mut [T], order: HeapOrder, slot: usize, mut on_move: F) -> usize
where
    T: Ord,
    F: FnMut(&T, usize),
{
    let mut current = slot;
    while current > 0 {
        let up = parent(current);
        if !order.violates(&data[up], &data[current]) {
            break;
        }
        data.swap(up, current);
        on_move(&data[current], current);
        current = up;
    }
    if current != slot {
        on_move(&data[current], current);
    }
    current
}

/// Moves the element at `slot` towards the leaves and returns its final slot.
///
/// At every level the more extreme child is chosen; when both children
/// compare equal the right child wins. The walk stops as soon as the parent
/// no longer strictly violates the order with that child.
pub(crate) fn sift_down<T, F>(
    data: &mut [T],
    order: HeapOrder,
    slot: usize,
    mut on_move: F,
) -> usize
where
    T: Ord,
    F: FnMut(&T, usize),
{
    let len = data.len();
    let mut current = slot;
    loop {
        let left = left_child(current);
        if left >= len {
            break;
        }
        let right = left + 1;
        let child = if right < len && !order.precedes(&data[left], &data[right]) {
            right
        } else {
            left
        };
        if !order.violates(&data[current], &data[child]) {
            break;
        }
        data.swap(current, child);
        on_move(&data[current], current);
        current = child;
    }
    if current != slot {
        on_move(&data[current], current);
    }
    current
}

/// Rearranges `data` into a heap bottom-up in linear time.
pub(crate) fn heapify<T>(data: &mut [T], order: HeapOrder)
where
    T: Ord,
{
    for slot in (0..data.len() / 2).rev() {
        sift_down(data, order, slot, |_, _| {});
    }
}

/// Returns `true` if every parent in `data` satisfies `order` against its
/// children.
pub(crate) fn satisfies_order<T>(data: &[T], order: HeapOrder) -> bool
where
    T: Ord,
{
    (1..data.len()).all(|slot| !order.violates(&data[parent(slot)], &data[slot]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_default_is_min() {
        assert_eq!(HeapOrder::default(), HeapOrder::Min);
        assert_eq!(format!("{}", HeapOrder::Max), "max");
    }

    #[test]
    fn test_violates_is_strict() {
        assert!(HeapOrder::Min.violates(&2, &1));
        assert!(!HeapOrder::Min.violates(&1, &1));
        assert!(HeapOrder::Max.violates(&1, &2));
        assert!(!HeapOrder::Max.violates(&2, &2));
    }

    #[test]
    fn test_sift_up_reports_moves() {
        let mut data = vec![1, 4, 5, 0];
        let mut moves = Vec::new();
        let end = sift_up(&mut data, HeapOrder::Min, 3, |v, s| moves.push((*v, s)));
        assert_eq!(end, 0);
        assert_eq!(data, vec![0, 1, 5, 4]);
        assert_eq!(moves, vec![(4, 3), (1, 1), (0, 0)]);
    }

    #[test]
    fn test_sift_down_without_violation_reports_nothing() {
        let mut data = vec![1, 2, 3];
        let mut calls = 0;
        let end = sift_down(&mut data, HeapOrder::Min, 0, |_, _| calls += 1);
        assert_eq!(end, 0);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_heapify_max() {
        let mut data = vec![5, 3, 8, 1, 9, 2];
        heapify(&mut data, HeapOrder::Max);
        assert_eq!(data[0], 9);
        assert!(satisfies_order(&data, HeapOrder::Max));
        assert!(!satisfies_order(&data, HeapOrder::Min));
    }
}
