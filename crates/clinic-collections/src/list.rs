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

//! Singly-linked sequential list.
//!
//! `SequentialList` is the storage primitive the rest of the workspace builds
//! on: every hash table bucket is one, and so are the consolidated schedule and
//! the conflict log produced by the merger.
//!
//! Nodes live in a contiguous arena and link to their successor by slot index
//! rather than by pointer. This keeps the list entirely safe Rust while still
//! giving O(1) `push_front`, `push_back` and `pop_front`. Slots vacated by
//! removals are recycled through a free list, and the arena is reset whenever
//! the list becomes empty so it never accumulates dead slots across reuse.

/// A list node: one value plus the slot index of its successor.
#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    next: Option<usize>,
}

/// A singly-linked list with head and tail access.
///
/// # Examples
///
/// ```rust
/// # use clinic_collections::list::SequentialList;
///
/// let mut list = SequentialList::new();
/// list.push_back(2);
/// list.push_back(3);
/// list.push_front(1);
///
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.front(), Some(&1));
/// assert_eq!(list.back(), Some(&3));
/// assert_eq!(format!("{}", list), "1 -> 2 -> 3");
///
/// assert_eq!(list.remove_first(|&v| v == 2), Some(2));
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
/// ```
#[derive(Clone)]
pub struct SequentialList<T> {
    /// Node arena; `None` marks a vacant slot.
    nodes: Vec<Option<Node<T>>>,
    /// Vacant slots available for reuse.
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> Default for SequentialList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SequentialList<T> {
    /// Creates a new, empty `SequentialList`.
    #[inline]
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Creates an empty `SequentialList` with room for `capacity` nodes.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    fn node(&self, slot: usize) -> Option<&Node<T>> {
        self.nodes.get(slot)?.as_ref()
    }

    #[inline]
    fn node_mut(&mut self, slot: usize) -> Option<&mut Node<T>> {
        self.nodes.get_mut(slot)?.as_mut()
    }

    fn allocate(&mut self, node: Node<T>) -> usize {
        match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = Some(node);
                slot
            }
            None => {
                self.nodes.push(Some(node));
                self.nodes.len() - 1
            }
        }
    }

    /// Vacates `slot` and returns the value it held. The caller must already
    /// have unlinked the node and adjusted `len`.
    fn release(&mut self, slot: usize) -> Option<T> {
        let node = self.nodes.get_mut(slot)?.take()?;
        if self.len == 0 {
            self.nodes.clear();
            self.free.clear();
        } else {
            self.free.push(slot);
        }
        Some(node.value)
    }

    /// Inserts `value` at the head of the list.
    pub fn push_front(&mut self, value: T) {
        let slot = self.allocate(Node {
            value,
            next: self.head,
        });
        self.head = Some(slot);
        if self.tail.is_none() {
            self.tail = Some(slot);
        }
        self.len += 1;
    }

    /// Appends `value` at the tail of the list.
    pub fn push_back(&mut self, value: T) {
        let slot = self.allocate(Node { value, next: None });
        match self.tail {
            Some(tail) => {
                if let Some(node) = self.node_mut(tail) {
                    node.next = Some(slot);
                }
            }
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
        self.len += 1;
    }

    /// Removes and returns the head of the list, or `None` if it is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        let next = self.node(head)?.next;
        self.head = next;
        if next.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        self.release(head)
    }

    /// Returns a reference to the head element.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.node(self.head?).map(|node| &node.value)
    }

    /// Returns a mutable reference to the head element.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        let head = self.head?;
        self.node_mut(head).map(|node| &mut node.value)
    }

    /// Returns a reference to the tail element.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.node(self.tail?).map(|node| &node.value)
    }

    /// Returns a mutable reference to the tail element.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let tail = self.tail?;
        self.node_mut(tail).map(|node| &mut node.value)
    }

    /// Returns a reference to the element at 0-based `position`.
    ///
    /// This walks the list and is therefore O(n).
    #[inline]
    pub fn get(&self, position: usize) -> Option<&T> {
        self.iter().nth(position)
    }

    /// Returns the first element matching `predicate`.
    #[inline]
    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().find(|value| predicate(value))
    }

    /// Returns a mutable reference to the first element matching `predicate`.
    pub fn find_mut<P>(&mut self, mut predicate: P) -> Option<&mut T>
    where
        P: FnMut(&T) -> bool,
    {
        let mut cursor = self.head;
        while let Some(slot) = cursor {
            let node = self.node(slot)?;
            if predicate(&node.value) {
                return self.node_mut(slot).map(|node| &mut node.value);
            }
            cursor = node.next;
        }
        None
    }

    /// Returns the 0-based position of the first element matching `predicate`.
    #[inline]
    pub fn position<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().position(predicate)
    }

    /// Returns `true` if the list contains an element equal to `value`.
    #[inline]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|v| v == value)
    }

    /// Unlinks the first element matching `predicate` and returns it.
    pub fn remove_first<P>(&mut self, mut predicate: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        let mut previous: Option<usize> = None;
        let mut cursor = self.head;
        while let Some(slot) = cursor {
            let node = self.node(slot)?;
            let next = node.next;
            if predicate(&node.value) {
                match previous {
                    Some(prev) => {
                        if let Some(prev_node) = self.node_mut(prev) {
                            prev_node.next = next;
                        }
                    }
                    None => self.head = next,
                }
                if self.tail == Some(slot) {
                    self.tail = previous;
                }
                self.len -= 1;
                return self.release(slot);
            }
            previous = Some(slot);
            cursor = next;
        }
        None
    }

    /// Applies `f` to every element, head to tail.
    pub fn for_each_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut T),
    {
        let mut cursor = self.head;
        while let Some(slot) = cursor {
            let Some(node) = self.node_mut(slot) else {
                break;
            };
            f(&mut node.value);
            cursor = node.next;
        }
    }

    /// Removes all elements, keeping the allocated arena.
    #[inline]
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Returns an iterator of mutable references, head to tail.
    ///
    /// The references are gathered up front in one pass over the arena, so
    /// this allocates a vector of `len` pointers.
    pub fn iter_mut(&mut self) -> std::vec::IntoIter<&mut T> {
        let mut by_slot: Vec<Option<&mut Node<T>>> =
            self.nodes.iter_mut().map(Option::as_mut).collect();
        let mut ordered = Vec::with_capacity(self.len);
        let mut cursor = self.head;
        while let Some(slot) = cursor {
            let Some(node) = by_slot.get_mut(slot).and_then(Option::take) else {
                break;
            };
            cursor = node.next;
            ordered.push(&mut node.value);
        }
        ordered.into_iter()
    }

    /// Returns an iterator over the elements, head to tail.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
            remaining: self.len,
        }
    }
}

/// Borrowing iterator over a [`SequentialList`].
#[derive(Clone)]
pub struct Iter<'a, T> {
    list: &'a SequentialList<T>,
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.cursor?;
        let list = self.list;
        let node = list.node(slot)?;
        self.cursor = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> std::iter::FusedIterator for Iter<'_, T> {}

/// Owning iterator over a [`SequentialList`].
pub struct IntoIter<T>(SequentialList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for SequentialList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a SequentialList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for SequentialList<T> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let iter = iter.into_iter();
        let mut list = Self::with_capacity(iter.size_hint().0);
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for SequentialList<T> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> PartialEq for SequentialList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T> Eq for SequentialList<T> where T: Eq {}

impl<T> std::fmt::Debug for SequentialList<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> std::fmt::Display for SequentialList<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut iter = self.iter();
        if let Some(first) = iter.next() {
            write!(f, "{}", first)?;
            for v in iter {
                write!(f, " -> {}", v)?;
            }
        }
        Ok(())
    }
}
