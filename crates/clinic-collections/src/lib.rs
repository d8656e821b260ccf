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

//! # Clinic Collections
//!
//! Hand-built containers behind the clinic scheduling layer. Each one exposes
//! a small, strongly typed API and reports caller errors through the types in
//! [`error`] rather than panicking.
//!
//! ## Modules
//!
//! - `list`: Arena-backed singly linked list (`SequentialList<T>`) used as the
//!   bucket chain of the hash table and as the ordered output of a merge.
//! - `key`: The `TableKey` trait, which marks hashable keys and tells the
//!   table which keys are absent (`Option::None`).
//! - `hash_table`: Chained hash table with sign-masked bucket selection and
//!   load-factor driven doubling.
//! - `heap`: Min/max binary heap and an indexed variant with an element to
//!   position reverse index.
//! - `circular_buffer`: FIFO ring buffer that either grows or overwrites its
//!   oldest element when full.
//! - `error`: `CapacityError`, `HeapError` and `BufferError`.

pub mod circular_buffer;
pub mod error;
pub mod hash_table;
pub mod heap;
pub mod key;
pub mod list;

pub use circular_buffer::{BufferMode, CircularBuffer};
pub use error::{BufferError, CapacityError, HeapError};
pub use hash_table::HashTable;
pub use heap::{BinaryHeap, HeapOrder, IndexedBinaryHeap};
pub use key::TableKey;
pub use list::SequentialList;
