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

//! Key contract for [`HashTable`](crate::hash_table::HashTable).
//!
//! Rust has no null references, so the "absent key" of a chained hash table is
//! modelled explicitly: a key type reports whether a value of it is absent, and
//! absent keys are always placed in bucket 0 without being hashed. `Option<T>`
//! keys treat `None` as absent; every other provided implementation is never
//! absent.

use clinic_core::utils::id::TypedId;
use std::hash::Hash;

/// A type usable as a hash table key.
///
/// Equality is value equality (`Eq`), never identity. Implementors only need
/// to override [`is_absent`](TableKey::is_absent) when some of their values
/// stand for "no key".
///
/// # Examples
///
/// ```rust
/// # use clinic_collections::key::TableKey;
///
/// #[derive(Hash, PartialEq, Eq)]
/// struct RoomNumber(u16);
///
/// impl TableKey for RoomNumber {}
///
/// assert!(!RoomNumber(4).is_absent());
/// assert!(None::<u32>.is_absent());
/// ```
pub trait TableKey: Hash + Eq {
    /// Returns `true` if this key stands for an absent (null) key.
    #[inline]
    fn is_absent(&self) -> bool {
        false
    }
}

impl<T> TableKey for Option<T>
where
    T: Hash + Eq,
{
    #[inline]
    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

impl<T> TableKey for &T
where
    T: TableKey + ?Sized,
{
    #[inline]
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl<T> TableKey for Box<T>
where
    T: TableKey + ?Sized,
{
    #[inline]
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl<T> TableKey for TypedId<T> where T: Hash + Eq {}

impl<A, B> TableKey for (A, B)
where
    A: Hash + Eq,
    B: Hash + Eq,
{
}

macro_rules! impl_table_key_for {
    ($($t:ty),* $(,)?) => {
        $(impl TableKey for $t {})*
    };
}

impl_table_key_for!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, bool, char, str, String,
);
