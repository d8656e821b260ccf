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

//! Chained hash table with load-factor driven resizing.
//!
//! Each bucket is a [`SequentialList`] of key/value entries. Collisions are
//! resolved by scanning the bucket linearly, new keys are prepended to their
//! bucket, and whenever an insertion pushes `len / capacity` above
//! [`MAX_LOAD_FACTOR`] the bucket array doubles and every entry is rehashed.
//! Capacity never shrinks, not even on [`HashTable::clear`].
//!
//! Bucket selection clears the sign bit of the 64-bit hash before reducing it
//! modulo the capacity, so the index is non-negative for every hash value,
//! including the numeric minimum. Absent keys (see [`TableKey`]) are never
//! hashed and always live in bucket 0.
//!
//! Hashing is pluggable through [`BuildHasher`]; the default is
//! `rustc_hash::FxBuildHasher`, which is deterministic across runs and cheap
//! for the short identifiers used by the scheduling layer.

use crate::{error::CapacityError, key::TableKey, list::SequentialList};
use rustc_hash::FxBuildHasher;
use std::hash::BuildHasher;

/// Number of buckets allocated by [`HashTable::new`].
pub const DEFAULT_CAPACITY: usize = 16;

/// Resize threshold for `len / capacity`.
pub const MAX_LOAD_FACTOR: f64 = 0.75;

/// Bucket that holds every absent key.
const ABSENT_KEY_BUCKET: usize = 0;

/// Clears the sign bit of a hash code.
const SIGN_MASK: u64 = 0x7FFF_FFFF_FFFF_FFFF;

/// One key/value pair, owned by exactly one bucket.
#[derive(Debug, Clone)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// A chained hash table keyed by value equality.
///
/// # Examples
///
/// ```rust
/// # use clinic_collections::hash_table::HashTable;
///
/// let mut table = HashTable::new();
/// assert_eq!(table.put("A-1", 30), None);
/// assert_eq!(table.put("A-1", 45), Some(30));
///
/// assert_eq!(table.get(&"A-1"), Some(&45));
/// assert!(table.contains_key(&"A-1"));
/// assert_eq!(table.len(), 1);
///
/// assert_eq!(table.remove(&"A-1"), Some(45));
/// assert_eq!(table.get(&"A-1"), None);
/// ```
#[derive(Clone)]
pub struct HashTable<K, V, S = FxBuildHasher> {
    buckets: Vec<SequentialList<Entry<K, V>>>,
    len: usize,
    hash_builder: S,
}

impl<K, V> HashTable<K, V, FxBuildHasher>
where
    K: TableKey,
{
    /// Creates an empty table with [`DEFAULT_CAPACITY`] buckets.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity_and_hasher(DEFAULT_CAPACITY, FxBuildHasher)
    }

    /// Creates an empty table with `capacity` buckets.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, FxBuildHasher)
    }

    /// Creates an empty table with `capacity` buckets.
    ///
    /// # Errors
    ///
    /// Returns a [`CapacityError`] if `capacity` is zero.
    #[inline]
    pub fn try_with_capacity(capacity: usize) -> Result<Self, CapacityError> {
        Self::try_with_capacity_and_hasher(capacity, FxBuildHasher)
    }
}

impl<K, V> Default for HashTable<K, V, FxBuildHasher>
where
    K: TableKey,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> HashTable<K, V, S> {
    /// Returns the number of entries in the table.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the table contains no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of buckets.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the current ratio of entries to buckets.
    #[inline]
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    /// Returns a reference to the table's hasher factory.
    #[inline]
    pub fn hasher(&self) -> &S {
        &self.hash_builder
    }

    /// Removes every entry. The bucket count is kept.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.len = 0;
    }

    /// Returns an iterator over all key/value pairs in bucket order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.iter())
            .map(|entry| (&entry.key, &entry.value))
    }

    /// Returns an iterator over all keys in bucket order.
    #[inline]
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over all values in bucket order.
    #[inline]
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, value)| value)
    }

    fn empty_buckets(capacity: usize) -> Vec<SequentialList<Entry<K, V>>> {
        (0..capacity).map(|_| SequentialList::new()).collect()
    }
}

impl<K, V, S> HashTable<K, V, S>
where
    K: TableKey,
    S: BuildHasher,
{
    /// Creates an empty table with `capacity` buckets using `hash_builder`.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        assert!(
            capacity > 0,
            "called `HashTable::with_capacity_and_hasher` with a capacity of zero"
        );
        Self {
            buckets: Self::empty_buckets(capacity),
            len: 0,
            hash_builder,
        }
    }

    /// Creates an empty table with `capacity` buckets using `hash_builder`.
    ///
    /// # Errors
    ///
    /// Returns a [`CapacityError`] if `capacity` is zero.
    pub fn try_with_capacity_and_hasher(
        capacity: usize,
        hash_builder: S,
    ) -> Result<Self, CapacityError> {
        if capacity == 0 {
            return Err(CapacityError {
                collection: "HashTable",
                requested: capacity,
            });
        }
        Ok(Self::with_capacity_and_hasher(capacity, hash_builder))
    }

    /// Maps `key` to its bucket index.
    #[inline]
    fn bucket_index(&self, key: &K) -> usize {
        if key.is_absent() {
            return ABSENT_KEY_BUCKET;
        }
        let hash = self.hash_builder.hash_one(key) & SIGN_MASK;
        (hash % self.buckets.len() as u64) as usize
    }

    /// Inserts `value` under `key`.
    ///
    /// If the key is already present its value is overwritten and the previous
    /// value returned; the size is unchanged. Otherwise a new entry is
    /// prepended to the bucket, and the table doubles its capacity if the
    /// insertion pushed the load factor above [`MAX_LOAD_FACTOR`].
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let index = self.bucket_index(&key);
        if let Some(entry) = self.buckets[index].find_mut(|entry| entry.key == key) {
            return Some(std::mem::replace(&mut entry.value, value));
        }

        self.buckets[index].push_front(Entry { key, value });
        self.len += 1;

        if self.load_factor() > MAX_LOAD_FACTOR {
            self.resize(self.capacity().saturating_mul(2));
        }
        None
    }

    /// Returns a reference to the value stored under `key`.
    #[inline]
    pub fn get(&self, key: &K) -> Option<&V> {
        let index = self.bucket_index(key);
        self.buckets[index]
            .find(|entry| entry.key == *key)
            .map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value stored under `key`.
    #[inline]
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let index = self.bucket_index(key);
        self.buckets[index]
            .find_mut(|entry| entry.key == *key)
            .map(|entry| &mut entry.value)
    }

    /// Returns `true` if the table holds an entry for `key`.
    #[inline]
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Removes the entry for `key` and returns its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let index = self.bucket_index(key);
        let entry = self.buckets[index].remove_first(|entry| entry.key == *key)?;
        self.len -= 1;
        Some(entry.value)
    }

    /// Reallocates the bucket array and rehashes every entry into it.
    fn resize(&mut self, new_capacity: usize) {
        let old_buckets = std::mem::replace(&mut self.buckets, Self::empty_buckets(new_capacity));
        for bucket in old_buckets {
            for entry in bucket {
                let index = self.bucket_index(&entry.key);
                self.buckets[index].push_front(entry);
            }
        }
    }
}

impl<K, V, S> FromIterator<(K, V)> for HashTable<K, V, S>
where
    K: TableKey,
    S: BuildHasher + Default,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut table = Self::with_capacity_and_hasher(DEFAULT_CAPACITY, S::default());
        table.extend(iter);
        table
    }
}

impl<K, V, S> Extend<(K, V)> for HashTable<K, V, S>
where
    K: TableKey,
    S: BuildHasher,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<K, V, S> std::fmt::Debug for HashTable<K, V, S>
where
    K: std::fmt::Debug,
    V: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, S> std::fmt::Display for HashTable<K, V, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "HashTable(len: {}, capacity: {}, load_factor: {:.3})",
            self.len,
            self.capacity(),
            self.load_factor()
        )
    }
}
