//! Public set surface and the N-ary set algebra / table relations that
//! operate on it. A `HashSet<K, S>` is `RawTable<K, (), S>` under a
//! value-free API. No code path reads a value slot, since `()` carries no
//! storage to read.

use std::borrow::Borrow;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::FromIterator;
use std::ops::{BitAnd, BitOr, BitXor, Sub};

use crate::hash::DefaultHashBuilder;
use crate::raw::{self, Iter as RawIter, RawTable, TableFlags};

/// A separate-chaining hash set with dynamic bucket resizing.
pub struct HashSet<K, S = DefaultHashBuilder> {
    raw: RawTable<K, (), S>,
}

impl<K> HashSet<K, DefaultHashBuilder> {
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl<K> Default for HashSet<K, DefaultHashBuilder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, S> HashSet<K, S>
where
    S: BuildHasher,
{
    pub fn with_hasher(hash_builder: S) -> Self {
        HashSet {
            raw: RawTable::with_hasher(hash_builder),
        }
    }

    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        HashSet {
            raw: RawTable::with_capacity_and_hasher(capacity, hash_builder),
        }
    }

    pub fn reserve(&mut self, additional: usize) {
        self.raw.reserve(additional)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    #[inline]
    pub fn buckets(&self) -> usize {
        self.raw.buckets()
    }

    #[inline]
    pub fn flags(&self) -> TableFlags {
        self.raw.flags()
    }

    #[inline]
    pub fn flag_set(&mut self, flags: TableFlags) {
        self.raw.flag_set(flags)
    }

    #[inline]
    pub fn flag_clear(&mut self, flags: TableFlags) {
        self.raw.flag_clear(flags)
    }

    pub fn clear(&mut self) {
        self.raw.clear()
    }

    pub fn clear_ex(&mut self, shrink_to_floor: bool) {
        self.raw.clear_ex(shrink_to_floor)
    }
}

impl<K, S> HashSet<K, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Insert-if-absent, returning whether `key` was newly added (a
    /// value-free table has no "overwrite in place" path to distinguish a
    /// raw insert from an insert-if-absent).
    pub fn insert(&mut self, key: K) -> bool {
        self.raw.try_insert(key, ())
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.raw.contains_key(key)
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.raw.get_key_value(key).map(|(k, _)| k)
    }

    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.raw.remove(key)
    }

    pub fn take<Q>(&mut self, key: &Q) -> Option<K>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.raw.remove_entry(key).map(|(k, _)| k)
    }

    pub fn iter(&self) -> Iter<'_, K> {
        Iter(self.raw.iter())
    }

    /// True iff every key of `self` is present in `other`.
    pub fn is_subset<S2>(&self, other: &HashSet<K, S2>) -> bool
    where
        S2: BuildHasher,
    {
        raw::is_subset(&self.raw, &other.raw)
    }

    pub fn is_superset<S2>(&self, other: &HashSet<K, S2>) -> bool
    where
        S2: BuildHasher,
    {
        raw::is_subset(&other.raw, &self.raw)
    }

    pub fn is_disjoint<S2>(&self, other: &HashSet<K, S2>) -> bool
    where
        S2: BuildHasher,
    {
        raw::is_disjoint(&self.raw, &other.raw)
    }
}

impl<K, S> HashSet<K, S>
where
    K: Clone + Hash + Eq,
    S: BuildHasher + Clone,
{
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Set union has no value to bias on, so left- and right-biased union
    /// coincide; exposed simply as `union`.
    pub fn union(&self, rest: &[&HashSet<K, S>]) -> HashSet<K, S> {
        let raws: Vec<&RawTable<K, (), S>> = rest.iter().map(|s| &s.raw).collect();
        HashSet {
            raw: raw::union(&self.raw, &raws),
        }
    }

    pub fn intersection(&self, rest: &[&HashSet<K, S>]) -> HashSet<K, S> {
        let raws: Vec<&RawTable<K, (), S>> = rest.iter().map(|s| &s.raw).collect();
        HashSet {
            raw: raw::intersection(&self.raw, &raws),
        }
    }

    pub fn difference(&self, rest: &[&HashSet<K, S>]) -> HashSet<K, S> {
        let raws: Vec<&RawTable<K, (), S>> = rest.iter().map(|s| &s.raw).collect();
        HashSet {
            raw: raw::difference(&self.raw, &raws),
        }
    }
}

impl<K, S> HashSet<K, S>
where
    K: Clone + Hash + Eq,
    S: BuildHasher + Clone + Default,
{
    pub fn symmetric_difference(&self, rest: &[&HashSet<K, S>]) -> HashSet<K, S> {
        let raws: Vec<&RawTable<K, (), S>> = rest.iter().map(|s| &s.raw).collect();
        HashSet {
            raw: raw::symmetric_difference(&self.raw, &raws),
        }
    }
}

impl<K, S> Clone for HashSet<K, S>
where
    K: Clone + Hash + Eq,
    S: BuildHasher + Clone,
{
    fn clone(&self) -> Self {
        HashSet {
            raw: self.raw.clone(),
        }
    }
}

impl<K, S1, S2> PartialEq<HashSet<K, S2>> for HashSet<K, S1>
where
    K: Hash + Eq,
    S1: BuildHasher,
    S2: BuildHasher,
{
    fn eq(&self, other: &HashSet<K, S2>) -> bool {
        raw::is_equal(&self.raw, &other.raw)
    }
}

impl<K, S> Eq for HashSet<K, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
}

impl<K, S> fmt::Debug for HashSet<K, S>
where
    K: fmt::Debug + Hash + Eq,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K, S> Extend<K> for HashSet<K, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn extend<T: IntoIterator<Item = K>>(&mut self, iter: T) {
        let iter = iter.into_iter();
        self.raw.grow_for_bulk(iter.size_hint().0);
        for k in iter {
            self.insert(k);
        }
    }
}

impl<K> FromIterator<K> for HashSet<K, DefaultHashBuilder>
where
    K: Hash + Eq,
{
    fn from_iter<T: IntoIterator<Item = K>>(iter: T) -> Self {
        let mut set = HashSet::new();
        set.extend(iter);
        set
    }
}

impl<'a, K, S> IntoIterator for &'a HashSet<K, S> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        Iter(self.raw.iter())
    }
}

/// Forward-only iterator over set members.
pub struct Iter<'a, K>(RawIter<'a, K, ()>);

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(k, _)| k)
    }
}

// Operator sugar over the named methods above, matching the idiom
// `std::collections::HashSet` readers already expect.

impl<K, S> BitOr<&HashSet<K, S>> for &HashSet<K, S>
where
    K: Clone + Hash + Eq,
    S: BuildHasher + Clone,
{
    type Output = HashSet<K, S>;
    fn bitor(self, rhs: &HashSet<K, S>) -> HashSet<K, S> {
        self.union(&[rhs])
    }
}

impl<K, S> BitAnd<&HashSet<K, S>> for &HashSet<K, S>
where
    K: Clone + Hash + Eq,
    S: BuildHasher + Clone,
{
    type Output = HashSet<K, S>;
    fn bitand(self, rhs: &HashSet<K, S>) -> HashSet<K, S> {
        self.intersection(&[rhs])
    }
}

impl<K, S> Sub<&HashSet<K, S>> for &HashSet<K, S>
where
    K: Clone + Hash + Eq,
    S: BuildHasher + Clone,
{
    type Output = HashSet<K, S>;
    fn sub(self, rhs: &HashSet<K, S>) -> HashSet<K, S> {
        self.difference(&[rhs])
    }
}

impl<K, S> BitXor<&HashSet<K, S>> for &HashSet<K, S>
where
    K: Clone + Hash + Eq,
    S: BuildHasher + Clone + Default,
{
    type Output = HashSet<K, S>;
    fn bitxor(self, rhs: &HashSet<K, S>) -> HashSet<K, S> {
        self.symmetric_difference(&[rhs])
    }
}
