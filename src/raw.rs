//! Bucket array, resize engine, and iteration, plus the set-algebra and
//! relation primitives that operate across tables.
//!
//! `RawTable<K, V, S>` is the one chained-hash-table engine shared by both
//! `map::HashMap` and `set::HashSet`; a set is simply `V = ()`, sharing one
//! bucket/resize engine templated over the entry's value slot.

use std::borrow::Borrow;
use std::hash::{BuildHasher, Hash};
use std::mem;

use bitflags::bitflags;

use crate::pool::EntryPool;

bitflags! {
    /// Per-table behavior flags.
    #[derive(Default)]
    pub struct TableFlags: u8 {
        /// Duplicate-key inserts are legal; lookup returns any one match.
        const ALLOW_DUPES = 0b0000_0001;
        /// The table may reduce its bucket count as entries are removed.
        const ALLOW_SHRINK = 0b0000_0010;
    }
}

/// Ascending bucket-count schedule: primes spaced close to successive
/// powers of two.
const PRIMES: [u32; 27] = [
    5, 11, 23, 53, 97, 193, 389, 769, 1_543, 3_079, 6_151, 12_289, 24_593, 49_157, 98_317,
    196_613, 393_241, 786_433, 1_572_869, 3_145_739, 6_291_469, 12_582_917, 25_165_843,
    50_331_653, 100_663_319, 201_326_611, 402_653_189,
];

struct Entry<K, V> {
    hash: u32,
    key: K,
    value: V,
    next: Option<u32>,
}

/// A separate-chaining hash table. Buckets hold the head of a pool-index
/// linked list; entries never move once allocated, so resize only rewires
/// `next` links.
pub struct RawTable<K, V, S> {
    hash_builder: S,
    buckets: Vec<Option<u32>>,
    pool: EntryPool<Entry<K, V>>,
    len: usize,
    cursize: usize,
    min_cursize: usize,
    limit_grow: usize,
    limit_shrink: usize,
    flags: TableFlags,
}

impl<K, V, S> RawTable<K, V, S>
where
    S: BuildHasher,
{
    fn cursize_for_capacity(capacity: usize) -> usize {
        let mut cursize = 0;
        while cursize < PRIMES.len() - 1 && 3 * (PRIMES[cursize] as usize) / 4 < capacity {
            cursize += 1;
        }
        cursize
    }

    pub fn with_hasher(hash_builder: S) -> Self {
        Self::with_capacity_and_hasher(0, hash_builder)
    }

    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        let cursize = Self::cursize_for_capacity(capacity);
        let n = PRIMES[cursize] as usize;
        RawTable {
            hash_builder,
            buckets: vec![None; n],
            pool: EntryPool::new(),
            len: 0,
            cursize,
            min_cursize: cursize,
            limit_grow: 3 * n / 4,
            limit_shrink: 3 * n / 16,
            flags: TableFlags::empty(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of elements the table can hold at its current bucket count
    /// before the next automatic grow.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.limit_grow
    }

    #[inline]
    pub fn buckets(&self) -> usize {
        self.buckets.len()
    }

    #[inline]
    pub fn flags(&self) -> TableFlags {
        self.flags
    }

    #[inline]
    pub fn flag_set(&mut self, flags: TableFlags) {
        self.flags.insert(flags);
    }

    #[inline]
    pub fn flag_clear(&mut self, flags: TableFlags) {
        self.flags.remove(flags);
    }

    fn make_hash<Q>(&self, key: &Q) -> u32
    where
        Q: Hash + ?Sized,
    {
        let mut state = self.hash_builder.build_hasher();
        key.hash(&mut state);
        let h = state.finish();
        (h as u32) ^ ((h >> 32) as u32)
    }

    #[inline]
    fn bucket_index(&self, hash: u32) -> usize {
        (hash as usize) % self.buckets.len()
    }

    fn recompute_thresholds(&mut self) {
        let n = PRIMES[self.cursize] as usize;
        self.limit_grow = 3 * n / 4;
        self.limit_shrink = 3 * n / 16;
    }

    /// Rehashes every live entry into a freshly sized bucket array for the
    /// current `cursize`. O(n); never recomputes a key's hash.
    fn resize_to_current(&mut self) {
        let new_n = PRIMES[self.cursize] as usize;
        let mut new_buckets = vec![None; new_n];
        for old_head in self.buckets.iter() {
            let mut cur = *old_head;
            while let Some(idx) = cur {
                let (hash, next) = {
                    let e = self.pool.get(idx);
                    (e.hash, e.next)
                };
                let b = (hash as usize) % new_n;
                self.pool.get_mut(idx).next = new_buckets[b];
                new_buckets[b] = Some(idx);
                cur = next;
            }
        }
        self.buckets = new_buckets;
    }

    fn maybe_grow(&mut self) {
        while self.len > self.limit_grow && self.cursize < PRIMES.len() - 1 {
            self.cursize += 1;
            self.recompute_thresholds();
            self.resize_to_current();
        }
    }

    fn maybe_shrink(&mut self, force: bool) {
        if !force && !self.flags.contains(TableFlags::ALLOW_SHRINK) {
            return;
        }
        while self.len < self.limit_shrink && self.cursize > self.min_cursize {
            self.cursize -= 1;
            self.recompute_thresholds();
            self.resize_to_current();
        }
    }

    /// Grows the bucket array, if needed, to comfortably hold `additional`
    /// more entries without an intervening resize. Does not touch the
    /// shrink floor; bulk-insert paths (`extend`) use this to avoid repeated
    /// incremental resizes without pinning the table at the bulk size the
    /// way an explicit `reserve` does.
    pub(crate) fn grow_for_bulk(&mut self, additional: usize) {
        let target = self.len + additional;
        let cursize = Self::cursize_for_capacity(target);
        if cursize > self.cursize {
            self.cursize = cursize;
            self.recompute_thresholds();
            self.resize_to_current();
        }
    }

    /// Grows to cover `additional` more entries without a subsequent resize,
    /// and raises the never-shrink-below floor to match.
    pub fn reserve(&mut self, additional: usize) {
        let cursize = Self::cursize_for_capacity(self.len + additional);
        self.grow_for_bulk(additional);
        if cursize > self.min_cursize {
            self.min_cursize = cursize;
        }
    }

    pub fn clear(&mut self) {
        self.clear_ex(false);
    }

    /// Clears all entries; `shrink_to_floor` additionally drops the bucket
    /// array back to the reservation floor.
    pub fn clear_ex(&mut self, shrink_to_floor: bool) {
        self.pool.clear();
        self.len = 0;
        if shrink_to_floor {
            self.cursize = self.min_cursize;
        }
        self.buckets = vec![None; PRIMES[self.cursize] as usize];
        self.recompute_thresholds();
    }
}

impl<K, V, S> RawTable<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn find_idx<Q>(&self, hash: u32, key: &Q) -> Option<u32>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let b = self.bucket_index(hash);
        let mut cur = self.buckets[b];
        while let Some(idx) = cur {
            let e = self.pool.get(idx);
            if e.hash == hash && e.key.borrow() == key {
                return Some(idx);
            }
            cur = e.next;
        }
        None
    }

    fn insert_raw(&mut self, hash: u32, key: K, value: V) -> u32 {
        let b = self.bucket_index(hash);
        let next = self.buckets[b];
        let idx = self.pool.alloc(Entry {
            hash,
            key,
            value,
            next,
        });
        self.buckets[b] = Some(idx);
        self.len += 1;
        self.maybe_grow();
        idx
    }

    /// Unconditional insert: the caller is responsible for not violating the
    /// no-duplicates invariant unless `ALLOW_DUPES` is set.
    pub fn insert(&mut self, key: K, value: V) {
        let hash = self.make_hash(&key);
        debug_assert!(
            self.flags.contains(TableFlags::ALLOW_DUPES) || self.find_idx(hash, &key).is_none(),
            "duplicate key inserted without ALLOW_DUPES"
        );
        self.insert_raw(hash, key, value);
    }

    /// Insert-if-absent: returns `false` without mutating the table if `key`
    /// is already present.
    pub fn try_insert(&mut self, key: K, value: V) -> bool {
        let hash = self.make_hash(&key);
        if self.find_idx(hash, &key).is_some() {
            return false;
        }
        self.insert_raw(hash, key, value);
        true
    }

    /// Insert-or-replace-in-place: returns the previous `(key, value)` pair
    /// when one was replaced.
    pub fn reinsert(&mut self, key: K, value: V) -> Option<(K, V)> {
        let hash = self.make_hash(&key);
        if let Some(idx) = self.find_idx(hash, &key) {
            let e = self.pool.get_mut(idx);
            let old_key = mem::replace(&mut e.key, key);
            let old_value = mem::replace(&mut e.value, value);
            Some((old_key, old_value))
        } else {
            self.insert_raw(hash, key, value);
            None
        }
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = self.make_hash(key);
        self.find_idx(hash, key).is_some()
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = self.make_hash(key);
        self.find_idx(hash, key).map(move |idx| &self.pool.get(idx).value)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = self.make_hash(key);
        match self.find_idx(hash, key) {
            Some(idx) => Some(&mut self.pool.get_mut(idx).value),
            None => None,
        }
    }

    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = self.make_hash(key);
        self.find_idx(hash, key).map(move |idx| {
            let e = self.pool.get(idx);
            (&e.key, &e.value)
        })
    }

    /// Unlinks `key` from its chain without consulting the shrink policy;
    /// callers decide whether/when to run `maybe_shrink` (set algebra defers
    /// shrink to a single forced pass at the end).
    fn unlink<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = self.make_hash(key);
        let b = self.bucket_index(hash);
        let mut cur = self.buckets[b];
        let mut prev: Option<u32> = None;
        while let Some(idx) = cur {
            let (next, matches) = {
                let e = self.pool.get(idx);
                (e.next, e.hash == hash && e.key.borrow() == key)
            };
            if matches {
                match prev {
                    Some(p) => self.pool.get_mut(p).next = next,
                    None => self.buckets[b] = next,
                }
                let e = self.pool.free(idx);
                self.len -= 1;
                return Some((e.key, e.value));
            }
            prev = Some(idx);
            cur = next;
        }
        None
    }

    /// Removes `key`, returning both the key and value. `remove` and `pop`
    /// both delegate to this common unlink, collapsing into ownership
    /// transfer.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let result = self.unlink(key);
        if result.is_some() {
            self.maybe_shrink(false);
        }
        result
    }

    /// Removes `key` if present, returning whether an entry was removed
    ///
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).is_some()
    }

    /// Removes `key`, returning the removed value.
    pub fn pop<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.buckets, &self.pool)
    }
}

impl<K, V, S> Clone for RawTable<K, V, S>
where
    K: Clone + Hash + Eq,
    V: Clone,
    S: BuildHasher + Clone,
{
    fn clone(&self) -> Self {
        let mut new = RawTable::with_capacity_and_hasher(0, self.hash_builder.clone());
        new.cursize = self.cursize;
        new.min_cursize = self.min_cursize;
        new.flags = self.flags;
        new.buckets = vec![None; PRIMES[new.cursize] as usize];
        new.recompute_thresholds();
        for (k, v) in self.iter() {
            new.insert_raw_cloned(k.clone(), v.clone());
        }
        new
    }
}

impl<K, V, S> RawTable<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Like `insert_raw` but goes through the public hashing path; used by
    /// `Clone` and the set-algebra helpers below where the key is already
    /// known-absent in the destination.
    fn insert_raw_cloned(&mut self, key: K, value: V) {
        let hash = self.make_hash(&key);
        self.insert_raw(hash, key, value);
    }
}

/// Forward-only iterator over a table's live entries.
pub struct Iter<'a, K, V> {
    buckets: &'a [Option<u32>],
    pool: &'a EntryPool<Entry<K, V>>,
    bucket_idx: usize,
    cur: Option<u32>,
}

impl<'a, K, V> Iter<'a, K, V> {
    fn new(buckets: &'a [Option<u32>], pool: &'a EntryPool<Entry<K, V>>) -> Self {
        let mut it = Iter {
            buckets,
            pool,
            bucket_idx: 0,
            cur: None,
        };
        it.advance_to_next_bucket();
        it
    }

    fn advance_to_next_bucket(&mut self) {
        while self.cur.is_none() && self.bucket_idx < self.buckets.len() {
            self.cur = self.buckets[self.bucket_idx];
            self.bucket_idx += 1;
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.cur?;
        let e = self.pool.get(idx);
        self.cur = e.next;
        if self.cur.is_none() {
            self.advance_to_next_bucket();
        }
        Some((&e.key, &e.value))
    }
}

// ---- Table relations ----
//
// `is_subset`/`is_superset` follow the same convention as
// `std::collections::HashSet`: `a.is_subset(b)` iff every key of `a` is
// present in `b`.

pub(crate) fn is_disjoint<K, V1, S1, V2, S2>(a: &RawTable<K, V1, S1>, b: &RawTable<K, V2, S2>) -> bool
where
    K: Hash + Eq,
    S1: BuildHasher,
    S2: BuildHasher,
{
    if a.len() <= b.len() {
        a.iter().all(|(k, _)| !b.contains_key(k))
    } else {
        b.iter().all(|(k, _)| !a.contains_key(k))
    }
}

pub(crate) fn is_subset<K, V1, S1, V2, S2>(a: &RawTable<K, V1, S1>, b: &RawTable<K, V2, S2>) -> bool
where
    K: Hash + Eq,
    S1: BuildHasher,
    S2: BuildHasher,
{
    a.iter().all(|(k, _)| b.contains_key(k))
}

pub(crate) fn is_equal<K, V, S1, S2>(a: &RawTable<K, V, S1>, b: &RawTable<K, V, S2>) -> bool
where
    K: Hash + Eq,
    V: PartialEq,
    S1: BuildHasher,
    S2: BuildHasher,
{
    a.len() == b.len() && a.iter().all(|(k, v)| b.get(k).map_or(false, |v2| v2 == v))
}

// ---- Set algebra ----
//
// Every operation returns a freshly owned destination (a clone of the first
// operand) rather than an explicit-destination out parameter. The
// idiomatic Rust shape for "maybe reuse storage, maybe allocate" is a
// return value, not a nullable in/out pointer. Copy/free callbacks collapse
// into `Clone`/`Drop`: every operand here is `K: Clone, V: Clone`, so "copy"
// is `clone()` and "free" is simply letting the old owned value drop.

/// Left-biased union: a destination entry's value wins on key collision.
pub(crate) fn union<K, V, S>(first: &RawTable<K, V, S>, rest: &[&RawTable<K, V, S>]) -> RawTable<K, V, S>
where
    K: Clone + Hash + Eq,
    V: Clone,
    S: BuildHasher + Clone,
{
    let mut dest = first.clone();
    for other in rest.iter().copied() {
        for (k, v) in other.iter() {
            dest.try_insert(k.clone(), v.clone());
        }
    }
    dest
}

/// Right-biased union: a later operand's value overwrites the destination's.
pub(crate) fn union_reversed<K, V, S>(
    first: &RawTable<K, V, S>,
    rest: &[&RawTable<K, V, S>],
) -> RawTable<K, V, S>
where
    K: Clone + Hash + Eq,
    V: Clone,
    S: BuildHasher + Clone,
{
    let mut dest = first.clone();
    for other in rest.iter().copied() {
        for (k, v) in other.iter() {
            dest.reinsert(k.clone(), v.clone());
        }
    }
    dest
}

/// Keeps only destination entries whose key is present in every operand.
pub(crate) fn intersection<K, V, S>(
    first: &RawTable<K, V, S>,
    rest: &[&RawTable<K, V, S>],
) -> RawTable<K, V, S>
where
    K: Clone + Hash + Eq,
    V: Clone,
    S: BuildHasher + Clone,
{
    let mut dest = first.clone();
    for other in rest.iter().copied() {
        let to_remove: Vec<K> = dest
            .iter()
            .filter(|(k, _)| other.get(*k).is_none())
            .map(|(k, _)| k.clone())
            .collect();
        for k in &to_remove {
            dest.unlink(k);
        }
    }
    dest.maybe_shrink(true);
    dest
}

/// Keeps only destination entries whose key is absent from every operand.
pub(crate) fn difference<K, V, S>(
    first: &RawTable<K, V, S>,
    rest: &[&RawTable<K, V, S>],
) -> RawTable<K, V, S>
where
    K: Clone + Hash + Eq,
    V: Clone,
    S: BuildHasher + Clone,
{
    let mut dest = first.clone();
    for other in rest.iter().copied() {
        let to_remove: Vec<K> = dest
            .iter()
            .filter(|(k, _)| other.get(*k).is_some())
            .map(|(k, _)| k.clone())
            .collect();
        for k in &to_remove {
            dest.unlink(k);
        }
    }
    dest.maybe_shrink(true);
    dest
}

/// Keys present in exactly one of `first` and `rest`, via the two-scratch-
/// table double pass: entries seen once go in `keys`, entries seen again
/// go in `rem_keys` and get unlinked from both `keys` and the destination.
pub(crate) fn symmetric_difference<K, V, S>(
    first: &RawTable<K, V, S>,
    rest: &[&RawTable<K, V, S>],
) -> RawTable<K, V, S>
where
    K: Clone + Hash + Eq,
    V: Clone,
    S: BuildHasher + Clone + Default,
{
    let mut keys: RawTable<K, V, S> = RawTable::with_hasher(S::default());
    let mut rem_keys: RawTable<K, (), S> = RawTable::with_hasher(S::default());

    for (k, v) in std::iter::once(first).chain(rest.iter().copied()).flat_map(|t| t.iter()) {
        if keys.get(k).is_none() {
            keys.try_insert(k.clone(), v.clone());
        } else {
            rem_keys.try_insert(k.clone(), ());
        }
    }

    let mut dest = first.clone();
    for (k, _) in rem_keys.iter() {
        debug_assert!(
            keys.unlink(k).is_some(),
            "a key seen twice must have been recorded in the first pass"
        );
        dest.unlink(k);
    }
    for (k, v) in keys.iter() {
        if dest.get(k).is_none() {
            dest.try_insert(k.clone(), v.clone());
        }
    }
    dest.maybe_shrink(true);
    dest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::DefaultHashBuilder;

    fn table() -> RawTable<u64, u64, DefaultHashBuilder> {
        RawTable::with_hasher(DefaultHashBuilder::default())
    }

    #[test]
    fn basic_round_trip() {
        let mut t = table();
        t.insert(0x100, 0x200);
        t.insert(0x300, 0x400);
        assert_eq!(t.len(), 2);
        assert_eq!(t.get(&0x100), Some(&0x200));
        assert_eq!(t.get(&0x999), None);
        assert!(t.contains_key(&0x300));
    }

    #[test]
    fn grows_across_schedule_without_losing_keys() {
        let mut t = table();
        for i in 1..=200u64 {
            t.insert(i, i * 10);
        }
        assert_eq!(t.len(), 200);
        for i in 1..=200u64 {
            assert_eq!(t.get(&i), Some(&(i * 10)));
        }
        assert!(t.buckets() >= 257);
    }

    #[test]
    fn shrink_respects_hysteresis_and_floor() {
        let mut t = table();
        t.flag_set(TableFlags::ALLOW_SHRINK);
        for i in 0..10_000u64 {
            t.insert(i, i);
        }
        for i in 0..9_500u64 {
            t.remove(&i);
        }
        assert_eq!(t.len(), 500);
        assert!(t.buckets() >= 5);
        for i in 9_500..10_000u64 {
            assert_eq!(t.get(&i), Some(&i));
        }
    }

    #[test]
    fn reserve_raises_shrink_floor() {
        let mut t = table();
        t.flag_set(TableFlags::ALLOW_SHRINK);
        t.reserve(1_000);
        let floor_buckets = t.buckets();
        for i in 0..1_000u64 {
            t.insert(i, i);
        }
        for i in 0..1_000u64 {
            t.remove(&i);
        }
        assert_eq!(t.buckets(), floor_buckets);
    }

    #[test]
    fn try_insert_and_reinsert() {
        let mut t = table();
        assert!(t.try_insert(1, 10));
        assert!(!t.try_insert(1, 20));
        assert_eq!(t.get(&1), Some(&10));
        let old = t.reinsert(1, 30);
        assert_eq!(old, Some((1, 10)));
        assert_eq!(t.get(&1), Some(&30));
    }

    #[test]
    fn pop_then_reinsert() {
        let mut t = table();
        t.insert(1, 100);
        let popped = t.pop(&1);
        assert_eq!(popped, Some(100));
        assert_eq!(t.len(), 0);
        t.reinsert(1, 200);
        assert_eq!(t.get(&1), Some(&200));
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn iteration_visits_every_entry() {
        let mut t = table();
        for i in 0..500u64 {
            t.insert(i, i);
        }
        let mut seen: Vec<u64> = t.iter().map(|(k, _)| *k).collect();
        seen.sort_unstable();
        let expected: Vec<u64> = (0..500).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn clone_is_independent_and_equal() {
        let mut t = table();
        for i in 0..50u64 {
            t.insert(i, i * 2);
        }
        let mut cloned = t.clone();
        assert!(is_equal(&t, &cloned));
        cloned.insert(999, 1);
        assert!(!is_equal(&t, &cloned));
        assert_eq!(t.get(&999), None);
    }

    #[test]
    fn relations() {
        let mut a = table();
        let mut b = table();
        for i in 0..10u64 {
            a.insert(i, i);
        }
        for i in 0..5u64 {
            b.insert(i, i);
        }
        assert!(is_subset(&b, &a));
        assert!(!is_subset(&a, &b));
        assert!(is_disjoint(&a, &{
            let mut c = table();
            c.insert(100, 1);
            c
        }));
    }

    #[test]
    fn set_algebra_union_left_and_right_biased() {
        let mut a = table();
        a.insert(1, 10);
        a.insert(2, 20);
        let mut b = table();
        b.insert(2, 200);
        b.insert(3, 30);

        let left = union(&a, &[&b]);
        assert_eq!(left.get(&2), Some(&20));
        assert_eq!(left.get(&3), Some(&30));
        assert_eq!(left.len(), 3);

        let right = union_reversed(&a, &[&b]);
        assert_eq!(right.get(&2), Some(&200));
        assert_eq!(right.len(), 3);
    }

    #[test]
    fn set_algebra_intersection_and_difference() {
        let mut a = table();
        for i in 0..10u64 {
            a.insert(i, i);
        }
        let mut b = table();
        for i in 5..15u64 {
            b.insert(i, i);
        }
        let inter = intersection(&a, &[&b]);
        let mut keys: Vec<u64> = inter.iter().map(|(k, _)| *k).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec![5, 6, 7, 8, 9]);

        let diff = difference(&a, &[&b]);
        let mut keys: Vec<u64> = diff.iter().map(|(k, _)| *k).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec![0, 1, 2, 3, 4]);
        assert!(is_disjoint(&diff, &b));
    }

    #[test]
    fn set_algebra_symmetric_difference_of_three() {
        let mut a = table();
        let mut b = table();
        let mut c = table();
        for k in [1u64, 2, 3] {
            a.insert(k, k);
        }
        for k in [2u64, 3, 4] {
            b.insert(k, k);
        }
        for k in [3u64, 4, 5] {
            c.insert(k, k);
        }
        let sym = symmetric_difference(&a, &[&b, &c]);
        let mut keys: Vec<u64> = sym.iter().map(|(k, _)| *k).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec![1, 5]);
    }

    #[test]
    fn set_algebra_identities() {
        let mut a = table();
        let mut b = table();
        for i in 0..20u64 {
            a.insert(i, i);
        }
        for i in 10..30u64 {
            b.insert(i, i);
        }
        let ab = union(&a, &[&b]);
        let ba = union(&b, &[&a]);
        let mut ab_keys: Vec<u64> = ab.iter().map(|(k, _)| *k).collect();
        let mut ba_keys: Vec<u64> = ba.iter().map(|(k, _)| *k).collect();
        ab_keys.sort_unstable();
        ba_keys.sort_unstable();
        assert_eq!(ab_keys, ba_keys);

        let inter_ab = intersection(&a, &[&b]);
        let inter_ba = intersection(&b, &[&a]);
        let mut i1: Vec<u64> = inter_ab.iter().map(|(k, _)| *k).collect();
        let mut i2: Vec<u64> = inter_ba.iter().map(|(k, _)| *k).collect();
        i1.sort_unstable();
        i2.sort_unstable();
        assert_eq!(i1, i2);

        let sym = symmetric_difference(&a, &[&b]);
        let union_minus_inter = difference(&ab, &[&inter_ab]);
        let mut sym_keys: Vec<u64> = sym.iter().map(|(k, _)| *k).collect();
        let mut umi_keys: Vec<u64> = union_minus_inter.iter().map(|(k, _)| *k).collect();
        sym_keys.sort_unstable();
        umi_keys.sort_unstable();
        assert_eq!(sym_keys, umi_keys);
    }
}
