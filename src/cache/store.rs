//! Cache Store Module
//!
//! Main cache engine combining a hash index with a recency queue and a
//! space budget.

use std::borrow::{Borrow, Cow};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use tracing::debug;

use crate::cache::footprint::space_for;
use crate::cache::{
    CacheEntry, CacheStats, Footprint, RecencyQueue, SpaceAccount, DEFAULT_CACHE_NAME,
    DEFAULT_SPACE_LIMIT,
};

/// Builds an empty cache of a given kind for a space limit.
///
/// A cache remembers the factory it was created with and uses it when it is
/// cloned, so a clone comes out as the same kind of cache as its source.
pub type CacheFactory<K, V> = fn(i64) -> LruCache<K, V>;

// == LRU Cache ==
/// A hash table holding a bounded amount of values.
///
/// Every value occupies `footprint_cost()` units of the space limit. When an
/// insert would overflow the limit, the least recently used entries are
/// discarded until the new value fits.
///
/// The cache is not thread-safe. Share it behind a lock wrapping the whole
/// instance, since a single insert may evict any number of entries.
pub struct LruCache<K, V> {
    /// Key to queue slot lookup
    index: HashMap<K, usize>,
    /// Entries ordered by recency
    queue: RecencyQueue<K, V>,
    /// Space budget bookkeeping
    space: SpaceAccount,
    /// Usage counters
    stats: CacheStats,
    /// Label used in the diagnostic dump
    name: Cow<'static, str>,
    /// Constructor used by `clone`
    factory: CacheFactory<K, V>,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Footprint + Clone,
{
    // == Constructor ==
    /// Creates an empty cache holding at most `space_limit` units.
    pub fn new(space_limit: i64) -> Self {
        Self::named(DEFAULT_CACHE_NAME, space_limit)
    }

    /// Creates an empty cache that reports itself as `name`.
    pub fn named(name: impl Into<Cow<'static, str>>, space_limit: i64) -> Self {
        Self {
            index: HashMap::new(),
            queue: RecencyQueue::new(),
            space: SpaceAccount::new(space_limit),
            stats: CacheStats::new(),
            name: name.into(),
            factory: Self::new,
        }
    }

    /// Replaces the factory used to build clones of this cache.
    pub fn with_factory(mut self, factory: CacheFactory<K, V>) -> Self {
        self.factory = factory;
        self
    }

    // == Get ==
    /// Returns the value stored under `key` and marks it most recently used.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(&slot) = self.index.get(key) else {
            self.stats.record_miss();
            return None;
        };

        self.stats.record_hit();
        self.queue.move_to_head(slot);
        self.queue.entry(slot).map(|entry| &entry.value)
    }

    // == Peek ==
    /// Returns the value stored under `key` without touching its recency.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entry_for(key).map(|entry| &entry.value)
    }

    // == Get Key ==
    /// Returns the stored key equal to `key`, or `key` itself when absent.
    ///
    /// The stored key is the instance passed to the put that created the
    /// entry; later puts for an equal key do not replace it.
    pub fn get_key<'a>(&'a self, key: &'a K) -> &'a K {
        self.entry_for(key).map_or(key, |entry| &entry.key)
    }

    // == Contains ==
    /// Returns true if an entry is stored under `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    // == Put ==
    /// Stores `value` under `key` and returns the value.
    ///
    /// An existing entry is updated in place when the new footprint still
    /// fits; otherwise it is dropped and the value is inserted as new.
    /// A value whose footprint exceeds the whole space limit is not stored,
    /// but it is still returned: callers cannot tell a rejected put from a
    /// successful one without a follow-up lookup.
    pub fn put(&mut self, key: K, value: V) -> V {
        let footprint = space_for(&value);

        if let Some(&slot) = self.index.get(&key) {
            let old = self.queue.entry(slot).map_or(0, |entry| entry.footprint);
            if self.space.fits_replacement(old, footprint) {
                self.queue.move_to_head(slot);
                if let Some(entry) = self.queue.entry_mut(slot) {
                    let previous = entry.replace(value.clone(), footprint);
                    self.space.adjust(previous, footprint);
                }
                return value;
            }
            self.remove_slot(slot);
        }

        if self.make_space(footprint) {
            self.insert_entry(key, value.clone(), footprint);
        } else {
            self.stats.record_rejection();
            debug!(
                "{}: rejected value with footprint {} (limit {})",
                self.name,
                footprint,
                self.space.limit()
            );
        }
        value
    }

    // == Remove ==
    /// Removes the entry for `key`, returning its value.
    pub fn remove_key<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let slot = *self.index.get(key)?;
        self.remove_slot(slot).map(|entry| entry.value)
    }

    // == Flush ==
    /// Removes every entry.
    pub fn flush(&mut self) {
        debug!("{}: flushing {} entries", self.name, self.len());
        self.index.clear();
        self.queue.clear();
        self.space.reset();
    }

    /// Removes the entry for `key`, if any.
    pub fn flush_key<Q>(&mut self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_key(key);
    }

    // == Space Limit ==
    /// Changes the space limit.
    ///
    /// Shrinking evicts least recently used entries until the current space
    /// honors the new limit. Growing never evicts.
    pub fn set_space_limit(&mut self, limit: i64) {
        if limit < self.space.limit() {
            let before = self.len();
            while self.space.current() > limit {
                let Some(tail) = self.queue.tail() else {
                    break;
                };
                self.evict(tail);
            }
            debug!(
                "{}: limit lowered from {} to {}, evicted {} entries",
                self.name,
                self.space.limit(),
                limit,
                before - self.len()
            );
        }
        self.space.set_limit(limit);
    }

    // == Eviction ==
    /// Evicts least recently used entries until `footprint` more units fit.
    ///
    /// Returns false, evicting nothing, when `footprint` exceeds the limit.
    fn make_space(&mut self, footprint: i64) -> bool {
        if self.space.fits(footprint) {
            return true;
        }
        if self.space.exceeds_limit(footprint) {
            return false;
        }

        while !self.space.fits(footprint) {
            let Some(tail) = self.queue.tail() else {
                break;
            };
            self.evict(tail);
        }
        true
    }

    fn evict(&mut self, slot: usize) {
        if let Some(entry) = self.remove_slot(slot) {
            self.stats.record_eviction();
            debug!(
                "{}: evicted entry with footprint {} (timestamp {})",
                self.name, entry.footprint, entry.timestamp
            );
        }
    }

    // == Entry Lifecycle ==
    /// Adds an entry at the head without checking the space limit.
    fn insert_entry(&mut self, key: K, value: V, footprint: i64) {
        let slot = self
            .queue
            .insert(CacheEntry::new(key.clone(), value, footprint));
        self.index.insert(key, slot);
        self.space.charge(footprint);
    }

    fn remove_slot(&mut self, slot: usize) -> Option<CacheEntry<K, V>> {
        let entry = self.queue.remove(slot)?;
        self.index.remove(&entry.key);
        self.space.release(entry.footprint);
        Some(entry)
    }

    fn entry_for<Q>(&self, key: &Q) -> Option<&CacheEntry<K, V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index
            .get(key)
            .and_then(|&slot| self.queue.entry(slot))
    }
}

impl<K, V> LruCache<K, V> {
    // == Introspection ==
    /// Returns the name shown in the diagnostic dump.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the maximum space the cache may use.
    pub fn space_limit(&self) -> i64 {
        self.space.limit()
    }

    /// Returns the space used by the live entries.
    pub fn current_space(&self) -> i64 {
        self.space.current()
    }

    // == Length ==
    /// Returns the number of entries in the cache.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Percentage of the space limit in use.
    pub fn filling_ratio(&self) -> f64 {
        self.space.filling_ratio()
    }

    /// Key of the least recently used entry.
    pub fn oldest_key(&self) -> Option<&K> {
        self.queue.tail_entry().map(|entry| &entry.key)
    }

    /// Timestamp of the least recently used entry, 0 when empty.
    pub fn oldest_timestamp(&self) -> u64 {
        self.queue.tail_entry().map_or(0, |entry| entry.timestamp)
    }

    /// Timestamp of the most recently used entry, 0 when empty.
    pub fn newest_timestamp(&self) -> u64 {
        self.queue.head_entry().map_or(0, |entry| entry.timestamp)
    }

    /// Iterates over the stored keys in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.keys_and_values().map(|(key, _)| key)
    }

    /// Iterates over the stored entries in no particular order.
    pub fn keys_and_values(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.index
            .values()
            .filter_map(move |&slot| self.queue.entry(slot))
            .map(|entry| (&entry.key, &entry.value))
    }

    /// Returns the usage counters together with the current occupancy.
    pub fn stats(&self) -> CacheStats {
        self.stats
            .snapshot(self.len(), self.space.current(), self.space.limit())
    }

    /// Renders `"<name>[<limit>]: <ratio>% full"`.
    pub fn to_string_filling_ratio(&self, name: &str) -> String {
        format!(
            "{}[{}]: {}% full",
            name,
            self.space.limit(),
            format_ratio(self.filling_ratio())
        )
    }
}

impl<K, V> Default for LruCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Footprint + Clone,
{
    fn default() -> Self {
        Self::new(DEFAULT_SPACE_LIMIT)
    }
}

// == Clone ==
// Entries are replayed from oldest to newest so the clone ends up with the
// same recency order. The source is within budget, so no eviction is needed.
impl<K, V> Clone for LruCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Footprint + Clone,
{
    fn clone(&self) -> Self {
        let mut cache = (self.factory)(self.space.limit());
        cache.factory = self.factory;
        cache.name = self.name.clone();
        for entry in self.queue.iter_from_tail() {
            cache.insert_entry(entry.key.clone(), entry.value.clone(), entry.footprint);
        }
        cache
    }
}

// == Diagnostic Dump ==
impl<K, V> fmt::Display for LruCache<K, V>
where
    K: fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.to_string_filling_ratio(&self.name))?;

        let mut rows: Vec<(String, &V)> = self
            .keys_and_values()
            .map(|(key, value)| (key.to_string(), value))
            .collect();
        rows.sort_by(|a, b| a.0.cmp(&b.0));

        for (key, value) in rows {
            writeln!(f, "{} -> {}", key, value)?;
        }
        Ok(())
    }
}

impl<K, V> fmt::Debug for LruCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("name", &self.name)
            .field("space_limit", &self.space.limit())
            .field("current_space", &self.space.current())
            .field("entries", &self.len())
            .finish()
    }
}

/// Formats a percentage with at most three fraction digits.
fn format_ratio(ratio: f64) -> String {
    if !ratio.is_finite() {
        return ratio.to_string();
    }
    let text = format!("{:.3}", ratio);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Footprint + Clone,
{
    /// Panics if the index, queue and space account disagree.
    pub(crate) fn assert_invariants(&self) {
        let forward: Vec<&CacheEntry<K, V>> = self.queue.iter().collect();
        let backward = self.queue.iter_from_tail().count();

        assert_eq!(self.index.len(), self.queue.len(), "index and queue sizes differ");
        assert_eq!(forward.len(), self.queue.len(), "queue links lost entries");
        assert_eq!(backward, self.queue.len(), "queue back links lost entries");

        let total: i64 = forward.iter().map(|entry| entry.footprint).sum();
        assert_eq!(total, self.space.current(), "current space out of sync");

        assert!(
            forward.windows(2).all(|pair| pair[0].timestamp > pair[1].timestamp),
            "queue is not ordered by recency"
        );

        for entry in &forward {
            let slot = self.index.get(&entry.key).copied();
            let indexed = slot.and_then(|slot| self.queue.entry(slot));
            assert!(
                indexed.is_some_and(|found| std::ptr::eq(found, *entry)),
                "queued entry missing from index"
            );
        }

        assert_eq!(self.queue.head().is_none(), self.is_empty());
        assert_eq!(self.queue.tail().is_none(), self.is_empty());
        if let Some(head) = self.queue.head_entry() {
            assert!(head.prev.is_none());
        }
        if let Some(tail) = self.queue.tail_entry() {
            assert!(tail.next.is_none());
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    struct Weighted(&'static str, u32);

    impl Footprint for Weighted {
        fn footprint_cost(&self) -> u32 {
            self.1
        }
    }

    impl fmt::Display for Weighted {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    fn recency_order<V: Footprint + Clone>(cache: &LruCache<&'static str, V>) -> Vec<&'static str> {
        cache.queue.iter().map(|entry| entry.key).collect()
    }

    #[test]
    fn test_cache_new() {
        let cache: LruCache<&str, u32> = LruCache::new(10);
        assert!(cache.is_empty());
        assert_eq!(cache.len(), 0);
        assert_eq!(cache.space_limit(), 10);
        assert_eq!(cache.current_space(), 0);
        assert_eq!(cache.oldest_key(), None);
        assert_eq!(cache.oldest_timestamp(), 0);
        assert_eq!(cache.newest_timestamp(), 0);
    }

    #[test]
    fn test_cache_default_limit() {
        let cache: LruCache<String, String> = LruCache::default();
        assert_eq!(cache.space_limit(), 100);
        assert_eq!(cache.name(), "LRUCache");
    }

    #[test]
    fn test_cache_put_and_get() {
        let mut cache = LruCache::new(10);

        let returned = cache.put("key1", "value1");

        assert_eq!(returned, "value1");
        assert_eq!(cache.get("key1"), Some(&"value1"));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.current_space(), 1);
        cache.assert_invariants();
    }

    #[test]
    fn test_cache_get_missing_has_no_side_effects() {
        let mut cache = LruCache::new(3);
        cache.put("a", 1);
        cache.put("b", 2);
        let newest = cache.newest_timestamp();

        assert_eq!(cache.get("missing"), None);

        assert_eq!(recency_order(&cache), vec!["b", "a"]);
        assert_eq!(cache.newest_timestamp(), newest);
        cache.assert_invariants();
    }

    #[test]
    fn test_cache_eviction_order() {
        let mut cache = LruCache::new(3);

        cache.put("A", 1);
        cache.put("B", 2);
        cache.put("C", 3);
        cache.put("D", 4);

        assert_eq!(cache.len(), 3);
        assert!(!cache.contains_key("A"));
        assert_eq!(recency_order(&cache), vec!["D", "C", "B"]);
        assert_eq!(cache.stats().evictions, 1);
        cache.assert_invariants();
    }

    #[test]
    fn test_cache_get_promotes() {
        let mut cache = LruCache::new(3);

        cache.put("A", 1);
        cache.put("B", 2);
        cache.put("C", 3);
        cache.get("A");
        cache.put("D", 4);

        assert!(cache.contains_key("A"));
        assert!(!cache.contains_key("B"));
        assert_eq!(recency_order(&cache), vec!["D", "A", "C"]);
        cache.assert_invariants();
    }

    #[test]
    fn test_cache_get_head_refreshes_timestamp() {
        let mut cache = LruCache::new(3);
        cache.put("A", 1);
        let before = cache.newest_timestamp();

        cache.get("A");

        assert!(cache.newest_timestamp() > before);
        cache.assert_invariants();
    }

    #[test]
    fn test_cache_peek_does_not_promote() {
        let mut cache = LruCache::new(3);

        cache.put("A", 1);
        cache.put("B", 2);
        cache.put("C", 3);
        assert_eq!(cache.peek("A"), Some(&1));
        cache.put("D", 4);

        assert!(!cache.contains_key("A"));
        assert_eq!(cache.stats().hits, 0);
    }

    #[test]
    fn test_cache_oversized_put_is_rejected_silently() {
        let mut cache = LruCache::new(2);

        let returned = cache.put("K", Weighted("big", 5));

        assert_eq!(returned, Weighted("big", 5));
        assert!(cache.is_empty());
        assert_eq!(cache.get("K"), None);
        assert_eq!(cache.stats().rejections, 1);
        cache.assert_invariants();
    }

    #[test]
    fn test_cache_oversized_put_keeps_existing_entries() {
        let mut cache = LruCache::new(2);
        cache.put("a", Weighted("a", 1));

        cache.put("b", Weighted("b", 3));

        assert_eq!(cache.len(), 1);
        assert!(cache.contains_key("a"));
    }

    #[test]
    fn test_cache_variable_cost_evicts_several() {
        let mut cache = LruCache::new(10);
        cache.put("a", Weighted("a", 3));
        cache.put("b", Weighted("b", 3));
        cache.put("c", Weighted("c", 3));

        cache.put("d", Weighted("d", 7));

        assert_eq!(recency_order(&cache), vec!["d", "c"]);
        assert_eq!(cache.current_space(), 10);
        assert_eq!(cache.stats().evictions, 2);
        cache.assert_invariants();
    }

    #[test]
    fn test_cache_update_in_place() {
        let mut cache = LruCache::new(10);
        cache.put("a", Weighted("a1", 2));
        cache.put("b", Weighted("b", 2));

        cache.put("a", Weighted("a2", 5));

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.current_space(), 7);
        assert_eq!(cache.peek("a"), Some(&Weighted("a2", 5)));
        assert_eq!(recency_order(&cache), vec!["a", "b"]);
        assert_eq!(cache.stats().evictions, 0);
        cache.assert_invariants();
    }

    #[test]
    fn test_cache_update_that_overflows_reinserts() {
        let mut cache = LruCache::new(6);
        cache.put("a", Weighted("a1", 2));
        cache.put("b", Weighted("b", 2));
        cache.put("c", Weighted("c", 2));

        cache.put("b", Weighted("b2", 4));

        assert_eq!(recency_order(&cache), vec!["b", "c"]);
        assert_eq!(cache.current_space(), 6);
        assert!(!cache.contains_key("a"));
        cache.assert_invariants();
    }

    #[test]
    fn test_cache_update_to_oversized_drops_entry() {
        let mut cache = LruCache::new(4);
        cache.put("a", Weighted("a", 1));
        cache.put("b", Weighted("b", 1));

        cache.put("a", Weighted("huge", 9));

        assert!(!cache.contains_key("a"));
        assert!(cache.contains_key("b"));
        assert_eq!(cache.current_space(), 1);
        cache.assert_invariants();
    }

    #[test]
    fn test_cache_remove_key() {
        let mut cache = LruCache::new(5);
        cache.put("a", Weighted("a", 2));
        cache.put("b", Weighted("b", 2));

        assert_eq!(cache.remove_key("a"), Some(Weighted("a", 2)));
        assert_eq!(cache.remove_key("a"), None);
        assert_eq!(cache.current_space(), 2);
        cache.assert_invariants();
    }

    #[test]
    fn test_cache_flush() {
        let mut cache = LruCache::new(5);
        cache.put("a", 1);
        cache.put("b", 2);

        cache.flush();

        assert!(cache.is_empty());
        assert_eq!(cache.current_space(), 0);
        assert_eq!(cache.oldest_key(), None);
        cache.put("c", 3);
        assert_eq!(recency_order(&cache), vec!["c"]);
        cache.assert_invariants();
    }

    #[test]
    fn test_cache_flush_key() {
        let mut cache = LruCache::new(5);
        cache.put("a", 1);
        cache.put("b", 2);

        cache.flush_key("a");
        cache.flush_key("missing");

        assert_eq!(recency_order(&cache), vec!["b"]);
        cache.assert_invariants();
    }

    #[test]
    fn test_cache_shrink_limit_evicts_oldest() {
        let mut cache = LruCache::new(3);
        cache.put("A", 1);
        cache.put("B", 2);
        cache.put("C", 3);

        cache.set_space_limit(1);

        assert_eq!(recency_order(&cache), vec!["C"]);
        assert_eq!(cache.space_limit(), 1);
        cache.assert_invariants();
    }

    #[test]
    fn test_cache_grow_limit_never_evicts() {
        let mut cache = LruCache::new(2);
        cache.put("A", 1);
        cache.put("B", 2);

        cache.set_space_limit(10);
        cache.put("C", 3);

        assert_eq!(cache.len(), 3);
        assert_eq!(cache.stats().evictions, 0);
    }

    #[test]
    fn test_cache_zero_limit_holds_nothing() {
        let mut cache = LruCache::new(0);
        cache.put("a", 1);
        assert!(cache.is_empty());

        let mut negative = LruCache::new(-3);
        negative.put("a", 1);
        assert!(negative.is_empty());
    }

    #[test]
    fn test_cache_zero_footprint_entries() {
        let mut cache = LruCache::new(1);
        cache.put("free", Weighted("free", 0));
        cache.put("paid", Weighted("paid", 1));

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.current_space(), 1);
        cache.assert_invariants();
    }

    #[test]
    fn test_cache_filling_ratio() {
        let mut cache = LruCache::new(8);
        cache.put("a", Weighted("a", 2));
        assert_eq!(cache.filling_ratio(), 25.0);
    }

    #[test]
    fn test_cache_timestamps() {
        let mut cache = LruCache::new(5);
        cache.put("a", 1);
        cache.put("b", 2);
        cache.put("c", 3);

        assert_eq!(cache.oldest_key(), Some(&"a"));
        assert!(cache.oldest_timestamp() < cache.newest_timestamp());

        cache.get("a");
        assert_eq!(cache.oldest_key(), Some(&"b"));
    }

    #[test]
    fn test_cache_keys_and_values() {
        let mut cache = LruCache::new(5);
        cache.put("a", 1);
        cache.put("b", 2);

        let mut pairs: Vec<(&str, i32)> = cache.keys_and_values().map(|(k, v)| (*k, *v)).collect();
        pairs.sort();
        assert_eq!(pairs, vec![("a", 1), ("b", 2)]);

        let mut keys: Vec<&str> = cache.keys().copied().collect();
        keys.sort();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_cache_get_key_returns_stored_instance() {
        let mut cache: LruCache<Rc<str>, u32> = LruCache::new(5);
        let first: Rc<str> = Rc::from("k");
        let second: Rc<str> = Rc::from("k");

        cache.put(first.clone(), 1);
        cache.put(second.clone(), 2);

        assert!(Rc::ptr_eq(cache.get_key(&second), &first));
        assert_eq!(cache.peek("k"), Some(&2));

        let absent: Rc<str> = Rc::from("other");
        assert!(Rc::ptr_eq(cache.get_key(&absent), &absent));
    }

    #[test]
    fn test_cache_clone_preserves_order() {
        let mut cache = LruCache::new(3);
        cache.put("A", 1);
        cache.put("B", 2);
        cache.put("C", 3);

        let copy = cache.clone();

        assert_eq!(recency_order(&copy), recency_order(&cache));
        assert_eq!(copy.current_space(), cache.current_space());
        assert_eq!(copy.space_limit(), 3);
        copy.assert_invariants();
    }

    #[test]
    fn test_cache_clone_is_independent() {
        let mut cache = LruCache::new(3);
        cache.put("A", 1);
        cache.put("B", 2);
        cache.put("C", 3);

        let mut copy = cache.clone();
        copy.put("D", 4);
        copy.remove_key("C");

        assert_eq!(recency_order(&cache), vec!["C", "B", "A"]);
        assert_eq!(recency_order(&copy), vec!["D", "B"]);
        cache.assert_invariants();
        copy.assert_invariants();
    }

    #[test]
    fn test_cache_clone_shares_values() {
        let mut cache = LruCache::new(3);
        let value = Rc::new(Weighted("tree", 1));
        cache.put("A", value.clone());

        let copy = cache.clone();

        assert!(Rc::ptr_eq(copy.peek("A").unwrap(), &value));
    }

    fn element_cache(limit: i64) -> LruCache<&'static str, u32> {
        LruCache::named("ElementCache", limit)
    }

    #[test]
    fn test_cache_clone_uses_factory() {
        let mut cache = element_cache(4).with_factory(element_cache);
        cache.put("a", 1);

        let copy = cache.clone();
        let copy_of_copy = copy.clone();

        assert_eq!(copy.name(), "ElementCache");
        assert_eq!(copy_of_copy.name(), "ElementCache");
        assert_eq!(copy_of_copy.space_limit(), 4);
    }

    #[test]
    fn test_cache_clone_keeps_name_without_factory() {
        let mut cache = LruCache::named("ElementCache", 4);
        cache.put("a", 1);

        let copy = cache.clone();

        assert_eq!(copy.name(), "ElementCache");
        assert_eq!(copy.to_string(), cache.to_string());
        assert_eq!(copy.to_string(), "ElementCache[4]: 25% full\na -> 1\n");
    }

    #[test]
    fn test_cache_display_sorted_by_key() {
        let mut cache = LruCache::new(8);
        cache.put("b", Weighted("two", 1));
        cache.put("a", Weighted("one", 1));
        cache.put("c", Weighted("three", 1));

        let dump = cache.to_string();

        assert_eq!(dump, "LRUCache[8]: 37.5% full\na -> one\nb -> two\nc -> three\n");
        assert_eq!(cache.oldest_key(), Some(&"b"));
    }

    #[test]
    fn test_format_ratio() {
        assert_eq!(format_ratio(0.0), "0");
        assert_eq!(format_ratio(50.0), "50");
        assert_eq!(format_ratio(100.0 / 3.0), "33.333");
        assert_eq!(format_ratio(12.5), "12.5");
    }

    #[test]
    fn test_cache_debug() {
        let cache: LruCache<&str, u32> = LruCache::new(4);
        let debug = format!("{:?}", cache);
        assert!(debug.contains("space_limit: 4"));
    }
}
