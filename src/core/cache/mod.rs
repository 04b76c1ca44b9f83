//=========================================================================
// Reference-Counted Cache
//
// Keyed store for shared, immutable resources (textures, animation
// tables). Callers never hold the value directly; they hold a
// `CacheHandle` whose lifetime drives the entry's reference count.
//
// Entry lifecycle:
// ```text
// add(k, v)        → entry inserted, count = 1, handle returned
// add(k, v') again → v' dropped, count += 1, handle to the existing v
// handle.clone()   → count += 1
// drop(handle)     → count -= 1; at 0 with Eviction::Auto → entry removed
// ```
//
// `Eviction::Persistent` entries stay until the cache itself is dropped.
//
// The store is shared through `Rc<RefCell<..>>` and handles keep only a
// `Weak` link back to it, so the cache is single-threaded (`!Send`) and a
// handle that outlives its cache still keeps its value alive.
//
//=========================================================================

//=== Module Declarations =================================================

mod handle;

//=== Public API ==========================================================

pub use handle::CacheHandle;

//=== Standard Library Imports ============================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::rc::Rc;

//=== External Crates =====================================================

use log::trace;

//=== Eviction ============================================================

/// What happens to an entry once its last handle is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Eviction {
    /// Remove the entry when the count reaches zero.
    #[default]
    Auto,

    /// Keep the entry for the lifetime of the cache.
    Persistent,
}

//=== Entry ===============================================================

pub(crate) struct Entry<V> {
    pub(crate) value: Rc<V>,
    pub(crate) refs: usize,
    pub(crate) eviction: Eviction,
}

pub(crate) type Store<K, V> = Rc<RefCell<HashMap<K, Entry<V>>>>;

//=== Cache ===============================================================

/// Keyed store of shared values with handle-driven eviction.
pub struct Cache<K, V> {
    store: Store<K, V>,
}

impl<K, V> Cache<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
{
    pub fn new() -> Self {
        Self {
            store: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    //--- Insertion --------------------------------------------------------

    /// Inserts `value` under `key` with automatic eviction.
    ///
    /// If `key` is already present the new value is discarded and a handle
    /// to the existing entry is returned.
    pub fn add(&self, key: K, value: V) -> CacheHandle<K, V> {
        self.add_with(key, value, Eviction::Auto)
    }

    /// Like [`add`](Self::add) with an explicit eviction policy.
    ///
    /// The policy only applies when the key is new.
    pub fn add_with(&self, key: K, value: V, eviction: Eviction) -> CacheHandle<K, V> {
        let mut store = self.store.borrow_mut();

        let entry = store.entry(key.clone()).or_insert_with(|| {
            trace!(target: "cache", "Inserting {:?} ({:?})", key, eviction);
            Entry {
                value: Rc::new(value),
                refs: 0,
                eviction,
            }
        });
        entry.refs += 1;

        CacheHandle::new(key, Rc::clone(&entry.value), Rc::downgrade(&self.store))
    }

    //--- Lookup -----------------------------------------------------------

    /// Returns a new handle to the entry under `key`, if present.
    pub fn find<Q>(&self, key: &Q) -> Option<CacheHandle<K, V>>
    where
        K: std::borrow::Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let mut store = self.store.borrow_mut();
        let (stored_key, entry) = store.get_key_value(key)?;
        let stored_key = stored_key.clone();
        let value = Rc::clone(&entry.value);

        if let Some(entry) = store.get_mut(key) {
            entry.refs += 1;
        }

        Some(CacheHandle::new(stored_key, value, Rc::downgrade(&self.store)))
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: std::borrow::Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.store.borrow().contains_key(key)
    }

    /// Number of live handles to the entry under `key`.
    pub fn ref_count<Q>(&self, key: &Q) -> Option<usize>
    where
        K: std::borrow::Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.store.borrow().get(key).map(|entry| entry.refs)
    }

    pub fn len(&self) -> usize {
        self.store.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.borrow().is_empty()
    }

    /// Snapshot of the keys currently stored.
    pub fn keys(&self) -> Vec<K> {
        self.store.borrow().keys().cloned().collect()
    }
}

//--- Trait Implementations -----------------------------------------------

impl<K, V> Default for Cache<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for Cache<K, V>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let store = self.store.borrow();
        let mut map = f.debug_map();
        for (key, entry) in store.iter() {
            map.entry(key, &(entry.refs, entry.eviction));
        }
        map.finish()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn cache() -> Cache<String, u32> {
        Cache::new()
    }

    //--- Reference Counting -----------------------------------------------

    #[test]
    fn add_then_drop_evicts() {
        let cache = cache();
        let handle = cache.add("a".into(), 1);

        assert_eq!(*handle, 1);
        assert_eq!(cache.ref_count("a"), Some(1));

        drop(handle);
        assert!(!cache.contains("a"));
        assert!(cache.find("a").is_none());
    }

    #[test]
    fn clone_increments_and_drop_decrements() {
        let cache = cache();
        let first = cache.add("a".into(), 1);
        let second = first.clone();
        let third = second.clone();

        assert_eq!(cache.ref_count("a"), Some(3));
        assert_eq!(first.ref_count(), 3);

        drop(second);
        assert_eq!(cache.ref_count("a"), Some(2));
        drop(first);
        drop(third);
        assert!(cache.is_empty());
    }

    #[test]
    fn add_on_existing_key_discards_new_value() {
        let cache = cache();
        let original = cache.add("a".into(), 1);
        let again = cache.add("a".into(), 99);

        assert_eq!(*again, 1);
        assert_eq!(cache.ref_count("a"), Some(2));
        assert_eq!(cache.len(), 1);
        drop(original);
        drop(again);
    }

    #[test]
    fn find_never_inserts() {
        let cache = cache();
        assert!(cache.find("missing").is_none());
        assert!(cache.is_empty());

        let handle = cache.add("a".into(), 5);
        let found = cache.find("a").unwrap();
        assert_eq!(*found, 5);
        assert_eq!(handle.ref_count(), 2);
    }

    //--- Eviction Policy --------------------------------------------------

    #[test]
    fn persistent_entries_survive_zero_count() {
        let cache = cache();
        drop(cache.add_with("p".into(), 7, Eviction::Persistent));

        assert_eq!(cache.ref_count("p"), Some(0));
        let again = cache.find("p").unwrap();
        assert_eq!(*again, 7);
        assert_eq!(cache.ref_count("p"), Some(1));
    }

    #[test]
    fn policy_applies_only_to_new_keys() {
        let cache = cache();
        let auto = cache.add("k".into(), 1);
        let second = cache.add_with("k".into(), 2, Eviction::Persistent);
        drop(auto);
        drop(second);
        assert!(!cache.contains("k"));
    }

    #[test]
    fn handle_outlives_cache() {
        let handle = {
            let cache = cache();
            cache.add("a".into(), 3)
        };
        assert_eq!(*handle, 3);
        assert_eq!(handle.ref_count(), 0);
        assert_eq!(handle.key(), "a");
    }

    #[test]
    fn value_methods_reach_through_the_handle() {
        let tables: Cache<String, HashMap<String, u32>> = Cache::new();
        let handle = tables.add("frames".into(), HashMap::from([("idle".to_string(), 4)]));

        assert_eq!(handle.get("idle"), Some(&4));
        assert_eq!(handle.value().len(), 1);
    }

    //--- Properties -------------------------------------------------------

    proptest! {
        #[test]
        fn count_tracks_live_handles(clones in 0usize..24, dropped in 0usize..24) {
            let cache = cache();
            let first = cache.add("k".into(), 0);
            let mut handles: Vec<_> = (0..clones).map(|_| first.clone()).collect();
            let dropped = dropped.min(handles.len());
            handles.truncate(handles.len() - dropped);

            prop_assert_eq!(cache.ref_count("k"), Some(1 + clones - dropped));

            drop(handles);
            prop_assert_eq!(cache.ref_count("k"), Some(1));
            drop(first);
            prop_assert!(cache.is_empty());
        }
    }
}
