//=========================================================================
// Cache Handle
//=========================================================================

//=== Standard Library Imports ============================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::ops::Deref;
use std::rc::{Rc, Weak};

//=== External Crates =====================================================

use log::trace;

//=== Internal Modules ====================================================

use super::{Entry, Eviction};

//=== CacheHandle =========================================================

/// Scoped reference to a cache entry.
///
/// Creating or cloning a handle increments the entry's count; dropping
/// it decrements the count and may evict the entry.
pub struct CacheHandle<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
{
    key: K,
    value: Rc<V>,
    store: Weak<RefCell<HashMap<K, Entry<V>>>>,
}

impl<K, V> CacheHandle<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
{
    pub(super) fn new(key: K, value: Rc<V>, store: Weak<RefCell<HashMap<K, Entry<V>>>>) -> Self {
        Self { key, value, store }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    /// Live handles to this entry, or 0 once the cache is gone.
    pub fn ref_count(&self) -> usize {
        self.store
            .upgrade()
            .and_then(|store| store.borrow().get(&self.key).map(|entry| entry.refs))
            .unwrap_or(0)
    }
}

//--- Trait Implementations -----------------------------------------------

impl<K, V> Clone for CacheHandle<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
{
    fn clone(&self) -> Self {
        if let Some(store) = self.store.upgrade() {
            if let Some(entry) = store.borrow_mut().get_mut(&self.key) {
                entry.refs += 1;
            }
        }

        Self {
            key: self.key.clone(),
            value: Rc::clone(&self.value),
            store: Weak::clone(&self.store),
        }
    }
}

impl<K, V> Drop for CacheHandle<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
{
    fn drop(&mut self) {
        let Some(store) = self.store.upgrade() else {
            return;
        };
        let mut store = store.borrow_mut();

        let evict = match store.get_mut(&self.key) {
            Some(entry) => {
                entry.refs = entry.refs.saturating_sub(1);
                entry.refs == 0 && entry.eviction == Eviction::Auto
            }
            None => false,
        };

        if evict {
            // Our own `value` keeps V alive past this borrow.
            store.remove(&self.key);
            trace!(target: "cache", "Evicted {:?}", self.key);
        }
    }
}

impl<K, V> Deref for CacheHandle<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
{
    type Target = V;

    fn deref(&self) -> &V {
        &self.value
    }
}

impl<K, V> fmt::Debug for CacheHandle<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheHandle")
            .field("key", &self.key)
            .field("value", &self.value)
            .finish()
    }
}
