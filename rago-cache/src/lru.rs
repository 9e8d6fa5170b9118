//! Fixed-capacity least-recently-used map.
//!
//! Entries live in a slab of nodes threaded onto an intrusive doubly-linked
//! recency list (head = most recent, tail = least recent) and are indexed by a
//! `HashMap` from key to slot. `get` and `put` are O(1). Once the slab is full,
//! an insert reuses the tail's slot, so the slab never grows past `capacity`.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use rago_core::errors::ConfigError;

struct Node<K, V> {
    key: K,
    value: V,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Single-owner LRU container. Wrap in [`crate::SharedLru`] for concurrent use.
pub struct LruBox<K, V> {
    capacity: usize,
    slots: HashMap<K, usize>,
    nodes: Vec<Node<K, V>>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl<K: Hash + Eq + Clone, V> LruBox<K, V> {
    /// Create an empty container. A zero capacity is a configuration error.
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        Self::named("lru", capacity)
    }

    /// Like [`LruBox::new`], naming the cache in the error.
    pub fn named(name: &str, capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::ZeroCapacity { cache: name.into() });
        }
        Ok(Self {
            capacity,
            slots: HashMap::with_capacity(capacity),
            nodes: Vec::new(),
            head: None,
            tail: None,
        })
    }

    /// Look up `key`, marking it most recently used on a hit.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = *self.slots.get(key)?;
        self.touch(idx);
        Some(&self.nodes[idx].value)
    }

    /// Look up `key` without changing recency.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.slots.get(key).map(|&idx| &self.nodes[idx].value)
    }

    /// Whether `key` is resident. Does not change recency.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.slots.contains_key(key)
    }

    /// Insert or replace `key`, leaving it most recently used.
    ///
    /// Inserting a new key into a full container evicts the least recently
    /// used entry first and returns it.
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(&idx) = self.slots.get(&key) {
            self.nodes[idx].value = value;
            self.touch(idx);
            return None;
        }

        if self.nodes.len() < self.capacity {
            let idx = self.nodes.len();
            self.nodes.push(Node {
                key: key.clone(),
                value,
                prev: None,
                next: None,
            });
            self.slots.insert(key, idx);
            self.push_front(idx);
            return None;
        }

        // Full: recycle the least recently used slot.
        let idx = self.tail?;
        self.detach(idx);
        let node = &mut self.nodes[idx];
        let old_key = std::mem::replace(&mut node.key, key.clone());
        let old_value = std::mem::replace(&mut node.value, value);
        self.slots.remove(&old_key);
        self.slots.insert(key, idx);
        self.push_front(idx);
        Some((old_key, old_value))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Entries from most to least recently used.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            nodes: &self.nodes,
            cursor: self.head,
        }
    }

    /// Resident keys from most to least recently used.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(k, _)| k)
    }

    fn touch(&mut self, idx: usize) {
        if self.head == Some(idx) {
            return;
        }
        self.detach(idx);
        self.push_front(idx);
    }

    fn detach(&mut self, idx: usize) {
        let (prev, next) = {
            let node = &self.nodes[idx];
            (node.prev, node.next)
        };
        match prev {
            Some(p) => self.nodes[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.nodes[n].prev = prev,
            None => self.tail = prev,
        }
        let node = &mut self.nodes[idx];
        node.prev = None;
        node.next = None;
    }

    fn push_front(&mut self, idx: usize) {
        let old_head = self.head;
        {
            let node = &mut self.nodes[idx];
            node.prev = None;
            node.next = old_head;
        }
        if let Some(h) = old_head {
            self.nodes[h].prev = Some(idx);
        }
        self.head = Some(idx);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }
    }
}

impl<K, V> std::fmt::Debug for LruBox<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LruBox")
            .field("capacity", &self.capacity)
            .field("len", &self.slots.len())
            .finish()
    }
}

/// Iterator over an [`LruBox`] in recency order.
pub struct Iter<'a, K, V> {
    nodes: &'a [Node<K, V>],
    cursor: Option<usize>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.cursor?;
        let node = &self.nodes[idx];
        self.cursor = node.next;
        Some((&node.key, &node.value))
    }
}
