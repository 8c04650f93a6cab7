//! Read-only nested-intervals hierarchy: a single, unversioned NI edge
//! map. No delta log, no work-in-progress staging — `insert`/`remove`/
//! `commit` are no-ops, matching the read-only snapshot this variant
//! represents.

use crate::error::{Error, Result};
use crate::ni::{self, NiEdge};
use crate::seq::IndexedSeq;

pub struct NiHierarchy<K, V> {
    values: IndexedSeq<K, V>,
    edges: IndexedSeq<K, NiEdge<K>>,
    sorted_edges: IndexedSeq<u64, NiEdge<K>>,
}

impl<K, V> NiHierarchy<K, V>
where
    K: Ord + Clone + std::fmt::Display,
    V: Clone,
{
    pub fn new() -> NiHierarchy<K, V> {
        NiHierarchy {
            values: IndexedSeq::new(),
            edges: IndexedSeq::new(),
            sorted_edges: IndexedSeq::new(),
        }
    }

    /// Build from a value map and a seed set of NI edges, deriving the
    /// secondary lower-sorted index needed for child enumeration.
    pub fn seed(values: IndexedSeq<K, V>, seed_edges: Vec<NiEdge<K>>) -> NiHierarchy<K, V> {
        let mut edges = IndexedSeq::new();
        let mut sorted_edges = IndexedSeq::new();
        for edge in seed_edges {
            edges.insert(edge.key.clone(), edge.clone());
            sorted_edges.insert(edge.lower, edge);
        }
        NiHierarchy {
            values,
            edges,
            sorted_edges,
        }
    }

    pub fn search(&self, key: &K) -> Result<V> {
        self.values.search_one(key).ok_or_else(|| Error::KeyNotFound(key.to_string()))
    }

    pub fn exists(&self, key: &K) -> bool {
        self.values.count(key) > 0
    }

    pub fn exists_at(&self, key: &K, _version: u64) -> Result<bool> {
        Ok(self.exists(key))
    }

    pub fn num_childs(&self, key: &K) -> Result<u64> {
        let parent_edge = self.edges.search_one(key).ok_or_else(|| Error::KeyNotFound(key.to_string()))?;
        Ok(ni::count_children(&parent_edge, self.sorted_edges.iter_from(&parent_edge.lower)))
    }

    pub fn children(&self, key: &K) -> Result<Vec<K>> {
        let parent_edge = self.edges.search_one(key).ok_or_else(|| Error::KeyNotFound(key.to_string()))?;
        Ok(ni::children(&parent_edge, self.sorted_edges.iter_from(&parent_edge.lower)))
    }

    pub fn is_ancestor(&self, parent: &K, child: &K) -> Result<bool> {
        self.is_ancestor_at(parent, child, 0)
    }

    pub fn is_ancestor_at(&self, parent: &K, child: &K, _version: u64) -> Result<bool> {
        let parent_edge = self.edges.search_one(parent).ok_or_else(|| Error::KeyNotFound(parent.to_string()))?;
        let child_edge = self.edges.search_one(child).ok_or_else(|| Error::KeyNotFound(child.to_string()))?;
        Ok(ni::is_ancestor(&parent_edge, &child_edge))
    }

    pub fn insert(&mut self, _parent: &K, _key: K, _value: V) -> Result<()> {
        Ok(())
    }

    pub fn remove(&mut self, _key: &K) -> Result<()> {
        Ok(())
    }

    pub fn commit(&mut self) -> u64 {
        0
    }
}

impl<K, V> Default for NiHierarchy<K, V>
where
    K: Ord + Clone + std::fmt::Display,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "ni_hierarchy_test.rs"]
mod ni_hierarchy_test;
