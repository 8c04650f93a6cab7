//! Common query surface shared by the three hierarchy variants.
//!
//! Only [`DeltaNiEngine`](crate::deltani::DeltaNiEngine) actually versions
//! anything; the other two implement the same trait over an unversioned
//! snapshot so tests (and callers who don't need time travel) can swap
//! one for another without touching call sites.

use crate::adjacency::AdjacencyHierarchy;
use crate::deltani::DeltaNiEngine;
use crate::error::Result;
use crate::ni_hierarchy::NiHierarchy;

/// Query capability common to every hierarchy variant.
///
/// `*_at` methods take an explicit version and reject one past
/// `max_version` with [`crate::Error::InvalidVersion`]; the unversioned
/// variants accept any version and ignore it. The plain methods mean
/// "latest committed, plus anything staged but not yet committed".
pub trait Hierarchy<K, V> {
    fn search(&self, key: &K) -> Result<V>;

    fn exists(&self, key: &K) -> bool;
    fn exists_at(&self, key: &K, version: u64) -> Result<bool>;

    fn num_childs(&self, key: &K) -> Result<u64>;
    fn children(&self, key: &K) -> Result<Vec<K>>;

    fn is_ancestor(&self, parent: &K, child: &K) -> Result<bool>;
    fn is_ancestor_at(&self, parent: &K, child: &K, version: u64) -> Result<bool>;

    fn insert(&mut self, parent: &K, key: K, value: V) -> Result<()>;
    fn remove(&mut self, key: &K) -> Result<()>;
    fn commit(&mut self) -> u64;
}

/// Alias for the fully versioned engine, named to match the other two
/// variants (`AdjacencyHierarchy`, `NiHierarchy`).
pub type DeltaNiHierarchy<K, V> = DeltaNiEngine<K, V>;

impl<K, V> Hierarchy<K, V> for AdjacencyHierarchy<K, V>
where
    K: Ord + Clone + std::fmt::Display,
    V: Clone,
{
    fn search(&self, key: &K) -> Result<V> {
        self.search(key)
    }

    fn exists(&self, key: &K) -> bool {
        self.exists(key)
    }

    fn exists_at(&self, key: &K, version: u64) -> Result<bool> {
        self.exists_at(key, version)
    }

    fn num_childs(&self, key: &K) -> Result<u64> {
        self.num_childs(key)
    }

    fn children(&self, key: &K) -> Result<Vec<K>> {
        self.children(key)
    }

    fn is_ancestor(&self, parent: &K, child: &K) -> Result<bool> {
        self.is_ancestor(parent, child)
    }

    fn is_ancestor_at(&self, parent: &K, child: &K, version: u64) -> Result<bool> {
        self.is_ancestor_at(parent, child, version)
    }

    fn insert(&mut self, parent: &K, key: K, value: V) -> Result<()> {
        self.insert(parent, key, value)
    }

    fn remove(&mut self, key: &K) -> Result<()> {
        self.remove(key)
    }

    fn commit(&mut self) -> u64 {
        self.commit()
    }
}

impl<K, V> Hierarchy<K, V> for NiHierarchy<K, V>
where
    K: Ord + Clone + std::fmt::Display,
    V: Clone,
{
    fn search(&self, key: &K) -> Result<V> {
        self.search(key)
    }

    fn exists(&self, key: &K) -> bool {
        self.exists(key)
    }

    fn exists_at(&self, key: &K, version: u64) -> Result<bool> {
        self.exists_at(key, version)
    }

    fn num_childs(&self, key: &K) -> Result<u64> {
        self.num_childs(key)
    }

    fn children(&self, key: &K) -> Result<Vec<K>> {
        self.children(key)
    }

    fn is_ancestor(&self, parent: &K, child: &K) -> Result<bool> {
        self.is_ancestor(parent, child)
    }

    fn is_ancestor_at(&self, parent: &K, child: &K, version: u64) -> Result<bool> {
        self.is_ancestor_at(parent, child, version)
    }

    fn insert(&mut self, parent: &K, key: K, value: V) -> Result<()> {
        self.insert(parent, key, value)
    }

    fn remove(&mut self, key: &K) -> Result<()> {
        self.remove(key)
    }

    fn commit(&mut self) -> u64 {
        self.commit()
    }
}

impl<K, V> Hierarchy<K, V> for DeltaNiEngine<K, V>
where
    K: Ord + Clone + std::fmt::Display,
    V: Clone,
{
    fn search(&self, key: &K) -> Result<V> {
        self.search(key)
    }

    fn exists(&self, key: &K) -> bool {
        self.exists(key)
    }

    fn exists_at(&self, key: &K, version: u64) -> Result<bool> {
        self.exists_at(key, version)
    }

    fn num_childs(&self, key: &K) -> Result<u64> {
        self.num_childs(key)
    }

    fn children(&self, key: &K) -> Result<Vec<K>> {
        self.children(key)
    }

    fn is_ancestor(&self, parent: &K, child: &K) -> Result<bool> {
        self.is_ancestor(parent, child)
    }

    fn is_ancestor_at(&self, parent: &K, child: &K, version: u64) -> Result<bool> {
        self.is_ancestor_at(parent, child, version)
    }

    fn insert(&mut self, parent: &K, key: K, value: V) -> Result<()> {
        self.insert(parent, key, value)
    }

    fn remove(&mut self, key: &K) -> Result<()> {
        self.remove(key)
    }

    fn commit(&mut self) -> u64 {
        self.commit()
    }
}

/// A sealed choice of hierarchy implementation: this enum is the only way
/// to get a value behind the trait above, so the set of variants can
/// never grow from outside this crate.
pub enum HierarchyKind<K, V> {
    Adjacency(AdjacencyHierarchy<K, V>),
    Ni(NiHierarchy<K, V>),
    DeltaNi(DeltaNiEngine<K, V>),
}

impl<K, V> Hierarchy<K, V> for HierarchyKind<K, V>
where
    K: Ord + Clone + std::fmt::Display,
    V: Clone,
{
    fn search(&self, key: &K) -> Result<V> {
        match self {
            HierarchyKind::Adjacency(h) => h.search(key),
            HierarchyKind::Ni(h) => h.search(key),
            HierarchyKind::DeltaNi(h) => h.search(key),
        }
    }

    fn exists(&self, key: &K) -> bool {
        match self {
            HierarchyKind::Adjacency(h) => h.exists(key),
            HierarchyKind::Ni(h) => h.exists(key),
            HierarchyKind::DeltaNi(h) => h.exists(key),
        }
    }

    fn exists_at(&self, key: &K, version: u64) -> Result<bool> {
        match self {
            HierarchyKind::Adjacency(h) => h.exists_at(key, version),
            HierarchyKind::Ni(h) => h.exists_at(key, version),
            HierarchyKind::DeltaNi(h) => h.exists_at(key, version),
        }
    }

    fn num_childs(&self, key: &K) -> Result<u64> {
        match self {
            HierarchyKind::Adjacency(h) => h.num_childs(key),
            HierarchyKind::Ni(h) => h.num_childs(key),
            HierarchyKind::DeltaNi(h) => h.num_childs(key),
        }
    }

    fn children(&self, key: &K) -> Result<Vec<K>> {
        match self {
            HierarchyKind::Adjacency(h) => h.children(key),
            HierarchyKind::Ni(h) => h.children(key),
            HierarchyKind::DeltaNi(h) => h.children(key),
        }
    }

    fn is_ancestor(&self, parent: &K, child: &K) -> Result<bool> {
        match self {
            HierarchyKind::Adjacency(h) => h.is_ancestor(parent, child),
            HierarchyKind::Ni(h) => h.is_ancestor(parent, child),
            HierarchyKind::DeltaNi(h) => h.is_ancestor(parent, child),
        }
    }

    fn is_ancestor_at(&self, parent: &K, child: &K, version: u64) -> Result<bool> {
        match self {
            HierarchyKind::Adjacency(h) => h.is_ancestor_at(parent, child, version),
            HierarchyKind::Ni(h) => h.is_ancestor_at(parent, child, version),
            HierarchyKind::DeltaNi(h) => h.is_ancestor_at(parent, child, version),
        }
    }

    fn insert(&mut self, parent: &K, key: K, value: V) -> Result<()> {
        match self {
            HierarchyKind::Adjacency(h) => h.insert(parent, key, value),
            HierarchyKind::Ni(h) => h.insert(parent, key, value),
            HierarchyKind::DeltaNi(h) => h.insert(parent, key, value),
        }
    }

    fn remove(&mut self, key: &K) -> Result<()> {
        match self {
            HierarchyKind::Adjacency(h) => h.remove(key),
            HierarchyKind::Ni(h) => h.remove(key),
            HierarchyKind::DeltaNi(h) => h.remove(key),
        }
    }

    fn commit(&mut self) -> u64 {
        match self {
            HierarchyKind::Adjacency(h) => h.commit(),
            HierarchyKind::Ni(h) => h.commit(),
            HierarchyKind::DeltaNi(h) => h.commit(),
        }
    }
}
