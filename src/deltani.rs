//! The versioned hierarchy engine: an NI edge map plus a Fenwick-style
//! delta log, giving O(log V) time travel across committed versions.
//!
//! Edits (`insert`/`remove`) stage into a work-in-progress delta `wip`
//! and never touch the log directly; `commit` is the only operation that
//! appends to it.

use log::{debug, info};

use crate::config::Config;
use crate::delta::DeltaFunction;
use crate::error::{Error, Result};
use crate::ni::{self, NiEdge};
use crate::seq::IndexedSeq;

pub struct DeltaNiEngine<K, V> {
    values: IndexedSeq<K, V>,
    edges: IndexedSeq<K, NiEdge<K>>,
    init_max: u64,
    max_edge: u64,
    deltas: Vec<Vec<DeltaFunction>>,
    wip: DeltaFunction,
    config: Config,
}

impl<K, V> DeltaNiEngine<K, V>
where
    K: Ord + Clone + std::fmt::Display,
    V: Clone,
{
    /// Build an empty engine: no values, no edges, version 0.
    pub fn new() -> DeltaNiEngine<K, V> {
        Self::with_config(Config::default())
    }

    /// Build an empty engine whose internal indexed sequences (value map,
    /// edge map, and every delta constructed by future edits) use
    /// `config`'s fanout rather than the default.
    pub fn with_config(config: Config) -> DeltaNiEngine<K, V> {
        info!("DeltaNiEngine::new: init_max=0 max_edge=0");
        DeltaNiEngine {
            values: IndexedSeq::with_config(config),
            edges: IndexedSeq::with_config(config),
            init_max: 0,
            max_edge: 0,
            deltas: Vec::new(),
            wip: DeltaFunction::with_config(config),
            config,
        }
    }

    /// Build from a pre-populated value map and seed NI edges, deriving
    /// `init_max` (the root's `upper + 1`) and `max_edge` (the highest
    /// `upper` seen) by scanning the edges once.
    pub fn from_parts(values: IndexedSeq<K, V>, edges: IndexedSeq<K, NiEdge<K>>) -> DeltaNiEngine<K, V> {
        Self::from_parts_with_config(values, edges, Config::default())
    }

    /// Same as [`DeltaNiEngine::from_parts`], but every delta this engine
    /// constructs from here on (starting with its work-in-progress delta)
    /// uses `config`'s fanout.
    pub fn from_parts_with_config(
        values: IndexedSeq<K, V>,
        edges: IndexedSeq<K, NiEdge<K>>,
        config: Config,
    ) -> DeltaNiEngine<K, V> {
        let mut init_max = 0u64;
        let mut max_edge = 0u64;
        for edge in edges.iter() {
            if edge.lower == 1 {
                init_max = edge.upper + 1;
            }
            if edge.upper > max_edge {
                max_edge = edge.upper;
            }
        }
        info!("DeltaNiEngine::from_parts: init_max={} max_edge={}", init_max, max_edge);
        DeltaNiEngine {
            values,
            edges,
            init_max,
            max_edge,
            deltas: Vec::new(),
            wip: DeltaFunction::with_config(config),
            config,
        }
    }

    /// Build with explicit bounds, bypassing the edge scan (used when the
    /// caller already knows `init_max`/`max_edge`, e.g. from a prior scan).
    pub fn with_bounds(
        values: IndexedSeq<K, V>,
        edges: IndexedSeq<K, NiEdge<K>>,
        init_max: u64,
        max_edge: u64,
        config: Config,
    ) -> DeltaNiEngine<K, V> {
        info!("DeltaNiEngine::from_parts: init_max={} max_edge={}", init_max, max_edge);
        DeltaNiEngine {
            values,
            edges,
            init_max,
            max_edge,
            deltas: Vec::new(),
            wip: DeltaFunction::with_config(config),
            config,
        }
    }

    pub fn max_version(&self) -> u64 {
        match self.deltas.first() {
            Some(level0) => level0.len() as u64,
            None => 0,
        }
    }

    /// Reconstruct `edge` as seen at `version`, optionally also applying
    /// the staged-but-uncommitted `wip` delta.
    fn get_edge(&self, edge: &NiEdge<K>, version: u64, use_wip: bool) -> NiEdge<K> {
        let v = version.min(self.max_version());
        if v == 0 {
            return if use_wip && !self.wip.is_empty() {
                self.wip.apply(edge)
            } else {
                edge.clone()
            };
        }

        let mut power = (u64::BITS - 1) as i64;
        while (v >> power) == 0 {
            power -= 1;
        }

        let mut new_edge = edge.clone();
        let mut current_version = 0u64;
        while current_version < v {
            let step = 1u64 << power;
            new_edge = self.deltas[power as usize][(current_version / step) as usize].apply(&new_edge);
            current_version += step;
            if power > 0 {
                power -= 1;
                while ((v >> power) & 1) == 0 {
                    power -= 1;
                }
            }
        }

        if use_wip {
            new_edge = self.wip.apply(&new_edge);
        }
        new_edge
    }

    /// Public reconstruction at the latest committed version plus wip.
    pub fn get_edge_latest(&self, edge: &NiEdge<K>) -> NiEdge<K> {
        self.get_edge(edge, self.max_version(), true)
    }

    /// Public reconstruction at a specific committed version, rejecting
    /// anything past `max_version`.
    pub fn get_edge_at(&self, edge: &NiEdge<K>, version: u64) -> Result<NiEdge<K>> {
        if version > self.max_version() {
            return Err(Error::InvalidVersion(version));
        }
        Ok(self.get_edge(edge, version, false))
    }

    fn current_max(&self) -> u64 {
        if !self.wip.is_empty() {
            self.wip.max
        } else if self.deltas.is_empty() {
            self.init_max
        } else {
            self.deltas[0].last().expect("level 0 non-empty").max
        }
    }

    fn exists_impl(&self, key: &K, version: u64, use_wip: bool) -> bool {
        let edge = match self.edges.search_one(key) {
            Some(edge) => edge,
            None => return false,
        };
        if version == 0 {
            if use_wip && !self.wip.is_empty() {
                self.wip.eval(edge.lower) < self.wip.max
            } else {
                edge.lower < self.init_max
            }
        } else {
            let reconstructed = self.get_edge(&edge, version, use_wip);
            if use_wip && !self.wip.is_empty() {
                reconstructed.lower < self.wip.max
            } else {
                reconstructed.lower < self.deltas[0][(version - 1) as usize].max
            }
        }
    }

    pub fn exists(&self, key: &K) -> bool {
        self.exists_impl(key, self.max_version(), true)
    }

    pub fn exists_at(&self, key: &K, version: u64) -> Result<bool> {
        if version > self.max_version() {
            return Err(Error::InvalidVersion(version));
        }
        Ok(self.exists_impl(key, version, false))
    }

    fn is_ancestor_impl(&self, parent: &K, child: &K, version: u64, use_wip: bool) -> Result<bool> {
        let parent_edge = self.edges.search_one(parent).ok_or_else(|| Error::InvalidKey(parent.to_string()))?;
        let child_edge = self.edges.search_one(child).ok_or_else(|| Error::InvalidKey(child.to_string()))?;
        let parent_edge = self.get_edge(&parent_edge, version, use_wip);
        let child_edge = self.get_edge(&child_edge, version, use_wip);
        Ok(ni::is_ancestor(&parent_edge, &child_edge))
    }

    pub fn is_ancestor(&self, parent: &K, child: &K) -> Result<bool> {
        self.is_ancestor_impl(parent, child, self.max_version(), true)
    }

    pub fn is_ancestor_at(&self, parent: &K, child: &K, version: u64) -> Result<bool> {
        if version > self.max_version() {
            return Err(Error::InvalidVersion(version));
        }
        self.is_ancestor_impl(parent, child, version, false)
    }

    pub fn search(&self, key: &K) -> Result<V> {
        self.values.search_one(key).ok_or_else(|| Error::KeyNotFound(key.to_string()))
    }

    /// NI-tree child enumeration is only maintained by the unversioned
    /// variants; this engine keeps no secondary lower-sorted index over
    /// reconstructed edges, so it returns the stub `0`.
    pub fn num_childs(&self, _key: &K) -> Result<u64> {
        Ok(0)
    }

    /// See [`DeltaNiEngine::num_childs`].
    pub fn children(&self, _key: &K) -> Result<Vec<K>> {
        Ok(Vec::new())
    }

    pub fn insert(&mut self, parent: &K, key: K, value: V) -> Result<()> {
        let parent_edge = self.edges.search_one(parent).ok_or_else(|| Error::InvalidKey(parent.to_string()))?;
        if !self.exists(parent) {
            return Err(Error::KeyRemoved(parent.to_string()));
        }
        let parent_edge = self.get_edge_latest(&parent_edge);

        if self.exists(&key) {
            return Err(Error::KeyExists(key.to_string()));
        }

        let inserting_edge = match self.edges.search_one(&key) {
            Some(seed) => self.get_edge_latest(&seed),
            None => {
                let fresh = NiEdge::new(key.clone(), self.max_edge + 1, self.max_edge + 2);
                self.edges.insert(key.clone(), fresh.clone());
                self.values.insert(key.clone(), value);
                self.max_edge += 2;
                fresh
            }
        };

        let mut delta = DeltaFunction::with_config(self.config);
        delta.add_range(crate::delta::DeltaRange { from: 1, to: 1 });
        delta.add_range(crate::delta::DeltaRange {
            from: parent_edge.upper,
            to: parent_edge.upper + 2,
        });
        delta.add_range(crate::delta::DeltaRange {
            from: inserting_edge.lower,
            to: parent_edge.upper,
        });
        delta.add_range(crate::delta::DeltaRange {
            from: inserting_edge.upper + 1,
            to: inserting_edge.upper + 1,
        });
        delta.max = self.current_max() + 2;

        self.wip = self.wip.merge(&delta);
        Ok(())
    }

    pub fn remove(&mut self, key: &K) -> Result<()> {
        let edge = self.edges.search_one(key).ok_or_else(|| Error::InvalidKey(key.to_string()))?;
        if !self.exists(key) {
            return Err(Error::KeyRemoved(key.to_string()));
        }
        let edge = self.get_edge_latest(&edge);

        if edge.upper - edge.lower > 1 {
            return Err(Error::KeyHasChildren(key.to_string()));
        }

        let mut delta = DeltaFunction::with_config(self.config);
        delta.add_range(crate::delta::DeltaRange { from: 1, to: 1 });
        if edge.lower == 1 {
            delta.max = 1;
        } else {
            let new_max = self.current_max() - 2;
            delta.add_range(crate::delta::DeltaRange {
                from: edge.lower,
                to: new_max,
            });
            delta.add_range(crate::delta::DeltaRange {
                from: edge.upper + 1,
                to: edge.lower,
            });
            delta.add_range(crate::delta::DeltaRange {
                from: new_max + 2,
                to: new_max + 2,
            });
            delta.max = new_max;
        }

        self.wip = self.wip.merge(&delta);
        Ok(())
    }

    /// Append `delta` to level 0 of the log and Fenwick-merge it upward
    /// into every level that just became a power-of-two-aligned run.
    fn insert_delta(&mut self, delta: DeltaFunction) -> u64 {
        if self.deltas.is_empty() {
            self.deltas.push(vec![delta]);
            return 1;
        }
        self.deltas[0].push(delta);
        let mut size = self.deltas[0].len();
        let mut level = 0usize;
        while size % 2 == 0 {
            if level + 1 >= self.deltas.len() {
                self.deltas.push(Vec::new());
            }
            let merged = self.deltas[level][size - 2].merge(&self.deltas[level][size - 1]);
            self.deltas[level + 1].push(merged);
            level += 1;
            size = self.deltas[level].len();
        }
        self.deltas[0].len() as u64
    }

    pub fn commit(&mut self) -> u64 {
        if self.wip.is_empty() {
            return self.max_version();
        }
        let wip = std::mem::replace(&mut self.wip, DeltaFunction::with_config(self.config));
        let new_version = self.insert_delta(wip);
        debug!("DeltaNiEngine::commit: max_version={}", new_version);
        new_version
    }
}

impl<K, V> Default for DeltaNiEngine<K, V>
where
    K: Ord + Clone + std::fmt::Display,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "deltani_test.rs"]
mod deltani_test;
