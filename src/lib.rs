//! An in-memory, versioned hierarchy store.
//!
//! Keys live in a rooted tree encoded as nested-interval edges: each key
//! maps to an `(lower, upper)` pair, and `P` is an ancestor of `C` iff
//! `P`'s interval strictly contains `C`'s. Every commit describes its
//! structural edit as a small piecewise-linear coordinate remapping (a
//! [`DeltaFunction`]); a Fenwick-style log of composed deltas lets any
//! past version's edges be reconstructed in `O(log V)` time instead of
//! replaying every commit since.
//!
//! Three hierarchy variants share one query surface ([`Hierarchy`]):
//! [`AdjacencyHierarchy`] (a parent-pointer baseline, useful mainly as a
//! fixture), [`NiHierarchy`] (a read-only nested-intervals snapshot), and
//! [`DeltaNiEngine`] (the full versioned engine). [`HierarchyKind`] wraps
//! all three behind a single type for callers who pick a variant at
//! construction time.

mod adjacency;
mod config;
mod delta;
mod deltani;
mod error;
mod hierarchy;
mod ni;
mod ni_hierarchy;
mod seq;
mod seq_node;

pub use crate::adjacency::{AdjacencyHierarchy, AdjacentEdge};
pub use crate::config::Config;
pub use crate::delta::{DeltaFunction, DeltaRange};
pub use crate::deltani::DeltaNiEngine;
pub use crate::error::{Error, Result};
pub use crate::hierarchy::{DeltaNiHierarchy, Hierarchy, HierarchyKind};
pub use crate::ni::NiEdge;
pub use crate::ni_hierarchy::NiHierarchy;
pub use crate::seq::IndexedSeq;
