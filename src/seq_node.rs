//! Arena node types backing [`crate::seq::IndexedSeq`].
//!
//! Nodes live in a single `Vec` owned by the tree (the arena) and refer to
//! each other by index rather than by pointer, so that splits never need
//! `unsafe`. Every node keeps a back-index — `parent` plus `parent_pos` —
//! so an overflowing split can walk straight to its parent slot instead of
//! re-searching from the root.

#[derive(Clone)]
pub(crate) enum Body<K, V> {
    Inner {
        // one more entry than `keys`: children[i] covers keys < keys[i]
        // (and children[keys.len()] covers everything >= the last key).
        children: Vec<usize>,
    },
    Leaf {
        values: Vec<V>,
        prev: Option<usize>,
        next: Option<usize>,
    },
}

#[derive(Clone)]
pub(crate) struct Node<K, V> {
    pub(crate) keys: Vec<K>,
    pub(crate) parent: Option<usize>,
    pub(crate) parent_pos: usize,
    pub(crate) body: Body<K, V>,
}

impl<K, V> Node<K, V> {
    pub(crate) fn new_leaf(prev: Option<usize>, next: Option<usize>) -> Node<K, V> {
        Node {
            keys: Vec::new(),
            parent: None,
            parent_pos: 0,
            body: Body::Leaf {
                values: Vec::new(),
                prev,
                next,
            },
        }
    }

    pub(crate) fn leaf_values(&self) -> &Vec<V> {
        match &self.body {
            Body::Leaf { values, .. } => values,
            Body::Inner { .. } => unreachable!("leaf_values called on inner node"),
        }
    }

    pub(crate) fn leaf_values_mut(&mut self) -> &mut Vec<V> {
        match &mut self.body {
            Body::Leaf { values, .. } => values,
            Body::Inner { .. } => unreachable!("leaf_values_mut called on inner node"),
        }
    }

    pub(crate) fn children(&self) -> &Vec<usize> {
        match &self.body {
            Body::Inner { children } => children,
            Body::Leaf { .. } => unreachable!("children called on leaf node"),
        }
    }
}
