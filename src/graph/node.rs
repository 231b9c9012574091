//! Relationship graph node and edge structures.
//!
//! Nodes live in an arena and are referenced by `NodeId` indices assigned at
//! insertion. A node borrows the card it wraps from the drawn selection; the
//! graph never owns card data.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;

/// Index into the `RelationshipGraph` node arena.
///
/// Only meaningful for the graph (and reading) that issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub(crate) const fn slot(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// Directed, weighted edge to another node.
///
/// Weight has no fixed range. It starts positive and is rescaled by
/// modulation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub target: NodeId,
    pub weight: f64,
}

impl Edge {
    /// Create a new edge.
    #[must_use]
    pub const fn new(target: NodeId, weight: f64) -> Self {
        Self { target, weight }
    }
}

/// A node in the relationship graph.
#[derive(Clone, Debug)]
pub struct Node<'a> {
    /// The card this node stands for.
    pub card: &'a Card,

    /// Outgoing edges in insertion order.
    /// SmallVec since a reading chain gives each node at most one.
    pub edges: SmallVec<[Edge; 2]>,
}

impl<'a> Node<'a> {
    /// Create a node with no edges.
    #[must_use]
    pub fn new(card: &'a Card) -> Self {
        Self {
            card,
            edges: SmallVec::new(),
        }
    }

    /// First edge pointing at `target`.
    #[must_use]
    pub fn edge_to(&self, target: NodeId) -> Option<&Edge> {
        self.edges.iter().find(|e| e.target == target)
    }

    /// First edge pointing at `target`, mutably.
    pub fn edge_to_mut(&mut self, target: NodeId) -> Option<&mut Edge> {
        self.edges.iter_mut().find(|e| e.target == target)
    }
}
