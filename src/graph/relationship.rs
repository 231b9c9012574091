//! Arena-based relationship graph for one reading.
//!
//! Nodes are stored in a flat `Vec<Node>` and referenced by `NodeId`
//! indices, so lookups are index comparisons rather than card comparisons.
//! The graph is built fresh per reading. Once modulation starts only edge
//! weights change; nothing adds nodes or edges.
//!
//! ## Traversal order
//!
//! Edges are visited node by node in node insertion order, and within a
//! node in edge insertion order. For a reading chain this is simply the
//! shuffled order of the draw.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::node::{Edge, Node, NodeId};
use crate::cards::{Card, CardIndex};

/// Directed graph of drawn cards with mutable edge weights.
///
/// ## Example
///
/// ```
/// use arcana_graph::cards::{Card, CardIndex};
/// use arcana_graph::graph::RelationshipGraph;
///
/// let fool = Card::new(CardIndex::new(0), "The Fool", "Major");
/// let magician = Card::new(CardIndex::new(1), "The Magician", "Major");
///
/// let mut graph = RelationshipGraph::new();
/// let a = graph.add_node(&fool);
/// let b = graph.add_node(&magician);
/// graph.add_edge(a, b, 0.5);
///
/// assert_eq!(graph.get_edge_weight(a, b), Some(0.5));
/// assert_eq!(graph.get_edge_weight(b, a), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct RelationshipGraph<'a> {
    nodes: Vec<Node<'a>>,
}

impl<'a> RelationshipGraph<'a> {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Create an empty graph with room for `capacity` nodes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Build the reading chain for an already shuffled sequence.
    ///
    /// One node per card in sequence order, then one edge from each card to
    /// its successor. The edge leaving position `i` starts at
    /// `step * (i + 1)`.
    #[must_use]
    pub fn chain(cards: &[&'a Card], step: f64) -> Self {
        let mut graph = Self::with_capacity(cards.len());
        let ids: Vec<NodeId> = cards.iter().map(|&card| graph.add_node(card)).collect();

        for (position, pair) in ids.windows(2).enumerate() {
            graph.add_edge(pair[0], pair[1], step * (position as f64 + 1.0));
        }

        trace!(nodes = graph.node_count(), edges = graph.edge_count(), "reading chain built");
        graph
    }

    /// Append a node wrapping `card`.
    ///
    /// No duplicate detection: adding the same card twice yields two nodes.
    pub fn add_node(&mut self, card: &'a Card) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(Node::new(card));
        id
    }

    /// Add a directed edge `from -> to`.
    ///
    /// Returns `false` without changing anything if either endpoint is not
    /// in this graph or the edge already exists (use `update_edge_weight`).
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: f64) -> bool {
        if !self.contains(to) {
            return false;
        }
        let Some(node) = self.nodes.get_mut(from.slot()) else {
            return false;
        };
        if node.edge_to(to).is_some() {
            return false;
        }
        node.edges.push(Edge::new(to, weight));
        true
    }

    /// Weight of the edge `from -> to`, or `None` if there is no such edge.
    #[must_use]
    pub fn get_edge_weight(&self, from: NodeId, to: NodeId) -> Option<f64> {
        self.node(from)?.edge_to(to).map(|e| e.weight)
    }

    /// Overwrite the weight of the edge `from -> to`.
    ///
    /// Returns `false` if there is no such edge.
    pub fn update_edge_weight(&mut self, from: NodeId, to: NodeId, weight: f64) -> bool {
        match self
            .nodes
            .get_mut(from.slot())
            .and_then(|node| node.edge_to_mut(to))
        {
            Some(edge) => {
                edge.weight = weight;
                true
            }
            None => false,
        }
    }

    /// Check if `id` names a node of this graph.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        id.slot() < self.nodes.len()
    }

    /// Get a node by ID.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node<'a>> {
        self.nodes.get(id.slot())
    }

    /// The card wrapped by a node.
    #[must_use]
    pub fn card(&self, id: NodeId) -> Option<&'a Card> {
        self.node(id).map(|n| n.card)
    }

    /// First node wrapping a card with the same identity as `card`.
    #[must_use]
    pub fn node_for_card(&self, card: &Card) -> Option<NodeId> {
        self.node_for_index(card.index)
    }

    /// First node wrapping the card with deck index `index`.
    #[must_use]
    pub fn node_for_index(&self, index: CardIndex) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|n| n.card.index == index)
            .map(|slot| NodeId::new(slot as u32))
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum()
    }

    /// Check if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node<'a>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i as u32), n))
    }

    /// All edges in traversal order.
    #[must_use]
    pub fn edges_in_order(&self) -> Vec<EdgeEntry> {
        let mut entries = Vec::with_capacity(self.edge_count());
        for (from, node) in self.nodes() {
            entries.extend(node.edges.iter().map(|e| EdgeEntry {
                from,
                to: e.target,
                weight: e.weight,
            }));
        }
        entries
    }

    /// Visit every edge in traversal order with mutable access to its weight.
    pub fn for_each_edge_mut<F>(&mut self, mut visit: F)
    where
        F: FnMut(EdgeSite<'a>, &mut f64),
    {
        let cards: Vec<&'a Card> = self.nodes.iter().map(|n| n.card).collect();
        let mut position = 0;

        for (slot, node) in self.nodes.iter_mut().enumerate() {
            for edge in node.edges.iter_mut() {
                let site = EdgeSite {
                    from: NodeId::new(slot as u32),
                    to: edge.target,
                    from_card: cards[slot],
                    to_card: cards[edge.target.slot()],
                    position,
                };
                visit(site, &mut edge.weight);
                position += 1;
            }
        }
    }

    /// Serializable copy of every edge in traversal order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<EdgeSnapshot> {
        self.edges_in_order()
            .into_iter()
            .map(|entry| {
                let from = self.nodes[entry.from.slot()].card;
                let to = self.nodes[entry.to.slot()].card;
                EdgeSnapshot {
                    from_index: from.index,
                    from_name: from.name.clone(),
                    to_index: to.index,
                    to_name: to.name.clone(),
                    weight: entry.weight,
                }
            })
            .collect()
    }
}

impl fmt::Display for RelationshipGraph<'_> {
    /// One `From -> To : weight` line per edge, in traversal order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in self.edges_in_order() {
            let from = &self.nodes[entry.from.slot()].card.name;
            let to = &self.nodes[entry.to.slot()].card.name;
            writeln!(f, "{} -> {} : {}", from, to, entry.weight)?;
        }
        Ok(())
    }
}

/// An edge as seen during traversal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeEntry {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: f64,
}

/// An edge together with the cards at both ends.
#[derive(Clone, Copy, Debug)]
pub struct EdgeSite<'a> {
    pub from: NodeId,
    pub to: NodeId,
    pub from_card: &'a Card,
    pub to_card: &'a Card,

    /// Ordinal of this edge in traversal order.
    pub position: usize,
}

/// Owned edge record for handing a graph to presentation code.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgeSnapshot {
    pub from_index: CardIndex,
    pub from_name: String,
    pub to_index: CardIndex,
    pub to_name: String,
    pub weight: f64,
}
