//! Relationship graph for a single reading.
//!
//! ## Overview
//!
//! - **Arena storage**: nodes live in a `Vec` and are addressed by `NodeId`
//! - **Borrowed cards**: a node holds `&Card` into the drawn selection
//! - **Ordered traversal**: edges are visited in insertion order so printed
//!   readings are reproducible
//! - **Explicit misses**: weight lookups return `Option<f64>`
//!
//! ## Usage
//!
//! ```rust
//! use arcana_graph::cards::{Card, CardIndex};
//! use arcana_graph::graph::RelationshipGraph;
//!
//! let deck: Vec<Card> = (0..3)
//!     .map(|i| Card::new(CardIndex::new(i), format!("Card {}", i), "Major"))
//!     .collect();
//! let drawn: Vec<&Card> = deck.iter().collect();
//!
//! let graph = RelationshipGraph::chain(&drawn, 0.5);
//! assert_eq!(graph.node_count(), 3);
//! assert_eq!(graph.edge_count(), 2);
//! ```

pub mod node;
pub mod relationship;

pub use node::{Edge, Node, NodeId};
pub use relationship::{EdgeEntry, EdgeSite, EdgeSnapshot, RelationshipGraph};
