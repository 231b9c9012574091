//! Property tests for the relationship graph and the modulation chain.

use arcana_graph::astrology::{AstrologyContext, ZodiacSign};
use arcana_graph::cards::{Card, CardIndex, Element};
use arcana_graph::core::{ModulationConfig, ReadingRng};
use arcana_graph::graph::{NodeId, RelationshipGraph};
use arcana_graph::modulation::ModulationEngine;
use proptest::prelude::*;

fn deck(elements: &[Option<Element>]) -> Vec<Card> {
    elements
        .iter()
        .enumerate()
        .map(|(i, element)| {
            let card = Card::new(CardIndex::new(i as u32), format!("Card {}", i), "Major");
            match element {
                Some(e) => card.with_element(*e),
                None => card,
            }
        })
        .collect()
}

fn element_strategy() -> impl Strategy<Value = Option<Element>> {
    prop_oneof![
        Just(None),
        Just(Some(Element::Fire)),
        Just(Some(Element::Water)),
        Just(Some(Element::Air)),
        Just(Some(Element::Earth)),
    ]
}

fn sign_strategy() -> impl Strategy<Value = ZodiacSign> {
    prop_oneof![
        Just(ZodiacSign::Aries),
        Just(ZodiacSign::Leo),
        Just(ZodiacSign::Capricorn),
        Just(ZodiacSign::Unknown),
    ]
}

proptest! {
    #[test]
    fn chain_shape_and_initial_weights(k in 0usize..40, step in 0.01f64..10.0) {
        let cards = deck(&vec![None; k]);
        let drawn: Vec<&Card> = cards.iter().collect();
        let graph = RelationshipGraph::chain(&drawn, step);

        prop_assert_eq!(graph.node_count(), k);
        prop_assert_eq!(graph.edge_count(), k.saturating_sub(1));

        for (i, entry) in graph.edges_in_order().iter().enumerate() {
            prop_assert_eq!(entry.from, NodeId::new(i as u32));
            prop_assert_eq!(entry.to, NodeId::new(i as u32 + 1));
            prop_assert_eq!(entry.weight, step * (i as f64 + 1.0));
        }
    }

    #[test]
    fn update_then_get_round_trips(
        k in 2usize..20,
        pick in 0usize..19,
        weight in -100.0f64..100.0,
    ) {
        let cards = deck(&vec![None; k]);
        let drawn: Vec<&Card> = cards.iter().collect();
        let mut graph = RelationshipGraph::chain(&drawn, 0.5);
        let from = NodeId::new((pick % (k - 1)) as u32);
        let to = NodeId::new(from.raw() + 1);

        prop_assert!(graph.update_edge_weight(from, to, weight));
        prop_assert_eq!(graph.get_edge_weight(from, to), Some(weight));

        // Reverse direction never exists in a chain.
        prop_assert_eq!(graph.get_edge_weight(to, from), None);
        prop_assert!(!graph.update_edge_weight(to, from, weight));
    }

    #[test]
    fn shuffle_is_a_permutation(k in 0usize..78, seed in any::<u64>()) {
        let cards = deck(&vec![None; k]);
        let mut drawn: Vec<&Card> = cards.iter().collect();
        ReadingRng::new(seed).shuffle(&mut drawn);

        let mut indices: Vec<u32> = drawn.iter().map(|c| c.index.raw()).collect();
        indices.sort_unstable();
        prop_assert_eq!(indices, (0..k as u32).collect::<Vec<_>>());
    }

    #[test]
    fn modulation_keeps_positive_weights_positive(
        elements in prop::collection::vec(element_strategy(), 0..20),
        sign in sign_strategy(),
        full_moon in any::<bool>(),
    ) {
        let cards = deck(&elements);
        let drawn: Vec<&Card> = cards.iter().collect();
        let mut graph = RelationshipGraph::chain(&drawn, 0.5);
        let phase = if full_moon { Some("Full Moon".to_string()) } else { None };
        let sky = AstrologyContext::new(sign, phase);

        let engine = ModulationEngine::standard(&ModulationConfig::default());
        let trace = engine.modulate(&mut graph, &sky);

        prop_assert_eq!(trace.len(), graph.edge_count());
        for (entry, step) in graph.edges_in_order().iter().zip(&trace) {
            prop_assert!(entry.weight > 0.0);
            prop_assert_eq!(entry.weight, step.final_weight());
            prop_assert_eq!(step.steps.len(), 3);
        }
    }
}
