//! Modulation engine: folds an ordered modifier chain over every edge.
//!
//! The chain is data. Each edge is folded through the modifiers in order,
//! each pass reading the weight left by the previous one. Edges are
//! independent of one another, so per-edge folding gives the same result as
//! running each pass across the whole graph in turn.

use serde::Serialize;
use smallvec::SmallVec;
use tracing::trace;

use super::modifier::{ElementalModifier, LunarModifier, SolarModifier, WeightModifier};
use crate::astrology::AstrologyContext;
use crate::core::ModulationConfig;
use crate::graph::{NodeId, RelationshipGraph};

/// Ordered chain of weight modifiers.
///
/// ## Example
///
/// ```
/// use arcana_graph::core::ModulationConfig;
/// use arcana_graph::modulation::ModulationEngine;
///
/// let engine = ModulationEngine::standard(&ModulationConfig::default());
/// assert_eq!(engine.modifier_names(), vec!["elemental", "lunar", "solar"]);
/// ```
#[derive(Default)]
pub struct ModulationEngine {
    modifiers: Vec<Box<dyn WeightModifier>>,
}

impl ModulationEngine {
    /// Create an engine with no modifiers; modulating leaves weights as is.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock chain: elemental, lunar, solar.
    #[must_use]
    pub fn standard(config: &ModulationConfig) -> Self {
        Self::new()
            .with_modifier(ElementalModifier::from_config(config))
            .with_modifier(LunarModifier::from_config(config))
            .with_modifier(SolarModifier::from_config(config))
    }

    /// Append a modifier to the end of the chain (builder pattern).
    #[must_use]
    pub fn with_modifier(mut self, modifier: impl WeightModifier + 'static) -> Self {
        self.push(Box::new(modifier));
        self
    }

    /// Append a modifier to the end of the chain.
    pub fn push(&mut self, modifier: Box<dyn WeightModifier>) {
        self.modifiers.push(modifier);
    }

    /// Modifier names in chain order.
    #[must_use]
    pub fn modifier_names(&self) -> Vec<&'static str> {
        self.modifiers.iter().map(|m| m.name()).collect()
    }

    /// Number of modifiers in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.modifiers.len()
    }

    /// Check if the chain is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }

    /// Run the chain over every edge, rewriting weights in place.
    ///
    /// Returns one trace entry per edge in traversal order.
    pub fn modulate(
        &self,
        graph: &mut RelationshipGraph<'_>,
        astrology: &AstrologyContext,
    ) -> Vec<EdgeModulation> {
        let mut traces = Vec::with_capacity(graph.edge_count());

        graph.for_each_edge_mut(|site, weight| {
            let initial = *weight;
            let mut steps = SmallVec::new();

            *weight = self.modifiers.iter().fold(initial, |current, modifier| {
                let next = modifier.apply(current, &site, astrology);
                steps.push(PassStep {
                    modifier: modifier.name(),
                    factor: modifier.factor(&site, astrology),
                    weight: next,
                });
                next
            });

            trace!(
                from = %site.from_card.name,
                to = %site.to_card.name,
                initial,
                modulated = *weight,
                "edge modulated"
            );
            traces.push(EdgeModulation {
                from: site.from,
                to: site.to,
                initial,
                steps,
            });
        });

        traces
    }

    /// Run a single modifier over every edge, rewriting weights in place.
    pub fn apply_pass(
        modifier: &dyn WeightModifier,
        graph: &mut RelationshipGraph<'_>,
        astrology: &AstrologyContext,
    ) {
        graph.for_each_edge_mut(|site, weight| {
            *weight = modifier.apply(*weight, &site, astrology);
        });
    }
}

impl std::fmt::Debug for ModulationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModulationEngine")
            .field("modifiers", &self.modifier_names())
            .finish()
    }
}

/// One modifier's effect on one edge.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PassStep {
    pub modifier: &'static str,

    /// Factor the modifier reports. Overridden `apply` methods may not
    /// follow it; `weight` is what was written back.
    pub factor: f64,

    /// Weight after this pass.
    pub weight: f64,
}

/// How one edge's weight evolved through the chain.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EdgeModulation {
    pub from: NodeId,
    pub to: NodeId,

    /// Weight before the first pass.
    pub initial: f64,

    /// One entry per modifier, in chain order.
    pub steps: SmallVec<[PassStep; 3]>,
}

impl EdgeModulation {
    /// Weight after the whole chain.
    #[must_use]
    pub fn final_weight(&self) -> f64 {
        self.steps.last().map_or(self.initial, |s| s.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::astrology::ZodiacSign;
    use crate::cards::{Card, CardIndex, Element};
    use crate::graph::EdgeSite;

    const EPSILON: f64 = 1e-12;

    fn elemental_cards() -> Vec<Card> {
        [Element::Fire, Element::Air, Element::Water]
            .into_iter()
            .enumerate()
            .map(|(i, e)| {
                Card::new(CardIndex::new(i as u32), format!("{} card", e), "Minor").with_element(e)
            })
            .collect()
    }

    fn weights(graph: &RelationshipGraph<'_>) -> Vec<f64> {
        graph.edges_in_order().iter().map(|e| e.weight).collect()
    }

    struct Offset(f64);

    impl WeightModifier for Offset {
        fn name(&self) -> &'static str {
            "offset"
        }

        fn factor(&self, _site: &EdgeSite<'_>, _astrology: &AstrologyContext) -> f64 {
            1.0
        }

        fn apply(&self, weight: f64, _site: &EdgeSite<'_>, _astrology: &AstrologyContext) -> f64 {
            weight + self.0
        }
    }

    #[test]
    fn test_standard_chain() {
        let cards = elemental_cards();
        let order: Vec<&Card> = cards.iter().collect();
        let mut graph = RelationshipGraph::chain(&order, 0.5);
        let astrology = AstrologyContext::new(ZodiacSign::Aries, Some("Full Moon".to_string()));

        let traces = ModulationEngine::standard(&ModulationConfig::default())
            .modulate(&mut graph, &astrology);

        let w = weights(&graph);
        assert!((w[0] - 0.306).abs() < EPSILON);
        assert!((w[1] - 0.748).abs() < EPSILON);

        assert_eq!(traces.len(), 2);
        assert_eq!(traces[0].initial, 0.5);
        let factors: Vec<f64> = traces[1].steps.iter().map(|s| s.factor).collect();
        assert_eq!(factors, vec![1.1, 0.8, 0.85]);
        assert_eq!(traces[1].final_weight(), w[1]);
    }

    #[test]
    fn test_non_trigger_sky() {
        let cards = elemental_cards();
        let order: Vec<&Card> = cards.iter().collect();
        let mut graph = RelationshipGraph::chain(&order, 0.5);
        let astrology = AstrologyContext::new(ZodiacSign::Gemini, None);

        ModulationEngine::standard(&ModulationConfig::default()).modulate(&mut graph, &astrology);

        let w = weights(&graph);
        assert!((w[0] - 0.5 * 0.9 * 1.2 * 1.15).abs() < EPSILON);
        assert!((w[1] - 1.0 * 1.1 * 1.2 * 1.15).abs() < EPSILON);
    }

    #[test]
    fn test_each_pass_in_isolation() {
        let cards = elemental_cards();
        let order: Vec<&Card> = cards.iter().collect();
        let astrology = AstrologyContext::new(ZodiacSign::Aries, Some("Full Moon".to_string()));

        let mut graph = RelationshipGraph::chain(&order, 0.5);
        ModulationEngine::apply_pass(&ElementalModifier::default(), &mut graph, &astrology);
        assert_eq!(weights(&graph), vec![0.5 * 0.9, 1.0 * 1.1]);

        let mut graph = RelationshipGraph::chain(&order, 0.5);
        ModulationEngine::apply_pass(&LunarModifier::default(), &mut graph, &astrology);
        assert_eq!(weights(&graph), vec![0.5 * 0.8, 1.0 * 0.8]);

        let mut graph = RelationshipGraph::chain(&order, 0.5);
        ModulationEngine::apply_pass(&SolarModifier::default(), &mut graph, &astrology);
        assert_eq!(weights(&graph), vec![0.5 * 0.85, 1.0 * 0.85]);
    }

    #[test]
    fn test_order_is_respected() {
        let cards = elemental_cards();
        let order: Vec<&Card> = cards.iter().collect();
        let astrology = AstrologyContext::new(ZodiacSign::Aries, None);

        let mut graph = RelationshipGraph::chain(&order, 1.0);
        ModulationEngine::new()
            .with_modifier(Offset(1.0))
            .with_modifier(SolarModifier::default())
            .modulate(&mut graph, &astrology);
        assert!((weights(&graph)[0] - 2.0 * 0.85).abs() < EPSILON);

        let mut graph = RelationshipGraph::chain(&order, 1.0);
        ModulationEngine::new()
            .with_modifier(SolarModifier::default())
            .with_modifier(Offset(1.0))
            .modulate(&mut graph, &astrology);
        assert!((weights(&graph)[0] - (0.85 + 1.0)).abs() < EPSILON);
    }

    #[test]
    fn test_modulate_matches_apply_pass() {
        let cards = elemental_cards();
        let order: Vec<&Card> = cards.iter().collect();
        let astrology = AstrologyContext::new(ZodiacSign::Leo, None);

        let mut chained = RelationshipGraph::chain(&order, 1.0);
        let traces = ModulationEngine::new()
            .with_modifier(Offset(1.0))
            .modulate(&mut chained, &astrology);

        let mut single = RelationshipGraph::chain(&order, 1.0);
        ModulationEngine::apply_pass(&Offset(1.0), &mut single, &astrology);

        assert_eq!(weights(&chained), weights(&single));
        assert_eq!(weights(&chained), vec![2.0, 3.0]);
        assert_eq!(traces[0].final_weight(), 2.0);
        assert_eq!(traces[0].steps[0].factor, 1.0);
    }

    #[test]
    fn test_empty_chain_and_graph() {
        let cards = elemental_cards();
        let order: Vec<&Card> = cards.iter().collect();
        let astrology = AstrologyContext::new(ZodiacSign::Leo, None);

        let mut graph = RelationshipGraph::chain(&order, 0.5);
        let traces = ModulationEngine::new().modulate(&mut graph, &astrology);
        assert_eq!(weights(&graph), vec![0.5, 1.0]);
        assert_eq!(traces[0].final_weight(), 0.5);

        let mut empty = RelationshipGraph::new();
        let engine = ModulationEngine::standard(&ModulationConfig::default());
        assert!(engine.modulate(&mut empty, &astrology).is_empty());
        assert_eq!(engine.len(), 3);
        assert!(!engine.is_empty());
    }
}
