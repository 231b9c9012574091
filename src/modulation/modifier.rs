//! Weight modifiers.
//!
//! Each modifier is one pass of the modulation chain: it inspects an edge
//! and the reading's astrology and yields a multiplicative factor. The
//! stock chain is elemental, then lunar, then solar.

use crate::astrology::AstrologyContext;
use crate::cards::CompatibilityTable;
use crate::core::ModulationConfig;
use crate::graph::EdgeSite;

/// One pass of the modulation chain.
pub trait WeightModifier: Send + Sync {
    /// Name recorded in modulation traces.
    fn name(&self) -> &'static str;

    /// Factor this pass applies to the edge at `site`.
    fn factor(&self, site: &EdgeSite<'_>, astrology: &AstrologyContext) -> f64;

    /// New weight after this pass.
    fn apply(&self, weight: f64, site: &EdgeSite<'_>, astrology: &AstrologyContext) -> f64 {
        weight * self.factor(site, astrology)
    }
}

/// Scales edges by the elemental affinity of their endpoint cards.
///
/// Unknown elements have no table entry and take the incompatible factor.
#[derive(Clone, Debug)]
pub struct ElementalModifier {
    pub table: CompatibilityTable,
    pub compatible: f64,
    pub incompatible: f64,
}

impl ElementalModifier {
    /// Default table with the configured factors.
    #[must_use]
    pub fn from_config(config: &ModulationConfig) -> Self {
        Self {
            table: CompatibilityTable::default(),
            compatible: config.compatible_factor,
            incompatible: config.incompatible_factor,
        }
    }

    /// Replace the compatibility table.
    #[must_use]
    pub fn with_table(mut self, table: CompatibilityTable) -> Self {
        self.table = table;
        self
    }
}

impl Default for ElementalModifier {
    fn default() -> Self {
        Self::from_config(&ModulationConfig::default())
    }
}

impl WeightModifier for ElementalModifier {
    fn name(&self) -> &'static str {
        "elemental"
    }

    fn factor(&self, site: &EdgeSite<'_>, _astrology: &AstrologyContext) -> f64 {
        if self
            .table
            .is_compatible(site.from_card.element, site.to_card.element)
        {
            self.compatible
        } else {
            self.incompatible
        }
    }
}

/// Scales every edge by the lunar phase.
#[derive(Clone, Debug)]
pub struct LunarModifier {
    pub full_moon_label: String,
    pub full_moon: f64,
    pub other: f64,
}

impl LunarModifier {
    /// Full-moon label and factors from the config.
    #[must_use]
    pub fn from_config(config: &ModulationConfig) -> Self {
        Self {
            full_moon_label: config.full_moon_label.clone(),
            full_moon: config.full_moon_factor,
            other: config.other_phase_factor,
        }
    }
}

impl Default for LunarModifier {
    fn default() -> Self {
        Self::from_config(&ModulationConfig::default())
    }
}

impl WeightModifier for LunarModifier {
    fn name(&self) -> &'static str {
        "lunar"
    }

    fn factor(&self, _site: &EdgeSite<'_>, astrology: &AstrologyContext) -> f64 {
        // An unresolved phase takes the other-phase factor
        match astrology.lunar_phase.as_deref() {
            Some(phase) if phase == self.full_moon_label => self.full_moon,
            _ => self.other,
        }
    }
}

/// Scales every edge by the solar sign.
#[derive(Clone, Debug)]
pub struct SolarModifier {
    pub aries_label: String,
    pub aries: f64,
    pub other: f64,
}

impl SolarModifier {
    /// Aries label and factors from the config.
    #[must_use]
    pub fn from_config(config: &ModulationConfig) -> Self {
        Self {
            aries_label: config.aries_label.clone(),
            aries: config.aries_factor,
            other: config.other_sign_factor,
        }
    }
}

impl Default for SolarModifier {
    fn default() -> Self {
        Self::from_config(&ModulationConfig::default())
    }
}

impl WeightModifier for SolarModifier {
    fn name(&self) -> &'static str {
        "solar"
    }

    fn factor(&self, _site: &EdgeSite<'_>, astrology: &AstrologyContext) -> f64 {
        if astrology.solar_sign.name() == self.aries_label {
            self.aries
        } else {
            self.other
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::astrology::ZodiacSign;
    use crate::cards::{Card, CardIndex, Element};
    use crate::graph::NodeId;

    fn card(index: u32, element: Option<Element>) -> Card {
        let card = Card::new(CardIndex::new(index), format!("Card {}", index), "Major");
        match element {
            Some(e) => card.with_element(e),
            None => card,
        }
    }

    fn site<'a>(from: &'a Card, to: &'a Card) -> EdgeSite<'a> {
        EdgeSite {
            from: NodeId::new(0),
            to: NodeId::new(1),
            from_card: from,
            to_card: to,
            position: 0,
        }
    }

    fn sky(sign: ZodiacSign, phase: Option<&str>) -> AstrologyContext {
        AstrologyContext::new(sign, phase.map(str::to_owned))
    }

    #[test]
    fn test_elemental_factors() {
        let modifier = ElementalModifier::default();
        let astrology = sky(ZodiacSign::Leo, None);
        let fire = card(0, Some(Element::Fire));
        let air = card(1, Some(Element::Air));
        let water = card(2, Some(Element::Water));
        let blank = card(3, None);

        assert_eq!(modifier.factor(&site(&fire, &air), &astrology), 0.9);
        assert_eq!(modifier.factor(&site(&fire, &water), &astrology), 1.1);
        assert_eq!(modifier.factor(&site(&blank, &fire), &astrology), 1.1);
        assert_eq!(modifier.factor(&site(&fire, &blank), &astrology), 1.1);
        assert_eq!(modifier.apply(2.0, &site(&fire, &air), &astrology), 2.0 * 0.9);
    }

    #[test]
    fn test_elemental_custom_table() {
        let modifier = ElementalModifier::default().with_table(CompatibilityTable::empty());
        let fire = card(0, Some(Element::Fire));
        assert_eq!(
            modifier.factor(&site(&fire, &fire), &sky(ZodiacSign::Leo, None)),
            1.1
        );
    }

    #[test]
    fn test_lunar_factors() {
        let modifier = LunarModifier::default();
        let a = card(0, None);
        let b = card(1, None);
        let s = site(&a, &b);

        assert_eq!(modifier.factor(&s, &sky(ZodiacSign::Leo, Some("Full Moon"))), 0.8);
        assert_eq!(modifier.factor(&s, &sky(ZodiacSign::Leo, Some("New Moon"))), 1.2);
        assert_eq!(modifier.factor(&s, &sky(ZodiacSign::Leo, Some("full moon"))), 1.2);
        assert_eq!(modifier.factor(&s, &sky(ZodiacSign::Leo, None)), 1.2);
    }

    #[test]
    fn test_solar_factors() {
        let modifier = SolarModifier::default();
        let a = card(0, None);
        let b = card(1, None);
        let s = site(&a, &b);

        assert_eq!(modifier.factor(&s, &sky(ZodiacSign::Aries, None)), 0.85);
        assert_eq!(modifier.factor(&s, &sky(ZodiacSign::Taurus, None)), 1.15);
        assert_eq!(modifier.factor(&s, &sky(ZodiacSign::Unknown, None)), 1.15);
    }

    #[test]
    fn test_from_config() {
        let config = ModulationConfig::default()
            .with_elemental(0.5, 2.0)
            .with_lunar(0.25, 4.0)
            .with_solar(0.1, 10.0);

        let elemental = ElementalModifier::from_config(&config);
        let lunar = LunarModifier::from_config(&config);
        let solar = SolarModifier::from_config(&config);

        assert_eq!((elemental.compatible, elemental.incompatible), (0.5, 2.0));
        assert_eq!((lunar.full_moon, lunar.other), (0.25, 4.0));
        assert_eq!((solar.aries, solar.other), (0.1, 10.0));
        assert_eq!(elemental.name(), "elemental");
        assert_eq!(lunar.name(), "lunar");
        assert_eq!(solar.name(), "solar");
    }
}
