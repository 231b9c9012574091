//! Classical elements and the compatibility table used by the elemental pass.
//!
//! Cards carry at most one element. Anything that is not Fire, Water, Air or
//! Earth (including an empty string) is treated as unknown and has no entry
//! in the table.

use std::fmt;
use std::str::FromStr;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// One of the four classical elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Water,
    Air,
    Earth,
}

impl Element {
    /// All elements in table order.
    pub const ALL: [Element; 4] = [Element::Fire, Element::Water, Element::Air, Element::Earth];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Element::Fire => "Fire",
            Element::Water => "Water",
            Element::Air => "Air",
            Element::Earth => "Earth",
        }
    }

    /// Parse element text from a card record.
    ///
    /// Case-insensitive, surrounding whitespace ignored. Returns `None` for
    /// empty or unrecognized text.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        text.parse().ok()
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Element {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Element::ALL
            .into_iter()
            .find(|e| e.name().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}

/// Maps each element to the elements it harmonizes with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityTable {
    entries: FxHashMap<Element, SmallVec<[Element; 2]>>,
}

impl Default for CompatibilityTable {
    /// Fire and Air harmonize, as do Water and Earth. Every element
    /// harmonizes with itself.
    fn default() -> Self {
        let mut table = Self::empty();
        table.set(Element::Fire, &[Element::Air, Element::Fire]);
        table.set(Element::Water, &[Element::Earth, Element::Water]);
        table.set(Element::Air, &[Element::Fire, Element::Air]);
        table.set(Element::Earth, &[Element::Water, Element::Earth]);
        table
    }
}

impl CompatibilityTable {
    /// A table with no entries; nothing is compatible.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }

    /// Replace the compatible set for `element`.
    pub fn set(&mut self, element: Element, compatible: &[Element]) {
        self.entries.insert(element, SmallVec::from_slice(compatible));
    }

    /// Elements `element` harmonizes with. Empty if it has no entry.
    #[must_use]
    pub fn compatible_with(&self, element: Element) -> &[Element] {
        self.entries.get(&element).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Whether an edge `from -> to` is elementally compatible.
    ///
    /// Looks up `from`'s set and checks for `to`. An unknown element on
    /// either side is never compatible.
    #[must_use]
    pub fn is_compatible(&self, from: Option<Element>, to: Option<Element>) -> bool {
        match (from, to) {
            (Some(from), Some(to)) => self.compatible_with(from).contains(&to),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Element::parse("Fire"), Some(Element::Fire));
        assert_eq!(Element::parse("water"), Some(Element::Water));
        assert_eq!(Element::parse("  AIR "), Some(Element::Air));
        assert_eq!(Element::parse("Earth"), Some(Element::Earth));
        assert_eq!(Element::parse(""), None);
        assert_eq!(Element::parse("Aether"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Element::Water.to_string(), "Water");
    }

    #[test]
    fn test_default_table() {
        let table = CompatibilityTable::default();
        let fire = Some(Element::Fire);
        let water = Some(Element::Water);
        let air = Some(Element::Air);
        let earth = Some(Element::Earth);

        assert!(table.is_compatible(fire, air));
        assert!(table.is_compatible(fire, fire));
        assert!(!table.is_compatible(fire, water));
        assert!(!table.is_compatible(fire, earth));

        assert!(table.is_compatible(water, earth));
        assert!(table.is_compatible(water, water));
        assert!(!table.is_compatible(water, air));

        assert!(table.is_compatible(air, fire));
        assert!(!table.is_compatible(air, water));

        assert!(table.is_compatible(earth, water));
        assert!(!table.is_compatible(earth, fire));
    }

    #[test]
    fn test_unknown_is_incompatible() {
        let table = CompatibilityTable::default();
        assert!(!table.is_compatible(None, Some(Element::Fire)));
        assert!(!table.is_compatible(Some(Element::Fire), None));
        assert!(!table.is_compatible(None, None));
    }

    #[test]
    fn test_empty_table() {
        let table = CompatibilityTable::empty();
        assert!(table.compatible_with(Element::Fire).is_empty());
        assert!(!table.is_compatible(Some(Element::Fire), Some(Element::Fire)));
    }

    #[test]
    fn test_custom_entry() {
        let mut table = CompatibilityTable::default();
        table.set(Element::Fire, &[Element::Water]);
        assert!(table.is_compatible(Some(Element::Fire), Some(Element::Water)));
        assert!(!table.is_compatible(Some(Element::Fire), Some(Element::Air)));
    }
}
