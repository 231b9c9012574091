//! Card selection and shuffling.
//!
//! With the default `DrawPolicy::WholeDeck` every card of the deck is taken
//! and the game mode's card count is left to the caller. Truncation happens
//! only when `DrawPolicy::TruncateToMode` is configured.

use tracing::debug;

use crate::cards::{Card, Deck, GameMode};
use crate::core::{DrawPolicy, ReadingRng};

/// Picks and shuffles the cards of a reading.
///
/// ## Example
///
/// ```
/// use arcana_graph::cards::{Card, CardIndex, Deck};
/// use arcana_graph::core::ReadingRng;
/// use arcana_graph::draw::DrawSelector;
///
/// let deck = Deck::new("Test").with_cards(
///     (0..5).map(|i| Card::new(CardIndex::new(i), format!("Card {}", i), "Major")),
/// );
///
/// let drawn = DrawSelector::default().draw(&deck, None, &mut ReadingRng::new(1));
/// assert_eq!(drawn.len(), 5);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawSelector {
    policy: DrawPolicy,
}

impl DrawSelector {
    /// Create a selector with the given policy.
    #[must_use]
    pub const fn new(policy: DrawPolicy) -> Self {
        Self { policy }
    }

    /// The configured policy.
    #[must_use]
    pub const fn policy(&self) -> DrawPolicy {
        self.policy
    }

    /// Cards entering the reading, in deck order, before shuffling.
    #[must_use]
    pub fn select<'a>(&self, deck: &'a Deck, mode: Option<&GameMode>) -> Vec<&'a Card> {
        let cards = deck.cards();
        let take = match (self.policy, mode) {
            (DrawPolicy::TruncateToMode, Some(mode)) => mode.required_card_count.min(cards.len()),
            _ => cards.len(),
        };
        cards[..take].iter().collect()
    }

    /// Select, then uniformly shuffle.
    ///
    /// An empty deck yields an empty draw.
    #[must_use]
    pub fn draw<'a>(
        &self,
        deck: &'a Deck,
        mode: Option<&GameMode>,
        rng: &mut ReadingRng,
    ) -> Vec<&'a Card> {
        let mut drawn = self.select(deck, mode);
        rng.shuffle(&mut drawn);

        debug!(
            deck = %deck.name,
            drawn = drawn.len(),
            required = mode.map(|m| m.required_card_count),
            seed = rng.seed(),
            "cards drawn"
        );
        drawn
    }
}
