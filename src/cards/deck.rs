//! Deck: the fixed, shuffled board order.
//!
//! A deck is shuffled exactly once, when it is built. Its order is the
//! render order and never changes during play.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::card::{Card, CardKey};
use crate::core::entity::Entity;
use crate::core::rng::GameRng;

/// Position of a card in its deck.
pub type CardIndex = usize;

/// Ordered set of paired cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Duplicate every entity into a pair and shuffle the result.
    ///
    /// `rng` supplies both the card key tokens and the shuffle.
    pub fn from_entities(entities: &[Entity], rng: &mut GameRng) -> Self {
        let mut cards: Vec<Card> = entities.iter().flat_map(|e| Card::pair(e, rng)).collect();
        rng.shuffle(&mut cards);
        Self { cards }
    }

    /// Wrap cards in their current order, without shuffling.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is the deck empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of pairs in the deck.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    /// All cards in board order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Get a card by position.
    #[must_use]
    pub fn get(&self, index: CardIndex) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Get a mutable card by position.
    pub fn get_mut(&mut self, index: CardIndex) -> Option<&mut Card> {
        self.cards.get_mut(index)
    }

    /// Iterate over cards in board order.
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Map each key to its board position.
    #[must_use]
    pub fn index_by_key(&self) -> FxHashMap<CardKey, CardIndex> {
        self.cards.iter().enumerate().map(|(i, c)| (c.key.clone(), i)).collect()
    }

    /// Image URLs of every card face, in board order (with duplicates).
    pub fn images(&self) -> impl Iterator<Item = &str> {
        self.cards.iter().map(|c| c.image.as_str())
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
