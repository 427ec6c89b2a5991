use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// An ordered pile of unique cards. Dealt cards are removed, never marked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// The 52 standard cards in canonical (unshuffled) order.
    pub fn new() -> Self {
        Self { cards: full_deck() }
    }

    /// A pre-arranged deck; the first card is the top of the deck.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, GameError> {
        let mut seen = HashSet::with_capacity(cards.len());
        for &c in &cards {
            if !seen.insert(c) {
                return Err(GameError::DuplicateCard(c));
            }
        }
        Ok(Self { cards })
    }

    pub fn shuffled_with_seed(seed: u64) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let mut deck = Self::new();
        deck.shuffle_with(&mut rng);
        deck
    }

    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes the top `n` cards and returns them; the deck keeps the remainder.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        if n > self.cards.len() {
            return Err(GameError::DeckExhausted {
                requested: n,
                remaining: self.cards.len(),
            });
        }
        Ok(self.cards.drain(..n).collect())
    }

    pub fn burn(&mut self) -> Result<(), GameError> {
        self.deal(1).map(|_| ())
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
