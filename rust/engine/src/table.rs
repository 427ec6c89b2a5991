use std::rc::Rc;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::info;

use crate::deck::Deck;
use crate::errors::GameError;
use crate::game::Game;
use crate::player::{Chips, PlayerRef};

/// Seats, blinds and the dealer button, carried from one hand to the next.
///
/// The random source shuffles a fresh deck for every game; seed it for
/// reproducible tables.
///
/// # Examples
///
/// ```
/// use holdem_engine::game::Round;
/// use holdem_engine::player::Player;
/// use holdem_engine::table::Table;
///
/// let mut table = Table::with_seed(20, 50, 42).unwrap();
/// table.add_player(Player::shared("ann", 1500)).unwrap();
/// table.add_player(Player::shared("bob", 1500)).unwrap();
/// table.add_player(Player::shared("cat", 1500)).unwrap();
///
/// let game = table.start_game().unwrap();
/// assert_eq!(game.round(), Round::Preflop);
/// assert_eq!(game.pot(), 70);
/// ```
#[derive(Debug)]
pub struct Table<R: Rng = ChaCha20Rng> {
    seats: Vec<PlayerRef>,
    small_blind: Chips,
    big_blind: Chips,
    dealer_index: Option<usize>,
    rng: R,
}

impl Table {
    pub fn new(small_blind: Chips, big_blind: Chips) -> Result<Self, GameError> {
        Self::with_seed(small_blind, big_blind, rand::random())
    }

    pub fn with_seed(small_blind: Chips, big_blind: Chips, seed: u64) -> Result<Self, GameError> {
        Table::with_rng(small_blind, big_blind, ChaCha20Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Table<R> {
    pub fn with_rng(small_blind: Chips, big_blind: Chips, rng: R) -> Result<Self, GameError> {
        if small_blind <= 0 || big_blind < small_blind {
            return Err(GameError::InvalidBlinds {
                small: small_blind,
                big: big_blind,
            });
        }
        Ok(Self {
            seats: Vec::new(),
            small_blind,
            big_blind,
            dealer_index: None,
            rng,
        })
    }

    pub fn add_player(&mut self, player: PlayerRef) -> Result<(), GameError> {
        if self.seats.iter().any(|p| Rc::ptr_eq(p, &player)) {
            return Err(GameError::DuplicatePlayer {
                name: player.borrow().name().to_string(),
            });
        }
        self.seats.push(player);
        Ok(())
    }

    pub fn seats(&self) -> &[PlayerRef] {
        &self.seats
    }

    pub fn small_blind(&self) -> Chips {
        self.small_blind
    }

    pub fn big_blind(&self) -> Chips {
        self.big_blind
    }

    /// Seat of the dealer button, `None` before the first game.
    pub fn dealer_index(&self) -> Option<usize> {
        self.dealer_index
    }

    /// Moves the button, shuffles a fresh deck and starts a new hand.
    pub fn start_game(&mut self) -> Result<Game, GameError> {
        self.ensure_enough_players()?;
        let mut deck = Deck::new();
        deck.shuffle_with(&mut self.rng);
        self.start_game_with_deck(deck)
    }

    /// Like [`Table::start_game`], dealing from a caller-supplied deck.
    ///
    /// The button only moves when the game actually starts.
    pub fn start_game_with_deck(&mut self, deck: Deck) -> Result<Game, GameError> {
        self.ensure_enough_players()?;
        let n = self.seats.len();
        let dealer = self.dealer_index.map_or(0, |d| (d + 1) % n);
        let (ordered, dealer_seat) = seating_order(&self.seats, dealer);
        let game = Game::start(ordered, dealer_seat, self.small_blind, self.big_blind, deck)?;
        self.dealer_index = Some(dealer);
        info!(dealer, "button moved");
        Ok(game)
    }

    fn ensure_enough_players(&self) -> Result<(), GameError> {
        if self.seats.len() < 2 {
            return Err(GameError::NotEnoughPlayers {
                seats: self.seats.len(),
            });
        }
        Ok(())
    }
}

// Seats for one hand and the dealer's position among them. Heads-up the
// dealer takes the small blind and sits first; otherwise play starts left
// of the dealer and the dealer sits last.
fn seating_order(seats: &[PlayerRef], dealer: usize) -> (Vec<PlayerRef>, usize) {
    let n = seats.len();
    if n == 2 {
        let ordered = vec![Rc::clone(&seats[dealer]), Rc::clone(&seats[1 - dealer])];
        return (ordered, 0);
    }
    let ordered = (1..=n).map(|i| Rc::clone(&seats[(dealer + i) % n])).collect();
    (ordered, n - 1)
}
