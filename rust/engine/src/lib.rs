//! # holdem-engine: Texas Hold'em Core
//!
//! Multi-player Texas Hold'em: dealing, betting-round progression and
//! best-hand evaluation. The engine is synchronous and single-threaded; a host
//! that runs many tables gives each table its own thread or actor.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and text parsing
//! - [`deck`] - Deck construction, injected-RNG shuffling and dealing
//! - [`hand`] - Hand evaluation and comparison
//! - [`player`] - Players and the shared handle used by tables and games
//! - [`game`] - The betting state machine for one hand
//! - [`table`] - Seats, blinds and dealer rotation; starts games
//! - [`errors`] - Error types for game operations and evaluation
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_engine::cards::parse_cards;
//! use holdem_engine::hand::{compare_hands, evaluate, Category, Comparison};
//!
//! let kings = evaluate(&parse_cards("Kc Ks 5s 7s Jd").unwrap()).unwrap();
//! let twos = evaluate(&parse_cards("2c 2s 5s 7s Jd").unwrap()).unwrap();
//! assert_eq!(kings.category, Category::OnePair);
//! assert_eq!(compare_hands(&kings, &twos).unwrap(), Comparison::FirstWins);
//! ```
//!
//! ## Playing a Hand
//!
//! ```rust
//! use holdem_engine::game::Round;
//! use holdem_engine::player::Player;
//! use holdem_engine::table::Table;
//!
//! let mut table = Table::with_seed(20, 50, 7).unwrap();
//! for name in ["ann", "bob", "cat"] {
//!     table.add_player(Player::shared(name, 1500)).unwrap();
//! }
//! let mut game = table.start_game().unwrap();
//! game.call().unwrap();
//! game.call().unwrap();
//! game.check().unwrap();
//! assert_eq!(game.round(), Round::Flop);
//! assert_eq!(game.community_cards().len(), 3);
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod game;
pub mod hand;
pub mod player;
pub mod table;
