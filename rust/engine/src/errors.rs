use thiserror::Error;

use crate::cards::Card;
use crate::game::ActionKind;
use crate::player::Chips;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Illegal action {action:?}, available: {available:?}")]
    IllegalAction {
        action: ActionKind,
        available: Vec<ActionKind>,
    },
    #[error("Invalid raise amount: {amount}, minimum: {minimum}")]
    InvalidAmount { amount: Chips, minimum: Chips },
    #[error("Insufficient chips: need {needed}, have {available}")]
    InsufficientChips { needed: Chips, available: Chips },
    #[error("Game already finished")]
    GameFinished,
    #[error("At least 2 players are required to start a game (have {seats})")]
    NotEnoughPlayers { seats: usize },
    #[error("Invalid blinds: small {small}, big {big}")]
    InvalidBlinds { small: Chips, big: Chips },
    #[error("Player {name} is already seated")]
    DuplicatePlayer { name: String },
    #[error("Cannot deal {requested} cards, {remaining} remaining")]
    DeckExhausted { requested: usize, remaining: usize },
    #[error("Duplicate card {0}")]
    DuplicateCard(Card),
    #[error(transparent)]
    Eval(#[from] EvalError),
    #[error("Invariant violated: {0}")]
    InvariantViolation(String),
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    #[error("Cannot evaluate {size} cards")]
    InvalidHandSize { size: usize },
    #[error("Card {0} appears more than once")]
    DuplicateCard(Card),
    #[error("Hands built from different card counts cannot be compared")]
    IncomparableHands,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CardParseError {
    #[error("Invalid card: {0:?}")]
    Invalid(String),
}
