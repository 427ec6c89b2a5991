//! Deal command: shuffle a fresh deck and show the top cards.

use crate::error::CliError;
use crate::formatters::format_board;
use holdem_engine::deck::Deck;
use holdem_engine::hand::best_hand;
use std::io::Write;

/// Shuffles a fresh deck (seeded when `seed` is given), deals `count` cards
/// and prints them with the number of cards left. Hands of one to seven
/// cards are also evaluated.
pub fn handle_deal_command(
    seed: Option<u64>,
    count: usize,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if count == 0 {
        return Err(CliError::InvalidInput("count must be >= 1".to_string()));
    }
    let seed = seed.unwrap_or_else(rand::random);
    let mut deck = Deck::shuffled_with_seed(seed);
    let hand = deck.deal(count)?;

    writeln!(out, "Seed: {}", seed)?;
    writeln!(out, "Hand: {}", format_board(&hand))?;
    if hand.len() <= 7 {
        writeln!(out, "Best: {}", best_hand(&hand)?)?;
    }
    writeln!(out, "Remaining: {}", deck.len())?;
    Ok(())
}
