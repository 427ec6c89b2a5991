//! Hand evaluation command.
//!
//! Classifies one hand of up to seven cards and optionally compares it
//! against a second hand.

use crate::error::CliError;
use crate::formatters::format_board;
use holdem_engine::cards::{parse_cards, Card};
use holdem_engine::hand::{best_hand, compare_hands, Comparison, HandStrength};
use std::io::Write;

pub fn handle_eval_command(
    cards: &[String],
    against: Option<&[String]>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let (hand, strength) = evaluate_words(cards)?;
    write_strength(out, "Hand", &hand, &strength)?;

    if let Some(other) = against {
        let (other_hand, other_strength) = evaluate_words(other)?;
        write_strength(out, "Against", &other_hand, &other_strength)?;
        let verdict = match compare_hands(&strength, &other_strength)? {
            Comparison::FirstWins => "first hand wins",
            Comparison::Tie => "tie",
            Comparison::SecondWins => "second hand wins",
        };
        writeln!(out, "Result: {}", verdict)?;
    }
    Ok(())
}

// Accepts cards split across arguments or packed into one ("As Kd", "As,Kd").
fn evaluate_words(words: &[String]) -> Result<(Vec<Card>, HandStrength), CliError> {
    let cards = parse_cards(&words.join(" "))?;
    if cards.is_empty() {
        return Err(CliError::InvalidInput("no cards given".to_string()));
    }
    let strength = best_hand(&cards)?;
    Ok((cards, strength))
}

fn write_strength(
    out: &mut dyn Write,
    label: &str,
    cards: &[Card],
    strength: &HandStrength,
) -> Result<(), CliError> {
    writeln!(out, "{}: {} => {}", label, format_board(cards), strength)?;
    Ok(())
}
