//! # Play Command
//!
//! Plays one scripted hand at a freshly seated table.
//!
//! Blinds and starting money come from the resolved configuration. The
//! script is a comma-separated list of actions applied in turn order, for
//! example `"call, call, check"`. After every accepted action the public
//! game view is printed as one JSON line, so the output can be piped into
//! other tools. The first rejected action stops the hand with an error.

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_action, format_board};
use crate::ui;
use crate::validation::parse_action_script;
use holdem_engine::game::Game;
use holdem_engine::player::Player;
use holdem_engine::table::Table;
use std::io::Write;

pub struct PlayOptions<'a> {
    pub players: usize,
    pub seed: Option<u64>,
    pub actions: &'a str,
    pub reveal: bool,
}

pub fn handle_play_command(
    opts: PlayOptions<'_>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let script = parse_action_script(opts.actions).map_err(CliError::InvalidInput)?;
    let cfg = config::load()?;
    let seed = opts.seed.or(cfg.seed).unwrap_or_else(rand::random);

    let mut table = Table::with_seed(cfg.small_blind, cfg.big_blind, seed)?;
    for i in 1..=opts.players {
        table.add_player(Player::shared(format!("P{}", i), cfg.starting_money))?;
    }
    let mut game = table.start_game()?;

    writeln!(
        out,
        "play: players={} seed={} blinds={}/{}",
        opts.players, seed, cfg.small_blind, cfg.big_blind
    )?;
    if opts.reveal {
        write_hole_cards(&game, out)?;
    }
    write_view(&game, out)?;

    if script.is_empty() {
        ui::display_warning(err, "no actions given; showing the opening state only")?;
    }
    for action in script {
        let actor = game
            .current_player()
            .map(|p| p.player().borrow().name().to_string())
            .unwrap_or_default();
        game.apply(action)?;
        writeln!(out, "{}: {}", actor, format_action(&action))?;
        write_view(&game, out)?;
    }

    match game.winner() {
        Some(outcome) => {
            let names: Vec<String> = outcome
                .winners
                .iter()
                .map(|&seat| game.players()[seat].player().borrow().name().to_string())
                .collect();
            let hand = outcome
                .winning_hand
                .as_ref()
                .map_or_else(|| "uncontested".to_string(), |h| h.to_string());
            writeln!(
                out,
                "Winner: {} (pot {}, {})",
                names.join(", "),
                outcome.pot,
                hand
            )?;
        }
        None => {
            let waiting = game
                .current_player()
                .map(|p| p.player().borrow().name().to_string())
                .unwrap_or_default();
            writeln!(out, "Round: {}, waiting on {}", game.round(), waiting)?;
        }
    }
    Ok(())
}

fn write_hole_cards(game: &Game, out: &mut dyn Write) -> Result<(), CliError> {
    for (seat, p) in game.players().iter().enumerate() {
        if let Some(hole) = game.hole_cards(seat) {
            writeln!(
                out,
                "Hole {}: {}",
                p.player().borrow().name(),
                format_board(&hole)
            )?;
        }
    }
    Ok(())
}

fn write_view(game: &Game, out: &mut dyn Write) -> Result<(), CliError> {
    let line = serde_json::to_string(&game.visible_state()).map_err(std::io::Error::other)?;
    writeln!(out, "{}", line)?;
    Ok(())
}
