use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "holdem", version, about = "Texas Hold'em engine driver")]
pub struct HoldemCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Shuffle a fresh deck and deal cards from the top
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 5)]
        count: usize,
    },
    /// Evaluate a hand of up to seven cards, optionally against another
    Eval {
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
        #[arg(long, num_args = 1..)]
        against: Option<Vec<String>>,
    },
    /// Play one scripted hand, printing the public state after every action
    Play {
        #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(2..=10))]
        players: u8,
        #[arg(long)]
        seed: Option<u64>,
        /// Comma-separated actions, e.g. "call, raise 100, fold"
        #[arg(long, default_value = "")]
        actions: String,
        /// Print every seat's hole cards before play
        #[arg(long)]
        reveal: bool,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
