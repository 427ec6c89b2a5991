use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::{best_hand, compare_hands, Comparison, HandStrength};
use crate::player::{Chips, PlayerRef};

/// Betting round of a hand. Rounds only move forward.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Round {
    Preflop,
    Flop,
    Turn,
    River,
    Finished,
}

impl Round {
    /// The round that follows this one. `Finished` has no successor.
    pub fn next(self) -> Result<Round, GameError> {
        match self {
            Round::Preflop => Ok(Round::Flop),
            Round::Flop => Ok(Round::Turn),
            Round::Turn => Ok(Round::River),
            Round::River => Ok(Round::Finished),
            Round::Finished => Err(GameError::GameFinished),
        }
    }

    /// Community cards revealed when the round begins.
    pub fn cards_on_entry(self) -> usize {
        match self {
            Round::Flop => 3,
            Round::Turn | Round::River => 1,
            Round::Preflop | Round::Finished => 0,
        }
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Round::Preflop => "PREFLOP",
            Round::Flop => "FLOP",
            Round::Turn => "TURN",
            Round::River => "RIVER",
            Round::Finished => "FINISHED",
        };
        f.write_str(name)
    }
}

/// What a player may do, without an amount attached.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Fold,
    Check,
    Call,
    Raise,
}

/// A player decision submitted through [`Game::apply`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Action {
    Fold,
    Check,
    Call,
    /// Raise size relative to the bet in front of the player.
    Raise(Chips),
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Fold => ActionKind::Fold,
            Action::Check => ActionKind::Check,
            Action::Call => ActionKind::Call,
            Action::Raise(_) => ActionKind::Raise,
        }
    }
}

/// A seat for the duration of one hand.
#[derive(Debug, Clone)]
pub struct TexasPlayer {
    player: PlayerRef,
    hole: [Card; 2],
    folded: bool,
    acted: bool,
    contribution: Chips,
}

impl TexasPlayer {
    pub fn player(&self) -> &PlayerRef {
        &self.player
    }

    pub fn hole_cards(&self) -> [Card; 2] {
        self.hole
    }

    pub fn folded(&self) -> bool {
        self.folded
    }

    pub fn acted(&self) -> bool {
        self.acted
    }

    pub fn contribution(&self) -> Chips {
        self.contribution
    }

    fn view(&self) -> PlayerView {
        let p = self.player.borrow();
        PlayerView {
            name: p.name().to_string(),
            money: p.money(),
            folded: self.folded,
            contribution: self.contribution,
            cards: Vec::new(),
        }
    }
}

/// How a finished hand was settled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    /// Winning seat indexes, in order starting left of the dealer.
    pub winners: Vec<usize>,
    pub pot: Chips,
    /// `None` when everyone else folded.
    pub winning_hand: Option<HandStrength>,
}

/// Public information about one seat. Hole cards are never included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerView {
    pub name: String,
    pub money: Chips,
    pub folded: bool,
    pub contribution: Chips,
    pub cards: Vec<Card>,
}

/// What every seat at the table is allowed to see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    pub players: Vec<PlayerView>,
    pub active: Option<PlayerView>,
    pub dealer: PlayerView,
    pub round: Round,
    pub community: Vec<Card>,
    pub pot: Chips,
    pub last_bet: Chips,
}

impl GameView {
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

/// One hand of Texas Hold'em, from blinds to settlement.
///
/// Seats are ordered for the hand: with three or more players the first seat
/// sits left of the dealer and the dealer is last. Heads-up, the dealer is
/// seat 0 and posts the small blind.
///
/// Every action validates fully before mutating anything, so a rejected
/// action leaves the game exactly as it was.
#[derive(Debug)]
pub struct Game {
    players: Vec<TexasPlayer>,
    dealer_seat: usize,
    last_bet: Chips,
    deck: Deck,
    active: usize,
    community: Vec<Card>,
    round: Round,
    outcome: Option<Outcome>,
}

impl Game {
    /// Deals hole cards and posts blinds. Seat 0 posts the small blind, seat 1 the big blind.
    pub(crate) fn start(
        seats: Vec<PlayerRef>,
        dealer_seat: usize,
        small_blind: Chips,
        big_blind: Chips,
        mut deck: Deck,
    ) -> Result<Self, GameError> {
        let n = seats.len();
        if n < 2 {
            return Err(GameError::NotEnoughPlayers { seats: n });
        }
        // hole cards, three burns and five community cards
        let needed = 2 * n + 8;
        if deck.len() < needed {
            return Err(GameError::DeckExhausted {
                requested: needed,
                remaining: deck.len(),
            });
        }
        for (seat, blind) in [(0, small_blind), (1, big_blind)] {
            let available = seats[seat].borrow().money();
            if available < blind {
                return Err(GameError::InsufficientChips {
                    needed: blind,
                    available,
                });
            }
        }

        let mut players = Vec::with_capacity(n);
        for player in seats {
            let dealt = deck.deal(2)?;
            players.push(TexasPlayer {
                player,
                hole: [dealt[0], dealt[1]],
                folded: false,
                acted: false,
                contribution: 0,
            });
        }

        let mut game = Self {
            players,
            dealer_seat,
            last_bet: big_blind,
            deck,
            active: 2 % n,
            community: Vec::with_capacity(5),
            round: Round::Preflop,
            outcome: None,
        };
        game.post(0, small_blind);
        game.post(1, big_blind);
        info!(
            seats = n,
            dealer = dealer_seat,
            small_blind,
            big_blind,
            "game started"
        );
        Ok(game)
    }

    pub fn round(&self) -> Round {
        self.round
    }

    pub fn last_bet(&self) -> Chips {
        self.last_bet
    }

    pub fn players(&self) -> &[TexasPlayer] {
        &self.players
    }

    pub fn dealer_seat(&self) -> usize {
        self.dealer_seat
    }

    /// Seat index of the player to act, `None` once the hand is over.
    pub fn active_seat(&self) -> Option<usize> {
        (self.round != Round::Finished).then_some(self.active)
    }

    pub fn current_player(&self) -> Option<&TexasPlayer> {
        self.active_seat().map(|seat| &self.players[seat])
    }

    pub fn community_cards(&self) -> &[Card] {
        &self.community
    }

    /// Private hole cards of a seat, for the hosting layer to route to its owner.
    pub fn hole_cards(&self, seat: usize) -> Option<[Card; 2]> {
        self.players.get(seat).map(|p| p.hole)
    }

    pub fn remaining_deck(&self) -> usize {
        self.deck.len()
    }

    pub fn pot(&self) -> Chips {
        self.players.iter().map(|p| p.contribution).sum()
    }

    pub fn winner(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    pub fn available_actions(&self) -> Vec<ActionKind> {
        if self.round == Round::Finished {
            return Vec::new();
        }
        match self.owed() {
            Ok(0) => vec![ActionKind::Fold, ActionKind::Check, ActionKind::Raise],
            Ok(_) => vec![ActionKind::Fold, ActionKind::Call, ActionKind::Raise],
            Err(_) => Vec::new(),
        }
    }

    pub fn visible_state(&self) -> GameView {
        GameView {
            players: self.players.iter().map(TexasPlayer::view).collect(),
            active: self.current_player().map(TexasPlayer::view),
            dealer: self.players[self.dealer_seat].view(),
            round: self.round,
            community: self.community.clone(),
            pot: self.pot(),
            last_bet: self.last_bet,
        }
    }

    pub fn apply(&mut self, action: Action) -> Result<(), GameError> {
        match action {
            Action::Fold => self.fold(),
            Action::Check => self.check(),
            Action::Call => self.call(),
            Action::Raise(amount) => self.raise(amount),
        }
    }

    pub fn check(&mut self) -> Result<(), GameError> {
        self.ensure_available(ActionKind::Check)?;
        debug!(seat = self.active, "check");
        self.next_player()
    }

    pub fn call(&mut self) -> Result<(), GameError> {
        self.ensure_available(ActionKind::Call)?;
        let owed = self.owed()?;
        self.ensure_affordable(owed)?;
        self.post(self.active, owed);
        debug!(
            seat = self.active,
            amount = owed,
            contribution = self.players[self.active].contribution,
            "call"
        );
        self.next_player()
    }

    pub fn fold(&mut self) -> Result<(), GameError> {
        self.ensure_available(ActionKind::Fold)?;
        let seat = self.active;
        self.players[seat].folded = true;
        self.players[seat].acted = true;
        debug!(seat, "fold");

        let remaining: Vec<usize> = (0..self.players.len())
            .filter(|&s| !self.players[s].folded)
            .collect();
        if remaining.len() == 1 {
            return self.settle(remaining, None);
        }
        self.next_player()
    }

    /// Raises by `amount` on top of matching the bet in front of the player.
    ///
    /// `amount` must be at least the previous raise size. The chips moved are
    /// the outstanding difference to the previous player plus `amount`, so
    /// raising 50 into a raise of 50 costs 100.
    pub fn raise(&mut self, amount: Chips) -> Result<(), GameError> {
        if self.round == Round::Finished {
            return Err(self.reject(GameError::GameFinished));
        }
        if amount < self.last_bet {
            return Err(self.reject(GameError::InvalidAmount {
                amount,
                minimum: self.last_bet,
            }));
        }
        let owed = self.owed()?;
        let movement = match owed.checked_add(amount) {
            Some(movement) => movement,
            None => {
                let available = self.players[self.active].player.borrow().money();
                return Err(self.reject(GameError::InsufficientChips {
                    needed: Chips::MAX,
                    available,
                }));
            }
        };
        self.ensure_affordable(movement)?;

        self.last_bet = amount;
        self.post(self.active, movement);
        debug!(
            seat = self.active,
            amount,
            moved = movement,
            contribution = self.players[self.active].contribution,
            "raise"
        );
        self.next_player()
    }

    fn ensure_available(&self, kind: ActionKind) -> Result<(), GameError> {
        if self.round == Round::Finished {
            return Err(self.reject(GameError::GameFinished));
        }
        // invariant errors win over IllegalAction
        self.owed()?;
        let available = self.available_actions();
        if available.contains(&kind) {
            Ok(())
        } else {
            Err(self.reject(GameError::IllegalAction {
                action: kind,
                available,
            }))
        }
    }

    fn ensure_affordable(&self, amount: Chips) -> Result<(), GameError> {
        let available = self.players[self.active].player.borrow().money();
        if available <= 0 || amount > available {
            return Err(self.reject(GameError::InsufficientChips {
                needed: amount,
                available,
            }));
        }
        Ok(())
    }

    fn reject(&self, err: GameError) -> GameError {
        warn!(seat = self.active, round = %self.round, error = %err, "action rejected");
        err
    }

    fn post(&mut self, seat: usize, amount: Chips) {
        let p = &mut self.players[seat];
        p.player.borrow_mut().debit(amount);
        p.contribution += amount;
    }

    // Chips the active player must add to match the nearest non-folded player before them.
    fn owed(&self) -> Result<Chips, GameError> {
        let n = self.players.len();
        let current = self.players[self.active].contribution;
        let previous = (1..n)
            .map(|i| &self.players[(self.active + n - i) % n])
            .find(|p| !p.folded)
            .map(|p| p.contribution)
            .ok_or_else(|| invariant("no active player before the current seat"))?;
        if previous < current {
            return Err(invariant(&format!(
                "previous contribution {previous} is below current {current}"
            )));
        }
        Ok(previous - current)
    }

    fn next_active_after(&self, seat: usize) -> Result<usize, GameError> {
        let n = self.players.len();
        (1..=n)
            .map(|i| (seat + i) % n)
            .find(|&s| !self.players[s].folded)
            .ok_or_else(|| invariant("every player has folded"))
    }

    fn round_complete(&self) -> bool {
        let active: Vec<&TexasPlayer> = self.players.iter().filter(|p| !p.folded).collect();
        let contributions: BTreeSet<Chips> = active.iter().map(|p| p.contribution).collect();
        active.iter().all(|p| p.acted) && contributions.len() <= 1
    }

    fn next_player(&mut self) -> Result<(), GameError> {
        self.players[self.active].acted = true;
        self.active = self.next_active_after(self.active)?;
        if !self.round_complete() {
            return Ok(());
        }
        if self.round == Round::River {
            return self.showdown();
        }
        self.finish_round()
    }

    fn finish_round(&mut self) -> Result<(), GameError> {
        let next = self.round.next()?;
        self.deck.burn()?;
        let revealed = self.deck.deal(next.cards_on_entry())?;
        self.community.extend(revealed);
        for p in self.players.iter_mut().filter(|p| !p.folded) {
            p.acted = false;
        }
        self.round = next;
        self.active = self.next_active_after(self.dealer_seat)?;
        info!(
            round = %next,
            community = ?self.community,
            pot = self.pot(),
            "round started"
        );
        Ok(())
    }

    fn seats_from_dealer_left(&self) -> impl Iterator<Item = usize> + '_ {
        let n = self.players.len();
        (1..=n).map(move |i| (self.dealer_seat + i) % n)
    }

    fn showdown(&mut self) -> Result<(), GameError> {
        let mut best = HandStrength::lowest();
        let mut winners = Vec::new();
        for seat in self.seats_from_dealer_left() {
            let p = &self.players[seat];
            if p.folded {
                continue;
            }
            let mut cards = p.hole.to_vec();
            cards.extend_from_slice(&self.community);
            let strength = best_hand(&cards)?;
            debug!(seat, hand = %strength, "showdown hand");
            match compare_hands(&strength, &best)? {
                Comparison::FirstWins => {
                    best = strength;
                    winners = vec![seat];
                }
                Comparison::Tie => winners.push(seat),
                Comparison::SecondWins => {}
            }
        }
        if winners.is_empty() {
            return Err(invariant("showdown without active players"));
        }
        self.settle(winners, Some(best))
    }

    // Pays the pot to the winners; odd chips go to the earliest winners after the dealer.
    fn settle(
        &mut self,
        winners: Vec<usize>,
        winning_hand: Option<HandStrength>,
    ) -> Result<(), GameError> {
        let pot = self.pot();
        let count = winners.len() as Chips;
        let share = pot / count;
        let remainder = pot % count;
        for p in &mut self.players {
            p.contribution = 0;
        }
        for (i, &seat) in winners.iter().enumerate() {
            let extra = if (i as Chips) < remainder { 1 } else { 0 };
            self.players[seat].player.borrow_mut().credit(share + extra);
        }
        self.round = Round::Finished;
        info!(?winners, pot, hand = ?winning_hand.as_ref().map(|h| h.to_string()), "game finished");
        self.outcome = Some(Outcome {
            winners,
            pot,
            winning_hand,
        });
        Ok(())
    }
}

fn invariant(msg: &str) -> GameError {
    error!(msg, "betting engine invariant violated");
    GameError::InvariantViolation(msg.to_string())
}
