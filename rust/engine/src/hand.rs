use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::errors::EvalError;

/// Hand categories from weakest to strongest.
///
/// `Unranked` sits below every real hand and is only produced by
/// [`HandStrength::lowest`], as a seed for best-of searches.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Category {
    Unranked,
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
    RoyalFlush,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Unranked => "Unranked",
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        };
        f.write_str(name)
    }
}

/// Ranks that break ties inside a category, most significant first.
///
/// Only sequences of the same length are comparable.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TieBreak(Vec<Rank>);

impl TieBreak {
    pub fn new(ranks: Vec<Rank>) -> Self {
        Self(ranks)
    }

    pub fn ranks(&self) -> &[Rank] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn compare(&self, other: &TieBreak) -> Option<Ordering> {
        if self.0.len() != other.0.len() {
            return None;
        }
        Some(self.0.cmp(&other.0))
    }
}

/// Result of evaluating a set of cards: a category plus its tie-break ranks.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct HandStrength {
    pub category: Category,
    pub tiebreak: TieBreak,
}

impl HandStrength {
    pub fn new(category: Category, tiebreak: Vec<Rank>) -> Self {
        Self {
            category,
            tiebreak: TieBreak(tiebreak),
        }
    }

    /// A value strictly below every hand `evaluate` can return.
    pub fn lowest() -> Self {
        Self::new(Category::Unranked, Vec::new())
    }
}

impl PartialOrd for HandStrength {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.category.cmp(&other.category) {
            Ordering::Equal => self.tiebreak.compare(&other.tiebreak),
            ord => Some(ord),
        }
    }
}

impl fmt::Display for HandStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category)?;
        if !self.tiebreak.is_empty() {
            let ranks: Vec<String> = self.tiebreak.ranks().iter().map(|r| r.to_string()).collect();
            write!(f, " [{}]", ranks.join(" "))?;
        }
        Ok(())
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Comparison {
    FirstWins,
    Tie,
    SecondWins,
}

/// Classifies 1 to 5 cards. Straights and flushes need exactly five cards.
pub fn evaluate(cards: &[Card]) -> Result<HandStrength, EvalError> {
    if cards.is_empty() || cards.len() > 5 {
        return Err(EvalError::InvalidHandSize { size: cards.len() });
    }
    ensure_unique(cards)?;

    let groups = rank_groups(cards);
    let first = groups[0].1;
    let second = groups.get(1).map_or(0, |g| g.1);
    let five = cards.len() == 5;
    let flush = five && cards.iter().all(|c| c.suit == cards[0].suit);
    let straight = if five { straight_high(&groups) } else { None };
    let ranks = || groups.iter().map(|&(r, _)| r).collect::<Vec<_>>();

    let strength = match (straight, flush) {
        (Some(Rank::Ace), true) => HandStrength::new(Category::RoyalFlush, Vec::new()),
        (Some(high), true) => HandStrength::new(Category::StraightFlush, vec![high]),
        _ if first == 4 => HandStrength::new(Category::FourOfAKind, ranks()),
        _ if first == 3 && second == 2 => HandStrength::new(Category::FullHouse, ranks()),
        (_, true) => HandStrength::new(Category::Flush, ranks()),
        (Some(high), false) => HandStrength::new(Category::Straight, vec![high]),
        _ if first == 3 => HandStrength::new(Category::ThreeOfAKind, ranks()),
        _ if first == 2 && second == 2 => HandStrength::new(Category::TwoPair, ranks()),
        _ if first == 2 => HandStrength::new(Category::OnePair, ranks()),
        _ => HandStrength::new(Category::HighCard, ranks()),
    };
    Ok(strength)
}

/// Best five-card hand out of 5 to 7 cards (hole cards plus board).
/// Fewer than five cards are evaluated as they are.
pub fn best_hand(cards: &[Card]) -> Result<HandStrength, EvalError> {
    if cards.len() > 7 {
        return Err(EvalError::InvalidHandSize { size: cards.len() });
    }
    if cards.len() <= 5 {
        return evaluate(cards);
    }
    ensure_unique(cards)?;

    let mut best = HandStrength::lowest();
    for subset in five_card_subsets(cards) {
        let candidate = evaluate(&subset)?;
        if candidate > best {
            best = candidate;
        }
    }
    Ok(best)
}

pub fn compare_hands(a: &HandStrength, b: &HandStrength) -> Result<Comparison, EvalError> {
    match a.partial_cmp(b) {
        Some(Ordering::Greater) => Ok(Comparison::FirstWins),
        Some(Ordering::Equal) => Ok(Comparison::Tie),
        Some(Ordering::Less) => Ok(Comparison::SecondWins),
        None => Err(EvalError::IncomparableHands),
    }
}

fn ensure_unique(cards: &[Card]) -> Result<(), EvalError> {
    let mut seen = HashSet::with_capacity(cards.len());
    for &c in cards {
        if !seen.insert(c) {
            return Err(EvalError::DuplicateCard(c));
        }
    }
    Ok(())
}

// (rank, count) ordered by count descending, then rank descending.
fn rank_groups(cards: &[Card]) -> Vec<(Rank, u8)> {
    let mut counts = [0u8; 15];
    for c in cards {
        counts[c.rank.value() as usize] += 1;
    }
    let mut groups: Vec<(Rank, u8)> = (2..=14u8)
        .rev()
        .filter(|&v| counts[v as usize] > 0)
        .filter_map(|v| Rank::from_value(v).map(|r| (r, counts[v as usize])))
        .collect();
    groups.sort_by(|a, b| b.1.cmp(&a.1));
    groups
}

fn straight_high(groups: &[(Rank, u8)]) -> Option<Rank> {
    if groups.len() != 5 {
        return None;
    }
    let values: Vec<u8> = groups.iter().map(|&(r, _)| r.value()).collect();
    if values[0] - values[4] == 4 {
        return Some(groups[0].0);
    }
    // A-5-4-3-2: the ace plays low and the five is the top card.
    if values == [14, 5, 4, 3, 2] {
        return Some(Rank::Five);
    }
    None
}

fn five_card_subsets(cards: &[Card]) -> Vec<[Card; 5]> {
    let n = cards.len();
    let mut out = Vec::new();
    for a in 0..n {
        for b in a + 1..n {
            for c in b + 1..n {
                for d in c + 1..n {
                    for e in d + 1..n {
                        out.push([cards[a], cards[b], cards[c], cards[d], cards[e]]);
                    }
                }
            }
        }
    }
    out
}
