use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Chip amounts. Signed so a balance can be inspected after arithmetic,
/// but no validated action ever drives a balance below zero.
pub type Chips = i64;

/// Handle shared by the table (across hands) and the running game (within a hand).
pub type PlayerRef = Rc<RefCell<Player>>;

/// A seated person and the chips they carry from hand to hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    money: Chips,
}

impl Player {
    pub fn new(name: impl Into<String>, money: Chips) -> Self {
        Self {
            name: name.into(),
            money,
        }
    }

    pub fn shared(name: impl Into<String>, money: Chips) -> PlayerRef {
        Rc::new(RefCell::new(Self::new(name, money)))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn money(&self) -> Chips {
        self.money
    }

    pub fn credit(&mut self, amount: Chips) {
        self.money += amount;
    }

    pub fn debit(&mut self, amount: Chips) {
        self.money -= amount;
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.name, self.money)
    }
}
