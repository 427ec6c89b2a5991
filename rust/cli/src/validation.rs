//! Parsing of user-supplied action scripts.

use holdem_engine::game::Action;
use holdem_engine::player::Chips;

/// Parses one action: `fold`, `check`, `call` or `raise <amount>`.
///
/// Short forms `f`, `x`, `c` and `r <amount>` are accepted too.
pub fn parse_player_action(input: &str) -> Result<Action, String> {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some(&verb) = parts.first() else {
        return Err("Empty action".to_string());
    };

    let action = match verb {
        "fold" | "f" => Action::Fold,
        "check" | "x" => Action::Check,
        "call" | "c" => Action::Call,
        "raise" | "r" => {
            let Some(amount) = parts.get(1) else {
                return Err("Raise requires an amount (e.g., 'raise 50')".to_string());
            };
            match amount.parse::<Chips>() {
                Ok(amount) if amount > 0 => Action::Raise(amount),
                Ok(_) => return Err("Raise amount must be positive".to_string()),
                Err(_) => return Err(format!("Invalid raise amount '{}'", amount)),
            }
        }
        other => {
            return Err(format!(
                "Unrecognized action '{}'. Valid actions: fold, check, call, raise <amount>",
                other
            ));
        }
    };
    let words = if matches!(action, Action::Raise(_)) { 2 } else { 1 };
    if parts.len() > words {
        return Err(format!("Unexpected text after action in '{}'", input));
    }
    Ok(action)
}

/// Parses a comma-separated action script such as `"call, raise 100, fold"`.
pub fn parse_action_script(script: &str) -> Result<Vec<Action>, String> {
    script
        .split(',')
        .filter(|s| !s.trim().is_empty())
        .map(parse_player_action)
        .collect()
}
