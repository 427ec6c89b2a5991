use holdem_engine::cards::{parse_cards, Rank};
use holdem_engine::deck::Deck;
use holdem_engine::game::{Action, Game, Round};
use holdem_engine::hand::{Category, HandStrength};
use holdem_engine::player::{Chips, Player, PlayerRef};
use holdem_engine::table::Table;

// Deals from `layout` in order: two hole cards per seat, then
// burn, flop, burn, turn, burn, river. Returns players indexed by game seat.
fn stacked_game(small: Chips, big: Chips, layout: &str) -> (Game, Vec<PlayerRef>) {
    let mut table = Table::with_seed(small, big, 0).unwrap();
    let players: Vec<PlayerRef> = (0..3)
        .map(|i| Player::shared(format!("p{i}"), 1500))
        .collect();
    let mut arrival = players.clone();
    arrival.rotate_right(1);
    for p in arrival {
        table.add_player(p).unwrap();
    }
    let deck = Deck::from_cards(parse_cards(layout).unwrap()).unwrap();
    let game = table.start_game_with_deck(deck).unwrap();
    (game, players)
}

fn play(game: &mut Game, actions: &[Action]) {
    for &action in actions {
        game.apply(action)
            .unwrap_or_else(|e| panic!("{action:?} failed in {}: {e}", game.round()));
    }
}

fn check_down(game: &mut Game, seats: usize) {
    for round in [Round::Flop, Round::Turn, Round::River] {
        assert_eq!(game.round(), round);
        play(game, &vec![Action::Check; seats]);
    }
}

#[test]
fn best_hand_takes_the_pot_at_showdown() {
    let (mut game, players) = stacked_game(
        20,
        50,
        "Ah Ad  Kc Kd  2c 7d  5c  9s 4h Jc  6c  Qd  8c  3s",
    );
    play(&mut game, &[Action::Call, Action::Call, Action::Check]);
    assert_eq!(game.community_cards(), parse_cards("9s 4h Jc").unwrap());
    check_down(&mut game, 3);

    assert_eq!(game.round(), Round::Finished);
    assert_eq!(game.community_cards(), parse_cards("9s 4h Jc Qd 3s").unwrap());
    assert_eq!(game.remaining_deck(), 0);

    let outcome = game.winner().unwrap();
    assert_eq!(outcome.winners, [0]);
    assert_eq!(outcome.pot, 150);
    let hand = outcome.winning_hand.as_ref().unwrap();
    assert_eq!(
        hand,
        &HandStrength::new(
            Category::OnePair,
            vec![Rank::Ace, Rank::Queen, Rank::Jack, Rank::Nine]
        )
    );
    assert_eq!(hand.to_string(), "One Pair [A Q J 9]");

    assert_eq!(players[0].borrow().money(), 1600);
    assert_eq!(players[1].borrow().money(), 1450);
    assert_eq!(players[2].borrow().money(), 1450);
}

#[test]
fn tied_hands_split_with_odd_chip_to_first_after_dealer() {
    let (mut game, players) = stacked_game(
        20,
        45,
        "Ah 2c  Ad 3c  4d 5d  6h  Ks Kh Qs  7h  Qh  8h  Js",
    );
    play(&mut game, &[Action::Call, Action::Call, Action::Check]);
    check_down(&mut game, 3);

    let outcome = game.winner().unwrap();
    assert_eq!(outcome.winners, [0, 1]);
    assert_eq!(outcome.pot, 135);
    assert_eq!(
        outcome.winning_hand,
        Some(HandStrength::new(
            Category::TwoPair,
            vec![Rank::King, Rank::Queen, Rank::Ace]
        ))
    );

    assert_eq!(players[0].borrow().money(), 1523);
    assert_eq!(players[1].borrow().money(), 1522);
    assert_eq!(players[2].borrow().money(), 1455);
}

#[test]
fn folded_hand_cannot_win_showdown() {
    // seat 2 holds aces but folds before the flop
    let (mut game, players) = stacked_game(
        20,
        50,
        "Kc Kd  2c 7d  Ah Ad  5c  9s 4h Jc  6c  Qd  8c  3s",
    );
    play(&mut game, &[Action::Fold, Action::Call, Action::Check]);
    check_down(&mut game, 2);

    let outcome = game.winner().unwrap();
    assert_eq!(outcome.winners, [0]);
    assert_eq!(outcome.pot, 100);
    assert_eq!(
        outcome.winning_hand.as_ref().map(|h| h.category),
        Some(Category::OnePair)
    );
    assert_eq!(players[0].borrow().money(), 1550);
    assert_eq!(players[2].borrow().money(), 1500);
}

#[test]
fn outcome_serializes_for_hosts() {
    let (mut game, _) = stacked_game(
        20,
        50,
        "Ah Ad  Kc Kd  2c 7d  5c  9s 4h Jc  6c  Qd  8c  3s",
    );
    play(&mut game, &[Action::Call, Action::Call, Action::Check]);
    check_down(&mut game, 3);

    let json = serde_json::to_value(game.winner().unwrap()).unwrap();
    assert_eq!(json["winners"], serde_json::json!([0]));
    assert_eq!(json["pot"], 150);
    assert_eq!(json["winning_hand"]["category"], "OnePair");

    let view = game.visible_state();
    assert_eq!(view.round, Round::Finished);
    assert!(view.active.is_none());
    assert_eq!(view.pot, 0);
    assert_eq!(view.community.len(), 5);
}
