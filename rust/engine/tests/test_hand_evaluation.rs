use holdem_engine::cards::{parse_cards, Card, Rank as R, Suit as S};
use holdem_engine::errors::EvalError;
use holdem_engine::hand::{best_hand, compare_hands, evaluate, Category, Comparison, HandStrength};

fn c(s: S, r: R) -> Card {
    Card { suit: s, rank: r }
}

fn eval(s: &str) -> HandStrength {
    evaluate(&parse_cards(s).unwrap()).unwrap()
}

#[test]
fn high_card_orders_all_ranks() {
    let hs = evaluate(&[
        c(S::Clubs, R::Two),
        c(S::Spades, R::King),
        c(S::Spades, R::Five),
        c(S::Spades, R::Seven),
        c(S::Diamonds, R::Jack),
    ])
    .unwrap();
    assert_eq!(hs, HandStrength::new(Category::HighCard, vec![R::King, R::Jack, R::Seven, R::Five, R::Two]));
}

#[test]
fn one_pair_then_kickers_descending() {
    let hs = eval("2c As Ac 3d 5h");
    assert_eq!(hs.category, Category::OnePair);
    assert_eq!(hs.tiebreak.ranks(), [R::Ace, R::Five, R::Three, R::Two]);
}

#[test]
fn two_pair_high_pair_low_pair_kicker() {
    let hs = eval("2c 2s Ac Ah Jc");
    assert_eq!(hs.category, Category::TwoPair);
    assert_eq!(hs.tiebreak.ranks(), [R::Ace, R::Two, R::Jack]);
}

#[test]
fn three_of_a_kind_then_kickers() {
    let hs = eval("2c 2s 2d Ah Jc");
    assert_eq!(hs.category, Category::ThreeOfAKind);
    assert_eq!(hs.tiebreak.ranks(), [R::Two, R::Ace, R::Jack]);
}

#[test]
fn straight_reports_high_card() {
    let hs = eval("5c 6h 7c 8h 9d");
    assert_eq!(hs, HandStrength::new(Category::Straight, vec![R::Nine]));
}

#[test]
fn wheel_is_five_high_straight() {
    let hs = eval("Ac 2d 3h 4s 5c");
    assert_eq!(hs, HandStrength::new(Category::Straight, vec![R::Five]));

    let six_high = eval("2d 3h 4s 5c 6c");
    assert_eq!(compare_hands(&hs, &six_high).unwrap(), Comparison::SecondWins);
}

#[test]
fn ace_does_not_wrap_around() {
    let hs = eval("Qc Kd Ah 2s 3c");
    assert_eq!(hs.category, Category::HighCard);
}

#[test]
fn flush_lists_all_ranks() {
    let hs = eval("2h 7h Jh Qh 9h");
    assert_eq!(hs.category, Category::Flush);
    assert_eq!(hs.tiebreak.ranks(), [R::Queen, R::Jack, R::Nine, R::Seven, R::Two]);
}

#[test]
fn full_house_triple_then_pair() {
    let hs = eval("3c 3d 3h Ks Kc");
    assert_eq!(hs, HandStrength::new(Category::FullHouse, vec![R::Three, R::King]));
}

#[test]
fn four_of_a_kind_with_kicker() {
    let hs = eval("9c 9d 9h 9s 4c");
    assert_eq!(hs, HandStrength::new(Category::FourOfAKind, vec![R::Nine, R::Four]));
}

#[test]
fn straight_flush_and_steel_wheel() {
    assert_eq!(
        eval("5s 6s 7s 8s 9s"),
        HandStrength::new(Category::StraightFlush, vec![R::Nine])
    );
    assert_eq!(
        eval("As 2s 3s 4s 5s"),
        HandStrength::new(Category::StraightFlush, vec![R::Five])
    );
}

#[test]
fn royal_flush_has_no_tiebreak() {
    let hs = eval("Th Jh Qh Kh Ah");
    assert_eq!(hs.category, Category::RoyalFlush);
    assert!(hs.tiebreak.is_empty());
    assert_eq!(compare_hands(&hs, &eval("Ts Js Qs Ks As")).unwrap(), Comparison::Tie);
}

#[test]
fn category_ordering_is_correct() {
    let ladder = [
        "2c 4d 6h 8s Tc",
        "2c 2d 6h 8s Tc",
        "2c 2d 6h 6s Tc",
        "2c 2d 2h 8s Tc",
        "2c 3d 4h 5s 6c",
        "2c 4c 6c 8c Tc",
        "2c 2d 2h 8s 8c",
        "2c 2d 2h 2s Tc",
        "2c 3c 4c 5c 6c",
        "Tc Jc Qc Kc Ac",
    ];
    for pair in ladder.windows(2) {
        let lower = eval(pair[0]);
        let higher = eval(pair[1]);
        assert!(higher > lower, "{} should beat {}", pair[1], pair[0]);
        assert_eq!(compare_hands(&lower, &higher).unwrap(), Comparison::SecondWins);
    }
}

#[test]
fn pair_of_kings_beats_pair_of_twos() {
    let twos = eval("2c 2s 5s 7s Jd");
    let kings = eval("Kc Ks 5s 7s Jd");
    assert_eq!(compare_hands(&kings, &twos).unwrap(), Comparison::FirstWins);
    assert_eq!(compare_hands(&twos, &kings).unwrap(), Comparison::SecondWins);
}

#[test]
fn kicker_decides_equal_pairs() {
    let ace_kicker = eval("9c 9s Ad 4h 3c");
    let king_kicker = eval("9d 9h Kd 4s 3s");
    assert_eq!(compare_hands(&ace_kicker, &king_kicker).unwrap(), Comparison::FirstWins);
}

#[test]
fn same_ranks_different_suits_tie() {
    let a = eval("2c Ks 5s 7s Jd");
    let b = eval("2d Kh 5h 7c Js");
    assert_eq!(compare_hands(&a, &b).unwrap(), Comparison::Tie);
}

#[test]
fn small_hands_degrade_gracefully() {
    assert_eq!(eval("Ac"), HandStrength::new(Category::HighCard, vec![R::Ace]));
    assert_eq!(
        eval("2c Ks"),
        HandStrength::new(Category::HighCard, vec![R::King, R::Two])
    );
    assert_eq!(
        eval("2c As Ac"),
        HandStrength::new(Category::OnePair, vec![R::Ace, R::Two])
    );
    // four suited connectors are neither a straight nor a flush
    assert_eq!(eval("5h 6h 7h 8h").category, Category::HighCard);
}

#[test]
fn rejects_unsupported_sizes_and_duplicates() {
    assert_eq!(evaluate(&[]), Err(EvalError::InvalidHandSize { size: 0 }));
    let six = parse_cards("2c 3c 4c 5c 6c 7c").unwrap();
    assert_eq!(evaluate(&six), Err(EvalError::InvalidHandSize { size: 6 }));
    let dup = parse_cards("2c 2c 4d 5h 6s").unwrap();
    assert_eq!(evaluate(&dup), Err(EvalError::DuplicateCard(c(S::Clubs, R::Two))));
}

#[test]
fn best_hand_picks_strongest_five_of_seven() {
    let seven = parse_cards("Th Jh Qh Kh Ah 2c 3d").unwrap();
    assert_eq!(best_hand(&seven).unwrap().category, Category::RoyalFlush);

    let board_straight = parse_cards("2c 2d 5h 6s 7c 8d 9h").unwrap();
    assert_eq!(
        best_hand(&board_straight).unwrap(),
        HandStrength::new(Category::Straight, vec![R::Nine])
    );

    let eight = parse_cards("2c 3c 4c 5c 6c 7c 8c 9c").unwrap();
    assert_eq!(best_hand(&eight), Err(EvalError::InvalidHandSize { size: 8 }));
}

#[test]
fn lowest_sentinel_loses_to_everything() {
    let worst = eval("2c");
    assert_eq!(
        compare_hands(&HandStrength::lowest(), &worst).unwrap(),
        Comparison::SecondWins
    );
}
