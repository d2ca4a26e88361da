//! Тесты оценки рук: предикаты, приоритет категорий, очки, HandRank.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use poker_hands::domain::{Card, Hand, HandRank, Rank, Suit};
use poker_hands::eval::evaluator::*;
use poker_hands::eval::{classify, HandCategory, DETECTION_ORDER};

/// Утилита: рука из строки.
fn h(s: &str) -> Hand {
    s.parse().expect("valid hand")
}

/// Полная колода из 52 карт.
fn deck() -> Vec<Card> {
    Rank::ALL
        .iter()
        .flat_map(|&r| Suit::ALL.iter().map(move |&s| Card::new(r, s)))
        .collect()
}

//
// ---- Предикаты ----
//

#[test]
fn predicates_on_reference_hands() {
    assert!(is_pair(&h("2H 3D 8D KS KD")));
    assert!(is_two_pair(&h("8H 3D 8D KS KD")));
    assert!(is_three_of_a_kind(&h("8H 8C 8D QS KD")));
    assert!(is_straight(&h("AH 2C 3D 4S 5D")));
    assert!(is_flush(&h("AS 2S 4S 8S KS")));
    assert!(is_full_house(&h("8H 8C 8D KS KD")));
    assert!(is_four_of_a_kind(&h("8H 8C 8D 8S KD")));
    assert!(is_straight_flush(&h("2C 3C 4C 5C 6C")));
}

#[test]
fn straight_edge_cases() {
    // wrap-around через туза – не стрит
    assert!(!is_straight(&h("JD QS KD AC 2S")));
    // пара – не стрит
    assert!(!is_straight(&h("2H 3D 8D KS KD")));
    // broadway
    assert!(is_straight(&h("TH JC QD KS AD")));
    // порядок карт на входе не важен
    assert!(is_straight(&h("9S 7H 5C 8D 6H")));
    // разброс 4, но с парой
    assert!(!is_straight(&h("2H 2D 4S 5C 6H")));
    // туз с 2345 без пятёрки
    assert!(!is_straight(&h("AH 2C 3D 4S 6D")));
}

#[test]
fn two_pair_needs_exactly_two_pairs() {
    assert!(!is_two_pair(&h("2H 3D 8D KS KD")));
    // фулл-хаус: только одна пара
    assert!(!is_two_pair(&h("8H 8C 8D KS KD")));
    // каре: группа из 4 не считается двумя парами
    assert!(!is_two_pair(&h("8H 8C 8D 8S KD")));
}

/// Сет находится по наличию группы из 3, даже если есть ещё и пара.
#[test]
fn three_of_a_kind_matches_full_house_triple() {
    let full_house = h("8H 8C 8D KS KD");
    assert!(is_three_of_a_kind(&full_house));
    assert!(is_pair(&full_house));
    assert_eq!(classify(&full_house), HandCategory::FullHouse);
}

//
// ---- Категории и очки ----
//

#[test]
fn category_and_score_for_each_reference_hand() {
    let cases = [
        ("2H 3D 5S 9C KD", HandCategory::HighCard, 0),
        ("2H 3D 8D KS KD", HandCategory::Pair, 1),
        ("8H 3D 8D KS KD", HandCategory::TwoPair, 2),
        ("8H 8C 8D QS KD", HandCategory::ThreeOfAKind, 3),
        ("AH 2C 3D 4S 5D", HandCategory::Straight, 4),
        ("AS 2S 4S 8S KS", HandCategory::Flush, 5),
        ("8H 8C 8D KS KD", HandCategory::FullHouse, 6),
        ("8H 8C 8D 8S KD", HandCategory::FourOfAKind, 7),
        ("2C 3C 4C 5C 6C", HandCategory::StraightFlush, 8),
    ];

    for (hand, category, score) in cases {
        let hand = h(hand);
        assert_eq!(hand.category(), category, "hand {hand}");
        assert_eq!(hand.best_hand(), category);
        assert_eq!(hand.score(), score, "hand {hand}");
    }
}

#[test]
fn straight_flush_is_not_reported_as_straight_or_flush() {
    for hand in ["2C 3C 4C 5C 6C", "AH 2H 3H 4H 5H", "TS JS QS KS AS"] {
        let hand = h(hand);
        assert!(is_straight(&hand) && is_flush(&hand));
        assert_eq!(hand.category(), HandCategory::StraightFlush);
    }
}

#[test]
fn category_labels_and_score_table() {
    let expected = [
        ("high_card", 0),
        ("pair", 1),
        ("two_pair", 2),
        ("three_of_a_kind", 3),
        ("straight", 4),
        ("flush", 5),
        ("full_house", 6),
        ("four_of_a_kind", 7),
        ("straight_flush", 8),
    ];

    for (category, (label, score)) in HandCategory::ALL.iter().zip(expected) {
        assert_eq!(category.label(), label);
        assert_eq!(category.to_string(), label);
        assert_eq!(category.score(), score);
        assert_eq!(HandCategory::from_score(score), Some(*category));
    }
    assert_eq!(HandCategory::from_score(9), None);
    assert_eq!(HandCategory::ThreeOfAKind.describe(), "Three of a kind");
}

/// Таблица распознавания идёт строго от 8 к 1.
#[test]
fn detection_order_is_strongest_first() {
    let scores: Vec<u8> = DETECTION_ORDER.iter().map(|(c, _)| c.score()).collect();
    assert_eq!(scores, vec![8, 7, 6, 5, 4, 3, 2, 1]);
}

#[test]
fn category_serializes_as_snake_case() {
    let json = serde_json::to_string(&HandCategory::ThreeOfAKind).unwrap();
    assert_eq!(json, "\"three_of_a_kind\"");

    let back: HandCategory = serde_json::from_str("\"straight_flush\"").unwrap();
    assert_eq!(back, HandCategory::StraightFlush);
}

//
// ---- HandRank ----
//

#[test]
fn hand_rank_encoding_roundtrip() {
    let hand = h("8H 8C 8D KS KD");
    let hr = hand.rank();

    assert_eq!(hr.category(), HandCategory::FullHouse);
    assert_eq!(hr.ranks(), hand.descending_ranks());
    assert_eq!(
        hr,
        HandRank::from_category_and_ranks(HandCategory::FullHouse, hand.descending_ranks())
    );
}

#[test]
fn hand_rank_orders_by_category_then_position() {
    // флеш сильнее стрита
    assert!(h("AS 2S 4S 8S KS").rank() > h("TH JC QD KS AD").rank());
    // обе старшие карты: туз сильнее короля
    assert!(h("2C 3H 4S 8C AH").rank() > h("2H 3D 5S 9C KD").rank());
    // одинаковые ранги, разные масти – равны
    assert_eq!(h("2D 3H 5C 9S KH").rank(), h("2H 3D 5S 9C KD").rank());
}

//
// ---- Свойства на случайных руках ----
//

#[test]
fn random_hands_are_consistent() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut cards = deck();

    for _ in 0..2_000 {
        cards.shuffle(&mut rng);
        let hand = Hand::try_from(&cards[..5]).unwrap();

        let score = hand.score();
        assert!(score <= 8);
        assert_eq!(HandCategory::from_score(score), Some(hand.category()));

        let ranks = hand.descending_ranks();
        assert_eq!(ranks.len(), 5);
        assert!(ranks.windows(2).all(|w| w[0] >= w[1]), "hand {hand}");

        let hr = hand.rank();
        assert_eq!(hr.category(), hand.category());
        assert_eq!(hr.ranks(), ranks);

        // приоритет: если подходит более сильный предикат – берётся он
        if is_straight(&hand) && is_flush(&hand) {
            assert_eq!(hand.category(), HandCategory::StraightFlush);
        }
        if is_three_of_a_kind(&hand) && is_pair(&hand) {
            assert_eq!(hand.category(), HandCategory::FullHouse);
        }
    }
}
