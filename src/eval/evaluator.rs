use crate::domain::card::Rank;
use crate::domain::hand::Hand;

use super::hand_rank::HandCategory;

/// Проверка "рука подходит под категорию".
pub type Predicate = fn(&Hand) -> bool;

/// Таблица распознавания: от сильнейшей категории к слабейшей.
/// Побеждает первая подошедшая строка, поэтому порядок важен:
/// фулл-хаус – это ещё и сет, стрит-флеш – ещё и стрит, и флеш.
/// Если ничего не подошло – HandCategory::HighCard.
pub const DETECTION_ORDER: [(HandCategory, Predicate); 8] = [
    (HandCategory::StraightFlush, is_straight_flush),
    (HandCategory::FourOfAKind, is_four_of_a_kind),
    (HandCategory::FullHouse, is_full_house),
    (HandCategory::Flush, is_flush),
    (HandCategory::Straight, is_straight),
    (HandCategory::ThreeOfAKind, is_three_of_a_kind),
    (HandCategory::TwoPair, is_two_pair),
    (HandCategory::Pair, is_pair),
];

/// wheel: A2345 (туз считается единицей).
const WHEEL: [Rank; 5] = [Rank::Ace, Rank::Five, Rank::Four, Rank::Three, Rank::Two];

/// Главная функция: категория 5-карточной руки.
pub fn classify(hand: &Hand) -> HandCategory {
    let category = DETECTION_ORDER
        .iter()
        .find(|(_, matches)| matches(hand))
        .map(|&(category, _)| category)
        .unwrap_or(HandCategory::HighCard);

    log::trace!("{hand} -> {category}");
    category
}

pub fn is_straight_flush(hand: &Hand) -> bool {
    is_straight(hand) && is_flush(hand)
}

pub fn is_four_of_a_kind(hand: &Hand) -> bool {
    has_group_of(hand, 4)
}

pub fn is_full_house(hand: &Hand) -> bool {
    is_three_of_a_kind(hand) && is_pair(hand)
}

pub fn is_flush(hand: &Hand) -> bool {
    let suit = hand.cards()[0].suit;
    hand.cards().iter().all(|c| c.suit == suit)
}

/// 5 разных рангов подряд, либо wheel.
pub fn is_straight(hand: &Hand) -> bool {
    let ranks = hand.descending_ranks();
    if ranks == WHEEL {
        return true;
    }

    let distinct = ranks.windows(2).all(|w| w[0] != w[1]);
    distinct && ranks[0].value() - ranks[4].value() == 4
}

/// Есть ранг ровно из 3 карт (у фулл-хауса тоже есть).
pub fn is_three_of_a_kind(hand: &Hand) -> bool {
    has_group_of(hand, 3)
}

pub fn is_two_pair(hand: &Hand) -> bool {
    hand.rank_group_counts()
        .values()
        .filter(|&&count| count == 2)
        .count()
        == 2
}

pub fn is_pair(hand: &Hand) -> bool {
    has_group_of(hand, 2)
}

fn has_group_of(hand: &Hand, size: u8) -> bool {
    hand.rank_group_counts().values().any(|&count| count == size)
}
