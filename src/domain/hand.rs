use core::fmt;
use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank};
use crate::domain::errors::{InvalidHandError, PokerError};
use crate::eval::{self, HandCategory};

/// Сколько карт в руке.
pub const HAND_SIZE: usize = 5;

/// Разбить запись руки на токены карт: разделители — пробелы и запятые,
/// пустые куски отбрасываются. Сами токены не проверяются.
pub fn split_tokens(s: &str) -> Vec<&str> {
    s.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect()
}

/// Ранг руки: упакованные категория + 5 рангов (см. eval::hand_rank).
/// Сравнение `HandRank` = сравнение рук на шоудауне.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandRank(pub u32);

/// Рука из ровно пяти карт.
///
/// Всё остальное (отсортированные ранги, группы, категория, очки)
/// вычисляется из карт на лету и нигде не хранится.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {
    /// Построить руку из пяти токенов вида "8H".
    ///
    /// Количество проверяется до разбора карт.
    pub fn new<S: AsRef<str>>(tokens: &[S]) -> Result<Self, PokerError> {
        if tokens.len() != HAND_SIZE {
            return Err(InvalidHandError {
                expected: HAND_SIZE,
                actual: tokens.len(),
            }
            .into());
        }

        let cards = tokens
            .iter()
            .map(|t| t.as_ref().parse::<Card>())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::try_from(cards.as_slice())?)
    }

    pub const fn from_cards(cards: [Card; HAND_SIZE]) -> Self {
        Self { cards }
    }

    /// Карты в исходном порядке.
    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    /// Ранги всех 5 карт от старшего к младшему.
    pub fn descending_ranks(&self) -> [Rank; HAND_SIZE] {
        let mut ranks = self.cards.map(|c| c.rank);
        ranks.sort_unstable_by(|a, b| b.cmp(a));
        ranks
    }

    /// Ранг -> сколько карт этого ранга, только для рангов, встречающихся больше одного раза.
    pub fn rank_group_counts(&self) -> BTreeMap<Rank, u8> {
        self.cards
            .iter()
            .fold(BTreeMap::new(), |mut acc, card| {
                *acc.entry(card.rank).or_insert(0u8) += 1;
                acc
            })
            .into_iter()
            .filter(|&(_, count)| count > 1)
            .collect()
    }

    pub fn category(&self) -> HandCategory {
        eval::classify(self)
    }

    /// Очки категории: 0 (старшая карта) ..= 8 (стрит-флеш).
    pub fn score(&self) -> u8 {
        self.category().score()
    }

    /// Название лучшей комбинации руки (то же, что `category`).
    pub fn best_hand(&self) -> HandCategory {
        self.category()
    }

    /// Компактный сравнимый ключ руки.
    pub fn rank(&self) -> HandRank {
        HandRank::from_category_and_ranks(self.category(), self.descending_ranks())
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = InvalidHandError;

    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        let cards: [Card; HAND_SIZE] = cards.try_into().map_err(|_| InvalidHandError {
            expected: HAND_SIZE,
            actual: cards.len(),
        })?;
        Ok(Self { cards })
    }
}

impl From<[Card; HAND_SIZE]> for Hand {
    fn from(cards: [Card; HAND_SIZE]) -> Self {
        Self::from_cards(cards)
    }
}

/// Парсинг строки вида "8H 8C 8D QS KD" (через пробелы или запятые).
impl FromStr for Hand {
    type Err = PokerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hand::new(split_tokens(s).as_slice())
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
