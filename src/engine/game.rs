use core::cmp::Ordering;
use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Rank;
use crate::domain::errors::PokerError;
use crate::domain::hand::Hand;
use crate::eval::HandCategory;

/// Сторона в игре.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub const fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Side::White => "white",
            Side::Black => "black",
        })
    }
}

/// Итог сравнения двух рук.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Verdict {
    Win {
        side: Side,
        /// Категория руки победителя.
        category: HandCategory,
        /// Ранг победителя на первой различающейся позиции.
        /// `None`, если победа по категории.
        high_card: Option<Rank>,
    },
    Tie,
}

impl Verdict {
    pub fn winner(&self) -> Option<Side> {
        match self {
            Verdict::Win { side, .. } => Some(*side),
            Verdict::Tie => None,
        }
    }

    pub fn is_tie(&self) -> bool {
        matches!(self, Verdict::Tie)
    }
}

impl fmt::Display for Verdict {
    /// `white wins: pair`, `black wins: two_pair - 14`, `tie`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Win {
                side,
                category,
                high_card: None,
            } => write!(f, "{side} wins: {category}"),
            Verdict::Win {
                side,
                category,
                high_card: Some(rank),
            } => write!(f, "{side} wins: {category} - {}", rank.value()),
            Verdict::Tie => write!(f, "tie"),
        }
    }
}

/// Одна партия: белая рука против чёрной.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Game {
    white: Hand,
    black: Hand,
}

impl Game {
    /// Ошибки построения рук пробрасываются как есть, белая рука строится первой.
    pub fn new<S: AsRef<str>>(white: &[S], black: &[S]) -> Result<Self, PokerError> {
        let white = Hand::new(white)?;
        let black = Hand::new(black)?;
        Ok(Self::from_hands(white, black))
    }

    pub const fn from_hands(white: Hand, black: Hand) -> Self {
        Self { white, black }
    }

    pub fn hand(&self, side: Side) -> &Hand {
        match side {
            Side::White => &self.white,
            Side::Black => &self.black,
        }
    }

    pub fn white(&self) -> &Hand {
        &self.white
    }

    pub fn black(&self) -> &Hand {
        &self.black
    }

    /// Определить победителя.
    ///
    /// 1. Разные очки категории – побеждает старшая категория.
    /// 2. Равные очки – ранги обеих рук (по убыванию) сравниваются позиция за позицией,
    ///    пары и кикеры отдельно не выделяются.
    /// 3. Все 5 позиций равны – ничья.
    pub fn winner(&self) -> Verdict {
        let white_rank = self.white.rank();
        let black_rank = self.black.rank();

        // Порядок HandRank = сначала очки, потом позиционно ранги.
        let side = match white_rank.cmp(&black_rank) {
            Ordering::Greater => Side::White,
            Ordering::Less => Side::Black,
            Ordering::Equal => {
                log::debug!("tie: {} vs {}", self.white, self.black);
                return Verdict::Tie;
            }
        };

        let winner = self.hand(side);
        let loser = self.hand(side.opponent());
        let category = winner.category();

        let high_card = if category == loser.category() {
            winner
                .descending_ranks()
                .into_iter()
                .zip(loser.descending_ranks())
                .find(|(w, l)| w != l)
                .map(|(w, _)| w)
        } else {
            None
        };

        log::debug!(
            "{side} wins: {} ({category}) vs {} ({}), high card {:?}",
            winner,
            loser,
            loser.category(),
            high_card.map(Rank::value),
        );

        Verdict::Win {
            side,
            category,
            high_card,
        }
    }
}
