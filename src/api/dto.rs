use serde::{Deserialize, Serialize};

use crate::domain::card::Rank;
use crate::engine::{Side, Verdict};
use crate::eval::HandCategory;

/// DTO одной руки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandSummaryDto {
    pub side: Side,
    /// Карты в нотации входа, через пробел: "8H 8C 8D QS KD".
    pub cards: String,
    pub category: HandCategory,
    pub score: u8,
    pub descending_ranks: [Rank; 5],
}

/// DTO результата партии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameReportDto {
    pub white: HandSummaryDto,
    pub black: HandSummaryDto,
    pub verdict: Verdict,
    /// Текстовый вид вердикта: "black wins: two_pair - 14".
    pub summary: String,
}
