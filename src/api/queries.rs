use serde::{Deserialize, Serialize};

use crate::domain::hand::Hand;
use crate::engine::{Game, Side};

use super::dto::{GameReportDto, HandSummaryDto};
use super::errors::ApiError;

/// Запрос на сравнение двух рук.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EvaluateRequest {
    pub white: Vec<String>,
    pub black: Vec<String>,
}

/// Разобрать запрос, сыграть партию и собрать отчёт.
pub fn evaluate(request: &EvaluateRequest) -> Result<GameReportDto, ApiError> {
    let game = Game::new(request.white.as_slice(), request.black.as_slice())?;
    Ok(build_game_report(&game))
}

/// Сформировать DTO партии на основе `Game`.
pub fn build_game_report(game: &Game) -> GameReportDto {
    let verdict = game.winner();

    GameReportDto {
        white: build_hand_summary(Side::White, game.white()),
        black: build_hand_summary(Side::Black, game.black()),
        verdict,
        summary: verdict.to_string(),
    }
}

fn build_hand_summary(side: Side, hand: &Hand) -> HandSummaryDto {
    let category = hand.category();

    HandSummaryDto {
        side,
        cards: hand.to_string(),
        category,
        score: category.score(),
        descending_ranks: hand.descending_ranks(),
    }
}
