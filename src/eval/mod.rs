//! Модуль оценки силы 5-карточных рук.
//!
//! Основная функция:
//!   `classify(hand) -> HandCategory`

pub mod evaluator;
pub mod hand_rank;

pub use evaluator::{classify, DETECTION_ORDER};
pub use hand_rank::HandCategory;
