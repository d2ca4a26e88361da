//! Сравнение двух 5-карточных покерных рук (white против black).
//!
//! Слои:
//! - `domain` – карты, руки, ошибки разбора;
//! - `eval` – категория руки и компактный ранг;
//! - `engine` – партия и вердикт;
//! - `api` – запрос/отчёт для внешних клиентов (CLI, JSON).

pub mod api;
pub mod domain;
pub mod engine;
pub mod eval;

pub use domain::{Card, Hand, HandRank, InvalidCardError, InvalidHandError, PokerError, Rank, Suit};
pub use engine::{Game, Side, Verdict};
pub use eval::HandCategory;
