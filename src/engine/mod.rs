//! Движок партии: две руки, сравнение, вердикт.
//!
//! Высокоуровневый объект: `Game`
//! Основная операция:
//!   - `winner` – сравнить белую и чёрную руки

pub mod game;

pub use game::{Game, Side, Verdict};
