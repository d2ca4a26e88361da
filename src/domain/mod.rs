//! Доменная модель: карты, руки и ошибки их построения.

pub mod card;
pub mod errors;
pub mod hand;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use errors::*;
pub use hand::*;
