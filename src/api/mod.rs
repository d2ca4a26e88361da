//! Внешний API поверх движка.
//!
//! Здесь описываются:
//! - запросы (queries.rs) — сравнить две руки и собрать отчёт;
//! - DTO (dto.rs) — сериализуемый отчёт о партии;
//! - ошибки (errors.rs) — то, что видит клиент;
//! - CLI (cli.rs) — аргументы и запуск `poker_hands_cli`.

pub mod cli;
pub mod dto;
pub mod errors;
pub mod queries;

pub use dto::*;
pub use errors::*;
pub use queries::*;
