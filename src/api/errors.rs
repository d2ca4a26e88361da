use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::PokerError;

/// Код выхода CLI для битого ввода.
pub const EXIT_BAD_INPUT: u8 = 2;

/// Код выхода CLI для внутренней ошибки.
pub const EXIT_INTERNAL: u8 = 1;

/// Ошибки внешнего API (то, что отдаём клиенту).
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (битая карта, не 5 карт).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Внутренняя ошибка (например, не удалось сериализовать отчёт).
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Код выхода процесса для этой ошибки.
    pub const fn exit_code(&self) -> u8 {
        match self {
            ApiError::BadRequest(_) => EXIT_BAD_INPUT,
            ApiError::Internal(_) => EXIT_INTERNAL,
        }
    }
}

impl From<PokerError> for ApiError {
    fn from(err: PokerError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}
