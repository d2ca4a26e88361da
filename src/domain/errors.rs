use thiserror::Error;

/// Ошибка разбора одной карты из двухсимвольной нотации.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InvalidCardError {
    #[error("Карта должна состоять ровно из 2 символов, получено {0:?}")]
    WrongLength(String),

    #[error("Недопустимый ранг карты: {0:?}")]
    InvalidRank(char),

    #[error("Недопустимая масть карты: {0:?}")]
    InvalidSuit(char),
}

/// Рука собрана не из 5 карт.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("Рука должна содержать ровно {expected} карт, получено {actual}")]
pub struct InvalidHandError {
    pub expected: usize,
    pub actual: usize,
}

/// Любая ошибка построения руки или игры.
///
/// Game своих ошибок не добавляет – только пробрасывает эти.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PokerError {
    #[error(transparent)]
    Card(#[from] InvalidCardError),

    #[error(transparent)]
    Hand(#[from] InvalidHandError),
}
