use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiceScoreError {
    #[error("Hand is missing")]
    NullInput,

    #[error("Invalid Hand Arity: expected {expected} dice but got {actual}")]
    InvalidArity { expected: usize, actual: usize },

    #[error("Die Value Out Of Range: dice[{index}] should be between {min} and {max} but was {value}")]
    ValueOutOfRange {
        index: usize,
        value: i32,
        min: i32,
        max: i32,
    },

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type DsResult<T> = Result<T, DiceScoreError>;
