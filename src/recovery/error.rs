//! Error types for parameter recovery
//!
//! Only malformed input is an error. A search that finds nothing returns
//! `SearchOutcome::NotFound`.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecoveryError {
    #[error("sample window must hold exactly {expected} samples, got {actual}")]
    WindowLength { expected: usize, actual: usize },

    #[error("sample x{index} is negative ({value}); generator outputs are never negative")]
    NegativeSample { index: usize, value: i64 },

    #[error("search bound must be >= 0, got {0}")]
    NegativeBound(i64),

    #[error("at least one search worker is required")]
    NoWorkers,

    #[error("too many search workers: requested {requested}, max {max}")]
    TooManyWorkers { requested: usize, max: usize },

    #[error("invalid generator parameters: {0}")]
    InvalidGenerator(String),
}

pub type Result<T> = std::result::Result<T, RecoveryError>;
