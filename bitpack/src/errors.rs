use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BitpackError {
    #[error("Invalid bit width:{0}, expected 1..=32")]
    InvalidBitWidth(u32),

    #[error("Invalid count:{0}")]
    InvalidCount(i64),

    #[error("Insufficient input: need {need} bytes, got {got}")]
    InsufficientInput { need: usize, got: usize },
}

pub type BitpackResult<T> = std::result::Result<T, BitpackError>;
