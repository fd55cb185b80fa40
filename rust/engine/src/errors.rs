use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid factory index: {index}, maximum: {max}")]
    InvalidFactoryIndex { index: usize, max: usize },
    #[error("Invalid row index: {index}, maximum: {max}")]
    InvalidRowIndex { index: usize, max: usize },
    #[error("Invalid player index: {index}")]
    InvalidPlayerIndex { index: usize },
}
