//! Errors raised by the simulation engine

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    #[error("Invalid city dimensions: {width}x{height} (both must be positive)")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("City grid has no street cells to place a vehicle on")]
    NoStreetCells,

    #[error("Position ({x}, {y}) is outside the city")]
    OutOfBounds { x: i32, y: i32 },

    #[error("Position ({x}, {y}) is not a street cell")]
    OffStreet { x: i32, y: i32 },

    #[error("Invalid vehicle speed: {0}")]
    InvalidSpeed(u32),
}

pub type SimResult<T> = std::result::Result<T, SimError>;
