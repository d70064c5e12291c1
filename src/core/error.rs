use thiserror::Error;

use crate::board::vector::Vector;

#[derive(Error, Debug)]
pub enum GridError {
    #[error("Vector {vector} is outside the {width}x{height} board")]
    OutOfBounds {
        vector: Vector,
        width: i32,
        height: i32,
    },

    #[error("Unknown player: {0:?}")]
    UnknownPlayer(crate::core::types::PlayerId),

    #[error("Invalid scenario: {0}")]
    InvalidScenario(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Scenario parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GridError>;
