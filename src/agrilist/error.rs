use thiserror::Error;

use crate::model::Collection;

#[derive(Error, Debug)]
pub enum AgrilistError {
    #[error("Could not load {0}: no cached payload (run a fetch first)")]
    PayloadMissing(Collection),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, AgrilistError>;
