use cricket_core::PlayerBuildError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("malformed data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read data file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid player '{name}' in roster '{roster}': {source}")]
    InvalidPlayer {
        roster: String,
        name: String,
        #[source]
        source: PlayerBuildError,
    },
}
