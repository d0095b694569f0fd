use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to load deck {path}: {source}")]
    Deck {
        path: PathBuf,
        source: msw_deck::DeckError,
    },

    #[error("{0}")]
    Build(#[from] msw_deck::DeckError),

    #[error("{0}")]
    Segment(#[from] msw_segments::SegmentError),

    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CliResult<T> = Result<T, CliError>;
