use thiserror::Error;

#[derive(Error, Debug)]
pub enum RankError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Writing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP Error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Section '{section}' could not be loaded: {reason}")]
    Source { section: String, reason: String },

    #[error("No standings found in any section")]
    NoData,
}

pub type RankResult<T> = Result<T, RankError>;
