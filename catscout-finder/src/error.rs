use thiserror::Error;

#[derive(Error, Debug)]
pub enum FindError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid service URL: {0}")]
    InvalidUrl(String),

    #[error("Empty category name")]
    EmptyCategory,

    #[error("Malformed service reply: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FindError>;
