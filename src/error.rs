use thiserror::Error;

#[derive(Error, Debug)]
pub enum WirecutError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("line does not match pattern for field `{field}`")]
    FieldMismatch { field: String },

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, WirecutError>;
