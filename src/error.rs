use thiserror::Error;

#[derive(Error, Debug)]
pub enum PredictorError {
    #[error("form incomplete, missing: {}", .0.join(", "))]
    IncompleteForm(Vec<String>),

    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("invalid number for {field}: {text:?}")]
    InvalidNumber { field: String, text: String },

    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PredictorError>;
