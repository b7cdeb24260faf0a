use thiserror::Error;

#[derive(Error, Debug)]
pub enum StutterlensError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to load file: {0}")]
    FailedToLoadFile(String),

    #[error("Missing column '{column}' in {file}")]
    MissingColumn { file: String, column: String },

    #[error("Bad row {row} in {file}: {message}")]
    InvalidRow { file: String, row: usize, message: String },

    #[error("StutterlensError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for StutterlensError {
    fn from(error: std::io::Error) -> Self {
        StutterlensError::Io(Box::new(error))
    }
}
