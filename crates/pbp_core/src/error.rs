use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Unsupported schema version: found {found}, expected {expected}")]
    SchemaVersion { found: u8, expected: u8 },
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            CoreError::Serialization(err.to_string())
        } else {
            CoreError::Deserialization(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
