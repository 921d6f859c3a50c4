use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid country code {value:?}: expected three ASCII letters")]
    InvalidCode { value: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
