use thiserror::Error;

#[derive(Debug, Error)]
pub enum OncosymError {
    #[error("Invalid sex value: {0:?} (expected \"male\" or \"female\")")]
    InvalidSex(String),
}

pub type Result<T> = std::result::Result<T, OncosymError>;
