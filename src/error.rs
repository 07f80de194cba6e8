
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FuzzyDateError {
    #[error("Missing component: {0}")]
    MissingComponent(String),
    #[error("Invalid calendar date: {0}")]
    InvalidCalendarDate(String),
    #[error("Format error: {text:?} does not match YYYY.MM.DD")]
    Format { text: String },
}

pub type Result<T> = std::result::Result<T, FuzzyDateError>;
