use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid FHIR dateTime '{value}': {reason}")]
    InvalidDateTime { value: String, reason: &'static str },
    #[error("unknown thing type id: {0}")]
    UnknownThingType(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
