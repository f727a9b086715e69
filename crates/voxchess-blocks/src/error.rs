use thiserror::Error;

/// Failures raised while turning a material spec into a value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MaterialError {
    #[error("unknown material: {0}")]
    UnknownMaterial(String),

    #[error("invalid data specification: {0}")]
    InvalidDataSpecification(String),

    #[error("unknown dye colour: {0}")]
    UnknownDyeColor(String),

    #[error("data value out of range (0-15): {0}")]
    DataOutOfRange(String),
}

pub type Result<T> = std::result::Result<T, MaterialError>;
