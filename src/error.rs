//! Error type shared by the resolver, the buffer normalizer and the batch driver.

use thiserror::Error;

use crate::units::Unit;

pub type Result<T> = std::result::Result<T, LabelError>;

#[derive(Error, Debug)]
pub enum LabelError {
    /// Axis and label sequences disagree, or an axis handle is unknown to the host.
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    #[error("label #{index} must be a string or an array of strings, got {found}")]
    InvalidLabelType { index: usize, found: String },

    #[error("unrecognized location {0:?}")]
    InvalidLocation(String),

    #[error("unrecognized unit {0:?} (expected normalized, inches, centimeters, characters, points or pixels)")]
    InvalidUnit(String),

    #[error("axis extent is {size} {unit}; cannot normalize a buffer against it")]
    DegenerateAxis { size: f64, unit: Unit },

    #[error("text property {0:?} is owned by the label placer and cannot be overridden")]
    ReservedProperty(String),

    #[error(transparent)]
    Host(#[from] anyhow::Error),
}
