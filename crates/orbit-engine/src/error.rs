//! Error types for orbit construction.

use thiserror::Error;

use crate::gradient::GradientParseError;

/// Result type for orbit and scene construction.
pub type OrbitResult<T> = Result<T, ConfigError>;

/// Errors raised while validating configuration and building orbits.
/// All of these fire synchronously at construction time; a failing orbit is
/// never partially created.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("expected {field} to be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f32 },

    #[error("expected {field} to be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("expected border_width to be non-negative, got {0}")]
    NegativeBorder(f32),

    #[error("expected max_speed to be positive, got {0}")]
    InvalidSpeed(f32),

    #[error("mount target is not an attachable node")]
    InvalidMount,

    #[error("gradient: {0}")]
    Gradient(#[from] GradientParseError),

    #[error("config JSON: {0}")]
    Json(#[from] serde_json::Error),
}
