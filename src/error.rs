use thiserror::Error;

/// Errors raised before any trajectory sample is produced
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BounceError {
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
}

impl BounceError {
    pub fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter { name, value, reason }
    }

    /// Name of the offending parameter
    pub fn parameter(&self) -> &'static str {
        match self {
            Self::InvalidParameter { name, .. } => name,
        }
    }
}

pub type Result<T> = std::result::Result<T, BounceError>;
