//! Typed failures for the strict (`try_*`) store API.
//!
//! The total API never produces these: duplicates and misses come back as
//! `InsertOutcome::Duplicate` / `None`. Callers that would rather branch on a
//! `Result` use the `try_*` variants, which map the same conditions here.
//! Snapshot decoding reports inconsistent dense shapes as `ShapeMismatch`.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("duplicate key: {key}")]
    DuplicateKey { key: String },

    #[error("key not found: {key}")]
    KeyNotFound { key: String },

    #[error("unknown {axis} label: {label}")]
    UnknownLabel { axis: String, label: String },

    #[error("shape mismatch: expected {expected}, found {found}")]
    ShapeMismatch { expected: String, found: String },
}

impl StoreError {
    pub fn duplicate(key: impl std::fmt::Display) -> Self {
        Self::DuplicateKey {
            key: key.to_string(),
        }
    }

    pub fn not_found(key: impl std::fmt::Display) -> Self {
        Self::KeyNotFound {
            key: key.to_string(),
        }
    }

    pub fn unknown_label(axis: &str, label: &str) -> Self {
        Self::UnknownLabel {
            axis: axis.to_string(),
            label: label.to_string(),
        }
    }

    pub fn shape_mismatch(expected: impl std::fmt::Display, found: impl std::fmt::Display) -> Self {
        Self::ShapeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
