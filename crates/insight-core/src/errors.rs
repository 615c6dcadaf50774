//! Error taxonomy for the review-insight core.
//!
//! Every error is fatal to the single call that raised it: no retries, no
//! partial-result recovery. Callers wanting resilience across many documents
//! catch per call and continue.

/// Result alias used throughout the workspace.
pub type InsightResult<T> = Result<T, InsightError>;

/// Review-insight core errors.
#[derive(Debug, thiserror::Error)]
pub enum InsightError {
    #[error("invalid parameter {name}={value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("vectorization failed: {reason}")]
    Vectorization { reason: String },

    #[error("insufficient data: needed {needed} distinct documents, have {available}")]
    InsufficientData { needed: usize, available: usize },
}

impl InsightError {
    /// Shorthand for an invalid-parameter error.
    pub fn invalid_parameter(
        name: &'static str,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidParameter {
            name,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}
