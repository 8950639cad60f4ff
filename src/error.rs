use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MortgageError {
    #[error("Invalid parameter: {field}: {reason}")]
    InvalidParameter { field: String, reason: String },
}

impl MortgageError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        MortgageError::InvalidParameter {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
