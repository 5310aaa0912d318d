//! Input errors: malformed design or implementation trees.

use super::error_code::{self, ParityErrorCode};

/// Fatal errors raised while decoding or validating an input tree.
///
/// Every variant names the component that rejected the input and the
/// precondition it violated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("{component}: {precondition}")]
    MalformedInput {
        component: &'static str,
        precondition: String,
    },

    #[error("{component}: invalid JSON: {message}")]
    InvalidJson {
        component: &'static str,
        message: String,
    },
}

impl InputError {
    pub fn malformed(component: &'static str, precondition: impl Into<String>) -> Self {
        Self::MalformedInput {
            component,
            precondition: precondition.into(),
        }
    }

    /// Name of the component that rejected the input.
    pub fn component(&self) -> &'static str {
        match self {
            Self::MalformedInput { component, .. } | Self::InvalidJson { component, .. } => {
                component
            }
        }
    }
}

impl ParityErrorCode for InputError {
    fn error_code(&self) -> &'static str {
        error_code::MALFORMED_INPUT
    }
}
