//! Request validation errors shared by the generator, the lookups and the
//! HTTP layer.

use thiserror::Error;

use crate::catalog::UnknownName;
use crate::color::ColorError;

/// A request that cannot be served as asked. Always the caller's fault.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    /// Palette generation needs a profile with at least one field
    #[error("user profile required")]
    MissingProfile,
    /// A required field is absent
    #[error("missing field '{0}'")]
    MissingField(&'static str),
    /// A catalog name (skin tone, event, scheme, ...) is not recognized
    #[error(transparent)]
    UnknownName(#[from] UnknownName),
    /// Harmony analysis needs more colors
    #[error("at least {min} colors required, got {got}")]
    TooFewColors { min: usize, got: usize },
    /// A color that must be valid is not
    #[error("invalid color '{value}': {source}")]
    InvalidColor { value: String, source: ColorError },
    /// Method dispatch received a method it does not know
    #[error("unsupported method '{0}'")]
    UnsupportedMethod(String),
    /// Body is not JSON or does not have the expected shape
    #[error("invalid request body: {0}")]
    InvalidBody(String),
}

impl From<serde_json::Error> for RequestError {
    fn from(e: serde_json::Error) -> Self {
        RequestError::InvalidBody(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(RequestError::MissingProfile.to_string(), "user profile required");
        assert_eq!(
            RequestError::TooFewColors { min: 2, got: 1 }.to_string(),
            "at least 2 colors required, got 1"
        );
        assert_eq!(
            RequestError::InvalidColor { value: "#12".into(), source: ColorError::InvalidLength(2) }
                .to_string(),
            "invalid color '#12': invalid color length 2, expected 6 hex digits"
        );
    }

    #[test]
    fn test_unknown_name_is_transparent() {
        let err: RequestError = "nope".parse::<crate::catalog::Season>().unwrap_err().into();
        assert!(err.to_string().starts_with("unknown season 'nope'"));
    }

    #[test]
    fn test_from_json_error() {
        let err: RequestError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert!(matches!(err, RequestError::InvalidBody(_)));
    }
}
