#[cfg(test)]
#[path = "../../tests/unit/utils/error_test.rs"]
mod error_test;

use std::fmt::{Display, Formatter};

/// An error of checkers, dataset readers and plotting: a human-readable message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenericError(String);

/// A type alias for result type with `GenericError`.
pub type GenericResult<T> = Result<T, GenericError>;

impl GenericError {
    /// Prepends a context to the error message, e.g. a file name or a dataset key.
    pub fn context(self, context: &str) -> Self {
        Self(format!("{context}: {}", self.0))
    }
}

impl Display for GenericError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for GenericError {}

impl From<String> for GenericError {
    fn from(message: String) -> Self {
        Self(message)
    }
}

impl From<&str> for GenericError {
    fn from(message: &str) -> Self {
        Self(message.to_string())
    }
}

impl From<Box<dyn std::error::Error>> for GenericError {
    fn from(err: Box<dyn std::error::Error>) -> Self {
        Self(err.to_string())
    }
}

impl From<std::io::Error> for GenericError {
    fn from(err: std::io::Error) -> Self {
        Self(err.to_string())
    }
}

impl From<serde_json::Error> for GenericError {
    fn from(err: serde_json::Error) -> Self {
        Self(format!("cannot process json: '{err}'"))
    }
}
