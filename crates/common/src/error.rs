use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the window IR.
///
/// A `MalformedSpec` is an upstream defect (a parser or binder left a window
/// spec in an inconsistent state); it is never caused by user SQL directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    MalformedSpec(String),
}

impl Error {
    pub fn malformed_spec(msg: impl Into<String>) -> Self {
        Error::MalformedSpec(msg.into())
    }

    pub fn is_malformed_spec(&self) -> bool {
        matches!(self, Error::MalformedSpec(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MalformedSpec(msg) => write!(f, "Malformed window spec: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_spec_display() {
        let err = Error::malformed_spec("unrecognized frame start INVALID");
        assert_eq!(
            err.to_string(),
            "Malformed window spec: unrecognized frame start INVALID"
        );
        assert!(err.is_malformed_spec());
    }

    #[test]
    fn test_error_is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&Error::malformed_spec("x"));
    }
}
