use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub enum Error {
    /// A raw key did not have the expected shape, or did not describe a real
    /// calendar date.
    InvalidKeyFormat { value: String, expected: &'static str },
}

impl Error {
    pub(crate) fn invalid_key(value: &str, expected: &'static str) -> Self {
        Self::InvalidKeyFormat { value: value.to_string(), expected }
    }

    /// The raw string that was rejected.
    pub fn value(&self) -> &str {
        match self {
            Self::InvalidKeyFormat { value, .. } => value,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKeyFormat { value, expected } => {
                write!(f, "invalid key `{}`: expected {}", value, expected)
            }
        }
    }
}

impl std::error::Error for Error {}
