use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    /// A table was requested with a capacity of zero.
    InvalidCapacity,
    /// Every slot reachable by the key's probe sequence is held by another key.
    CapacityExceeded,
    /// A value read back right after storing it didn't match.
    ValueMismatch {
        key: String,
        expected: String,
        retrieved: Option<String>,
    },
    UnknownStrategy(String),
    InvalidArgument(String),
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Io(..), Self::Io(..)) => true,
            (Self::InvalidCapacity, Self::InvalidCapacity) => true,
            (Self::CapacityExceeded, Self::CapacityExceeded) => true,
            (
                Self::ValueMismatch { key, expected, retrieved },
                Self::ValueMismatch {
                    key: okey,
                    expected: oexpected,
                    retrieved: oretrieved,
                },
            ) => key == okey && expected == oexpected && retrieved == oretrieved,
            (Self::UnknownStrategy(a), Self::UnknownStrategy(b)) => a == b,
            (Self::InvalidArgument(a), Self::InvalidArgument(b)) => a == b,
            (_, _) => false,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "io error: {err}"),
            Self::InvalidCapacity => write!(f, "table capacity must be greater than zero"),
            Self::CapacityExceeded => write!(f, "no free slot on the key's probe sequence"),
            Self::ValueMismatch {
                key,
                expected,
                retrieved,
            } => write!(
                f,
                "Retrieved value {} does not match stored value {expected} for key {key}",
                retrieved.as_deref().unwrap_or("null")
            ),
            Self::UnknownStrategy(name) => write!(f, "unknown probing strategy: {name}"),
            Self::InvalidArgument(arg) => write!(f, "invalid argument: {arg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}
