use core::fmt;

/// Result alias for `radicchi`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by community detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input graph had no nodes.
    EmptyInput,

    /// Unrecognized community measure name.
    ///
    /// Only `"strong"` and `"weak"` are supported; anything else is rejected
    /// before any work is done.
    InvalidMeasure(String),

    /// A community predicate was evaluated on an empty vertex set.
    ///
    /// Both measures are defined over nonempty subsets; an empty subset is a
    /// caller bug, not a vacuous pass or fail.
    InvalidCommunity,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyInput => write!(f, "empty input provided"),
            Error::InvalidMeasure(name) => {
                write!(
                    f,
                    "unknown community measure '{name}': expected 'strong' or 'weak'"
                )
            }
            Error::InvalidCommunity => {
                write!(f, "community predicate evaluated on an empty vertex set")
            }
        }
    }
}

impl std::error::Error for Error {}
