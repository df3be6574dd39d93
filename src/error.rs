use crate::level::Level;

/// Errors that can occur when parsing a version string.
#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
pub enum ParseError {
    /// The version string does not start with `MAJOR.MINOR.PATCH`.
    #[error("Version string `{version_string}` should start with `MAJOR.MINOR.PATCH`")]
    Malformed {
        /// The offending version string
        version_string: String,
    },

    /// A numeric component has too many digits to be represented.
    #[error("Value `{digits}` for {component} is too large")]
    NumberTooLarge {
        /// The name of the component, e.g. `major`
        component: &'static str,
        /// The digits found in the version string
        digits: String,
    },
}

/// Errors that can occur when incrementing a version.
#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
pub enum IncrementError {
    /// A pre-release increment was requested on a version without a pre-release.
    #[error("Pre-release should be present to be incremented")]
    BlankPreRelease,

    /// The incremented value would not fit.
    #[error("Incrementing {level} of version `{version}` would overflow")]
    Overflow {
        /// The level being incremented
        level: Level,
        /// The version that was incremented
        version: String,
    },
}

/// Errors that can occur when naming an increment level.
#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
pub enum LevelError {
    /// The name does not match any level.
    #[error("Unknown level `{name}`, expected one of: major, minor, patch, pre-release")]
    Unknown {
        /// The unrecognized name
        name: String,
    },
}

/// A union of the errors above, returned by the one-shot helpers that both parse and increment.
#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
pub enum CompositeError {
    /// See [`ParseError`].
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// See [`IncrementError`].
    #[error(transparent)]
    Increment(#[from] IncrementError),

    /// See [`LevelError`].
    #[error(transparent)]
    Level(#[from] LevelError),
}
