//! # vseries
//!
//! A library for parsing, ordering and incrementing versions of the form
//! `MAJOR.MINOR.PATCH[-NAME.NUMBER]`, such as `1.4.0` or `2.0.0-rc.3`.
//!
//! It's meant for release tooling that needs to know which of two version tags is newer, and what
//! the next version should be.
//!
//! ## Examples
//!
//! Quickly get a next version:
//!
//! ```
//! use vseries::prelude::*;
//!
//! let next = vseries::next_version(
//!   "1.2.3-rc.4",         // current version string
//!   &Level::PreRelease,   // the level to increment
//! ).unwrap();
//! assert_eq!(next, "1.2.3-rc.5");
//! ```
//!
//! Or, break down the steps for reusability:
//!
//! ```
//! use vseries::prelude::*;
//!
//! let version = Version::parse("1.2.3").unwrap();
//! let next = version.next(&Level::Minor).unwrap().with_pre_release("beta");
//! assert_eq!("1.3.0-beta.1", next.to_string());
//! assert!(next > version);
//! ```
//!
//! ## Important Terms
//!
//! - **Version**: `MAJOR.MINOR.PATCH` and an optional pre-release. It's modeled by the [`Version`]
//!   struct. Versions can be incremented to new ones and compared amongst each other.
//! - **Pre-release**: The optional `-NAME.NUMBER` suffix, like `-alpha.9`. It's modeled by the
//!   [`PreRelease`] struct, which may be *absent*.
//! - **Level**: Which part of a version to increment. It's modeled by the [`Level`] enum.
//!
//! ## Ordering
//!
//! | Comparison | Why |
//! |---|---|
//! | `1.0.0 < 1.1.0 < 2.0.0` | major, minor and patch are compared numerically, in that order |
//! | `1.0.0-rc.1 < 1.0.0` | a release is greater than its pre-releases |
//! | `1.0.0-rc.9 < 1.0.0-rc.10` | pre-release numbers are compared numerically |
//! | `1.0.0-beta.9 < 1.0.0-rc.1` | pre-release names are compared before numbers |
//!
//! ## Incrementing
//!
//! | Level | `3.0.99-rc.10` becomes | `3.0.99` becomes |
//! |---|---|---|
//! | [`Level::Major`] | `4.0.0-rc.1` | `4.0.0` |
//! | [`Level::Minor`] | `3.1.0-rc.1` | `3.1.0` |
//! | [`Level::Patch`] | `3.0.100-rc.1` | `3.0.100` |
//! | [`Level::PreRelease`] | `3.0.99-rc.11` | error: [`IncrementError::BlankPreRelease`] |
//!
//! The number a pre-release restarts at is configurable with [`Config`].
//!
//! ## Prelude
//!
//! vseries provides a prelude module for convenience. It contains everything needed to interact
//! with the library.
//!
//! Use it with:
//!
//! ```
//! use vseries::prelude::*;
//! ```
#![warn(missing_docs)]

mod config;
mod error;
mod level;
mod pre_release;
mod version;

use core::cmp::Ordering;

pub use crate::config::{Config, DEFAULT_PRE_RELEASE_INITIAL_NUMBER};
pub use crate::error::{CompositeError, IncrementError, LevelError, ParseError};
pub use crate::level::Level;
pub use crate::pre_release::PreRelease;
pub use crate::version::Version;

/// Parses a version string. See [`Version::parse`].
pub fn parse_version(version_str: &str) -> Result<Version, ParseError> {
    Version::parse(version_str)
}

/// Compares two versions. See [`Version`] for the ordering rules.
pub fn compare_versions(a: &Version, b: &Version) -> Ordering {
    a.cmp(b)
}

/// Returns the version after `version` at the given level. See [`Version::next`].
pub fn increment_version(version: &Version, level: &Level) -> Result<Version, IncrementError> {
    version.next(level)
}

/// Returns `version` with a pre-release named `name`. See [`Version::with_pre_release`].
pub fn attach_pre_release(version: &Version, name: &str) -> Version {
    version.with_pre_release(name)
}

/// Formats a version as a string, e.g. `1.2.3-rc.4`.
pub fn format_version(version: &Version) -> String {
    version.to_string()
}

/// Parses a version string, increments it at the given level and returns the formatted result.
///
/// ```
/// use vseries::prelude::*;
///
/// assert_eq!(Ok("13.0.0".to_string()), vseries::next_version("12.3.19", &Level::Major));
/// assert!(vseries::next_version("3.0.99", &Level::PreRelease).is_err());
/// ```
pub fn next_version(version_str: &str, level: &Level) -> Result<String, CompositeError> {
    let version = Version::parse(version_str)?;
    Ok(version.next(level)?.to_string())
}

/// Like [`next_version`], but the level is given by name, e.g. `minor` or `pre-release`. See
/// [`Level`]'s `FromStr` implementation for the accepted names.
///
/// ```
/// use vseries::prelude::*;
///
/// assert_eq!(
///     Ok("1.2.3-rc.5".to_string()),
///     vseries::next_version_by_name("1.2.3-rc.4", "pre-release")
/// );
/// assert!(matches!(
///     vseries::next_version_by_name("1.2.3", "build"),
///     Err(CompositeError::Level(LevelError::Unknown { .. }))
/// ));
/// ```
pub fn next_version_by_name(
    version_str: &str,
    level_name: &str,
) -> Result<String, CompositeError> {
    let level = level_name.parse::<Level>()?;
    next_version(version_str, &level)
}

/// A convenience module appropriate for glob imports (`use vseries::prelude::*;`).
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::CompositeError;
    #[doc(no_inline)]
    pub use crate::Config;
    #[doc(no_inline)]
    pub use crate::IncrementError;
    #[doc(no_inline)]
    pub use crate::Level;
    #[doc(no_inline)]
    pub use crate::LevelError;
    #[doc(no_inline)]
    pub use crate::ParseError;
    #[doc(no_inline)]
    pub use crate::PreRelease;
    #[doc(no_inline)]
    pub use crate::Version;
}
