/// The number a pre-release starts at when it is attached to a version or reset by a major, minor
/// or patch increment.
pub const DEFAULT_PRE_RELEASE_INITIAL_NUMBER: u64 = 1;

/// Options that govern how new versions are derived.
///
/// ```
/// use vseries::prelude::*;
///
/// let config = Config::default().with_pre_release_initial_number(0);
/// let version = Version::parse("1.2.3-rc.4").unwrap();
/// let next = version.next_with(&Level::Minor, &config).unwrap();
/// assert_eq!("1.3.0-rc.0", next.to_string());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub(crate) pre_release_initial_number: u64,
}

impl Config {
    /// Returns a copy of this config with the given pre-release initial number.
    pub fn with_pre_release_initial_number(self, number: u64) -> Self {
        Self {
            pre_release_initial_number: number,
        }
    }

    /// The number a freshly attached or reset pre-release starts at.
    pub fn pre_release_initial_number(&self) -> u64 {
        self.pre_release_initial_number
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pre_release_initial_number: DEFAULT_PRE_RELEASE_INITIAL_NUMBER,
        }
    }
}
