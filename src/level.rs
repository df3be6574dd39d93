use crate::error::LevelError;
use core::{
    fmt::{self, Display},
    str::FromStr,
};

/// A level of a version that can be incremented, like `major` or `pre-release`.
///
/// Incrementing a level resets the levels below it: see [`Version::next`](crate::Version::next).
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum Level {
    /// The major level.
    Major,
    /// The minor level.
    Minor,
    /// The patch level.
    Patch,
    /// The number of a pre-release, e.g. the `3` in `1.2.0-rc.3`.
    PreRelease,
}

impl Level {
    /// Returns every level, from most to least significant.
    pub fn all() -> &'static [Level] {
        &[Level::Major, Level::Minor, Level::Patch, Level::PreRelease]
    }

    pub(crate) fn name(&self) -> &'static str {
        match self {
            Level::Major => "major",
            Level::Minor => "minor",
            Level::Patch => "patch",
            Level::PreRelease => "pre-release",
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Level {
    type Err = LevelError;

    /// Parses a level from its name. `pre_release` and `prerelease` are accepted as aliases of
    /// `pre-release`. Matching is case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "major" => Ok(Level::Major),
            "minor" => Ok(Level::Minor),
            "patch" => Ok(Level::Patch),
            "pre-release" | "pre_release" | "prerelease" => Ok(Level::PreRelease),
            _ => Err(LevelError::Unknown {
                name: s.to_owned(),
            }),
        }
    }
}
