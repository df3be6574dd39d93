use crate::{
    config::Config,
    error::{IncrementError, ParseError},
    level::Level,
    pre_release::PreRelease,
};
use core::{
    cmp::Ordering,
    fmt::{self, Display},
    str::FromStr,
};

/// Consumes a version string from the front. Digit runs are greedy.
struct Scanner<'vs> {
    version_str: &'vs str,
    rest: &'vs [u8],
}

impl<'vs> Scanner<'vs> {
    fn new(version_str: &'vs str) -> Self {
        Self {
            version_str,
            rest: version_str.as_bytes(),
        }
    }

    fn malformed(&self) -> ParseError {
        ParseError::Malformed {
            version_string: self.version_str.to_owned(),
        }
    }

    fn number(&mut self, component: &'static str) -> Result<u64, ParseError> {
        let width = self.rest.iter().take_while(|b| b.is_ascii_digit()).count();
        if width == 0 {
            return Err(self.malformed());
        }

        let (digits, rest) = self.rest.split_at(width);
        let mut value: u64 = 0;
        for digit in digits {
            value = value
                .checked_mul(10)
                .and_then(|value| value.checked_add(u64::from(digit - b'0')))
                .ok_or_else(|| ParseError::NumberTooLarge {
                    component,
                    // only ascii digits, so this is valid utf-8
                    digits: String::from_utf8_lossy(digits).into_owned(),
                })?;
        }

        self.rest = rest;
        Ok(value)
    }

    fn dot(&mut self) -> Result<(), ParseError> {
        match self.rest.split_first() {
            Some((b'.', rest)) => {
                self.rest = rest;
                Ok(())
            }
            _ => Err(self.malformed()),
        }
    }

    /// Consumes `MAJOR.MINOR.PATCH`.
    fn core(&mut self) -> Result<(u64, u64, u64), ParseError> {
        let major = self.number("major")?;
        self.dot()?;
        let minor = self.number("minor")?;
        self.dot()?;
        let patch = self.number("patch")?;
        Ok((major, minor, patch))
    }

    /// Everything not yet consumed. Only ascii has been consumed so far, so this is on a char
    /// boundary.
    fn remainder(&self) -> &'vs str {
        &self.version_str[self.version_str.len() - self.rest.len()..]
    }
}

/// A `MAJOR.MINOR.PATCH` version with an optional `-NAME.NUMBER` [pre-release](PreRelease).
///
/// Versions are values: they are never modified after they are created. Incrementing or attaching
/// a pre-release returns a new version, so a version can safely be used as a sort or map key.
///
/// # Ordering
///
/// Versions are totally ordered by major, minor and patch (numerically). When those are equal, a
/// release is greater than any of its pre-releases, and pre-releases are ordered by name, then
/// number.
///
/// ```
/// use vseries::prelude::*;
///
/// let release = Version::parse("1.0.0").unwrap();
/// let rc_9 = Version::parse("1.0.0-rc.9").unwrap();
/// let rc_10 = Version::parse("1.0.0-rc.10").unwrap();
/// assert!(rc_9 < rc_10);
/// assert!(rc_10 < release);
/// ```
///
/// # Incrementing
///
/// ```
/// use vseries::prelude::*;
///
/// let version = Version::parse("3.0.99-rc.10").unwrap();
/// assert_eq!("3.0.100-rc.1", version.next(&Level::Patch).unwrap().to_string());
/// assert_eq!("3.0.99-rc.11", version.next(&Level::PreRelease).unwrap().to_string());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    pre_release: PreRelease,
}

impl Version {
    /// Returns a release version (one without a pre-release).
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            pre_release: PreRelease::ABSENT,
        }
    }

    /// Parses a version string.
    ///
    /// The string must start with `MAJOR.MINOR.PATCH`, where each part is one or more ASCII digits.
    /// Whatever follows is parsed as a [`PreRelease`] with [`PreRelease::parse`], so a suffix that
    /// isn't shaped like `-NAME.NUMBER` is ignored and the version is a release.
    ///
    /// # Errors
    ///
    /// - [`ParseError::Malformed`] if the string does not start with `MAJOR.MINOR.PATCH`.
    /// - [`ParseError::NumberTooLarge`] if one of those parts does not fit in a `u64`.
    pub fn parse(version_str: &str) -> Result<Self, ParseError> {
        let mut scanner = Scanner::new(version_str);
        let (major, minor, patch) = scanner.core().map_err(|err| {
            tracing::debug!(version_str, %err, "rejected version string");
            err
        })?;

        Ok(Self {
            major,
            minor,
            patch,
            pre_release: PreRelease::parse(scanner.remainder()),
        })
    }

    /// The major value.
    pub fn major(&self) -> u64 {
        self.major
    }

    /// The minor value.
    pub fn minor(&self) -> u64 {
        self.minor
    }

    /// The patch value.
    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// The pre-release, which may be absent.
    pub fn pre_release(&self) -> &PreRelease {
        &self.pre_release
    }

    /// Returns true if this version has a pre-release.
    pub fn is_pre_release(&self) -> bool {
        self.pre_release.is_present()
    }

    /// Returns a new version where the value of the given [`Level`] is incremented.
    ///
    /// - [`Level::Major`], [`Level::Minor`] and [`Level::Patch`] reset the lesser of the three to
    ///   zero. A pre-release keeps its name and its number restarts at
    ///   [`DEFAULT_PRE_RELEASE_INITIAL_NUMBER`](crate::DEFAULT_PRE_RELEASE_INITIAL_NUMBER).
    /// - [`Level::PreRelease`] increments the pre-release number and leaves the rest alone.
    ///
    /// Use [`Version::next_with`] to start pre-releases at a different number.
    ///
    /// ```
    /// use vseries::prelude::*;
    ///
    /// let version = Version::parse("3.0.1-rc.4").unwrap();
    /// assert_eq!("4.0.0-rc.1", version.next(&Level::Major).unwrap().to_string());
    /// assert_eq!("3.1.0-rc.1", version.next(&Level::Minor).unwrap().to_string());
    /// assert_eq!("3.0.2-rc.1", version.next(&Level::Patch).unwrap().to_string());
    /// assert_eq!("3.0.1-rc.5", version.next(&Level::PreRelease).unwrap().to_string());
    /// ```
    ///
    /// # Errors
    ///
    /// - [`IncrementError::BlankPreRelease`] if `level` is [`Level::PreRelease`] and this version
    ///   has no pre-release.
    /// - [`IncrementError::Overflow`] if the incremented value does not fit in a `u64`.
    pub fn next(&self, level: &Level) -> Result<Self, IncrementError> {
        self.next_with(level, &Config::default())
    }

    /// Like [`Version::next`], but pre-release numbers restart at the number in `config`.
    pub fn next_with(&self, level: &Level, config: &Config) -> Result<Self, IncrementError> {
        let restarted = || self.pre_release.renumbered(config.pre_release_initial_number);
        let incremented = |value: u64| {
            value.checked_add(1).ok_or_else(|| IncrementError::Overflow {
                level: *level,
                version: self.to_string(),
            })
        };

        let next = match level {
            Level::Major => Self {
                major: incremented(self.major)?,
                minor: 0,
                patch: 0,
                pre_release: restarted(),
            },
            Level::Minor => Self {
                major: self.major,
                minor: incremented(self.minor)?,
                patch: 0,
                pre_release: restarted(),
            },
            Level::Patch => Self {
                major: self.major,
                minor: self.minor,
                patch: incremented(self.patch)?,
                pre_release: restarted(),
            },
            Level::PreRelease => Self {
                pre_release: self.pre_release.next()?,
                ..self.clone()
            },
        };

        tracing::trace!(from = %self, to = %next, %level, "incremented version");
        Ok(next)
    }

    /// Returns a new version with a pre-release of the given name.
    ///
    /// If this version already has a pre-release with that name, the new version is equal to this
    /// one. Otherwise, the pre-release is replaced (or added) and numbered
    /// [`DEFAULT_PRE_RELEASE_INITIAL_NUMBER`](crate::DEFAULT_PRE_RELEASE_INITIAL_NUMBER).
    ///
    /// ```
    /// use vseries::prelude::*;
    ///
    /// let version = Version::parse("2.0.0").unwrap();
    /// let beta = version.with_pre_release("beta");
    /// assert_eq!("2.0.0-beta.1", beta.to_string());
    ///
    /// let beta_3 = Version::parse("2.0.0-beta.3").unwrap();
    /// assert_eq!(beta_3, beta_3.with_pre_release("beta"));
    /// assert_eq!("2.0.0-rc.1", beta_3.with_pre_release("rc").to_string());
    /// ```
    pub fn with_pre_release(&self, name: &str) -> Self {
        self.with_pre_release_with(name, &Config::default())
    }

    /// Like [`Version::with_pre_release`], but a new pre-release is numbered with the number in
    /// `config`.
    ///
    /// The name is used as is. An empty name formats as `-.N`, which parses back with the name
    /// `-`.
    pub fn with_pre_release_with(&self, name: &str, config: &Config) -> Self {
        if self.pre_release.name() == Some(name) {
            return self.clone();
        }

        Self {
            pre_release: PreRelease::with_number(name, config.pre_release_initial_number),
            ..self.clone()
        }
    }

    /// Returns the release version with the same major, minor and patch.
    pub fn without_pre_release(&self) -> Self {
        Self::new(self.major, self.minor, self.patch)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(|| {
                // a release is greater than its pre-releases, which is the opposite of how
                // PreRelease orders an absent value
                match (&self.pre_release, &other.pre_release) {
                    (a, b) if a.is_absent() && b.is_absent() => Ordering::Equal,
                    (a, _) if a.is_absent() => Ordering::Greater,
                    (_, b) if b.is_absent() => Ordering::Less,
                    (a, b) => a.cmp_present(b).unwrap_or(Ordering::Equal),
                }
            })
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl Display for Version {
    /// Returns the rendered version string
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}{}",
            self.major, self.minor, self.patch, self.pre_release
        )
    }
}
