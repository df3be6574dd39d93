use crate::{config::DEFAULT_PRE_RELEASE_INITIAL_NUMBER, error::IncrementError, level::Level};
use core::{
    cmp::Ordering,
    convert::Infallible,
    fmt::{self, Display},
    str::FromStr,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Track {
    name: String,
    number: u64,
}

/// The optional `-NAME.NUMBER` suffix of a version, such as `-rc.1` or `-alpha.9`.
///
/// A pre-release is either *present*, with both a name and a number, or *absent*, which is the
/// state of a release version. There is no way to hold a name without a number or vice versa.
///
/// Like [`Version`](crate::Version), a pre-release is never modified in place. [`PreRelease::next`]
/// returns a new value.
///
/// # Ordering
///
/// Two present pre-releases are ordered by name (lexicographically), then by number
/// (numerically, so `rc.10 > rc.9`). A present pre-release is greater than an absent one.
///
/// Note that this is *not* the order versions use: a release version is greater than a
/// pre-release of the same `MAJOR.MINOR.PATCH`, and [`Version`](crate::Version) implements that
/// rule itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PreRelease {
    track: Option<Track>,
}

impl PreRelease {
    /// The absent pre-release.
    pub const ABSENT: PreRelease = PreRelease { track: None };

    /// Returns a present pre-release with the given name, numbered
    /// [`DEFAULT_PRE_RELEASE_INITIAL_NUMBER`].
    ///
    /// The name should be non-empty and should not itself end with `.` and digits, or the formatted
    /// pre-release will not parse back to the same value.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_number(name, DEFAULT_PRE_RELEASE_INITIAL_NUMBER)
    }

    /// Returns a present pre-release with the given name and number.
    pub fn with_number(name: impl Into<String>, number: u64) -> Self {
        Self {
            track: Some(Track {
                name: name.into(),
                number,
            }),
        }
    }

    /// Parses the suffix of a version string that follows `MAJOR.MINOR.PATCH`.
    ///
    /// The suffix is an optional leading `-` (or `.`), a name, a `.`, and a number. The name extends
    /// to the last `.` that is followed by a digit, so `-rc.1.2` has name `rc.1` and number `2`.
    /// Anything after the digits of the number is ignored, so `-rc.1+sha` is `rc.1`.
    ///
    /// This never fails: a suffix of any other shape, including the empty string, is an absent
    /// pre-release.
    ///
    /// ```
    /// use vseries::PreRelease;
    ///
    /// assert_eq!(PreRelease::with_number("rc", 10), PreRelease::parse("-rc.10"));
    /// assert_eq!(PreRelease::with_number("rc", 10), PreRelease::parse(".rc.10"));
    /// assert!(PreRelease::parse("").is_absent());
    /// assert_eq!(PreRelease::with_number("rc", 1), PreRelease::parse("-rc.1+sha"));
    /// assert!(PreRelease::parse("").is_absent());
    /// assert!(PreRelease::parse("-rc").is_absent());
    /// ```
    pub fn parse(suffix: &str) -> Self {
        let bytes = suffix.as_bytes();
        let Some(dot) = (0..bytes.len())
            .rev()
            .find(|&idx| bytes[idx] == b'.' && bytes.get(idx + 1).is_some_and(u8::is_ascii_digit))
        else {
            return Self::ABSENT;
        };

        let width = bytes[dot + 1..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        let digits = &suffix[dot + 1..dot + 1 + width];
        let Ok(number) = digits.parse::<u64>() else {
            tracing::debug!(suffix, "pre-release number too large, treating as absent");
            return Self::ABSENT;
        };

        let head = &suffix[..dot];
        // the separator is only consumed if a name remains after it
        let name = match head.strip_prefix(|c: char| c == '-' || c == '.') {
            Some(rest) if !rest.is_empty() => rest,
            _ => head,
        };
        if name.is_empty() {
            return Self::ABSENT;
        }

        Self::with_number(name, number)
    }

    /// Returns a new pre-release with the same name and the number incremented by one.
    ///
    /// # Errors
    ///
    /// - [`IncrementError::BlankPreRelease`] if this pre-release is absent.
    /// - [`IncrementError::Overflow`] if the number is already `u64::MAX`.
    pub fn next(&self) -> Result<Self, IncrementError> {
        let track = self.track.as_ref().ok_or(IncrementError::BlankPreRelease)?;
        let number = track
            .number
            .checked_add(1)
            .ok_or_else(|| IncrementError::Overflow {
                level: Level::PreRelease,
                version: self.to_string(),
            })?;
        Ok(Self::with_number(track.name.clone(), number))
    }

    /// Returns a pre-release with the same name and the given number, or an absent one if this
    /// one is absent.
    pub(crate) fn renumbered(&self, number: u64) -> Self {
        match &self.track {
            Some(track) => Self::with_number(track.name.clone(), number),
            None => Self::ABSENT,
        }
    }

    /// Returns true if this pre-release has a name and number.
    pub fn is_present(&self) -> bool {
        self.track.is_some()
    }

    /// Returns true if this is the pre-release of a release version.
    pub fn is_absent(&self) -> bool {
        self.track.is_none()
    }

    /// The name, e.g. `rc` in `-rc.1`.
    pub fn name(&self) -> Option<&str> {
        self.track.as_ref().map(|track| track.name.as_str())
    }

    /// The number, e.g. `1` in `-rc.1`.
    pub fn number(&self) -> Option<u64> {
        self.track.as_ref().map(|track| track.number)
    }

    /// Compares two present pre-releases by name, then number. Returns `None` if either is
    /// absent.
    pub(crate) fn cmp_present(&self, other: &Self) -> Option<Ordering> {
        match (&self.track, &other.track) {
            (Some(a), Some(b)) => Some(
                a.name
                    .cmp(&b.name)
                    .then_with(|| a.number.cmp(&b.number)),
            ),
            _ => None,
        }
    }
}

impl PartialOrd for PreRelease {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PreRelease {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_present(), other.is_present()) {
            (false, false) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (true, true) => self.cmp_present(other).unwrap_or(Ordering::Equal),
        }
    }
}

impl FromStr for PreRelease {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl Display for PreRelease {
    /// Writes `-NAME.NUMBER`, or nothing if absent.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.track {
            Some(Track { name, number }) => write!(f, "-{name}.{number}"),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("-rc.1", "rc", 1)]
    #[case("rc.1", "rc", 1)]
    #[case(".rc.10", "rc", 10)]
    #[case("-alpha.9", "alpha", 9)]
    #[case("-rc.1.2", "rc.1", 2)]
    #[case("-rc.007", "rc", 7)]
    #[case("--rc.1", "-rc", 1)]
    #[case("-.5", "-", 5)]
    #[case("-😉.3", "😉", 3)]
    #[case("-rc.1a", "rc", 1)]
    #[case("-rc.1+sha", "rc", 1)]
    #[case("-rc.1 ", "rc", 1)]
    #[case("-rc.12.x", "rc", 12)]
    fn test_parse_present(#[case] suffix: &str, #[case] name: &str, #[case] number: u64) {
        let pre_release = PreRelease::parse(suffix);
        assert_eq!(Some(name), pre_release.name());
        assert_eq!(Some(number), pre_release.number());
    }

    #[rstest]
    #[case("")]
    #[case("-")]
    #[case("-rc")]
    #[case("-rc.")]
    #[case(".1")]
    #[case("-rc.x")]
    #[case("-rc.99999999999999999999999")]
    fn test_parse_absent(#[case] suffix: &str) {
        assert!(PreRelease::parse(suffix).is_absent());
    }

    #[test]
    fn test_new_uses_default_number() {
        let pre_release = PreRelease::new("beta");
        assert_eq!(Some("beta"), pre_release.name());
        assert_eq!(Some(DEFAULT_PRE_RELEASE_INITIAL_NUMBER), pre_release.number());
    }

    #[test]
    fn test_present_absent_exclusive() {
        for pre_release in [PreRelease::ABSENT, PreRelease::new("rc")] {
            assert_ne!(pre_release.is_present(), pre_release.is_absent());
        }
    }

    #[test]
    fn test_next() {
        let pre_release = PreRelease::with_number("alpha", 9);
        let next = pre_release.next().unwrap();
        assert_eq!(PreRelease::with_number("alpha", 10), next);
        // unchanged
        assert_eq!(Some(9), pre_release.number());
    }

    #[test]
    fn test_next_absent() {
        assert_eq!(Err(IncrementError::BlankPreRelease), PreRelease::ABSENT.next());
    }

    #[test]
    fn test_next_overflow() {
        let next = PreRelease::with_number("rc", u64::MAX).next();
        assert!(matches!(
            next,
            Err(IncrementError::Overflow {
                level: Level::PreRelease,
                ..
            })
        ));
    }

    #[rstest]
    #[case(PreRelease::ABSENT, PreRelease::ABSENT, Ordering::Equal)]
    #[case(PreRelease::new("rc"), PreRelease::ABSENT, Ordering::Greater)]
    #[case(PreRelease::ABSENT, PreRelease::new("rc"), Ordering::Less)]
    #[case(PreRelease::with_number("rc", 10), PreRelease::with_number("rc", 9), Ordering::Greater)]
    #[case(PreRelease::with_number("rc", 2), PreRelease::with_number("rc", 7), Ordering::Less)]
    #[case(PreRelease::with_number("rc", 1), PreRelease::with_number("beta", 9), Ordering::Greater)]
    #[case(PreRelease::with_number("alpha", 9), PreRelease::with_number("beta", 1), Ordering::Less)]
    #[case(PreRelease::with_number("10", 1), PreRelease::with_number("9", 1), Ordering::Less)]
    #[case(PreRelease::with_number("rc", 3), PreRelease::with_number("rc", 3), Ordering::Equal)]
    fn test_cmp(#[case] a: PreRelease, #[case] b: PreRelease, #[case] expected: Ordering) {
        assert_eq!(expected, a.cmp(&b));
    }

    #[rstest]
    #[case(PreRelease::ABSENT, "")]
    #[case(PreRelease::with_number("rc", 10), "-rc.10")]
    #[case(PreRelease::parse(".rc.10"), "-rc.10")]
    fn test_display(#[case] pre_release: PreRelease, #[case] expected: &str) {
        assert_eq!(expected, pre_release.to_string());
    }

    #[test]
    fn test_renumbered() {
        assert_eq!(
            PreRelease::with_number("rc", 0),
            PreRelease::with_number("rc", 10).renumbered(0)
        );
        assert!(PreRelease::ABSENT.renumbered(1).is_absent());
    }
}
