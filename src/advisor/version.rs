//! Version string parsing and gap scoring.

use std::sync::LazyLock;

use regex::Regex;

/// Leading `MAJOR.MINOR.PATCH` shape. Anything after the patch digits is ignored.
static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+)\.([0-9]+)\.[0-9]+").expect("VERSION_REGEX must compile")
});

/// The major and minor components of a version string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedVersion {
    /// First numeric component.
    pub major: u64,
    /// Second numeric component.
    pub minor: u64,
}

impl ParsedVersion {
    /// Parse the leading `MAJOR.MINOR.PATCH` of a version string.
    ///
    /// Returns `None` when the string does not start with that shape. Components
    /// too large for a `u64` saturate at `u64::MAX`.
    ///
    /// ```
    /// use vergap::advisor::ParsedVersion;
    ///
    /// let v = ParsedVersion::parse("2.5.1-beta").unwrap();
    /// assert_eq!((v.major, v.minor), (2, 5));
    /// assert!(ParsedVersion::parse("2.5").is_none());
    /// ```
    pub fn parse(raw: &str) -> Option<Self> {
        let caps = VERSION_REGEX.captures(raw)?;
        let major = saturating_component(caps.get(1)?.as_str());
        let minor = saturating_component(caps.get(2)?.as_str());
        Some(Self { major, minor })
    }

    /// Collapse major and minor into one comparable number: `major * 10 + minor`.
    ///
    /// Only ordered correctly while minor stays below 10.
    pub fn score(&self) -> i128 {
        i128::from(self.major) * 10 + i128::from(self.minor)
    }

    /// Number of score steps `latest` is ahead of `self`. Negative when `self` is newer.
    pub fn steps_behind(&self, latest: &ParsedVersion) -> i128 {
        latest.score() - self.score()
    }
}

/// Parse an all-digit capture, clamping values past `u64::MAX`.
fn saturating_component(digits: &str) -> u64 {
    digits.parse().unwrap_or(u64::MAX)
}
