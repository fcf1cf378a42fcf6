use crate::error::{ReleaseCheckError, Result};
use std::cmp::Ordering;
use std::fmt;

/// Version shape accepted by the updater.
///
/// Parsed from "MAJOR.MINOR[.PATCH[.BUILD]][-PRERELEASE]" strings such as
/// "1.2", "1.2.3.4" or "1.3.0-alpha2". This is intentionally not a general
/// semver implementation; it supports exactly the four numeric components
/// plus a prerelease tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub build: u32,
    pub prerelease: String,
}

impl Version {
    /// Create a new version without a prerelease tag
    pub fn new(major: u32, minor: u32, patch: u32, build: u32) -> Self {
        Version {
            major,
            minor,
            patch,
            build,
            prerelease: String::new(),
        }
    }

    /// Parse a version string (e.g., "1.2.0.1-alpha2").
    ///
    /// Everything after the first `-` is the prerelease tag, further `-`
    /// characters included. The numeric core needs at least MAJOR.MINOR;
    /// PATCH and BUILD default to 0 when absent, segments past the fourth
    /// are ignored.
    ///
    /// # Arguments
    /// * `input` - Version string to parse
    ///
    /// # Returns
    /// * `Ok(Version)` - Successfully parsed version
    /// * `Err` - If fewer than two numeric segments are present, or a
    ///   present segment is not a non-negative integer
    pub fn parse(input: &str) -> Result<Self> {
        let (core, prerelease) = match input.split_once('-') {
            Some((core, tag)) => (core, tag.to_string()),
            None => (input, String::new()),
        };

        let parts: Vec<&str> = core.split('.').collect();
        if parts.len() < 2 {
            return Err(ReleaseCheckError::version(format!(
                "Invalid version format: '{}' - expected at least MAJOR.MINOR",
                input
            )));
        }

        let major = parse_component(parts[0], input)?;
        let minor = parse_component(parts[1], input)?;
        let patch = if parts.len() >= 3 {
            parse_component(parts[2], input)?
        } else {
            0
        };
        let build = if parts.len() >= 4 {
            parse_component(parts[3], input)?
        } else {
            0
        };

        Ok(Version {
            major,
            minor,
            patch,
            build,
            prerelease,
        })
    }
}

fn parse_component(part: &str, input: &str) -> Result<u32> {
    part.parse::<u32>().map_err(|_| {
        ReleaseCheckError::version(format!(
            "Invalid version component '{}' in '{}'",
            part, input
        ))
    })
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.cmp(&other.minor))
            .then_with(|| self.patch.cmp(&other.patch))
            .then_with(|| self.build.cmp(&other.build))
            .then_with(|| cmp_prerelease(&self.prerelease, &other.prerelease))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// A tagged build precedes its untagged release; tags otherwise compare by
// code point.
fn cmp_prerelease(a: &str, b: &str) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.cmp(b),
    }
}

/// Compare two version strings.
///
/// Fields are evaluated in priority order (major, minor, patch, build,
/// prerelease) and the first unequal field decides the outcome.
///
/// # Arguments
/// * `a` - First version string
/// * `b` - Second version string
///
/// # Returns
/// * `Ok(Ordering)` - How `a` relates to `b`
/// * `Err` - If either input fails to parse; the error names the offending
///   string
pub fn compare(a: &str, b: &str) -> Result<Ordering> {
    Ok(Version::parse(a)?.cmp(&Version::parse(b)?))
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if self.build != 0 {
            write!(f, ".{}", self.build)?;
        }
        if !self.prerelease.is_empty() {
            write!(f, "-{}", self.prerelease)?;
        }
        Ok(())
    }
}
