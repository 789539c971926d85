use crate::domain::ReleaseType;
use crate::error::{Result, VersionDeterminerError};
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;

const SNAPSHOT_SUFFIX: &str = "-SNAPSHOT";

/// Project version as reported by the build tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub snapshot: bool,
}

impl Version {
    /// Create a new release (non-snapshot) version
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
            snapshot: false,
        }
    }

    /// Create a new `-SNAPSHOT` version
    pub fn snapshot(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            snapshot: true,
            ..Version::new(major, minor, patch)
        }
    }

    /// Dissect a build-tool version string such as "1.4.9-SNAPSHOT".
    ///
    /// The text must start with `MAJOR.MINOR.PATCH`, optionally followed by
    /// `-SNAPSHOT`. Surrounding whitespace is ignored and anything after the
    /// matched prefix is discarded.
    pub fn dissect(text: &str) -> Result<Self> {
        let re = Regex::new(r"^(\d+)\.(\d+)\.(\d+)(-SNAPSHOT)?")
            .map_err(|e| VersionDeterminerError::version(e.to_string()))?;

        let trimmed = text.trim();
        let captures = re.captures(trimmed).ok_or_else(|| {
            VersionDeterminerError::version(format!(
                "Invalid version format: '{}' - expected MAJOR.MINOR.PATCH[-SNAPSHOT]",
                trimmed
            ))
        })?;

        let component = |index: usize, name: &str| -> Result<u32> {
            let digits = &captures[index];
            digits.parse::<u32>().map_err(|_| {
                VersionDeterminerError::version(format!("Invalid {} version: {}", name, digits))
            })
        };

        Ok(Version {
            major: component(1, "major")?,
            minor: component(2, "minor")?,
            patch: component(3, "patch")?,
            snapshot: captures.get(4).is_some(),
        })
    }

    /// Compute the release version for the requested release type.
    ///
    /// - **Major**: major += 1, minor = 0, patch = 0
    /// - **Minor**: minor += 1, patch = 0
    /// - **Patch**: unchanged, the current version minus `-SNAPSHOT` is already the patch release
    ///
    /// The result is never a snapshot.
    pub fn bump(&self, release_type: ReleaseType) -> Result<Self> {
        let bumped = match release_type {
            ReleaseType::Major => Version::new(increment(self.major, "major")?, 0, 0),
            ReleaseType::Minor => Version::new(self.major, increment(self.minor, "minor")?, 0),
            ReleaseType::Patch => Version::new(self.major, self.minor, self.patch),
        };
        Ok(bumped)
    }

    /// The development version that follows this release: patch + 1, tagged `-SNAPSHOT`.
    pub fn next_snapshot(&self) -> Result<Self> {
        Ok(Version::snapshot(
            self.major,
            self.minor,
            increment(self.patch, "patch")?,
        ))
    }

    /// Convert into a `semver::Version`, carrying `SNAPSHOT` as the pre-release tag.
    pub fn to_semver(&self) -> semver::Version {
        let mut version = semver::Version::new(
            u64::from(self.major),
            u64::from(self.minor),
            u64::from(self.patch),
        );
        if self.snapshot {
            // "SNAPSHOT" is a valid alphanumeric identifier
            version.pre = semver::Prerelease::new(&SNAPSHOT_SUFFIX[1..]).unwrap_or_default();
        }
        version
    }
}

fn increment(value: u32, name: &str) -> Result<u32> {
    value.checked_add(1).ok_or_else(|| {
        VersionDeterminerError::version(format!("Cannot increment {} version {}", name, value))
    })
}

/// Semver precedence: a snapshot sorts before its release.
impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_semver().cmp(&other.to_semver())
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if self.snapshot {
            f.write_str(SNAPSHOT_SUFFIX)?;
        }
        Ok(())
    }
}
