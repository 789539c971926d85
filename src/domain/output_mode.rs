use crate::domain::Version;
use crate::error::{Result, VersionDeterminerError};
use std::fmt;
use std::str::FromStr;

/// Which rendering of the new version the caller asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// "1.5.0"
    ReleaseVersion,
    /// "v1.5.0"
    VersionTag,
    /// "1.5.1-SNAPSHOT"
    SnapshotVersion,
}

impl OutputMode {
    /// Render a bumped release version in this mode.
    ///
    /// `tag_prefix` is only used by [`OutputMode::VersionTag`].
    pub fn render(&self, release: &Version, tag_prefix: &str) -> Result<String> {
        let rendered = match self {
            OutputMode::ReleaseVersion => release.to_semver().to_string(),
            OutputMode::VersionTag => format!("{}{}", tag_prefix, release.to_semver()),
            OutputMode::SnapshotVersion => release.next_snapshot()?.to_semver().to_string(),
        };
        Ok(rendered)
    }
}

impl FromStr for OutputMode {
    type Err = VersionDeterminerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "release-version" => Ok(OutputMode::ReleaseVersion),
            "version-tag" => Ok(OutputMode::VersionTag),
            "snapshot-version" => Ok(OutputMode::SnapshotVersion),
            other => Err(VersionDeterminerError::InvalidMode(other.to_string())),
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputMode::ReleaseVersion => write!(f, "release-version"),
            OutputMode::VersionTag => write!(f, "version-tag"),
            OutputMode::SnapshotVersion => write!(f, "snapshot-version"),
        }
    }
}
