//! End-to-end version determination
//!
//! Ties argument parsing, the version source and the domain rules together,
//! independent of clap so the workflow can be driven from tests.

use crate::domain::{OutputMode, ReleaseType, Version};
use crate::error::Result;
use crate::source::VersionSource;
use crate::ui;

/// Arguments for the determination workflow
///
/// `mode` and `release_type` stay raw strings here: validating them is part of
/// the workflow.
#[derive(Debug, Clone, PartialEq)]
pub struct DetermineArgs {
    /// One of `release-version`, `version-tag`, `snapshot-version`
    pub mode: String,

    /// One of `MAJOR`, `MINOR`, `PATCH`
    pub release_type: String,

    /// Prefix for `version-tag` output
    pub tag_prefix: String,

    /// Print status lines to stderr
    pub verbose: bool,
}

/// Result of a successful determination
#[derive(Debug, Clone, PartialEq)]
pub struct Determination {
    /// Version reported by the source
    pub current: Version,

    /// Release version after applying the release type
    pub release: Version,

    /// Rendered string for the requested mode
    pub output: String,
}

/// Compute the next version string.
///
/// 1. Validate mode, then release type (before touching the build tool)
/// 2. Read the current version from `source`
/// 3. Dissect, bump and render
pub fn determine(args: &DetermineArgs, source: &dyn VersionSource) -> Result<Determination> {
    let mode: OutputMode = args.mode.parse()?;
    let release_type: ReleaseType = args.release_type.parse()?;

    if args.verbose {
        ui::display_status(&format!("Reading current version from {}", source.describe()));
    }
    let text = source.current_version()?;
    let current = Version::dissect(&text)?;
    let release = current.bump(release_type)?;
    let output = mode.render(&release, &args.tag_prefix)?;

    if args.verbose {
        ui::display_status(&format!(
            "{} release of {} -> {} ({})",
            release_type, current, release, mode
        ));
    }

    Ok(Determination {
        current,
        release,
        output,
    })
}
