//! Where the current project version comes from
//!
//! The calculator never talks to the build tool directly. It reads the current
//! version through the [VersionSource] trait so the same pipeline can run
//! against a real build tool or a fixed string.
//!
//! - [CommandSource]: runs a build-tool command and captures its stdout
//! - [FixedSource]: returns a version given up front (`--current`, tests)

pub mod command;
pub mod fixed;

pub use command::CommandSource;
pub use fixed::FixedSource;

use crate::error::Result;

/// Provider of the project's current version text.
///
/// Implementations return the raw text. Validation is left to
/// [Version::dissect](crate::domain::Version::dissect), so a source that
/// produces garbage simply fails dissection.
pub trait VersionSource {
    /// Read the current version text.
    ///
    /// # Returns
    /// * `Ok(String)` - Raw text, possibly with surrounding whitespace
    /// * `Err` - If the source could not be consulted at all
    fn current_version(&self) -> Result<String>;

    /// Short human-readable description used in status output.
    fn describe(&self) -> String;
}
