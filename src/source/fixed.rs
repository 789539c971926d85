use crate::error::Result;
use crate::source::VersionSource;

/// Version source backed by a literal string
#[derive(Debug, Clone, PartialEq)]
pub struct FixedSource {
    version: String,
}

impl FixedSource {
    /// Create a source that always reports `version`
    pub fn new(version: impl Into<String>) -> Self {
        FixedSource {
            version: version.into(),
        }
    }
}

impl VersionSource for FixedSource {
    fn current_version(&self) -> Result<String> {
        Ok(self.version.clone())
    }

    fn describe(&self) -> String {
        format!("fixed version '{}'", self.version)
    }
}
