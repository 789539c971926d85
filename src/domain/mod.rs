//! Domain logic - pure version arithmetic independent of the build tool

pub mod output_mode;
pub mod release_type;
pub mod version;

pub use output_mode::OutputMode;
pub use release_type::ReleaseType;
pub use version::Version;
