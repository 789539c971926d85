pub mod orchestration;

pub use orchestration::{determine, Determination, DetermineArgs};
