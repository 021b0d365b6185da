pub mod runner;
pub mod scratch;
pub mod tools;

pub use runner::{CommandRunner, Invocation, OutputMode, SystemRunner, ToolError};
pub use scratch::ScratchDir;
pub use tools::ToolPaths;
