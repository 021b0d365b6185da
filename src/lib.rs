pub mod config;
pub mod discover;
pub mod external;
pub mod fuzz;
pub mod pipeline;
pub mod probe;
pub mod utils;

pub use crate::config::Config;
pub use crate::pipeline::{Pipeline, RunOptions};
