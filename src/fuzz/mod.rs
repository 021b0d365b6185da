pub mod ffuf;

pub use ffuf::run_ffuf;
