pub mod subfinder;

pub use subfinder::{find_subdomains, read_domains};
