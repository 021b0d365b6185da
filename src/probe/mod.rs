pub mod httpx;

pub use httpx::probe_subdomains;
