pub mod client;
pub mod hetzner;
pub mod models;

pub use client::DnsApiClient;
pub use hetzner::HetznerClient;
pub use models::{Record, Zone};
