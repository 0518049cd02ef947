//! Thin REST client for the portal API.

mod client;
#[cfg(test)]
pub(crate) mod test_server;

pub use client::ApiClient;
