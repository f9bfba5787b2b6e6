//! Platform-agnostic building blocks: configuration, the `Info` payload and
//! the client that fetches it.

pub mod client;
pub mod config;
pub mod info;
