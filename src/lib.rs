//! # proxy-stash
//!
//! A minimal proxy pool manager for reqwest.
//!
//! This library keeps an in-memory registry of HTTP/SOCKS4/SOCKS5 proxy
//! endpoints with a coarse liveness status per proxy, hands out a randomly
//! selected alive proxy, and builds a `reqwest::Client` tunneled through it.
//! There is no prober and no background work: status changes, retries and
//! request-level timeouts belong to the caller.

pub mod client;
pub mod error;
pub mod proxy;
pub mod registry;
pub mod source;

pub use client::client_for_proxy;
pub use error::Error;
pub use proxy::{Protocol, ProxyDescriptor, ProxyStatus};
pub use registry::ProxyRegistry;
pub use source::{IngestReport, RejectedLine};
