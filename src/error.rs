//! Error types for the proxy-stash crate.

use thiserror::Error;

/// Errors returned by the registry, ingestion and client construction.
#[derive(Debug, Error)]
pub enum Error {
    /// The alive subset of the pool is empty (including a fully empty pool).
    #[error("proxy pool has no alive proxies")]
    EmptyPool,

    /// The registry is locked and selection was refused. Callers decide
    /// whether and when to retry.
    #[error("proxy pool is locked")]
    PoolLocked,

    /// A protocol scheme the transport layer does not speak.
    #[error("unsupported proxy protocol: {0}")]
    UnsupportedProtocol(String),

    /// Host/port did not form a valid proxy URL.
    #[error("invalid proxy url: {0}")]
    InvalidProxyUrl(#[from] url::ParseError),

    /// reqwest rejected the proxy or client configuration, or a fetch of a
    /// proxy list source failed.
    #[error(transparent)]
    Client(#[from] reqwest::Error),

    /// Reading a proxy list file or stream failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
