//! Proxy descriptor, protocol and status.

use crate::error::Error;

use std::fmt;
use std::str::FromStr;
use url::Url;

/// Protocol spoken to the proxy itself.
///
/// HTTPS proxies should be specified as `Http`, SOCKS4a as `Socks4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    /// HTTP forward proxy (plain relay, CONNECT for TLS).
    Http,
    /// SOCKS4 tunnel.
    Socks4,
    /// SOCKS5 tunnel.
    Socks5,
}

impl Protocol {
    /// URL scheme used when handing this proxy to reqwest.
    pub fn scheme(&self) -> &'static str {
        match self {
            Protocol::Http => "http",
            Protocol::Socks4 => "socks4",
            Protocol::Socks5 => "socks5",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.scheme())
    }
}

impl FromStr for Protocol {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "http" | "https" => Ok(Protocol::Http),
            "socks4" | "socks4a" => Ok(Protocol::Socks4),
            "socks5" | "socks5h" => Ok(Protocol::Socks5),
            other => Err(Error::UnsupportedProtocol(other.to_string())),
        }
    }
}

/// Liveness status of a proxy.
///
/// There is no prober in this crate; status is set by the caller based on
/// whatever signal it has (request failures, external checks).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProxyStatus {
    /// Eligible for selection.
    Alive,
    /// Temporarily in use elsewhere; skipped by selection but kept in the pool.
    Busy,
    /// Dead weight; removed by [`ProxyRegistry::remove_bad`](crate::ProxyRegistry::remove_bad).
    Bad,
}

/// One proxy endpoint: protocol, address and liveness status.
///
/// The `(host, port)` pair is only meaningful together with `protocol`; the
/// same address can be valid under a different protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyDescriptor {
    pub protocol: Protocol,
    pub host: String,
    pub port: String,
    pub status: ProxyStatus,
}

impl ProxyDescriptor {
    /// Create a descriptor with status [`ProxyStatus::Alive`].
    pub fn new(protocol: Protocol, host: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            protocol,
            host: host.into(),
            port: port.into(),
            status: ProxyStatus::Alive,
        }
    }

    /// The URL under which reqwest reaches this proxy,
    /// e.g. `http://10.0.0.1:8080` or `socks5://10.0.0.1:1080`.
    pub fn proxy_url(&self) -> Result<Url, Error> {
        let raw = format!("{}://{}:{}", self.protocol.scheme(), self.host, self.port);
        Ok(Url::parse(&raw)?)
    }
}

impl fmt::Display for ProxyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protocol_parses_known_schemes() {
        assert_eq!("http".parse::<Protocol>().unwrap(), Protocol::Http);
        assert_eq!("https".parse::<Protocol>().unwrap(), Protocol::Http);
        assert_eq!("socks4".parse::<Protocol>().unwrap(), Protocol::Socks4);
        assert_eq!("SOCKS5".parse::<Protocol>().unwrap(), Protocol::Socks5);
    }

    #[test]
    fn protocol_rejects_unknown_scheme() {
        let err = "ftp".parse::<Protocol>().unwrap_err();
        assert!(matches!(err, Error::UnsupportedProtocol(s) if s == "ftp"));
    }

    #[test]
    fn descriptor_defaults_to_alive() {
        let p = ProxyDescriptor::new(Protocol::Http, "10.0.0.1", "8080");
        assert_eq!(p.status, ProxyStatus::Alive);
        assert_eq!(p.to_string(), "10.0.0.1:8080");
    }

    #[test]
    fn proxy_url_carries_scheme_and_address() {
        let p = ProxyDescriptor::new(Protocol::Http, "10.0.0.1", "8080");
        assert_eq!(p.proxy_url().unwrap().as_str(), "http://10.0.0.1:8080/");

        let p = ProxyDescriptor::new(Protocol::Socks5, "10.0.0.2", "1080");
        assert_eq!(p.proxy_url().unwrap().as_str(), "socks5://10.0.0.2:1080");
    }

    #[test]
    fn proxy_url_rejects_garbage_address() {
        let p = ProxyDescriptor::new(Protocol::Http, "", "8080");
        assert!(p.proxy_url().is_err());
    }
}
