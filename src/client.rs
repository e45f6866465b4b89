//! Proxied reqwest client construction.

use crate::error::Error;
use crate::proxy::ProxyDescriptor;

use log::debug;
use std::time::Duration;

/// Build a `reqwest::Client` whose outbound connections go through `proxy`.
///
/// HTTP proxies are used as forward proxies (plain relay for `http://`
/// destinations, CONNECT tunnel for TLS). SOCKS4 and SOCKS5 proxies are
/// dialed for every connection via reqwest's `socks` support.
///
/// `dial_timeout` bounds connection establishment only. The returned client
/// has no per-request or overall timeout; callers needing one layer it on
/// themselves. No network I/O happens here; a dead or unreachable proxy
/// only surfaces once a request is issued.
pub fn client_for_proxy(
    proxy: &ProxyDescriptor,
    dial_timeout: Duration,
) -> Result<reqwest::Client, Error> {
    let url = proxy.proxy_url()?;
    debug!("Building client for proxy {}", url);

    // The scheme picked by Protocol::scheme decides how reqwest routes:
    // http means forward-proxying, socks4/socks5 mean a SOCKS dial per
    // connection.
    let outbound = reqwest::Proxy::all(url)?;

    let client = reqwest::Client::builder()
        .proxy(outbound)
        .connect_timeout(dial_timeout)
        .build()?;
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proxy::Protocol;

    #[test]
    fn builds_client_for_http_proxy() {
        let p = ProxyDescriptor::new(Protocol::Http, "10.0.0.1", "8080");
        assert_eq!(p.proxy_url().unwrap().as_str(), "http://10.0.0.1:8080/");
        assert!(client_for_proxy(&p, Duration::from_secs(10)).is_ok());
    }

    #[test]
    fn builds_client_for_socks_proxies() {
        let p4 = ProxyDescriptor::new(Protocol::Socks4, "10.0.0.1", "1080");
        assert!(client_for_proxy(&p4, Duration::from_secs(5)).is_ok());

        let p5 = ProxyDescriptor::new(Protocol::Socks5, "10.0.0.1", "1080");
        assert!(client_for_proxy(&p5, Duration::from_secs(5)).is_ok());
    }

    #[test]
    fn rejects_malformed_proxy_address() {
        let p = ProxyDescriptor::new(Protocol::Http, "", "8080");
        assert!(client_for_proxy(&p, Duration::from_secs(5)).is_err());
    }
}
