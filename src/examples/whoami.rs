//! whoami example: pick a random proxy from a list file and ask an echo
//! service for the egress address. Needs a text file "proxies.txt" with one
//! HTTP proxy per line (host:port).

use proxy_stash::{client_for_proxy, Protocol, ProxyRegistry};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut registry = ProxyRegistry::new();
    let report = registry.append_from_file(Protocol::Http, "proxies.txt")?;
    println!(
        "Loaded {} proxies ({} lines rejected)",
        report.appended,
        report.rejected.len()
    );
    for rejected in &report.rejected {
        eprintln!("  line {}: {:?}", rejected.number, rejected.line);
    }

    // Random alive proxy, then a client dialing through it.
    let proxy = registry.pick_random()?;
    println!("Using proxy {}", proxy);
    let client = client_for_proxy(&proxy, Duration::from_secs(10))?;

    let body = client
        .get("https://httpbin.org/ip")
        .send()
        .await?
        .text()
        .await?;
    println!("{}", body);

    Ok(())
}
