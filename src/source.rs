//! Ingestion of proxy lists from readers, files and URLs.
//!
//! Every source is plain text, one `host:port` per line. Blank lines and
//! `#` comments are skipped; anything else that does not split into a
//! non-empty host and a numeric port is rejected and reported back to the
//! caller instead of being appended with empty fields.

use crate::error::Error;
use crate::proxy::Protocol;
use crate::registry::ProxyRegistry;

use log::{info, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Outcome of one ingestion pass: how many proxies were appended and which
/// lines were rejected.
#[derive(Debug, Default)]
pub struct IngestReport {
    /// Number of descriptors appended to the registry.
    pub appended: usize,
    /// Lines that failed host:port parsing, with their 1-based line numbers.
    pub rejected: Vec<RejectedLine>,
}

/// One malformed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedLine {
    pub number: usize,
    pub line: String,
}

/// Split a trimmed line into host and port. The port must be numeric and
/// the host non-empty; `rsplit_once` keeps IPv6-style colons on the host
/// side.
fn split_host_port(line: &str) -> Option<(&str, &str)> {
    let (host, port) = line.rsplit_once(':')?;
    if host.is_empty() || port.parse::<u16>().is_err() {
        return None;
    }
    Some((host, port))
}

impl ProxyRegistry {
    /// Append proxies read line by line from `reader`, all with `protocol`
    /// and status alive. Returns a report of appended and rejected lines;
    /// fails only on I/O errors from the reader itself.
    pub fn append_from_reader<R: BufRead>(
        &mut self,
        protocol: Protocol,
        reader: R,
    ) -> Result<IngestReport, Error> {
        let mut report = IngestReport::default();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            self.ingest_line(protocol, idx + 1, &line, &mut report);
        }
        info!(
            "Ingested {} proxies ({} lines rejected)",
            report.appended,
            report.rejected.len()
        );
        Ok(report)
    }

    /// Append proxies from a text file, one `host:port` per line.
    pub fn append_from_file<P: AsRef<Path>>(
        &mut self,
        protocol: Protocol,
        path: P,
    ) -> Result<IngestReport, Error> {
        let file = File::open(path)?;
        self.append_from_reader(protocol, BufReader::new(file))
    }

    /// Append proxies from the body of a blank HTTP GET to `url`.
    pub async fn append_from_url(
        &mut self,
        protocol: Protocol,
        url: &str,
    ) -> Result<IngestReport, Error> {
        let body = reqwest::get(url).await?.text().await?;
        let mut report = IngestReport::default();
        for (idx, line) in body.lines().enumerate() {
            self.ingest_line(protocol, idx + 1, line, &mut report);
        }
        info!(
            "Ingested {} proxies from {} ({} lines rejected)",
            report.appended,
            url,
            report.rejected.len()
        );
        Ok(report)
    }

    fn ingest_line(
        &mut self,
        protocol: Protocol,
        number: usize,
        line: &str,
        report: &mut IngestReport,
    ) {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return;
        }
        match split_host_port(line) {
            Some((host, port)) => {
                self.append(protocol, host, port);
                report.appended += 1;
            }
            None => {
                warn!("Rejecting malformed proxy line {}: {:?}", number, line);
                report.rejected.push(RejectedLine {
                    number,
                    line: line.to_string(),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proxy::ProxyStatus;
    use std::io::Cursor;

    #[test]
    fn ingests_well_formed_lines_as_alive() {
        let mut reg = ProxyRegistry::with_seed(1);
        let input = "10.0.0.1:8080\n10.0.0.2:3128\n";
        let report = reg
            .append_from_reader(Protocol::Http, Cursor::new(input))
            .unwrap();
        assert_eq!(report.appended, 2);
        assert!(report.rejected.is_empty());
        assert_eq!(reg.len(), 2);
        assert!(reg.proxies().iter().all(|p| p.status == ProxyStatus::Alive));
        assert_eq!(reg.proxies()[0].host, "10.0.0.1");
        assert_eq!(reg.proxies()[0].port, "8080");
    }

    #[test]
    fn skips_blank_and_comment_lines_silently() {
        let mut reg = ProxyRegistry::with_seed(1);
        let input = "\n# free proxies\n10.0.0.1:8080\n   \n";
        let report = reg
            .append_from_reader(Protocol::Socks5, Cursor::new(input))
            .unwrap();
        assert_eq!(report.appended, 1);
        assert!(report.rejected.is_empty());
    }

    #[test]
    fn rejects_malformed_lines_with_line_numbers() {
        let mut reg = ProxyRegistry::with_seed(1);
        let input = "10.0.0.1:8080\nnot-a-proxy\n:8080\n10.0.0.2:notaport\n10.0.0.3:1080\n";
        let report = reg
            .append_from_reader(Protocol::Socks4, Cursor::new(input))
            .unwrap();
        assert_eq!(report.appended, 2);
        assert_eq!(reg.len(), 2);
        let numbers: Vec<usize> = report.rejected.iter().map(|r| r.number).collect();
        assert_eq!(numbers, vec![2, 3, 4]);
        assert_eq!(report.rejected[0].line, "not-a-proxy");
    }

    #[test]
    fn keeps_ipv6_colons_on_the_host_side() {
        let (host, port) = split_host_port("[::1]:9050").unwrap();
        assert_eq!(host, "[::1]");
        assert_eq!(port, "9050");
    }

    #[test]
    fn rejects_out_of_range_port() {
        assert!(split_host_port("10.0.0.1:70000").is_none());
    }
}
