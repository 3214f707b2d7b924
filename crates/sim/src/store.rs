//! Realtime Database REST adapter.
//!
//! Each upsert is one `PUT {base}/{collection}/{key}.json?auth={secret}`
//! carrying the JSON document; any 2xx answer counts as success. One
//! connection per request, closed by the server after its answer.
//!
//! Only plain `http://` endpoints are supported (the database emulator or a
//! local TLS-terminating proxy).

use std::time::Duration;

use ezto_core::telemetry::TelemetryDocument;
use ezto_node::communication::telemetry::{DocumentStore, StoreError};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::error::SimError;

/// Default bound on one request/response exchange.
const DEFAULT_IO_TIMEOUT: Duration = Duration::from_secs(5);

/// Upper bound on the bytes read while looking for the status line.
const MAX_STATUS_LINE: usize = 1024;

/// Parsed `http://host[:port][/base]` endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RtdbEndpoint {
    host: String,
    port: u16,
    base_path: String,
}

impl RtdbEndpoint {
    pub fn parse(url: &str) -> Result<Self, SimError> {
        let rest = match url.strip_prefix("http://") {
            Some(rest) => rest,
            None if url.starts_with("https://") => {
                return Err(SimError::InvalidUrl(format!(
                    "{url}: https needs a TLS proxy, use its http:// address"
                )))
            }
            None => return Err(SimError::InvalidUrl(format!("{url}: missing http:// scheme"))),
        };

        let (authority, path) = match rest.find('/') {
            Some(i) => rest.split_at(i),
            None => (rest, ""),
        };
        let (host, port) = match authority.rsplit_once(':') {
            Some((host, port)) => {
                let port = port
                    .parse()
                    .map_err(|_| SimError::InvalidUrl(format!("{url}: bad port")))?;
                (host, port)
            }
            None => (authority, 80),
        };
        if host.is_empty() {
            return Err(SimError::InvalidUrl(format!("{url}: missing host")));
        }

        Ok(Self {
            host: host.to_string(),
            port,
            base_path: path.trim_end_matches('/').to_string(),
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// `host:port`, as sent in the `Host` header.
    pub fn authority(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Request target for one document. Device ids and secrets are limited
    /// to URL-safe characters at configuration load, so nothing is encoded.
    pub fn document_path(&self, collection: &str, key: &str, secret: &str) -> String {
        format!("{}/{collection}/{key}.json?auth={secret}", self.base_path)
    }
}

/// Document store speaking the Realtime Database REST protocol.
#[derive(Debug, Clone)]
pub struct RtdbStore {
    endpoint: RtdbEndpoint,
    secret: String,
    io_timeout: Duration,
}

impl RtdbStore {
    pub fn new(url: &str, secret: &str) -> Result<Self, SimError> {
        Ok(Self {
            endpoint: RtdbEndpoint::parse(url)?,
            secret: secret.to_string(),
            io_timeout: DEFAULT_IO_TIMEOUT,
        })
    }

    pub fn with_io_timeout(mut self, io_timeout: Duration) -> Self {
        self.io_timeout = io_timeout;
        self
    }

    pub fn endpoint(&self) -> &RtdbEndpoint {
        &self.endpoint
    }

    /// PUT a JSON body and return the HTTP status.
    pub async fn put_json(
        &self,
        collection: &str,
        key: &str,
        body: &[u8],
    ) -> Result<u16, SimError> {
        let path = self.endpoint.document_path(collection, key, &self.secret);
        tokio::time::timeout(self.io_timeout, self.exchange(&path, body))
            .await
            .map_err(|_| SimError::Timeout("store response"))?
    }

    async fn exchange(&self, path: &str, body: &[u8]) -> Result<u16, SimError> {
        let authority = self.endpoint.authority();
        let mut stream = TcpStream::connect((self.endpoint.host.as_str(), self.endpoint.port))
            .await
            .map_err(|e| SimError::ConnectionFailed(format!("{authority}: {e}")))?;

        let head = format!(
            "PUT {path} HTTP/1.1\r\n\
             Host: {authority}\r\n\
             Content-Type: application/json\r\n\
             Content-Length: {}\r\n\
             Connection: close\r\n\
             \r\n",
            body.len()
        );
        stream.write_all(head.as_bytes()).await?;
        stream.write_all(body).await?;
        stream.flush().await?;

        let mut response = Vec::new();
        let mut chunk = [0u8; 256];
        while !response.windows(2).any(|w| w == b"\r\n") {
            if response.len() >= MAX_STATUS_LINE {
                return Err(SimError::ProtocolError("status line too long".into()));
            }
            let n = stream.read(&mut chunk).await?;
            if n == 0 {
                break;
            }
            response.extend_from_slice(&chunk[..n]);
        }

        parse_status(&response)
    }
}

/// Status code from `HTTP/1.x NNN Reason`.
fn parse_status(response: &[u8]) -> Result<u16, SimError> {
    let text = String::from_utf8_lossy(response);
    let line = text.lines().next().unwrap_or_default();
    let mut parts = line.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some(version), Some(code)) if version.starts_with("HTTP/") => code
            .parse()
            .map_err(|_| SimError::ProtocolError(format!("bad status line: {line}"))),
        _ => Err(SimError::ProtocolError(format!("bad status line: {line}"))),
    }
}

impl DocumentStore for RtdbStore {
    async fn upsert(
        &mut self,
        collection: &str,
        key: &str,
        document: &TelemetryDocument<'_>,
    ) -> Result<(), StoreError> {
        let body = serde_json::to_vec(document).map_err(|_| StoreError::Encoding)?;
        match self.put_json(collection, key, &body).await {
            Ok(status) if (200..300).contains(&status) => Ok(()),
            Ok(status) => Err(StoreError::Rejected(status)),
            Err(e) => {
                eprintln!("[store] {e}");
                Err(StoreError::Transport)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_endpoint() {
        let ep = RtdbEndpoint::parse("http://127.0.0.1:9000/").unwrap();
        assert_eq!(ep.host(), "127.0.0.1");
        assert_eq!(ep.port(), 9000);
        assert_eq!(
            ep.document_path("lecturas_iot", "2024-03-09T12:34:56Z_esp32", "s3cr3t"),
            "/lecturas_iot/2024-03-09T12:34:56Z_esp32.json?auth=s3cr3t"
        );

        let ep = RtdbEndpoint::parse("http://proxy.local/db").unwrap();
        assert_eq!(ep.port(), 80);
        assert_eq!(ep.authority(), "proxy.local:80");
        assert_eq!(ep.document_path("c", "k", "s"), "/db/c/k.json?auth=s");
    }

    #[test]
    fn test_parse_endpoint_rejects() {
        for url in [
            "https://demo.firebaseio.com",
            "demo.firebaseio.com",
            "http://:9000",
            "http://host:port",
        ] {
            assert!(
                matches!(RtdbEndpoint::parse(url), Err(SimError::InvalidUrl(_))),
                "{url}"
            );
        }
    }

    #[test]
    fn test_parse_status() {
        assert_eq!(parse_status(b"HTTP/1.1 200 OK\r\n\r\n").unwrap(), 200);
        assert_eq!(parse_status(b"HTTP/1.0 401 Unauthorized\r\n").unwrap(), 401);
        assert!(parse_status(b"garbage").is_err());
        assert!(parse_status(b"").is_err());
    }
}
