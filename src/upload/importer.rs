use crate::config::ImportConfig;
use crate::upload::error::{ImportError, Result};
use crate::upload::types::ImportReceipt;
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use std::path::Path;

/// Posts a trades CSV to the ingest endpoint as a one-field multipart form.
pub struct TradeImporter {
    endpoint: String,
    auth_token: Option<String>,
}

impl TradeImporter {
    pub fn new(config: &ImportConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            auth_token: config.auth_token.clone(),
        }
    }

    /// Upload the file at `path`. One best-effort request: no retry, no
    /// timeout, no cancellation. The file content is not inspected; the
    /// server owns CSV validation.
    pub async fn upload(&self, path: &Path) -> Result<ImportReceipt> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| ImportError::InvalidFilename(path.to_path_buf()))?
            .to_string();

        let bytes = tokio::fs::read(path).await.map_err(|source| ImportError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let part = Part::bytes(bytes)
            .file_name(file_name.clone())
            .mime_str("text/csv")?;
        let form = Form::new().part("trades", part);

        let client = reqwest::Client::new();
        let mut request = client.post(&self.endpoint).multipart(form);
        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            let body: Value = response.json().await?;
            Ok(ImportReceipt { file_name, body })
        } else {
            let body = response.text().await?;
            let message = if body.trim().is_empty() {
                status
                    .canonical_reason()
                    .map(str::to_string)
                    .unwrap_or_else(|| status.to_string())
            } else {
                body
            };
            Err(ImportError::Rejected(message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::path::PathBuf;
    use std::sync::mpsc;

    fn importer_for(endpoint: String) -> TradeImporter {
        TradeImporter::new(&ImportConfig {
            endpoint,
            auth_token: None,
        })
    }

    fn write_trades_csv(dir_name: &str) -> (PathBuf, PathBuf) {
        let dir = std::env::temp_dir().join(dir_name);
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("trades.csv");
        std::fs::write(&path, "DATE,TIME,TYPE\n1/2/25,09:30:00,TRD\n").unwrap();
        (dir, path)
    }

    fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
        haystack
            .windows(needle.len())
            .position(|window| window == needle)
    }

    /// Accepts one connection, captures the raw request bytes, and answers
    /// with a canned response.
    fn spawn_one_shot_server(
        status_line: &'static str,
        content_type: &'static str,
        body: &'static str,
    ) -> (String, mpsc::Receiver<Vec<u8>>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let (raw_tx, raw_rx) = mpsc::channel();

        std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut raw = Vec::new();
            let mut buf = [0u8; 4096];

            loop {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                raw.extend_from_slice(&buf[..n]);

                if let Some(headers_end) = find_subsequence(&raw, b"\r\n\r\n") {
                    let headers = String::from_utf8_lossy(&raw[..headers_end]).to_string();
                    let content_length = headers
                        .lines()
                        .find(|line| line.to_ascii_lowercase().starts_with("content-length"))
                        .and_then(|line| line.split(':').nth(1))
                        .and_then(|value| value.trim().parse::<usize>().ok());

                    let done = match content_length {
                        Some(length) => raw.len() >= headers_end + 4 + length,
                        // Chunked upload: wait for the terminating chunk.
                        None => raw.ends_with(b"0\r\n\r\n"),
                    };
                    if done {
                        break;
                    }
                }
            }

            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
            // Tests that only care about the outcome drop the receiver.
            let _ = raw_tx.send(raw);
        });

        (format!("http://{addr}/trades/upload"), raw_rx)
    }

    #[tokio::test]
    async fn posts_csv_as_multipart_trades_field() {
        let (dir, path) = write_trades_csv("trade_journal_import_post");
        let (endpoint, raw_rx) =
            spawn_one_shot_server("200 OK", "application/json", r#"{"rows": 1}"#);

        let receipt = importer_for(endpoint).upload(&path).await.unwrap();
        assert_eq!(receipt.file_name, "trades.csv");
        assert_eq!(receipt.body["rows"], 1);

        let request = String::from_utf8_lossy(&raw_rx.recv().unwrap()).to_string();
        assert!(request.starts_with("POST /trades/upload"));
        assert!(request.contains("name=\"trades\""));
        assert!(request.contains("filename=\"trades.csv\""));
        assert!(request.contains("DATE,TIME,TYPE\n1/2/25,09:30:00,TRD"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn attaches_bearer_token_when_configured() {
        let (dir, path) = write_trades_csv("trade_journal_import_auth");
        let (endpoint, raw_rx) = spawn_one_shot_server("200 OK", "application/json", "{}");

        let importer = TradeImporter::new(&ImportConfig {
            endpoint,
            auth_token: Some("secret".to_string()),
        });
        importer.upload(&path).await.unwrap();

        let request = String::from_utf8_lossy(&raw_rx.recv().unwrap()).to_lowercase();
        assert!(request.contains("authorization: bearer secret"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn rejected_response_surfaces_server_text() {
        let (dir, path) = write_trades_csv("trade_journal_import_reject");
        let (endpoint, _raw_rx) =
            spawn_one_shot_server("400 Bad Request", "text/plain", "bad format");

        let err = importer_for(endpoint).upload(&path).await.unwrap_err();
        assert!(matches!(err, ImportError::Rejected(_)));
        assert_eq!(err.to_string(), "bad format");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn empty_rejection_body_falls_back_to_status_reason() {
        let (dir, path) = write_trades_csv("trade_journal_import_empty");
        let (endpoint, _raw_rx) =
            spawn_one_shot_server("500 Internal Server Error", "text/plain", "");

        let err = importer_for(endpoint).upload(&path).await.unwrap_err();
        assert_eq!(err.to_string(), "Internal Server Error");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_transport_error() {
        let (dir, path) = write_trades_csv("trade_journal_import_refused");

        let err = importer_for("http://127.0.0.1:1/trades/upload".to_string())
            .upload(&path)
            .await
            .unwrap_err();
        assert!(matches!(err, ImportError::Transport(_)));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn missing_file_fails_before_any_request() {
        let path = std::env::temp_dir().join("trade_journal_missing/nope.csv");

        let err = importer_for("http://127.0.0.1:1/trades/upload".to_string())
            .upload(&path)
            .await
            .unwrap_err();
        assert!(matches!(err, ImportError::Read { .. }));
    }
}
