// Copyright 2025 Stacks BNS Contributors
// Licensed under GPL-3.0

//! [`StacksNode`] over the node's HTTP API

use super::{BroadcastRejection, BroadcastResponse, StacksNode};
use crate::constants::HTTP_TIMEOUT_SECS;
use crate::crypto::StacksAddress;
use crate::error::{BnsError, BnsResult};
use crate::network::StacksNetwork;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct AccountInfo {
    nonce: u64,
}

/// Stacks node reached over HTTP(S).
///
/// ureq is blocking, so each request runs on tokio's blocking pool.
#[derive(Clone)]
pub struct HttpNode {
    network: StacksNetwork,
    agent: ureq::Agent,
}

impl HttpNode {
    /// Node client for `network.core_api_url`.
    ///
    /// Requires a tokio runtime: every request is handed to
    /// `tokio::task::spawn_blocking`, which panics outside one.
    pub fn new(network: &StacksNetwork) -> Self {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(HTTP_TIMEOUT_SECS)))
            // rejections arrive as 400 with a JSON body we need to read
            .http_status_as_error(false)
            .build();

        Self {
            network: network.clone(),
            agent: config.into(),
        }
    }
}

fn transport(url: &str, e: impl std::fmt::Display) -> BnsError {
    BnsError::Transport(format!("{}: {}", url, e))
}

async fn run_blocking<T, F>(f: F) -> BnsResult<T>
where
    F: FnOnce() -> BnsResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| BnsError::Transport(format!("request task failed: {}", e)))?
}

fn get_text(agent: &ureq::Agent, url: &str) -> BnsResult<(u16, String)> {
    let mut response = agent.get(url).call().map_err(|e| transport(url, e))?;
    let status = response.status().as_u16();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| transport(url, e))?;
    Ok((status, body))
}

fn post(agent: &ureq::Agent, url: &str, content_type: &str, body: Vec<u8>) -> BnsResult<(u16, String)> {
    let mut response = agent
        .post(url)
        .header("Content-Type", content_type)
        .send(body)
        .map_err(|e| transport(url, e))?;
    let status = response.status().as_u16();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| transport(url, e))?;
    Ok((status, body))
}

fn expect_ok(url: &str, status: u16, body: &str) -> BnsResult<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(transport(url, format!("HTTP {}: {}", status, body.trim())))
    }
}

pub fn parse_account_nonce(body: &str) -> BnsResult<u64> {
    let info: AccountInfo = serde_json::from_str(body)
        .map_err(|e| BnsError::Transport(format!("unreadable account response: {}", e)))?;
    Ok(info.nonce)
}

pub fn parse_fee_rate(body: &str) -> BnsResult<u64> {
    serde_json::from_str(body.trim())
        .map_err(|e| BnsError::Transport(format!("unreadable fee rate response: {}", e)))
}

/// Interpret the answer to `POST /v2/transactions`
pub fn parse_broadcast_response(status: u16, body: &str) -> BnsResult<BroadcastResponse> {
    if (200..300).contains(&status) {
        let txid = serde_json::from_str::<String>(body)
            .unwrap_or_else(|_| body.trim().trim_matches('"').to_string());
        if txid.is_empty() {
            return Err(BnsError::Transport(
                "node accepted the transaction without a txid".to_string(),
            ));
        }
        return Ok(BroadcastResponse::Accepted(txid));
    }

    match serde_json::from_str::<BroadcastRejection>(body) {
        Ok(rejection) => Ok(BroadcastResponse::Rejected(rejection)),
        Err(_) => Err(BnsError::Transport(format!(
            "HTTP {} from node: {}",
            status,
            body.trim()
        ))),
    }
}

/// Broadcast body and content type; attachments force the JSON form
pub fn broadcast_body(tx: &[u8], attachment: Option<&[u8]>) -> (&'static str, Vec<u8>) {
    match attachment {
        Some(attachment) => {
            let body = serde_json::json!({
                "tx": hex::encode(tx),
                "attachment": hex::encode(attachment),
            });
            ("application/json", body.to_string().into_bytes())
        }
        None => ("application/octet-stream", tx.to_vec()),
    }
}

#[async_trait::async_trait]
impl StacksNode for HttpNode {
    async fn account_nonce(&self, address: &StacksAddress) -> BnsResult<u64> {
        let url = self.network.account_url(&address.to_string());
        let agent = self.agent.clone();
        tracing::debug!("Fetching nonce: {}", url);

        run_blocking(move || {
            let (status, body) = get_text(&agent, &url)?;
            expect_ok(&url, status, &body)?;
            parse_account_nonce(&body)
        })
        .await
    }

    async fn fee_rate(&self) -> BnsResult<u64> {
        let url = self.network.transfer_fee_url();
        let agent = self.agent.clone();

        run_blocking(move || {
            let (status, body) = get_text(&agent, &url)?;
            expect_ok(&url, status, &body)?;
            parse_fee_rate(&body)
        })
        .await
    }

    async fn broadcast(&self, tx: &[u8], attachment: Option<&[u8]>) -> BnsResult<BroadcastResponse> {
        let url = self.network.broadcast_url();
        let agent = self.agent.clone();
        let (content_type, body) = broadcast_body(tx, attachment);
        tracing::debug!("Broadcasting {} bytes to {}", body.len(), url);

        run_blocking(move || {
            let (status, body) = post(&agent, &url, content_type, body)?;
            parse_broadcast_response(status, &body)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};

    const SENDER: &str = "ST000000000000000000002AMW42H";

    async fn read_request(stream: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = stream.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);

            let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
                continue;
            };
            let head = String::from_utf8_lossy(&buf[..end]).to_ascii_lowercase();
            let content_length = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .map(|v| v.trim().parse::<usize>().unwrap())
                .unwrap_or(0);
            if buf.len() >= end + 4 + content_length {
                break;
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Answer each connection with the next canned reply; yields the requests seen
    async fn serve(
        replies: Vec<(u16, &'static str)>,
    ) -> (StacksNetwork, tokio::task::JoinHandle<Vec<String>>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let mut requests = Vec::new();
            for (status, body) in replies {
                let (mut stream, _) = listener.accept().await.unwrap();
                requests.push(read_request(&mut stream).await);
                let reply = format!(
                    "HTTP/1.1 {} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                stream.write_all(reply.as_bytes()).await.unwrap();
                stream.shutdown().await.unwrap();
            }
            requests
        });

        let network = StacksNetwork::devnet().with_api_url(format!("http://{}", addr));
        (network, handle)
    }

    #[tokio::test]
    async fn test_http_rejection_is_not_an_error() {
        let body = r#"{"error":"transaction rejected","reason":"BadNonce","txid":"ab12"}"#;
        let (network, server) = serve(vec![(400, body)]).await;
        let node = HttpNode::new(&network);

        let response = node.broadcast(&[0x80, 0x00], None).await.unwrap();
        match response {
            BroadcastResponse::Rejected(rejection) => {
                assert_eq!(rejection.reason.as_deref(), Some("BadNonce"));
                assert_eq!(rejection.txid.as_deref(), Some("ab12"));
            }
            other => panic!("unexpected response: {:?}", other),
        }

        let requests = server.await.unwrap();
        assert!(requests[0].starts_with("POST /v2/transactions "));
        assert!(requests[0]
            .to_ascii_lowercase()
            .contains("content-type: application/octet-stream"));
    }

    #[tokio::test]
    async fn test_http_accepted_broadcast_with_attachment() {
        let (network, server) = serve(vec![(200, "\"0xabc\"")]).await;
        let node = HttpNode::new(&network);

        let response = node.broadcast(&[1, 2], Some(b"zone")).await.unwrap();
        assert_eq!(response, BroadcastResponse::Accepted("0xabc".to_string()));

        let requests = server.await.unwrap();
        let request = &requests[0];
        assert!(request.to_ascii_lowercase().contains("content-type: application/json"));
        let (_, body) = request.split_once("\r\n\r\n").unwrap();
        let json: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(json["tx"], "0102");
        assert_eq!(json["attachment"], hex::encode(b"zone"));
    }

    #[tokio::test]
    async fn test_http_account_nonce() {
        let (network, server) = serve(vec![(200, r#"{"balance":"0x0","nonce":9}"#)]).await;
        let node = HttpNode::new(&network);
        let sender: StacksAddress = SENDER.parse().unwrap();

        assert_eq!(node.account_nonce(&sender).await.unwrap(), 9);

        let requests = server.await.unwrap();
        assert!(requests[0].starts_with(&format!("GET /v2/accounts/{}?proof=0 ", SENDER)));
    }

    #[tokio::test]
    async fn test_http_fee_rate() {
        let (network, server) = serve(vec![(200, "1")]).await;
        let node = HttpNode::new(&network);

        assert_eq!(node.fee_rate().await.unwrap(), 1);

        let requests = server.await.unwrap();
        assert!(requests[0].starts_with("GET /v2/fees/transfer "));
    }

    #[tokio::test]
    async fn test_http_missing_account_is_transport_error() {
        let (network, server) = serve(vec![(404, r#"{"error":"not found"}"#)]).await;
        let node = HttpNode::new(&network);
        let sender: StacksAddress = SENDER.parse().unwrap();

        assert!(matches!(
            node.account_nonce(&sender).await,
            Err(BnsError::Transport(_))
        ));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_http_unreachable_node_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let network = StacksNetwork::devnet().with_api_url(format!("http://{}", addr));
        let node = HttpNode::new(&network);
        assert!(matches!(node.fee_rate().await, Err(BnsError::Transport(_))));
    }

    #[test]
    fn test_parse_account_nonce() {
        let body = r#"{"balance":"0x0000000000000000000000000000c350","locked":"0x0","unlock_height":0,"nonce":7}"#;
        assert_eq!(parse_account_nonce(body).unwrap(), 7);
        assert!(parse_account_nonce("not json").is_err());
    }

    #[test]
    fn test_parse_fee_rate() {
        assert_eq!(parse_fee_rate("1\n").unwrap(), 1);
        assert!(matches!(parse_fee_rate("{}"), Err(BnsError::Transport(_))));
    }

    #[test]
    fn test_accepted_broadcast() {
        let response = parse_broadcast_response(200, "\"0xabc123\"").unwrap();
        assert_eq!(response, BroadcastResponse::Accepted("0xabc123".to_string()));

        let response = parse_broadcast_response(200, "abc123").unwrap();
        assert_eq!(response, BroadcastResponse::Accepted("abc123".to_string()));

        assert!(parse_broadcast_response(200, "\"\"").is_err());
    }

    #[test]
    fn test_rejected_broadcast() {
        let body = r#"{"error":"transaction rejected","reason":"BadNonce","reason_data":{"expected":4,"actual":2},"txid":"ab12"}"#;
        match parse_broadcast_response(400, body).unwrap() {
            BroadcastResponse::Rejected(rejection) => {
                assert_eq!(rejection.error, "transaction rejected");
                assert_eq!(rejection.reason.as_deref(), Some("BadNonce"));
                assert_eq!(rejection.txid.as_deref(), Some("ab12"));
                assert!(rejection.reason_data.is_some());
            }
            other => panic!("unexpected response: {:?}", other),
        }
    }

    #[test]
    fn test_unparseable_error_is_transport() {
        assert!(matches!(
            parse_broadcast_response(502, "<html>Bad Gateway</html>"),
            Err(BnsError::Transport(_))
        ));
    }

    #[test]
    fn test_broadcast_body() {
        let (content_type, body) = broadcast_body(&[1, 2], None);
        assert_eq!(content_type, "application/octet-stream");
        assert_eq!(body, vec![1, 2]);

        let (content_type, body) = broadcast_body(&[1, 2], Some(b"zone"));
        assert_eq!(content_type, "application/json");
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["tx"], "0102");
        assert_eq!(json["attachment"], hex::encode(b"zone"));
    }
}
