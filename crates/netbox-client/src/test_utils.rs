//! Test utilities for exercising the HTTP layer
//!
//! Provides a local listener that answers each connection with the next
//! canned response, standing in for a NetBox instance.

use serde_json::{Value, json};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// One canned HTTP response
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    pub fn json(status: u16, body: Value) -> Self {
        Self { status, body: body.to_string() }
    }

    pub fn text(status: u16, body: &str) -> Self {
        Self { status, body: body.to_string() }
    }
}

/// Helper to create a rack payload as NetBox returns it
pub fn rack_json(base_url: &str, id: u64, name: &str) -> Value {
    json!({
        "id": id,
        "url": format!("{}/api/dcim/racks/{}/", base_url, id),
        "display": name,
        "name": name,
        "site": {"id": 1, "name": "DC1", "slug": "dc1"}
    })
}

/// Helper to create one page of a list response
pub fn page_json(results: Vec<Value>, next: Option<String>) -> Value {
    json!({
        "count": results.len(),
        "next": next,
        "previous": null,
        "results": results
    })
}

/// Bind a local listener and answer one connection per reply, in order.
///
/// `script` receives the listener's base URL so replies can carry absolute
/// `next` links. The handle resolves to the request line of every request seen.
pub async fn serve<F>(script: F) -> (String, JoinHandle<Vec<String>>)
where
    F: FnOnce(&str) -> Vec<Reply>,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let replies = script(&base_url);

    let handle = tokio::spawn(async move {
        let mut seen = Vec::new();
        for reply in replies {
            let (mut socket, _) = listener.accept().await.unwrap();

            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let request = String::from_utf8_lossy(&request);
            seen.push(request.lines().next().unwrap_or_default().to_string());

            let response = format!(
                "HTTP/1.1 {} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                reply.status,
                reply.body.len(),
                reply.body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        }
        seen
    });

    (base_url, handle)
}
