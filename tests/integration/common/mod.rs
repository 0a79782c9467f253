//! Throwaway HTTP responder for exercising the ticker client

#![allow(dead_code)]

use std::collections::VecDeque;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// What the responder does with one incoming connection
#[derive(Debug, Clone)]
pub enum Reply {
    /// Answer with this status and body, then close
    Status(u16, String),
    /// Read the request and never answer
    Hang,
}

impl Reply {
    pub fn ok(body: &str) -> Self {
        Reply::Status(200, body.to_string())
    }

    pub fn ticker(last: &str) -> Self {
        Reply::ok(&format!(r#"{{"ticker":{{"last":"{}"}}}}"#, last))
    }
}

/// Serve `replies` in order, one per connection; afterwards answer 503
///
/// Returns the ticker URL to point the client at.
pub async fn spawn_responder(replies: Vec<Reply>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let mut replies: VecDeque<Reply> = replies.into();

    tokio::spawn(async move {
        loop {
            let Ok((stream, _)) = listener.accept().await else {
                break;
            };
            let reply = replies
                .pop_front()
                .unwrap_or_else(|| Reply::Status(503, "{}".to_string()));
            tokio::spawn(handle(stream, reply));
        }
    });

    format!("http://{}/api/ticker/btcidr", addr)
}

/// URL of a port nothing listens on
pub async fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/api/ticker/btcidr", addr)
}

async fn handle(mut stream: TcpStream, reply: Reply) {
    let mut request = Vec::new();
    let mut buf = [0u8; 1024];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf).await {
            Ok(0) | Err(_) => return,
            Ok(n) => request.extend_from_slice(&buf[..n]),
        }
    }

    match reply {
        Reply::Status(status, body) => {
            let reason = if status == 200 { "OK" } else { "Stub" };
            let response = format!(
                "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                reason,
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.shutdown().await;
        }
        Reply::Hang => {
            tokio::time::sleep(Duration::from_secs(60)).await;
        }
    }
}
