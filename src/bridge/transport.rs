use async_trait::async_trait;
use axum::extract::ws::{Message, WebSocket};
use tokio::sync::mpsc;
use tracing::debug;

/// The peer went away while a response was being written.
#[derive(thiserror::Error, Debug)]
#[error("transport closed: {0}")]
pub struct TransportClosed(pub String);

/// A message-oriented, bidirectional client connection.
#[async_trait]
pub trait Transport: Send {
    /// Next request line, or `None` once the peer has closed or the
    /// connection failed.
    async fn next_request(&mut self) -> Option<String>;

    /// Deliver one complete response message.
    async fn send_response(&mut self, payload: String) -> Result<(), TransportClosed>;
}

#[async_trait]
impl Transport for WebSocket {
    async fn next_request(&mut self) -> Option<String> {
        loop {
            match self.recv().await? {
                Ok(Message::Text(text)) => return Some(text),
                Ok(Message::Binary(bytes)) => {
                    return Some(String::from_utf8_lossy(&bytes).into_owned());
                }
                Ok(Message::Ping(_) | Message::Pong(_)) => continue,
                Ok(Message::Close(frame)) => {
                    debug!(?frame, "peer closed websocket");
                    return None;
                }
                Err(e) => {
                    debug!(error = %e, "websocket read failed");
                    return None;
                }
            }
        }
    }

    async fn send_response(&mut self, payload: String) -> Result<(), TransportClosed> {
        self.send(Message::Text(payload))
            .await
            .map_err(|e| TransportClosed(e.to_string()))
    }
}

/// In-process transport over channels, for embedding the bridge without a
/// socket.
pub struct ChannelTransport {
    requests: mpsc::Receiver<String>,
    responses: mpsc::Sender<String>,
}

/// The client end of a [`ChannelTransport`].
pub struct ChannelClient {
    requests: mpsc::Sender<String>,
    responses: mpsc::Receiver<String>,
}

impl ChannelTransport {
    /// Create a connected transport/client pair with `buffer` slots per direction.
    pub fn pair(buffer: usize) -> (ChannelTransport, ChannelClient) {
        let (request_tx, request_rx) = mpsc::channel(buffer);
        let (response_tx, response_rx) = mpsc::channel(buffer);

        (
            ChannelTransport {
                requests: request_rx,
                responses: response_tx,
            },
            ChannelClient {
                requests: request_tx,
                responses: response_rx,
            },
        )
    }
}

#[async_trait]
impl Transport for ChannelTransport {
    async fn next_request(&mut self) -> Option<String> {
        self.requests.recv().await
    }

    async fn send_response(&mut self, payload: String) -> Result<(), TransportClosed> {
        self.responses
            .send(payload)
            .await
            .map_err(|_| TransportClosed("client dropped".to_string()))
    }
}

impl ChannelClient {
    /// Send a request and wait for its response; `None` if the session ended.
    pub async fn request(&mut self, line: &str) -> Option<String> {
        self.requests.send(line.to_string()).await.ok()?;
        self.responses.recv().await
    }
}
