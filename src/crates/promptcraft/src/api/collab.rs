//! Collaboration relay over WebSocket
//!
//! Every text frame a client sends is rebroadcast to all other connected
//! clients. Nothing is stored; a client that connects late only sees
//! messages sent after it joined.

use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures::{SinkExt, StreamExt};
use tokio::sync::broadcast::{self, error::RecvError};
use uuid::Uuid;

use super::routes::AppState;

/// One relayed message and the client it came from
#[derive(Debug, Clone)]
pub struct CollabMessage {
    pub sender: Uuid,
    pub text: String,
}

/// Fan-out hub shared by all socket tasks
#[derive(Debug, Clone)]
pub struct CollabHub {
    tx: broadcast::Sender<CollabMessage>,
}

impl CollabHub {
    /// Create a hub buffering up to `capacity` messages per slow receiver
    pub fn new(capacity: usize) -> Self {
        let (tx, _rx) = broadcast::channel(capacity);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<CollabMessage> {
        self.tx.subscribe()
    }

    /// Relay `text` from `sender`. Returns the number of live subscribers,
    /// including the sender itself.
    pub fn publish(&self, sender: Uuid, text: impl Into<String>) -> usize {
        self.tx
            .send(CollabMessage {
                sender,
                text: text.into(),
            })
            .unwrap_or(0)
    }

    /// Number of currently connected clients
    pub fn connected_clients(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for CollabHub {
    fn default() -> Self {
        Self::new(256)
    }
}

/// WebSocket upgrade handler
///
/// GET /ws
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(move |socket| relay(socket, state.collab))
}

async fn relay(socket: WebSocket, hub: Arc<CollabHub>) {
    let client_id = Uuid::new_v4();
    let (mut sender, mut receiver) = socket.split();
    let mut events = hub.subscribe();

    tracing::info!(%client_id, "Client connected for real-time collaboration");

    loop {
        tokio::select! {
            incoming = receiver.next() => match incoming {
                Some(Ok(Message::Text(text))) => {
                    tracing::debug!(%client_id, "received: {}", text);
                    hub.publish(client_id, text);
                }
                Some(Ok(Message::Binary(bytes))) => {
                    hub.publish(client_id, String::from_utf8_lossy(&bytes).into_owned());
                }
                Some(Ok(Message::Close(_))) | None => break,
                // Ping/pong are answered by axum
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    tracing::warn!(%client_id, "WebSocket error: {}", e);
                    break;
                }
            },
            event = events.recv() => match event {
                Ok(msg) if msg.sender != client_id => {
                    if sender.send(Message::Text(msg.text)).await.is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(%client_id, skipped, "Client fell behind, dropped messages");
                }
                Err(RecvError::Closed) => break,
            },
        }
    }

    tracing::info!(%client_id, "Client disconnected");
}
