//! WebSocket client for the core, with auto-reconnect.

use std::sync::mpsc as std_mpsc;
use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use shellport_config::schema::CoreConfig;
use tokio::sync::mpsc;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;

use super::protocol::{parse_request, CoreRequest, PortMessage, RequestError};

/// What the link reports to the event loop.
#[derive(Debug, Clone, PartialEq)]
pub enum LinkEvent {
    Connected,
    Disconnected(String),
    Request(CoreRequest),
}

/// Connection settings for the core link.
#[derive(Debug, Clone)]
pub struct LinkConfig {
    pub url: String,
    pub max_backoff: Duration,
    /// Sent first on every connection.
    pub hello: PortMessage,
}

impl LinkConfig {
    pub fn new(core: &CoreConfig, hello: PortMessage) -> Self {
        Self {
            url: core.url.clone(),
            max_backoff: Duration::from_secs(u64::from(core.reconnect_max_secs.max(1))),
            hello,
        }
    }
}

const INITIAL_BACKOFF: Duration = Duration::from_secs(1);

pub fn next_backoff(current: Duration, max: Duration) -> Duration {
    (current * 2).min(max)
}

/// Run the core link until shutdown.
///
/// Outbound messages queued while disconnected are dropped on reconnect:
/// input events and replies are meaningless to a fresh core session.
pub async fn run_core_link(
    config: LinkConfig,
    mut outbound_rx: mpsc::UnboundedReceiver<PortMessage>,
    event_tx: std_mpsc::Sender<LinkEvent>,
    mut shutdown_rx: mpsc::Receiver<()>,
) {
    let mut backoff = INITIAL_BACKOFF;

    loop {
        tracing::info!(url = %config.url, "Connecting to core...");

        match connect_async(config.url.as_str()).await {
            Ok((ws, _)) => {
                backoff = INITIAL_BACKOFF;
                let mut stale = 0usize;
                while outbound_rx.try_recv().is_ok() {
                    stale += 1;
                }
                if stale > 0 {
                    tracing::debug!(stale, "Dropped messages queued while disconnected");
                }

                let result =
                    core_session(ws, &config, &mut outbound_rx, &event_tx, &mut shutdown_rx).await;

                match result {
                    SessionResult::Shutdown => {
                        tracing::info!("Core link shutting down");
                        return;
                    }
                    SessionResult::Disconnected(reason) => {
                        tracing::warn!(reason = %reason, "Core connection lost");
                        if event_tx.send(LinkEvent::Disconnected(reason)).is_err() {
                            return;
                        }
                    }
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, retry_in = ?backoff, "Failed to connect to core");
            }
        }

        tokio::select! {
            _ = tokio::time::sleep(backoff) => {}
            _ = shutdown_rx.recv() => return,
        }

        backoff = next_backoff(backoff, config.max_backoff);
    }
}

enum SessionResult {
    Shutdown,
    Disconnected(String),
}

async fn core_session(
    ws: tokio_tungstenite::WebSocketStream<
        tokio_tungstenite::MaybeTlsStream<tokio::net::TcpStream>,
    >,
    config: &LinkConfig,
    outbound_rx: &mut mpsc::UnboundedReceiver<PortMessage>,
    event_tx: &std_mpsc::Sender<LinkEvent>,
    shutdown_rx: &mut mpsc::Receiver<()>,
) -> SessionResult {
    let (mut sink, mut stream) = ws.split();

    let hello = match config.hello.to_json() {
        Ok(json) => json,
        Err(e) => return SessionResult::Disconnected(format!("hello encoding failed: {e}")),
    };
    if sink.send(Message::Text(hello.into())).await.is_err() {
        return SessionResult::Disconnected("failed to send hello".into());
    }
    tracing::info!("Core connected");
    if event_tx.send(LinkEvent::Connected).is_err() {
        return SessionResult::Shutdown;
    }

    loop {
        tokio::select! {
            msg = outbound_rx.recv() => {
                let Some(msg) = msg else {
                    let _ = sink.close().await;
                    return SessionResult::Shutdown;
                };
                let json = match msg.to_json() {
                    Ok(json) => json,
                    Err(e) => {
                        tracing::warn!(error = %e, "Dropping unencodable message");
                        continue;
                    }
                };
                if sink.send(Message::Text(json.into())).await.is_err() {
                    return SessionResult::Disconnected("send failed".into());
                }
            }

            frame = stream.next() => {
                match frame {
                    Some(Ok(Message::Text(text))) => match parse_request(text.as_str()) {
                        Ok(request) => {
                            tracing::debug!(id = request.id, method = request.call.method(), "Core request");
                            if event_tx.send(LinkEvent::Request(request)).is_err() {
                                return SessionResult::Shutdown;
                            }
                        }
                        Err(RequestError::Rejected { id, message }) => {
                            tracing::warn!(id, error = %message, "Core request rejected");
                            let reply = PortMessage::Error { id, message };
                            if let Ok(json) = reply.to_json() {
                                if sink.send(Message::Text(json.into())).await.is_err() {
                                    return SessionResult::Disconnected("send failed".into());
                                }
                            }
                        }
                        Err(RequestError::Malformed(e)) => {
                            tracing::debug!(error = %e, "Bad frame from core");
                        }
                    },
                    Some(Ok(Message::Ping(data))) => {
                        let _ = sink.send(Message::Pong(data)).await;
                    }
                    Some(Ok(Message::Close(_))) | None => {
                        return SessionResult::Disconnected("core closed connection".into());
                    }
                    Some(Err(e)) => {
                        return SessionResult::Disconnected(format!("ws error: {e}"));
                    }
                    _ => {}
                }
            }

            _ = shutdown_rx.recv() => {
                let _ = sink.close().await;
                return SessionResult::Shutdown;
            }
        }
    }
}
