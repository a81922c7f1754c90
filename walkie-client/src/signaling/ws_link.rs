use crate::error::ClientError;
use crate::signaling::link::SignalingLink;
use async_trait::async_trait;
use futures::{SinkExt, StreamExt};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::protocol::Message;
use tracing::{debug, info, warn};
use walkie_core::{InboundFrame, OutboundFrame};

/// Channel depth for inbound relay frames.
const INBOUND_BUFFER: usize = 64;

/// Persistent websocket connection to the relay.
///
/// The socket is split once at connect time: a writer task drains an
/// unbounded outbound queue, a reader task parses frames and forwards them
/// to the receiver handed back from [`WsLink::connect`].
pub struct WsLink {
    out_tx: mpsc::UnboundedSender<Message>,
}

impl WsLink {
    /// Connect to the relay. A bad address is fatal: the client must not be
    /// constructed around a dead link.
    pub async fn connect(
        url: &str,
    ) -> Result<(Arc<Self>, mpsc::Receiver<InboundFrame>), ClientError> {
        let (socket, _) = connect_async(url).await.map_err(|source| ClientError::Connect {
            url: url.to_owned(),
            source,
        })?;
        info!(%url, "connected to relay");

        let (mut sender, mut receiver) = socket.split();
        let (out_tx, mut out_rx) = mpsc::unbounded_channel::<Message>();
        let (frame_tx, frame_rx) = mpsc::channel(INBOUND_BUFFER);

        tokio::spawn(async move {
            while let Some(msg) = out_rx.recv().await {
                let closing = matches!(msg, Message::Close(_));
                if sender.send(msg).await.is_err() || closing {
                    break;
                }
            }
            // Dropping out_rx here closes the queue, so every later send
            // on the link reports LinkClosed instead of vanishing.
            debug!("relay writer finished");
        });

        tokio::spawn(async move {
            while let Some(Ok(msg)) = receiver.next().await {
                match msg {
                    Message::Text(text) => match serde_json::from_str::<InboundFrame>(&text) {
                        Ok(frame) => {
                            if frame_tx.send(frame).await.is_err() {
                                break;
                            }
                        }
                        Err(e) => warn!("invalid relay frame: {e}"),
                    },
                    Message::Close(_) => break,
                    _ => {}
                }
            }
            debug!("relay reader finished");
        });

        Ok((Arc::new(Self { out_tx }), frame_rx))
    }
}

#[async_trait]
impl SignalingLink for WsLink {
    async fn send(&self, frame: OutboundFrame) -> Result<(), ClientError> {
        let json = serde_json::to_string(&frame)?;
        self.out_tx
            .send(Message::Text(json))
            .map_err(|_| ClientError::LinkClosed)
    }

    async fn close(&self) {
        let _ = self.out_tx.send(Message::Close(None));
    }
}
