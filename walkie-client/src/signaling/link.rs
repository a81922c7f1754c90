use crate::error::ClientError;
use async_trait::async_trait;
use walkie_core::OutboundFrame;

/// Outbound half of the relay channel.
///
/// Inbound traffic does not go through this trait: a link implementation
/// hands the session manager an `mpsc::Receiver<InboundFrame>` at
/// construction, so inbound frames join the manager's own dispatch queue.
#[async_trait]
pub trait SignalingLink: Send + Sync {
    async fn send(&self, frame: OutboundFrame) -> Result<(), ClientError>;

    async fn close(&self);
}
