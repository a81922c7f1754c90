use crate::engine::EngineEvent;
use crate::media::LocalMedia;
use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::mpsc;
use walkie_core::{IceCandidate, PeerId, SessionDescription};

/// Factory for transport connections. One engine instance is shared by all
/// sessions of a client and disposed once, at bulk teardown.
#[async_trait]
pub trait TransportEngine: Send + Sync {
    /// Open a connection for `peer`. `events` is where the connection
    /// reports everything it learns asynchronously, tagged with the peer id.
    async fn create_connection(
        &self,
        peer: PeerId,
        events: mpsc::Sender<EngineEvent>,
    ) -> Result<Box<dyn ConnectionHandle>>;

    /// Release shared engine resources. Called exactly once, from `destroy`.
    async fn dispose(&self);
}

/// Exclusively owned handle to one transport connection. Valid for exactly
/// the owning session's lifetime; nothing may be dispatched to it afterwards.
#[async_trait]
pub trait ConnectionHandle: Send + Sync {
    /// Request a local offer. The description arrives later as
    /// [`EngineEvent::DescriptionCreated`], never synchronously.
    async fn create_offer(&self) -> Result<()>;

    /// Request a local answer. Same delivery contract as `create_offer`.
    async fn create_answer(&self) -> Result<()>;

    async fn set_local_description(&self, description: SessionDescription) -> Result<()>;

    async fn set_remote_description(&self, description: SessionDescription) -> Result<()>;

    /// Whether a remote description has been applied. Gates candidate
    /// admission: candidates that arrive earlier are dropped, not queued.
    async fn has_remote_description(&self) -> bool;

    async fn add_candidate(&self, candidate: IceCandidate) -> Result<()>;

    /// Attach the local capture stream, done once at session creation.
    async fn attach_media(&self, media: &LocalMedia) -> Result<()>;

    /// Graceful close, used by per-peer removal.
    async fn close(&self);

    /// Bulk-teardown disposal, used by `destroy`.
    async fn dispose(&self);
}
