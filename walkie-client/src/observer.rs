use crate::media::{LocalMedia, RemoteMedia};
use async_trait::async_trait;
use walkie_core::{ConnectivityState, PeerId};

/// Implemented by the UI layer to be notified of call events.
///
/// `slot` arguments are endpoint slots in `[0, MAX_PEERS)`; how slots map to
/// display regions is the implementer's business.
#[async_trait]
pub trait CallObserver: Send + Sync {
    /// The relay assigned us a local identity. The UI decides whether this
    /// instance answers an inbound call link or initiates a new one.
    async fn on_call_ready(&self, local_id: PeerId);

    async fn on_status_changed(&self, status: ConnectivityState);

    /// Local capture is armed and the stream handle is available for preview.
    async fn on_local_stream(&self, stream: LocalMedia);

    async fn on_add_remote_stream(&self, stream: RemoteMedia, slot: usize);

    /// Sent before the underlying connection handle is disposed, so the
    /// endpoint identity may still be referenced during teardown.
    async fn on_remove_remote_stream(&self, slot: usize);
}
