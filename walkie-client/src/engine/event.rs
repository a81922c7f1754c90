use crate::media::RemoteMedia;
use walkie_core::{ConnectivityState, IceCandidate, PeerId, SessionDescription};

/// Notifications from the transport engine, delivered to the session
/// manager's event loop.
///
/// Each event names the peer it belongs to instead of holding a reference
/// back into the registry; the manager resolves the peer by lookup and drops
/// events whose session is already gone.
#[derive(Debug)]
pub enum EngineEvent {
    /// A locally requested offer or answer is ready.
    DescriptionCreated {
        peer: PeerId,
        description: SessionDescription,
    },

    /// Offer/answer creation failed. Best-effort: logged, never retried.
    DescriptionFailed { peer: PeerId, reason: String },

    /// A local connectivity candidate was discovered.
    CandidateDiscovered {
        peer: PeerId,
        candidate: IceCandidate,
    },

    ConnectivityChanged {
        peer: PeerId,
        state: ConnectivityState,
    },

    StreamAdded { peer: PeerId, stream: RemoteMedia },

    StreamRemoved { peer: PeerId },
}
