use crate::engine::ConnectionHandle;
use walkie_core::{ConnectivityState, PeerId};

/// Negotiation state for one remote peer.
///
/// Owns its transport connection handle exclusively; the handle is valid for
/// exactly this session's lifetime and is closed once, on removal. The
/// endpoint slot is held from creation to destruction and only then reusable.
pub struct Session {
    pub remote_id: PeerId,
    pub slot: usize,
    pub handle: Box<dyn ConnectionHandle>,
    pub state: ConnectivityState,
}

impl Session {
    pub fn new(remote_id: PeerId, slot: usize, handle: Box<dyn ConnectionHandle>) -> Self {
        Self {
            remote_id,
            slot,
            handle,
            state: ConnectivityState::Connecting,
        }
    }
}
