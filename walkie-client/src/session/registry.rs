use crate::session::session::Session;
use std::collections::HashMap;
use walkie_core::PeerId;

/// Upper bound on simultaneous sessions, one per display endpoint.
pub const MAX_PEERS: usize = 2;

/// Bounded mapping from remote identity to session, plus the endpoint slot
/// pool. Owned exclusively by the session manager's event loop; all access
/// is already serialized, so plain collections suffice.
#[derive(Default)]
pub struct SessionRegistry {
    sessions: HashMap<PeerId, Session>,
    slots: [bool; MAX_PEERS],
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lowest free endpoint slot, if any. Does not mutate.
    pub fn find_free_slot(&self) -> Option<usize> {
        self.slots.iter().position(|taken| !taken)
    }

    /// Register a session and mark its slot taken. The caller must have
    /// checked `find_free_slot` and identity uniqueness first.
    pub fn add(&mut self, session: Session) {
        debug_assert!(!self.slots[session.slot], "slot already taken");
        debug_assert!(
            !self.sessions.contains_key(&session.remote_id),
            "session already present"
        );
        self.slots[session.slot] = true;
        self.sessions.insert(session.remote_id.clone(), session);
    }

    /// Remove a session and free its slot. `None` when absent, which makes
    /// removal idempotent for callers.
    pub fn take(&mut self, id: &PeerId) -> Option<Session> {
        let session = self.sessions.remove(id)?;
        self.slots[session.slot] = false;
        Some(session)
    }

    pub fn get(&self, id: &PeerId) -> Option<&Session> {
        self.sessions.get(id)
    }

    pub fn get_mut(&mut self, id: &PeerId) -> Option<&mut Session> {
        self.sessions.get_mut(id)
    }

    pub fn contains(&self, id: &PeerId) -> bool {
        self.sessions.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Drain every session, freeing all slots. Bulk-teardown path.
    pub fn drain(&mut self) -> Vec<Session> {
        self.slots = [false; MAX_PEERS];
        self.sessions.drain().map(|(_, s)| s).collect()
    }
}
