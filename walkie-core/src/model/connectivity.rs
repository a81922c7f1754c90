use serde::{Deserialize, Serialize};
use std::fmt;

/// Connectivity of one session, derived from transport-engine state changes.
///
/// A session is born `Connecting`. The transition to `Disconnected` is
/// coupled to the session's removal from the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectivityState {
    Connecting,
    Connected,
    Disconnected,
}

impl fmt::Display for ConnectivityState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Connecting => "CONNECTING",
            Self::Connected => "CONNECTED",
            Self::Disconnected => "DISCONNECTED",
        };
        write!(f, "{s}")
    }
}
