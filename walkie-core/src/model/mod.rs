mod config;
mod connectivity;
mod peer;
mod signaling;

pub use config::CallConfig;
pub use connectivity::ConnectivityState;
pub use peer::PeerId;
pub use signaling::{
    IceCandidate, InboundFrame, InboundMessage, OutboundFrame, OutboundMessage, SdpKind,
    SessionDescription,
};
