pub mod model;

pub use model::{
    CallConfig, ConnectivityState, IceCandidate, InboundFrame, InboundMessage, OutboundFrame,
    OutboundMessage, PeerId, SdpKind, SessionDescription,
};
