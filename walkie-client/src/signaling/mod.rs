mod link;
mod ws_link;

pub use link::SignalingLink;
pub use ws_link::WsLink;
