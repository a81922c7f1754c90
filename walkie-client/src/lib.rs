mod error;
mod observer;

pub mod engine;
pub mod media;
pub mod session;
pub mod signaling;

pub use error::ClientError;
pub use observer::CallObserver;

pub use engine::{ConnectionHandle, EngineEvent, RtcEngine, TransportEngine};
pub use media::{CaptureSource, LocalMedia, RemoteMedia, StaticCapture};
pub use session::{CallClient, Command, CommandError, MAX_PEERS, Session, SessionManager};
pub use signaling::{SignalingLink, WsLink};
