mod event;
mod rtc;
mod transport;

pub use event::EngineEvent;
pub use rtc::RtcEngine;
pub use transport::{ConnectionHandle, TransportEngine};
