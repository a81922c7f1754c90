mod client;
mod command;
mod control;
mod manager;
mod registry;
mod session;

pub use client::CallClient;
pub use command::{Command, CommandError};
pub use control::Control;
pub use manager::SessionManager;
pub use registry::{MAX_PEERS, SessionRegistry};
pub use session::Session;
