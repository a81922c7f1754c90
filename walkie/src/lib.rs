pub use walkie_core::model::PeerId;

pub mod model {
    pub use walkie_core::model::*;
}

#[cfg(feature = "client")]
pub mod client {
    pub use walkie_client::*;
}
