use anyhow::{Result, bail};
use async_trait::async_trait;
use tracing::debug;
use walkie_core::{CallConfig, PeerId};

/// Handle to the local capture stream. Opaque to the negotiation core: the
/// transport engine and the UI layer give it meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalMedia {
    pub id: String,
    pub has_video: bool,
}

/// Handle to a media stream received from a remote peer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteMedia {
    pub peer: PeerId,
    pub id: String,
    pub has_video: bool,
}

/// Provider of the local capture device.
///
/// The device layer itself (camera selection, permission prompting) lives
/// outside this crate; the session manager only asks it to arm, suspend, and
/// release capture.
#[async_trait]
pub trait CaptureSource: Send + Sync {
    /// Bind the capture device into a local stream: always an audio track,
    /// plus a video track iff the config enables video. Fails when the
    /// platform has not granted capture permission.
    async fn create_local_stream(&self, config: &CallConfig) -> Result<LocalMedia>;

    async fn pause(&self);

    async fn resume(&self);

    async fn dispose(&self);
}

/// Capture source with fixed availability. Stands in for a platform device
/// layer in demos and anywhere the permission decision is made up front.
pub struct StaticCapture {
    available: bool,
}

impl StaticCapture {
    pub fn new(available: bool) -> Self {
        Self { available }
    }
}

#[async_trait]
impl CaptureSource for StaticCapture {
    async fn create_local_stream(&self, config: &CallConfig) -> Result<LocalMedia> {
        if !self.available {
            bail!("capture permission not granted");
        }
        Ok(LocalMedia {
            id: "local0".to_owned(),
            has_video: config.video_enabled,
        })
    }

    async fn pause(&self) {
        debug!("capture paused");
    }

    async fn resume(&self) {
        debug!("capture resumed");
    }

    async fn dispose(&self) {
        debug!("capture disposed");
    }
}
