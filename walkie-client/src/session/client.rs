use crate::engine::{RtcEngine, TransportEngine};
use crate::error::ClientError;
use crate::media::CaptureSource;
use crate::observer::CallObserver;
use crate::session::control::Control;
use crate::session::manager::SessionManager;
use crate::signaling::{SignalingLink, WsLink};
use std::sync::Arc;
use tokio::sync::mpsc;
use walkie_core::{CallConfig, InboundFrame};

/// Channel depth for lifecycle requests.
const CONTROL_BUFFER: usize = 16;

/// Cheap cloneable handle to a running session manager.
///
/// Dropping every handle tears the manager down the same way an explicit
/// [`destroy`](CallClient::destroy) would.
#[derive(Clone)]
pub struct CallClient {
    control_tx: mpsc::Sender<Control>,
}

impl CallClient {
    /// Connect to the relay and spawn a session manager around the
    /// production websocket link and `webrtc` engine. An unreachable relay
    /// is fatal here rather than producing a client around a dead link.
    pub async fn connect(
        url: &str,
        config: CallConfig,
        capture: Arc<dyn CaptureSource>,
        observer: Arc<dyn CallObserver>,
    ) -> Result<Self, ClientError> {
        let (link, link_rx) = WsLink::connect(url).await?;
        let engine = Arc::new(RtcEngine::new(&config)?);
        Ok(Self::with_parts(
            config, link, link_rx, engine, capture, observer,
        ))
    }

    /// Assemble a client from explicit collaborators. This is the seam the
    /// integration tests use to substitute mock engines and links.
    pub fn with_parts(
        config: CallConfig,
        link: Arc<dyn SignalingLink>,
        link_rx: mpsc::Receiver<InboundFrame>,
        engine: Arc<dyn TransportEngine>,
        capture: Arc<dyn CaptureSource>,
        observer: Arc<dyn CallObserver>,
    ) -> Self {
        let (control_tx, control_rx) = mpsc::channel(CONTROL_BUFFER);
        let manager = SessionManager::new(
            config, link, link_rx, engine, capture, observer, control_rx,
        );
        tokio::spawn(manager.run());
        Self { control_tx }
    }

    /// Arm local capture and announce readiness to the relay. Call only
    /// after the platform has granted capture permission; without it this
    /// is a silent no-op.
    pub async fn start(&self, display_name: impl Into<String>) -> Result<(), ClientError> {
        self.send(Control::Start {
            name: display_name.into(),
        })
        .await
    }

    /// Suspend local capture; live sessions are untouched.
    pub async fn pause(&self) -> Result<(), ClientError> {
        self.send(Control::Pause).await
    }

    pub async fn resume(&self) -> Result<(), ClientError> {
        self.send(Control::Resume).await
    }

    /// Tear everything down. Safe to call even if `start` never ran.
    pub async fn destroy(&self) -> Result<(), ClientError> {
        self.send(Control::Destroy).await
    }

    async fn send(&self, control: Control) -> Result<(), ClientError> {
        self.control_tx
            .send(control)
            .await
            .map_err(|_| ClientError::Stopped)
    }
}
