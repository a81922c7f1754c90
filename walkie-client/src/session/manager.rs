use crate::engine::{EngineEvent, TransportEngine};
use crate::media::{CaptureSource, LocalMedia};
use crate::observer::CallObserver;
use crate::session::command::Command;
use crate::session::control::Control;
use crate::session::registry::SessionRegistry;
use crate::session::session::Session;
use crate::signaling::SignalingLink;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};
use walkie_core::{
    ConnectivityState, InboundFrame, InboundMessage, OutboundFrame, OutboundMessage, PeerId,
};

/// Channel depth for transport-engine events.
const ENGINE_BUFFER: usize = 256;

/// Top-level orchestrator: owns the signaling link, the session registry,
/// and the local capture handle, and runs the single event loop everything
/// else reports into.
///
/// Signaling frames, engine callbacks, and lifecycle requests all arrive as
/// messages here, so every registry read-then-mutate sequence is naturally
/// one critical section.
pub struct SessionManager {
    config: walkie_core::CallConfig,
    registry: SessionRegistry,
    local: Option<LocalMedia>,
    link: Arc<dyn SignalingLink>,
    link_rx: mpsc::Receiver<InboundFrame>,
    engine: Arc<dyn TransportEngine>,
    engine_tx: mpsc::Sender<EngineEvent>,
    engine_rx: mpsc::Receiver<EngineEvent>,
    capture: Arc<dyn CaptureSource>,
    observer: Arc<dyn CallObserver>,
    control_rx: mpsc::Receiver<Control>,
}

impl SessionManager {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        config: walkie_core::CallConfig,
        link: Arc<dyn SignalingLink>,
        link_rx: mpsc::Receiver<InboundFrame>,
        engine: Arc<dyn TransportEngine>,
        capture: Arc<dyn CaptureSource>,
        observer: Arc<dyn CallObserver>,
        control_rx: mpsc::Receiver<Control>,
    ) -> Self {
        let (engine_tx, engine_rx) = mpsc::channel(ENGINE_BUFFER);
        Self {
            config,
            registry: SessionRegistry::new(),
            local: None,
            link,
            link_rx,
            engine,
            engine_tx,
            engine_rx,
            capture,
            observer,
            control_rx,
        }
    }

    pub async fn run(mut self) {
        info!("session manager loop started");

        loop {
            tokio::select! {
                ctrl = self.control_rx.recv() => {
                    match ctrl {
                        Some(c) => {
                            if !self.handle_control(c).await {
                                break;
                            }
                        }
                        None => {
                            // Every CallClient handle dropped; tear down.
                            self.destroy().await;
                            break;
                        }
                    }
                }

                frame = self.link_rx.recv() => {
                    match frame {
                        Some(f) => self.handle_frame(f).await,
                        None => {
                            info!("signaling link closed, shutting down");
                            self.destroy().await;
                            break;
                        }
                    }
                }

                evt = self.engine_rx.recv() => {
                    // The manager holds a sender clone, so this arm never
                    // yields None.
                    if let Some(e) = evt {
                        self.handle_engine_event(e).await;
                    }
                }
            }
        }

        info!("session manager loop finished");
    }

    // ----- lifecycle ------------------------------------------------------

    /// Returns `false` once the call has been destroyed and the loop should
    /// stop.
    async fn handle_control(&mut self, control: Control) -> bool {
        match control {
            Control::Start { name } => self.start(name).await,
            Control::Pause => {
                if self.local.is_some() {
                    self.capture.pause().await;
                }
            }
            Control::Resume => {
                if self.local.is_some() {
                    self.capture.resume().await;
                }
            }
            Control::Destroy => {
                self.destroy().await;
                return false;
            }
        }
        true
    }

    async fn start(&mut self, name: String) {
        let media = match self.capture.create_local_stream(&self.config).await {
            Ok(m) => m,
            Err(e) => {
                // Permission has not been granted; by contract this is a
                // silent no-op, not an error.
                debug!("capture unavailable, start ignored: {e}");
                return;
            }
        };

        self.observer.on_local_stream(media.clone()).await;
        self.local = Some(media);

        let frame = OutboundFrame::ReadyToStream { name };
        if let Err(e) = self.link.send(frame).await {
            error!("failed to announce readiness: {e}");
        }
    }

    async fn destroy(&mut self) {
        // Bulk teardown: no per-peer removal notifications here.
        for session in self.registry.drain() {
            session.handle.dispose().await;
        }
        if self.local.take().is_some() {
            self.capture.dispose().await;
        }
        self.engine.dispose().await;
        self.link.close().await;
    }

    // ----- signaling dispatch ---------------------------------------------

    async fn handle_frame(&mut self, frame: InboundFrame) {
        match frame {
            InboundFrame::Id(local_id) => {
                info!(%local_id, "relay assigned local identity");
                self.observer.on_call_ready(local_id).await;
            }
            InboundFrame::Message(msg) => self.dispatch(msg).await,
        }
    }

    async fn dispatch(&mut self, msg: InboundMessage) {
        // Parse before touching the registry: a malformed message must leave
        // state exactly as it was, including not creating a session.
        let command = match Command::parse(&msg.kind, msg.payload.as_ref()) {
            Ok(c) => c,
            Err(e) => {
                warn!(from = %msg.from, "dropping signal: {e}");
                return;
            }
        };

        // Lazy peer creation: a session comes into existence on first
        // contact, whatever the verb. At capacity the whole message is
        // silently dropped.
        if !self.registry.contains(&msg.from) {
            let Some(slot) = self.registry.find_free_slot() else {
                debug!(from = %msg.from, "at capacity, ignoring peer");
                return;
            };
            if !self.open_session(msg.from.clone(), slot).await {
                return;
            }
        }

        self.apply(&msg.from, command).await;
    }

    async fn open_session(&mut self, remote_id: PeerId, slot: usize) -> bool {
        info!(peer = %remote_id, slot, "opening session");

        let handle = match self
            .engine
            .create_connection(remote_id.clone(), self.engine_tx.clone())
            .await
        {
            Ok(h) => h,
            Err(e) => {
                warn!(peer = %remote_id, "failed to open connection: {e}");
                return false;
            }
        };

        if let Some(media) = &self.local {
            if let Err(e) = handle.attach_media(media).await {
                warn!(peer = %remote_id, "failed to attach local media: {e}");
            }
        }

        self.registry.add(Session::new(remote_id, slot, handle));
        self.observer
            .on_status_changed(ConnectivityState::Connecting)
            .await;
        true
    }

    async fn apply(&mut self, peer: &PeerId, command: Command) {
        // A stale or unknown reference is a no-op, never fatal.
        let Some(session) = self.registry.get(peer) else {
            debug!(%peer, "command for unknown peer dropped");
            return;
        };

        match command {
            Command::Init => {
                if let Err(e) = session.handle.create_offer().await {
                    warn!(%peer, "offer creation failed: {e}");
                }
            }
            Command::Offer(description) => {
                if let Err(e) = session.handle.set_remote_description(description).await {
                    warn!(%peer, "failed to apply remote offer: {e}");
                    return;
                }
                if let Err(e) = session.handle.create_answer().await {
                    warn!(%peer, "answer creation failed: {e}");
                }
            }
            Command::Answer(description) => {
                if let Err(e) = session.handle.set_remote_description(description).await {
                    warn!(%peer, "failed to apply remote answer: {e}");
                }
            }
            Command::Candidate(candidate) => {
                // Out-of-order candidates are dropped, not queued; the relay
                // is expected to deliver per-peer messages in causal order.
                if !session.handle.has_remote_description().await {
                    debug!(%peer, "candidate before remote description, dropped");
                    return;
                }
                if let Err(e) = session.handle.add_candidate(candidate).await {
                    warn!(%peer, "failed to add candidate: {e}");
                }
            }
        }
    }

    // ----- engine events --------------------------------------------------

    async fn handle_engine_event(&mut self, event: EngineEvent) {
        match event {
            EngineEvent::DescriptionCreated { peer, description } => {
                let Some(session) = self.registry.get(&peer) else {
                    debug!(%peer, "description for removed session dropped");
                    return;
                };

                // The envelope goes out before the description is set
                // locally.
                let msg = OutboundMessage::description(peer.clone(), &description);
                if let Err(e) = self.link.send(OutboundFrame::Message(msg)).await {
                    error!(%peer, "failed to send local description: {e}");
                }
                if let Err(e) = session.handle.set_local_description(description).await {
                    warn!(%peer, "failed to set local description: {e}");
                }
            }

            EngineEvent::DescriptionFailed { peer, reason } => {
                // No retry; if the session is unusable the connectivity
                // state change will tear it down.
                warn!(%peer, "description creation failed: {reason}");
            }

            EngineEvent::CandidateDiscovered { peer, candidate } => {
                if !self.registry.contains(&peer) {
                    debug!(%peer, "candidate for removed session dropped");
                    return;
                }
                let msg = OutboundMessage::candidate(peer, &candidate);
                if let Err(e) = self.link.send(OutboundFrame::Message(msg)).await {
                    error!("failed to send candidate: {e}");
                }
            }

            EngineEvent::ConnectivityChanged { peer, state } => {
                let Some(session) = self.registry.get_mut(&peer) else {
                    debug!(%peer, "state change for removed session dropped");
                    return;
                };
                if session.state == state {
                    debug!(%peer, %state, "redundant connectivity transition dropped");
                    return;
                }
                session.state = state;

                if state == ConnectivityState::Disconnected {
                    self.remove_session(&peer).await;
                    self.observer
                        .on_status_changed(ConnectivityState::Disconnected)
                        .await;
                }
            }

            EngineEvent::StreamAdded { peer, stream } => {
                let Some(session) = self.registry.get(&peer) else {
                    debug!(%peer, "stream for removed session dropped");
                    return;
                };
                self.observer
                    .on_add_remote_stream(stream, session.slot)
                    .await;
            }

            EngineEvent::StreamRemoved { peer } => {
                self.remove_session(&peer).await;
            }
        }
    }

    /// Single teardown entry point for one peer. Idempotent: both the ICE
    /// disconnect and the stream-removal triggers route through here, and
    /// the second call finds nothing to do.
    async fn remove_session(&mut self, peer: &PeerId) {
        let Some(session) = self.registry.get(peer) else {
            return;
        };
        let slot = session.slot;

        info!(%peer, slot, "removing session");

        // The UI learns about the endpoint before the handle goes away; the
        // registry entry and slot are released last.
        self.observer.on_remove_remote_stream(slot).await;
        session.handle.close().await;
        self.registry.take(peer);
    }
}
