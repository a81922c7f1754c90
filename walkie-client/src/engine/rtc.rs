use crate::engine::event::EngineEvent;
use crate::engine::transport::{ConnectionHandle, TransportEngine};
use crate::media::{LocalMedia, RemoteMedia};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::mpsc;
use tracing::{debug, info};
use walkie_core::{
    CallConfig, ConnectivityState, IceCandidate, PeerId, SdpKind, SessionDescription,
};
use webrtc::api::API;
use webrtc::api::APIBuilder;
use webrtc::api::interceptor_registry::register_default_interceptors;
use webrtc::api::media_engine::MediaEngine;
use webrtc::ice_transport::ice_candidate::{RTCIceCandidate, RTCIceCandidateInit};
use webrtc::ice_transport::ice_server::RTCIceServer;
use webrtc::interceptor::registry::Registry;
use webrtc::peer_connection::RTCPeerConnection;
use webrtc::peer_connection::configuration::RTCConfiguration;
use webrtc::peer_connection::peer_connection_state::RTCPeerConnectionState;
use webrtc::peer_connection::sdp::session_description::RTCSessionDescription;
use webrtc::rtp_transceiver::rtp_codec::RTPCodecType;

/// Production transport engine backed by the `webrtc` crate. One `API`
/// instance acts as the shared connection factory.
pub struct RtcEngine {
    api: API,
    stun_servers: Vec<String>,
}

impl RtcEngine {
    pub fn new(config: &CallConfig) -> Result<Self> {
        let mut media = MediaEngine::default();
        media.register_default_codecs()?;
        let registry = register_default_interceptors(Registry::new(), &mut media)?;

        let api = APIBuilder::new()
            .with_media_engine(media)
            .with_interceptor_registry(registry)
            .build();

        Ok(Self {
            api,
            stun_servers: config.stun_servers.clone(),
        })
    }
}

#[async_trait]
impl TransportEngine for RtcEngine {
    async fn create_connection(
        &self,
        peer: PeerId,
        events: mpsc::Sender<EngineEvent>,
    ) -> Result<Box<dyn ConnectionHandle>> {
        let rtc_config = RTCConfiguration {
            ice_servers: vec![RTCIceServer {
                urls: self.stun_servers.clone(),
                ..Default::default()
            }],
            ..Default::default()
        };

        let pc = Arc::new(self.api.new_peer_connection(rtc_config).await?);

        // Connectivity monitoring. Terminal transport states collapse into
        // one Disconnected notification; the manager couples it to removal.
        let state_tx = events.clone();
        let state_peer = peer.clone();
        pc.on_peer_connection_state_change(Box::new(move |s: RTCPeerConnectionState| {
            let tx = state_tx.clone();
            let peer = state_peer.clone();

            Box::pin(async move {
                info!(%peer, state = ?s, "peer connection state changed");
                let mapped = match s {
                    RTCPeerConnectionState::Connected => Some(ConnectivityState::Connected),
                    RTCPeerConnectionState::Failed
                    | RTCPeerConnectionState::Disconnected
                    | RTCPeerConnectionState::Closed => Some(ConnectivityState::Disconnected),
                    _ => None,
                };
                if let Some(state) = mapped {
                    let _ = tx.send(EngineEvent::ConnectivityChanged { peer, state }).await;
                }
            })
        }));

        // Trickle ICE: locally discovered candidates flow out as events.
        let ice_tx = events.clone();
        let ice_peer = peer.clone();
        pc.on_ice_candidate(Box::new(move |c: Option<RTCIceCandidate>| {
            let tx = ice_tx.clone();
            let peer = ice_peer.clone();

            Box::pin(async move {
                let Some(candidate) = c else { return };
                let Ok(init) = candidate.to_json() else {
                    return;
                };
                let candidate = IceCandidate {
                    mid: init.sdp_mid.unwrap_or_default(),
                    mline_index: init.sdp_mline_index.unwrap_or_default(),
                    candidate: init.candidate,
                };
                let _ = tx
                    .send(EngineEvent::CandidateDiscovered { peer, candidate })
                    .await;
            })
        }));

        // Remote media. Track-based engine, stream-based core: the first
        // inbound track announces the remote stream, the first track that
        // stops reading reports its removal.
        let announced = Arc::new(AtomicBool::new(false));
        let ended = Arc::new(AtomicBool::new(false));
        let track_tx = events.clone();
        let track_peer = peer.clone();
        pc.on_track(Box::new(move |track, _receiver, _transceiver| {
            let tx = track_tx.clone();
            let peer = track_peer.clone();
            let announced = announced.clone();
            let ended = ended.clone();

            Box::pin(async move {
                debug!(%peer, ssrc = track.ssrc(), kind = ?track.kind(), "remote track arrived");

                if !announced.swap(true, Ordering::SeqCst) {
                    let stream = RemoteMedia {
                        peer: peer.clone(),
                        id: track.ssrc().to_string(),
                        has_video: track.kind() == RTPCodecType::Video,
                    };
                    let _ = tx.send(EngineEvent::StreamAdded { peer: peer.clone(), stream }).await;
                }

                // Drain the track; a read error means the remote side tore
                // the media down.
                tokio::spawn(async move {
                    while track.read_rtp().await.is_ok() {}
                    if !ended.swap(true, Ordering::SeqCst) {
                        let _ = tx.send(EngineEvent::StreamRemoved { peer }).await;
                    }
                });
            })
        }));

        Ok(Box::new(RtcConnection { peer, pc, events }))
    }

    async fn dispose(&self) {
        // The underlying API object frees itself on drop.
        debug!("transport engine disposed");
    }
}

struct RtcConnection {
    peer: PeerId,
    pc: Arc<RTCPeerConnection>,
    events: mpsc::Sender<EngineEvent>,
}

fn to_rtc(description: &SessionDescription) -> Result<RTCSessionDescription> {
    let desc = match description.kind {
        SdpKind::Offer => RTCSessionDescription::offer(description.sdp.clone())?,
        SdpKind::Answer => RTCSessionDescription::answer(description.sdp.clone())?,
    };
    Ok(desc)
}

impl RtcConnection {
    /// Run description creation off the caller's context; the result comes
    /// back as an engine event.
    fn spawn_create(&self, kind: SdpKind) {
        let pc = self.pc.clone();
        let events = self.events.clone();
        let peer = self.peer.clone();

        tokio::spawn(async move {
            let created = match kind {
                SdpKind::Offer => pc.create_offer(None).await,
                SdpKind::Answer => pc.create_answer(None).await,
            };
            let event = match created {
                Ok(desc) => EngineEvent::DescriptionCreated {
                    peer,
                    description: SessionDescription {
                        kind,
                        sdp: desc.sdp,
                    },
                },
                Err(e) => EngineEvent::DescriptionFailed {
                    peer,
                    reason: e.to_string(),
                },
            };
            let _ = events.send(event).await;
        });
    }
}

#[async_trait]
impl ConnectionHandle for RtcConnection {
    async fn create_offer(&self) -> Result<()> {
        self.spawn_create(SdpKind::Offer);
        Ok(())
    }

    async fn create_answer(&self) -> Result<()> {
        self.spawn_create(SdpKind::Answer);
        Ok(())
    }

    async fn set_local_description(&self, description: SessionDescription) -> Result<()> {
        let desc = to_rtc(&description)?;
        self.pc
            .set_local_description(desc)
            .await
            .context("failed to set local description")?;
        Ok(())
    }

    async fn set_remote_description(&self, description: SessionDescription) -> Result<()> {
        let desc = to_rtc(&description)?;
        self.pc
            .set_remote_description(desc)
            .await
            .context("failed to set remote description")?;
        Ok(())
    }

    async fn has_remote_description(&self) -> bool {
        self.pc.remote_description().await.is_some()
    }

    async fn add_candidate(&self, candidate: IceCandidate) -> Result<()> {
        let init = RTCIceCandidateInit {
            candidate: candidate.candidate,
            sdp_mid: Some(candidate.mid),
            sdp_mline_index: Some(candidate.mline_index),
            username_fragment: None,
        };
        self.pc
            .add_ice_candidate(init)
            .await
            .context("failed to add ICE candidate")?;
        Ok(())
    }

    async fn attach_media(&self, media: &LocalMedia) -> Result<()> {
        self.pc
            .add_transceiver_from_kind(RTPCodecType::Audio, None)
            .await
            .context("failed to add audio transceiver")?;
        if media.has_video {
            self.pc
                .add_transceiver_from_kind(RTPCodecType::Video, None)
                .await
                .context("failed to add video transceiver")?;
        }
        Ok(())
    }

    async fn close(&self) {
        if let Err(e) = self.pc.close().await {
            debug!(peer = %self.peer, "error closing peer connection: {e}");
        }
    }

    async fn dispose(&self) {
        self.close().await;
    }
}
