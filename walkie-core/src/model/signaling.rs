use crate::model::peer::PeerId;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::fmt;

/// Which side of the negotiation a description plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SdpKind {
    Offer,
    Answer,
}

impl SdpKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Offer => "offer",
            Self::Answer => "answer",
        }
    }
}

impl fmt::Display for SdpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A session description as carried in `offer`/`answer` payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionDescription {
    #[serde(rename = "type")]
    pub kind: SdpKind,
    pub sdp: String,
}

/// A connectivity candidate as carried in `candidate` payloads.
///
/// Wire field names (`id`, `label`) follow the relay protocol; in code the
/// fields go by what they are: the media id and the m-line index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IceCandidate {
    #[serde(rename = "id")]
    pub mid: String,
    #[serde(rename = "label")]
    pub mline_index: u16,
    pub candidate: String,
}

/// A negotiation message received from the relay.
///
/// Every `type` except `init` nests its body under `payload`; `init` carries
/// none. The payload stays untyped here — the dispatcher parses it into a
/// typed command and rejects what it cannot read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundMessage {
    pub from: PeerId,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}

/// A negotiation message addressed to a remote peer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutboundMessage {
    pub to: PeerId,
    #[serde(rename = "type")]
    pub kind: String,
    pub payload: Value,
}

impl OutboundMessage {
    /// Envelope for a locally created description. The message type is the
    /// description's own declared kind.
    pub fn description(to: PeerId, description: &SessionDescription) -> Self {
        Self {
            to,
            kind: description.kind.as_str().to_owned(),
            payload: json!({
                "type": description.kind.as_str(),
                "sdp": description.sdp,
            }),
        }
    }

    /// Envelope for a locally discovered connectivity candidate.
    pub fn candidate(to: PeerId, candidate: &IceCandidate) -> Self {
        Self {
            to,
            kind: "candidate".to_owned(),
            payload: json!({
                "id": candidate.mid,
                "label": candidate.mline_index,
                "candidate": candidate.candidate,
            }),
        }
    }
}

/// Frames the relay delivers to the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum InboundFrame {
    /// The relay's assigned local identity.
    Id(PeerId),
    Message(InboundMessage),
}

/// Frames the client emits to the relay.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum OutboundFrame {
    Message(OutboundMessage),
    /// Announced once after local capture is armed.
    ReadyToStream { name: String },
}
