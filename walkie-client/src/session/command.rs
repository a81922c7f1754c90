use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use walkie_core::{IceCandidate, SessionDescription};

/// The four negotiation actions a relay message can select. Closed set:
/// anything else on the wire is rejected, not looked up.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// A peer announced itself; create a local offer on its connection.
    Init,

    /// Apply the remote offer, then create a local answer.
    Offer(SessionDescription),

    /// Apply the remote answer; nothing further is created locally.
    Answer(SessionDescription),

    /// Add a connectivity candidate, if a remote description is in place.
    Candidate(IceCandidate),
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("unrecognized message type `{0}`")]
    UnknownKind(String),

    #[error("missing payload for `{0}` message")]
    MissingPayload(&'static str),

    #[error("malformed `{kind}` payload: {source}")]
    Malformed {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl Command {
    /// Parse a message's type tag and payload into a typed command. Runs
    /// before any registry mutation, so a malformed message has no effect
    /// beyond a log line.
    pub fn parse(kind: &str, payload: Option<&Value>) -> Result<Self, CommandError> {
        match kind {
            "init" => Ok(Self::Init),
            "offer" => Ok(Self::Offer(parse_payload("offer", payload)?)),
            "answer" => Ok(Self::Answer(parse_payload("answer", payload)?)),
            "candidate" => Ok(Self::Candidate(parse_payload("candidate", payload)?)),
            other => Err(CommandError::UnknownKind(other.to_owned())),
        }
    }
}

fn parse_payload<T: DeserializeOwned>(
    kind: &'static str,
    payload: Option<&Value>,
) -> Result<T, CommandError> {
    let value = payload.ok_or(CommandError::MissingPayload(kind))?;
    serde_json::from_value(value.clone()).map_err(|source| CommandError::Malformed { kind, source })
}
