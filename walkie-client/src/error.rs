use thiserror::Error;

/// Failures surfaced by the client's public API.
///
/// Per-message negotiation failures never appear here: those are contained
/// to one dispatch invocation and only logged. What does surface is fatal
/// startup trouble (unreachable relay) and use of a handle whose manager has
/// already shut down.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to reach relay at {url}: {source}")]
    Connect {
        url: String,
        #[source]
        source: tokio_tungstenite::tungstenite::Error,
    },

    #[error("signaling link is closed")]
    LinkClosed,

    #[error("session manager is no longer running")]
    Stopped,

    #[error("transport engine error: {0}")]
    Engine(#[from] anyhow::Error),

    #[error("serialization error: {0}")]
    Codec(#[from] serde_json::Error),
}
