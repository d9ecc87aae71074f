/// Errors raised by the socket layer and the message codec.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("failed to open socket to {url}: {reason}")]
    Connect { url: String, reason: String },

    #[error("socket send failed: {0}")]
    Send(String),

    #[error("socket is not open")]
    NotConnected,

    #[error("failed to encode move request: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to decode server message: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("malformed cell occupant {0:?}")]
    MalformedOccupant(String),

    #[error("alert failed: {0}")]
    Notify(String),

    #[error("no global `window` available")]
    MissingWindow,
}
