//! JSON messages exchanged with the game server.

use serde::{Deserialize, Serialize};

use crate::error::ClientError;
use crate::model::{Direction, GameState};

/// Messages pushed by the server. Unknown `type` values land in `Other`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ServerMessage {
    Init { data: GameState },
    Update { data: GameState },
    /// The last move was rejected; `message` is shown to the user as-is.
    Invalid { message: String },
    #[serde(other)]
    Other,
}

/// A move for the selected character, sent on behalf of `player`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MoveRequest {
    pub player: String,
    pub character: String,
    #[serde(rename = "move")]
    pub direction: Direction,
}

pub fn decode_server_message(text: &str) -> Result<ServerMessage, ClientError> {
    serde_json::from_str(text).map_err(ClientError::Decode)
}

pub fn encode_move(req: &MoveRequest) -> Result<String, ClientError> {
    serde_json::to_string(req).map_err(ClientError::Encode)
}
