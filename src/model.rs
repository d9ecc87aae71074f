//! Client-side data model for Grid Duel.
//! The server owns the game; everything here is a read-only mirror of its
//! latest snapshot plus the UI-only selection and connection status.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;
use yew::Reducible;

use crate::error::ClientError;
use crate::protocol::MoveRequest;
use crate::state::{Selection, is_interactable};
use tracing::warn;

/// Separator between the player tag and the character id in a packed cell.
pub const OCCUPANT_SEPARATOR: char = '-';

/// A piece on the board, decoded once from the packed `"<player>-<character>"` form.
/// Only the first two `-`-separated parts count; anything after them is dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Occupant {
    pub player: String,
    pub character: String,
}

impl FromStr for Occupant {
    type Err = ClientError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let mut parts = raw.split(OCCUPANT_SEPARATOR);
        match (parts.next(), parts.next()) {
            (Some(player), Some(character)) if !player.is_empty() && !character.is_empty() => {
                Ok(Occupant {
                    player: player.to_string(),
                    character: character.to_string(),
                })
            }
            _ => Err(ClientError::MalformedOccupant(raw.to_string())),
        }
    }
}

/// Board row-major; `None` is an empty cell.
pub type Grid = Vec<Vec<Option<Occupant>>>;

/// Wire shape of a snapshot before occupants are decoded.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawGameState {
    grid: Vec<Vec<Option<String>>>,
    current_player: String,
    #[serde(default)]
    move_history: Vec<String>,
    #[serde(default)]
    captured_history: Vec<String>,
    #[serde(default)]
    winner: Option<String>,
}

/// Authoritative snapshot pushed by the server. Never edited in place.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawGameState")]
pub struct GameState {
    pub grid: Grid,
    /// Player whose turn it is.
    pub current_player: String,
    pub move_history: Vec<String>,
    pub captured_history: Vec<String>,
    /// Set once the game is over.
    pub winner: Option<String>,
}

// A bad cell only costs that cell; the rest of the snapshot still applies
fn decode_cell(cell: Option<String>) -> Option<Occupant> {
    let raw = cell.filter(|s| !s.is_empty())?;
    match raw.parse::<Occupant>() {
        Ok(occ) => Some(occ),
        Err(err) => {
            warn!(error = %err, "treating malformed cell as empty");
            None
        }
    }
}

impl From<RawGameState> for GameState {
    fn from(raw: RawGameState) -> Self {
        let grid = raw
            .grid
            .into_iter()
            .map(|row| row.into_iter().map(decode_cell).collect())
            .collect();
        GameState {
            grid,
            current_player: raw.current_player,
            move_history: raw.move_history,
            captured_history: raw.captured_history,
            winner: raw.winner.filter(|w| !w.is_empty()),
        }
    }
}

impl GameState {
    pub fn occupant(&self, row: usize, col: usize) -> Option<&Occupant> {
        self.grid.get(row)?.get(col)?.as_ref()
    }

    /// Width of the widest row.
    pub fn column_count(&self) -> usize {
        self.grid.iter().map(Vec::len).max().unwrap_or(0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    ForwardLeft,
    ForwardRight,
    BackLeft,
    BackRight,
    Left,
    Right,
    Forward,
    Back,
}

impl Direction {
    /// Short code shown on the button and sent verbatim to the server.
    pub fn label(self) -> &'static str {
        use Direction::*;
        match self {
            ForwardLeft => "FL",
            ForwardRight => "FR",
            BackLeft => "BL",
            BackRight => "BR",
            Left => "L",
            Right => "R",
            Forward => "F",
            Back => "B",
        }
    }
}

impl Serialize for Direction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub const DIAGONAL_MOVES: &[Direction] = &[
    Direction::ForwardLeft,
    Direction::ForwardRight,
    Direction::BackLeft,
    Direction::BackRight,
];

pub const ORTHOGONAL_MOVES: &[Direction] = &[
    Direction::Left,
    Direction::Right,
    Direction::Forward,
    Direction::Back,
];

/// Character classes with a non-default move set. Display only; the server validates.
const MOVE_SETS: &[(&str, &[Direction])] = &[("H2", DIAGONAL_MOVES)];

/// Directions offered for `character`, in button order.
pub fn move_set(character: &str) -> &'static [Direction] {
    MOVE_SETS
        .iter()
        .find(|(id, _)| *id == character)
        .map(|(_, dirs)| *dirs)
        .unwrap_or(ORTHOGONAL_MOVES)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionState {
    #[default]
    Connecting,
    Open,
    Closed,
    Failed,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClientState {
    pub game: GameState,
    /// Piece picked for the next move, if any.
    pub selection: Option<Selection>,
    pub connection: ConnectionState,
}

#[derive(Clone, Debug)]
pub enum ClientAction {
    /// `init` or `update` from the server; replaces the whole game view.
    ApplySnapshot(GameState),
    Select { row: usize, col: usize },
    ClearSelection,
    SetConnection(ConnectionState),
}

impl ClientState {
    /// Outbound request for `direction`, acting as the current player.
    pub fn move_request(&self, direction: Direction) -> Option<MoveRequest> {
        let sel = self.selection.as_ref()?;
        Some(MoveRequest {
            player: self.game.current_player.clone(),
            character: sel.character.clone(),
            direction,
        })
    }

    /// Directions for the selected piece; empty without a selection.
    pub fn available_moves(&self) -> &'static [Direction] {
        match &self.selection {
            Some(sel) => move_set(&sel.character),
            None => &[],
        }
    }
}

impl Reducible for ClientState {
    type Action = ClientAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use ClientAction::*;
        let mut new = (*self).clone();
        match action {
            ApplySnapshot(game) => {
                new.game = game;
            }
            Select { row, col } => {
                if !is_interactable(&self.game, row, col) {
                    return self;
                }
                let Some(occ) = self.game.occupant(row, col) else {
                    return self;
                };
                new.selection = Some(Selection {
                    character: occ.character.clone(),
                    row,
                    col,
                });
            }
            ClearSelection => {
                if self.selection.is_none() {
                    return self;
                }
                new.selection = None;
            }
            SetConnection(c) => {
                new.connection = c;
            }
        }
        Rc::new(new)
    }
}
