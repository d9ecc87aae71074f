//! View model derived from [`ClientState`] on every render.
//! Pure functions only, so rendering the same state twice gives the same output.

use crate::model::{ClientState, ConnectionState, GameState, Occupant};
use crate::state::compute_interactable_mask;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellView {
    pub row: usize,
    pub col: usize,
    pub occupant: Option<Occupant>,
    pub selected: bool,
    /// Gets a click handler; only the mover's own pieces do.
    pub clickable: bool,
}

impl CellView {
    /// CSS classes: `cell`, then the owner tag, then `selected`.
    pub fn classes(&self) -> Vec<String> {
        let mut out = vec!["cell".to_string()];
        if let Some(occ) = &self.occupant {
            out.push(occ.player.clone());
            if self.selected {
                out.push("selected".to_string());
            }
        }
        out
    }

    /// Pins the cell to its own grid line so short rows never reflow.
    pub fn placement_style(&self) -> String {
        format!("grid-row:{}; grid-column:{};", self.row + 1, self.col + 1)
    }

    pub fn label(&self) -> &str {
        self.occupant
            .as_ref()
            .map(|o| o.character.as_str())
            .unwrap_or("")
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardView {
    pub columns: usize,
    pub rows: Vec<Vec<CellView>>,
}

impl BoardView {
    pub fn cells(&self) -> impl Iterator<Item = &CellView> {
        self.rows.iter().flatten()
    }
}

pub fn board_view(state: &ClientState) -> BoardView {
    let game = &state.game;
    let mask = compute_interactable_mask(game);
    let rows = game
        .grid
        .iter()
        .zip(mask)
        .enumerate()
        .map(|(r, (row, mask_row))| {
            row.iter()
                .zip(mask_row)
                .enumerate()
                .map(|(c, (cell, clickable))| CellView {
                    row: r,
                    col: c,
                    occupant: cell.clone(),
                    selected: cell.is_some()
                        && state.selection.as_ref().is_some_and(|s| s.is_at(r, c)),
                    clickable,
                })
                .collect()
        })
        .collect();
    BoardView {
        columns: game.column_count(),
        rows,
    }
}

pub fn status_text(game: &GameState) -> String {
    match &game.winner {
        Some(w) => format!("Player {} wins!", w),
        None => format!("Current Turn: Player {}", game.current_player),
    }
}

/// Banner shown while the socket is not usable.
pub fn connection_notice(connection: ConnectionState) -> Option<&'static str> {
    match connection {
        ConnectionState::Open => None,
        ConnectionState::Connecting => Some("Connecting to server..."),
        ConnectionState::Closed => Some("Disconnected from server"),
        ConnectionState::Failed => Some("Connection error"),
    }
}
