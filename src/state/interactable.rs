use crate::model::GameState;

/// A cell takes clicks only when it holds a piece of the player to move.
pub fn is_interactable(game: &GameState, row: usize, col: usize) -> bool {
    game.occupant(row, col)
        .is_some_and(|occ| occ.player == game.current_player)
}

// Same shape as the grid, so ragged rows keep their lengths
pub fn compute_interactable_mask(game: &GameState) -> Vec<Vec<bool>> {
    game.grid
        .iter()
        .enumerate()
        .map(|(r, row)| (0..row.len()).map(|c| is_interactable(game, r, c)).collect())
        .collect()
}
