// Piece picked for the next move; lives only in the browser
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub character: String,
    pub row: usize,
    pub col: usize,
}

impl Selection {
    pub fn is_at(&self, row: usize, col: usize) -> bool {
        self.row == row && self.col == col
    }
}
