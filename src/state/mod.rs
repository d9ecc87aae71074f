pub mod interactable;
pub mod selection;

pub use interactable::{compute_interactable_mask, is_interactable};
pub use selection::Selection;
