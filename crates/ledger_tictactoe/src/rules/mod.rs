//! Game rules for tic-tac-toe.
//!
//! Pure functions over the full board. Nothing here is incremental;
//! every call rescans all eight lines.

pub mod draw;
pub mod win;

pub use draw::{is_full, is_tie};
pub use win::{WINNING_LINES, check_winner};
