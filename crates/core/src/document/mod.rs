//! Cursor and line snapshots, plus an in-memory buffer for hosts without a
//! native editor.

pub mod buffer;
pub mod types;

pub use buffer::{DocumentError, TextDocument};
pub use types::{CursorPosition, LineSample};
