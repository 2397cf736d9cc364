//! Board storage and rendering.
//!
//! - `Space`: one slot with its ordered occupants
//! - `Board`: every slot for a layout, indexed 0 (finish) upward
//! - `render_board`/`render_space`: text output for humans

mod grid;
mod render;
mod space;

pub use grid::{Board, FINISH_SPACE};
pub use render::{render_board, render_space};
pub use space::{Occupant, SlotPosition, Space};
