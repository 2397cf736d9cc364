//! Plain-text rendering of the board.
//!
//! Presentation only: the output is derived from the board and never read
//! back by the engine.

use std::fmt::{self, Write};

use super::grid::{Board, FINISH_SPACE};
use super::space::Space;

/// Render a slot's occupants as `[Ap/Bq]`.
///
/// ```
/// use ludo_engine::board::{render_space, Occupant, SlotPosition, Space};
/// use ludo_engine::core::{PlayerId, TokenId};
///
/// let mut space = Space::new();
/// assert_eq!(render_space(&space), "[]");
///
/// space.insert(Occupant::new(PlayerId::new(0), TokenId::P), SlotPosition::Back);
/// space.insert(Occupant::new(PlayerId::new(0), TokenId::Q), SlotPosition::Back);
/// assert_eq!(render_space(&space), "[Ap/Aq]");
/// ```
#[must_use]
pub fn render_space(space: &Space) -> String {
    let names: Vec<String> = space.occupants().iter().map(ToString::to_string).collect();
    format!("[{}]", names.join("/"))
}

/// Render the whole board as a tab-separated grid.
///
/// The finish slot gets its own line. Track slots follow in rows of one
/// seat's stretch of track, then each home stretch on its own row. Empty
/// slots show their index, occupied ones their occupants.
#[must_use]
pub fn render_board(board: &Board) -> String {
    board.to_string()
}

/// Write the grid described by [`render_board`] into `out`.
pub(super) fn write_board(out: &mut impl Write, board: &Board) -> fmt::Result {
    let config = board.config();

    writeln!(out, "{}\t", render_space(board.space(FINISH_SPACE)))?;

    for (index, space) in board.iter().skip(1) {
        if space.is_empty() {
            write!(out, "{index}")?;
        } else {
            out.write_str(&render_space(space))?;
        }
        out.write_char('\t')?;

        let row_end = if index <= config.track_len {
            index % config.start_spacing() == 0
        } else {
            (index - config.track_len) % config.stretch_len == 0
        };
        if row_end {
            out.write_char('\n')?;
        }
    }

    out.write_char('\n')
}
