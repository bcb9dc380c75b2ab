//! Geometry Index Module
//!
//! Resolves pointer coordinates to columns and cards using each model's last
//! measured rectangle. Column lookup is a 1-D scan over the horizontal axis,
//! card lookup a 1-D scan over a column's visible cards on the vertical
//! axis. Scans run in rendering order and the first match wins, so
//! overlapping rectangles resolve the same way they paint. Unmeasured
//! models never match; callers treat a miss as a no-op.

use crate::board::BoardState;
use crate::types::{CardRef, ColumnRef};

/// Pointer-to-model resolution over the board's measured rectangles.
pub struct GeometryIndex;

impl GeometryIndex {
    /// The column whose horizontal span contains `x`, in rendering order.
    pub fn find_column(board: &BoardState, x: f32) -> Option<ColumnRef> {
        board
            .columns()
            .find(|column| {
                column
                    .read()
                    .dimensions()
                    .is_some_and(|rect| rect.contains_x(x))
            })
            .cloned()
    }

    /// The visible card in `column` whose vertical span contains `y`.
    ///
    /// Restricted to cards that are currently rendered and visible; hidden
    /// or unmeasured cards never match.
    pub fn find_card_in_column(
        board: &BoardState,
        column: &ColumnRef,
        y: f32,
    ) -> Option<CardRef> {
        let column_id = column.read().id.clone();
        board
            .cards_in(&column_id)?
            .iter()
            .find(|card| {
                let card = card.read();
                card.is_rendered_and_visible()
                    && card.dimensions().is_some_and(|rect| rect.contains_y(y))
            })
            .cloned()
    }

    /// Signed scroll direction when `y` lingers near a column's top or
    /// bottom edge: `-1.0` near the top, `1.0` near the bottom, `None` in
    /// the middle band or when the column is unmeasured.
    pub fn scrolling_direction(column: &ColumnRef, y: f32, edge_margin: f32) -> Option<f32> {
        let rect = column.read().dimensions()?;

        if y < rect.y + edge_margin {
            Some(-1.0)
        } else if y > rect.y + rect.height - edge_margin {
            Some(1.0)
        } else {
            None
        }
    }
}
