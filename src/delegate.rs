//! Host-facing delegate interface.
//!
//! Bridges the interaction core to whatever renders it. The controller
//! calls these methods at well-defined points; every method is fallible so
//! a misbehaving host cannot wedge the state machine - failures are caught
//! at the call site, logged, and treated as no-ops.

use crate::board::BoardState;
use crate::types::{CardModel, ColumnModel, PageDirection, Rect};
use anyhow::Result;

/// Callbacks and measurement hooks supplied by the embedding host.
///
/// All methods have no-op defaults; a host implements the subset it renders.
pub trait BoardDelegate {
    /// The authoritative maps were replaced (rebuild or either move
    /// operation). Re-derive column/card lists from `board`.
    fn on_board_changed(&mut self, board: &BoardState) -> Result<()> {
        let _ = board;
        Ok(())
    }

    /// A drag that actually started has completed. `target_index` is the
    /// card's resulting slot in the destination column.
    fn on_drag_end(
        &mut self,
        source: &ColumnModel,
        destination: &ColumnModel,
        card: &CardModel,
        target_index: usize,
    ) -> Result<()> {
        let _ = (source, destination, card, target_index);
        Ok(())
    }

    /// Scroll the given column's card list to `offset`.
    fn on_column_scroll_requested(&mut self, column_id: &str, offset: f32) -> Result<()> {
        let _ = (column_id, offset);
        Ok(())
    }

    /// Snap the carousel to the previous/next column.
    fn on_page_requested(&mut self, direction: PageDirection) -> Result<()> {
        let _ = direction;
        Ok(())
    }

    /// Layout just changed; call `validate_and_measure` after the next
    /// render pass. Best-effort - a skipped request is recovered by the
    /// next trigger point.
    fn on_measure_requested(&mut self) -> Result<()> {
        Ok(())
    }

    /// Report the column's current rectangle, or `Ok(None)` when it has no
    /// backing view right now.
    fn measure_column(&mut self, column_id: &str) -> Result<Option<Rect>> {
        let _ = column_id;
        Ok(None)
    }

    /// Report the card's current rectangle, or `Ok(None)` when it has no
    /// backing view right now.
    fn measure_card(&mut self, card_id: &str) -> Result<Option<Rect>> {
        let _ = card_id;
        Ok(None)
    }
}

/// Delegate that renders nothing and accepts everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopDelegate;

impl BoardDelegate for NoopDelegate {}
