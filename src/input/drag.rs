//! Drag move handling - the pointer-move hot path.
//!
//! ## Performance Notes
//!
//! Pointer move arrives very frequently during a drag (potentially 60+
//! times per second). Key optimizations:
//! - Early exit when no session is live
//! - One geometry resolution per sample, shared by the move and the
//!   autoscroll probe
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use crate::app::Laneboard;
use crate::geometry::GeometryIndex;
use crate::profile_scope;
use crate::types::{CardRef, ColumnRef, Point};

impl Laneboard {
    /// Track a pointer sample while dragging.
    ///
    /// Updates the floating-preview offset, services the edge-paging timer,
    /// moves the card across columns when the pointer crosses one, and runs
    /// the in-column autoscroll probe against the same sample. Ignored when
    /// no session is live.
    pub fn handle_drag_move(&mut self, position: Point) {
        profile_scope!("handle_drag_move");

        if !self.drag.is_dragging() {
            return;
        }
        let now = self.clock.now();

        if let Some(session) = self.drag.session_mut() {
            session.update_pointer(position);
        }

        self.service_edge_paging(now, position.x);

        let Some(card) = self.drag.dragged_card() else {
            return;
        };
        let Some(target) = GeometryIndex::find_column(&self.board, position.x) else {
            return;
        };

        self.move_card_over_column(&card, &target);
        self.service_autoscroll(now, &target, position.y);
    }

    /// Reparent the dragged card when the pointer is over a different
    /// column. Within-column position is intentionally not pointer-driven;
    /// a reparented card lands at the head of its new column.
    fn move_card_over_column(&mut self, card: &CardRef, target: &ColumnRef) {
        let current_column_id = card.read().column_id.clone();
        let target_id = target.read().id.clone();
        if target_id == current_column_id {
            return;
        }

        let Some(from) = self.board.column(&current_column_id) else {
            tracing::debug!(column = %current_column_id, "cross-column move skipped: source column gone");
            return;
        };

        match self.board.move_to_other_column(card, &from, target) {
            Ok(next) => {
                tracing::debug!(card = %card.read().id, from = %current_column_id, to = %target_id, "card reparented");
                self.board = next;
                self.notify_board_changed();
                self.queue_remeasure();
            }
            Err(error) => tracing::debug!(%error, "cross-column move skipped"),
        }
    }
}
