//! Drag end handling - restore, notify, clean up.

use crate::app::{absorb_delegate_error, Laneboard};

impl Laneboard {
    /// Finish the drag gesture (end and cancel arrive here alike).
    ///
    /// Idempotent, and it always lands back in the idle state: timers are
    /// cleared before anything else, the session is torn down even when the
    /// host's completion callback fails, and a call with no live session is
    /// a no-op.
    pub fn handle_drag_end(&mut self) {
        // A stale timer must never fire into a finished session.
        self.clear_drag_timers();

        let Some(session) = self.drag.take() else {
            return;
        };

        session.card.write().show();

        let card_snapshot = session.card.read().clone();
        let destination_id = card_snapshot.column_id.clone();

        // Where the card ended up. A rebuild mid-drag can detach the session's
        // card from the current maps; the head slot is reported then.
        let target_index = self
            .board
            .card_index_in(&destination_id, &card_snapshot.id)
            .unwrap_or(0);

        let source = self.board.column(&session.source_column_id);
        let destination = self.board.column(&destination_id);

        match (source, destination) {
            (Some(source), Some(destination)) => {
                let source = source.read().clone();
                let destination = destination.read().clone();
                absorb_delegate_error(
                    "on_drag_end",
                    self.delegate.on_drag_end(&source, &destination, &card_snapshot, target_index),
                );
            }
            _ => tracing::debug!(
                card = %card_snapshot.id,
                "drag completion not reported: source or destination column gone"
            ),
        }

        // Layout just changed under the drop; re-measure after the next
        // render pass.
        self.queue_remeasure();
        tracing::debug!(card = %card_snapshot.id, column = %destination_id, "drag ended");
    }
}
