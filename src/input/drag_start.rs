//! Drag start handling - hit resolution and session capture.

use crate::app::Laneboard;
use crate::geometry::GeometryIndex;
use crate::input::DragSession;
use crate::profile_scope;
use crate::types::Point;

impl Laneboard {
    /// Begin a drag at `position`.
    ///
    /// Refused while a session is already live, and refused unless the
    /// pointer resolves to a column and a rendered-and-visible card with a
    /// measured rectangle. A refused start changes nothing - no card is
    /// hidden and no session exists.
    pub fn handle_drag_start(&mut self, position: Point) {
        profile_scope!("handle_drag_start");

        if self.drag.is_dragging() {
            return;
        }

        let Some(column) = GeometryIndex::find_column(&self.board, position.x) else {
            return;
        };
        let Some(card) = GeometryIndex::find_card_in_column(&self.board, &column, position.y)
        else {
            return;
        };

        let (card_id, source_column_id, rect) = {
            let card = card.read();
            (card.id.clone(), card.column_id.clone(), card.dimensions())
        };
        let Some(rect) = rect else {
            return;
        };

        // The real card disappears; the host renders a floating preview at
        // the session's preview offset instead.
        card.write().hide();

        tracing::debug!(card = %card_id, column = %source_column_id, "drag started");
        self.drag.start(DragSession::new(
            card,
            source_column_id,
            position,
            rect.width,
            rect.height,
        ));
    }
}
