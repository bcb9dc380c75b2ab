//! Controller lifecycle and host entry points - construction, upstream data
//! refresh, measurement plumbing, scroll/snap notifications, timer ticking.

use super::state::absorb_delegate_error;
use super::{BoardConfig, Laneboard};
use crate::clock::{Clock, SystemClock};
use crate::delegate::{BoardDelegate, NoopDelegate};
use crate::types::{CardModel, CardRef, ColumnModel, ColumnRef, Rect};
use std::sync::Arc;
use std::time::Instant;

impl Laneboard {
    /// Create a controller on wall-clock time.
    pub fn new(delegate: Box<dyn BoardDelegate>) -> Self {
        Self::with_clock(delegate, Arc::new(SystemClock))
    }

    /// Create a controller with an explicit time source.
    pub fn with_clock(delegate: Box<dyn BoardDelegate>, clock: Arc<dyn Clock>) -> Self {
        Self::from_parts(delegate, clock)
    }

    /// Bare controller for tests: no-op delegate, wall clock.
    pub fn new_for_test() -> Self {
        Self::new(Box::new(NoopDelegate))
    }

    pub fn with_config(mut self, config: BoardConfig) -> Self {
        self.config = config;
        self
    }

    // ==================== Host Geometry ====================

    /// Report the width of the viewport hosting the board. Bounds the
    /// right-hand edge-snap zone.
    pub fn set_viewport_width(&mut self, width: f32) {
        self.viewport_width = width;
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    /// Index of the column the carousel last reported as centered.
    pub fn visible_column_index(&self) -> usize {
        self.visible_column_index
    }

    // ==================== Upstream Data ====================

    /// Replace the upstream column/card collections.
    ///
    /// `None` means "unchanged" for that side. When both sides are `None`
    /// nothing happens at all - no map swap, no change notification - so
    /// hosts may call this unconditionally from their update path.
    pub fn refresh_board(
        &mut self,
        columns: Option<Vec<ColumnModel>>,
        cards: Option<Vec<CardModel>>,
    ) {
        if columns.is_none() && cards.is_none() {
            return;
        }

        self.board = self.board.rebuild(columns, cards);
        self.notify_board_changed();
    }

    /// Host-driven relocation of a card to the slot another card occupies
    /// within the same column. Not wired to pointer movement; cross-column
    /// drops land at the head of the destination and stay there.
    pub fn move_card_to_position(&mut self, card_id: &str, reference_id: &str, column_id: &str) {
        let Some(column) = self.board.column(column_id) else {
            tracing::debug!(column = %column_id, "reorder skipped: unknown column");
            return;
        };
        let (Some(card), Some(reference)) =
            (self.board.find_card(card_id), self.board.find_card(reference_id))
        else {
            tracing::debug!(card = %card_id, reference = %reference_id, "reorder skipped: card missing");
            return;
        };

        match self.board.move_card_to_position(&card, &reference, &column) {
            Ok(next) => {
                self.board = next;
                self.notify_board_changed();
                self.queue_remeasure();
            }
            Err(error) => tracing::debug!(%error, "reorder skipped"),
        }
    }

    // ==================== Measurement ====================

    /// Ask the delegate to re-report every column and card rectangle and
    /// apply the results. The trigger points are drag completion (deferred),
    /// scroll settle, carousel snap settle, and visible-card-set changes.
    pub fn validate_and_measure(&mut self) {
        self.remeasure_queued = false;

        let columns: Vec<ColumnRef> = self.board.columns().cloned().collect();
        for column in columns {
            let column_id = column.read().id.clone();
            match self.delegate.measure_column(&column_id) {
                Ok(rect) => column.write().apply_measurement(rect),
                Err(error) => {
                    tracing::error!(%error, column = %column_id, "column measurement failed")
                }
            }
            self.measure_cards_of(&column_id);
        }
    }

    /// Re-measure a single column's cards, e.g. after its set of visible
    /// cards changed.
    pub fn validate_and_measure_column(&mut self, column_id: &str) {
        self.measure_cards_of(column_id);
    }

    fn measure_cards_of(&mut self, column_id: &str) {
        let cards: Vec<CardRef> = self
            .board
            .cards_in(column_id)
            .map(|cards| cards.to_vec())
            .unwrap_or_default();

        for card in cards {
            let card_id = card.read().id.clone();
            match self.delegate.measure_card(&card_id) {
                Ok(rect) => card.write().apply_measurement(rect),
                Err(error) => tracing::error!(%error, card = %card_id, "card measurement failed"),
            }
        }
    }

    /// Push-style measurement report for a single card.
    pub fn report_card_measurement(&mut self, card_id: &str, rect: Option<Rect>) {
        if let Some(card) = self.board.find_card(card_id) {
            card.write().apply_measurement(rect);
        }
    }

    /// Push-style measurement report for a single column.
    pub fn report_column_measurement(&mut self, column_id: &str, rect: Option<Rect>) {
        if let Some(column) = self.board.column(column_id) {
            column.write().apply_measurement(rect);
        }
    }

    /// True while a deferred re-measure request is outstanding.
    pub fn remeasure_queued(&self) -> bool {
        self.remeasure_queued
    }

    // ==================== Scroll / Snap Notifications ====================

    /// The host's list view settled at a new scroll offset.
    pub fn notify_column_scrolled(&mut self, column_id: &str, offset: f32) {
        let Some(column) = self.board.column(column_id) else {
            return;
        };
        column.write().set_scroll_offset(offset);
        self.validate_and_measure();
    }

    /// The host's list view re-reported its scrollable extent.
    pub fn notify_column_content_height(&mut self, column_id: &str, height: f32) {
        if let Some(column) = self.board.column(column_id) {
            column.write().set_content_height(height);
        }
    }

    /// The carousel settled with `index` centered.
    pub fn notify_column_snapped(&mut self, index: usize) {
        self.visible_column_index = index;
        self.validate_and_measure();
    }

    // ==================== Internal Plumbing ====================

    pub(crate) fn notify_board_changed(&mut self) {
        let board = self.board.clone();
        absorb_delegate_error("on_board_changed", self.delegate.on_board_changed(&board));
    }

    /// Record that layout just changed and hint the host to run
    /// [`Laneboard::validate_and_measure`] after its next render pass.
    /// Best-effort: a dropped hint is recovered by the next trigger point.
    pub(crate) fn queue_remeasure(&mut self) {
        self.remeasure_queued = true;
        absorb_delegate_error("on_measure_requested", self.delegate.on_measure_requested());
    }

    /// Earliest instant at which [`Laneboard::tick`] has work to do, if any.
    /// Hosts arm their scheduled-callback primitive with this.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }
}
