//! Drag state machine - explicit session tracking for the drag gesture.
//!
//! A single enum replaces scattered `moving_mode`/`dragged_item` flags,
//! making the no-session and in-session states unrepresentable together.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Dragging    (gesture start over a measured, visible card)
//! Dragging -> Idle    (gesture end or cancel - always, even on host errors)
//! ```
//!
//! Starting while `Dragging` is refused; ending while `Idle` is a no-op.

use crate::types::{CardRef, Point};

/// The drag gesture's current phase.
#[derive(Clone, Default)]
pub enum DragState {
    /// No drag in progress
    #[default]
    Idle,

    /// A card is being dragged
    Dragging(DragSession),
}

/// Ephemeral state of one in-progress drag.
///
/// Holds a shared handle to the dragged card - ownership stays with the
/// board store, and map swaps during the drag do not detach the handle. The
/// card's dimensions are frozen at drag start so the floating preview does
/// not jitter if the source card's layout changes mid-drag.
#[derive(Clone)]
pub struct DragSession {
    /// The card being dragged
    pub card: CardRef,
    /// Column the card was lifted from
    pub source_column_id: String,
    /// Pointer position at drag start
    pub anchor: Point,
    /// Most recent pointer sample
    pub pointer: Point,
    /// Offset of the floating preview relative to the anchor
    pub preview_offset: Point,
    /// Card width captured at drag start
    pub card_width: f32,
    /// Card height captured at drag start
    pub card_height: f32,
}

impl DragSession {
    pub fn new(card: CardRef, source_column_id: String, anchor: Point, width: f32, height: f32) -> Self {
        let mut session = Self {
            card,
            source_column_id,
            anchor,
            pointer: anchor,
            preview_offset: Point::default(),
            card_width: width,
            card_height: height,
        };
        session.update_pointer(anchor);
        session
    }

    /// Record a pointer sample and recompute the preview offset, keeping
    /// the preview centered under the pointer.
    pub fn update_pointer(&mut self, pointer: Point) {
        self.pointer = pointer;
        self.preview_offset = Point {
            x: pointer.x - self.anchor.x - self.card_width / 2.0,
            y: pointer.y - self.anchor.y - self.card_height / 2.0,
        };
    }
}

impl DragState {
    /// Returns true if no drag is in progress
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if a drag session is live
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    /// The live session, if any
    pub fn session(&self) -> Option<&DragSession> {
        match self {
            Self::Dragging(session) => Some(session),
            Self::Idle => None,
        }
    }

    /// Mutable access to the live session, if any
    pub fn session_mut(&mut self) -> Option<&mut DragSession> {
        match self {
            Self::Dragging(session) => Some(session),
            Self::Idle => None,
        }
    }

    /// Handle to the dragged card, if a session is live
    pub fn dragged_card(&self) -> Option<CardRef> {
        self.session().map(|session| session.card.clone())
    }

    /// Begin a session. Callers must have checked `is_idle` first.
    pub fn start(&mut self, session: DragSession) {
        *self = Self::Dragging(session);
    }

    /// Tear the session down, returning it for final bookkeeping.
    pub fn take(&mut self) -> Option<DragSession> {
        match std::mem::take(self) {
            Self::Dragging(session) => Some(session),
            Self::Idle => None,
        }
    }

    /// Reset to Idle
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
