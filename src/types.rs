//! Core types for the Laneboard interaction engine.
//!
//! This module defines the fundamental data structures used throughout the
//! crate: geometry primitives, the card and column models, and the shared
//! reference aliases the store hands out.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// ============================================================================
// Geometry Primitives
// ============================================================================

/// An absolute pointer coordinate in the board's shared coordinate space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// Create a [`Point`] from x/y coordinates.
#[inline]
pub fn point(x: f32, y: f32) -> Point {
    Point { x, y }
}

/// A measured rectangle in the board's shared coordinate space.
///
/// Rectangles are reported by the host's layout pass. A rectangle with all
/// four fields non-zero marks a card as rendered and visible; one with all
/// four fields zero marks it as gone (scrolled out or unmounted).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// True when the horizontal span of this rectangle contains `x`.
    #[inline]
    pub fn contains_x(&self, x: f32) -> bool {
        x >= self.x && x <= self.x + self.width
    }

    /// True when the vertical span of this rectangle contains `y`.
    #[inline]
    pub fn contains_y(&self, y: f32) -> bool {
        y >= self.y && y <= self.y + self.height
    }

    /// All four fields non-zero.
    #[inline]
    pub fn is_fully_nonzero(&self) -> bool {
        self.x != 0.0 && self.y != 0.0 && self.width != 0.0 && self.height != 0.0
    }

    /// All four fields zero.
    #[inline]
    pub fn is_fully_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.width == 0.0 && self.height == 0.0
    }
}

/// Direction of an autopage request issued near a viewport edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageDirection {
    /// Snap the carousel to the previous column
    Previous,
    /// Snap the carousel to the next column
    Next,
}

// ============================================================================
// Shared Model References
// ============================================================================

/// Shared handle to a card owned by the board store.
///
/// The store owns every card; the drag session and the host hold clones of
/// this handle. Map swaps clone the handle, not the card, so transient flag
/// updates stay visible across rebuilds of the maps.
pub type CardRef = Arc<RwLock<CardModel>>;

/// Shared handle to a column owned by the board store.
pub type ColumnRef = Arc<RwLock<ColumnModel>>;

/// Wrap a [`CardModel`] into a shared handle.
pub fn card_ref(card: CardModel) -> CardRef {
    Arc::new(RwLock::new(card))
}

/// Wrap a [`ColumnModel`] into a shared handle.
pub fn column_ref(column: ColumnModel) -> ColumnRef {
    Arc::new(RwLock::new(column))
}

// ============================================================================
// Card Model
// ============================================================================

/// A draggable card belonging to exactly one column.
///
/// The display payload (`title`, `subtitle`, `content`) is carried for the
/// host's renderer and never interpreted here. The transient flags are
/// mutated by the drag controller (`hidden`) and the measurement entry
/// points (`rect`, `invalidated`, `rendered_and_visible`).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CardModel {
    /// Unique identifier, supplied by the host application
    pub id: String,
    /// Identifier of the owning column
    pub column_id: String,
    /// Card title
    pub title: String,
    /// Secondary line below the title
    pub subtitle: String,
    /// Free-form body text
    pub content: String,
    /// Ordering key within the column
    pub sort_order: i32,

    /// Excluded from normal rendering while a floating preview replaces it
    #[serde(skip)]
    hidden: bool,
    /// Needs re-measurement after a structural change
    #[serde(skip)]
    invalidated: bool,
    /// Derived from the last reported rectangle
    #[serde(skip)]
    rendered_and_visible: bool,
    /// Last measured rectangle, if the host has reported one
    #[serde(skip)]
    rect: Option<Rect>,
}

impl CardModel {
    pub fn new(
        id: impl Into<String>,
        column_id: impl Into<String>,
        title: impl Into<String>,
        sort_order: i32,
    ) -> Self {
        Self {
            id: id.into(),
            column_id: column_id.into(),
            title: title.into(),
            subtitle: String::new(),
            content: String::new(),
            sort_order,
            hidden: false,
            invalidated: false,
            rendered_and_visible: false,
            rect: None,
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Last measured rectangle, if any.
    pub fn dimensions(&self) -> Option<Rect> {
        self.rect
    }

    /// Directly replace the measured rectangle without running the
    /// visibility transition. Used by fixtures and hosts that manage
    /// visibility themselves; prefer [`CardModel::apply_measurement`].
    pub fn set_dimensions(&mut self, rect: Option<Rect>) {
        self.rect = rect;
    }

    /// Excluded from normal rendering (a floating preview stands in).
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn hide(&mut self) {
        self.hidden = true;
    }

    pub fn show(&mut self) {
        self.hidden = false;
    }

    /// Marked as needing re-measurement.
    pub fn is_invalidated(&self) -> bool {
        self.invalidated
    }

    pub fn invalidate(&mut self) {
        self.invalidated = true;
    }

    /// True once a fully non-zero rectangle has been reported, until a fully
    /// zero one is.
    pub fn is_rendered_and_visible(&self) -> bool {
        self.rendered_and_visible
    }

    /// Apply a measurement reported by the host's layout pass.
    ///
    /// `None` means the card currently has no backing view; the rectangle is
    /// dropped and the visibility flag is left as it was. A reported
    /// rectangle updates visibility only on the two full transitions: all
    /// fields non-zero marks the card visible, all fields zero marks it
    /// gone. Applying any rectangle settles a pending invalidation.
    pub fn apply_measurement(&mut self, rect: Option<Rect>) {
        let Some(rect) = rect else {
            self.rect = None;
            return;
        };

        self.rect = Some(rect);

        if !self.rendered_and_visible && rect.is_fully_nonzero() {
            self.rendered_and_visible = true;
        } else if self.rendered_and_visible && rect.is_fully_zero() {
            self.rendered_and_visible = false;
        }

        self.invalidated = false;
    }
}

// ============================================================================
// Column Model
// ============================================================================

/// A named, independently scrollable lane holding an ordered list of cards.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ColumnModel {
    /// Unique identifier, supplied by the host application
    pub id: String,
    /// Display title
    pub title: String,

    /// Current vertical scroll position of the column's card list
    #[serde(skip)]
    scroll_offset: f32,
    /// Total scrollable extent of the card list
    #[serde(skip)]
    content_height: f32,
    /// Last measured rectangle, if the host has reported one
    #[serde(skip)]
    rect: Option<Rect>,
}

impl ColumnModel {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            scroll_offset: 0.0,
            content_height: 0.0,
            rect: None,
        }
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    pub fn set_scroll_offset(&mut self, offset: f32) {
        self.scroll_offset = offset;
    }

    pub fn content_height(&self) -> f32 {
        self.content_height
    }

    pub fn set_content_height(&mut self, height: f32) {
        self.content_height = height;
    }

    /// Last measured rectangle, if any.
    pub fn dimensions(&self) -> Option<Rect> {
        self.rect
    }

    /// Apply a measurement reported by the host's layout pass.
    pub fn apply_measurement(&mut self, rect: Option<Rect>) {
        self.rect = rect;
    }
}
