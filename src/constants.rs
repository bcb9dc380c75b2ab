//! Library-wide constants.
//!
//! Centralizes magic numbers and timing values to make the codebase
//! more maintainable and self-documenting.

use std::time::Duration;

// ============================================================================
// Edge Paging
// ============================================================================

/// Distance from either viewport edge (in pixels) inside which a drag
/// pointer arms the page-snap timer
pub const EDGE_SNAP_MARGIN: f32 = 50.0;

/// Delay before an armed page-snap timer fires
pub const EDGE_SNAP_DELAY: Duration = Duration::from_millis(500);

/// Fallback viewport width used until the host reports one
pub const DEFAULT_VIEWPORT_WIDTH: f32 = 800.0;

// ============================================================================
// In-Column Autoscroll
// ============================================================================

/// Pixels a column's scroll offset advances per autoscroll tick
pub const AUTOSCROLL_STEP: f32 = 40.0;

/// Minimum time between two autoscroll ticks
pub const AUTOSCROLL_COOLDOWN: Duration = Duration::from_millis(50);

/// Distance from a column's top/bottom edge (in pixels) inside which a drag
/// pointer triggers autoscroll
pub const SCROLL_EDGE_MARGIN: f32 = 80.0;
