//! Controller state - the Laneboard struct definition and configuration.

use crate::board::BoardState;
use crate::clock::Clock;
use crate::constants::{
    AUTOSCROLL_COOLDOWN, AUTOSCROLL_STEP, DEFAULT_VIEWPORT_WIDTH, EDGE_SNAP_DELAY,
    EDGE_SNAP_MARGIN, SCROLL_EDGE_MARGIN,
};
use crate::delegate::BoardDelegate;
use crate::input::{DragState, DragTimers};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Tunables for the drag scheduler and geometry probes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Distance from either viewport edge inside which the page-snap timer arms
    pub edge_snap_margin: f32,
    /// Delay before an armed page-snap timer fires
    pub edge_snap_delay: Duration,
    /// Pixels a column scrolls per autoscroll tick
    pub autoscroll_step: f32,
    /// Minimum time between autoscroll ticks
    pub autoscroll_cooldown: Duration,
    /// Distance from a column's top/bottom edge that triggers autoscroll
    pub scroll_edge_margin: f32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            edge_snap_margin: EDGE_SNAP_MARGIN,
            edge_snap_delay: EDGE_SNAP_DELAY,
            autoscroll_step: AUTOSCROLL_STEP,
            autoscroll_cooldown: AUTOSCROLL_COOLDOWN,
            scroll_edge_margin: SCROLL_EDGE_MARGIN,
        }
    }
}

/// The board interaction controller.
///
/// Owns the authoritative board maps, the drag state machine and the
/// scheduler's timer slots; talks to the host through the delegate. All
/// methods run to completion on the caller's thread - the host is expected
/// to feed events from a single event loop.
pub struct Laneboard {
    /// Authoritative column/card maps
    pub board: BoardState,
    /// Drag state machine
    pub drag: DragState,
    /// Single-slot scheduler timers, live only while dragging
    pub timers: DragTimers,
    /// Scheduler and probe tunables
    pub config: BoardConfig,

    /// Host viewport width, bounding the edge-snap zones
    pub(crate) viewport_width: f32,
    /// Carousel-reported index of the currently centered column
    pub(crate) visible_column_index: usize,
    /// A deferred re-measure was requested and has not run yet
    pub(crate) remeasure_queued: bool,

    pub(crate) delegate: Box<dyn BoardDelegate>,
    pub(crate) clock: Arc<dyn Clock>,
}

/// Log and swallow a delegate failure. The host must never be able to wedge
/// the state machine, so its errors stop here.
pub(crate) fn absorb_delegate_error(context: &'static str, result: anyhow::Result<()>) {
    if let Err(error) = result {
        tracing::error!(%error, callback = context, "delegate callback failed");
    }
}

impl Laneboard {
    pub(crate) fn from_parts(delegate: Box<dyn BoardDelegate>, clock: Arc<dyn Clock>) -> Self {
        Self {
            board: BoardState::new(),
            drag: DragState::default(),
            timers: DragTimers::default(),
            config: BoardConfig::default(),
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            visible_column_index: 0,
            remeasure_queued: false,
            delegate,
            clock,
        }
    }
}
