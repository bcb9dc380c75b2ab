//! Autoscroll and autopage scheduling.
//!
//! Two independent behaviors, both live only while a drag session is:
//!
//! - **Edge paging**: a pointer lingering inside the viewport's left/right
//!   edge zone arms a one-shot snap timer; if the pointer is still in an
//!   edge zone when the deadline passes, exactly one page request goes out.
//!   Leaving both zones first cancels the timer silently.
//! - **In-column autoscroll**: a pointer near a column's top/bottom edge
//!   ratchets that column's scroll offset by a fixed step, paced by a short
//!   cooldown, producing a steady ramp instead of a jump.
//!
//! Both are single-slot deadlines against the injected clock, serviced on
//! every pointer sample and by the host-driven [`Laneboard::tick`]. Ending
//! a drag clears both unconditionally.

use crate::app::{absorb_delegate_error, Laneboard};
use crate::geometry::GeometryIndex;
use crate::types::{ColumnRef, PageDirection};
use std::time::Instant;

/// A pending page-snap request.
#[derive(Clone, Copy, Debug)]
pub struct SnapTimer {
    pub deadline: Instant,
    pub direction: PageDirection,
}

/// The scheduler's two single-slot timers.
#[derive(Default)]
pub struct DragTimers {
    /// Armed edge-paging timer, at most one pending
    pub snap: Option<SnapTimer>,
    /// Instant the next autoscroll tick is permitted
    pub scroll_resume_at: Option<Instant>,
}

impl DragTimers {
    /// Drop both timers.
    pub fn clear(&mut self) {
        self.snap = None;
        self.scroll_resume_at = None;
    }

    /// Earliest pending deadline across both slots.
    pub fn next_deadline(&self) -> Option<Instant> {
        let snap = self.snap.as_ref().map(|timer| timer.deadline);
        match (snap, self.scroll_resume_at) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (Some(a), None) => Some(a),
            (None, b) => b,
        }
    }
}

impl Laneboard {
    /// Arm, cancel or fire the edge-paging timer for a pointer at `x`.
    pub(crate) fn service_edge_paging(&mut self, now: Instant, x: f32) {
        let near_previous = x < self.config.edge_snap_margin;
        let near_next = x > self.viewport_width - self.config.edge_snap_margin;

        if !near_previous && !near_next {
            if self.timers.snap.take().is_some() {
                tracing::trace!("page-snap timer cancelled");
            }
            return;
        }

        let due = match &self.timers.snap {
            Some(timer) if now >= timer.deadline => Some(timer.direction),
            _ => None,
        };
        if let Some(direction) = due {
            self.timers.snap = None;
            tracing::debug!(?direction, "page snap requested");
            absorb_delegate_error(
                "on_page_requested",
                self.delegate.on_page_requested(direction),
            );
            return;
        }

        // Arm once; a pending timer is never retargeted, even if the pointer
        // jumps straight to the opposite edge.
        if self.timers.snap.is_none() {
            let direction = if near_previous {
                PageDirection::Previous
            } else {
                PageDirection::Next
            };
            self.timers.snap = Some(SnapTimer {
                deadline: now + self.config.edge_snap_delay,
                direction,
            });
        }
    }

    /// Ratchet `column`'s scroll offset when the pointer lingers near its
    /// top or bottom edge and the cooldown has lapsed.
    pub(crate) fn service_autoscroll(&mut self, now: Instant, column: &ColumnRef, y: f32) {
        if let Some(resume_at) = self.timers.scroll_resume_at {
            if now < resume_at {
                return;
            }
            self.timers.scroll_resume_at = None;
        }

        let Some(direction) =
            GeometryIndex::scrolling_direction(column, y, self.config.scroll_edge_margin)
        else {
            return;
        };

        let scrolled = {
            let mut column = column.write();
            let viewport = column.dimensions().map_or(0.0, |rect| rect.height);
            let max_offset = (column.content_height() - viewport).max(0.0);
            let next = (column.scroll_offset() + self.config.autoscroll_step * direction)
                .clamp(0.0, max_offset);

            if next == column.scroll_offset() {
                None
            } else {
                column.set_scroll_offset(next);
                Some((column.id.clone(), next))
            }
        };

        // Already at the end of the scrollable extent: nothing to do, and no
        // cooldown to arm.
        let Some((column_id, offset)) = scrolled else {
            return;
        };

        absorb_delegate_error(
            "on_column_scroll_requested",
            self.delegate.on_column_scroll_requested(&column_id, offset),
        );
        self.timers.scroll_resume_at = Some(now + self.config.autoscroll_cooldown);
    }

    /// Drop both scheduler timers.
    pub(crate) fn clear_drag_timers(&mut self) {
        self.timers.clear();
    }

    /// Service due timers against the last pointer sample.
    ///
    /// Hosts call this from whatever scheduled-callback primitive they have,
    /// ideally armed with [`Laneboard::next_deadline`]; a pointer that stops
    /// moving inside an edge zone still pages and still scrolls. No-op
    /// outside a drag.
    pub fn tick(&mut self) {
        if !self.drag.is_dragging() {
            return;
        }
        let now = self.clock.now();
        let Some(pointer) = self.drag.session().map(|session| session.pointer) else {
            return;
        };

        self.service_edge_paging(now, pointer.x);

        if let Some(column) = GeometryIndex::find_column(&self.board, pointer.x) {
            self.service_autoscroll(now, &column, pointer.y);
        }
    }
}
