//! Laneboard - headless interaction core for multi-column board widgets.
//!
//! This crate owns the parts of a drag-and-drop board that have real state:
//!
//! - `board` - the authoritative column/card maps and their mutation
//!   operations (rebuild, cross-column move, within-column move)
//! - `input` - the drag-session state machine and the autoscroll/autopage
//!   scheduler driven by pointer samples
//! - `geometry` - pointer coordinate to column/card resolution from measured
//!   rectangles
//! - `app` - the `Laneboard` controller tying the above together behind a
//!   host-facing API
//!
//! Everything visual is a host concern. The host feeds pointer events and
//! measured rectangles in, and receives board changes, scroll requests, page
//! requests and drag completions back through the [`BoardDelegate`] trait.

pub mod app;
pub mod board;
pub mod clock;
pub mod constants;
pub mod delegate;
pub mod error;
pub mod geometry;
pub mod input;
pub mod perf;
pub mod types;

pub use app::{BoardConfig, Laneboard};
pub use board::{BoardSnapshot, BoardState};
pub use clock::{Clock, ManualClock, SystemClock};
pub use delegate::{BoardDelegate, NoopDelegate};
pub use error::{BoardError, BoardResult};
pub use types::{CardModel, CardRef, ColumnModel, ColumnRef, PageDirection, Point, Rect};
