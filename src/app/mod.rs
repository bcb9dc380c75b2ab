//! Application module - the Laneboard controller state and host entry points.
//!
//! This module is organized into:
//! - `state` - the `Laneboard` struct, its sub-state and `BoardConfig`
//! - `lifecycle` - construction, upstream data refresh, measurement and
//!   scroll/snap notification entry points, timer ticking
//!
//! The pointer gesture handlers live in `crate::input`, implemented on the
//! same struct.

mod lifecycle;
mod state;

pub use state::{BoardConfig, Laneboard};

pub(crate) use state::absorb_delegate_error;
