//! Board state store - the authoritative column/card mapping.
//!
//! This module is organized into:
//! - `state` - the copy-on-write [`BoardState`] maps and their mutation
//!   operations (rebuild, cross-column move, within-column move)
//!
//! The store never talks to the host directly; the controller in
//! `crate::app` decides when a new state becomes current and who gets told.

mod state;

pub use state::{BoardSnapshot, BoardState};
