//! Integration tests for Laneboard.
//!
//! These tests verify the interaction between multiple components
//! and test complete drag/refresh workflows end-to-end.

mod drag_workflow_tests;
