//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - Error types
//! - Log subscriber setup
//! - Headless editor view (no GUI toolkit required)

pub mod error;
pub mod logging;
pub mod memory_view;
