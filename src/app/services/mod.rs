//! Services layer - business operations and utilities.
//!
//! This module contains business logic and operations:
//! - Reading and writing documents
//! - Bounded edit history
//! - Text helpers (titles, newline trimming, default extension)

pub mod file_io;
pub mod history;
pub mod text_ops;
