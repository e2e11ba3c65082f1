//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Document, FormatState, Settings, Messages, view seams)
//! - `controllers/` - Orchestration (EditorController)
//! - `services/` - Business operations (file I/O, edit history, text helpers)
//! - `infrastructure/` - External integrations (errors, logging, headless view)

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-exports for convenient external access
pub use controllers::{EditorController, Flow};
pub use domain::{AppSettings, Document, EditorView, FontSize, FormatState, Message, Prompter, Rgb, SaveChoice};
pub use infrastructure::error::{AppError, Result};
pub use infrastructure::memory_view::MemoryView;
