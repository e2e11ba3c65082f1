//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Document bookkeeping and format state
//! - Startup settings
//! - Message types for the event system
//! - The view/prompter seams the controller talks through

pub mod document;
pub mod format;
pub mod messages;
pub mod settings;
pub mod view;

pub use document::Document;
pub use format::{FontSize, FormatState, Rgb};
pub use messages::Message;
pub use settings::AppSettings;
pub use view::{EditorView, Prompter, SaveChoice};
