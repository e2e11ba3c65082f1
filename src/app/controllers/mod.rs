//! Controllers layer - orchestration and coordination.
//!
//! This module contains the controller that coordinates between
//! domain models, services, and the UI:
//! - Editor session (document lifecycle, save prompts, edit and format commands)

pub mod editor;

pub use editor::{EditorController, Flow};
