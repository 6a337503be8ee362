//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Source buffers and their store keys
//! - Tab and color mode state
//! - Application settings
//! - Message, event and effect types for the event system

pub mod messages;
pub mod notice;
pub mod settings;
pub mod source;
pub mod view;

pub use messages::{Effect, Message, PlaygroundEvent};
pub use notice::{Notice, NoticeLevel};
pub use settings::{AppSettings, EditorOptions, FontChoice, ThemeMode};
pub use source::{SourceBuffer, SourceDefaults, SourceKind};
pub use view::{ActiveTab, ColorMode};
