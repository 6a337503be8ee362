//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (sources, tabs, settings, messages)
//! - `controllers/` - Orchestration (Playground, HighlightController, PreviewController)
//! - `services/` - Business operations (store, composer, syntax)
//! - `infrastructure/` - External integrations (FLTK buffer, platform, logging, error)
//! - `state.rs` - Main application coordinator

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use controllers::playground::Playground;
pub use domain::{ActiveTab, AppSettings, ColorMode, Effect, Message, PlaygroundEvent, SourceKind, ThemeMode};
pub use infrastructure::error::{AppError, Result};
pub use services::composer::{compose, ComposedDocument};
pub use services::store::{FileStore, KeyValueStore, MemoryStore};
