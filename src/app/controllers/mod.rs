//! Controllers layer - orchestration and coordination.
//!
//! This module contains controllers that coordinate between
//! domain models, services, and the UI:
//! - Playground (sources, tabs, theme, write-through persistence)
//! - Syntax highlighting of the editor panes
//! - Browser preview

pub mod highlight;
pub mod playground;
pub mod preview;
