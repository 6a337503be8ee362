//! Services layer - business operations and utilities.
//!
//! This module contains business logic and operations:
//! - Key-value persistence of the sources
//! - Output composition
//! - Syntax highlighting

pub mod composer;
pub mod store;
pub mod syntax;
