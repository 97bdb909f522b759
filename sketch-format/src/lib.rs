//! Sketch Format - Core data model for stroke export
//!
//! This crate provides the in-memory representation of a decoded sketch with
//! no I/O dependencies. It includes:
//!
//! - Schema constants and configuration defaults
//! - Error types
//! - Extension channel maps
//! - Sketch, stroke and control point structures
//!
//! Decoding the binary sketch container is left to an external decoder; this
//! crate only describes what that decoder hands over.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod channels;
pub mod constants;
pub mod error;
pub mod sketch;

// Re-export commonly used types
pub use channels::ExtensionChannels;
pub use error::{Result, SketchError};
pub use sketch::{Color, ControlPoint, ExtensionValues, Orientation, Position, Sketch, Stroke};
