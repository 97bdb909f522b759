//! Constants and defaults for the exported document

/// Schema version written into every output document.
pub const SCHEMA_VERSION: u32 = 1;

/// Extension channel carrying the per-point timestamp.
pub const CHANNEL_TIMESTAMP: &str = "timestamp";
/// Extension channel carrying the per-point pen pressure.
pub const CHANNEL_PRESSURE: &str = "pressure";
/// Channels every stroke must expose, in the order they are resolved.
pub const REQUIRED_CHANNELS: [&str; 2] = [CHANNEL_TIMESTAMP, CHANNEL_PRESSURE];

/// Author written when the caller does not supply one.
pub const DEFAULT_AUTHOR: &str = "";
/// Brush type applied to every brush table entry by default.
pub const DEFAULT_BRUSH_TYPE: &str = "smooth";
/// Brush size applied to every stroke by default.
pub const DEFAULT_BRUSH_SIZE: f32 = 0.25;

/// File extension of exported documents.
pub const OUTPUT_EXTENSION: &str = "json";
