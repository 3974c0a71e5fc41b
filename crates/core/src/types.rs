//! Shared type aliases used across the workspace.

/// Identifier for brands and themes (UUID v4 rendered as a string).
pub type BrandId = String;

/// UTC timestamp used on all entities.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
