//! Data models
//!
//! Shared between desk-server and frontend (via API).
//! All IDs are `i64`, allocated by the store. Wire field names are
//! camelCase to match the dashboard client.

pub mod guest;
pub mod invoice;
pub mod reservation;
pub mod room;
pub mod settings;

// Re-exports
pub use guest::*;
pub use invoice::*;
pub use reservation::*;
pub use room::*;
pub use settings::*;
