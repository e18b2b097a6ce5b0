//! Shared data models for the front-desk suite
//!
//! Everything that crosses the REST boundary lives here: entity records,
//! their create/update payloads, and the status enums. The server and any
//! API consumer deserialize the exact same shapes.

pub mod models;

// Re-export 公共类型
pub use models::*;
