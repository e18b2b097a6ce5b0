//! 核心模块 - 配置、状态、服务器
//!
//! - [`Config`] - 环境变量驱动的配置
//! - [`ServerState`] - 共享服务器状态
//! - [`Server`] - HTTP 服务器

pub mod config;
pub mod error;
pub mod server;
pub mod state;

pub use config::Config;
pub use error::{Result, ServerError};
pub use server::Server;
pub use state::{BillingGuard, ResourceVersions, ServerState};
