//! Dashboard API 模块 — 派生视图
//!
//! 这些接口不落任何状态：每次请求都从当前存储快照重新派生。

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/availability", get(handler::availability))
        .route("/api/notifications", get(handler::notifications))
        .route("/api/loyalty", get(handler::loyalty))
}
