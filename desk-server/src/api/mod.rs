//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`rooms`] - 客房管理接口
//! - [`guests`] - 客人管理接口
//! - [`reservations`] - 预订管理接口
//! - [`invoices`] - 发票管理接口
//! - [`settings`] - 酒店配置接口
//! - [`billing`] - 收银接口 (定金/全额支付/打印)
//! - [`dashboard`] - 派生视图 (日历/通知/会员排行)
//! - [`quotes`] - 住宿报价接口
//! - [`sync`] - 资源版本接口

pub mod billing;
pub mod dashboard;
pub mod guests;
pub mod health;
pub mod invoices;
pub mod quotes;
pub mod reservations;
pub mod rooms;
pub mod settings;
pub mod sync;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};

use axum::Router;
use http::{HeaderName, HeaderValue};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(rooms::router())
        .merge(guests::router())
        .merge(reservations::router())
        .merge(invoices::router())
        .merge(settings::router())
        .merge(billing::router())
        .merge(dashboard::router())
        .merge(quotes::router())
        .merge(sync::router())
        .merge(health::router())
}

/// Build the fully configured application with middleware and state.
///
/// Used by both the HTTP server and the in-process tests.
pub fn build_app(state: ServerState) -> Router {
    build_router()
        // ========== Tower HTTP Middleware ==========
        // CORS - the dashboard is served from its own origin in development
        .layer(CorsLayer::permissive())
        // Compression - Gzip compress responses
        .layer(CompressionLayer::new())
        // Trace - request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        // Request ID - generate a unique ID for each request
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static("x-request-id"),
            XRequestId,
        ))
        // Propagate request ID to the response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            "x-request-id",
        )))
        .with_state(state)
}
