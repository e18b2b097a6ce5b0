//! Billing API 模块
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/billing/reservations/{id}/down-payment | POST | 开定金发票 |
//! | /api/billing/reservations/{id}/full-payment | POST | 全额支付链 |
//! | /api/billing/invoices/{id}/print | GET | 发票打印视图 |

mod handler;

use axum::{Router, routing::get, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/billing", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route(
            "/reservations/{id}/down-payment",
            post(handler::down_payment),
        )
        .route(
            "/reservations/{id}/full-payment",
            post(handler::full_payment),
        )
        .route("/invoices/{id}/print", get(handler::print))
}
