//! 资源版本路由
//!
//! 每个变更接口成功后都会递增对应资源的版本号；
//! 客户端轮询此接口即可判断本地缓存是否过期并重新拉取。

use std::collections::BTreeMap;

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/sync/versions", get(versions))
}

/// Version snapshot response
#[derive(Debug, Serialize)]
pub struct VersionsResponse {
    /// resource name → monotonically increasing version
    pub versions: BTreeMap<String, u64>,
}

/// GET /api/sync/versions - 当前资源版本快照
pub async fn versions(State(state): State<ServerState>) -> Json<VersionsResponse> {
    Json(VersionsResponse {
        versions: state.resource_versions.snapshot(),
    })
}
