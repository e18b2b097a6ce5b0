//! Guest API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use shared::models::{Guest, GuestCreate};

use crate::booking::{GuestTotals, guest_totals};
use crate::core::ServerState;
use crate::db::repository::{GuestRepository, ReservationRepository};
use crate::utils::validation::{MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN};
use crate::utils::{AppError, AppResult, validation};

const RESOURCE: &str = "guest";

/// List response envelope: `{ "guests": [...] }`
#[derive(Debug, Serialize)]
pub struct GuestsResponse {
    pub guests: Vec<Guest>,
}

#[derive(Debug, Deserialize)]
pub struct GuestListQuery {
    /// Optional search term matched against name and email
    pub q: Option<String>,
}

/// GET /api/guests - 获取所有客人 (支持 ?q= 搜索)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<GuestListQuery>,
) -> AppResult<Json<GuestsResponse>> {
    let repo = GuestRepository::new(state.store.clone());
    let guests = match query.q.as_deref() {
        Some(term) if !term.trim().is_empty() => repo.search(term.trim()),
        _ => repo.find_all(),
    };
    Ok(Json(GuestsResponse { guests }))
}

/// GET /api/guests/:id - 获取单个客人
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Guest>> {
    let repo = GuestRepository::new(state.store.clone());
    let guest = repo
        .find_by_id(id)
        .ok_or_else(|| AppError::not_found(format!("Guest {} not found", id)))?;
    Ok(Json(guest))
}

/// POST /api/guests - 创建客人
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<GuestCreate>,
) -> AppResult<Json<Guest>> {
    validation::validate_required_text(&payload.name, "guest name", MAX_NAME_LEN)?;
    validation::validate_required_text(&payload.email, "email", MAX_EMAIL_LEN)?;
    validation::validate_required_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;

    let repo = GuestRepository::new(state.store.clone());
    let guest = repo.create(payload)?;

    state.bump_version(RESOURCE);

    Ok(Json(guest))
}

/// GET /api/guests/:id/summary - 客人汇总 (访问/夜数/消费)
pub async fn summary(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<GuestTotals>> {
    let guests = GuestRepository::new(state.store.clone());
    let reservations = ReservationRepository::new(state.store.clone());

    let guest = guests
        .find_by_id(id)
        .ok_or_else(|| AppError::not_found(format!("Guest {} not found", id)))?;
    let upcoming = reservations.find_by_guest(id);

    Ok(Json(guest_totals(&guest.stays, &upcoming)))
}
