//! Reservation API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use shared::models::{Reservation, ReservationCreate, ReservationStatusUpdate};

use crate::core::ServerState;
use crate::db::repository::{
    GuestRepository, ReservationRepository, RoomRepository,
};
use crate::utils::validation::MAX_SHORT_TEXT_LEN;
use crate::utils::{AppError, AppResult, validation};

const RESOURCE: &str = "reservation";

/// List response envelope: `{ "reservations": [...] }`
#[derive(Debug, Serialize)]
pub struct ReservationsResponse {
    pub reservations: Vec<Reservation>,
}

/// GET /api/reservations - 获取所有预订
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<ReservationsResponse>> {
    let repo = ReservationRepository::new(state.store.clone());
    Ok(Json(ReservationsResponse {
        reservations: repo.find_all(),
    }))
}

/// GET /api/reservations/:id - 获取单个预订
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Reservation>> {
    let repo = ReservationRepository::new(state.store.clone());
    let reservation = repo
        .find_by_id(id)
        .ok_or_else(|| AppError::not_found(format!("Reservation {} not found", id)))?;
    Ok(Json(reservation))
}

/// POST /api/reservations - 创建预订
///
/// 引用的客人/客房允许不存在 (悬空引用由派生引擎容忍)；
/// 但展示用的冗余字段在可能时由服务端补全。
pub async fn create(
    State(state): State<ServerState>,
    Json(mut payload): Json<ReservationCreate>,
) -> AppResult<Json<Reservation>> {
    validation::validate_date_range(payload.check_in, payload.check_out)?;
    validation::validate_non_negative(payload.total_amount, "total amount")?;
    validation::validate_non_negative(payload.down_payment_amount, "down payment amount")?;
    validation::validate_optional_text(&payload.room_number, "room number", MAX_SHORT_TEXT_LEN)?;

    let guests = GuestRepository::new(state.store.clone());
    let rooms = RoomRepository::new(state.store.clone());

    // Fill the denormalized display fields from the store when the client
    // left them empty
    if payload.guest_name.is_empty()
        && let Some(guest) = guests.find_by_id(payload.guest_id)
    {
        payload.guest_name = guest.name;
    }
    if let Some(room) = rooms.find_by_id(payload.room_id) {
        if payload.room_type.is_empty() {
            payload.room_type = room.room_type;
        }
        if payload.room_number.is_none() {
            payload.room_number = Some(room.number);
        }
    } else {
        tracing::warn!(
            room_id = payload.room_id,
            "Reservation created for a room not in the current room set"
        );
    }

    let repo = ReservationRepository::new(state.store.clone());
    let reservation = repo.create(payload)?;

    state.bump_version(RESOURCE);

    Ok(Json(reservation))
}

/// PATCH /api/reservations/:id - 更新预订状态
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<ReservationStatusUpdate>,
) -> AppResult<Json<Reservation>> {
    validation::validate_required_text(&payload.status, "status", MAX_SHORT_TEXT_LEN)?;

    let repo = ReservationRepository::new(state.store.clone());
    let reservation = repo.update_status(id, &payload.status)?;

    state.bump_version(RESOURCE);

    Ok(Json(reservation))
}
