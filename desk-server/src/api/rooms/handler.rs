//! Room API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use shared::models::{Room, RoomCreate, RoomUpdate};

use crate::core::ServerState;
use crate::db::repository::RoomRepository;
use crate::utils::validation::{MAX_NAME_LEN, MAX_SHORT_TEXT_LEN};
use crate::utils::{AppError, AppResult, validation};

const RESOURCE: &str = "room";

/// List response envelope: `{ "rooms": [...] }`
#[derive(Debug, Serialize)]
pub struct RoomsResponse {
    pub rooms: Vec<Room>,
}

/// GET /api/rooms - 获取所有客房
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<RoomsResponse>> {
    let repo = RoomRepository::new(state.store.clone());
    Ok(Json(RoomsResponse {
        rooms: repo.find_all(),
    }))
}

/// GET /api/rooms/:id - 获取单个客房
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Room>> {
    let repo = RoomRepository::new(state.store.clone());
    let room = repo
        .find_by_id(id)
        .ok_or_else(|| AppError::not_found(format!("Room {} not found", id)))?;
    Ok(Json(room))
}

/// POST /api/rooms - 创建客房
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<RoomCreate>,
) -> AppResult<Json<Room>> {
    validation::validate_required_text(&payload.number, "room number", MAX_SHORT_TEXT_LEN)?;
    validation::validate_required_text(&payload.room_type, "room type", MAX_NAME_LEN)?;
    validation::validate_non_negative(payload.rate, "rate")?;
    if let Some(capacity) = payload.capacity {
        validation::validate_positive(capacity, "capacity")?;
    }

    let repo = RoomRepository::new(state.store.clone());
    let room = repo.create(payload)?;

    state.bump_version(RESOURCE);

    Ok(Json(room))
}

/// PUT /api/rooms/:id - 全量更新客房
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<RoomUpdate>,
) -> AppResult<Json<Room>> {
    validation::validate_required_text(&payload.number, "room number", MAX_SHORT_TEXT_LEN)?;
    validation::validate_required_text(&payload.room_type, "room type", MAX_NAME_LEN)?;
    validation::validate_non_negative(payload.rate, "rate")?;
    validation::validate_positive(payload.capacity, "capacity")?;

    let repo = RoomRepository::new(state.store.clone());
    let room = repo.update(id, payload)?;

    state.bump_version(RESOURCE);

    Ok(Json(room))
}

/// DELETE /api/rooms/:id - 删除客房
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let repo = RoomRepository::new(state.store.clone());
    let result = repo.delete(id)?;

    if result {
        state.bump_version(RESOURCE);
    }

    Ok(Json(result))
}
