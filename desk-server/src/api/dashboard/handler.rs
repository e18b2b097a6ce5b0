//! Dashboard API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};

use crate::booking::{
    AvailabilityMap, LoyaltyEntry, Notification, availability_map, derive_notifications,
    rank_guests,
};
use crate::core::ServerState;
use crate::db::repository::{GuestRepository, ReservationRepository, RoomRepository};
use crate::utils::AppResult;

// ============================================================================
// Availability
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub year: i32,
    pub month: u32,
}

/// Availability response: per-room, per-day free/taken map for one month
#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub year: i32,
    pub month: u32,
    /// room id → (date → available)
    pub availability: AvailabilityMap,
}

/// GET /api/availability?year=&month= - 月度客房日历
pub async fn availability(
    State(state): State<ServerState>,
    Query(query): Query<AvailabilityQuery>,
) -> AppResult<Json<AvailabilityResponse>> {
    let rooms = RoomRepository::new(state.store.clone()).find_all();
    let reservations = ReservationRepository::new(state.store.clone()).find_all();

    let availability = availability_map(&rooms, &reservations, query.year, query.month)?;

    Ok(Json(AvailabilityResponse {
        year: query.year,
        month: query.month,
        availability,
    }))
}

// ============================================================================
// Notifications
// ============================================================================

/// Notifications response envelope
#[derive(Debug, Serialize)]
pub struct NotificationsResponse {
    pub notifications: Vec<Notification>,
}

/// GET /api/notifications - 今日到离店与欠款提醒
pub async fn notifications(
    State(state): State<ServerState>,
) -> AppResult<Json<NotificationsResponse>> {
    let reservations = ReservationRepository::new(state.store.clone()).find_all();
    let today = state.today();

    Ok(Json(NotificationsResponse {
        notifications: derive_notifications(&reservations, today),
    }))
}

// ============================================================================
// Loyalty
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct LoyaltyQuery {
    /// Truncate the ranking; the dashboard leaderboard asks for 5
    pub top: Option<usize>,
}

/// Loyalty response envelope
#[derive(Debug, Serialize)]
pub struct LoyaltyResponse {
    pub entries: Vec<LoyaltyEntry>,
}

/// GET /api/loyalty?top=N - 会员积分排行
///
/// 不带 `top` 时返回完整排行；仪表盘取前
/// [`crate::booking::loyalty::LEADERBOARD_SIZE`] 名。
pub async fn loyalty(
    State(state): State<ServerState>,
    Query(query): Query<LoyaltyQuery>,
) -> AppResult<Json<LoyaltyResponse>> {
    let guests = GuestRepository::new(state.store.clone()).find_all();
    let reservations = ReservationRepository::new(state.store.clone()).find_all();

    let mut entries = rank_guests(&guests, &reservations);
    if let Some(top) = query.top {
        entries.truncate(top);
    }

    Ok(Json(LoyaltyResponse { entries }))
}
