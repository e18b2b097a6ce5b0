//! Quote API Handlers

use axum::{Json, extract::State};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::booking::{QuoteOptions, StayQuote, quote_stay};
use crate::core::ServerState;
use crate::db::repository::{RoomRepository, SettingsRepository};
use crate::utils::{AppError, AppResult};

/// Quote request payload
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub room_id: i64,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    #[serde(default)]
    pub early_check_in: bool,
    #[serde(default)]
    pub late_check_out: bool,
    #[serde(default)]
    pub extra_bed: bool,
}

/// POST /api/quotes - 住宿报价
///
/// 纯计算接口：按配置的房型价目与服务费报价，不写入任何预订。
pub async fn quote(
    State(state): State<ServerState>,
    Json(payload): Json<QuoteRequest>,
) -> AppResult<Json<StayQuote>> {
    let settings = SettingsRepository::new(state.store.clone())
        .get()
        .ok_or_else(|| AppError::business_rule("Settings not loaded. Please try again later."))?;

    let room = RoomRepository::new(state.store.clone())
        .find_by_id(payload.room_id)
        .ok_or_else(|| AppError::not_found(format!("Room {} not found", payload.room_id)))?;

    let options = QuoteOptions {
        early_check_in: payload.early_check_in,
        late_check_out: payload.late_check_out,
        extra_bed: payload.extra_bed,
    };

    let quote = quote_stay(&room, payload.check_in, payload.check_out, options, &settings)?;
    Ok(Json(quote))
}
