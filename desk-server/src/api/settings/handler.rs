//! Settings API Handlers

use axum::{Json, extract::State};
use shared::models::HotelSettings;

use crate::core::ServerState;
use crate::db::repository::SettingsRepository;
use crate::utils::validation::{MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN};
use crate::utils::{AppError, AppResult, validation};

const RESOURCE: &str = "settings";

/// GET /api/settings - 获取酒店配置
pub async fn get(State(state): State<ServerState>) -> AppResult<Json<HotelSettings>> {
    let repo = SettingsRepository::new(state.store.clone());
    let settings = repo
        .get()
        .ok_or_else(|| AppError::not_found("Hotel settings not configured"))?;
    Ok(Json(settings))
}

/// PUT /api/settings - 整体替换酒店配置
///
/// 配置是单例文档：客户端每次提交完整文档，服务端整体替换
/// (首次提交时创建)。
pub async fn update(
    State(state): State<ServerState>,
    Json(payload): Json<HotelSettings>,
) -> AppResult<Json<HotelSettings>> {
    validation::validate_required_text(&payload.hotel_name, "hotel name", MAX_NAME_LEN)?;
    validation::validate_required_text(&payload.address, "address", MAX_ADDRESS_LEN)?;
    validation::validate_required_text(&payload.currency, "currency", MAX_SHORT_TEXT_LEN)?;
    validation::validate_non_negative(payload.tax_rate, "tax rate")?;
    validation::validate_non_negative(payload.default_room_rate, "default room rate")?;
    validation::validate_non_negative(payload.early_check_in_fee, "early check-in fee")?;
    validation::validate_non_negative(payload.late_check_out_fee, "late check-out fee")?;
    validation::validate_non_negative(payload.extra_bed_fee, "extra bed fee")?;
    for room_type in &payload.room_types {
        validation::validate_required_text(&room_type.name, "room type name", MAX_NAME_LEN)?;
        validation::validate_non_negative(room_type.weekday_rate, "weekday rate")?;
        validation::validate_non_negative(room_type.weekend_rate, "weekend rate")?;
    }

    let repo = SettingsRepository::new(state.store.clone());
    let settings = repo.replace(payload);

    state.bump_version(RESOURCE);

    Ok(Json(settings))
}
