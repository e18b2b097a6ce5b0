//! Invoice API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use shared::models::{Invoice, InvoiceCreate, InvoiceStatusUpdate};

use crate::core::ServerState;
use crate::db::repository::InvoiceRepository;
use crate::utils::validation::{MAX_NAME_LEN, MAX_SHORT_TEXT_LEN};
use crate::utils::{AppError, AppResult, validation};

const RESOURCE: &str = "invoice";

/// List response envelope: `{ "invoices": [...] }`
#[derive(Debug, Serialize)]
pub struct InvoicesResponse {
    pub invoices: Vec<Invoice>,
}

/// GET /api/invoices - 获取所有发票
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<InvoicesResponse>> {
    let repo = InvoiceRepository::new(state.store.clone());
    Ok(Json(InvoicesResponse {
        invoices: repo.find_all(),
    }))
}

/// GET /api/invoices/:id - 获取单张发票
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Invoice>> {
    let repo = InvoiceRepository::new(state.store.clone());
    let invoice = repo
        .find_by_id(id)
        .ok_or_else(|| AppError::not_found(format!("Invoice {} not found", id)))?;
    Ok(Json(invoice))
}

/// POST /api/invoices - 创建发票 (状态固定为 unpaid)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<InvoiceCreate>,
) -> AppResult<Json<Invoice>> {
    validation::validate_required_text(&payload.guest_name, "guest name", MAX_NAME_LEN)?;
    validation::validate_required_text(&payload.room_number, "room number", MAX_SHORT_TEXT_LEN)?;
    validation::validate_required_text(
        &payload.payment_method,
        "payment method",
        MAX_SHORT_TEXT_LEN,
    )?;

    let repo = InvoiceRepository::new(state.store.clone());
    let invoice = repo.create(payload)?;

    state.bump_version(RESOURCE);

    Ok(Json(invoice))
}

/// PATCH /api/invoices/:id - 更新发票状态
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<InvoiceStatusUpdate>,
) -> AppResult<Json<Invoice>> {
    let repo = InvoiceRepository::new(state.store.clone());
    let invoice = repo.update_status(id, payload.status)?;

    state.bump_version(RESOURCE);

    Ok(Json(invoice))
}
