//! Billing API Handlers
//!
//! The desk-facing side of the billing engine. The full-payment chain is
//! serialized per reservation: while one chain is in flight, a second
//! submission for the same reservation is rejected outright instead of
//! interleaving.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use shared::models::reservation::STATUS_PAID;
use shared::models::{HotelSettings, Invoice, Reservation};

use crate::booking::billing::{self, InvoicePrintView};
use crate::core::ServerState;
use crate::db::repository::{InvoiceRepository, ReservationRepository, SettingsRepository};
use crate::utils::{AppError, AppResult};

/// Outcome envelope for the full-payment chain
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FullPaymentResponse {
    pub invoice: Invoice,
    pub reservation: Reservation,
}

/// Settings are a hard precondition for every billing operation: invoices
/// render with the hotel letterhead and currency symbol.
fn require_settings(state: &ServerState) -> AppResult<HotelSettings> {
    SettingsRepository::new(state.store.clone())
        .get()
        .ok_or_else(|| AppError::business_rule("Settings not loaded. Please try again later."))
}

fn require_reservation(state: &ServerState, id: i64) -> AppResult<Reservation> {
    ReservationRepository::new(state.store.clone())
        .find_by_id(id)
        .ok_or_else(|| AppError::not_found(format!("Reservation {} not found", id)))
}

/// POST /api/billing/reservations/:id/down-payment - 开定金发票
///
/// 只创建一张 unpaid 的定金发票，不改动预订状态。
pub async fn down_payment(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Invoice>> {
    require_settings(&state)?;
    let reservation = require_reservation(&state, id)?;

    let payload = billing::down_payment_invoice(&reservation)?;
    let invoice = InvoiceRepository::new(state.store.clone())
        .create(payload)
        .map_err(|e| AppError::business_rule(format!("Error creating downpayment invoice: {}", e)))?;

    state.bump_version("invoice");

    Ok(Json(invoice))
}

/// POST /api/billing/reservations/:id/full-payment - 全额支付链
///
/// 严格的三步前向链：创建尾款发票 → 发票置 paid → 预订置 paid。
/// 任一步失败即中止，中间状态保留，由前台人工重试下一步。
pub async fn full_payment(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<FullPaymentResponse>> {
    require_settings(&state)?;
    let reservation = require_reservation(&state, id)?;

    if reservation.status == STATUS_PAID {
        return Err(AppError::business_rule(format!(
            "Reservation {} is already paid",
            id
        )));
    }

    // 同一预订的链在途时拒绝重复提交
    let _guard = state.begin_billing(id).ok_or_else(|| {
        AppError::conflict(format!("Payment for reservation {} already in progress", id))
    })?;

    let reservations = ReservationRepository::new(state.store.clone());
    let invoices = InvoiceRepository::new(state.store.clone());

    let outcome = billing::process_full_payment(&reservations, &invoices, &reservation)?;

    state.bump_version("invoice");
    state.bump_version("reservation");

    Ok(Json(FullPaymentResponse {
        invoice: outcome.invoice,
        reservation: outcome.reservation,
    }))
}

/// GET /api/billing/invoices/:id/print - 发票打印视图 (无状态变更)
pub async fn print(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<InvoicePrintView>> {
    let settings = require_settings(&state)?;
    let invoice = InvoiceRepository::new(state.store.clone())
        .find_by_id(id)
        .ok_or_else(|| AppError::not_found(format!("Invoice {} not found", id)))?;

    Ok(Json(billing::print_view(&invoice, &settings)))
}
