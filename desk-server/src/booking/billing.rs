//! Billing engine — invoice building and the payment chain
//!
//! A reservation-billing pair moves through three states:
//! unbilled → down-payment-invoiced → fully-paid. The full-payment
//! transition is a strict three-step forward chain; each step can fail on
//! its own and later steps never run after a failure, so the intermediate
//! states (invoice created but unpaid, invoice paid but reservation not)
//! remain observable and manually retryable.

use serde::Serialize;
use shared::models::reservation::STATUS_PAID;
use shared::models::{
    HotelSettings, Invoice, InvoiceCreate, InvoiceStatus, Reservation, invoice_number,
};
use thiserror::Error;

use super::money;
use crate::db::repository::{InvoiceRepository, RepoError, ReservationRepository};
use crate::utils::{AppError, AppResult};

/// Payment method used when the desk does not specify one
pub const DEFAULT_PAYMENT_METHOD: &str = "cash";

/// Room number shown when the reservation carries none
const UNKNOWN_ROOM: &str = "N/A";

/// Outstanding balance of a reservation: total minus down payment.
///
/// Deliberately NOT floored at zero — a down payment exceeding the total is
/// a data-entry error upstream, and the negative balance is the signal.
pub fn remaining_balance(reservation: &Reservation) -> f64 {
    money::subtract(reservation.total_amount, reservation.down_payment_amount)
}

/// Build the down-payment invoice for a reservation.
///
/// The invoice carries exactly the down-payment amount (room charge and
/// total alike, no additional charges) and starts `unpaid`. The
/// reservation's own status is not touched by a down payment.
pub fn down_payment_invoice(reservation: &Reservation) -> AppResult<InvoiceCreate> {
    if !reservation.down_payment_amount.is_finite() || reservation.down_payment_amount < 0.0 {
        return Err(AppError::validation(format!(
            "Down payment amount must be non-negative, got {}",
            reservation.down_payment_amount
        )));
    }

    Ok(invoice_for_amount(reservation, reservation.down_payment_amount))
}

/// Build the full-payment invoice: one invoice over the remaining balance.
pub fn full_payment_invoice(reservation: &Reservation) -> InvoiceCreate {
    invoice_for_amount(reservation, remaining_balance(reservation))
}

fn invoice_for_amount(reservation: &Reservation, amount: f64) -> InvoiceCreate {
    InvoiceCreate {
        reservation_id: reservation.id,
        guest_name: reservation.guest_name.clone(),
        room_number: reservation
            .room_number
            .clone()
            .unwrap_or_else(|| UNKNOWN_ROOM.to_string()),
        check_in_date: reservation.check_in,
        check_out_date: reservation.check_out,
        room_charge: amount,
        additional_charges: 0.0,
        total_amount: amount,
        payment_method: DEFAULT_PAYMENT_METHOD.to_string(),
    }
}

/// The three forward steps of the full-payment chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStep {
    CreateInvoice,
    MarkInvoicePaid,
    MarkReservationPaid,
}

impl PaymentStep {
    /// What the step was attempting, for error messages
    pub fn action(&self) -> &'static str {
        match self {
            PaymentStep::CreateInvoice => "creating full payment invoice",
            PaymentStep::MarkInvoicePaid => "updating invoice status",
            PaymentStep::MarkReservationPaid => "updating reservation status",
        }
    }
}

/// A failure inside the payment chain, carrying which step broke
#[derive(Debug, Error)]
#[error("Error {}: {}", .step.action(), .source)]
pub struct BillingError {
    pub step: PaymentStep,
    pub source: RepoError,
}

impl From<BillingError> for AppError {
    fn from(err: BillingError) -> Self {
        AppError::business_rule(err.to_string())
    }
}

/// Result of a completed full-payment chain
#[derive(Debug, Clone)]
pub struct FullPaymentOutcome {
    pub invoice: Invoice,
    pub reservation: Reservation,
}

/// Run the full-payment chain for a reservation.
///
/// 1. create the invoice over the remaining balance,
/// 2. mark that invoice `paid`,
/// 3. mark the reservation `paid`.
///
/// Each step runs only after the previous one succeeded; the first failure
/// aborts the rest and is returned tagged with its step. Nothing here
/// retries — a partial chain is an observable state the desk resolves by
/// rerunning the failed step.
pub fn process_full_payment(
    reservations: &ReservationRepository,
    invoices: &InvoiceRepository,
    reservation: &Reservation,
) -> Result<FullPaymentOutcome, BillingError> {
    let invoice = invoices
        .create(full_payment_invoice(reservation))
        .map_err(|source| BillingError {
            step: PaymentStep::CreateInvoice,
            source,
        })?;

    let invoice = invoices
        .update_status(invoice.id, InvoiceStatus::Paid)
        .map_err(|source| BillingError {
            step: PaymentStep::MarkInvoicePaid,
            source,
        })?;

    let reservation = reservations
        .update_status(reservation.id, STATUS_PAID)
        .map_err(|source| BillingError {
            step: PaymentStep::MarkReservationPaid,
            source,
        })?;

    Ok(FullPaymentOutcome {
        invoice,
        reservation,
    })
}

/// Print-ready rendering of an invoice.
///
/// The balance due is derived from the invoice status — an unpaid invoice
/// prints its full amount outstanding, a paid one prints 0.00.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoicePrintView {
    pub invoice_number: String,
    pub hotel_name: String,
    pub hotel_address: String,
    pub hotel_phone: String,
    pub guest_name: String,
    pub room_number: String,
    pub check_in_date: chrono::NaiveDate,
    pub check_out_date: chrono::NaiveDate,
    pub room_charge: f64,
    pub additional_charges: f64,
    pub total_amount: f64,
    pub currency: String,
    pub status: InvoiceStatus,
    pub balance_due: f64,
}

/// Build the print view for an invoice. Settings supply the letterhead and
/// the currency symbol, which is why printing requires them to be loaded.
pub fn print_view(invoice: &Invoice, settings: &HotelSettings) -> InvoicePrintView {
    let balance_due = match invoice.status {
        InvoiceStatus::Paid => 0.0,
        InvoiceStatus::Unpaid | InvoiceStatus::PartiallyPaid => invoice.total_amount,
    };

    InvoicePrintView {
        invoice_number: invoice_number(invoice.id),
        hotel_name: settings.hotel_name.clone(),
        hotel_address: settings.address.clone(),
        hotel_phone: settings.phone_number.clone(),
        guest_name: invoice.guest_name.clone(),
        room_number: invoice.room_number.clone(),
        check_in_date: invoice.check_in_date,
        check_out_date: invoice.check_out_date,
        room_charge: invoice.room_charge,
        additional_charges: invoice.additional_charges,
        total_amount: invoice.total_amount,
        currency: settings.currency.clone(),
        status: invoice.status,
        balance_due,
    }
}
