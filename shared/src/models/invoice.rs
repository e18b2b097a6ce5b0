//! Invoice Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Invoice payment status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Paid,
    #[default]
    Unpaid,
    PartiallyPaid,
}

/// Invoice entity — one per billing event (down payment or full payment)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: i64,
    pub reservation_id: i64,
    pub guest_name: String,
    pub room_number: String,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub room_charge: f64,
    #[serde(default)]
    pub additional_charges: f64,
    /// room_charge + additional_charges
    pub total_amount: f64,
    pub payment_method: String,
    pub status: InvoiceStatus,
}

/// Create invoice payload (status always starts `unpaid`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceCreate {
    pub reservation_id: i64,
    pub guest_name: String,
    pub room_number: String,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub room_charge: f64,
    #[serde(default)]
    pub additional_charges: f64,
    pub total_amount: f64,
    pub payment_method: String,
}

/// Status update payload (PATCH body)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceStatusUpdate {
    pub status: InvoiceStatus,
}

/// Display number for an invoice: the id zero-padded to six digits behind
/// an `INV-` prefix. Never stored; recomputed wherever it is shown.
pub fn invoice_number(id: i64) -> String {
    format!("INV-{:06}", id)
}
