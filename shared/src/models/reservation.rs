//! Reservation Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Reservation status values the business logic recognizes.
///
/// The field itself is free-form (`Reservation::status` is a `String`): the
/// store accepts anything, and only these three values carry meaning.
pub const STATUS_CONFIRMED: &str = "confirmed";
pub const STATUS_CANCELLED: &str = "cancelled";
pub const STATUS_PAID: &str = "paid";

/// Reservation entity
///
/// `check_out` is exclusive: the last occupied night is `check_out` minus
/// one day. Guest name and room type/number are denormalized for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: i64,
    pub guest_id: i64,
    pub room_id: i64,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    #[serde(default)]
    pub total_amount: f64,
    pub status: String,
    #[serde(default = "default_guests_count")]
    pub guests_count: i32,
    #[serde(default)]
    pub children_count: i32,
    #[serde(default)]
    pub early_check_in: bool,
    #[serde(default)]
    pub late_check_out: bool,
    #[serde(default)]
    pub extra_bed: bool,
    #[serde(default)]
    pub down_payment_amount: f64,
    #[serde(default)]
    pub down_payment_method: String,
    #[serde(default)]
    pub guest_name: String,
    #[serde(default)]
    pub room_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_number: Option<String>,
}

fn default_guests_count() -> i32 {
    1
}

/// Create reservation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationCreate {
    pub guest_id: i64,
    pub room_id: i64,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default = "default_guests_count")]
    pub guests_count: i32,
    #[serde(default)]
    pub children_count: i32,
    #[serde(default)]
    pub early_check_in: bool,
    #[serde(default)]
    pub late_check_out: bool,
    #[serde(default)]
    pub extra_bed: bool,
    #[serde(default)]
    pub down_payment_amount: f64,
    #[serde(default)]
    pub down_payment_method: String,
    #[serde(default)]
    pub guest_name: String,
    #[serde(default)]
    pub room_type: String,
    #[serde(default)]
    pub room_number: Option<String>,
}

fn default_status() -> String {
    STATUS_CONFIRMED.to_string()
}

/// Status update payload (PATCH body)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationStatusUpdate {
    pub status: String,
}
