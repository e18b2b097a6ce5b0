//! Guest Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A completed historical stay.
///
/// Numeric fields default to zero when absent so aggregation over legacy
/// records never fails.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stay {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    #[serde(default)]
    pub nights: i64,
    #[serde(default)]
    pub total_spent: f64,
}

/// Guest entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Guest {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Read-only stay history; not written through the reservation flow
    #[serde(default)]
    pub stays: Vec<Stay>,
}

/// Create guest payload (stays start empty)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestCreate {
    pub name: String,
    pub email: String,
    pub phone: String,
}
