//! Guest aggregation
//!
//! Merges a guest's completed stay history with their upcoming reservations
//! into the three headline totals the guest card shows. Absent numbers are
//! zeros at the model layer already, so the sums never fail.

use serde::Serialize;
use shared::models::{Reservation, Stay};

use super::money;
use crate::utils::time::nights_between;

/// Per-guest headline totals
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestTotals {
    /// Completed stays plus upcoming reservations
    pub total_visits: i64,
    /// Historical nights plus nights of upcoming reservations
    pub total_nights: i64,
    /// Historical spend plus upcoming reservation amounts
    pub total_spent: f64,
}

/// Compute the totals for one guest
pub fn guest_totals(stays: &[Stay], reservations: &[Reservation]) -> GuestTotals {
    let total_visits = (stays.len() + reservations.len()) as i64;

    let stay_nights: i64 = stays.iter().map(|s| s.nights).sum();
    let reservation_nights: i64 = reservations
        .iter()
        .map(|r| nights_between(r.check_in, r.check_out))
        .sum();

    let total_spent = money::sum(
        stays
            .iter()
            .map(|s| s.total_spent)
            .chain(reservations.iter().map(|r| r.total_amount)),
    );

    GuestTotals {
        total_visits,
        total_nights: stay_nights + reservation_nights,
        total_spent,
    }
}
