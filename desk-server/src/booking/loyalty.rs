//! Loyalty scoring
//!
//! Every reservation earns its guest a flat 100 points, regardless of the
//! reservation's status — cancellations count the same as completed stays
//! (the policy the dashboard has always shown; see DESIGN.md).

use serde::Serialize;
use shared::models::{Guest, Reservation};

/// Points earned per reservation
pub const POINTS_PER_RESERVATION: i64 = 100;

/// Leaderboard length on the dashboard
pub const LEADERBOARD_SIZE: usize = 5;

/// One guest's position in the ranking
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoyaltyEntry {
    pub guest_id: i64,
    pub name: String,
    pub reservation_count: i64,
    pub points: i64,
}

/// Loyalty points for a single guest
pub fn loyalty_points(guest_id: i64, reservations: &[Reservation]) -> i64 {
    reservation_count(guest_id, reservations) * POINTS_PER_RESERVATION
}

fn reservation_count(guest_id: i64, reservations: &[Reservation]) -> i64 {
    reservations.iter().filter(|r| r.guest_id == guest_id).count() as i64
}

/// Rank all guests by points, descending.
///
/// Ties keep the input order of `guests` (stable sort). The full ranking is
/// returned; callers truncate to [`LEADERBOARD_SIZE`] for the dashboard.
pub fn rank_guests(guests: &[Guest], reservations: &[Reservation]) -> Vec<LoyaltyEntry> {
    let mut entries: Vec<LoyaltyEntry> = guests
        .iter()
        .map(|guest| {
            let count = reservation_count(guest.id, reservations);
            LoyaltyEntry {
                guest_id: guest.id,
                name: guest.name.clone(),
                reservation_count: count,
                points: count * POINTS_PER_RESERVATION,
            }
        })
        .collect();

    // Vec::sort_by is stable, which is what keeps equal scores in input order
    entries.sort_by(|a, b| b.points.cmp(&a.points));
    entries
}
