//! Room availability calendar
//!
//! Computes, for one displayed month, which room/day cells are free given
//! the current reservation set. A cell is taken iff some reservation holds
//! that room on that night; the check-out day itself stays free (exclusive
//! end — same-day turnover).

use std::collections::BTreeMap;

use chrono::NaiveDate;
use shared::models::{Reservation, Room};

use crate::utils::AppResult;
use crate::utils::time::month_days;

/// room id → (date → available)
pub type AvailabilityMap = BTreeMap<i64, BTreeMap<NaiveDate, bool>>;

/// Build the availability map for a month.
///
/// Every calendar day of every room starts free; each reservation marks its
/// nights (`check_in ≤ d < check_out`) taken where they fall inside the
/// month. The function is pure: month navigation recomputes the whole map,
/// which makes back-and-forth navigation trivially idempotent.
///
/// A reservation referencing a room not in `rooms` is skipped — there is no
/// row to write into, and the calendar must not fail because of a dangling
/// reference.
pub fn availability_map(
    rooms: &[Room],
    reservations: &[Reservation],
    year: i32,
    month: u32,
) -> AppResult<AvailabilityMap> {
    let days = month_days(year, month)?;

    let mut map: AvailabilityMap = BTreeMap::new();
    for room in rooms {
        let row = days.iter().map(|d| (*d, true)).collect();
        map.insert(room.id, row);
    }

    let (Some(first), Some(last)) = (days.first().copied(), days.last().copied()) else {
        return Ok(map);
    };

    for reservation in reservations {
        let Some(row) = map.get_mut(&reservation.room_id) else {
            continue;
        };

        // Clamp the stay to the displayed month before walking it
        let from = reservation.check_in.max(first);
        let until = reservation.check_out.min(last.succ_opt().unwrap_or(last));
        let mut d = from;
        while d < until {
            row.insert(d, false);
            d = match d.succ_opt() {
                Some(next) => next,
                None => break,
            };
        }
    }

    Ok(map)
}
