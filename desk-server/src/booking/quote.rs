//! Stay quoting
//!
//! Prices a prospective stay from the settings fee schedule: per-night
//! room-type rates (weekday vs. weekend), the optional service fees, and
//! tax on top. Quoting never touches a reservation — the desk copies the
//! quoted total into the booking form.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use shared::models::{HotelSettings, Room};

use super::money::{to_decimal, to_f64};
use crate::utils::time::is_weekend_night;
use crate::utils::{AppError, AppResult};

/// Optional extras requested with the stay
#[derive(Debug, Clone, Copy, Default)]
pub struct QuoteOptions {
    pub early_check_in: bool,
    pub late_check_out: bool,
    pub extra_bed: bool,
}

/// A priced stay
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StayQuote {
    pub nights: i64,
    /// Sum of the per-night rates
    pub room_subtotal: f64,
    pub early_check_in_fee: f64,
    pub late_check_out_fee: f64,
    pub extra_bed_fee: f64,
    pub tax: f64,
    pub total: f64,
    pub currency: String,
}

/// Price a stay in `room` from `check_in` (inclusive) to `check_out`
/// (exclusive).
///
/// Rate resolution per night: the room type's weekday/weekend schedule when
/// settings carry one, otherwise the room's own rate, otherwise the default
/// room rate. Early/late fees apply only when the hotel allows the service;
/// the extra-bed fee applies whenever requested. Tax is charged on the room
/// subtotal plus fees.
pub fn quote_stay(
    room: &Room,
    check_in: NaiveDate,
    check_out: NaiveDate,
    options: QuoteOptions,
    settings: &HotelSettings,
) -> AppResult<StayQuote> {
    if check_out <= check_in {
        return Err(AppError::validation(format!(
            "Cannot quote a stay from {} to {}: at least one night required",
            check_in, check_out
        )));
    }

    let schedule = settings.room_type(&room.room_type);
    let fallback_rate = if room.rate > 0.0 {
        room.rate
    } else {
        settings.default_room_rate
    };

    let mut nights = 0i64;
    let mut room_subtotal = Decimal::ZERO;
    let mut night = check_in;
    while night < check_out {
        let rate = match schedule {
            Some(rt) if is_weekend_night(night) => rt.weekend_rate,
            Some(rt) => rt.weekday_rate,
            None => fallback_rate,
        };
        room_subtotal += to_decimal(rate);
        nights += 1;
        night = match night.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    let early_fee = if options.early_check_in && settings.allow_early_check_in {
        to_decimal(settings.early_check_in_fee)
    } else {
        Decimal::ZERO
    };
    let late_fee = if options.late_check_out && settings.allow_late_check_out {
        to_decimal(settings.late_check_out_fee)
    } else {
        Decimal::ZERO
    };
    let bed_fee = if options.extra_bed {
        to_decimal(settings.extra_bed_fee)
    } else {
        Decimal::ZERO
    };

    let taxable = room_subtotal + early_fee + late_fee + bed_fee;
    let tax = taxable * to_decimal(settings.tax_rate) / Decimal::ONE_HUNDRED;
    let total = taxable + tax;

    Ok(StayQuote {
        nights,
        room_subtotal: to_f64(room_subtotal),
        early_check_in_fee: to_f64(early_fee),
        late_check_out_fee: to_f64(late_fee),
        extra_bed_fee: to_f64(bed_fee),
        tax: to_f64(tax),
        total: to_f64(total),
        currency: settings.currency.clone(),
    })
}
