//! Notification derivation
//!
//! A stateless scan of the reservation set against "today": arrivals,
//! departures and outstanding balances. Nothing is persisted — the list is
//! recomputed from scratch whenever the reservations change, and there is
//! no read/unread bookkeeping.

use chrono::NaiveDate;
use serde::Serialize;
use shared::models::Reservation;

/// What a notification is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationKind {
    CheckIn,
    CheckOut,
    Payment,
}

/// One alert line on the dashboard
#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    /// Stable id, e.g. `checkin-42`
    pub id: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
}

/// Derive the notification list for `today`.
///
/// Day equality is plain calendar-day comparison — the caller resolves
/// "today" in the business time zone once and passes it in. A reservation
/// checking in and out on the same day produces both notifications, and an
/// outstanding balance (total above down payment) alerts regardless of
/// dates, so a single reservation can contribute up to three entries.
pub fn derive_notifications(reservations: &[Reservation], today: NaiveDate) -> Vec<Notification> {
    let mut notifications = Vec::new();

    for reservation in reservations {
        if reservation.check_in == today {
            notifications.push(Notification {
                id: format!("checkin-{}", reservation.id),
                message: format!("Check-in today: {}", reservation.guest_name),
                kind: NotificationKind::CheckIn,
            });
        }

        if reservation.check_out == today {
            notifications.push(Notification {
                id: format!("checkout-{}", reservation.id),
                message: format!("Check-out today: {}", reservation.guest_name),
                kind: NotificationKind::CheckOut,
            });
        }

        if reservation.total_amount > reservation.down_payment_amount {
            notifications.push(Notification {
                id: format!("payment-{}", reservation.id),
                message: format!("Payment due: {}", reservation.guest_name),
                kind: NotificationKind::Payment,
            });
        }
    }

    notifications
}
