//! Development seed data
//!
//! Mirrors the demo data set the dashboard ships with: two rooms, one
//! guest and one confirmed reservation. Only loaded in the development
//! environment, and only into an empty store.

use chrono::NaiveDate;
use shared::models::{Guest, Housekeeping, Occupancy, Reservation, Room};

use super::Store;

/// Seed the demo data set if the store is empty
pub fn seed_demo_data(store: &Store) {
    if !store.rooms().is_empty() || !store.guests().is_empty() {
        tracing::debug!("Store already populated, skipping demo seed");
        return;
    }

    let room_single = Room {
        id: store.rooms().next_id(),
        number: "101".to_string(),
        room_type: "Single".to_string(),
        occupancy: Occupancy::Available,
        housekeeping: Housekeeping::Clean,
        rate: 100.0,
        capacity: 1,
    };
    let room_double = Room {
        id: store.rooms().next_id(),
        number: "102".to_string(),
        room_type: "Double".to_string(),
        occupancy: Occupancy::Occupied,
        housekeeping: Housekeeping::Clean,
        rate: 150.0,
        capacity: 2,
    };
    store.rooms().put(room_single.id, room_single.clone());
    store.rooms().put(room_double.id, room_double);

    let guest = Guest {
        id: store.guests().next_id(),
        name: "John Doe".to_string(),
        email: "john@example.com".to_string(),
        phone: "1234567890".to_string(),
        stays: Vec::new(),
    };
    store.guests().put(guest.id, guest.clone());

    let reservation = Reservation {
        id: store.reservations().next_id(),
        guest_id: guest.id,
        room_id: room_single.id,
        check_in: NaiveDate::from_ymd_opt(2023, 6, 1).expect("valid seed date"),
        check_out: NaiveDate::from_ymd_opt(2023, 6, 5).expect("valid seed date"),
        total_amount: 400.0,
        status: "confirmed".to_string(),
        guests_count: 1,
        children_count: 0,
        early_check_in: false,
        late_check_out: false,
        extra_bed: false,
        down_payment_amount: 0.0,
        down_payment_method: String::new(),
        guest_name: guest.name.clone(),
        room_type: room_single.room_type.clone(),
        room_number: Some(room_single.number.clone()),
    };
    store.reservations().put(reservation.id, reservation);

    tracing::info!(
        rooms = store.rooms().len(),
        guests = store.guests().len(),
        reservations = store.reservations().len(),
        "Demo data seeded"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_populates_empty_store() {
        let store = Store::new();
        seed_demo_data(&store);
        assert_eq!(store.rooms().len(), 2);
        assert_eq!(store.guests().len(), 1);
        assert_eq!(store.reservations().len(), 1);
        assert_eq!(store.invoices().len(), 0);
        assert!(store.settings().is_none());
    }

    #[test]
    fn test_seed_is_idempotent() {
        let store = Store::new();
        seed_demo_data(&store);
        seed_demo_data(&store);
        assert_eq!(store.rooms().len(), 2);
        assert_eq!(store.reservations().len(), 1);
    }
}
