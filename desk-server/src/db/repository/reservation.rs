//! Reservation Repository

use shared::models::{Reservation, ReservationCreate};

use super::{RepoError, RepoResult};
use crate::db::Store;

#[derive(Clone)]
pub struct ReservationRepository {
    store: Store,
}

impl ReservationRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Find all reservations, ordered by id
    pub fn find_all(&self) -> Vec<Reservation> {
        self.store.reservations().all()
    }

    /// Find reservation by id
    pub fn find_by_id(&self, id: i64) -> Option<Reservation> {
        self.store.reservations().get(id)
    }

    /// All reservations for a guest
    pub fn find_by_guest(&self, guest_id: i64) -> Vec<Reservation> {
        self.find_all()
            .into_iter()
            .filter(|r| r.guest_id == guest_id)
            .collect()
    }

    /// Create a new reservation.
    ///
    /// Guest/room references are NOT checked here: the calendar and the
    /// derivation engines tolerate dangling references by design, and the
    /// handler layer fills the denormalized display fields where it can.
    pub fn create(&self, data: ReservationCreate) -> RepoResult<Reservation> {
        let id = self.store.reservations().next_id();
        let reservation = Reservation {
            id,
            guest_id: data.guest_id,
            room_id: data.room_id,
            check_in: data.check_in,
            check_out: data.check_out,
            total_amount: data.total_amount,
            status: data.status,
            guests_count: data.guests_count,
            children_count: data.children_count,
            early_check_in: data.early_check_in,
            late_check_out: data.late_check_out,
            extra_bed: data.extra_bed,
            down_payment_amount: data.down_payment_amount,
            down_payment_method: data.down_payment_method,
            guest_name: data.guest_name,
            room_type: data.room_type,
            room_number: data.room_number,
        };
        self.store.reservations().put(id, reservation.clone());
        Ok(reservation)
    }

    /// Update only the status field (PATCH semantics)
    pub fn update_status(&self, id: i64, status: &str) -> RepoResult<Reservation> {
        let mut reservation = self
            .find_by_id(id)
            .ok_or_else(|| RepoError::NotFound(format!("Reservation {} not found", id)))?;
        reservation.status = status.to_string();
        self.store.reservations().put(id, reservation.clone());
        Ok(reservation)
    }
}
