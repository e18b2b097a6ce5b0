//! Room Repository

use shared::models::{Room, RoomCreate, RoomUpdate};

use super::{RepoError, RepoResult};
use crate::db::Store;

#[derive(Clone)]
pub struct RoomRepository {
    store: Store,
}

impl RoomRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Find all rooms, ordered by room number
    pub fn find_all(&self) -> Vec<Room> {
        let mut rooms = self.store.rooms().all();
        rooms.sort_by(|a, b| a.number.cmp(&b.number));
        rooms
    }

    /// Find room by id
    pub fn find_by_id(&self, id: i64) -> Option<Room> {
        self.store.rooms().get(id)
    }

    /// Find room by its display number
    pub fn find_by_number(&self, number: &str) -> Option<Room> {
        self.store.rooms().all().into_iter().find(|r| r.number == number)
    }

    /// Create a new room
    pub fn create(&self, data: RoomCreate) -> RepoResult<Room> {
        // Room numbers are the front desk's identifiers; keep them unique
        if self.find_by_number(&data.number).is_some() {
            return Err(RepoError::Duplicate(format!(
                "Room '{}' already exists",
                data.number
            )));
        }

        let id = self.store.rooms().next_id();
        let room = Room {
            id,
            number: data.number,
            room_type: data.room_type,
            occupancy: data.occupancy,
            housekeeping: data.housekeeping,
            rate: data.rate,
            capacity: data.capacity.unwrap_or(1),
        };
        self.store.rooms().put(id, room.clone());
        Ok(room)
    }

    /// Full update of a room (PUT semantics)
    pub fn update(&self, id: i64, data: RoomUpdate) -> RepoResult<Room> {
        let existing = self
            .find_by_id(id)
            .ok_or_else(|| RepoError::NotFound(format!("Room {} not found", id)))?;

        if data.number != existing.number
            && let Some(found) = self.find_by_number(&data.number)
            && found.id != id
        {
            return Err(RepoError::Duplicate(format!(
                "Room '{}' already exists",
                data.number
            )));
        }

        let room = Room {
            id,
            number: data.number,
            room_type: data.room_type,
            occupancy: data.occupancy,
            housekeeping: data.housekeeping,
            rate: data.rate,
            capacity: data.capacity,
        };
        self.store.rooms().put(id, room.clone());
        Ok(room)
    }

    /// Hard delete a room
    pub fn delete(&self, id: i64) -> RepoResult<bool> {
        if !self.store.rooms().remove(id) {
            return Err(RepoError::NotFound(format!("Room {} not found", id)));
        }
        Ok(true)
    }
}
