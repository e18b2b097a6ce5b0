//! Database Module
//!
//! The persistence collaborator is an in-memory store: the dashboard's
//! backend is a seeded mock, so collections live in process memory and ids
//! are allocated from per-collection sequences. Everything is cheap to
//! clone (`Arc` inside) and safe to touch from concurrent handlers.

pub mod repository;
pub mod seed;

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use dashmap::DashMap;
use shared::models::{Guest, HotelSettings, Invoice, Reservation, Room};

/// Key under which the settings singleton lives in its collection
const SETTINGS_KEY: i64 = 1;

/// A single entity collection: id-keyed map plus an id sequence.
#[derive(Debug)]
pub struct Collection<T> {
    items: DashMap<i64, T>,
    next_id: AtomicI64,
}

impl<T: Clone> Collection<T> {
    fn new() -> Self {
        Self {
            items: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    /// Allocate the next id in sequence
    pub fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    /// Insert or replace a record under `id`
    pub fn put(&self, id: i64, item: T) {
        self.items.insert(id, item);
    }

    /// Fetch a record by id
    pub fn get(&self, id: i64) -> Option<T> {
        self.items.get(&id).map(|r| r.value().clone())
    }

    /// Remove a record; returns whether it existed
    pub fn remove(&self, id: i64) -> bool {
        self.items.remove(&id).is_some()
    }

    /// All records, ordered by id for stable listings
    pub fn all(&self) -> Vec<T> {
        let mut entries: Vec<(i64, T)> = self
            .items
            .iter()
            .map(|r| (*r.key(), r.value().clone()))
            .collect();
        entries.sort_by_key(|(id, _)| *id);
        entries.into_iter().map(|(_, item)| item).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug)]
struct StoreInner {
    rooms: Collection<Room>,
    guests: Collection<Guest>,
    reservations: Collection<Reservation>,
    invoices: Collection<Invoice>,
    settings: Collection<HotelSettings>,
}

/// The in-memory store — owns every collection.
///
/// Clones share the same data (`Arc` inside), mirroring how a database
/// handle would be passed around.
#[derive(Clone, Debug)]
pub struct Store {
    inner: Arc<StoreInner>,
}

impl Store {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            inner: Arc::new(StoreInner {
                rooms: Collection::new(),
                guests: Collection::new(),
                reservations: Collection::new(),
                invoices: Collection::new(),
                settings: Collection::new(),
            }),
        }
    }

    pub fn rooms(&self) -> &Collection<Room> {
        &self.inner.rooms
    }

    pub fn guests(&self) -> &Collection<Guest> {
        &self.inner.guests
    }

    pub fn reservations(&self) -> &Collection<Reservation> {
        &self.inner.reservations
    }

    pub fn invoices(&self) -> &Collection<Invoice> {
        &self.inner.invoices
    }

    /// The settings singleton, if configured
    pub fn settings(&self) -> Option<HotelSettings> {
        self.inner.settings.get(SETTINGS_KEY)
    }

    /// Replace the settings document wholesale
    pub fn put_settings(&self, settings: HotelSettings) {
        self.inner.settings.put(SETTINGS_KEY, settings);
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
