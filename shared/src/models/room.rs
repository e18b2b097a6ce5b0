//! Room Model

use serde::{Deserialize, Serialize};

/// Occupancy state of a room.
///
/// Kept separate from [`Housekeeping`]: whether a room is sold and whether
/// it is ready for the next guest are independent questions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Occupancy {
    #[default]
    Available,
    Occupied,
}

/// Housekeeping state of a room
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Housekeeping {
    #[default]
    Clean,
    Dirty,
}

/// Room entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: i64,
    pub number: String,
    #[serde(rename = "type")]
    pub room_type: String,
    pub occupancy: Occupancy,
    pub housekeeping: Housekeeping,
    /// Nightly rate, non-negative
    pub rate: f64,
    pub capacity: i32,
}

/// Create room payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomCreate {
    pub number: String,
    #[serde(rename = "type")]
    pub room_type: String,
    #[serde(default)]
    pub occupancy: Occupancy,
    #[serde(default)]
    pub housekeeping: Housekeeping,
    pub rate: f64,
    pub capacity: Option<i32>,
}

/// Full update payload (PUT replaces every mutable field)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomUpdate {
    pub number: String,
    #[serde(rename = "type")]
    pub room_type: String,
    pub occupancy: Occupancy,
    pub housekeeping: Housekeeping,
    pub rate: f64,
    pub capacity: i32,
}
