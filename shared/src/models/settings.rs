//! Hotel Settings Model (singleton document)

use serde::{Deserialize, Serialize};

/// Per-room-type rate schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomTypeSetting {
    pub name: String,
    pub weekday_rate: f64,
    pub weekend_rate: f64,
}

/// Hotel-wide configuration.
///
/// Loaded once, replaced as a whole document via PUT — never patched. Every
/// computation that needs currency or fee data takes this by reference; the
/// engines hold no ambient copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelSettings {
    pub hotel_name: String,
    pub address: String,
    pub phone_number: String,
    pub email: String,
    /// HH:MM
    pub check_in_time: String,
    /// HH:MM
    pub check_out_time: String,
    /// Currency symbol used on invoices
    pub currency: String,
    /// Percentage, e.g. 10.0 for 10%
    #[serde(default)]
    pub tax_rate: f64,
    #[serde(default)]
    pub default_room_rate: f64,
    #[serde(default = "default_max_occupancy")]
    pub max_occupancy_per_room: i32,
    #[serde(default)]
    pub allow_early_check_in: bool,
    #[serde(default)]
    pub allow_late_check_out: bool,
    #[serde(default)]
    pub early_check_in_fee: f64,
    #[serde(default)]
    pub late_check_out_fee: f64,
    #[serde(default)]
    pub extra_bed_fee: f64,
    #[serde(default)]
    pub room_types: Vec<RoomTypeSetting>,
}

fn default_max_occupancy() -> i32 {
    1
}

impl HotelSettings {
    /// Rate schedule for a room type, by exact name
    pub fn room_type(&self, name: &str) -> Option<&RoomTypeSetting> {
        self.room_types.iter().find(|rt| rt.name == name)
    }
}
