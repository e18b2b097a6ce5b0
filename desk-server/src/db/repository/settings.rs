//! Settings Repository (singleton document)

use shared::models::HotelSettings;

use crate::db::Store;

#[derive(Clone)]
pub struct SettingsRepository {
    store: Store,
}

impl SettingsRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// The settings document, if the hotel has been configured
    pub fn get(&self) -> Option<HotelSettings> {
        self.store.settings()
    }

    /// Replace the whole document (creating it on first write).
    ///
    /// Settings are never patched field-by-field; the client always sends
    /// the complete document.
    pub fn replace(&self, settings: HotelSettings) -> HotelSettings {
        self.store.put_settings(settings.clone());
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_settings(name: &str) -> HotelSettings {
        HotelSettings {
            hotel_name: name.to_string(),
            address: "1 Seaside Ave".to_string(),
            phone_number: "555-0100".to_string(),
            email: "desk@example.com".to_string(),
            check_in_time: "14:00".to_string(),
            check_out_time: "11:00".to_string(),
            currency: "$".to_string(),
            tax_rate: 10.0,
            default_room_rate: 100.0,
            max_occupancy_per_room: 4,
            allow_early_check_in: true,
            allow_late_check_out: false,
            early_check_in_fee: 20.0,
            late_check_out_fee: 30.0,
            extra_bed_fee: 15.0,
            room_types: Vec::new(),
        }
    }

    #[test]
    fn test_get_before_first_write_is_none() {
        let repo = SettingsRepository::new(Store::new());
        assert!(repo.get().is_none());
    }

    #[test]
    fn test_replace_creates_then_overwrites() {
        let repo = SettingsRepository::new(Store::new());
        repo.replace(sample_settings("Seaside Inn"));
        assert_eq!(repo.get().unwrap().hotel_name, "Seaside Inn");

        repo.replace(sample_settings("Hilltop Lodge"));
        assert_eq!(repo.get().unwrap().hotel_name, "Hilltop Lodge");
    }
}
