//! Guest Repository

use shared::models::{Guest, GuestCreate};

use super::RepoResult;
use crate::db::Store;

#[derive(Clone)]
pub struct GuestRepository {
    store: Store,
}

impl GuestRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Find all guests, ordered by id
    pub fn find_all(&self) -> Vec<Guest> {
        self.store.guests().all()
    }

    /// Find guest by id
    pub fn find_by_id(&self, id: i64) -> Option<Guest> {
        self.store.guests().get(id)
    }

    /// Case-insensitive substring search over name and email
    pub fn search(&self, term: &str) -> Vec<Guest> {
        let needle = term.to_lowercase();
        self.find_all()
            .into_iter()
            .filter(|g| {
                g.name.to_lowercase().contains(&needle)
                    || g.email.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Create a new guest; stay history starts empty
    pub fn create(&self, data: GuestCreate) -> RepoResult<Guest> {
        let id = self.store.guests().next_id();
        let guest = Guest {
            id,
            name: data.name,
            email: data.email,
            phone: data.phone,
            stays: Vec::new(),
        };
        self.store.guests().put(id, guest.clone());
        Ok(guest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guest_payload(name: &str, email: &str) -> GuestCreate {
        GuestCreate {
            name: name.to_string(),
            email: email.to_string(),
            phone: "1234567890".to_string(),
        }
    }

    #[test]
    fn test_create_starts_with_empty_stays() {
        let repo = GuestRepository::new(Store::new());
        let guest = repo.create(guest_payload("John Doe", "john@example.com")).unwrap();
        assert_eq!(guest.id, 1);
        assert!(guest.stays.is_empty());
    }

    #[test]
    fn test_search_matches_name_or_email_case_insensitive() {
        let repo = GuestRepository::new(Store::new());
        repo.create(guest_payload("John Doe", "john@example.com")).unwrap();
        repo.create(guest_payload("Jane Roe", "jane@elsewhere.org")).unwrap();

        assert_eq!(repo.search("JOHN").len(), 1);
        assert_eq!(repo.search("elsewhere").len(), 1);
        assert_eq!(repo.search("j").len(), 2);
        assert!(repo.search("nobody").is_empty());
    }
}
