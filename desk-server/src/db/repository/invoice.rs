//! Invoice Repository

use shared::models::{Invoice, InvoiceCreate, InvoiceStatus};

use super::{RepoError, RepoResult};
use crate::db::Store;

#[derive(Clone)]
pub struct InvoiceRepository {
    store: Store,
}

impl InvoiceRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Find all invoices, ordered by id
    pub fn find_all(&self) -> Vec<Invoice> {
        self.store.invoices().all()
    }

    /// Find invoice by id
    pub fn find_by_id(&self, id: i64) -> Option<Invoice> {
        self.store.invoices().get(id)
    }

    /// All invoices issued against a reservation
    pub fn find_by_reservation(&self, reservation_id: i64) -> Vec<Invoice> {
        self.find_all()
            .into_iter()
            .filter(|i| i.reservation_id == reservation_id)
            .collect()
    }

    /// Create a new invoice; status always starts `unpaid`
    pub fn create(&self, data: InvoiceCreate) -> RepoResult<Invoice> {
        let id = self.store.invoices().next_id();
        let invoice = Invoice {
            id,
            reservation_id: data.reservation_id,
            guest_name: data.guest_name,
            room_number: data.room_number,
            check_in_date: data.check_in_date,
            check_out_date: data.check_out_date,
            room_charge: data.room_charge,
            additional_charges: data.additional_charges,
            total_amount: data.total_amount,
            payment_method: data.payment_method,
            status: InvoiceStatus::Unpaid,
        };
        self.store.invoices().put(id, invoice.clone());
        Ok(invoice)
    }

    /// Update only the status field (PATCH semantics)
    pub fn update_status(&self, id: i64, status: InvoiceStatus) -> RepoResult<Invoice> {
        let mut invoice = self
            .find_by_id(id)
            .ok_or_else(|| RepoError::NotFound(format!("Invoice {} not found", id)))?;
        invoice.status = status;
        self.store.invoices().put(id, invoice.clone());
        Ok(invoice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn invoice_payload(reservation_id: i64, amount: f64) -> InvoiceCreate {
        InvoiceCreate {
            reservation_id,
            guest_name: "John Doe".to_string(),
            room_number: "101".to_string(),
            check_in_date: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
            check_out_date: NaiveDate::from_ymd_opt(2023, 6, 5).unwrap(),
            room_charge: amount,
            additional_charges: 0.0,
            total_amount: amount,
            payment_method: "cash".to_string(),
        }
    }

    #[test]
    fn test_create_defaults_to_unpaid() {
        let repo = InvoiceRepository::new(Store::new());
        let invoice = repo.create(invoice_payload(1, 100.0)).unwrap();
        assert_eq!(invoice.status, InvoiceStatus::Unpaid);
    }

    #[test]
    fn test_update_status_to_paid() {
        let repo = InvoiceRepository::new(Store::new());
        let invoice = repo.create(invoice_payload(1, 100.0)).unwrap();
        let updated = repo.update_status(invoice.id, InvoiceStatus::Paid).unwrap();
        assert_eq!(updated.status, InvoiceStatus::Paid);
        assert_eq!(updated.total_amount, 100.0);
    }

    #[test]
    fn test_find_by_reservation() {
        let repo = InvoiceRepository::new(Store::new());
        repo.create(invoice_payload(7, 100.0)).unwrap();
        repo.create(invoice_payload(7, 300.0)).unwrap();
        repo.create(invoice_payload(8, 50.0)).unwrap();
        assert_eq!(repo.find_by_reservation(7).len(), 2);
    }
}
