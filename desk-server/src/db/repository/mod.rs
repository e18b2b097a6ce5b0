//! Repository Module
//!
//! Provides CRUD operations over the in-memory store, one repository per
//! entity. Handlers talk to repositories, never to collections directly.

pub mod guest;
pub mod invoice;
pub mod reservation;
pub mod room;
pub mod settings;

// Re-exports
pub use guest::GuestRepository;
pub use invoice::InvoiceRepository;
pub use reservation::ReservationRepository;
pub use room::RoomRepository;
pub use settings::SettingsRepository;

use thiserror::Error;

use crate::utils::AppError;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Duplicate(msg) => AppError::Conflict(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
