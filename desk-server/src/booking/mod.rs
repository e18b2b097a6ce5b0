//! Booking domain engines
//!
//! The business rules of the front desk, kept as pure functions over
//! immutable snapshots of the store:
//!
//! - **availability**: room/day calendar for a month
//! - **billing**: down-payment and full-payment invoicing (the three-step
//!   payment chain), invoice print view
//! - **loyalty**: reservation-count scoring and ranking
//! - **notifications**: check-in / check-out / payment-due alerts for today
//! - **guest_stats**: per-guest visit/night/spend totals
//! - **quote**: stay pricing from the settings fee schedule
//! - **money**: decimal arithmetic helpers shared by the above

pub mod availability;
pub mod billing;
pub mod guest_stats;
pub mod loyalty;
pub mod money;
pub mod notifications;
pub mod quote;

// Re-exports
pub use availability::{AvailabilityMap, availability_map};
pub use billing::{BillingError, FullPaymentOutcome, PaymentStep};
pub use guest_stats::{GuestTotals, guest_totals};
pub use loyalty::{LoyaltyEntry, rank_guests};
pub use notifications::{Notification, NotificationKind, derive_notifications};
pub use quote::{QuoteOptions, StayQuote, quote_stay};
