//! This crate validates and processes cinema ticket purchases.
//! It aggregates ticket requests by category, enforces the purchase rules,
//! prices the purchase and hands the result to the payment gateway and the
//! seat booking system.

pub mod types; // Ticket categories, requests, totals and errors.
pub mod config; // Pricing and limits, loaded from TOML.
pub mod validation; // Purchase rules and pricing.
pub mod gateway; // Payment and seat reservation collaborators.
pub mod service; // Purchase entry point wiring validation to the collaborators.

// Re-export commonly used types and configurations for easier access.
pub use types::*;
pub use config::Config;
pub use service::TicketService;
