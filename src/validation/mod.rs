//! Purchase Validation Module
//!
//! This module validates ticket purchases before anything is charged.
//! Performs the account check, per-category aggregation, the payable ticket
//! cap and the accompaniment rule, then prices the purchase.

mod validator;
pub use validator::PurchaseValidator;
