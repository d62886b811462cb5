//! External Collaborators Module
//!
//! The payment gateway and the seat booking system live outside this crate.
//! This module defines the capability each one offers and a default
//! implementation that accepts every call and records it in the log.

mod payment;
mod reservation;

pub use payment::{LoggingPaymentService, TicketPaymentService};
pub use reservation::{LoggingSeatReservationService, SeatReservationService};
