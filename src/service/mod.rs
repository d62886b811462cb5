//! Ticket Purchase Service Module
//!
//! Entry point for buying tickets. A purchase is validated and priced first;
//! only a valid purchase reaches the payment gateway and then seat booking.

mod ticket_service;


pub use ticket_service::TicketService;
