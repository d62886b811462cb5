use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Category of a cinema ticket
///
/// The set is closed: any other name is rejected when a request is
/// deserialized, long before the business rules run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketCategory {
    Infant,
    Child,
    Adult,
}

impl TicketCategory {
    /// Every category, in pricing order
    pub const ALL: [TicketCategory; 3] = [
        TicketCategory::Infant,
        TicketCategory::Child,
        TicketCategory::Adult,
    ];
}

/// A single (category, count) line of a purchase
///
/// The count is signed because callers can hand us anything; negative
/// counts are rejected during aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketRequest {
    pub category: TicketCategory,
    pub count: i32,
}

impl TicketRequest {
    pub fn new(category: TicketCategory, count: i32) -> Self {
        Self { category, count }
    }
}

/// Ticket counts summed per category across every request of a purchase
///
/// One field per category, all starting at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TicketTotals {
    pub infant: u32,
    pub child: u32,
    pub adult: u32,
}

impl TicketTotals {
    /// Count for a single category
    pub fn get(&self, category: TicketCategory) -> u32 {
        match category {
            TicketCategory::Infant => self.infant,
            TicketCategory::Child => self.child,
            TicketCategory::Adult => self.adult,
        }
    }

    /// Mutable slot for a single category
    pub fn slot_mut(&mut self, category: TicketCategory) -> &mut u32 {
        match category {
            TicketCategory::Infant => &mut self.infant,
            TicketCategory::Child => &mut self.child,
            TicketCategory::Adult => &mut self.adult,
        }
    }

    /// Tickets that are charged and count toward the per-purchase cap
    pub fn payable(&self) -> u64 {
        u64::from(self.child) + u64::from(self.adult)
    }

    /// Seats to reserve. Infants sit on an adult's lap.
    pub fn reservable_seats(&self) -> u64 {
        u64::from(self.child) + u64::from(self.adult)
    }

    /// Tickets that need at least one adult in the same purchase
    pub fn requiring_accompaniment(&self) -> u64 {
        u64::from(self.child) + u64::from(self.infant)
    }
}

/// Result of a valid purchase, handed straight to the collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseOutcome {
    /// Total charge in minor currency units (pence)
    pub total_charge: u64,
    /// Number of seats to reserve
    pub seats: u32,
}

/// Why a ticket count was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TicketCountViolation {
    #[error("request for {category:?} has negative count {count}")]
    Negative { category: TicketCategory, count: i32 },
    #[error("{requested} payable tickets exceeds the limit of {max}")]
    OverCapacity { requested: u64, max: u32 },
    #[error("ticket count for {category:?} overflowed")]
    Overflow { category: TicketCategory },
}

/// Failure reported by an external collaborator (payment gateway or seat booking)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct GatewayError(pub String);

impl GatewayError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Purchase errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PurchaseError {
    #[error("Invalid account id {account_id}")]
    InvalidAccount { account_id: i64 },
    #[error("Invalid number of tickets: {reason}")]
    InvalidTicketCount { reason: TicketCountViolation },
    #[error("Child and infant tickets cannot be purchased without an adult ticket")]
    UnaccompaniedMinors,
    #[error("Payment failed: {0}")]
    Payment(#[source] GatewayError),
    #[error("Seat reservation failed: {0}")]
    Reservation(#[source] GatewayError),
}

impl PurchaseError {
    /// True for the business-rule rejections, false for collaborator failures
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            PurchaseError::InvalidAccount { .. }
                | PurchaseError::InvalidTicketCount { .. }
                | PurchaseError::UnaccompaniedMinors
        )
    }
}

impl From<TicketCountViolation> for PurchaseError {
    fn from(reason: TicketCountViolation) -> Self {
        PurchaseError::InvalidTicketCount { reason }
    }
}

/// A purchase order as read by the binary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub account_id: i64,
    #[serde(default)]
    pub requests: Vec<TicketRequest>,
}
