use crate::{
    PurchaseError, PurchaseOutcome, TicketRequest,
    config::Config,
    gateway::{
        LoggingPaymentService, LoggingSeatReservationService, SeatReservationService,
        TicketPaymentService,
    },
    validation::PurchaseValidator,
};
use tracing::{info, warn};

/// Ticket purchase service
///
/// Owns the validator and the two external collaborators, injected through
/// the constructor.
pub struct TicketService<P, R> {
    validator: PurchaseValidator,
    payments: P,
    reservations: R,
}

impl<P, R> TicketService<P, R>
where
    P: TicketPaymentService,
    R: SeatReservationService,
{
    /// Creates a new ticket service
    ///
    /// # Arguments
    /// * `config` - Pricing and limits
    /// * `payments` - Payment gateway used to charge the account
    /// * `reservations` - Seat booking system
    pub fn new(config: Config, payments: P, reservations: R) -> Self {
        Self {
            validator: PurchaseValidator::new(config),
            payments,
            reservations,
        }
    }

    /// Purchase tickets for an account
    ///
    /// Validates the requests, then charges the account and reserves seats,
    /// in that order. Both collaborators are called even when the purchase
    /// holds no tickets, with zero. Neither is called if validation fails,
    /// and seats are not reserved if the payment fails.
    ///
    /// # Returns
    /// The charge and seat count passed to the collaborators
    pub fn purchase(
        &self,
        account_id: i64,
        requests: &[TicketRequest],
    ) -> Result<PurchaseOutcome, PurchaseError> {
        // Step 1: Validate and price, no side effects yet
        let outcome = self.validator.validate(account_id, requests)?;

        // Step 2: Charge before reserving
        self.payments
            .make_payment(account_id, outcome.total_charge)
            .map_err(|e| {
                warn!("Payment for account {} failed: {}", account_id, e);
                PurchaseError::Payment(e)
            })?;

        // Step 3: Reserve seats
        self.reservations
            .reserve_seats(account_id, outcome.seats)
            .map_err(|e| {
                warn!("Seat reservation for account {} failed: {}", account_id, e);
                PurchaseError::Reservation(e)
            })?;

        info!(
            "Purchase complete for account {}: charged {}, reserved {} seats",
            account_id, outcome.total_charge, outcome.seats
        );
        Ok(outcome)
    }
}

impl TicketService<LoggingPaymentService, LoggingSeatReservationService> {
    /// Service wired to the logging collaborators
    pub fn with_logging(config: Config) -> Self {
        Self::new(config, LoggingPaymentService, LoggingSeatReservationService)
    }
}
