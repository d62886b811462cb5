use crate::GatewayError;
use tracing::info;

/// Payment gateway capability
///
/// Charges an account. Implementations are expected to be synchronous;
/// an error means the charge did not happen.
pub trait TicketPaymentService: Send + Sync {
    /// Charge `amount` (pence) to `account_id`
    fn make_payment(&self, account_id: i64, amount: u64) -> Result<(), GatewayError>;
}

impl<T: TicketPaymentService + ?Sized> TicketPaymentService for &T {
    fn make_payment(&self, account_id: i64, amount: u64) -> Result<(), GatewayError> {
        (**self).make_payment(account_id, amount)
    }
}

impl<T: TicketPaymentService + ?Sized> TicketPaymentService for Box<T> {
    fn make_payment(&self, account_id: i64, amount: u64) -> Result<(), GatewayError> {
        (**self).make_payment(account_id, amount)
    }
}

/// Payment service that always succeeds and logs the charge
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingPaymentService;

impl TicketPaymentService for LoggingPaymentService {
    fn make_payment(&self, account_id: i64, amount: u64) -> Result<(), GatewayError> {
        info!("Charged account {}: {} pence", account_id, amount);
        Ok(())
    }
}
