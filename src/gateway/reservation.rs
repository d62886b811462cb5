use crate::GatewayError;
use tracing::info;

/// Seat booking capability
pub trait SeatReservationService: Send + Sync {
    /// Reserve `seats` seats for `account_id`
    fn reserve_seats(&self, account_id: i64, seats: u32) -> Result<(), GatewayError>;
}

impl<T: SeatReservationService + ?Sized> SeatReservationService for &T {
    fn reserve_seats(&self, account_id: i64, seats: u32) -> Result<(), GatewayError> {
        (**self).reserve_seats(account_id, seats)
    }
}

impl<T: SeatReservationService + ?Sized> SeatReservationService for Box<T> {
    fn reserve_seats(&self, account_id: i64, seats: u32) -> Result<(), GatewayError> {
        (**self).reserve_seats(account_id, seats)
    }
}

/// Seat reservation service that always succeeds and logs the booking
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingSeatReservationService;

impl SeatReservationService for LoggingSeatReservationService {
    fn reserve_seats(&self, account_id: i64, seats: u32) -> Result<(), GatewayError> {
        info!("Reserved {} seats for account {}", seats, account_id);
        Ok(())
    }
}
