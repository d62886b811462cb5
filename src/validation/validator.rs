use crate::{
    PurchaseError, PurchaseOutcome, TicketCategory, TicketCountViolation, TicketRequest,
    TicketTotals, config::Config,
};
use tracing::{debug, warn};

/// Purchase validator
///
/// Applies the purchase rules in a fixed order and fails fast:
/// account, ticket counts, capacity, then accompaniment. A purchase that
/// passes every gate is priced and its seats are counted. Nothing here
/// has side effects.
#[derive(Debug, Clone, Default)]
pub struct PurchaseValidator {
    config: Config,
}

impl PurchaseValidator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Validate a purchase and compute what to charge and reserve
    ///
    /// # Arguments
    /// * `account_id` - Purchasing account, must be greater than zero
    /// * `requests` - Ticket requests, possibly several per category
    ///
    /// # Returns
    /// The charge and seat count if valid, otherwise the first rule that failed
    pub fn validate(
        &self,
        account_id: i64,
        requests: &[TicketRequest],
    ) -> Result<PurchaseOutcome, PurchaseError> {
        debug!("Validating {} ticket requests for account {}", requests.len(), account_id);

        // 1. Account check, before looking at any request
        self.check_account(account_id)?;

        // 2. Aggregate per category, rejecting negative counts
        let totals = self.aggregate(requests)?;

        // 3. Cap on payable tickets
        self.check_capacity(account_id, &totals)?;

        // 4. Children and infants need an adult
        self.check_accompaniment(account_id, &totals)?;

        let outcome = PurchaseOutcome {
            total_charge: self.total_charge(&totals)?,
            seats: seat_count(&totals)?,
        };

        debug!(
            "Purchase for account {} valid: charge {}, seats {}",
            account_id, outcome.total_charge, outcome.seats
        );
        Ok(outcome)
    }

    fn check_account(&self, account_id: i64) -> Result<(), PurchaseError> {
        if account_id <= 0 {
            warn!("Rejected purchase: invalid account id {}", account_id);
            return Err(PurchaseError::InvalidAccount { account_id });
        }
        Ok(())
    }

    /// Sum counts per category. Categories with no request stay at zero.
    pub fn aggregate(&self, requests: &[TicketRequest]) -> Result<TicketTotals, PurchaseError> {
        let mut totals = TicketTotals::default();

        for request in requests {
            let count = u32::try_from(request.count).map_err(|_| {
                warn!(
                    "Rejected purchase: negative count {} for {:?}",
                    request.count, request.category
                );
                TicketCountViolation::Negative {
                    category: request.category,
                    count: request.count,
                }
            })?;

            let slot = totals.slot_mut(request.category);
            *slot = slot.checked_add(count).ok_or(TicketCountViolation::Overflow {
                category: request.category,
            })?;
        }

        Ok(totals)
    }

    fn check_capacity(&self, account_id: i64, totals: &TicketTotals) -> Result<(), PurchaseError> {
        let max = self.config.limits.max_tickets_per_purchase;
        let requested = totals.payable();

        // Infants are not counted against the cap
        if requested > u64::from(max) {
            warn!(
                "Rejected purchase for account {}: {} payable tickets over limit of {}",
                account_id, requested, max
            );
            return Err(TicketCountViolation::OverCapacity { requested, max }.into());
        }
        Ok(())
    }

    fn check_accompaniment(
        &self,
        account_id: i64,
        totals: &TicketTotals,
    ) -> Result<(), PurchaseError> {
        if totals.requiring_accompaniment() > 0 && totals.adult == 0 {
            warn!(
                "Rejected purchase for account {}: {} child and {} infant tickets without an adult",
                account_id, totals.child, totals.infant
            );
            return Err(PurchaseError::UnaccompaniedMinors);
        }
        Ok(())
    }

    /// Price every category, including the ones with no tickets
    pub fn total_charge(&self, totals: &TicketTotals) -> Result<u64, PurchaseError> {
        TicketCategory::ALL.iter().try_fold(0u64, |total, &category| {
            let price = u64::from(self.config.pricing.unit_price(category));
            price
                .checked_mul(u64::from(totals.get(category)))
                .and_then(|charge| total.checked_add(charge))
                .ok_or(PurchaseError::from(TicketCountViolation::Overflow { category }))
        })
    }
}

fn seat_count(totals: &TicketTotals) -> Result<u32, PurchaseError> {
    u32::try_from(totals.reservable_seats()).map_err(|_| {
        PurchaseError::from(TicketCountViolation::Overflow {
            category: TicketCategory::Adult,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LimitsConfig, PricingConfig};
    use crate::TicketCategory::{Adult, Child, Infant};

    fn req(category: TicketCategory, count: i32) -> TicketRequest {
        TicketRequest::new(category, count)
    }

    #[test]
    fn test_aggregate_zero_fills_missing_categories() {
        let totals = PurchaseValidator::default().aggregate(&[req(Child, 2)]).unwrap();
        assert_eq!(totals, TicketTotals { infant: 0, child: 2, adult: 0 });
    }

    #[test]
    fn test_aggregate_sums_repeated_categories() {
        let totals = PurchaseValidator::default()
            .aggregate(&[req(Adult, 1), req(Infant, 2), req(Adult, 4)])
            .unwrap();
        assert_eq!(totals.adult, 5);
        assert_eq!(totals.infant, 2);
    }

    #[test]
    fn test_aggregate_rejects_negative_count() {
        let err = PurchaseValidator::default()
            .aggregate(&[req(Adult, 2), req(Child, -1)])
            .unwrap_err();
        assert_eq!(
            err,
            PurchaseError::InvalidTicketCount {
                reason: TicketCountViolation::Negative { category: Child, count: -1 }
            }
        );
    }

    #[test]
    fn test_aggregate_overflow_is_invalid_count() {
        let requests = vec![req(Infant, i32::MAX), req(Infant, i32::MAX), req(Infant, 2)];
        let err = PurchaseValidator::default().aggregate(&requests).unwrap_err();
        assert!(matches!(
            err,
            PurchaseError::InvalidTicketCount { reason: TicketCountViolation::Overflow { .. } }
        ));
    }

    #[test]
    fn test_account_checked_before_requests() {
        let err = PurchaseValidator::default()
            .validate(-1, &[req(Adult, -5)])
            .unwrap_err();
        assert_eq!(err, PurchaseError::InvalidAccount { account_id: -1 });
    }

    #[test]
    fn test_zero_account_is_invalid() {
        let err = PurchaseValidator::default().validate(0, &[req(Adult, 1)]).unwrap_err();
        assert_eq!(err, PurchaseError::InvalidAccount { account_id: 0 });
    }

    #[test]
    fn test_capacity_checked_before_accompaniment() {
        let err = PurchaseValidator::default().validate(1, &[req(Child, 21)]).unwrap_err();
        assert!(matches!(
            err,
            PurchaseError::InvalidTicketCount { reason: TicketCountViolation::OverCapacity { .. } }
        ));
    }

    #[test]
    fn test_infants_do_not_count_toward_capacity() {
        let outcome = PurchaseValidator::default()
            .validate(1, &[req(Adult, 20), req(Infant, 5)])
            .unwrap();
        assert_eq!(outcome, PurchaseOutcome { total_charge: 40000, seats: 20 });
    }

    #[test]
    fn test_mixed_purchase_pricing_and_seats() {
        let outcome = PurchaseValidator::default()
            .validate(1, &[req(Adult, 2), req(Child, 1), req(Infant, 1)])
            .unwrap();
        assert_eq!(outcome, PurchaseOutcome { total_charge: 5000, seats: 3 });
    }

    #[test]
    fn test_configured_prices_and_limit() {
        let config = Config {
            pricing: PricingConfig { adult: 1500, child: 500 },
            limits: LimitsConfig { max_tickets_per_purchase: 3 },
        };
        let validator = PurchaseValidator::new(config);

        let outcome = validator.validate(9, &[req(Adult, 1), req(Child, 2)]).unwrap();
        assert_eq!(outcome, PurchaseOutcome { total_charge: 2500, seats: 3 });

        let err = validator.validate(9, &[req(Adult, 4)]).unwrap_err();
        assert_eq!(
            err,
            PurchaseError::InvalidTicketCount {
                reason: TicketCountViolation::OverCapacity { requested: 4, max: 3 }
            }
        );
    }
}
