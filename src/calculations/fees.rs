use bigdecimal::{BigDecimal, Zero};

use crate::accounts::db_types::CustomerTier;

/// Monthly account fee derived from the customer tier and current balance.
///
/// - Premium accounts pay no monthly fee
/// - Standard accounts above 5,000.00 pay 5.00
/// - Standard accounts at or below 5,000.00 pay 15.00
///
/// A missing balance counts as 0.00. Pure function, never touches the store.
pub fn monthly_fee(tier: &CustomerTier, balance: Option<&BigDecimal>) -> BigDecimal {
    match tier {
        CustomerTier::Premium => BigDecimal::zero().with_scale(2),
        // every tier that is not premium pays the standard-tier fee
        _ => match balance {
            Some(b) if *b > BigDecimal::from(5000) => BigDecimal::from(5).with_scale(2),
            _ => BigDecimal::from(15).with_scale(2),
        },
    }
}
