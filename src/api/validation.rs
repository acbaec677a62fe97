use bigdecimal::{BigDecimal, Zero};

use crate::api::error::ApiError;

pub fn validate_account_id(value: &str) -> Result<i32, ApiError> {
    value
        .parse::<i32>()
        .map_err(|_| ApiError::bad_request("Invalid account ID format"))
}

pub fn validate_balance(balance: &BigDecimal) -> Result<(), ApiError> {
    if *balance < BigDecimal::zero() {
        return Err(ApiError::bad_request("Balance cannot be negative"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_id_must_be_numeric() {
        assert_eq!(validate_account_id("42").unwrap(), 42);
        assert!(validate_account_id("abc").is_err());
        assert!(validate_account_id("").is_err());
        assert!(validate_account_id("1.5").is_err());
    }

    #[test]
    fn test_negative_balance_is_rejected() {
        let negative: BigDecimal = "-1".parse().unwrap();
        assert!(validate_balance(&negative).is_err());

        let tiny_negative: BigDecimal = "-0.01".parse().unwrap();
        assert!(validate_balance(&tiny_negative).is_err());
    }

    #[test]
    fn test_zero_and_positive_balances_pass() {
        let zero: BigDecimal = "0.00".parse().unwrap();
        assert!(validate_balance(&zero).is_ok());

        let positive: BigDecimal = "5000.00".parse().unwrap();
        assert!(validate_balance(&positive).is_ok());
    }
}
