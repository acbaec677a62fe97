use bigdecimal::{BigDecimal, RoundingMode, Zero};

/// Result of a reward calculation: the applied rate and the rounded amount.
#[derive(Debug, Clone, PartialEq)]
pub struct RewardCalculation {
    pub reward_rate: BigDecimal,
    pub reward_amount: BigDecimal,
}

/// Monthly reward derived from the account balance.
///
/// - Balances above 10,000.00 earn 2%
/// - Balances at or below 10,000.00 earn 1%
///
/// The amount is `balance * rate` rounded half-up to two decimal places,
/// and a missing balance counts as 0.00. Pure function, never touches the
/// store.
pub fn monthly_reward(balance: Option<&BigDecimal>) -> RewardCalculation {
    let balance = balance.cloned().unwrap_or_else(BigDecimal::zero);

    let reward_rate = if balance > BigDecimal::from(10000) {
        BigDecimal::from(2) / BigDecimal::from(100)
    } else {
        BigDecimal::from(1) / BigDecimal::from(100)
    };

    let reward_amount = (&balance * &reward_rate).with_scale_round(2, RoundingMode::HalfUp);

    RewardCalculation {
        reward_rate,
        reward_amount,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(value: &str) -> BigDecimal {
        value.parse().unwrap()
    }

    #[test]
    fn test_high_balance_earns_two_percent() {
        let reward = monthly_reward(Some(&dec("10001.00")));
        assert_eq!(reward.reward_rate, dec("0.02"));
        assert_eq!(reward.reward_amount, dec("200.02"));
    }

    #[test]
    fn test_low_balance_earns_one_percent() {
        let reward = monthly_reward(Some(&dec("1234.56")));
        assert_eq!(reward.reward_rate, dec("0.01"));
        // 12.3456 rounds up to 12.35
        assert_eq!(reward.reward_amount, dec("12.35"));
    }

    #[test]
    fn test_threshold_balance_is_inclusive_on_the_low_side() {
        // exactly 10000.00 still earns the base rate
        let reward = monthly_reward(Some(&dec("10000.00")));
        assert_eq!(reward.reward_rate, dec("0.01"));
        assert_eq!(reward.reward_amount, dec("100.00"));
    }

    #[test]
    fn test_missing_balance_counts_as_zero() {
        let reward = monthly_reward(None);
        assert_eq!(reward.reward_rate, dec("0.01"));
        assert_eq!(reward.reward_amount, dec("0.00"));
    }

    #[test]
    fn test_amount_rounds_half_up() {
        // 678.9 * 0.01 = 6.789 -> 6.79
        let reward = monthly_reward(Some(&dec("678.90")));
        assert_eq!(reward.reward_amount, dec("6.79"));

        // 123.4 * 0.01 = 1.234 -> 1.23
        let reward = monthly_reward(Some(&dec("123.40")));
        assert_eq!(reward.reward_amount, dec("1.23"));
    }

    #[test]
    fn test_amount_is_formatted_to_two_decimal_places() {
        let reward = monthly_reward(Some(&dec("20000.00")));
        assert_eq!(reward.reward_amount.to_string(), "400.00");
    }
}
