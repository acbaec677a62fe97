use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel_derive_enum::DbEnum;
use serde::{Deserialize, Serialize};

use crate::schema::accounts as AccountsTable;

#[derive(DbEnum, Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[ExistingTypePath = "crate::schema::sql_types::Customertier"]
#[serde(rename_all = "lowercase")]
pub enum CustomerTier {
    Standard,
    Premium,
}

/// Raw accounts row, without the customer join.
#[derive(Serialize, Deserialize, Queryable, Debug, Clone, Identifiable, QueryableByName)]
#[diesel(table_name = AccountsTable)]
#[diesel(primary_key(account_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AccountRecord {
    pub account_id: i32,
    pub customer_id: i32,
    pub balance: Option<BigDecimal>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// One line of the account listing: accounts joined to customers.
#[derive(Serialize, Deserialize, Queryable, Debug, Clone, PartialEq)]
pub struct AccountSummary {
    pub account_id: i32,
    pub balance: Option<BigDecimal>,
    pub customer_name: String,
    pub tier: CustomerTier,
}

/// Full account view returned by single-account reads and balance updates.
#[derive(Serialize, Deserialize, Queryable, Debug, Clone, PartialEq)]
pub struct AccountDetail {
    pub account_id: i32,
    pub balance: Option<BigDecimal>,
    pub customer_id: i32,
    pub customer_name: String,
    pub tier: CustomerTier,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&CustomerTier::Standard).unwrap(),
            "\"standard\""
        );
        assert_eq!(
            serde_json::to_string(&CustomerTier::Premium).unwrap(),
            "\"premium\""
        );
    }

    #[test]
    fn test_tier_deserializes_lowercase() {
        let tier: CustomerTier = serde_json::from_str("\"premium\"").unwrap();
        assert_eq!(tier, CustomerTier::Premium);
    }

    #[test]
    fn test_summary_serializes_null_balance() {
        let summary = AccountSummary {
            account_id: 7,
            balance: None,
            customer_name: "Frank Miller".to_string(),
            tier: CustomerTier::Standard,
        };

        let json = serde_json::to_value(&summary).unwrap();
        assert!(json["balance"].is_null());
        assert_eq!(json["customer_name"], "Frank Miller");
        assert_eq!(json["tier"], "standard");
    }
}
