use anyhow::Result;
use bigdecimal::BigDecimal;
use diesel::prelude::*;

use crate::accounts::db_types::{AccountDetail, AccountSummary};
use crate::utils::commons::DbConn;

/// List every account joined to its owning customer, ordered by customer
/// name and then account id so repeated reads return the same sequence.
pub async fn list_accounts(conn: DbConn<'_>) -> Result<Vec<AccountSummary>> {
    use crate::schema::{accounts, customers};

    let rows = accounts::table
        .inner_join(customers::table)
        .select((
            accounts::account_id,
            accounts::balance,
            customers::name,
            customers::tier,
        ))
        .order((customers::name.asc(), accounts::account_id.asc()))
        .load::<AccountSummary>(conn)?;

    Ok(rows)
}

/// Fetch a single account with its customer name and tier. Returns `None`
/// when no row matches.
pub async fn get_account(conn: DbConn<'_>, account_id: i32) -> Result<Option<AccountDetail>> {
    use crate::schema::{accounts, customers};

    let row = accounts::table
        .inner_join(customers::table)
        .filter(accounts::account_id.eq(account_id))
        .select((
            accounts::account_id,
            accounts::balance,
            accounts::customer_id,
            customers::name,
            customers::tier,
            accounts::created_at,
            accounts::updated_at,
        ))
        .first::<AccountDetail>(conn)
        .optional()?;

    Ok(row)
}

/// Persist a new balance and refresh `updated_at` in a single-row update.
/// Returns `None` when zero rows were affected (unknown account). The
/// caller is responsible for rejecting negative balances before this point.
pub async fn update_balance(
    conn: DbConn<'_>,
    account_id: i32,
    new_balance: BigDecimal,
) -> Result<Option<AccountDetail>> {
    use crate::schema::accounts;

    let affected = diesel::update(accounts::table.filter(accounts::account_id.eq(account_id)))
        .set((
            accounts::balance.eq(new_balance),
            accounts::updated_at.eq(diesel::dsl::now),
        ))
        .execute(conn)?;

    if affected == 0 {
        return Ok(None);
    }

    get_account(conn, account_id).await
}
