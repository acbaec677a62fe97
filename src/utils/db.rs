use anyhow::{Context, Result};
use diesel::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};

/// Check a connection out of the pool. The connection goes back to the pool
/// when it drops, on every exit path.
pub fn get_conn(
    pool: &Pool<ConnectionManager<PgConnection>>,
) -> Result<PooledConnection<ConnectionManager<PgConnection>>> {
    let conn = pool
        .get()
        .context("failed to check out a store connection")?;

    Ok(conn)
}
