use diesel::{
    PgConnection,
    r2d2::{ConnectionManager, PooledConnection},
};

pub type DbConn<'db> = &'db mut PooledConnection<ConnectionManager<PgConnection>>;
