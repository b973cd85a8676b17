pub mod accounts;
pub mod appointments;
pub mod sessions;

use crate::DbPool;
use anyhow::Context;
use diesel::{connection::SimpleConnection, r2d2::ConnectionManager, SqliteConnection};
use r2d2::PooledConnection;

const CREATE_TABLES_SQL: &str =
    include_str!("../../migrations/2024-01-01-000000_create_tables/up.sql");

/// Pooled SQLite connections wait for a competing writer instead of failing
/// with `database is locked`.
#[derive(Debug)]
struct SqlitePragmas;

impl r2d2::CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute("PRAGMA busy_timeout = 5000; PRAGMA journal_mode = WAL;")
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

pub fn create_pool(database_url: &str, max_size: u32) -> anyhow::Result<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    r2d2::Pool::builder()
        .max_size(max_size)
        .connection_customizer(Box::new(SqlitePragmas))
        .build(manager)
        .context("Failed to create pool")
}

pub fn get_db_conn(
    pool: &DbPool,
) -> anyhow::Result<PooledConnection<ConnectionManager<SqliteConnection>>> {
    pool.get().context("DB connection")
}

/// Creates every table that does not exist yet. Safe to run on each start.
pub fn run_migrations(conn: &mut SqliteConnection) -> diesel::QueryResult<()> {
    conn.batch_execute(CREATE_TABLES_SQL)
}

pub fn migrate(pool: &DbPool) -> anyhow::Result<()> {
    let mut conn = get_db_conn(pool)?;
    run_migrations(&mut conn).context("DB migration")
}

#[cfg(test)]
pub(crate) fn test_conn() -> SqliteConnection {
    use diesel::Connection;

    let mut conn = SqliteConnection::establish(":memory:").unwrap();
    run_migrations(&mut conn).unwrap();
    conn
}
