use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager, CustomizeConnection};
use domain::DomainError;
use tracing::info;

pub mod schema;
pub use schema::*;

pub type SqlitePool = r2d2::Pool<ConnectionManager<SqliteConnection>>;

const CREATE_TABLES: &str = "
CREATE TABLE IF NOT EXISTS employees (
    id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    email TEXT NOT NULL
);
";

#[derive(Debug)]
struct ConnectionOptions;

impl CustomizeConnection<SqliteConnection, r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        // Wait for writers on other pooled connections instead of failing with SQLITE_BUSY
        conn.batch_execute("PRAGMA busy_timeout = 5000;")
            .map_err(r2d2::Error::QueryError)
    }
}

pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (or create) the SQLite database at `database_path` and make sure
    /// the employees table exists.
    pub fn new(database_path: &str) -> Result<Self, DomainError> {
        let manager = ConnectionManager::<SqliteConnection>::new(database_path);
        let pool = r2d2::Pool::builder()
            .connection_customizer(Box::new(ConnectionOptions))
            .build(manager)
            .map_err(|e| DomainError::RepositoryError(e.to_string()))?;

        let database = Database { pool };
        database.create_tables()?;
        info!(database_path, "employee database ready");
        Ok(database)
    }

    /// Private in-memory database. The pool holds exactly one connection,
    /// which keeps the database alive for as long as the pool lives.
    pub fn in_memory() -> Result<Self, DomainError> {
        let manager = ConnectionManager::<SqliteConnection>::new(":memory:");
        let pool = r2d2::Pool::builder()
            .max_size(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .build(manager)
            .map_err(|e| DomainError::RepositoryError(e.to_string()))?;

        let database = Database { pool };
        database.create_tables()?;
        Ok(database)
    }

    pub fn get_pool(&self) -> &SqlitePool {
        &self.pool
    }

    fn create_tables(&self) -> Result<(), DomainError> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| DomainError::RepositoryError(e.to_string()))?;

        conn.batch_execute(CREATE_TABLES)
            .map_err(|e| DomainError::RepositoryError(e.to_string()))
    }
}
