use diesel::connection::SimpleConnection;
use diesel::r2d2::{self, ConnectionManager, CustomizeConnection};
use diesel::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use crate::errors::{AppError, AppResult};
use crate::settings::Settings;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

type DBPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;
pub type DBConnection = r2d2::PooledConnection<ConnectionManager<SqliteConnection>>;

#[derive(Clone)]
pub struct Database {
    pool: DBPool,
}

// Writers queue on the SQLite write lock instead of failing with SQLITE_BUSY.
#[derive(Debug)]
struct SqlitePragmas;

impl CustomizeConnection<SqliteConnection, r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        conn.batch_execute("PRAGMA foreign_keys = ON; PRAGMA busy_timeout = 5000;")
            .map_err(r2d2::Error::QueryError)
    }
}

impl Database {
    pub fn new(settings: &Settings) -> AppResult<Self> {
        let manager = ConnectionManager::<SqliteConnection>::new(&settings.database_url);
        let pool: DBPool = r2d2::Pool::builder()
            .max_size(settings.pool_size)
            .connection_customizer(Box::new(SqlitePragmas))
            .build(manager)?;
        Self::migrated(pool)
    }

    /// A private database living in a single pooled connection. Each call starts empty.
    pub fn in_memory() -> AppResult<Self> {
        let manager = ConnectionManager::<SqliteConnection>::new(":memory:");
        let pool: DBPool = r2d2::Pool::builder()
            .max_size(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connection_customizer(Box::new(SqlitePragmas))
            .build(manager)?;
        Self::migrated(pool)
    }

    fn migrated(pool: DBPool) -> AppResult<Self> {
        let database = Database { pool };
        let mut connection = database.get_connection()?;
        let applied = connection
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| AppError::Migration(e.to_string()))?;
        if !applied.is_empty() {
            tracing::info!(count = applied.len(), "applied pending migrations");
        }
        drop(connection);
        Ok(database)
    }

    pub fn get_connection(&self) -> AppResult<DBConnection> {
        Ok(self.pool.get()?)
    }
}
