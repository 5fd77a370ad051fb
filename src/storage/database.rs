//! SQLite database connection management
//!
//! Provides database initialization and connection management for ViviLog.

use std::path::Path;

use rusqlite::Connection;

use super::error::StorageError;

/// Database wrapper for SQLite connection management
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Create a new database connection and initialize schema
    ///
    /// # Arguments
    /// * `path` - Path to the SQLite database file
    ///
    /// # Returns
    /// A new Database instance with initialized schema
    pub fn new(path: &Path) -> Result<Self, StorageError> {
        let conn = Connection::open(path)?;

        // Enable foreign key support
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;

        // Execute schema migration
        conn.execute_batch(include_str!("schema.sql"))?;

        // Run migrations for existing databases
        Self::run_migrations(&conn)?;

        Ok(Self { conn })
    }

    /// Run database migrations for schema updates
    fn run_migrations(conn: &Connection) -> Result<(), StorageError> {
        // Migration: source and price were added to animals after the
        // first release; existing databases lack the columns.
        let has_source: bool = conn
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('animals') WHERE name = 'source'",
                [],
                |row| row.get::<_, i32>(0).map(|c| c > 0),
            )
            .unwrap_or(false);

        if !has_source {
            conn.execute_batch(
                "ALTER TABLE animals ADD COLUMN source TEXT;
                 ALTER TABLE animals ADD COLUMN price REAL;",
            )?;
        }

        Ok(())
    }

    /// Create an in-memory database for testing
    #[cfg(test)]
    pub fn new_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        conn.execute_batch(include_str!("schema.sql"))?;
        Self::run_migrations(&conn)?;
        Ok(Self { conn })
    }

    /// Get a reference to the underlying connection
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Get a mutable reference to the underlying connection
    pub fn connection_mut(&mut self) -> &mut Connection {
        &mut self.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_database_creation() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");

        let db = Database::new(&db_path);
        assert!(db.is_ok(), "Database creation failed: {:?}", db.err());

        // Verify database file exists
        assert!(db_path.exists());
    }

    #[test]
    fn test_in_memory_database() {
        let db = Database::new_in_memory();
        assert!(db.is_ok(), "In-memory database creation failed: {:?}", db.err());
    }

    #[test]
    fn test_schema_initialization() {
        let db = Database::new_in_memory().unwrap();

        for table in [
            "animals",
            "weight_records",
            "shedding_records",
            "feeding_records",
            "breeding_records",
        ] {
            let count: i32 = db
                .connection()
                .query_row(
                    &format!("SELECT COUNT(*) FROM {}", table),
                    [],
                    |row| row.get(0),
                )
                .unwrap_or_else(|e| panic!("table {} missing: {:?}", table, e));
            assert_eq!(count, 0);
        }
    }

    #[test]
    fn test_foreign_keys_enabled() {
        let db = Database::new_in_memory().unwrap();

        let fk_enabled: i32 = db
            .connection()
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();

        assert_eq!(fk_enabled, 1, "Foreign keys should be enabled");
    }

    #[test]
    fn test_negative_weight_rejected_by_schema() {
        let db = Database::new_in_memory().unwrap();

        db.connection()
            .execute(
                "INSERT INTO animals (name, code, species, birth_date, created_at, updated_at)
                 VALUES ('Nagi', 'S001', 'Ball Python', '2022-05-01', '2024-01-01T00:00:00Z', '2024-01-01T00:00:00Z')",
                [],
            )
            .unwrap();

        let result = db.connection().execute(
            "INSERT INTO weight_records (animal_id, weight_grams, date, created_at, updated_at)
             VALUES (1, -5.0, '2024-01-02', '2024-01-02T00:00:00Z', '2024-01-02T00:00:00Z')",
            [],
        );
        assert!(result.is_err(), "CHECK constraint should reject negative weight");
    }
}
