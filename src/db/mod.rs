pub mod bookmarks;
pub mod migrations;
pub mod models;
pub mod queries;

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::Connection;

pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        migrations::run_migrations(&conn)?;
        tracing::debug!("Opened local storage at {}", path.display());
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    #[cfg(test)]
    pub fn open_in_memory() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        migrations::run_migrations(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> anyhow::Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| anyhow::anyhow!("Local storage connection lock poisoned"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_db() -> Database {
        Database::open_in_memory().expect("Failed to create test database")
    }

    #[test]
    fn test_migrations_run() {
        let db = test_db();
        let conn = db.lock().unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM _migrations", [], |row| row.get(0))
            .unwrap();
        assert!(count >= 1);
    }

    #[test]
    fn test_migrations_idempotent() {
        let db = test_db();
        let conn = db.lock().unwrap();
        migrations::run_migrations(&conn).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM _migrations", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_local_storage_items() {
        let db = test_db();
        assert!(db.get_item("theme").unwrap().is_none());

        db.set_item("theme", "dark").unwrap();
        assert_eq!(db.get_item("theme").unwrap().as_deref(), Some("dark"));

        db.set_item("theme", "light").unwrap();
        assert_eq!(db.get_item("theme").unwrap().as_deref(), Some("light"));

        assert!(db.remove_item("theme").unwrap());
        assert!(!db.remove_item("theme").unwrap());
        assert!(db.get_item("theme").unwrap().is_none());
    }

    #[test]
    fn test_storage_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hr-dashboard.db");

        {
            let db = Database::open(&path).unwrap();
            db.set_item("bookmarkedEmployees", "[]").unwrap();
        }

        let db = Database::open(&path).unwrap();
        assert_eq!(
            db.get_item("bookmarkedEmployees").unwrap().as_deref(),
            Some("[]")
        );
    }
}
