use rusqlite::{Connection, OptionalExtension, params};

use super::Database;

impl Database {
    // --- Local storage ---

    #[cfg(test)]
    pub fn get_item(&self, key: &str) -> anyhow::Result<Option<String>> {
        let conn = self.lock()?;
        Ok(read_item(&conn, key)?)
    }

    #[cfg(test)]
    pub fn set_item(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let conn = self.lock()?;
        write_item(&conn, key, value)?;
        Ok(())
    }

    /// Returns whether the key existed.
    pub fn remove_item(&self, key: &str) -> anyhow::Result<bool> {
        let conn = self.lock()?;
        let removed = conn.execute("DELETE FROM local_storage WHERE key = ?1", params![key])?;
        Ok(removed > 0)
    }
}

pub(super) fn read_item(conn: &Connection, key: &str) -> rusqlite::Result<Option<String>> {
    conn.query_row(
        "SELECT value FROM local_storage WHERE key = ?1",
        params![key],
        |row| row.get(0),
    )
    .optional()
}

pub(super) fn write_item(conn: &Connection, key: &str, value: &str) -> rusqlite::Result<()> {
    let now = chrono::Utc::now().to_rfc3339();
    conn.execute(
        "INSERT INTO local_storage (key, value, updated_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET
            value = excluded.value,
            updated_at = excluded.updated_at",
        params![key, value, now],
    )?;
    Ok(())
}
