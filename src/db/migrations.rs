use rusqlite::{Connection, params};

/// Ordered schema changes; the position in the list is the version.
const MIGRATIONS: &[(&str, &str)] = &[(
    "local_storage",
    "CREATE TABLE IF NOT EXISTS local_storage (
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL,
        updated_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
    );",
)];

pub fn run_migrations(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS _migrations (
            version INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            applied_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        )",
    )?;

    let applied: i64 = conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM _migrations",
        [],
        |row| row.get(0),
    )?;

    for (version, (name, sql)) in (1i64..).zip(MIGRATIONS) {
        if version <= applied {
            continue;
        }
        conn.execute_batch(&format!("BEGIN;\n{sql}\nCOMMIT;"))?;
        conn.execute(
            "INSERT INTO _migrations (version, name) VALUES (?1, ?2)",
            params![version, name],
        )?;
        tracing::info!("Applied migration {version} ({name})");
    }

    Ok(())
}
