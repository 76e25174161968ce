//! Bookmarks are kept the way a browser page keeps them: one JSON array under
//! a single local storage key, read, modified and written back per action.

use rusqlite::Connection;

use super::Database;
use super::models::{BOOKMARKS_KEY, Bookmark, BookmarkToggle};
use super::queries::{read_item, write_item};
use crate::directory::Employee;
use crate::error::AppError;

fn load(conn: &Connection) -> anyhow::Result<Vec<Bookmark>> {
    match read_item(conn, BOOKMARKS_KEY).map_err(AppError::from)? {
        Some(raw) => {
            let bookmarks = serde_json::from_str(&raw).map_err(|source| {
                AppError::CorruptStorage {
                    key: BOOKMARKS_KEY.to_string(),
                    source,
                }
            })?;
            Ok(bookmarks)
        }
        None => Ok(Vec::new()),
    }
}

fn store(conn: &Connection, bookmarks: &[Bookmark]) -> anyhow::Result<()> {
    let raw = serde_json::to_string(bookmarks)?;
    write_item(conn, BOOKMARKS_KEY, &raw)?;
    Ok(())
}

impl Database {
    pub fn list_bookmarks(&self) -> anyhow::Result<Vec<Bookmark>> {
        let conn = self.lock()?;
        load(&conn)
    }

    pub fn get_bookmark(&self, id: u64) -> anyhow::Result<Option<Bookmark>> {
        Ok(self.list_bookmarks()?.into_iter().find(|b| b.id == id))
    }

    pub fn is_bookmarked(&self, id: u64) -> anyhow::Result<bool> {
        Ok(self.list_bookmarks()?.iter().any(|b| b.id == id))
    }

    /// Appends the bookmark unless its id is already present.
    /// Returns whether it was added.
    pub fn add_bookmark(&self, bookmark: &Bookmark) -> anyhow::Result<bool> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        let mut bookmarks = load(&tx)?;
        if bookmarks.iter().any(|b| b.id == bookmark.id) {
            return Ok(false);
        }
        bookmarks.push(bookmark.clone());
        store(&tx, &bookmarks)?;
        tx.commit()?;
        tracing::info!("Bookmarked employee {}", bookmark.id);
        Ok(true)
    }

    /// Returns whether a bookmark with this id existed.
    pub fn remove_bookmark(&self, id: u64) -> anyhow::Result<bool> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        let mut bookmarks = load(&tx)?;
        let before = bookmarks.len();
        bookmarks.retain(|b| b.id != id);
        if bookmarks.len() == before {
            return Ok(false);
        }
        store(&tx, &bookmarks)?;
        tx.commit()?;
        tracing::info!("Removed bookmark for employee {id}");
        Ok(true)
    }

    pub fn toggle_bookmark(&self, employee: &Employee) -> anyhow::Result<BookmarkToggle> {
        if self.remove_bookmark(employee.id)? {
            Ok(BookmarkToggle::Removed)
        } else {
            self.add_bookmark(&Bookmark::from(employee))?;
            Ok(BookmarkToggle::Added)
        }
    }

    /// Drops the whole list, including a value that no longer parses.
    pub fn clear_bookmarks(&self) -> anyhow::Result<usize> {
        let count = match self.list_bookmarks() {
            Ok(bookmarks) => bookmarks.len(),
            Err(e)
                if matches!(
                    e.downcast_ref::<AppError>(),
                    Some(AppError::CorruptStorage { .. })
                ) =>
            {
                tracing::warn!("Discarding unreadable bookmarks: {e:#}");
                0
            }
            Err(e) => return Err(e),
        };
        self.remove_item(BOOKMARKS_KEY)?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::{Company, fixture};

    fn test_db() -> Database {
        Database::open_in_memory().expect("Failed to create test database")
    }

    fn employee(id: u64) -> Employee {
        Employee {
            id,
            first_name: "Emily".into(),
            last_name: "Johnson".into(),
            email: "emily.johnson@x.dummyjson.com".into(),
            image: Some("https://dummyjson.com/icon/emilys/128".into()),
            company: Some(Company {
                department: Some("Engineering".into()),
                title: None,
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_store() {
        let db = test_db();
        assert!(db.list_bookmarks().unwrap().is_empty());
        assert!(!db.is_bookmarked(1).unwrap());
    }

    #[test]
    fn test_add_and_remove() {
        let db = test_db();
        let bm = Bookmark::from(&employee(1));

        assert!(db.add_bookmark(&bm).unwrap());
        assert!(db.is_bookmarked(1).unwrap());
        assert_eq!(
            db.get_bookmark(1).unwrap().unwrap().department.as_deref(),
            Some("Engineering")
        );

        assert!(db.remove_bookmark(1).unwrap());
        assert!(!db.is_bookmarked(1).unwrap());
        assert!(!db.remove_bookmark(1).unwrap());
    }

    #[test]
    fn test_ids_stay_unique() {
        let db = test_db();
        let bm = Bookmark::from(&employee(3));
        assert!(db.add_bookmark(&bm).unwrap());
        assert!(!db.add_bookmark(&bm).unwrap());
        assert_eq!(db.list_bookmarks().unwrap().len(), 1);
    }

    #[test]
    fn test_toggle() {
        let db = test_db();
        let e = employee(4);
        assert_eq!(db.toggle_bookmark(&e).unwrap(), BookmarkToggle::Added);
        assert!(db.is_bookmarked(4).unwrap());
        assert_eq!(db.toggle_bookmark(&e).unwrap(), BookmarkToggle::Removed);
        assert!(!db.is_bookmarked(4).unwrap());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let db = test_db();
        for e in fixture::employees().iter().rev().take(3) {
            db.add_bookmark(&Bookmark::from(e)).unwrap();
        }
        let ids: Vec<u64> = db.list_bookmarks().unwrap().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![10, 9, 8]);
    }

    #[test]
    fn test_stored_as_json_array() {
        let db = test_db();
        db.add_bookmark(&Bookmark::from(&employee(2))).unwrap();
        let raw = db.get_item(BOOKMARKS_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value[0]["id"], 2);
        assert_eq!(value[0]["firstName"], "Emily");
        assert_eq!(value[0]["department"], "Engineering");
    }

    #[test]
    fn test_reads_browser_shaped_value() {
        let db = test_db();
        db.set_item(
            BOOKMARKS_KEY,
            r#"[{"id":5,"firstName":"Emma","lastName":"Miller","email":"emma@x.com","image":"https://i/5"}]"#,
        )
        .unwrap();
        let bookmarks = db.list_bookmarks().unwrap();
        assert_eq!(bookmarks.len(), 1);
        assert_eq!(bookmarks[0].full_name(), "Emma Miller");
        assert!(bookmarks[0].department.is_none());
    }

    #[test]
    fn test_corrupt_value_is_reported_and_clearable() {
        let db = test_db();
        db.set_item(BOOKMARKS_KEY, "not json").unwrap();

        let err = db.list_bookmarks().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AppError>(),
            Some(AppError::CorruptStorage { .. })
        ));

        assert_eq!(db.clear_bookmarks().unwrap(), 0);
        assert!(db.list_bookmarks().unwrap().is_empty());
    }

    #[test]
    fn test_clear_reports_count_and_propagates_storage_errors() {
        let db = test_db();
        db.add_bookmark(&Bookmark::from(&employee(1))).unwrap();
        db.add_bookmark(&Bookmark::from(&employee(2))).unwrap();
        assert_eq!(db.clear_bookmarks().unwrap(), 2);

        db.lock().unwrap().execute_batch("DROP TABLE local_storage").unwrap();
        let err = db.clear_bookmarks().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AppError>(),
            Some(AppError::Database(_))
        ));
    }
}
