use serde::{Deserialize, Serialize};

use crate::directory::Employee;

/// Local storage key holding the JSON array of bookmarks.
pub const BOOKMARKS_KEY: &str = "bookmarkedEmployees";

/// The subset of an employee kept in the bookmark list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

impl Bookmark {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl From<&Employee> for Bookmark {
    fn from(e: &Employee) -> Self {
        Self {
            id: e.id,
            first_name: e.first_name.clone(),
            last_name: e.last_name.clone(),
            email: e.email.clone(),
            image: e.image.clone(),
            department: e.department().map(String::from),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookmarkToggle {
    Added,
    Removed,
}
