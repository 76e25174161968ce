use comfy_table::{Cell, Table};

use crate::db::Database;
use crate::db::models::{Bookmark, BookmarkToggle};
use crate::directory::{Employee, EmployeeSource};

pub fn list_bookmarks(db: &Database) -> anyhow::Result<()> {
    let bookmarks = db.list_bookmarks()?;

    if bookmarks.is_empty() {
        println!("You haven't bookmarked any employees yet.");
        return Ok(());
    }

    println!("{}", bookmarks_table(&bookmarks));
    Ok(())
}

pub fn bookmarks_table(bookmarks: &[Bookmark]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["ID", "Name", "Email", "Department"]);

    for b in bookmarks {
        table.add_row(vec![
            Cell::new(b.id),
            Cell::new(b.full_name()),
            Cell::new(&b.email),
            Cell::new(b.department.as_deref().unwrap_or("N/A")),
        ]);
    }

    table
}

async fn fetch(source: &dyn EmployeeSource, id: u64) -> anyhow::Result<Employee> {
    source
        .get_employee(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Employee {id} not found"))
}

pub async fn add_bookmark(
    db: &Database,
    source: &dyn EmployeeSource,
    id: u64,
) -> anyhow::Result<()> {
    if db.is_bookmarked(id)? {
        println!("Employee {id} is already bookmarked.");
        return Ok(());
    }
    let employee = fetch(source, id).await?;
    db.add_bookmark(&Bookmark::from(&employee))?;
    println!("{} added to bookmarks!", employee.first_name);
    Ok(())
}

pub fn remove_bookmark(db: &Database, id: u64) -> anyhow::Result<()> {
    if db.remove_bookmark(id)? {
        println!("Employee removed from bookmarks!");
    } else {
        println!("Employee {id} is not bookmarked.");
    }
    Ok(())
}

pub async fn toggle_bookmark(
    db: &Database,
    source: &dyn EmployeeSource,
    id: u64,
) -> anyhow::Result<()> {
    // Removing needs only the stored copy; adding needs the live record.
    let employee = match db.get_bookmark(id)? {
        Some(b) => Employee {
            id: b.id,
            first_name: b.first_name,
            last_name: b.last_name,
            email: b.email,
            ..Default::default()
        },
        None => fetch(source, id).await?,
    };

    match db.toggle_bookmark(&employee)? {
        BookmarkToggle::Added => println!("{} added to bookmarks!", employee.first_name),
        BookmarkToggle::Removed => println!("{} removed from bookmarks!", employee.first_name),
    }
    Ok(())
}

pub fn clear_bookmarks(db: &Database) -> anyhow::Result<()> {
    let count = db.clear_bookmarks()?;
    println!("Cleared {count} bookmark(s).");
    Ok(())
}

fn bookmarked(db: &Database, id: u64) -> anyhow::Result<Bookmark> {
    db.get_bookmark(id)?.ok_or_else(|| {
        anyhow::anyhow!("Employee {id} is not bookmarked. Run `hr-dashboard bookmark list`.")
    })
}

pub fn promote(db: &Database, id: u64) -> anyhow::Result<()> {
    let b = bookmarked(db, id)?;
    tracing::info!("Promote requested for bookmarked employee {id}");
    println!("Promote action triggered for {}!", b.first_name);
    Ok(())
}

pub fn assign_to_project(db: &Database, id: u64) -> anyhow::Result<()> {
    let b = bookmarked(db, id)?;
    tracing::info!("Assign to project requested for bookmarked employee {id}");
    println!("Assign to Project action triggered for {}!", b.first_name);
    Ok(())
}
