use std::collections::HashSet;

use comfy_table::{Cell, Table};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::config::SEARCH_DEBOUNCE;
use crate::db::Database;
use crate::directory::{Employee, EmployeeSource};
use crate::feed::debounce::Debouncer;
use crate::feed::session::{FeedSession, HELP, SessionAction};
use crate::feed::{FeedFilter, department_options};
use crate::rating::{stable_rating, stars};

pub async fn feed(
    db: &Database,
    source: &dyn EmployeeSource,
    mut filter: FeedFilter,
    limit: u32,
    interactive: bool,
) -> anyhow::Result<()> {
    let employees = match source.list_employees(limit).await {
        Ok(employees) => employees,
        Err(e) => {
            tracing::error!("Failed to fetch users from {}: {e:#}", source.name());
            println!("Error: failed to fetch users: {e}");
            Vec::new()
        }
    };

    filter.normalize(&department_options(&employees));
    if !filter.is_empty() {
        tracing::debug!("Filtering {} employee(s) with {filter:?}", employees.len());
    }

    if interactive {
        return run_interactive(db, &employees, filter).await;
    }

    let bookmarked = bookmarked_ids(db)?;
    print_cards(&filter.apply(&employees), &bookmarked);
    Ok(())
}

fn bookmarked_ids(db: &Database) -> anyhow::Result<HashSet<u64>> {
    Ok(db.list_bookmarks()?.into_iter().map(|b| b.id).collect())
}

pub fn cards_table(employees: &[Employee], bookmarked: &HashSet<u64>) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["ID", "Name", "Email", "Department", "Rating", "Bookmarked"]);

    for e in employees {
        table.add_row(vec![
            Cell::new(e.id),
            Cell::new(e.full_name()),
            Cell::new(&e.email),
            Cell::new(e.department().unwrap_or("N/A")),
            Cell::new(stars(stable_rating(e.id))),
            Cell::new(if bookmarked.contains(&e.id) { "yes" } else { "-" }),
        ]);
    }

    table
}

fn print_cards(employees: &[Employee], bookmarked: &HashSet<u64>) {
    if employees.is_empty() {
        println!("No employees found.");
        return;
    }
    println!("{}", cards_table(employees, bookmarked));
    println!(
        "{} employee(s). Use `hr-dashboard employee show <id>` for details.",
        employees.len()
    );
}

async fn run_interactive(
    db: &Database,
    employees: &[Employee],
    initial: FeedFilter,
) -> anyhow::Result<()> {
    let mut session = FeedSession::new(initial, department_options(employees));
    let (mut debouncer, mut results) = Debouncer::new(SEARCH_DEBOUNCE);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{HELP}\n");
    refresh(db, employees, &session)?;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    // Input closed: let a pending search land before leaving.
                    let last = if debouncer.is_pending() {
                        results.recv().await
                    } else {
                        results.try_recv().ok()
                    };
                    if last.is_some() {
                        refresh(db, employees, &session)?;
                    }
                    break;
                };
                match session.handle_line(&line) {
                    SessionAction::Refilter => debouncer.schedule(session.filter()),
                    SessionAction::Help => println!("{HELP}"),
                    SessionAction::Quit => break,
                    SessionAction::Invalid(msg) => println!("{msg}"),
                }
            }
            Some(filter) = results.recv() => {
                tracing::debug!("Recomputing feed for {filter:?}");
                refresh(db, employees, &session)?;
            }
        }
    }

    Ok(())
}

fn refresh(db: &Database, employees: &[Employee], session: &FeedSession) -> anyhow::Result<()> {
    let bookmarked = bookmarked_ids(db)?;
    println!("\n{}", session.status_line());
    print_cards(&session.filter().apply(employees), &bookmarked);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::Bookmark;
    use crate::directory::fixture;

    #[test]
    fn test_cards_table_marks_bookmarks() {
        let employees = fixture::employees();
        let bookmarked: HashSet<u64> = [2].into_iter().collect();
        let rendered = cards_table(&employees[..3], &bookmarked).to_string();
        assert!(rendered.contains("Emily Johnson"));
        assert!(rendered.contains("emily.johnson@x.dummyjson.com"));
        assert!(rendered.contains("Research and Development"));
        assert!(rendered.contains("⭐⭐⭐☆☆"));
        assert_eq!(rendered.matches("yes").count(), 1);
    }

    #[test]
    fn test_cards_table_missing_department() {
        let employees = fixture::employees();
        let ethan = &employees[8..9];
        let rendered = cards_table(ethan, &HashSet::new()).to_string();
        assert!(rendered.contains("N/A"));
    }

    #[tokio::test]
    async fn test_feed_with_filter() {
        let db = Database::open_in_memory().unwrap();
        db.add_bookmark(&Bookmark::from(&fixture::employees()[0]))
            .unwrap();
        let filter = FeedFilter {
            search: "emily".into(),
            ..Default::default()
        };
        feed(&db, &fixture::FixtureSource, filter, 20, false)
            .await
            .unwrap();
    }
}
