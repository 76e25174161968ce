use chrono::Datelike;
use comfy_table::{Cell, Table};

use crate::db::Database;
use crate::directory::{Employee, EmployeeSource};
use crate::profile::{PerformanceEntry, bio, performance_history};
use crate::rating::{badge_color, stable_rating, stars};

pub async fn show(db: &Database, source: &dyn EmployeeSource, id: u64) -> anyhow::Result<()> {
    println!("Loading employee details...");
    let Some(employee) = source.get_employee(id).await? else {
        println!("Employee not found.");
        return Ok(());
    };

    let history = {
        let mut rng = rand::thread_rng();
        performance_history(id, chrono::Utc::now().year(), &mut rng)
    };
    let bookmarked = db.is_bookmarked(id)?;

    print!("{}", render_profile(&employee, bookmarked, &history));
    Ok(())
}

pub fn render_profile(
    employee: &Employee,
    bookmarked: bool,
    history: &[PerformanceEntry],
) -> String {
    let rating = stable_rating(employee.id);
    let mut out = String::new();

    out.push_str(&format!("=== {}'s Detailed Profile ===\n\n", employee.full_name()));
    if let Some(image) = &employee.image {
        out.push_str(&format!("Photo:       {image}\n"));
    }
    out.push_str(&format!("Email:       {}\n", employee.email));
    out.push_str(&format!(
        "Phone:       {}\n",
        employee.phone.as_deref().unwrap_or("N/A")
    ));
    out.push_str(&format!(
        "Department:  {}\n",
        employee.department().unwrap_or("N/A")
    ));
    out.push_str(&format!(
        "Title:       {}\n",
        employee.title().unwrap_or("N/A")
    ));
    out.push_str(&format!(
        "Address:     {}\n",
        employee.address_line().as_deref().unwrap_or("N/A")
    ));
    if let Some(username) = &employee.username {
        out.push_str(&format!("Username:    {username}\n"));
    }
    if let Some(age) = employee.age {
        out.push_str(&format!("Age:         {age}\n"));
    }
    out.push_str(&format!(
        "Bookmarked:  {}\n",
        if bookmarked { "yes" } else { "no" }
    ));
    out.push_str(&format!("\n\"{}\"\n", bio(employee.id)));
    out.push_str(&format!("\n{} {rating} Star Rating\n", stars(rating)));

    out.push_str("\n--- Performance History ---\n");
    if history.is_empty() {
        out.push_str("No performance history available.\n");
    } else {
        let mut table = Table::new();
        table.set_header(vec!["Period", "Summary", "Stars", "Rating"]);
        for entry in history {
            table.add_row(vec![
                Cell::new(&entry.period),
                Cell::new(&entry.summary),
                Cell::new(stars(entry.rating)),
                Cell::new(format!("Rating: {}", entry.rating)).fg(badge_color(entry.rating)),
            ]);
        }
        out.push_str(&table.to_string());
        out.push('\n');
    }

    out
}

pub async fn promote(source: &dyn EmployeeSource, id: u64) -> anyhow::Result<()> {
    let employee = source
        .get_employee(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Employee {id} not found"))?;
    tracing::info!("Promote requested for employee {id}");
    println!("Promote action triggered for {}!", employee.first_name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::fixture::{self, FixtureSource};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_render_profile() {
        let emily = fixture::employees().remove(0);
        let history = performance_history(emily.id, 2025, &mut StdRng::seed_from_u64(1));
        let out = render_profile(&emily, true, &history);

        assert!(out.contains("Emily Johnson's Detailed Profile"));
        assert!(out.contains("Department:  Engineering"));
        assert!(out.contains("Address:     101 Main Street, Phoenix"));
        assert!(out.contains("Bookmarked:  yes"));
        assert!(out.contains(bio(1)));
        assert!(out.contains("⭐⭐☆☆☆ 2 Star Rating"));
        assert!(out.contains("2025"));
        assert!(out.contains("2024"));
    }

    #[test]
    fn test_render_profile_missing_fields() {
        let employee = Employee {
            id: 12,
            first_name: "Pat".into(),
            last_name: "Doe".into(),
            ..Default::default()
        };
        let out = render_profile(&employee, false, &[]);
        assert!(out.contains("Department:  N/A"));
        assert!(out.contains("Title:       N/A"));
        assert!(out.contains("Address:     N/A"));
        assert!(out.contains("No performance history available."));
        assert!(!out.contains("Photo:"));
    }

    #[tokio::test]
    async fn test_show_unknown_employee() {
        let db = Database::open_in_memory().unwrap();
        show(&db, &FixtureSource, 404).await.unwrap();
    }

    #[tokio::test]
    async fn test_promote() {
        assert!(promote(&FixtureSource, 3).await.is_ok());
        assert!(promote(&FixtureSource, 404).await.is_err());
    }
}
