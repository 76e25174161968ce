use comfy_table::{Cell, Table};

use crate::directory::EmployeeSource;
use crate::panel::{Tab, TabContent};

pub async fn show_tab(source: &dyn EmployeeSource, tab: Tab) -> anyhow::Result<()> {
    if tab == Tab::Overview {
        println!("Loading overview data...");
    }
    let content = tab.load(source).await;
    println!("{}", render(&content));
    Ok(())
}

pub fn render(content: &TabContent) -> String {
    match content {
        TabContent::Overview(stats) => {
            let mut table = Table::new();
            table.set_header(vec!["Total Users", "Unique Departments"]);
            table.add_row(vec![
                Cell::new(stats.total_users),
                Cell::new(stats.unique_departments),
            ]);
            format!("=== User Overview ===\n{table}")
        }
        TabContent::OverviewUnavailable(msg) => format!("Error: {msg}"),
        TabContent::Projects(projects) => {
            let mut table = Table::new();
            table.set_header(vec!["Project", "Description", "Status", "Tech"]);
            for p in projects.iter() {
                table.add_row(vec![
                    Cell::new(p.name),
                    Cell::new(p.description),
                    Cell::new(p.status).fg(p.status.color()),
                    Cell::new(p.technologies.join(", ")),
                ]);
            }
            format!("=== Projects ===\n{table}")
        }
        TabContent::Feedback(feedback) => {
            let mut table = Table::new();
            table.set_header(vec!["From", "Date", "Type", "Message"]);
            for f in feedback.iter() {
                table.add_row(vec![
                    Cell::new(f.sender),
                    Cell::new(f.date),
                    Cell::new(f.kind).fg(f.kind.color()),
                    Cell::new(format!("\"{}\"", f.message)),
                ]);
            }
            format!("=== User Feedback ===\n{table}")
        }
    }
}
