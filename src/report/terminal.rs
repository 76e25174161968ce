use super::{AnalyticsReport, bar_width};
use crate::rating::MAX_RATING;

const CHART_WIDTH: usize = 40;

pub fn render(report: &AnalyticsReport) -> anyhow::Result<String> {
    let mut output = String::new();

    output.push_str(&format!(
        "=== HR Analytics Dashboard ({}) ===\n",
        report.generated_at
    ));
    output.push_str(&format!("Source: {}\n\n", report.source));

    if let Some(err) = &report.error {
        output.push_str(&format!("Error! {err}. Data might be incomplete.\n\n"));
    }

    output.push_str("--- Summary ---\n");
    output.push_str(&format!(
        "Employees analysed:   {}\n",
        report.summary.total_employees
    ));
    output.push_str(&format!(
        "Departments:          {}\n",
        report.summary.departments
    ));
    output.push_str(&format!(
        "Bookmarked:           {}\n",
        report.summary.bookmarked
    ));

    output.push_str("\n--- Department-wise Average Ratings ---\n");
    if report.department_averages.is_empty() {
        output.push_str("No department data.\n");
    } else {
        let label_width = report
            .department_averages
            .iter()
            .map(|d| d.department.chars().count())
            .max()
            .unwrap_or(0);
        for d in &report.department_averages {
            let width = bar_width(d.average_rating, f64::from(MAX_RATING), CHART_WIDTH);
            output.push_str(&format!(
                "{:<label_width$} │{} {:.2} ⭐ ({} employee{})\n",
                d.department,
                "█".repeat(width),
                d.average_rating,
                d.employees,
                if d.employees == 1 { "" } else { "s" },
            ));
        }
    }

    output.push_str("\n--- Bookmark Trends (Mock Data) ---\n");
    let max = report
        .bookmark_trends
        .iter()
        .map(|m| m.bookmarks)
        .max()
        .unwrap_or(0);
    for m in &report.bookmark_trends {
        let width = bar_width(f64::from(m.bookmarks), f64::from(max), CHART_WIDTH);
        output.push_str(&format!(
            "{} │{} {}\n",
            m.month,
            "▒".repeat(width),
            m.bookmarks
        ));
    }

    output.push_str("\n--- Insights ---\n");
    for insight in &report.insights {
        output.push_str(&format!("  • {insight}\n"));
    }

    Ok(output)
}
