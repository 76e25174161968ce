use super::{AnalyticsReport, bar_width};
use crate::rating::MAX_RATING;

pub fn render(report: &AnalyticsReport) -> anyhow::Result<String> {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    html.push_str("<title>HR Analytics Dashboard</title>\n");
    html.push_str("<style>\n");
    html.push_str("  body { font-family: system-ui, sans-serif; max-width: 1100px; margin: 2rem auto; padding: 0 1rem; color: #1a1a1a; }\n");
    html.push_str("  h1 { text-align: center; }\n");
    html.push_str("  .alert { background: #fee2e2; border: 1px solid #f87171; color: #b91c1c; padding: 0.75rem 1rem; border-radius: 4px; }\n");
    html.push_str("  .summary, .charts { display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 1rem; margin: 1rem 0; }\n");
    html.push_str("  .charts { grid-template-columns: repeat(auto-fit, minmax(420px, 1fr)); gap: 2rem; }\n");
    html.push_str("  .stat, .chart { background: #f9fafb; padding: 1rem; border-radius: 8px; }\n");
    html.push_str("  .stat .value { font-size: 1.5rem; font-weight: 700; }\n");
    html.push_str("  .stat .label { color: #6b7280; font-size: 0.875rem; }\n");
    html.push_str("  .row { display: grid; grid-template-columns: 11rem 1fr 4rem; align-items: center; gap: 0.5rem; margin: 0.25rem 0; }\n");
    html.push_str("  .bar { height: 1rem; border-radius: 2px; }\n");
    html.push_str("  .rating .bar { background: rgba(75, 192, 192, 0.6); border: 1px solid rgba(75, 192, 192, 1); }\n");
    html.push_str("  .trend .bar { background: rgba(153, 102, 255, 0.6); border: 1px solid rgba(153, 102, 255, 1); }\n");
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    html.push_str(&format!(
        "<h1>HR Analytics Dashboard</h1>\n<p>Generated: {} &middot; Source: {}</p>\n",
        escape_html(&report.generated_at),
        escape_html(&report.source),
    ));

    if let Some(err) = &report.error {
        html.push_str(&format!(
            "<div class=\"alert\" role=\"alert\"><strong>Error!</strong> {}. Data might be incomplete.</div>\n",
            escape_html(err)
        ));
    }

    html.push_str("<div class=\"summary\">\n");
    write_stat(&mut html, "Employees Analysed", report.summary.total_employees);
    write_stat(&mut html, "Departments", report.summary.departments);
    write_stat(&mut html, "Bookmarked", report.summary.bookmarked);
    html.push_str("</div>\n");

    html.push_str("<div class=\"charts\">\n");

    html.push_str("<div class=\"chart rating\">\n<h2>Department-wise Average Ratings</h2>\n");
    for d in &report.department_averages {
        write_bar(
            &mut html,
            &d.department,
            bar_width(d.average_rating, f64::from(MAX_RATING), 100),
            &format!("{:.2} ⭐", d.average_rating),
        );
    }
    html.push_str("</div>\n");

    let max = report
        .bookmark_trends
        .iter()
        .map(|m| m.bookmarks)
        .max()
        .unwrap_or(0);
    html.push_str("<div class=\"chart trend\">\n<h2>Bookmark Trends (Mock Data)</h2>\n");
    for m in &report.bookmark_trends {
        write_bar(
            &mut html,
            m.month,
            bar_width(f64::from(m.bookmarks), f64::from(max), 100),
            &m.bookmarks.to_string(),
        );
    }
    html.push_str("</div>\n");

    html.push_str("</div>\n");

    html.push_str("<h2>Insights</h2>\n<ul>\n");
    for insight in &report.insights {
        html.push_str(&format!("<li>{}</li>\n", escape_html(insight)));
    }
    html.push_str("</ul>\n");

    html.push_str("</body>\n</html>\n");

    Ok(html)
}

fn write_stat(html: &mut String, label: &str, value: usize) {
    html.push_str(&format!(
        "<div class=\"stat\"><div class=\"value\">{value}</div><div class=\"label\">{label}</div></div>\n"
    ));
}

fn write_bar(html: &mut String, label: &str, percent: usize, value: &str) {
    html.push_str(&format!(
        "<div class=\"row\"><span>{}</span><div><div class=\"bar\" style=\"width: {percent}%\"></div></div><span>{}</span></div>\n",
        escape_html(label),
        escape_html(value),
    ));
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
