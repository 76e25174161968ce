pub mod html;
pub mod json;
pub mod terminal;

use clap::ValueEnum;
use rand::Rng;
use serde::Serialize;

use crate::analytics::{
    DepartmentAverage, INSIGHTS, MonthlyCount, OverviewStats, department_averages,
    mock_bookmark_trends, overview,
};
use crate::directory::Employee;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Terminal,
    Json,
    Html,
}

/// Everything the analytics dashboard shows.
#[derive(Debug, Serialize)]
pub struct AnalyticsReport {
    pub generated_at: String,
    pub source: String,
    pub summary: ReportSummary,
    pub department_averages: Vec<DepartmentAverage>,
    /// Randomly generated; not derived from any stored data.
    pub bookmark_trends: Vec<MonthlyCount>,
    pub insights: Vec<&'static str>,
    /// Set when the employee fetch failed; the rest of the report is then
    /// built from whatever was available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ReportSummary {
    pub total_employees: usize,
    pub departments: usize,
    pub bookmarked: usize,
}

impl AnalyticsReport {
    pub fn build<R: Rng>(
        source: &str,
        employees: &[Employee],
        fetch_error: Option<String>,
        bookmarked: usize,
        rng: &mut R,
    ) -> Self {
        let OverviewStats {
            total_users,
            unique_departments,
        } = overview(employees);

        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            source: source.to_string(),
            summary: ReportSummary {
                total_employees: total_users,
                departments: unique_departments,
                bookmarked,
            },
            department_averages: department_averages(employees),
            bookmark_trends: mock_bookmark_trends(rng),
            insights: INSIGHTS.to_vec(),
            error: fetch_error,
        }
    }

    pub fn render(&self, format: ReportFormat) -> anyhow::Result<String> {
        match format {
            ReportFormat::Terminal => terminal::render(self),
            ReportFormat::Json => json::render(self),
            ReportFormat::Html => html::render(self),
        }
    }
}

/// Width in cells of a bar for `value` on a `0..=max` scale.
fn bar_width(value: f64, max: f64, width: usize) -> usize {
    if max <= 0.0 || value <= 0.0 {
        return 0;
    }
    ((value / max).min(1.0) * width as f64).round() as usize
}
