use super::AnalyticsReport;

pub fn render(report: &AnalyticsReport) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
