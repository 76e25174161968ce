use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::db::Database;
use crate::directory::EmployeeSource;
use crate::report::{AnalyticsReport, ReportFormat};

pub async fn analytics(
    db: &Database,
    source: &dyn EmployeeSource,
    format: ReportFormat,
    output: Option<&str>,
    limit: u32,
    seed: Option<u64>,
) -> anyhow::Result<()> {
    let (employees, fetch_error) = match source.list_employees(limit).await {
        Ok(employees) => (employees, None),
        Err(e) => {
            tracing::error!("Error fetching user data for analytics: {e:#}");
            (Vec::new(), Some(e.to_string()))
        }
    };

    let bookmarked = db.list_bookmarks()?.len();
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let report = AnalyticsReport::build(
        source.name(),
        &employees,
        fetch_error,
        bookmarked,
        &mut rng,
    );
    let rendered = report.render(format)?;

    match output {
        Some(path) => {
            std::fs::write(path, &rendered)?;
            println!("Report written to {path}");
        }
        None => {
            println!("{rendered}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::fixture::FixtureSource;

    #[tokio::test]
    async fn test_writes_report_file() {
        let db = Database::open_in_memory().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("analytics.json");
        let path_str = path.to_str().unwrap();

        analytics(
            &db,
            &FixtureSource,
            ReportFormat::Json,
            Some(path_str),
            100,
            Some(5),
        )
        .await
        .unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["source"], "Offline Fixture");
        assert_eq!(value["summary"]["total_employees"], 10);
        assert_eq!(value["summary"]["bookmarked"], 0);
    }

    #[tokio::test]
    async fn test_seeded_trends_are_reproducible() {
        let db = Database::open_in_memory().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let mut trends = Vec::new();
        for name in ["a.json", "b.json"] {
            let path = dir.path().join(name);
            analytics(
                &db,
                &FixtureSource,
                ReportFormat::Json,
                path.to_str(),
                100,
                Some(11),
            )
            .await
            .unwrap();
            let value: serde_json::Value =
                serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
            trends.push(value["bookmark_trends"].clone());
        }
        assert_eq!(trends[0], trends[1]);
    }
}
