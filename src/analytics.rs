use std::collections::{BTreeMap, BTreeSet};

use rand::Rng;
use serde::Serialize;

use crate::directory::Employee;
use crate::rating::analytics_rating;

pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub const INSIGHTS: [&str; 3] = [
    "Engineering department consistently shows high average performance ratings.",
    "Bookmark trends indicate a steady interest in new hires around the beginning of each quarter (mock data).",
    "Further analysis could include skill set distribution, promotion rates, or tenure analytics.",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentAverage {
    pub department: String,
    pub average_rating: f64,
    pub employees: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyCount {
    pub month: &'static str,
    pub bookmarks: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OverviewStats {
    pub total_users: usize,
    pub unique_departments: usize,
}

/// Mean analytics rating per department, ordered by department name.
/// Employees without a department are left out.
pub fn department_averages(employees: &[Employee]) -> Vec<DepartmentAverage> {
    let mut totals: BTreeMap<&str, (u64, usize)> = BTreeMap::new();
    for e in employees {
        if let Some(dept) = e.department() {
            let entry = totals.entry(dept).or_default();
            entry.0 += u64::from(analytics_rating(e.id));
            entry.1 += 1;
        }
    }

    totals
        .into_iter()
        .map(|(department, (total, count))| DepartmentAverage {
            department: department.to_string(),
            average_rating: round2(total as f64 / count as f64),
            employees: count,
        })
        .collect()
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Twelve months of made-up bookmark counts, each in 10..=59.
pub fn mock_bookmark_trends<R: Rng>(rng: &mut R) -> Vec<MonthlyCount> {
    MONTHS
        .iter()
        .map(|&month| MonthlyCount {
            month,
            bookmarks: rng.gen_range(10..60),
        })
        .collect()
}

pub fn overview(employees: &[Employee]) -> OverviewStats {
    let departments: BTreeSet<&str> = employees.iter().filter_map(|e| e.department()).collect();
    OverviewStats {
        total_users: employees.len(),
        unique_departments: departments.len(),
    }
}
