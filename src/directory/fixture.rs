use async_trait::async_trait;

use super::{Address, Company, Employee, EmployeeSource};

/// An offline employee directory compiled into the binary.
/// Useful for trying the dashboard without network access.
pub struct FixtureSource;

const FIXTURE: &[(u64, &str, &str, Option<&str>, &str, &str)] = &[
    (1, "Emily", "Johnson", Some("Engineering"), "Sales Manager", "Phoenix"),
    (2, "Michael", "Williams", Some("Support"), "Support Specialist", "Houston"),
    (3, "Sophia", "Brown", Some("Research and Development"), "Research Analyst", "Washington"),
    (4, "James", "Davis", Some("Human Resources"), "HR Manager", "Seattle"),
    (5, "Emma", "Miller", Some("Engineering"), "Software Engineer", "Denver"),
    (6, "Olivia", "Wilson", Some("Marketing"), "Marketing Lead", "Austin"),
    (7, "Alexander", "Jones", Some("Sales"), "Account Executive", "Boston"),
    (8, "Ava", "Taylor", Some("Marketing"), "Content Strategist", "Chicago"),
    (9, "Ethan", "Martinez", None, "Contractor", "Miami"),
    (10, "Isabella", "Anderson", Some("Engineering"), "Engineering Manager", "Portland"),
];

pub fn employees() -> Vec<Employee> {
    FIXTURE
        .iter()
        .map(|&(id, first, last, department, title, city)| Employee {
            id,
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: format!("{}.{}@x.dummyjson.com", first.to_lowercase(), last.to_lowercase()),
            image: Some(format!("https://dummyjson.com/icon/{}/128", first.to_lowercase())),
            phone: Some(format!("+1 555-01{id:02}")),
            age: Some(25 + (id as u32 * 3) % 20),
            username: Some(first.to_lowercase()),
            company: department.map(|d| Company {
                department: Some(d.to_string()),
                title: Some(title.to_string()),
            }),
            address: Some(Address {
                address: Some(format!("{} Main Street", 100 + id)),
                city: Some(city.to_string()),
                state: None,
            }),
        })
        .collect()
}

#[async_trait]
impl EmployeeSource for FixtureSource {
    fn id(&self) -> &str {
        "fixture"
    }

    fn name(&self) -> &str {
        "Offline Fixture"
    }

    async fn list_employees(&self, limit: u32) -> anyhow::Result<Vec<Employee>> {
        Ok(employees().into_iter().take(limit as usize).collect())
    }

    async fn get_employee(&self, id: u64) -> anyhow::Result<Option<Employee>> {
        Ok(employees().into_iter().find(|e| e.id == id))
    }
}
