pub mod dummyjson;
pub mod fixture;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: u64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub company: Option<Company>,
    #[serde(default)]
    pub address: Option<Address>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Company {
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn department(&self) -> Option<&str> {
        self.company.as_ref()?.department.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.company.as_ref()?.title.as_deref()
    }

    /// "street, city, state" with missing parts left out.
    pub fn address_line(&self) -> Option<String> {
        let addr = self.address.as_ref()?;
        let parts: Vec<&str> = [&addr.address, &addr.city, &addr.state]
            .into_iter()
            .filter_map(|p| p.as_deref())
            .filter(|p| !p.is_empty())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}

#[async_trait]
pub trait EmployeeSource: Send + Sync {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    async fn list_employees(&self, limit: u32) -> anyhow::Result<Vec<Employee>>;
    /// `Ok(None)` when the source has no employee with this id.
    async fn get_employee(&self, id: u64) -> anyhow::Result<Option<Employee>>;
}

pub type SourceRegistry = HashMap<String, Arc<dyn EmployeeSource>>;

/// Build the map of all available employee sources.
pub fn build_source_registry(api_url: &str) -> anyhow::Result<SourceRegistry> {
    let mut map: SourceRegistry = HashMap::new();

    let remote = Arc::new(dummyjson::DummyJsonSource::new(api_url)?);
    map.insert(remote.id().to_string(), remote);

    let fixture = Arc::new(fixture::FixtureSource);
    map.insert(fixture.id().to_string(), fixture);

    Ok(map)
}

pub fn select_source(
    registry: &SourceRegistry,
    id: &str,
) -> Result<Arc<dyn EmployeeSource>, AppError> {
    registry
        .get(id)
        .cloned()
        .ok_or_else(|| AppError::UnknownSource(id.to_string()))
}
