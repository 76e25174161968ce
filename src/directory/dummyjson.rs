use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use super::{Employee, EmployeeSource};
use crate::error::AppError;

/// Read-only client for the DummyJSON users API.
///
/// Requests are unauthenticated GETs. Failures are reported once; nothing is
/// retried.
pub struct DummyJsonSource {
    client: Client,
    base_url: String,
}

impl DummyJsonSource {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent("hr-dashboard")
            .timeout(std::time::Duration::from_secs(30))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[derive(Debug, Deserialize, Default)]
struct UserListResponse {
    #[serde(default)]
    users: Vec<Employee>,
    #[serde(default)]
    total: Option<u64>,
}

#[async_trait]
impl EmployeeSource for DummyJsonSource {
    fn id(&self) -> &str {
        "dummyjson"
    }

    fn name(&self) -> &str {
        "DummyJSON"
    }

    async fn list_employees(&self, limit: u32) -> anyhow::Result<Vec<Employee>> {
        let url = format!("{}/users", self.base_url);
        tracing::debug!("GET {url}?limit={limit}");

        let resp = self
            .client
            .get(&url)
            .query(&[("limit", limit)])
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(AppError::from)?;

        if !resp.status().is_success() {
            return Err(AppError::Http(resp.status()).into());
        }

        let body: UserListResponse = resp.json().await.map_err(AppError::from)?;
        tracing::info!(
            "Fetched {} employee(s) of {} from {}",
            body.users.len(),
            body.total.map_or_else(|| "?".to_string(), |t| t.to_string()),
            self.name()
        );
        Ok(body.users)
    }

    async fn get_employee(&self, id: u64) -> anyhow::Result<Option<Employee>> {
        let url = format!("{}/users/{id}", self.base_url);
        tracing::debug!("GET {url}");

        let resp = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(AppError::from)?;

        match resp.status() {
            StatusCode::NOT_FOUND => Ok(None),
            s if s.is_success() => {
                let employee: Employee = resp.json().await.map_err(AppError::from)?;
                Ok(Some(employee))
            }
            s => Err(AppError::Http(s).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn user_json(id: u64, first: &str, department: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "firstName": first,
            "lastName": "Test",
            "email": format!("{}@example.com", first.to_lowercase()),
            "image": format!("https://dummyjson.com/icon/{id}/128"),
            "phone": "+1 555 0100",
            "age": 30,
            "username": first.to_lowercase(),
            "company": {"department": department, "title": "Engineer"},
            "address": {"address": "1 Main St", "city": "Springfield", "state": "Ohio"}
        })
    }

    #[tokio::test]
    async fn test_list_employees() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .and(query_param("limit", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "users": [user_json(1, "Emily", "Engineering"), user_json(2, "Michael", "Support")],
                "total": 208,
                "skip": 0,
                "limit": 2
            })))
            .expect(1)
            .mount(&server)
            .await;

        let source = DummyJsonSource::new(&server.uri()).unwrap();
        let users = source.list_employees(2).await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].first_name, "Emily");
        assert_eq!(users[1].department(), Some("Support"));
    }

    #[tokio::test]
    async fn test_list_employees_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let source = DummyJsonSource::new(&server.uri()).unwrap();
        let err = source.list_employees(20).await.unwrap_err();
        let app_err = err.downcast_ref::<AppError>().unwrap();
        assert!(matches!(app_err, AppError::Http(s) if s.as_u16() == 503));
    }

    #[tokio::test]
    async fn test_get_employee() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(user_json(5, "Emma", "Marketing")))
            .mount(&server)
            .await;

        let source = DummyJsonSource::new(&format!("{}/", server.uri())).unwrap();
        let user = source.get_employee(5).await.unwrap().unwrap();
        assert_eq!(user.id, 5);
        assert_eq!(user.address_line().as_deref(), Some("1 Main St, Springfield, Ohio"));
    }

    #[tokio::test]
    async fn test_get_employee_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/999"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(serde_json::json!({"message": "User with id '999' not found"})),
            )
            .mount(&server)
            .await;

        let source = DummyJsonSource::new(&server.uri()).unwrap();
        assert!(source.get_employee(999).await.unwrap().is_none());
    }
}
