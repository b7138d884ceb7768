use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Paging metadata returned with every list endpoint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListMeta {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub limit: u64,
    #[serde(default)]
    pub offset: u64,
}

/// Envelope used by `GET /roles/`, `GET /principals/` and `GET /permissions/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    #[serde(default)]
    pub meta: ListMeta,
    pub data: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn new(data: Vec<T>, meta: ListMeta) -> Self {
        Self { meta, data }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleResponse {
    pub uuid: Uuid,
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub system: bool,
    #[serde(default)]
    pub platform_default: bool,
    #[serde(default, rename = "accessCount")]
    pub access_count: u32,
    #[serde(default)]
    pub applications: Vec<String>,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrincipalResponse {
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub is_org_admin: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionResponse {
    /// `application:resource_type:verb`
    pub permission: String,
    #[serde(default)]
    pub description: Option<String>,
}

// Error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.error)
    }
}

impl std::error::Error for ErrorResponse {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_role_list_deserializes_with_defaults() {
        let body = json!({
            "meta": { "count": 1, "limit": 10, "offset": 0 },
            "data": [{
                "uuid": "9a5c3e7f-2a43-4c4b-8b8e-0c1f8f7f4a11",
                "name": "Cost Administrator",
                "accessCount": 4,
                "created": "2024-01-02T03:04:05Z",
                "modified": "2024-02-03T04:05:06Z"
            }]
        });

        let list: ListResponse<RoleResponse> = serde_json::from_value(body).unwrap();
        assert_eq!(list.meta.count, 1);
        assert_eq!(list.data[0].name, "Cost Administrator");
        assert_eq!(list.data[0].access_count, 4);
        assert!(list.data[0].description.is_none());
        assert!(!list.data[0].system);
    }

    #[test]
    fn test_principal_defaults_to_active() {
        let principal: PrincipalResponse =
            serde_json::from_value(json!({ "username": "jdoe" })).unwrap();
        assert!(principal.is_active);
        assert!(!principal.is_org_admin);
        assert!(principal.email.is_empty());
    }
}
