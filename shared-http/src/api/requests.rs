use serde::{Deserialize, Serialize};

/// Operation used by cost-management attribute filters
pub const ATTRIBUTE_FILTER_IN: &str = "in";

/// Request body for `POST /roles/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateRoleRequest {
    pub name: String,
    /// Serialized as `null` when the role has no description
    pub description: Option<String>,
    pub applications: Vec<String>,
    pub access: Vec<AccessRequest>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessRequest {
    pub permission: String,
    #[serde(default)]
    pub resource_definitions: Vec<ResourceDefinition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDefinition {
    pub attribute_filter: AttributeFilter,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeFilter {
    pub key: String,
    pub operation: String,
    pub value: Vec<String>,
}
