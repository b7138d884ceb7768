use crate::error::RbacError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const COST_MANAGEMENT: &str = "cost-management";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleType {
    #[default]
    Create,
    Copy,
}

/// `application:resource_type:verb`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Permission {
    pub application: String,
    pub resource_type: String,
    pub verb: String,
}

impl Permission {
    pub fn is_cost_management(&self) -> bool {
        self.application == COST_MANAGEMENT
    }
}

impl FromStr for Permission {
    type Err = RbacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(':');
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(app), Some(resource), Some(verb), None)
                if !app.is_empty() && !resource.is_empty() && !verb.is_empty() =>
            {
                Ok(Self {
                    application: app.to_string(),
                    resource_type: resource.to_string(),
                    verb: verb.to_string(),
                })
            }
            _ => Err(RbacError::InvalidPermission(s.to_string())),
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.application, self.resource_type, self.verb)
    }
}

/// Cost-management resources a permission is narrowed to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceSelection {
    pub permission: String,
    pub resources: Vec<String>,
}

/// Values collected across the add-role wizard steps
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleFormValues {
    pub role_type: RoleType,
    pub role_name: String,
    pub role_description: String,
    pub role_copy_name: String,
    pub role_copy_description: String,
    /// uuid of the role being copied
    pub copy_base_role: Option<String>,
    /// Selected permission strings, in selection order
    pub permissions: Vec<String>,
    pub cost_resources: Vec<ResourceSelection>,
}

impl RoleFormValues {
    /// Name used for the new role, depending on create vs. copy
    pub fn name(&self) -> &str {
        match self.role_type {
            RoleType::Create => &self.role_name,
            RoleType::Copy => &self.role_copy_name,
        }
    }

    pub fn description(&self) -> &str {
        match self.role_type {
            RoleType::Create => &self.role_description,
            RoleType::Copy => &self.role_copy_description,
        }
    }

    /// Whether cancelling would throw away user input
    pub fn is_dirty(&self) -> bool {
        !self.role_name.is_empty()
            || !self.role_description.is_empty()
            || self.copy_base_role.is_some()
    }

    pub fn has_cost_permissions(&self) -> bool {
        self.permissions
            .iter()
            .any(|p| p.split(':').next() == Some(COST_MANAGEMENT))
    }

    pub fn resources_for(&self, permission: &str) -> Option<&ResourceSelection> {
        self.cost_resources.iter().find(|r| r.permission == permission)
    }

    pub fn toggle_permission(&mut self, permission: &str) {
        if let Some(pos) = self.permissions.iter().position(|p| p == permission) {
            self.permissions.remove(pos);
            self.cost_resources.retain(|r| r.permission != permission);
        } else {
            self.permissions.push(permission.to_string());
        }
    }

    pub fn set_resources(&mut self, permission: &str, resources: Vec<String>) {
        match self.cost_resources.iter_mut().find(|r| r.permission == permission) {
            Some(selection) => selection.resources = resources,
            None => self.cost_resources.push(ResourceSelection {
                permission: permission.to_string(),
                resources,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_parsing() {
        let p: Permission = "cost-management:aws.account:read".parse().unwrap();
        assert_eq!(p.resource_type, "aws.account");
        assert!(p.is_cost_management());
        assert_eq!(p.to_string(), "cost-management:aws.account:read");

        assert!("inventory:hosts".parse::<Permission>().is_err());
        assert!("a:b:c:d".parse::<Permission>().is_err());
        assert!("a::c".parse::<Permission>().is_err());
    }

    #[test]
    fn test_dirty_tracks_user_input() {
        let mut values = RoleFormValues::default();
        assert!(!values.is_dirty());
        values.copy_base_role = Some("r-1".to_string());
        assert!(values.is_dirty());
    }

    #[test]
    fn test_name_follows_role_type() {
        let values = RoleFormValues {
            role_type: RoleType::Copy,
            role_name: "ignored".to_string(),
            role_copy_name: "Copy of viewer".to_string(),
            ..Default::default()
        };
        assert_eq!(values.name(), "Copy of viewer");
    }

    #[test]
    fn test_toggle_permission_drops_its_resources() {
        let mut values = RoleFormValues::default();
        values.toggle_permission("cost-management:aws.account:read");
        values.set_resources("cost-management:aws.account:read", vec!["1".into()]);
        assert!(values.has_cost_permissions());

        values.toggle_permission("cost-management:aws.account:read");
        assert!(values.permissions.is_empty());
        assert!(values.cost_resources.is_empty());
    }
}
