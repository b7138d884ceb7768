use super::form::{COST_MANAGEMENT, Permission, RoleFormValues};
use crate::error::{RbacError, Result};
use shared_http::api::requests::ATTRIBUTE_FILTER_IN;
use shared_http::api::{AccessRequest, AttributeFilter, CreateRoleRequest, ResourceDefinition};

/// Turns the collected wizard values into the role-creation request.
///
/// Applications are the distinct permission prefixes in first-seen order.
/// A permission with selected cost resources gets one `in` attribute filter
/// keyed `cost-management.<resource type>`.
pub fn build_role_payload(values: &RoleFormValues) -> Result<CreateRoleRequest> {
    let name = values.name().trim();
    if name.is_empty() {
        return Err(RbacError::MissingRoleName);
    }
    if values.permissions.is_empty() {
        return Err(RbacError::NoPermissionsSelected);
    }

    let permissions = values
        .permissions
        .iter()
        .map(|p| p.parse::<Permission>())
        .collect::<Result<Vec<_>>>()?;

    let mut applications: Vec<String> = Vec::new();
    for permission in &permissions {
        if !applications.contains(&permission.application) {
            applications.push(permission.application.clone());
        }
    }

    let access = permissions
        .iter()
        .map(|permission| {
            let permission_str = permission.to_string();
            let resource_definitions = values
                .resources_for(&permission_str)
                .map(|selection| {
                    vec![ResourceDefinition {
                        attribute_filter: AttributeFilter {
                            key: format!("{COST_MANAGEMENT}.{}", permission.resource_type),
                            operation: ATTRIBUTE_FILTER_IN.to_string(),
                            value: selection.resources.clone(),
                        },
                    }]
                })
                .unwrap_or_default();
            AccessRequest {
                permission: permission_str,
                resource_definitions,
            }
        })
        .collect();

    let description = Some(values.description().to_string()).filter(|d| !d.is_empty());

    Ok(CreateRoleRequest {
        name: name.to_string(),
        description,
        applications,
        access,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::form::RoleType;

    fn values() -> RoleFormValues {
        let mut values = RoleFormValues {
            role_name: "Cost viewer".to_string(),
            ..Default::default()
        };
        values.toggle_permission("cost-management:aws.account:read");
        values.toggle_permission("inventory:hosts:read");
        values.toggle_permission("cost-management:openshift.cluster:read");
        values.set_resources("cost-management:aws.account:read", vec!["111".into(), "222".into()]);
        values
    }

    #[test]
    fn test_applications_are_deduplicated_in_order() {
        let payload = build_role_payload(&values()).unwrap();
        assert_eq!(payload.applications, vec!["cost-management", "inventory"]);
        assert_eq!(payload.access.len(), 3);
    }

    #[test]
    fn test_resource_definition_only_where_selected() {
        let payload = build_role_payload(&values()).unwrap();

        let aws = &payload.access[0];
        assert_eq!(aws.permission, "cost-management:aws.account:read");
        let filter = &aws.resource_definitions[0].attribute_filter;
        assert_eq!(filter.key, "cost-management.aws.account");
        assert_eq!(filter.operation, "in");
        assert_eq!(filter.value, vec!["111", "222"]);

        assert!(payload.access[1].resource_definitions.is_empty());
        assert!(payload.access[2].resource_definitions.is_empty());
    }

    #[test]
    fn test_empty_description_becomes_null() {
        let payload = build_role_payload(&values()).unwrap();
        assert_eq!(payload.description, None);

        let mut copy = values();
        copy.role_type = RoleType::Copy;
        copy.role_copy_name = "Copy of Cost viewer".to_string();
        copy.role_copy_description = "copied".to_string();
        let payload = build_role_payload(&copy).unwrap();
        assert_eq!(payload.name, "Copy of Cost viewer");
        assert_eq!(payload.description.as_deref(), Some("copied"));
    }

    #[test]
    fn test_missing_name_or_permissions_is_rejected() {
        let mut no_name = values();
        no_name.role_name.clear();
        assert!(matches!(build_role_payload(&no_name), Err(RbacError::MissingRoleName)));

        let no_permissions = RoleFormValues {
            role_name: "x".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            build_role_payload(&no_permissions),
            Err(RbacError::NoPermissionsSelected)
        ));
    }

    #[test]
    fn test_malformed_permission_is_rejected() {
        let mut values = values();
        values.permissions.push("broken".to_string());
        assert!(matches!(
            build_role_payload(&values),
            Err(RbacError::InvalidPermission(p)) if p == "broken"
        ));
    }
}
