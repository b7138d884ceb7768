use super::form::{COST_MANAGEMENT, RoleFormValues, RoleType};
use crate::error::{RbacError, Result};
use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum WizardStep {
    #[strum(to_string = "Create role")]
    Details,
    #[strum(to_string = "Select base role")]
    BaseRole,
    #[strum(to_string = "Add permissions")]
    Permissions,
    #[strum(to_string = "Define Cost Management resources")]
    CostResources,
    #[strum(to_string = "Review details")]
    Review,
}

/// Steps shown for the current values. Copying adds the base-role step;
/// cost-management permissions add the resource scoping step.
pub fn wizard_steps(values: &RoleFormValues) -> Vec<WizardStep> {
    let mut steps = vec![WizardStep::Details];
    if values.role_type == RoleType::Copy {
        steps.push(WizardStep::BaseRole);
    }
    steps.push(WizardStep::Permissions);
    if values.has_cost_permissions() {
        steps.push(WizardStep::CostResources);
    }
    steps.push(WizardStep::Review);
    steps
}

/// Checks that `step` may be left going forward
pub fn validate_step(step: WizardStep, values: &RoleFormValues) -> Result<()> {
    match step {
        WizardStep::Details => {
            if values.role_type == RoleType::Create && values.name().trim().is_empty() {
                return Err(RbacError::MissingRoleName);
            }
            Ok(())
        }
        WizardStep::BaseRole => {
            if values.copy_base_role.is_none() {
                return Err(RbacError::Validation("Select a role to copy".to_string()));
            }
            if values.name().trim().is_empty() {
                return Err(RbacError::MissingRoleName);
            }
            Ok(())
        }
        WizardStep::Permissions => {
            if values.permissions.is_empty() {
                return Err(RbacError::NoPermissionsSelected);
            }
            Ok(())
        }
        WizardStep::CostResources => {
            let unscoped = values
                .permissions
                .iter()
                .filter(|p| p.starts_with(&format!("{COST_MANAGEMENT}:")))
                .find(|p| {
                    values
                        .resources_for(p)
                        .is_none_or(|r| r.resources.is_empty())
                });
            match unscoped {
                Some(permission) => Err(RbacError::Validation(format!(
                    "Select at least one resource for {permission}"
                ))),
                None => Ok(()),
            }
        }
        WizardStep::Review => Ok(()),
    }
}
