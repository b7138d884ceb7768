use super::context::WizardContext;
use super::form::RoleFormValues;
use super::payload::build_role_payload;
use super::steps::{WizardStep, validate_step, wizard_steps};
use crate::access::{ROLES_PATH, RoleSummary};
use crate::error::Result;
use crate::notification::{Notification, NotificationVariant};
use crate::query::TableQuery;
use crate::table::{FetchDescriptor, FilterInput};
use async_trait::async_trait;
use shared_http::api::CreateRoleRequest;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{info, warn};

const CANCEL_NOTIFICATION_DELAY: Duration = Duration::from_secs(8);

/// Port for creating roles (backend client or in-memory fixture)
#[async_trait]
pub trait RoleSink: Send + Sync {
    async fn create_role(&self, request: CreateRoleRequest) -> Result<RoleSummary>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exit {
    /// Path plus query to navigate to
    pub location: String,
    pub notification: Option<Notification>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CancelOutcome {
    /// User input would be lost; ask first
    ShowWarning,
    Leave(Exit),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Submitted {
    pub role: RoleSummary,
    /// Reload of the roles list to issue after creation
    pub refresh: FetchDescriptor,
    pub notification: Notification,
}

/// Add-role wizard controller.
///
/// Remembers the roles list page size and filters it was opened from so that
/// leaving returns to the same list.
#[derive(Debug, Clone)]
pub struct AddRoleWizard {
    pub context: WizardContext,
    pub cancel_warning_visible: bool,
    current: usize,
    per_page: u32,
    list_filters: BTreeMap<String, FilterInput>,
}

impl AddRoleWizard {
    pub fn new(per_page: u32, list_filters: BTreeMap<String, FilterInput>) -> Self {
        Self {
            context: WizardContext::default(),
            cancel_warning_visible: false,
            current: 0,
            per_page,
            list_filters,
        }
    }

    pub fn steps(&self, values: &RoleFormValues) -> Vec<WizardStep> {
        wizard_steps(values)
    }

    /// Current step; clamps if the step list shrank since the last move
    pub fn current_step(&self, values: &RoleFormValues) -> WizardStep {
        let steps = self.steps(values);
        steps[self.current.min(steps.len() - 1)]
    }

    pub fn is_last_step(&self, values: &RoleFormValues) -> bool {
        self.current_step(values) == WizardStep::Review
    }

    pub fn next(&mut self, values: &RoleFormValues) -> Result<WizardStep> {
        let step = self.current_step(values);
        if let Err(e) = validate_step(step, values) {
            self.context.set_error(Some(e.to_string()));
            return Err(e);
        }
        self.context.set_error(None);
        let steps = self.steps(values);
        self.current = (self.current.min(steps.len() - 1) + 1).min(steps.len() - 1);
        Ok(steps[self.current])
    }

    pub fn back(&mut self, values: &RoleFormValues) -> WizardStep {
        self.current = self.current.saturating_sub(1);
        self.current_step(values)
    }

    pub fn cancel(&mut self, values: &RoleFormValues) -> CancelOutcome {
        if values.is_dirty() {
            self.cancel_warning_visible = true;
            CancelOutcome::ShowWarning
        } else {
            CancelOutcome::Leave(self.leave())
        }
    }

    pub fn dismiss_warning(&mut self) {
        self.cancel_warning_visible = false;
    }

    pub fn confirm_cancel(&mut self) -> Exit {
        self.cancel_warning_visible = false;
        self.leave()
    }

    /// Leaves back to the roles list, keeping page size and filters
    fn leave(&self) -> Exit {
        let notification = (!self.context.success).then(|| {
            Notification::new(
                NotificationVariant::Warning,
                "Creating role was canceled by the user",
            )
            .with_dismiss_delay(CANCEL_NOTIFICATION_DELAY)
            .not_dismissable()
        });
        let query = TableQuery::first_page(self.per_page).with_filters(self.list_filters.clone());
        Exit {
            location: format!("{ROLES_PATH}?{}", query.to_query()),
            notification,
        }
    }

    /// Closes the success screen; list filters are dropped
    pub fn close(&self) -> String {
        format!("{ROLES_PATH}?{}", TableQuery::first_page(self.per_page).to_query())
    }

    /// Validates and builds the request, marking the wizard as submitting
    pub fn begin_submit(&mut self, values: &RoleFormValues) -> Result<CreateRoleRequest> {
        match build_role_payload(values) {
            Ok(request) => {
                self.context.start_submit();
                Ok(request)
            }
            Err(e) => {
                self.context.set_error(Some(e.to_string()));
                Err(e)
            }
        }
    }

    pub fn finish_submit(&mut self, result: Result<RoleSummary>) -> Result<Submitted> {
        match result {
            Ok(role) => {
                info!("Role created: {}", role.name);
                self.context.submit_succeeded();
                let notification = Notification::new(
                    NotificationVariant::Success,
                    format!("The role {} was created successfully", role.name),
                );
                Ok(Submitted {
                    role,
                    refresh: FetchDescriptor::default().with_limit(self.per_page),
                    notification,
                })
            }
            Err(e) => {
                warn!("Failed to create role: {}", e);
                self.context.submit_failed(e.to_string());
                Err(e)
            }
        }
    }

    pub async fn submit(&mut self, values: &RoleFormValues, sink: &dyn RoleSink) -> Result<Submitted> {
        let request = self.begin_submit(values)?;
        let result = sink.create_role(request).await;
        self.finish_submit(result)
    }

    /// Toast for the last failure, if any
    pub fn failure_notification(&self) -> Option<Notification> {
        self.context.error.as_ref().map(|error| {
            Notification::new(NotificationVariant::Danger, "Failed to create role")
                .with_description(error.clone())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::InMemorySource;
    use crate::error::RbacError;
    use crate::wizard::form::RoleType;

    fn filters() -> BTreeMap<String, FilterInput> {
        BTreeMap::from([("name".to_string(), FilterInput::from("cost"))])
    }

    fn complete_values() -> RoleFormValues {
        let mut values = RoleFormValues {
            role_name: "Auditors".to_string(),
            ..Default::default()
        };
        values.toggle_permission("inventory:hosts:read");
        values
    }

    struct FailingSink;

    #[async_trait]
    impl RoleSink for FailingSink {
        async fn create_role(&self, _request: CreateRoleRequest) -> Result<RoleSummary> {
            Err(RbacError::Request("role with this name already exists".to_string()))
        }
    }

    #[test]
    fn test_cancel_with_input_asks_first() {
        let mut wizard = AddRoleWizard::new(20, filters());
        let values = RoleFormValues {
            role_description: "draft".to_string(),
            ..Default::default()
        };

        assert_eq!(wizard.cancel(&values), CancelOutcome::ShowWarning);
        assert!(wizard.cancel_warning_visible);

        let exit = wizard.confirm_cancel();
        assert!(!wizard.cancel_warning_visible);
        assert_eq!(exit.location, "/roles?page=1&per_page=20&name=cost");
        let notification = exit.notification.unwrap();
        assert_eq!(notification.variant, NotificationVariant::Warning);
        assert_eq!(notification.dismiss_delay, Some(Duration::from_secs(8)));
        assert!(!notification.dismissable);
    }

    #[test]
    fn test_cancel_without_input_leaves_immediately() {
        let mut wizard = AddRoleWizard::new(10, BTreeMap::new());
        let CancelOutcome::Leave(exit) = wizard.cancel(&RoleFormValues::default()) else {
            panic!("expected to leave");
        };
        assert_eq!(exit.location, "/roles?page=1&per_page=10");
        assert!(!wizard.cancel_warning_visible);
    }

    #[test]
    fn test_navigation_validates_current_step() {
        let mut wizard = AddRoleWizard::new(10, BTreeMap::new());
        let mut values = RoleFormValues::default();

        assert!(wizard.next(&values).is_err());
        assert!(wizard.context.error.is_some());

        values.role_name = "Auditors".to_string();
        assert_eq!(wizard.next(&values).unwrap(), WizardStep::Permissions);
        assert!(wizard.context.error.is_none());

        values.toggle_permission("inventory:hosts:read");
        assert_eq!(wizard.next(&values).unwrap(), WizardStep::Review);
        assert!(wizard.is_last_step(&values));
        assert_eq!(wizard.back(&values), WizardStep::Permissions);
    }

    #[test]
    fn test_copy_flow_visits_base_role() {
        let mut wizard = AddRoleWizard::new(10, BTreeMap::new());
        let values = RoleFormValues {
            role_type: RoleType::Copy,
            ..Default::default()
        };
        assert_eq!(wizard.next(&values).unwrap(), WizardStep::BaseRole);
        assert!(wizard.next(&values).is_err());
    }

    #[tokio::test]
    async fn test_submit_success_updates_context() {
        let mut wizard = AddRoleWizard::new(10, filters());
        let sink = InMemorySource::<RoleSummary>::new(Vec::new());

        let submitted = wizard.submit(&complete_values(), &sink).await.unwrap();

        assert_eq!(submitted.role.name, "Auditors");
        assert_eq!(submitted.refresh.limit, 10);
        assert_eq!(submitted.notification.variant, NotificationVariant::Success);
        assert_eq!(
            wizard.context,
            WizardContext {
                success: true,
                submitting: false,
                error: None,
                hide_form: true,
            }
        );
        assert_eq!(sink.len().await, 1);
        // After success nothing warns about cancelling.
        assert!(wizard.confirm_cancel().notification.is_none());
        assert_eq!(wizard.close(), "/roles?page=1&per_page=10");
    }

    #[tokio::test]
    async fn test_submit_failure_keeps_form() {
        let mut wizard = AddRoleWizard::new(10, BTreeMap::new());

        let result = wizard.submit(&complete_values(), &FailingSink).await;

        assert!(result.is_err());
        assert!(!wizard.context.submitting);
        assert!(!wizard.context.hide_form);
        assert!(!wizard.context.success);
        let toast = wizard.failure_notification().unwrap();
        assert_eq!(toast.variant, NotificationVariant::Danger);
        assert_eq!(
            toast.description.as_deref(),
            Some("Request failed: role with this name already exists")
        );
    }

    #[tokio::test]
    async fn test_invalid_values_never_reach_the_sink() {
        let mut wizard = AddRoleWizard::new(10, BTreeMap::new());
        let sink = InMemorySource::<RoleSummary>::new(Vec::new());
        let result = wizard.submit(&RoleFormValues::default(), &sink).await;
        assert!(matches!(result, Err(RbacError::MissingRoleName)));
        assert!(!wizard.context.submitting);
        assert!(sink.is_empty().await);
    }
}
