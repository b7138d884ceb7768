//! Add-role wizard: step assembly, shared submission state, cancellation and
//! the role-creation payload.

pub mod context;
pub mod flow;
pub mod form;
pub mod payload;
pub mod steps;

pub use context::WizardContext;
pub use flow::{AddRoleWizard, CancelOutcome, Exit, RoleSink, Submitted};
pub use form::{Permission, ResourceSelection, RoleFormValues, RoleType};
pub use payload::build_role_payload;
pub use steps::{WizardStep, validate_step, wizard_steps};
