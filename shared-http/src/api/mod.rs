pub mod requests;
pub mod responses;

pub use requests::{AccessRequest, AttributeFilter, CreateRoleRequest, ResourceDefinition};
pub use responses::{
    ErrorResponse, ListMeta, ListResponse, PermissionResponse, PrincipalResponse, RoleResponse,
};
