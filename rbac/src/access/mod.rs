//! Roles and principals as shown in the console tables.

pub mod memory;
pub mod models;

pub use memory::{InMemorySource, Queryable};
pub use models::{
    Principal, ROLES_PATH, RoleSummary, USERS_PATH, principal_columns, principal_filters,
    role_columns,
};
