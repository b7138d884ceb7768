pub mod add_role;
mod list;
pub mod my_user_access;
pub mod roles;
pub mod users;

pub use add_role::AddRole;
pub use my_user_access::MyUserAccess;
pub use roles::Roles;
pub use users::Users;
