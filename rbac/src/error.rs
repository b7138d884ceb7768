use thiserror::Error;

#[derive(Debug, Error)]
pub enum RbacError {
    #[error("Row {row} has {cells} cells but the table has {columns} columns")]
    RowShapeMismatch {
        row: usize,
        cells: usize,
        columns: usize,
    },

    #[error("Column {0} is sortable but has no key")]
    MissingSortKey(usize),

    #[error("Role name is required")]
    MissingRoleName,

    #[error("At least one permission must be selected")]
    NoPermissionsSelected,

    #[error("Invalid permission '{0}', expected application:resource:verb")]
    InvalidPermission(String),

    #[error("{0}")]
    Validation(String),

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<shared_http::api::ErrorResponse> for RbacError {
    fn from(err: shared_http::api::ErrorResponse) -> Self {
        RbacError::Request(err.error)
    }
}

pub type Result<T> = std::result::Result<T, RbacError>;
