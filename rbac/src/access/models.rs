use crate::table::store::TableRow;
use crate::table::{Cell, Column, Filter, FilterItem, Row};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_http::api::{PrincipalResponse, RoleResponse};

pub const ROLES_PATH: &str = "/roles";
pub const USERS_PATH: &str = "/users";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleSummary {
    pub uuid: String,
    pub name: String,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub system: bool,
    pub access_count: u32,
    pub modified: DateTime<Utc>,
}

impl RoleSummary {
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }

    pub fn detail_path(&self) -> String {
        format!("{ROLES_PATH}/detail/{}", self.uuid)
    }
}

impl From<RoleResponse> for RoleSummary {
    fn from(role: RoleResponse) -> Self {
        Self {
            uuid: role.uuid.to_string(),
            name: role.name,
            display_name: role.display_name,
            description: role.description,
            system: role.system,
            access_count: role.access_count,
            modified: role.modified,
        }
    }
}

/// Role table columns. The leading unnamed column is the row selector, so
/// "Name" sits at index 1 and remains sortable.
pub fn role_columns() -> Vec<Column> {
    vec![
        Column::new(""),
        Column::sortable("Name", "display_name"),
        Column::new("Description"),
        Column::new("Permissions"),
        Column::sortable("Last modified", "modified"),
    ]
}

impl TableRow for RoleSummary {
    fn to_row(&self) -> Row {
        Row::new([
            Cell::from(""),
            Cell::link(self.label(), self.detail_path()),
            Cell::from(self.description.clone().unwrap_or_default()),
            Cell::from(self.access_count),
            Cell::from(self.modified.format("%d %b %Y").to_string()),
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
    pub is_org_admin: bool,
}

impl Principal {
    pub fn status(&self) -> &'static str {
        if self.is_active { "Active" } else { "Inactive" }
    }

    pub fn detail_path(&self) -> String {
        format!("{USERS_PATH}/detail/{}", self.username)
    }
}

impl From<PrincipalResponse> for Principal {
    fn from(principal: PrincipalResponse) -> Self {
        Self {
            username: principal.username,
            email: principal.email,
            first_name: principal.first_name,
            last_name: principal.last_name,
            is_active: principal.is_active,
            is_org_admin: principal.is_org_admin,
        }
    }
}

pub fn principal_columns() -> Vec<Column> {
    vec![
        Column::new("Org. Administrator"),
        Column::sortable("Username", "username"),
        Column::new("Email"),
        Column::new("First name"),
        Column::new("Last name"),
        Column::new("Status"),
    ]
}

/// Filters of the users table
pub fn principal_filters() -> Vec<Filter> {
    vec![
        Filter::text("username", "Username"),
        Filter::text("email", "Email"),
        Filter::checkbox(
            "status",
            "Status",
            ["Active", "Inactive"]
                .into_iter()
                .map(|s| FilterItem {
                    label: s.to_string(),
                    value: s.to_string(),
                })
                .collect(),
        ),
    ]
}

impl TableRow for Principal {
    fn to_row(&self) -> Row {
        Row::new([
            Cell::from(if self.is_org_admin { "Yes" } else { "No" }),
            Cell::link(self.username.clone(), self.detail_path()),
            Cell::from(self.email.clone()),
            Cell::from(self.first_name.clone()),
            Cell::from(self.last_name.clone()),
            Cell::from(self.status()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_role_row_matches_columns() {
        let role = RoleSummary {
            uuid: "r-1".to_string(),
            name: "cost-admin".to_string(),
            display_name: Some("Cost Administrator".to_string()),
            description: None,
            system: true,
            access_count: 4,
            modified: Utc.with_ymd_and_hms(2024, 3, 9, 10, 0, 0).unwrap(),
        };
        let row = role.to_row();
        assert_eq!(row.cells.len(), role_columns().len());
        assert_eq!(row.cells[1].text(), "Cost Administrator");
        assert_eq!(row.cells[1].href(), Some("/roles/detail/r-1"));
        assert_eq!(row.cells[4].text(), "09 Mar 2024");
    }

    #[test]
    fn test_principal_row_matches_columns() {
        let principal = Principal {
            username: "jdoe".to_string(),
            email: "jdoe@example.com".to_string(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            is_active: false,
            is_org_admin: true,
        };
        let row = principal.to_row();
        assert_eq!(row.cells.len(), principal_columns().len());
        assert_eq!(row.cells[0].text(), "Yes");
        assert_eq!(row.cells[5].text(), "Inactive");
    }
}
