use super::models::{Principal, RoleSummary};
use crate::error::Result;
use crate::table::store::{ListPage, ListSource};
use crate::table::{FetchDescriptor, FilterInput};
use crate::wizard::RoleSink;
use async_trait::async_trait;
use chrono::Utc;
use shared_http::api::CreateRoleRequest;
use std::cmp::Ordering;
use tokio::sync::RwLock;

/// Items an in-memory source can filter and sort
pub trait Queryable {
    /// Whether the item satisfies filter `field`; unknown fields match everything
    fn matches(&self, field: &str, value: &FilterInput) -> bool;

    fn compare_by(&self, other: &Self, key: &str) -> Ordering;
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn text_matches(haystack: &str, value: &FilterInput) -> bool {
    match value {
        FilterInput::Many(options) => options.iter().any(|o| o.eq_ignore_ascii_case(haystack)),
        other => other.values().iter().all(|v| contains_ci(haystack, v)),
    }
}

impl Queryable for RoleSummary {
    fn matches(&self, field: &str, value: &FilterInput) -> bool {
        match field {
            "name" | "display_name" => text_matches(self.label(), value),
            _ => true,
        }
    }

    fn compare_by(&self, other: &Self, key: &str) -> Ordering {
        match key {
            "modified" => self.modified.cmp(&other.modified),
            _ => self.label().to_lowercase().cmp(&other.label().to_lowercase()),
        }
    }
}

impl Queryable for Principal {
    fn matches(&self, field: &str, value: &FilterInput) -> bool {
        match field {
            "username" | "name" => text_matches(&self.username, value),
            "email" => text_matches(&self.email, value),
            "status" => text_matches(self.status(), value),
            _ => true,
        }
    }

    fn compare_by(&self, other: &Self, key: &str) -> Ordering {
        match key {
            "email" => self.email.cmp(&other.email),
            _ => self.username.cmp(&other.username),
        }
    }
}

/// List source backed by a vector; filters, sorts and pages like the backend.
pub struct InMemorySource<R> {
    items: RwLock<Vec<R>>,
}

impl<R: Clone + Queryable + Send + Sync> InMemorySource<R> {
    pub fn new(items: Vec<R>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }

    pub async fn push(&self, item: R) {
        self.items.write().await.push(item);
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

#[async_trait]
impl<R: Clone + Queryable + Send + Sync> ListSource<R> for InMemorySource<R> {
    async fn fetch(&self, descriptor: &FetchDescriptor) -> Result<ListPage<R>> {
        let fields = descriptor.filter_fields();
        let mut matching: Vec<R> = self
            .items
            .read()
            .await
            .iter()
            .filter(|item| fields.iter().all(|(k, v)| item.matches(k, v)))
            .cloned()
            .collect();

        if let Some(order_by) = &descriptor.order_by {
            let (descending, key) = match order_by.strip_prefix('-') {
                Some(key) => (true, key),
                None => (false, order_by.as_str()),
            };
            matching.sort_by(|a, b| {
                let ordering = a.compare_by(b, key);
                if descending { ordering.reverse() } else { ordering }
            });
        }

        let count = matching.len() as u32;
        let items = matching
            .into_iter()
            .skip(descriptor.offset as usize)
            .take(descriptor.limit as usize)
            .collect();
        Ok(ListPage::new(items, count, descriptor.limit, descriptor.offset))
    }
}

#[async_trait]
impl RoleSink for InMemorySource<RoleSummary> {
    async fn create_role(&self, request: CreateRoleRequest) -> Result<RoleSummary> {
        let role = RoleSummary {
            uuid: uuid::Uuid::new_v4().to_string(),
            display_name: Some(request.name.clone()),
            name: request.name,
            description: request.description,
            system: false,
            access_count: request.access.len() as u32,
            modified: Utc::now(),
        };
        self.push(role.clone()).await;
        Ok(role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{Filter, FilterValue};
    use fake::Fake;
    use fake::faker::internet::en::SafeEmail;
    use fake::faker::name::en::{FirstName, LastName};

    fn principal(username: &str, is_active: bool) -> Principal {
        Principal {
            username: username.to_string(),
            email: SafeEmail().fake(),
            first_name: FirstName().fake(),
            last_name: LastName().fake(),
            is_active,
            is_org_admin: false,
        }
    }

    fn source() -> InMemorySource<Principal> {
        InMemorySource::new(vec![
            principal("carol", true),
            principal("alice", true),
            principal("bob", false),
            principal("alfred", false),
        ])
    }

    #[tokio::test]
    async fn test_fetch_pages_and_counts() {
        let page = source()
            .fetch(&FetchDescriptor::default().with_limit(2).with_offset(2))
            .await
            .unwrap();
        assert_eq!(page.count, 4);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.offset, 2);
    }

    #[tokio::test]
    async fn test_fetch_applies_filters_and_order() {
        let descriptor = FetchDescriptor::default()
            .with_limit(10)
            .with_filter_value(&FilterValue::fields([("username", "al")]))
            .with_order_by(Some("-username".to_string()));
        let page = source().fetch(&descriptor).await.unwrap();
        let names: Vec<_> = page.items.iter().map(|p| p.username.as_str()).collect();
        assert_eq!(names, vec!["alice", "alfred"]);
    }

    #[tokio::test]
    async fn test_status_checkbox_filter() {
        let filters = vec![
            Filter::text("username", "Username"),
            Filter::checkbox("status", "Status", vec![])
                .with_value(FilterInput::Many(vec!["Inactive".to_string()])),
        ];
        let descriptor = FetchDescriptor::default().with_limit(10).with_filters(&filters);
        let page = source().fetch(&descriptor).await.unwrap();
        assert_eq!(page.count, 2);
        assert!(page.items.iter().all(|p| !p.is_active));
    }
}
