use super::filter::{Filter, FilterInput, FilterValue, active_fields};
use super::pagination::Pagination;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Normalized query handed to the data-loading callback.
///
/// Filter fields are carried twice: structured under `filters`, and flattened
/// at the top level for containers that still read `name`, `username`, ...
/// directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchDescriptor {
    pub limit: u32,
    pub offset: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_bottom: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<BTreeMap<String, FilterInput>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    #[serde(flatten)]
    pub legacy: BTreeMap<String, FilterInput>,
}

impl FetchDescriptor {
    /// Starts from the current pagination, as the toolbar's `...pagination` spread does
    pub fn from_pagination(pagination: &Pagination) -> Self {
        Self {
            limit: pagination.limit,
            offset: pagination.offset,
            count: Some(pagination.count),
            no_bottom: pagination.no_bottom.then_some(true),
            ..Default::default()
        }
    }

    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_order_by(mut self, order_by: Option<String>) -> Self {
        self.order_by = order_by;
        self
    }

    /// Flattens the filter value into the legacy top-level fields
    pub fn with_filter_value(mut self, value: &FilterValue) -> Self {
        self.legacy.extend(value.as_fields());
        self
    }

    pub fn with_filters(mut self, filters: &[Filter]) -> Self {
        self.filters = Some(active_fields(filters));
        self
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<FilterInput>) -> Self {
        self.legacy.insert(key.into(), value.into());
        self
    }

    /// All filter fields that are set; structured `filters` win over legacy ones
    pub fn filter_fields(&self) -> BTreeMap<String, FilterInput> {
        let mut fields: BTreeMap<String, FilterInput> = self
            .legacy
            .iter()
            .filter(|(_, v)| v.is_set())
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        if let Some(filters) = &self.filters {
            fields.extend(
                filters
                    .iter()
                    .filter(|(_, v)| v.is_set())
                    .map(|(k, v)| (k.clone(), v.clone())),
            );
        }
        fields
    }

    /// Backend query pairs: paging, `order_by`, then one pair per set filter.
    /// List values are comma-joined.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("limit".to_string(), self.limit.to_string()),
            ("offset".to_string(), self.offset.to_string()),
        ];
        if let Some(order_by) = &self.order_by {
            pairs.push(("order_by".to_string(), order_by.clone()));
        }
        for (key, value) in self.filter_fields() {
            pairs.push((key, value.values().join(",")));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_descriptor_serializes_legacy_fields_flat() {
        let pagination = Pagination::new(10, 20, 45);
        let descriptor = FetchDescriptor::from_pagination(&pagination)
            .with_offset(0)
            .with_filter_value(&FilterValue::text("admin"))
            .with_order_by(Some("-name".to_string()));

        assert_eq!(
            serde_json::to_value(&descriptor).unwrap(),
            json!({
                "limit": 10,
                "offset": 0,
                "count": 45,
                "orderBy": "-name",
                "name": "admin"
            })
        );
    }

    #[test]
    fn test_no_bottom_is_carried_only_when_set() {
        let descriptor = FetchDescriptor::from_pagination(&Pagination::new(5, 0, 0).without_bottom());
        assert_eq!(descriptor.no_bottom, Some(true));
        let descriptor = FetchDescriptor::from_pagination(&Pagination::new(5, 0, 0));
        assert_eq!(descriptor.no_bottom, None);
    }

    #[test]
    fn test_query_pairs_skip_unset_filters() {
        let filters = vec![
            Filter::text("username", "Username").with_value("jdoe"),
            Filter::checkbox("status", "Status", vec![])
                .with_value(FilterInput::Many(vec!["Active".into(), "Inactive".into()])),
            Filter::text("email", "Email"),
        ];
        let descriptor = FetchDescriptor::default()
            .with_limit(20)
            .with_filters(&filters)
            .with_field("name", "");

        assert_eq!(
            descriptor.query_pairs(),
            vec![
                ("limit".to_string(), "20".to_string()),
                ("offset".to_string(), "0".to_string()),
                ("status".to_string(), "Active,Inactive".to_string()),
                ("username".to_string(), "jdoe".to_string()),
            ]
        );
    }
}
