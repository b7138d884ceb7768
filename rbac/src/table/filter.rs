use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field name used when a table has a single free-text filter.
pub const NAME_FILTER: &str = "name";

/// Value held by one filter input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterInput {
    Number(i64),
    Text(String),
    Many(Vec<String>),
}

impl Default for FilterInput {
    fn default() -> Self {
        FilterInput::Text(String::new())
    }
}

impl FilterInput {
    /// Empty text, zero and empty lists all count as "not filtering"
    pub fn is_set(&self) -> bool {
        match self {
            FilterInput::Number(n) => *n != 0,
            FilterInput::Text(s) => !s.is_empty(),
            FilterInput::Many(values) => !values.is_empty(),
        }
    }

    /// Individual values as shown in filter chips
    pub fn values(&self) -> Vec<String> {
        match self {
            FilterInput::Number(n) if *n != 0 => vec![n.to_string()],
            FilterInput::Text(s) if !s.is_empty() => vec![s.clone()],
            FilterInput::Many(values) => values.clone(),
            _ => Vec::new(),
        }
    }

    /// Removes a single chip value; text and numbers are cleared entirely
    pub fn without(&self, value: &str) -> FilterInput {
        match self {
            FilterInput::Many(values) => {
                FilterInput::Many(values.iter().filter(|v| *v != value).cloned().collect())
            }
            FilterInput::Number(_) => FilterInput::Number(0),
            FilterInput::Text(_) => FilterInput::Text(String::new()),
        }
    }

    /// Empty value of the same shape
    pub fn cleared(&self) -> FilterInput {
        match self {
            FilterInput::Number(_) => FilterInput::Number(0),
            FilterInput::Text(_) => FilterInput::Text(String::new()),
            FilterInput::Many(_) => FilterInput::Many(Vec::new()),
        }
    }
}

impl From<&str> for FilterInput {
    fn from(value: &str) -> Self {
        FilterInput::Text(value.to_string())
    }
}

impl From<String> for FilterInput {
    fn from(value: String) -> Self {
        FilterInput::Text(value)
    }
}

/// The table's current filter value: one text box, or a keyed set of fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Text(String),
    Fields(BTreeMap<String, FilterInput>),
}

impl Default for FilterValue {
    fn default() -> Self {
        FilterValue::Text(String::new())
    }
}

impl FilterValue {
    pub fn text(value: impl Into<String>) -> Self {
        FilterValue::Text(value.into())
    }

    pub fn fields<K, V, I>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FilterInput>,
    {
        FilterValue::Fields(
            fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        match self {
            FilterValue::Text(s) => s.is_empty(),
            FilterValue::Fields(fields) => fields.values().all(|v| !v.is_set()),
        }
    }

    /// Flattened per-field form sent alongside fetch descriptors
    pub fn as_fields(&self) -> BTreeMap<String, FilterInput> {
        match self {
            FilterValue::Text(s) => {
                BTreeMap::from([(NAME_FILTER.to_string(), FilterInput::Text(s.clone()))])
            }
            FilterValue::Fields(fields) => fields.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterItem {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FilterKind {
    #[default]
    Text,
    Checkbox { items: Vec<FilterItem> },
}

/// One filter control rendered by the toolbar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    pub key: String,
    #[serde(default)]
    pub value: FilterInput,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub kind: FilterKind,
}

impl Filter {
    pub fn text(key: impl Into<String>, label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            key: key.into(),
            value: FilterInput::default(),
            placeholder: Some(format!("Filter by {}", label.to_lowercase())),
            label: Some(label),
            kind: FilterKind::Text,
        }
    }

    pub fn checkbox(key: impl Into<String>, label: impl Into<String>, items: Vec<FilterItem>) -> Self {
        Self {
            key: key.into(),
            value: FilterInput::Many(Vec::new()),
            label: Some(label.into()),
            placeholder: None,
            kind: FilterKind::Checkbox { items },
        }
    }

    pub fn with_value(mut self, value: impl Into<FilterInput>) -> Self {
        self.value = value.into();
        self
    }

    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.key)
    }
}

pub fn any_filter_set(filters: &[Filter]) -> bool {
    filters.iter().any(|f| f.value.is_set())
}

/// Values of the filters that are currently set, keyed by filter key
pub fn active_fields(filters: &[Filter]) -> BTreeMap<String, FilterInput> {
    filters
        .iter()
        .filter(|f| f.value.is_set())
        .map(|f| (f.key.clone(), f.value.clone()))
        .collect()
}

/// Copy of `filters` with every value cleared
pub fn cleared(filters: &[Filter]) -> Vec<Filter> {
    filters
        .iter()
        .map(|f| Filter {
            value: f.value.cleared(),
            ..f.clone()
        })
        .collect()
}
