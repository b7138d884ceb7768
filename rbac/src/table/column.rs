use serde::{Deserialize, Serialize};

/// A table column header.
///
/// `key` is the backend field name used to build the `orderBy` term, so any
/// sortable column must carry one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default)]
    pub sortable: bool,
}

impl Column {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            key: None,
            sortable: false,
        }
    }

    /// Column that can be sorted by the backend field `key`
    pub fn sortable(title: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            key: Some(key.into()),
            sortable: true,
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }
}
