use super::column::Column;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Sort direction for ordering rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Currently sorted column.
///
/// `index` is a column position where `0` doubles as "unsorted": a table whose
/// first column is the active sort never produces an `orderBy` term. Callers
/// that need to sort by the first column must place a non-sortable column
/// (selection checkbox, expand toggle) in front of it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortBy {
    pub index: usize,
    pub direction: SortDirection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_direction: Option<SortDirection>,
}

impl SortBy {
    pub fn new(index: usize, direction: SortDirection) -> Self {
        Self {
            index,
            direction,
            default_direction: None,
        }
    }

    pub fn unsorted() -> Self {
        Self::default()
    }

    pub fn with_default_direction(mut self, direction: SortDirection) -> Self {
        self.default_direction = Some(direction);
        self
    }

    /// Whether this sort contributes an `orderBy` term
    pub fn is_active(&self) -> bool {
        self.index != 0
    }

    /// Backend order-by term: `[-]<column key>`, `None` when unsorted
    pub fn order_by(&self, columns: &[Column]) -> Option<String> {
        if !self.is_active() {
            return None;
        }
        let Some(key) = columns.get(self.index).and_then(Column::key) else {
            debug!(index = self.index, "sorted column has no key, dropping orderBy");
            return None;
        };
        let prefix = match self.direction {
            SortDirection::Desc => "-",
            SortDirection::Asc => "",
        };
        Some(format!("{prefix}{key}"))
    }

    /// Direction requested when the header of `column_index` is clicked
    pub fn next_direction(&self, column_index: usize) -> SortDirection {
        if self.is_active() && self.index == column_index {
            self.direction.toggled()
        } else {
            self.default_direction.unwrap_or_default()
        }
    }

    /// Rebuilds a sort from an `orderBy` term, e.g. one restored from the URL
    pub fn from_order_by(order_by: &str, columns: &[Column]) -> Self {
        let (direction, key) = match order_by.strip_prefix('-') {
            Some(key) => (SortDirection::Desc, key),
            None => (SortDirection::Asc, order_by),
        };
        columns
            .iter()
            .position(|c| c.sortable && c.key() == Some(key))
            .map(|index| SortBy::new(index, direction))
            .unwrap_or_default()
    }
}
