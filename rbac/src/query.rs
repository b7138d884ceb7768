//! URL query helpers for console navigation.

use crate::table::filter::NAME_FILTER;
use crate::table::pagination::DEFAULT_PER_PAGE;
use crate::table::{
    Column, FetchDescriptor, Filter, FilterInput, FilterKind, FilterValue, Pagination, SortBy,
    TableEvents, TableStore,
};
use std::collections::BTreeMap;
use url::form_urlencoded;

const PAGE: &str = "page";
const PER_PAGE: &str = "per_page";
const ORDER_BY: &str = "order_by";

/// Builds `a=1&b=2` from `params`, skipping unset values. List values are
/// emitted once per element.
pub fn create_query_params<'a, I>(params: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a FilterInput)>,
{
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        for v in value.values() {
            serializer.append_pair(key, &v);
        }
    }
    serializer.finish()
}

/// Parses a query string (with or without the leading `?`) into key → values
pub fn parse_query(query: &str) -> BTreeMap<String, Vec<String>> {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut params: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        params.entry(key.into_owned()).or_default().push(value.into_owned());
    }
    params
}

/// Table position and filters as carried in a list page URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableQuery {
    pub page: u32,
    pub per_page: u32,
    pub order_by: Option<String>,
    pub filters: BTreeMap<String, FilterInput>,
}

impl Default for TableQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            order_by: None,
            filters: BTreeMap::new(),
        }
    }
}

impl TableQuery {
    pub fn first_page(per_page: u32) -> Self {
        Self {
            per_page,
            ..Default::default()
        }
    }

    pub fn with_filters(mut self, filters: BTreeMap<String, FilterInput>) -> Self {
        self.filters = filters;
        self
    }

    /// Reads `page`, `per_page`, `order_by`; every other key is a filter.
    /// Malformed numbers fall back to the defaults.
    pub fn from_query(query: &str) -> Self {
        let mut parsed = parse_query(query);
        let number = |values: Option<Vec<String>>, default: u32| {
            values
                .and_then(|v| v.first().and_then(|s| s.parse::<u32>().ok()))
                .filter(|n| *n > 0)
                .unwrap_or(default)
        };
        let page = number(parsed.remove(PAGE), 1);
        let per_page = number(parsed.remove(PER_PAGE), DEFAULT_PER_PAGE);
        let order_by = parsed.remove(ORDER_BY).and_then(|v| v.into_iter().next());
        let filters = parsed
            .into_iter()
            .map(|(key, mut values)| {
                let value = if values.len() == 1 {
                    FilterInput::Text(values.remove(0))
                } else {
                    FilterInput::Many(values)
                };
                (key, value)
            })
            .collect();
        Self {
            page,
            per_page,
            order_by,
            filters,
        }
    }

    pub fn to_query(&self) -> String {
        let page = FilterInput::Text(self.page.to_string());
        let per_page = FilterInput::Text(self.per_page.to_string());
        let order_by = FilterInput::Text(self.order_by.clone().unwrap_or_default());
        let params = [(PAGE, &page), (PER_PAGE, &per_page), (ORDER_BY, &order_by)]
            .into_iter()
            .chain(self.filters.iter().map(|(k, v)| (k.as_str(), v)));
        create_query_params(params)
    }

    pub fn pagination(&self) -> Pagination {
        let offset = self.page.saturating_sub(1).saturating_mul(self.per_page);
        Pagination::new(self.per_page, offset, 0)
    }

    /// Position and filters of an issued fetch, for writing back to the URL
    pub fn from_descriptor(descriptor: &FetchDescriptor) -> Self {
        let per_page = match descriptor.limit {
            0 => DEFAULT_PER_PAGE,
            limit => limit,
        };
        Self {
            page: descriptor.offset / per_page + 1,
            per_page,
            order_by: descriptor.order_by.clone(),
            filters: descriptor.filter_fields(),
        }
    }

    /// Restores a table from its URL. Tables without structured `filters`
    /// take the `name` parameter as their free-text filter value.
    pub fn store<R: Clone>(
        &self,
        columns: Vec<Column>,
        filters: Vec<Filter>,
        default_sort: SortBy,
    ) -> TableStore<R> {
        let sort_by = match &self.order_by {
            Some(order_by) => SortBy::from_order_by(order_by, &columns),
            None => default_sort,
        };
        let filter_value = match (filters.is_empty(), self.filters.get(NAME_FILTER)) {
            (true, Some(name)) => FilterValue::Text(name.values().join(",")),
            _ => FilterValue::default(),
        };
        let filters = filters
            .into_iter()
            .map(|f| match self.filters.get(&f.key) {
                Some(value) => {
                    let value = match f.kind {
                        FilterKind::Checkbox { .. } => FilterInput::Many(value.values()),
                        FilterKind::Text => value.clone(),
                    };
                    f.with_value(value)
                }
                None => f,
            })
            .collect();

        let mut store = TableStore::new(columns, self.pagination())
            .with_filters(filters)
            .with_sort(sort_by);
        store.set_filter_value(filter_value);
        store
    }
}
