use super::TableEvents;
use super::cell::Row;
use super::column::Column;
use super::fetch::FetchDescriptor;
use super::filter::{Filter, FilterValue};
use super::pagination::Pagination;
use super::sort::{SortBy, SortDirection};
use super::view::TableView;
use crate::error::Result;
use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// One page of items returned by a [`ListSource`]
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<R> {
    pub items: Vec<R>,
    pub count: u32,
    pub limit: u32,
    pub offset: u32,
}

impl<R> ListPage<R> {
    pub fn new(items: Vec<R>, count: u32, limit: u32, offset: u32) -> Self {
        Self {
            items,
            count,
            limit,
            offset,
        }
    }
}

/// Port for loading table data (backend client, in-memory fixture, ...)
#[async_trait]
pub trait ListSource<R>: Send + Sync {
    async fn fetch(&self, descriptor: &FetchDescriptor) -> Result<ListPage<R>>;
}

/// Items that can be shown as a table row
pub trait TableRow {
    fn to_row(&self) -> Row;
}

/// Identifier of an issued fetch; only the newest one may land.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

/// Authoritative state of one table across fetches.
///
/// Responses are fenced by request id: a response for anything but the most
/// recently issued request is dropped, so a slow superseded fetch can never
/// overwrite newer rows.
#[derive(Debug, Clone)]
pub struct TableStore<R> {
    columns: Vec<Column>,
    items: Vec<R>,
    pagination: Pagination,
    filter_value: FilterValue,
    filters: Vec<Filter>,
    sort_by: SortBy,
    is_loading: bool,
    error: Option<String>,
    issued: u64,
    pending: Option<FetchDescriptor>,
}

impl<R: Clone> TableStore<R> {
    pub fn new(columns: Vec<Column>, pagination: Pagination) -> Self {
        Self {
            columns,
            items: Vec::new(),
            pagination,
            filter_value: FilterValue::default(),
            filters: Vec::new(),
            sort_by: SortBy::unsorted(),
            is_loading: false,
            error: None,
            issued: 0,
            pending: None,
        }
    }

    pub fn with_filters(mut self, filters: Vec<Filter>) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_sort(mut self, sort_by: SortBy) -> Self {
        self.sort_by = sort_by;
        self
    }

    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn filter_value(&self) -> &FilterValue {
        &self.filter_value
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    pub fn sort_by(&self) -> SortBy {
        self.sort_by
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Descriptor for reloading the current page with the current query
    pub fn current_descriptor(&self) -> FetchDescriptor {
        FetchDescriptor::from_pagination(&self.pagination)
            .with_filter_value(&self.filter_value)
            .with_filters(&self.filters)
            .with_order_by(self.sort_by.order_by(&self.columns))
    }

    /// Fetch requested through [`TableEvents`] and not yet started
    pub fn take_pending(&mut self) -> Option<FetchDescriptor> {
        self.pending.take()
    }

    /// Marks a fetch as started and returns its fencing id
    pub fn begin(&mut self, descriptor: &FetchDescriptor) -> RequestId {
        self.issued += 1;
        self.is_loading = true;
        self.pagination.limit = descriptor.limit;
        self.pagination.offset = descriptor.offset;
        debug!(request = self.issued, ?descriptor, "fetch started");
        RequestId(self.issued)
    }

    /// Applies a response; returns `false` when the response was stale
    pub fn complete(&mut self, id: RequestId, result: Result<ListPage<R>>) -> bool {
        if id.0 != self.issued {
            debug!(request = id.0, newest = self.issued, "dropping stale response");
            return false;
        }
        self.is_loading = false;
        match result {
            Ok(page) => {
                self.items = page.items;
                self.pagination.count = page.count;
                self.pagination.limit = page.limit;
                self.pagination.offset = page.offset;
                self.error = None;
            }
            Err(e) => {
                warn!("Failed to load table data: {}", e);
                self.error = Some(e.to_string());
            }
        }
        true
    }
}

impl<R: Clone + TableRow> TableStore<R> {
    /// Fills the data-bearing props of `base` from this store
    pub fn view(&self, base: TableView) -> TableView {
        TableView {
            columns: self.columns.clone(),
            rows: self.items.iter().map(TableRow::to_row).collect(),
            pagination: Pagination {
                no_bottom: base.pagination.no_bottom,
                ..self.pagination
            },
            filter_value: self.filter_value.clone(),
            filters: self.filters.clone(),
            sort_by: self.sort_by,
            is_loading: self.is_loading,
            ..base
        }
    }
}

impl<R: Clone> TableEvents for TableStore<R> {
    fn set_filter_value(&mut self, value: FilterValue) {
        self.filter_value = value;
    }

    /// Queues `descriptor`; structured filters are carried over when the
    /// caller (e.g. pagination) only knows about the filter value.
    fn fetch_data(&mut self, descriptor: FetchDescriptor) {
        let descriptor = match descriptor.filters {
            None if !self.filters.is_empty() => descriptor.with_filters(&self.filters),
            _ => descriptor,
        };
        self.pending = Some(descriptor);
    }

    fn on_sort(&mut self, column_index: usize, direction: SortDirection) {
        self.sort_by = SortBy {
            index: column_index,
            direction,
            default_direction: self.sort_by.default_direction,
        };
        self.pending = Some(self.current_descriptor());
    }

    fn set_filters(&mut self, filters: Vec<Filter>) {
        self.filters = filters;
    }
}

/// Runs one fetch against `source` and applies it unless superseded meanwhile.
/// Returns whether the response was applied.
pub async fn load<R: Clone + Send>(
    store: &Mutex<TableStore<R>>,
    source: &dyn ListSource<R>,
    descriptor: FetchDescriptor,
) -> bool {
    let id = store.lock().await.begin(&descriptor);
    let result = source.fetch(&descriptor).await;
    store.lock().await.complete(id, result)
}
