use super::fetch::FetchDescriptor;
use super::filter::FilterValue;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PER_PAGE: u32 = 20;
pub const PER_PAGE_OPTIONS: [u32; 4] = [5, 10, 20, 50];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub limit: u32,
    pub offset: u32,
    #[serde(default)]
    pub count: u32,
    /// Hides the bottom pagination, e.g. inside modals
    #[serde(default)]
    pub no_bottom: bool,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PER_PAGE, 0, 0)
    }
}

impl Pagination {
    pub fn new(limit: u32, offset: u32, count: u32) -> Self {
        Self {
            limit,
            offset,
            count,
            no_bottom: false,
        }
    }

    pub fn without_bottom(mut self) -> Self {
        self.no_bottom = true;
        self
    }

    /// 1-based page for the current offset
    pub fn page(&self) -> u32 {
        match self.limit {
            0 => 1,
            limit => self.offset / limit + 1,
        }
    }

    pub fn page_count(&self) -> u32 {
        match self.limit {
            0 => 1,
            limit => self.count.div_ceil(limit).max(1),
        }
    }

    /// Range of items shown, 1-based and inclusive; `None` when nothing is shown
    pub fn shown_range(&self) -> Option<(u32, u32)> {
        if self.count == 0 || self.offset >= self.count {
            return None;
        }
        let last = self.offset.saturating_add(self.limit).min(self.count);
        Some((self.offset + 1, last))
    }
}

/// Props for a pagination control, bound to the current filter and sort so
/// that paging re-fetches the same query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationControls {
    pub item_count: u32,
    pub page: u32,
    pub per_page: u32,
    pub per_page_options: Vec<u32>,
    pub is_disabled: bool,
    pagination: Pagination,
    filter_value: FilterValue,
    order_by: Option<String>,
}

impl PaginationControls {
    pub fn build(
        pagination: &Pagination,
        filter_value: &FilterValue,
        order_by: Option<&str>,
    ) -> Self {
        Self {
            item_count: pagination.count,
            page: pagination.page(),
            per_page: pagination.limit,
            per_page_options: PER_PAGE_OPTIONS.to_vec(),
            is_disabled: pagination.count == 0,
            pagination: *pagination,
            filter_value: filter_value.clone(),
            order_by: order_by.map(str::to_string),
        }
    }

    pub fn page_count(&self) -> u32 {
        self.pagination.page_count()
    }

    pub fn shown_range(&self) -> Option<(u32, u32)> {
        self.pagination.shown_range()
    }

    /// "1 - 10 of 45" style summary
    pub fn summary(&self) -> String {
        match self.shown_range() {
            Some((first, last)) => format!("{first} - {last} of {}", self.item_count),
            None => format!("0 of {}", self.item_count),
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count()
    }

    /// Descriptor for jumping to the 1-based `page`
    pub fn set_page(&self, page: u32) -> FetchDescriptor {
        let offset = page.saturating_sub(1).saturating_mul(self.pagination.limit);
        self.descriptor().with_offset(offset)
    }

    /// Descriptor for a new page size, restarting at the first page
    pub fn per_page_select(&self, per_page: u32) -> FetchDescriptor {
        self.descriptor().with_offset(0).with_limit(per_page)
    }

    fn descriptor(&self) -> FetchDescriptor {
        FetchDescriptor::from_pagination(&self.pagination)
            .with_filter_value(&self.filter_value)
            .with_order_by(self.order_by.clone())
    }
}
