/// Page sizes offered by the page-size selector.
pub const PAGE_SIZES: [u64; 4] = [10, 25, 50, 100];
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Falls back to the default when `size` is not one of [`PAGE_SIZES`].
pub fn normalize_page_size(size: u64) -> u64 {
    if PAGE_SIZES.contains(&size) {
        size
    } else {
        DEFAULT_PAGE_SIZE
    }
}

/// Cursor state of a paginated list. Pages and displayed indexes are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub page: u64,
    pub page_size: u64,
    pub previous_page: Option<u64>,
    pub first_in_table: u64,
    pub last_in_table: u64,
    /// Approximation of the total item count, see [`estimate_total`].
    pub total: Option<u64>,
}

impl Pagination {
    pub fn new(page_size: u64) -> Self {
        let mut pagination = Self {
            page: 1,
            page_size: page_size.max(1),
            previous_page: None,
            first_in_table: 1,
            last_in_table: 1,
            total: None,
        };
        pagination.recompute_bounds();
        pagination
    }

    /// 0-based offset of the first displayed item, as sent to the backend.
    pub fn offset(&self) -> u64 {
        self.first_in_table - 1
    }

    pub fn recompute_bounds(&mut self) {
        self.first_in_table = (self.page - 1) * self.page_size + 1;
        self.last_in_table = self.first_in_table + self.page_size - 1;
    }

    /// Moves to `page`. Returns `false` when `page` was the last requested page,
    /// in which case nothing changes and no fetch should be issued.
    pub fn go_to_page(&mut self, page: u64) -> bool {
        let page = page.max(1);
        if self.previous_page == Some(page) {
            return false;
        }
        self.previous_page = Some(page);
        self.page = page;
        self.recompute_bounds();
        true
    }

    /// Applies a new page size, keeping the previously first displayed item
    /// on screen.
    pub fn change_page_size(&mut self, page_size: u64) {
        let page_size = page_size.max(1);
        self.page = self.first_in_table / page_size + 1;
        self.page_size = page_size;
        self.previous_page = Some(self.page);
        self.recompute_bounds();
    }

    /// Back to the first page, e.g. after the search term changed.
    pub fn reset(&mut self) {
        self.page = 1;
        self.previous_page = Some(1);
        self.total = None;
        self.recompute_bounds();
    }

    pub fn total_pages(&self) -> Option<u64> {
        self.total.map(|total| total.div_ceil(self.page_size))
    }

    /// Last index actually shown, clamped by the estimated total when known.
    pub fn last_displayed(&self) -> u64 {
        match self.total {
            Some(total) => self.last_in_table.min(total),
            None => self.last_in_table,
        }
    }
}

/// Approximates the number of items from the offset of the last page and the
/// size of the batch found there.
///
/// The backend has no count endpoint yet; replace this once it does.
pub fn estimate_total(last_page_offset: u64, last_page_len: usize) -> u64 {
    last_page_offset + last_page_len as u64
}
