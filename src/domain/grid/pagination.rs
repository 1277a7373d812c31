use crate::domain::grid::GridError;

pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Number of pages needed to hold `total_items` rows, zero when there is no data.
pub fn total_pages(total_items: i64, page_size: i64) -> i64 {
    if total_items <= 0 || page_size <= 0 {
        return 0;
    }
    (total_items + page_size - 1) / page_size
}

/// Normalizes a requested page into `[1, max(total_pages, 1)]`. Every page
/// mutation routes through here; page state is never set raw.
pub fn clamp_page(requested: i64, total_pages: i64) -> i64 {
    requested.clamp(1, total_pages.max(1))
}

/// The window of `data` covered by a one-based page, clipped to the data
/// bounds. A page past the end yields an empty slice.
pub fn page_slice<T>(data: &[T], page: i64, page_size: i64) -> &[T] {
    if page < 1 || page_size <= 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= data.len() as i64 {
        return &[];
    }
    let start = start as usize;
    let end = data.len().min(start.saturating_add(page_size as usize));
    &data[start..end]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    current_page: i64,
    page_size: i64,
}

impl Paginator {
    pub fn new(page_size: i64) -> Result<Self, GridError> {
        if page_size <= 0 {
            return Err(GridError::InvalidConfiguration(format!(
                "page size must be positive, got {page_size}"
            )));
        }
        Ok(Self {
            current_page: 1,
            page_size,
        })
    }

    pub fn current_page(&self) -> i64 {
        self.current_page
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    pub fn total_pages(&self, total_items: i64) -> i64 {
        total_pages(total_items, self.page_size)
    }

    pub fn go_to_page(&mut self, requested: i64, total_items: i64) -> i64 {
        self.current_page = clamp_page(requested, self.total_pages(total_items));
        self.current_page
    }

    pub fn next_page(&mut self, total_items: i64) -> i64 {
        self.go_to_page(self.current_page + 1, total_items)
    }

    pub fn prev_page(&mut self, total_items: i64) -> i64 {
        self.go_to_page(self.current_page - 1, total_items)
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    pub fn current_slice<'a, T>(&self, data: &'a [T]) -> &'a [T] {
        page_slice(data, self.current_page, self.page_size)
    }
}
