use crate::sort::Direction;

pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Per-list view state. Created when the screen is activated and discarded
/// when the user navigates away; never persisted.
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Normalized (trimmed, lower-cased) filter query.
    pub query: String,
    /// Selected sort column and direction; `None` leaves the filtered order
    /// untouched.
    pub sort: Option<(String, Direction)>,
    pub page_index: usize,
    pub page_size: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            query: String::new(),
            sort: None,
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ViewState {
    /// Re-filtering always jumps back to the first page, since a narrower
    /// result set can make the current page index invalid.
    pub fn set_query(&mut self, raw: &str) {
        self.query = raw.trim().to_lowercase();
        self.page_index = 0;
    }

    pub fn set_sort(&mut self, column: &str, direction: Option<Direction>) {
        self.sort = direction.map(|direction| (column.to_owned(), direction));
    }

    /// Changing the page size keeps the page index as-is, which can yield an
    /// empty page. That mirrors the original paginator behavior; see the
    /// design notes before "fixing" it.
    pub fn set_page(&mut self, index: usize, size: usize) {
        self.page_index = index;
        if size > 0 {
            self.page_size = size;
        }
    }
}
