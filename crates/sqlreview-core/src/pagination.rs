use serde::Serialize;
use sqlreview_types::StatementPage;

/// Fixed page size of the statement list
pub const SQL_PAGE_SIZE: u32 = 10;

/// Pages shown on each side of the current page
const WINDOW_RADIUS: u32 = 2;

/// Navigation controls for a paginated list.
///
/// Only exists when there is more than one page. `previous`/`next` are `None`
/// when the corresponding control is disabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    pub current: u32,
    pub total_pages: u32,
    pub total_items: u64,
    pub pages: Vec<u32>,
    pub previous: Option<u32>,
    pub next: Option<u32>,
}

impl PageWindow {
    pub fn new(current: u32, total_pages: u32, total_items: u64) -> Option<Self> {
        if total_pages <= 1 {
            return None;
        }

        let start = current.saturating_sub(WINDOW_RADIUS).max(1);
        let end = current.saturating_add(WINDOW_RADIUS).min(total_pages);

        Some(Self {
            current,
            total_pages,
            total_items,
            pages: (start..=end).collect(),
            previous: (current > 1).then(|| current - 1),
            next: (current < total_pages).then(|| current + 1),
        })
    }

    /// Navigation for a fetched page; an empty page gets none.
    pub fn for_page(page: &StatementPage) -> Option<Self> {
        if page.items.is_empty() {
            return None;
        }
        Self::new(page.page, page.pages, page.total)
    }

    pub fn is_first(&self) -> bool {
        self.previous.is_none()
    }

    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_page_has_no_navigation() {
        assert!(PageWindow::new(1, 1, 7).is_none());
        assert!(PageWindow::new(1, 0, 0).is_none());
    }

    #[test]
    fn test_first_page_disables_previous() {
        let window = PageWindow::new(1, 5, 48).unwrap();
        assert!(window.is_first());
        assert_eq!(window.next, Some(2));
        assert_eq!(window.pages, vec![1, 2, 3]);
    }

    #[test]
    fn test_last_page_disables_next() {
        let window = PageWindow::new(5, 5, 48).unwrap();
        assert!(window.is_last());
        assert_eq!(window.previous, Some(4));
        assert_eq!(window.pages, vec![3, 4, 5]);
    }

    #[test]
    fn test_window_is_clamped_both_sides() {
        let window = PageWindow::new(4, 9, 90).unwrap();
        assert_eq!(window.pages, vec![2, 3, 4, 5, 6]);

        let window = PageWindow::new(2, 3, 25).unwrap();
        assert_eq!(window.pages, vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_page_has_no_navigation() {
        let page = StatementPage {
            items: vec![],
            page: 4,
            page_size: SQL_PAGE_SIZE,
            pages: 3,
            total: 30,
        };
        assert!(PageWindow::for_page(&page).is_none());
    }
}
