//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

/// Paginated response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T: Serialize> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Current page number (1-based).
    pub page: u64,
    /// Total number of pages.
    pub total_pages: u64,
}

impl<T: Serialize> PageResponse<T> {
    /// Slice an in-memory collection into a fixed-size page.
    ///
    /// Pages are 1-indexed; `total_pages` is `ceil(total / page_size)`,
    /// so an empty collection has zero pages. A page beyond the last
    /// yields an empty item list rather than an error.
    pub fn slice(all: Vec<T>, page: u64, page_size: u64) -> Self {
        let total = all.len() as u64;
        let total_pages = total.div_ceil(page_size);
        let page = page.max(1);
        let start = (page - 1).saturating_mul(page_size) as usize;

        let items = if start >= all.len() {
            Vec::new()
        } else {
            let end = (start + page_size as usize).min(all.len());
            all.into_iter()
                .skip(start)
                .take(end - start)
                .collect()
        };

        Self {
            items,
            page,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_full_pages() {
        let all: Vec<u32> = (0..31).collect();
        let page = PageResponse::slice(all, 1, 15);
        assert_eq!(page.items.len(), 15);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_slice_last_partial_page() {
        let all: Vec<u32> = (0..31).collect();
        let page = PageResponse::slice(all, 3, 15);
        assert_eq!(page.items, vec![30]);
    }

    #[test]
    fn test_slice_out_of_range_is_empty() {
        let all: Vec<u32> = (0..31).collect();
        let page = PageResponse::slice(all, 4, 15);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_slice_empty_input_has_zero_pages() {
        let page = PageResponse::slice(Vec::<u32>::new(), 1, 15);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn test_slice_exact_multiple() {
        let all: Vec<u32> = (0..30).collect();
        let page = PageResponse::slice(all, 2, 15);
        assert_eq!(page.items.len(), 15);
        assert_eq!(page.total_pages, 2);
    }
}
