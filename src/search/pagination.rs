//! Slicing of the flattened result list into pages.

use super::types::{Pagination, RelatedTopic};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub data: Vec<RelatedTopic>,
    pub pagination: Pagination,
}

/// Computes the visible slice and page metadata for the requested page.
///
/// `page` and `page_size` are validated (>= 1) by the request layer before
/// this runs. The requested page is reported verbatim: asking for a page past
/// the end yields an empty slice, not an error and not a clamped page number.
pub fn paginate(items: Vec<RelatedTopic>, page: usize, page_size: usize) -> Page {
    let total_items = items.len();

    if total_items == 0 {
        return Page {
            data: Vec::new(),
            pagination: Pagination {
                total_items: 0,
                total_pages: 1,
                current_page: page,
                page_size,
                has_next_page: false,
                has_previous_page: false,
            },
        };
    }

    let total_pages = total_items.div_ceil(page_size);
    let offset = (page - 1) * page_size;
    let data: Vec<RelatedTopic> = items.into_iter().skip(offset).take(page_size).collect();

    Page {
        data,
        pagination: Pagination {
            total_items,
            total_pages,
            current_page: page,
            page_size,
            has_next_page: page < total_pages,
            has_previous_page: page > 1,
        },
    }
}
