//! Page slicing for listing results

use crate::error::{ListingError, Result};

/// Return page `page_number` (1-based) of `items`, `page_size` items per page.
///
/// Pages past the end and page numbers below 1 yield an empty page. A page
/// that runs past the end is clipped.
pub fn paginate<T>(items: Vec<T>, page_size: usize, page_number: i64) -> Vec<T> {
    if page_number < 1 || page_size == 0 {
        return Vec::new();
    }

    let start = usize::try_from(page_number - 1)
        .ok()
        .and_then(|index| index.checked_mul(page_size));

    match start {
        Some(start) if start < items.len() => {
            items.into_iter().skip(start).take(page_size).collect()
        }
        _ => Vec::new(),
    }
}

/// Number of pages needed for `total_items` at `page_size` items per page
pub fn total_pages(total_items: usize, page_size: usize) -> Result<usize> {
    if page_size == 0 {
        return Err(ListingError::DivisionByZero);
    }
    Ok(total_items.div_ceil(page_size))
}
