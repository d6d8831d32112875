//! Stateless slicing of a view into fixed-size pages.

use super::types::models::{PageRequest, PageResult, Poem};

/// Slices `view` into the window named by `request`.
///
/// The window is the zero-based half-open slice
/// `[(page_number - 1) * page_size, (page_number - 1) * page_size + page_size)`.
/// An out-of-range start yields an empty `poems` slice, never an error: the
/// paginator does not clamp, and a caller wanting clamping applies it
/// itself. `total_pages` is computed from the view passed to this call,
/// never from any earlier call, and is at least 1 even for an empty view.
pub fn paginate<'a>(view: &'a [Poem], request: PageRequest) -> PageResult<'a> {
    let PageRequest { page_number, page_size } = request;

    let total_items = view.len();
    let total_pages = total_items.div_ceil(page_size).max(1);

    // page_number is documented as ≥ 1; saturate so that 0 behaves as 1.
    let start = page_number.saturating_sub(1).saturating_mul(page_size);
    let end = start.saturating_add(page_size).min(total_items);
    let poems = if start < total_items { &view[start..end] } else { &[] };

    PageResult {
        poems,
        total_items,
        current_page: page_number,
        total_pages,
        has_more: end < total_items,
    }
}
