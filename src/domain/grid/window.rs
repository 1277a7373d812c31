pub const MAX_VISIBLE_PAGES: i64 = 5;

/// Page numbers to render in the pagination strip: all of them when they fit,
/// otherwise a window of `max_visible` centered on the current page and
/// shifted back inside `[1, total_pages]` at the edges.
pub fn visible_pages(current_page: i64, total_pages: i64, max_visible: i64) -> Vec<i64> {
    if total_pages <= 0 || max_visible <= 0 {
        return Vec::new();
    }
    if total_pages <= max_visible {
        return (1..=total_pages).collect();
    }

    let mut start = (current_page - 2).max(1);
    let end = (start + max_visible - 1).min(total_pages);
    if end - start < max_visible - 1 {
        start = (end - max_visible + 1).max(1);
    }
    (start..=end).collect()
}
