use dioxus::prelude::*;

use crate::components::icon::Icon;
use crate::styles::combinations::*;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const PAGE_SIZES: &[usize] = &[10, 20, 50];

/// Zero-based page cursor over a server-paginated row set.
///
/// The cursor itself never clamps: navigation is bounded by disabling the
/// controls instead, and a size change keeps the index even when that
/// leaves it past the end (the page then renders empty until the user
/// navigates).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    pub index: usize,
    pub size: usize,
}

impl PageCursor {
    /// Build from the URL query values. A missing `size` parses as 0 and
    /// falls back to the default.
    pub fn from_query(page: usize, size: usize) -> Self {
        Self {
            index: page,
            size: if size == 0 { DEFAULT_PAGE_SIZE } else { size },
        }
    }

    /// Rows consumed by the pages before this one.
    pub fn skip(&self) -> usize {
        self.index * self.size
    }

    /// Total pages for `total` rows; 0 when there are no rows.
    pub fn page_count(&self, total: usize) -> usize {
        if total == 0 {
            0
        } else {
            total.div_ceil(self.size)
        }
    }

    pub fn can_prev(&self) -> bool {
        self.index > 0
    }

    pub fn can_next(&self, total: usize) -> bool {
        self.index + 1 < self.page_count(total)
    }

    pub fn first(&self) -> Self {
        Self { index: 0, ..*self }
    }

    pub fn prev(&self) -> Self {
        Self { index: self.index.saturating_sub(1), ..*self }
    }

    pub fn next(&self) -> Self {
        Self { index: self.index + 1, ..*self }
    }

    pub fn last(&self, total: usize) -> Self {
        Self { index: self.page_count(total).saturating_sub(1), ..*self }
    }

    /// Change the page size, keeping the index as-is.
    pub fn with_size(&self, size: usize) -> Self {
        Self { index: self.index, size }
    }
}

#[component]
pub fn PaginationControls(
    cursor: PageCursor,
    total: usize,
    on_change: EventHandler<PageCursor>,
) -> Element {
    let page_count = cursor.page_count(total);

    rsx! {
        div {
            class: "flex items-center justify-between px-4 py-3",
            div {
                class: "flex items-center gap-1",
                button {
                    class: BUTTON_PAGER,
                    disabled: !cursor.can_prev(),
                    onclick: move |_| on_change.call(cursor.first()),
                    Icon { icon: &icondata::AiDoubleLeftOutlined, class: "w-4 h-4" }
                }
                button {
                    class: BUTTON_PAGER,
                    disabled: !cursor.can_prev(),
                    onclick: move |_| on_change.call(cursor.prev()),
                    Icon { icon: &icondata::AiLeftOutlined, class: "w-4 h-4" }
                }
            }

            span {
                class: "text-sm text-gray-700",
                "Page "
                strong { "{cursor.index + 1}" }
                " of {page_count}"
            }

            div {
                class: "flex items-center gap-3",
                select {
                    class: "text-sm border border-gray-300 rounded px-2 py-1 bg-white",
                    value: "{cursor.size}",
                    onchange: move |ev| {
                        if let Ok(size) = ev.value().parse::<usize>() {
                            on_change.call(cursor.with_size(size));
                        }
                    },
                    for size in PAGE_SIZES {
                        option { value: "{size}", "{size} / page" }
                    }
                }
                div {
                    class: "flex items-center gap-1",
                    button {
                        class: BUTTON_PAGER,
                        disabled: !cursor.can_next(total),
                        onclick: move |_| on_change.call(cursor.next()),
                        Icon { icon: &icondata::AiRightOutlined, class: "w-4 h-4" }
                    }
                    button {
                        class: BUTTON_PAGER,
                        disabled: !cursor.can_next(total),
                        onclick: move |_| on_change.call(cursor.last(total)),
                        Icon { icon: &icondata::AiDoubleRightOutlined, class: "w-4 h-4" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count_is_ceiling_of_total_over_size() {
        let cursor = PageCursor { index: 0, size: 10 };
        assert_eq!(cursor.page_count(0), 0);
        assert_eq!(cursor.page_count(1), 1);
        assert_eq!(cursor.page_count(10), 1);
        assert_eq!(cursor.page_count(11), 2);
        assert_eq!(cursor.page_count(25), 3);
    }

    #[test]
    fn test_page_count_zero_only_when_empty() {
        for total in 1..=40 {
            let cursor = PageCursor { index: 0, size: 7 };
            assert!(cursor.page_count(total) > 0);
        }
    }

    #[test]
    fn test_prev_disabled_only_on_first_page() {
        assert!(!PageCursor { index: 0, size: 10 }.can_prev());
        assert!(PageCursor { index: 1, size: 10 }.can_prev());
    }

    #[test]
    fn test_next_disabled_on_last_page() {
        let cursor = PageCursor { index: 2, size: 10 };
        // 25 rows -> 3 pages, index 2 is the last.
        assert!(!cursor.can_next(25));
        assert!(PageCursor { index: 1, size: 10 }.can_next(25));
        // Empty set: nowhere to go in either direction.
        assert!(!PageCursor { index: 0, size: 10 }.can_next(0));
    }

    #[test]
    fn test_last_jumps_to_final_index() {
        let cursor = PageCursor { index: 0, size: 10 };
        assert_eq!(cursor.last(25).index, 2);
        assert_eq!(cursor.last(30).index, 2);
        assert_eq!(cursor.last(31).index, 3);
        assert_eq!(cursor.last(0).index, 0);
    }

    #[test]
    fn test_skip_encodes_rows_before_page() {
        assert_eq!(PageCursor { index: 2, size: 10 }.skip(), 20);
        assert_eq!(PageCursor { index: 0, size: 10 }.skip(), 0);
    }

    #[test]
    fn test_size_change_keeps_index() {
        // 25 rows at size 10, page 2 -> switching to size 50 leaves the
        // index out of range; that page renders empty by design.
        let cursor = PageCursor { index: 2, size: 10 }.with_size(50);
        assert_eq!(cursor.index, 2);
        assert_eq!(cursor.page_count(25), 1);
        assert!(!cursor.can_next(25));
    }

    #[test]
    fn test_from_query_defaults_missing_size() {
        assert_eq!(PageCursor::from_query(0, 0).size, DEFAULT_PAGE_SIZE);
        assert_eq!(PageCursor::from_query(3, 20), PageCursor { index: 3, size: 20 });
    }
}
