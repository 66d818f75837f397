//! Page descriptors: the ordered items a pager renders

use crate::config::{PageIndex, PaginationConfig};
use crate::error::PagerError;
use crate::range::{range_for, Range};
use serde::{Deserialize, Serialize};

/// One item of the pager between the prev and next controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageDescriptor {
    /// A clickable page, keyed by its index
    Page { index: PageIndex, selected: bool },
    /// Placeholder for hidden pages (no key, not interactive)
    Ellipsis,
}

impl PageDescriptor {
    pub fn page(index: PageIndex, current: PageIndex) -> Self {
        PageDescriptor::Page {
            index,
            selected: index == current,
        }
    }

    /// Page index, `None` for an ellipsis
    pub fn index(&self) -> Option<PageIndex> {
        match self {
            PageDescriptor::Page { index, .. } => Some(*index),
            PageDescriptor::Ellipsis => None,
        }
    }

    pub fn is_selected(&self) -> bool {
        matches!(self, PageDescriptor::Page { selected: true, .. })
    }

    pub fn is_ellipsis(&self) -> bool {
        matches!(self, PageDescriptor::Ellipsis)
    }
}

/// Lay out pinned pages, ellipses and the window for `range`.
///
/// The trailing block runs from `total - fixed_count - 1` to `total`, so the
/// last two pages stay visible even without fixed pages. Pinned pages are
/// clipped so they never repeat a page of the window.
pub fn build_descriptors(config: &PaginationConfig, range: Range) -> Vec<PageDescriptor> {
    let PaginationConfig {
        current,
        total,
        fixed_count,
        ..
    } = *config;

    if range.is_empty() {
        return Vec::new();
    }

    let mut pages = Vec::with_capacity(range.len() + 2 * fixed_count.min(total) + 4);

    if !range.touches_start() {
        let leading_end = fixed_count.min(range.from.saturating_sub(1));
        pages.extend((1..=leading_end).map(|index| PageDescriptor::page(index, current)));
        pages.push(PageDescriptor::Ellipsis);
    }

    pages.extend(range.iter().map(|index| PageDescriptor::page(index, current)));

    if !range.touches_end(total) {
        pages.push(PageDescriptor::Ellipsis);
        let trailing_start = total
            .saturating_sub(fixed_count.saturating_add(1))
            .max(1)
            .max(range.to + 1);
        pages.extend((trailing_start..=total).map(|index| PageDescriptor::page(index, current)));
    }

    pages
}

/// Validate `config` and build its full descriptor sequence.
pub fn describe(config: &PaginationConfig) -> Result<Vec<PageDescriptor>, PagerError> {
    let range = range_for(config)?;
    Ok(build_descriptors(config, range))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::{classify_range, RangeCase};

    const E: Option<usize> = None;

    fn layout(current: usize, total: usize, visible: usize, fixed: usize) -> Vec<Option<usize>> {
        describe(&PaginationConfig::new(current, total, visible, fixed))
            .unwrap()
            .iter()
            .map(PageDescriptor::index)
            .collect()
    }

    fn pages(items: &[usize]) -> Vec<Option<usize>> {
        items.iter().copied().map(Some).collect()
    }

    #[test]
    fn test_first_page_layout() {
        let mut expected = pages(&[1, 2, 3, 4, 5]);
        expected.push(E);
        expected.extend(pages(&[18, 19, 20]));
        assert_eq!(layout(1, 20, 5, 1), expected);
    }

    #[test]
    fn test_last_page_layout() {
        let mut expected = vec![Some(1), E];
        expected.extend(pages(&[16, 17, 18, 19, 20]));
        assert_eq!(layout(20, 20, 5, 1), expected);
    }

    #[test]
    fn test_middle_page_layout() {
        let mut expected = vec![Some(1), E];
        expected.extend(pages(&[8, 9, 10, 11, 12]));
        expected.push(E);
        expected.extend(pages(&[18, 19, 20]));
        assert_eq!(layout(10, 20, 5, 1), expected);
    }

    #[test]
    fn test_short_total_has_no_ellipsis() {
        assert_eq!(layout(2, 4, 5, 1), pages(&[1, 2, 3, 4]));
    }

    #[test]
    fn test_two_fixed_pages() {
        let mut expected = vec![Some(1), Some(2), E];
        expected.extend(pages(&[13, 14, 15, 16, 17]));
        expected.push(E);
        expected.extend(pages(&[27, 28, 29, 30]));
        assert_eq!(layout(15, 30, 5, 2), expected);
    }

    #[test]
    fn test_no_fixed_pages() {
        let mut expected = vec![E];
        expected.extend(pages(&[8, 9, 10, 11, 12]));
        expected.extend([E, Some(19), Some(20)]);
        assert_eq!(layout(10, 20, 5, 0), expected);
    }

    #[test]
    fn test_no_fixed_pages_keeps_last_page() {
        let items = describe(&PaginationConfig::new(10, 20, 5, 0)).unwrap();
        assert_eq!(items.last(), Some(&PageDescriptor::page(20, 10)));

        let items = describe(&PaginationConfig::new(1, 20, 5, 0)).unwrap();
        assert_eq!(items.last().and_then(PageDescriptor::index), Some(20));
    }

    #[test]
    fn test_pinned_pages_skip_window_pages() {
        // clamped window 1..=22 leaves only page 23 for the trailing pins
        let items = layout(1, 23, 22, 2);
        let mut expected: Vec<Option<usize>> = (1..=22).map(Some).collect();
        expected.extend([E, Some(23)]);
        assert_eq!(items, expected);
    }

    #[test]
    fn test_clamped_window_reaching_trailing_pins() {
        // window 1..=18 overlaps the trailing block 18..=20
        let config = PaginationConfig::new(1, 20, 18, 1);
        assert_eq!(classify_range(&config), Ok(RangeCase::ClampStart));

        let items = layout(1, 20, 18, 1);
        let mut expected: Vec<Option<usize>> = (1..=18).map(Some).collect();
        expected.extend([E, Some(19), Some(20)]);
        assert_eq!(items, expected);
    }

    #[test]
    fn test_inverted_range_builds_nothing() {
        let config = PaginationConfig::default();
        assert!(build_descriptors(&config, Range::new(5, 4)).is_empty());
    }

    #[test]
    fn test_selected_flag() {
        let items = describe(&PaginationConfig::new(10, 20, 5, 1)).unwrap();
        let selected: Vec<_> = items.iter().filter(|d| d.is_selected()).collect();
        assert_eq!(
            selected,
            vec![&PageDescriptor::Page {
                index: 10,
                selected: true
            }]
        );
    }

    #[test]
    fn test_invalid_config_builds_nothing() {
        assert_eq!(
            describe(&PaginationConfig::new(1, 0, 5, 1)),
            Err(PagerError::EmptyTotal)
        );
    }

    #[test]
    fn test_descriptor_invariants() {
        for total in 1..=25 {
            for visible in 1..=8 {
                for fixed in 0..=3 {
                    for current in 1..=total {
                        let config = PaginationConfig::new(current, total, visible, fixed);
                        let items = describe(&config).unwrap();
                        let label = format!("{config:?} -> {items:?}");

                        for pair in items.windows(2) {
                            assert!(!(pair[0].is_ellipsis() && pair[1].is_ellipsis()), "{label}");
                        }

                        let indexes: Vec<usize> = items.iter().filter_map(|d| d.index()).collect();
                        assert!(indexes.windows(2).all(|w| w[0] < w[1]), "{label}");

                        let selected: Vec<_> =
                            items.iter().filter(|d| d.is_selected()).collect();
                        assert_eq!(selected.len(), 1, "{label}");
                        assert_eq!(selected[0].index(), Some(current), "{label}");

                        assert_eq!(items.last().and_then(PageDescriptor::index), Some(total), "{label}");
                        if fixed >= 1 {
                            assert_eq!(indexes.first(), Some(&1), "{label}");
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_serialized_shape() {
        let page = serde_json::to_value(PageDescriptor::page(3, 3)).unwrap();
        assert_eq!(
            page,
            serde_json::json!({"kind": "page", "index": 3, "selected": true})
        );
        let ellipsis = serde_json::to_value(PageDescriptor::Ellipsis).unwrap();
        assert_eq!(ellipsis, serde_json::json!({"kind": "ellipsis"}));
    }
}
