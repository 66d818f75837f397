//! Visible page range calculation
//!
//! The window is the run of pages drawn around the current page. Close to
//! either end of the page set the window would overlap the pinned pages or
//! run past `1..=total`, so those zones collapse or clamp the window instead
//! of sliding it.

use crate::config::{PageIndex, PaginationConfig};
use crate::error::PagerError;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Inclusive interval of pages, `from <= to`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    pub from: PageIndex,
    pub to: PageIndex,
}

impl Range {
    pub fn new(from: PageIndex, to: PageIndex) -> Self {
        Self { from, to }
    }

    /// Number of pages in the range
    pub fn len(&self) -> usize {
        (self.to + 1).saturating_sub(self.from)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, page: PageIndex) -> bool {
        self.from <= page && page <= self.to
    }

    /// Pages in ascending order
    pub fn iter(&self) -> RangeInclusive<PageIndex> {
        self.from..=self.to
    }

    /// True if the range reaches page 1
    pub fn touches_start(&self) -> bool {
        self.from == 1
    }

    /// True if the range reaches the last page
    pub fn touches_end(&self, total: usize) -> bool {
        self.to == total
    }
}

/// Which boundary rule produced a range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeCase {
    /// Window reaches both pinned regions: every page is shown
    Whole,
    /// Window runs off page 1: full-size window starting at 1
    ClampStart,
    /// Window reaches the leading pinned region only
    CollapseStart,
    /// Window runs off the last page: full-size window ending at total
    ClampEnd,
    /// Window reaches the trailing pinned region only
    CollapseEnd,
    /// Plain window centered on the current page
    Window,
}

/// Signed view of the inputs so the window may hang past either end
struct Bounds {
    total: i64,
    visible: i64,
    window_start: i64,
    window_end: i64,
    ellipsis_start: i64,
    ellipsis_end: i64,
}

impl Bounds {
    fn new(config: &PaginationConfig) -> Result<Self, PagerError> {
        config.validate()?;

        let current = signed(config.current)?;
        let total = signed(config.total)?;
        let visible = signed(config.visible_count)?;
        let fixed = signed(config.fixed_count)?;

        let half = visible / 2;
        // Even windows keep the shorter side after the current page
        let tail = if visible % 2 == 0 { half - 1 } else { half };
        let ellipsis_start = fixed.saturating_add(2);

        Ok(Self {
            total,
            visible,
            window_start: current - half,
            window_end: current.saturating_add(tail),
            ellipsis_start,
            ellipsis_end: total - ellipsis_start,
        })
    }

    /// First matching rule wins; the zones overlap.
    fn classify(&self) -> RangeCase {
        let Bounds {
            total,
            window_start: start,
            window_end: end,
            ellipsis_start: head,
            ellipsis_end: tail,
            ..
        } = *self;

        if start <= head && tail < end {
            RangeCase::Whole
        } else if start < 1 && end < tail {
            RangeCase::ClampStart
        } else if start <= head && end <= tail {
            RangeCase::CollapseStart
        } else if head < start && total <= end {
            RangeCase::ClampEnd
        } else if head < start && tail < end {
            RangeCase::CollapseEnd
        } else {
            RangeCase::Window
        }
    }

    fn resolve(&self, case: RangeCase) -> Range {
        let (from, to) = match case {
            RangeCase::Whole => (1, self.total),
            RangeCase::ClampStart => (1, self.visible.min(self.total)),
            RangeCase::CollapseStart => (1, self.window_end),
            RangeCase::ClampEnd => ((self.total - self.visible + 1).max(1), self.total),
            RangeCase::CollapseEnd => (self.window_start, self.total),
            RangeCase::Window => (self.window_start, self.window_end),
        };
        Range::new(page(from), page(to))
    }
}

fn signed(value: usize) -> Result<i64, PagerError> {
    i64::try_from(value).map_err(|_| PagerError::Overflow(value))
}

// Every rule yields values in 1..=total once the config is valid.
fn page(value: i64) -> PageIndex {
    value.max(1) as PageIndex
}

/// Compute the window of pages to show, independent of the pinned ends.
pub fn compute_range(
    current: PageIndex,
    total: usize,
    visible_count: usize,
    fixed_count: usize,
) -> Result<Range, PagerError> {
    range_for(&PaginationConfig::new(current, total, visible_count, fixed_count))
}

/// [`compute_range`] over a config struct
pub fn range_for(config: &PaginationConfig) -> Result<Range, PagerError> {
    let bounds = Bounds::new(config)?;
    Ok(bounds.resolve(bounds.classify()))
}

/// Name the boundary rule that applies to `config`
pub fn classify_range(config: &PaginationConfig) -> Result<RangeCase, PagerError> {
    Ok(Bounds::new(config)?.classify())
}
