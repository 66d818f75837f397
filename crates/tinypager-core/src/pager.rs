//! Page navigation over a validated configuration

use crate::config::{PageIndex, PaginationConfig};
use crate::descriptor::{build_descriptors, PageDescriptor};
use crate::error::PagerError;
use crate::range::{classify_range, range_for, Range, RangeCase};
use serde::{Deserialize, Serialize};

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagerView {
    pub config: PaginationConfig,
    pub range: Range,
    pub case: RangeCase,
    pub pages: Vec<PageDescriptor>,
}

/// Holds the current page and keeps it inside `1..=total`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    config: PaginationConfig,
}

impl Pager {
    pub fn new(config: PaginationConfig) -> Result<Self, PagerError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PaginationConfig {
        &self.config
    }

    pub fn current(&self) -> PageIndex {
        self.config.current
    }

    pub fn total(&self) -> usize {
        self.config.total
    }

    /// Previous page, `None` on the first page
    pub fn prev_target(&self) -> Option<PageIndex> {
        (!self.config.is_first()).then(|| self.config.current - 1)
    }

    /// Next page, `None` on the last page
    pub fn next_target(&self) -> Option<PageIndex> {
        (!self.config.is_last()).then(|| self.config.current + 1)
    }

    /// Move to the previous page
    pub fn prev(&mut self) -> bool {
        match self.prev_target() {
            Some(page) => {
                self.config.current = page;
                true
            }
            None => false,
        }
    }

    /// Move to the next page
    pub fn next(&mut self) -> bool {
        match self.next_target() {
            Some(page) => {
                self.config.current = page;
                true
            }
            None => false,
        }
    }

    /// Jump to `page`. Returns `Ok(false)` when already there.
    pub fn goto(&mut self, page: PageIndex) -> Result<bool, PagerError> {
        let config = self.config.with_current(page);
        config.validate()?;
        let changed = page != self.config.current;
        self.config = config;
        Ok(changed)
    }

    pub fn goto_first(&mut self) -> bool {
        self.goto(1).unwrap_or(false)
    }

    pub fn goto_last(&mut self) -> bool {
        self.goto(self.config.total).unwrap_or(false)
    }

    pub fn range(&self) -> Range {
        // config is validated on every mutation
        range_for(&self.config).unwrap_or(Range::new(1, self.config.total))
    }

    pub fn descriptors(&self) -> Vec<PageDescriptor> {
        build_descriptors(&self.config, self.range())
    }

    pub fn view(&self) -> Result<PagerView, PagerError> {
        let range = range_for(&self.config)?;
        Ok(PagerView {
            config: self.config,
            range,
            case: classify_range(&self.config)?,
            pages: build_descriptors(&self.config, range),
        })
    }
}
