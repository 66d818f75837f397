//! Pager configuration

use crate::error::PagerError;
use serde::{Deserialize, Serialize};

/// A 1-based page number
pub type PageIndex = usize;

/// Inputs of a single pager render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Currently selected page
    pub current: PageIndex,
    /// Number of pages
    pub total: usize,
    /// Size of the window shown around the current page
    pub visible_count: usize,
    /// Pages pinned at each end of the pager
    pub fixed_count: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            current: 1,
            total: 20,
            visible_count: 5,
            fixed_count: 1,
        }
    }
}

impl PaginationConfig {
    pub fn new(current: PageIndex, total: usize, visible_count: usize, fixed_count: usize) -> Self {
        Self {
            current,
            total,
            visible_count,
            fixed_count,
        }
    }

    /// Same config pointing at another page (not validated)
    pub fn with_current(self, current: PageIndex) -> Self {
        Self { current, ..self }
    }

    /// Check the caller contract: a non-empty page set, a non-empty window
    /// and a current page inside `1..=total`.
    pub fn validate(&self) -> Result<(), PagerError> {
        if self.total == 0 {
            return Err(PagerError::EmptyTotal);
        }
        if self.visible_count == 0 {
            return Err(PagerError::ZeroVisibleCount);
        }
        if self.current == 0 || self.current > self.total {
            return Err(PagerError::CurrentOutOfRange {
                current: self.current,
                total: self.total,
            });
        }
        Ok(())
    }

    pub fn is_first(&self) -> bool {
        self.current <= 1
    }

    pub fn is_last(&self) -> bool {
        self.current >= self.total
    }
}
