//! Errors reported for invalid pager configurations

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PagerError {
    #[error("total page count must be at least 1")]
    EmptyTotal,
    #[error("visible page count must be at least 1")]
    ZeroVisibleCount,
    #[error("current page {current} is outside 1..={total}")]
    CurrentOutOfRange { current: usize, total: usize },
    #[error("page count {0} is too large")]
    Overflow(usize),
}
