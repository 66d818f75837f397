//! Core engine for tinypager
//!
//! Decides which page numbers a pagination control shows: a window of
//! pages around the current one, pinned pages at both ends and ellipses for
//! the gaps in between. Everything here is pure; rendering lives in the
//! `tinypager` binary.

pub mod config;
pub mod descriptor;
pub mod error;
pub mod pager;
pub mod range;

pub use config::{PageIndex, PaginationConfig};
pub use descriptor::{build_descriptors, describe, PageDescriptor};
pub use error::PagerError;
pub use pager::{Pager, PagerView};
pub use range::{classify_range, compute_range, range_for, Range, RangeCase};
