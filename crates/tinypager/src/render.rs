//! Pager items and one-shot output
//!
//! Turns the core descriptors into the full row a user sees: the prev
//! control, pages and ellipses, then the next control.

use crate::config::TitlesConfig;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt;
use tinypager_core::{PageDescriptor, PageIndex, Pager, PagerView};

/// Key of an interactive item, as reported to hover handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKey {
    Prev,
    Next,
    Page(PageIndex),
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKey::Prev => write!(f, "prev"),
            ItemKey::Next => write!(f, "next"),
            ItemKey::Page(page) => write!(f, "{}", page),
        }
    }
}

/// One rendered item of the pager row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerItem {
    /// `None` for the ellipsis
    pub key: Option<ItemKey>,
    pub label: String,
    /// Page this item navigates to
    pub target: Option<PageIndex>,
    pub selected: bool,
    pub disabled: bool,
}

impl PagerItem {
    /// Clicks on disabled, selected or keyless items are ignored
    pub fn is_clickable(&self) -> bool {
        self.key.is_some() && self.target.is_some() && !self.disabled && !self.selected
    }

    /// Disabled and keyless items never report hover
    pub fn is_hoverable(&self) -> bool {
        self.key.is_some() && !self.disabled
    }
}

/// Build the whole row: prev, descriptors, next
pub fn items(pager: &Pager, titles: &TitlesConfig) -> Vec<PagerItem> {
    let descriptors = pager.descriptors();
    let mut row = Vec::with_capacity(descriptors.len() + 2);

    row.push(PagerItem {
        key: Some(ItemKey::Prev),
        label: titles.prev.clone(),
        target: pager.prev_target(),
        selected: false,
        disabled: pager.prev_target().is_none(),
    });

    row.extend(descriptors.into_iter().map(|descriptor| match descriptor {
        PageDescriptor::Page { index, selected } => PagerItem {
            key: Some(ItemKey::Page(index)),
            label: index.to_string(),
            target: Some(index),
            selected,
            disabled: false,
        },
        PageDescriptor::Ellipsis => PagerItem {
            key: None,
            label: titles.ellipsis.clone(),
            target: None,
            selected: false,
            disabled: false,
        },
    }));

    row.push(PagerItem {
        key: Some(ItemKey::Next),
        label: titles.next.clone(),
        target: pager.next_target(),
        selected: false,
        disabled: pager.next_target().is_none(),
    });

    row
}

/// Plain text row, e.g. `(prev) [1] 2 3 4 5 ... 18 19 20 next`
pub fn text_line(pager: &Pager, titles: &TitlesConfig) -> String {
    items(pager, titles)
        .iter()
        .map(|item| {
            if item.selected {
                format!("[{}]", item.label)
            } else if item.disabled {
                format!("({})", item.label)
            } else {
                item.label.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Serialize)]
struct ControlOutput<'a> {
    title: &'a str,
    target: Option<PageIndex>,
    disabled: bool,
}

#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    #[serde(flatten)]
    view: PagerView,
    prev: ControlOutput<'a>,
    next: ControlOutput<'a>,
}

/// Pretty JSON document with config, range, descriptors and controls
pub fn json(pager: &Pager, titles: &TitlesConfig) -> Result<String> {
    let output = JsonOutput {
        view: pager.view().context("Failed to compute pager view")?,
        prev: ControlOutput {
            title: &titles.prev,
            target: pager.prev_target(),
            disabled: pager.prev_target().is_none(),
        },
        next: ControlOutput {
            title: &titles.next,
            target: pager.next_target(),
            disabled: pager.next_target().is_none(),
        },
    };
    serde_json::to_string_pretty(&output).context("Failed to serialize pager")
}
