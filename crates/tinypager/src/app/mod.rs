//! Interactive pager state

use crate::config::TitlesConfig;
use crate::render::{self, ItemKey, PagerItem};
use tinypager_core::{PageIndex, Pager};

/// Screen position of a drawn item, for mouse hit-testing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemArea {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub item: PagerItem,
}

impl ItemArea {
    fn contains(&self, column: u16, row: u16) -> bool {
        row == self.y && column >= self.x && column < self.x.saturating_add(self.width)
    }
}

/// The main application state
pub struct App {
    pub pager: Pager,
    pub titles: TitlesConfig,
    /// Item under the mouse pointer
    pub hovered: Option<ItemKey>,
    /// Digits typed for a page jump
    pub pending_jump: Option<usize>,
    /// Feedback shown in the status bar
    pub message: Option<String>,
    /// Item positions from the last draw
    pub item_areas: Vec<ItemArea>,
    /// Whether the help line is shown
    pub show_help: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(pager: Pager, titles: TitlesConfig) -> Self {
        Self {
            pager,
            titles,
            hovered: None,
            pending_jump: None,
            message: None,
            item_areas: Vec::new(),
            show_help: false,
            should_quit: false,
        }
    }

    pub fn items(&self) -> Vec<PagerItem> {
        render::items(&self.pager, &self.titles)
    }

    pub fn current(&self) -> PageIndex {
        self.pager.current()
    }

    /// Single entry point for page changes
    pub fn change_to(&mut self, page: PageIndex) -> bool {
        match self.pager.goto(page) {
            Ok(changed) => {
                if changed {
                    tracing::debug!(page, "changed page");
                    self.message = None;
                    self.refresh_hover();
                }
                changed
            }
            Err(err) => {
                tracing::debug!(page, %err, "rejected page change");
                self.message = Some(err.to_string());
                false
            }
        }
    }

    pub fn prev_page(&mut self) -> bool {
        match self.pager.prev_target() {
            Some(page) => self.change_to(page),
            None => false,
        }
    }

    pub fn next_page(&mut self) -> bool {
        match self.pager.next_target() {
            Some(page) => self.change_to(page),
            None => false,
        }
    }

    pub fn first_page(&mut self) -> bool {
        self.change_to(1)
    }

    pub fn last_page(&mut self) -> bool {
        self.change_to(self.pager.total())
    }

    pub fn push_jump_digit(&mut self, digit: u8) {
        let current = self.pending_jump.unwrap_or(0);
        self.pending_jump = Some(current.saturating_mul(10).saturating_add(digit as usize));
    }

    pub fn pop_jump_digit(&mut self) {
        self.pending_jump = self.pending_jump.map(|n| n / 10).filter(|n| *n > 0);
    }

    pub fn cancel_jump(&mut self) {
        self.pending_jump = None;
    }

    /// Jump to the typed page; out-of-range pages keep the current one
    pub fn commit_jump(&mut self) -> bool {
        match self.pending_jump.take() {
            Some(page) => self.change_to(page),
            None => false,
        }
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    fn item_at(&self, column: u16, row: u16) -> Option<&PagerItem> {
        self.item_areas
            .iter()
            .find(|area| area.contains(column, row))
            .map(|area| &area.item)
    }

    pub fn handle_click(&mut self, column: u16, row: u16) -> bool {
        let target = self
            .item_at(column, row)
            .filter(|item| item.is_clickable())
            .and_then(|item| item.target);
        match target {
            Some(page) => self.change_to(page),
            None => false,
        }
    }

    /// Track mouse movement; returns true when the hovered item changed
    pub fn handle_hover(&mut self, column: u16, row: u16) -> bool {
        let hovered = self
            .item_at(column, row)
            .filter(|item| item.is_hoverable())
            .and_then(|item| item.key);
        if hovered == self.hovered {
            return false;
        }
        if let Some(old) = self.hovered {
            tracing::debug!(key = %old, "mouse out");
        }
        if let Some(key) = hovered {
            tracing::debug!(key = %key, "mouse over");
        }
        self.hovered = hovered;
        true
    }

    /// Drop the hover when its item is gone or became disabled
    fn refresh_hover(&mut self) {
        let Some(key) = self.hovered else {
            return;
        };
        let still_hoverable = self
            .items()
            .iter()
            .any(|item| item.key == Some(key) && item.is_hoverable());
        if !still_hoverable {
            tracing::debug!(key = %key, "mouse out");
            self.hovered = None;
        }
    }

    /// Target page of the hovered item, if it navigates anywhere
    pub fn hovered_target(&self) -> Option<PageIndex> {
        match self.hovered? {
            ItemKey::Prev => self.pager.prev_target(),
            ItemKey::Next => self.pager.next_target(),
            ItemKey::Page(page) => Some(page),
        }
    }
}
