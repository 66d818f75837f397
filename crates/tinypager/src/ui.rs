//! UI rendering for the interactive pager

use crate::app::{App, ItemArea};
use crate::render::{ItemKey, PagerItem};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const HELP_LINES: &[(&str, &str)] = &[
    ("h / ←", "previous page"),
    ("l / →", "next page"),
    ("g / Home", "first page"),
    ("G / End", "last page"),
    ("0-9 Enter", "jump to page"),
    ("click", "select page"),
    ("?", "toggle help"),
    ("q / Esc", "quit"),
];

/// Main drawing function
pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Pager
            Constraint::Min(0),    // Help
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_pager(frame, app, chunks[0]);
    if app.show_help {
        draw_help(frame, chunks[1]);
    }
    draw_status_bar(frame, app, chunks[2]);
}

fn item_style(item: &PagerItem, hovered: Option<ItemKey>) -> Style {
    let mut style = if item.selected {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else if item.disabled || item.key.is_none() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    };
    if item.key.is_some() && item.key == hovered && !item.disabled {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    style
}

fn label_width(label: &str) -> u16 {
    u16::try_from(UnicodeWidthStr::width(label)).unwrap_or(u16::MAX)
}

/// Draw the pager row centered in a bordered block and record hit areas
fn draw_pager(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" tinypager ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    app.item_areas.clear();
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let items = app.items();
    let widths: Vec<u16> = items.iter().map(|item| label_width(&item.label)).collect();
    let gaps = u16::try_from(items.len().saturating_sub(1)).unwrap_or(u16::MAX);
    let row_width = widths
        .iter()
        .fold(gaps, |total, width| total.saturating_add(*width));
    let start_x = inner.x + inner.width.saturating_sub(row_width) / 2;

    let mut spans = Vec::with_capacity(items.len() * 2);
    let mut x = start_x;
    for (i, (item, width)) in items.into_iter().zip(widths).enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
            x = x.saturating_add(1);
        }
        spans.push(Span::styled(item.label.clone(), item_style(&item, app.hovered)));
        app.item_areas.push(ItemArea {
            x,
            y: inner.y,
            width,
            item,
        });
        x = x.saturating_add(width);
    }

    let row_area = Rect {
        x: start_x,
        y: inner.y,
        width: inner.right().saturating_sub(start_x),
        height: 1,
    };
    frame.render_widget(Paragraph::new(Line::from(spans)), row_area);
}

fn draw_help(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = HELP_LINES
        .iter()
        .map(|(keys, action)| {
            Line::from(vec![
                Span::styled(format!(" {:<10}", keys), Style::default().fg(Color::Cyan)),
                Span::styled(*action, Style::default().fg(Color::Gray)),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let muted = Style::default().fg(Color::DarkGray);
    let mut spans = vec![
        Span::styled(" page ", muted),
        Span::styled(
            format!("{}/{}", app.current(), app.pager.total()),
            Style::default().fg(Color::White),
        ),
    ];

    if let Some(page) = app.pending_jump {
        spans.push(Span::styled("  goto ", muted));
        spans.push(Span::styled(page.to_string(), Style::default().fg(Color::Yellow)));
    }

    if let Some(key) = app.hovered {
        spans.push(Span::styled(format!("  {}", key), muted));
        if let Some(target) = app.hovered_target() {
            spans.push(Span::styled(format!(" → {}", target), muted));
        }
    }

    if let Some(message) = &app.message {
        spans.push(Span::styled(
            format!("  {}", message),
            Style::default().fg(Color::Red),
        ));
    }

    if !app.show_help {
        spans.push(Span::styled("  ? help", muted));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
