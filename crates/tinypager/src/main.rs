//! tinypager CLI - pagination layout preview and terminal pager

mod app;
mod config;
mod logging;
mod render;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use config::{Config, PagerOverrides, TitlesConfig};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
        MouseButton, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tinypager_core::Pager;

#[derive(Parser, Debug)]
#[command(name = "tinypager")]
#[command(author, version, about = "Pagination layout: visible pages, pinned ends and ellipses")]
struct Args {
    /// Current page (1-based)
    #[arg(short, long)]
    current: Option<usize>,

    /// Total number of pages
    #[arg(short, long)]
    total: Option<usize>,

    /// Pages shown around the current page
    #[arg(short, long)]
    visible: Option<usize>,

    /// Pages pinned at each end
    #[arg(short, long)]
    fixed: Option<usize>,

    /// Output format for one-shot rendering
    #[arg(long, value_enum, default_value = "text")]
    format: CliFormat,

    /// Open the interactive terminal pager
    #[arg(short, long)]
    interactive: bool,

    /// Config file to use instead of the XDG location
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum CliFormat {
    /// Single line, selected page in brackets, disabled controls in parentheses
    Text,
    /// Config, range, descriptors and controls as JSON
    Json,
}

impl Args {
    fn overrides(&self) -> PagerOverrides {
        PagerOverrides {
            current: self.current,
            total: self.total,
            visible_pages: self.visible,
            fixed_pages: self.fixed,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init();

    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };

    let pagination = config.pagination(&args.overrides());
    tracing::debug!(?pagination, "resolved pager config");

    // Invalid input renders nothing
    let pager = Pager::new(pagination).with_context(|| {
        format!(
            "Invalid pager configuration (current={}, total={}, visible={}, fixed={})",
            pagination.current, pagination.total, pagination.visible_count, pagination.fixed_count
        )
    })?;

    if args.interactive {
        return run_interactive(pager, config.titles);
    }

    let output = match args.format {
        CliFormat::Text => render::text_line(&pager, &config.titles),
        CliFormat::Json => render::json(&pager, &config.titles)?,
    };
    println!("{}", output);

    Ok(())
}

fn run_interactive(pager: Pager, titles: TitlesConfig) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(pager, titles);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let tick_rate = Duration::from_millis(16);

    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(tick_rate)? {
            match event::read()? {
                Event::Mouse(me) => match me.kind {
                    MouseEventKind::Down(MouseButton::Left) => {
                        app.handle_click(me.column, me.row);
                    }
                    MouseEventKind::Moved => {
                        app.handle_hover(me.column, me.row);
                    }
                    MouseEventKind::ScrollUp => {
                        app.prev_page();
                    }
                    MouseEventKind::ScrollDown => {
                        app.next_page();
                    }
                    _ => {}
                },
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    // Digits build a page number, Enter jumps
                    KeyCode::Char(c @ '0'..='9') => {
                        app.push_jump_digit(c as u8 - b'0');
                    }
                    KeyCode::Enter => {
                        app.commit_jump();
                    }
                    KeyCode::Backspace => {
                        app.pop_jump_digit();
                    }
                    KeyCode::Char('q') | KeyCode::Esc => {
                        if app.pending_jump.is_some() {
                            app.cancel_jump();
                        } else if app.show_help {
                            app.show_help = false;
                        } else {
                            app.should_quit = true;
                        }
                    }
                    KeyCode::Left | KeyCode::Char('h') => {
                        app.prev_page();
                    }
                    KeyCode::Right | KeyCode::Char('l') => {
                        app.next_page();
                    }
                    KeyCode::Home | KeyCode::Char('g') => {
                        app.first_page();
                    }
                    KeyCode::End | KeyCode::Char('G') => {
                        app.last_page();
                    }
                    KeyCode::Char('?') => {
                        app.toggle_help();
                    }
                    _ => {}
                },
                _ => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
