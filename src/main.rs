//! kiosktui - TV-remote style terminal kiosk for searching movies & shows
//!
//! Search TMDB, walk the results with Up/Down, select with Enter, and jump
//! to the detail page for the pick.
//!
//! # Usage
//!
//! ```bash
//! # Launch interactive kiosk
//! kiosktui
//!
//! # CLI mode (for automation)
//! kiosktui search "blade runner"
//! kiosktui url 414906 --json
//! ```

use std::io::{stdout, Stdout};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};
use tokio::sync::mpsc;

use kiosktui::api::{SearchError, TmdbClient};
use kiosktui::app::{App, Effect, InputMode, View};
use kiosktui::cli::{Cli, Command, ExitCode, Output};
use kiosktui::commands;
use kiosktui::config::Config;
use kiosktui::focus::Focusable;
use kiosktui::models::SearchResult;
use kiosktui::ui::card::{no_results_line, Card, CARD_ROWS};
use kiosktui::ui::Theme;

/// Terminal type alias for convenience
type Tui = Terminal<CrosstermBackend<Stdout>>;

/// A completed search delivered back to the event loop
struct SearchDone {
    token: u64,
    result: Result<Vec<SearchResult>, SearchError>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.is_cli_mode() {
        // CLI mode: execute command and exit
        let exit_code = run_cli(cli).await;
        std::process::exit(exit_code.into());
    } else {
        // Kiosk mode: launch interactive interface
        run_tui().await
    }
}

/// Run CLI command and return exit code
async fn run_cli(cli: Cli) -> ExitCode {
    let output = Output::new(&cli);

    match cli.command {
        Some(Command::Search(cmd)) => commands::search_cmd(cmd, &output).await,
        Some(Command::Url(cmd)) => commands::url_cmd(cmd, &output),
        None => ExitCode::Success,
    }
}

// =============================================================================
// Kiosk Mode
// =============================================================================

/// Initialize the terminal for TUI mode
fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal to normal state
fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run the interactive kiosk
async fn run_tui() -> Result<()> {
    let config = Config::load();
    // An unusable detail template is the only startup-time failure; a
    // missing API key only blocks search later.
    config.validate()?;

    let mut terminal = init_terminal()?;
    let mut app = App::new(config);

    let result = run_event_loop(&mut terminal, &mut app).await;

    // Always restore terminal, even on error
    restore_terminal(&mut terminal)?;

    result
}

/// Main event loop - handles input, dispatches searches, renders UI
async fn run_event_loop(terminal: &mut Tui, app: &mut App) -> Result<()> {
    const TICK_RATE: Duration = Duration::from_millis(100);

    let client = app.config.api_key().map(TmdbClient::new);
    let (tx, mut rx) = mpsc::unbounded_channel::<SearchDone>();

    while app.running {
        // Render current state
        terminal.draw(|frame| render_ui(frame, app))?;

        // Poll for events with timeout so completed searches get drained
        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (ignore releases on Windows)
                if key.kind == KeyEventKind::Press {
                    match app.handle_key(key) {
                        Some(Effect::Search(job)) => {
                            if let Some(client) = client.clone() {
                                let tx = tx.clone();
                                tokio::spawn(async move {
                                    let result = client.search(&job.query).await;
                                    let _ = tx.send(SearchDone {
                                        token: job.token,
                                        result,
                                    });
                                });
                            }
                        }
                        Some(Effect::OpenUrl(url)) => {
                            let _ = open::that(url);
                        }
                        None => {}
                    }
                }
            }
        }

        // Apply completed searches; stale tokens are discarded inside
        while let Ok(done) = rx.try_recv() {
            app.finish_search(done.token, done.result);
        }
    }

    Ok(())
}

// =============================================================================
// UI Rendering
// =============================================================================

/// Main render function - dispatches to view-specific renderers
fn render_ui(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    frame.render_widget(Clear, area);
    frame.render_widget(
        Block::default().style(ratatui::style::Style::default().bg(Theme::BACKGROUND)),
        area,
    );

    // Main layout: header, content, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    render_header(frame, chunks[0], app);
    match app.view {
        View::Search => render_results(frame, chunks[1], app),
        View::Detail => render_detail(frame, chunks[1], app),
    }
    render_status_bar(frame, chunks[2], app);

    // Render error overlay if present
    if let Some(error) = app.error.clone() {
        render_error_popup(frame, area, &error);
    }
}

/// Render the header: logo, query input, search trigger
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12), // Logo
            Constraint::Min(1),     // Query input
            Constraint::Length(16), // Search trigger
        ])
        .split(area);

    // Logo
    let logo = Paragraph::new(Line::from(vec![
        Span::styled(
            "KIOSK",
            ratatui::style::Style::default()
                .fg(Theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "TUI",
            ratatui::style::Style::default()
                .fg(Theme::TEXT)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::border()),
    );
    frame.render_widget(logo, header_chunks[0]);

    // Query input
    let input_focused = app.focused() == Some(Focusable::QueryInput);
    let input_border = if input_focused {
        Theme::border_focused()
    } else {
        Theme::border()
    };

    let input_text = if app.input_mode == InputMode::Editing {
        let cursor = app.edit_cursor.min(app.query.len());
        let (before, after) = app.query.split_at(cursor);
        format!("⌕ {}│{}", before, after)
    } else if app.query.is_empty() {
        "⌕ Press / to search...".to_string()
    } else {
        format!("⌕ {}", app.query)
    };

    let input_box = Paragraph::new(input_text)
        .style(if app.input_mode == InputMode::Editing {
            Theme::input().fg(Theme::ACCENT)
        } else {
            Theme::input()
        })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(input_border)
                .title(Span::styled(" SEARCH ", Theme::title())),
        );
    frame.render_widget(input_box, header_chunks[1]);

    // Search trigger: disabled and relabeled while a request is pending
    let button_focused = app.focused() == Some(Focusable::SearchButton);
    let button_border = if button_focused {
        Theme::border_focused()
    } else {
        Theme::border()
    };
    let (label, label_style) = if app.search_pending() {
        ("Searching...", Theme::dimmed())
    } else if button_focused {
        ("Search", Theme::focused())
    } else {
        ("Search", Theme::text())
    };

    let button = Paragraph::new(Span::styled(label, label_style))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(button_border),
        );
    frame.render_widget(button, header_chunks[2]);
}

/// Render search results as a scrolling column of cards
fn render_results(frame: &mut Frame, area: Rect, app: &mut App) {
    let title = if app.searched {
        format!(" RESULTS ({}) ", app.results.len())
    } else {
        " RESULTS ".to_string()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border())
        .title(Span::styled(title, Theme::title()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.search_pending() {
        let loading = Paragraph::new("⟳ Searching...")
            .style(Theme::loading())
            .alignment(Alignment::Center);
        frame.render_widget(loading, inner);
        return;
    }

    if !app.searched {
        let hint = Paragraph::new("Press / and type to search for movies and TV shows")
            .style(Theme::dimmed())
            .alignment(Alignment::Center);
        frame.render_widget(hint, inner);
        return;
    }

    if app.results.is_empty() {
        // Exactly one placeholder line for an empty result set
        let empty = Paragraph::new(no_results_line()).alignment(Alignment::Center);
        frame.render_widget(empty, inner);
        return;
    }

    let visible_cards = (inner.height as usize / CARD_ROWS).max(1);
    app.scroll_into_view(visible_cards);

    let focused_card = app.focused_card();
    let lines: Vec<Line> = app
        .results
        .iter()
        .enumerate()
        .skip(app.scroll)
        .take(visible_cards)
        .flat_map(|(i, item)| Card::new(item, focused_card == Some(i)).lines())
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Render the detail view for the selected item
fn render_detail(frame: &mut Frame, area: Rect, app: &App) {
    let item = app
        .selected_id
        .and_then(|id| app.results.iter().find(|r| r.id == id));

    let title = item.map(|i| i.title.as_str()).unwrap_or("DETAIL");
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border())
        .title(Span::styled(format!(" {} ", title), Theme::title()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(""));

    if let Some(item) = item {
        let year_str = item.year.map(|y| format!("{}", y)).unwrap_or_default();
        lines.push(Line::from(vec![
            Span::styled(item.title.clone(), Theme::title()),
            Span::raw(" "),
            Span::styled(year_str, Theme::dimmed()),
            Span::raw("  "),
            Span::styled(format!("★ {}", item.rating()), Theme::text()),
            Span::raw("  "),
            Span::styled(format!("[{}]", item.media_type), Theme::dimmed()),
        ]));
        lines.push(Line::from(""));
        let overview = item
            .overview
            .clone()
            .unwrap_or_else(|| "(no description)".to_string());
        lines.push(Line::from(Span::styled(overview, Theme::text())));
        lines.push(Line::from(""));
    }

    if let Some(url) = &app.detail_url {
        lines.push(Line::from(vec![
            Span::styled("⇱ ", Theme::dimmed()),
            Span::styled(url.clone(), Theme::keybind()),
        ]));
        lines.push(Line::from(""));
    }

    // The back control is the whole focusable set here, so it always
    // carries the focused style
    lines.push(Line::from(Span::styled("▸ ⏎ BACK", Theme::focused())));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("  o  ", Theme::keybind()),
        Span::styled("Open in browser", Theme::dimmed()),
    ]));

    let content = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(content, inner);
}

/// Render status bar at bottom
fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mode_indicator = match app.input_mode {
        InputMode::Normal => Span::styled(
            " NAV ",
            ratatui::style::Style::default()
                .fg(Theme::BACKGROUND)
                .bg(Theme::ACCENT),
        ),
        InputMode::Editing => Span::styled(
            " INPUT ",
            ratatui::style::Style::default()
                .fg(Theme::BACKGROUND)
                .bg(Theme::TEXT),
        ),
    };

    let view_indicator = Span::styled(
        match app.view {
            View::Search => " SEARCH ",
            View::Detail => " DETAIL ",
        },
        Theme::dimmed(),
    );

    let help = match app.view {
        View::Search => " q:quit  /:search  ↑↓:move  ⏎:select ",
        View::Detail => " q:quit  o:open  ⏎/ESC:back ",
    };

    let status_line = Line::from(vec![
        mode_indicator,
        view_indicator,
        Span::raw(" │ "),
        Span::styled(help, Theme::dimmed()),
    ]);

    let status = Paragraph::new(status_line).style(Theme::status_bar());
    frame.render_widget(status, area);
}

/// Render error popup overlay
fn render_error_popup(frame: &mut Frame, area: Rect, error: &str) {
    let popup_width = 60.min(area.width.saturating_sub(4));
    let popup_height = 5;

    let popup_area = Rect {
        x: area.x + (area.width.saturating_sub(popup_width)) / 2,
        y: area.y + (area.height.saturating_sub(popup_height)) / 2,
        width: popup_width,
        height: popup_height,
    };

    frame.render_widget(Clear, popup_area);

    let error_block = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(error.to_string(), Theme::error())),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Theme::error())
            .title(Span::styled(" ✗ ERROR ", Theme::error()))
            .style(ratatui::style::Style::default().bg(Theme::BACKGROUND)),
    );

    frame.render_widget(error_block, popup_area);
}
