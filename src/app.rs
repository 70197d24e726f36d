//! App state and event routing
//!
//! One owned [`App`] record holds everything mutable: the active view, the
//! query buffer, results, the focus cursor, the in-flight search marker and
//! the error popup. Key handling returns an [`Effect`] instead of performing
//! IO, so the whole state machine runs in tests without a terminal or a
//! network.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::api::SearchError;
use crate::config::Config;
use crate::focus::{focusables, Focusable, FocusCursor};
use crate::models::SearchResult;

// =============================================================================
// Views and Input Mode
// =============================================================================

/// Top-level view: search list or the detail panel for a selected item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Search,
    Detail,
}

/// Current input mode for keyboard handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Remote-control navigation
    #[default]
    Normal,
    /// Query input is capturing text
    Editing,
}

// =============================================================================
// Effects
// =============================================================================

/// A search the event loop should dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchJob {
    /// Generation token; completions carrying an older token are discarded
    pub token: u64,
    pub query: String,
}

/// Side effect requested by key handling, executed by the event loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Search(SearchJob),
    OpenUrl(String),
}

// =============================================================================
// Application State
// =============================================================================

/// Main application state
#[derive(Debug)]
pub struct App {
    pub view: View,
    pub input_mode: InputMode,
    pub running: bool,
    pub config: Config,

    /// Search query buffer and byte cursor within it
    pub query: String,
    pub edit_cursor: usize,

    /// Current results (already person-filtered and capped by the client)
    pub results: Vec<SearchResult>,
    /// Whether at least one search has completed
    pub searched: bool,

    /// Focus cursor over the derived focusable set
    pub focus: FocusCursor,
    /// First visible card (scroll offset, in cards)
    pub scroll: usize,

    /// Token of the in-flight search, if any
    pub pending: Option<u64>,
    token_counter: u64,

    /// Blocking error popup; any keypress dismisses it
    pub error: Option<String>,

    /// Id of the last-selected item, kept until the next selection
    pub selected_id: Option<u64>,
    /// Detail view address built from the configured template
    pub detail_url: Option<String>,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            view: View::Search,
            input_mode: InputMode::Normal,
            running: true,
            config,
            query: String::new(),
            edit_cursor: 0,
            results: Vec::new(),
            searched: false,
            focus: FocusCursor::new(),
            scroll: 0,
            pending: None,
            token_counter: 0,
            error: None,
            selected_id: None,
            detail_url: None,
        }
    }

    /// Ordered focusable set for the current view
    pub fn focusables(&self) -> Vec<Focusable> {
        focusables(self.view, self.results.len())
    }

    /// Element under the focus cursor
    pub fn focused(&self) -> Option<Focusable> {
        self.focus.current(&self.focusables())
    }

    /// Card index under the cursor, if a card is focused
    pub fn focused_card(&self) -> Option<usize> {
        self.focused().and_then(|f| f.card_index())
    }

    /// Whether a search request is in flight (the trigger is disabled and
    /// relabeled while this holds)
    pub fn search_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    // -------------------------------------------------------------------------
    // Search Lifecycle
    // -------------------------------------------------------------------------

    /// Start a search for the current query.
    ///
    /// Returns `None` without side effects for a whitespace-only query.
    /// A missing API credential raises the configuration error popup instead
    /// of issuing a request. Each started search gets a fresh generation
    /// token, superseding whatever was in flight.
    pub fn begin_search(&mut self) -> Option<SearchJob> {
        let query = self.query.trim();
        if query.is_empty() {
            return None;
        }

        if self.config.api_key().is_none() {
            self.error = Some(
                "No TMDB API key configured. Set TMDB_API_KEY or add api_key to the config file."
                    .to_string(),
            );
            return None;
        }

        self.token_counter += 1;
        self.pending = Some(self.token_counter);
        Some(SearchJob {
            token: self.token_counter,
            query: query.to_string(),
        })
    }

    /// Apply a completed search.
    ///
    /// Completions whose token is not the latest are stale and dropped
    /// wholesale. On success the result list is replaced and the focus cursor
    /// clamps into the re-derived set; on failure the popup is raised and the
    /// previous results stay untouched.
    pub fn finish_search(&mut self, token: u64, result: Result<Vec<SearchResult>, SearchError>) {
        if self.pending != Some(token) {
            return;
        }
        self.pending = None;

        match result {
            Ok(results) => {
                self.results = results;
                self.searched = true;
                self.scroll = 0;
                self.focus.clamp(self.focusables().len());
            }
            Err(e) => {
                self.error = Some(format!("Search failed: {}", e));
            }
        }
    }

    // -------------------------------------------------------------------------
    // Selection and View Transitions
    // -------------------------------------------------------------------------

    /// Select the card at `index`: record the id, build the detail address
    /// and switch to the detail view (cursor resets to the top).
    pub fn select_card(&mut self, index: usize) {
        if let Some(item) = self.results.get(index) {
            self.selected_id = Some(item.id);
            self.detail_url = Some(self.config.detail_url(item.id));
            self.view = View::Detail;
            self.input_mode = InputMode::Normal;
            self.focus.reset();
        }
    }

    /// Leave the detail view and return to search (cursor resets to the top)
    pub fn back_to_search(&mut self) {
        self.detail_url = None;
        self.view = View::Search;
        self.focus.reset();
    }

    /// Keep the focused card inside a viewport of `visible_cards` rows
    pub fn scroll_into_view(&mut self, visible_cards: usize) {
        if visible_cards == 0 {
            return;
        }
        if let Some(card) = self.focused_card() {
            if card < self.scroll {
                self.scroll = card;
            } else if card >= self.scroll + visible_cards {
                self.scroll = card + 1 - visible_cards;
            }
        }
    }

    // -------------------------------------------------------------------------
    // Query Editing
    // -------------------------------------------------------------------------

    pub fn insert(&mut self, c: char) {
        self.query.insert(self.edit_cursor, c);
        self.edit_cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(c) = self.query[..self.edit_cursor].chars().next_back() {
            self.edit_cursor -= c.len_utf8();
            self.query.remove(self.edit_cursor);
        }
    }

    pub fn delete(&mut self) {
        if self.edit_cursor < self.query.len() {
            self.query.remove(self.edit_cursor);
        }
    }

    pub fn cursor_left(&mut self) {
        if let Some(c) = self.query[..self.edit_cursor].chars().next_back() {
            self.edit_cursor -= c.len_utf8();
        }
    }

    pub fn cursor_right(&mut self) {
        if let Some(c) = self.query[self.edit_cursor..].chars().next() {
            self.edit_cursor += c.len_utf8();
        }
    }

    pub fn cursor_home(&mut self) {
        self.edit_cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.edit_cursor = self.query.len();
    }

    // -------------------------------------------------------------------------
    // Keyboard Event Handling
    // -------------------------------------------------------------------------

    /// Handle a key event, returning the effect the event loop should run.
    ///
    /// An open error popup swallows the keypress that dismisses it.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Effect> {
        if self.error.take().is_some() {
            return None;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return None;
        }

        match self.input_mode {
            InputMode::Editing => self.handle_editing_key(key),
            InputMode::Normal => self.handle_normal_key(key),
        }
    }

    fn handle_editing_key(&mut self, key: KeyEvent) -> Option<Effect> {
        match key.code {
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
                None
            }
            KeyCode::Enter => {
                // Submit from the input; this may supersede an in-flight
                // request, whose completion the token then discards
                self.input_mode = InputMode::Normal;
                self.begin_search().map(Effect::Search)
            }
            KeyCode::Down => {
                self.input_mode = InputMode::Normal;
                self.navigate_down();
                None
            }
            KeyCode::Up => {
                self.input_mode = InputMode::Normal;
                None
            }
            KeyCode::Char(c) => {
                self.insert(c);
                None
            }
            KeyCode::Backspace => {
                self.backspace();
                None
            }
            KeyCode::Delete => {
                self.delete();
                None
            }
            KeyCode::Left => {
                self.cursor_left();
                None
            }
            KeyCode::Right => {
                self.cursor_right();
                None
            }
            KeyCode::Home => {
                self.cursor_home();
                None
            }
            KeyCode::End => {
                self.cursor_end();
                None
            }
            _ => None,
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> Option<Effect> {
        match key.code {
            KeyCode::Char('q') => {
                self.quit();
                None
            }
            KeyCode::Char('/') => {
                if self.view == View::Search {
                    self.focus.jump(0, self.focusables().len());
                    self.input_mode = InputMode::Editing;
                }
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.navigate_up();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.navigate_down();
                None
            }
            KeyCode::Enter => self.activate(),
            KeyCode::Esc => {
                if self.view == View::Detail {
                    self.back_to_search();
                }
                None
            }
            KeyCode::Char('o') => {
                if self.view == View::Detail {
                    return self.detail_url.clone().map(Effect::OpenUrl);
                }
                None
            }
            _ => None,
        }
    }

    fn navigate_up(&mut self) {
        self.focus.up();
    }

    fn navigate_down(&mut self) {
        let len = self.focusables().len();
        self.focus.down(len);
    }

    /// Invoke the primary action of the focused element. A focused card
    /// triggers its select action, not the card container.
    fn activate(&mut self) -> Option<Effect> {
        match self.focused()? {
            Focusable::QueryInput => {
                self.input_mode = InputMode::Editing;
                None
            }
            Focusable::SearchButton => {
                // Disabled trigger while a request is pending
                if self.search_pending() {
                    return None;
                }
                self.begin_search().map(Effect::Search)
            }
            Focusable::Card(i) => {
                self.select_card(i);
                None
            }
            Focusable::BackButton => {
                self.back_to_search();
                None
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
