//! TUI Application state and key handling

use crate::components::{HelpModal, InfoTooltip};
use crossterm::event::{KeyCode, KeyModifiers};
use lacboard_core::models::{ColorScheme, Genre, Venue};
use lacboard_core::{DashboardState, Preferences, SelfCheckReport};
use ratatui::layout::{Position, Rect};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Page of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Overview,
    Events,
    Sales,
    Operations,
}

impl Page {
    pub fn all() -> &'static [Page] {
        &[Page::Overview, Page::Events, Page::Sales, Page::Operations]
    }

    pub fn index(&self) -> usize {
        match self {
            Page::Overview => 0,
            Page::Events => 1,
            Page::Sales => 2,
            Page::Operations => 3,
        }
    }

    pub fn from_index(idx: usize) -> Self {
        match idx {
            0 => Page::Overview,
            1 => Page::Events,
            2 => Page::Sales,
            3 => Page::Operations,
            _ => Page::Overview,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Page::Overview => "Overview",
            Page::Events => "Eventi",
            Page::Sales => "Vendite",
            Page::Operations => "Operations",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Page::Overview => "◆",
            Page::Events => "▦",
            Page::Sales => "≡",
            Page::Operations => "⚙",
        }
    }

    pub fn shortcut(&self) -> char {
        match self {
            Page::Overview => '1',
            Page::Events => '2',
            Page::Sales => '3',
            Page::Operations => '4',
        }
    }
}

/// Operations Pulse sub-tab; changes only on explicit selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpsTab {
    #[default]
    Overview,
    Staff,
    Incident,
}

impl OpsTab {
    pub fn all() -> &'static [OpsTab] {
        &[OpsTab::Overview, OpsTab::Staff, OpsTab::Incident]
    }

    pub fn index(&self) -> usize {
        match self {
            OpsTab::Overview => 0,
            OpsTab::Staff => 1,
            OpsTab::Incident => 2,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            OpsTab::Overview => "Overview",
            OpsTab::Staff => "Staff",
            OpsTab::Incident => "Incident",
        }
    }

    pub fn next(self) -> Self {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    pub fn prev(self) -> Self {
        let all = Self::all();
        all[(self.index() + all.len() - 1) % all.len()]
    }
}

/// Chat drawer visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Drawer {
    #[default]
    Closed,
    Open,
}

impl Drawer {
    pub fn is_open(&self) -> bool {
        matches!(self, Drawer::Open)
    }
}

/// Where typed characters go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Editing the "Chiedi alla dashboard" question
    Query,
}

/// Genre choices in selector order; "" is "Tutti"
pub fn genre_options() -> Vec<&'static str> {
    std::iter::once("")
        .chain(Genre::all().iter().map(|g| g.as_str()))
        .collect()
}

/// Venue choices in selector order; "" is "Tutte"
pub fn venue_options() -> Vec<&'static str> {
    std::iter::once("")
        .chain(Venue::all().iter().map(|v| v.as_str()))
        .collect()
}

fn cycle<'a>(options: &[&'a str], current: &str, forward: bool) -> &'a str {
    let pos = options
        .iter()
        .position(|o| o.eq_ignore_ascii_case(current))
        .unwrap_or(0);
    let len = options.len();
    let next = if forward {
        (pos + 1) % len
    } else {
        (pos + len - 1) % len
    };
    options[next]
}

/// TUI Application state
pub struct App {
    /// Data, filter and derived view
    pub dashboard: DashboardState,

    /// Currently active page
    pub page: Page,

    /// Operations Pulse sub-tab
    pub ops_tab: OpsTab,

    /// Chat drawer state
    pub drawer: Drawer,

    /// Last drawer area, for backdrop clicks
    pub drawer_area: Option<Rect>,

    /// Keyboard focus
    pub input_mode: InputMode,

    /// Question typed in the chat card
    pub query: String,

    /// Question that opened the drawer
    pub submitted_query: Option<String>,

    pub help_modal: HelpModal,

    pub info_tooltip: InfoTooltip,

    /// Active color scheme
    pub color_scheme: ColorScheme,

    /// Where preferences are saved on theme toggle
    pub config_dir: Option<PathBuf>,

    /// Heatmap seed, kept so saved preferences round-trip
    pub heatmap_seed: u64,

    /// Startup self-check outcome
    pub self_check: SelfCheckReport,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Error/warning message to display
    pub status_message: Option<String>,
}

impl App {
    pub fn new(dashboard: DashboardState, preferences: &Preferences) -> Self {
        Self {
            dashboard,
            page: Page::Overview,
            ops_tab: OpsTab::Overview,
            drawer: Drawer::Closed,
            drawer_area: None,
            input_mode: InputMode::Normal,
            query: String::new(),
            submitted_query: None,
            help_modal: HelpModal::new(),
            info_tooltip: InfoTooltip::new(),
            color_scheme: preferences.color_scheme,
            config_dir: None,
            heatmap_seed: preferences.heatmap_seed,
            self_check: SelfCheckReport::default(),
            should_quit: false,
            status_message: None,
        }
    }

    pub fn with_config_dir(mut self, config_dir: Option<PathBuf>) -> Self {
        self.config_dir = config_dir;
        self
    }

    /// Record the self-check; failures show up in the status bar only
    pub fn set_self_check(&mut self, report: SelfCheckReport) {
        let (_, failed) = report.counts();
        if failed > 0 {
            self.status_message = Some(format!("Self-check: {} controlli falliti", failed));
        }
        self.self_check = report;
    }

    /// Handle keyboard input
    /// Returns true if the key was consumed
    pub fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) -> bool {
        if modifiers.contains(KeyModifiers::CONTROL) && key == KeyCode::Char('c') {
            self.should_quit = true;
            return true;
        }

        // Overlays capture input first
        if self.drawer.is_open() {
            if matches!(key, KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace) {
                self.close_drawer();
            }
            return true;
        }

        if self.help_modal.is_visible() {
            if matches!(key, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                self.help_modal.hide();
            }
            return true;
        }

        if self.input_mode == InputMode::Query {
            return self.handle_query_key(key);
        }

        match key {
            KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.info_tooltip.hide();
                self.status_message = None;
            }
            KeyCode::Char('?') => self.help_modal.toggle(),
            KeyCode::Char('i') => self.info_tooltip.toggle(),
            KeyCode::Tab => self.next_page(),
            KeyCode::BackTab => self.prev_page(),
            KeyCode::Char(c) if ('1'..='4').contains(&c) => {
                self.page = Page::from_index((c as usize) - ('1' as usize));
            }
            KeyCode::Char('g') => self.cycle_genre(true),
            KeyCode::Char('G') => self.cycle_genre(false),
            KeyCode::Char('v') => self.cycle_venue(true),
            KeyCode::Char('V') => self.cycle_venue(false),
            KeyCode::Char('x') => self.clear_filters(),
            KeyCode::Char('/') | KeyCode::Char('a') => {
                self.input_mode = InputMode::Query;
            }
            KeyCode::Char('t') => self.toggle_color_scheme(),
            KeyCode::Left | KeyCode::Char('h') if self.page == Page::Operations => {
                self.ops_tab = self.ops_tab.prev();
            }
            KeyCode::Right | KeyCode::Char('l') if self.page == Page::Operations => {
                self.ops_tab = self.ops_tab.next();
            }
            KeyCode::F(n @ 1..=3) if self.page == Page::Operations => {
                self.select_ops_tab(OpsTab::all()[usize::from(n - 1)]);
            }
            _ => return false,
        }
        true
    }

    fn handle_query_key(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Esc => self.input_mode = InputMode::Normal,
            KeyCode::Enter => self.submit_query(),
            KeyCode::Backspace => {
                self.query.pop();
            }
            KeyCode::Char(c) => self.query.push(c),
            _ => return false,
        }
        true
    }

    /// Mouse click at a terminal cell; a click outside the drawer closes it
    pub fn handle_click(&mut self, column: u16, row: u16) {
        if !self.drawer.is_open() {
            return;
        }
        let inside = self
            .drawer_area
            .map(|area| area.contains(Position::new(column, row)))
            .unwrap_or(false);
        if !inside {
            self.close_drawer();
        }
    }

    pub fn select_ops_tab(&mut self, tab: OpsTab) {
        self.ops_tab = tab;
    }

    /// Submit the question: opens the drawer with the mock reply
    pub fn submit_query(&mut self) {
        let question = self.query.trim();
        if question.is_empty() {
            self.status_message = Some("Scrivi una domanda prima di inviarla".to_string());
            return;
        }
        debug!(question, "Chat question submitted");
        self.submitted_query = Some(question.to_string());
        self.input_mode = InputMode::Normal;
        self.drawer = Drawer::Open;
    }

    pub fn close_drawer(&mut self) {
        self.drawer = Drawer::Closed;
        self.drawer_area = None;
    }

    fn next_page(&mut self) {
        let idx = self.page.index();
        self.page = Page::from_index((idx + 1) % Page::all().len());
    }

    fn prev_page(&mut self) {
        let idx = self.page.index();
        self.page = Page::from_index((idx + Page::all().len() - 1) % Page::all().len());
    }

    fn cycle_genre(&mut self, forward: bool) {
        let next = cycle(&genre_options(), &self.dashboard.filter().genre, forward);
        self.dashboard.set_genre(next);
    }

    fn cycle_venue(&mut self, forward: bool) {
        let next = cycle(&venue_options(), &self.dashboard.filter().venue, forward);
        self.dashboard.set_venue(next);
    }

    pub fn clear_filters(&mut self) {
        self.dashboard.clear_filters();
    }

    fn toggle_color_scheme(&mut self) {
        self.color_scheme = self.color_scheme.toggle();
        let Some(dir) = self.config_dir.as_deref() else {
            return;
        };
        let prefs = Preferences {
            color_scheme: self.color_scheme,
            heatmap_seed: self.heatmap_seed,
        };
        if let Err(e) = prefs.save(dir) {
            warn!(error = %e, "Failed to save preferences");
            self.status_message = Some(format!("Preferenze non salvate: {}", e));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use lacboard_core::DashboardConfig;

    fn app() -> App {
        let start = NaiveDate::from_ymd_opt(2025, 10, 20).unwrap();
        let dashboard = DashboardState::preview(&DashboardConfig::starting(start));
        App::new(dashboard, &Preferences::default())
    }

    fn press(app: &mut App, key: KeyCode) -> bool {
        app.handle_key(key, KeyModifiers::NONE)
    }

    #[test]
    fn test_initial_state() {
        let app = app();
        assert_eq!(app.page, Page::Overview);
        assert_eq!(app.ops_tab, OpsTab::Overview);
        assert_eq!(app.drawer, Drawer::Closed);
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_ops_tab_changes_only_on_selection() {
        let mut app = app();
        // Not on the operations page: arrows are not consumed
        assert!(!press(&mut app, KeyCode::Right));
        assert_eq!(app.ops_tab, OpsTab::Overview);

        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Right);
        assert_eq!(app.ops_tab, OpsTab::Staff);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.ops_tab, OpsTab::Incident);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.ops_tab, OpsTab::Overview);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.ops_tab, OpsTab::Incident);
        press(&mut app, KeyCode::F(2));
        assert_eq!(app.ops_tab, OpsTab::Staff);

        // Switching pages keeps the selection
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.ops_tab, OpsTab::Staff);
    }

    #[test]
    fn test_query_submit_opens_drawer_and_esc_closes() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.input_mode, InputMode::Query);
        for c in "quali eventi a rischio?".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        // 'q' is text while typing, not quit
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Enter);
        assert!(app.drawer.is_open());
        assert_eq!(app.submitted_query.as_deref(), Some("quali eventi a rischio?"));

        // Other keys are swallowed while the drawer is open
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.page, Page::Overview);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.drawer, Drawer::Closed);
    }

    #[test]
    fn test_empty_query_does_not_open_drawer() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.drawer, Drawer::Closed);
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_backdrop_click_closes_drawer() {
        let mut app = app();
        app.query = "x".to_string();
        app.submit_query();
        app.drawer_area = Some(Rect::new(10, 10, 20, 5));

        app.handle_click(12, 12);
        assert!(app.drawer.is_open());
        app.handle_click(0, 0);
        assert!(!app.drawer.is_open());
    }

    #[test]
    fn test_genre_cycle_updates_view() {
        let mut app = app();
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.dashboard.filter().genre, "Opera");
        assert_eq!(app.dashboard.view().events.len(), 1);

        press(&mut app, KeyCode::Char('G'));
        assert_eq!(app.dashboard.filter().genre, "");
        press(&mut app, KeyCode::Char('G'));
        assert_eq!(app.dashboard.filter().genre, "Family");
    }

    #[test]
    fn test_clear_filters_key() {
        let mut app = app();
        press(&mut app, KeyCode::Char('v'));
        assert_eq!(app.dashboard.filter().venue, "Sala Teatro");
        press(&mut app, KeyCode::Char('x'));
        assert!(!app.dashboard.view().filter_active);
    }

    #[test]
    fn test_cycle_wraps() {
        let opts = ["", "a", "b"];
        assert_eq!(cycle(&opts, "b", true), "");
        assert_eq!(cycle(&opts, "", false), "b");
        assert_eq!(cycle(&opts, "unknown", true), "a");
    }

    #[test]
    fn test_theme_toggle_saves_preferences() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut app = app().with_config_dir(Some(dir.path().to_path_buf()));
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.color_scheme, ColorScheme::Light);
        let saved = Preferences::load(dir.path());
        assert_eq!(saved.color_scheme, ColorScheme::Light);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
    }
}
