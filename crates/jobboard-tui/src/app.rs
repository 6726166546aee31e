//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic. The job sheet is loaded
//! on a background task; the loop polls its oneshot receiver each frame
//! and never blocks on it.

use crate::{
    commands::{execute_command, Command},
    event::{self, AppEvent, Direction},
    theme::Theme,
    widgets::{
        command_bar::{CommandBar, CommandBarState},
        filter_bar::{FilterBar, FilterBarState},
        help::HelpPopup,
        job_detail::{DetailView, JobDetail},
        job_list::{JobList, JobListState, ListView},
        status_line::StatusLine,
        tab_bar::TabBar,
    },
};
use crossterm::{
    event::{self as ct_event, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use jobboard_core::{config::Config, JobCatalog, JobRecord, LoadError};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    Frame, Terminal,
};
use std::{io, time::Duration};
use tokio::sync::oneshot::{self, error::TryRecvError};

pub type LoadResult = Result<JobCatalog, LoadError>;

const PAGE_STEP: u16 = 10;
const TAB_LABEL_MAX: usize = 24;

// ---------------------------------------------------------------------------
// Focus + tab types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    List,
    Preview,
    Filter,
    /// Vim-style `:` command line is active.
    Command,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailState {
    pub id: String,
    pub scroll: u16,
    pub show_schema: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabKind {
    Main,
    Detail(DetailState),
}

#[derive(Debug, Clone)]
pub struct TabState {
    pub label: String,
    pub kind: TabKind,
}

impl TabState {
    pub fn main() -> Self {
        Self { label: "jobs".to_string(), kind: TabKind::Main }
    }

    pub fn detail(id: &str, label: &str) -> Self {
        Self {
            label: tab_label(label),
            kind: TabKind::Detail(DetailState { id: id.to_string(), scroll: 0, show_schema: false }),
        }
    }

    pub fn detail_id(&self) -> Option<&str> {
        match &self.kind {
            TabKind::Detail(d) => Some(d.id.as_str()),
            TabKind::Main => None,
        }
    }
}

fn tab_label(text: &str) -> String {
    if text.chars().count() > TAB_LABEL_MAX {
        format!("{}…", text.chars().take(TAB_LABEL_MAX - 1).collect::<String>())
    } else {
        text.to_string()
    }
}

#[derive(Debug)]
pub enum LoadState {
    Loading,
    Failed(String),
    Loaded(JobCatalog),
}

/// One-line feedback from the last command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self { text: text.into(), is_error: false }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), is_error: true }
    }
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub tabs: Vec<TabState>,
    pub active_tab: usize,
    pub focus: Focus,
    /// Focus before entering command mode, restored on exit.
    pub prev_focus: Focus,
    pub theme: Theme,
    pub config: Config,
    pub show_help: bool,
    pub command_bar: CommandBarState,
    pub filter: FilterBarState,
    pub list: JobListState,
    pub preview_scroll: u16,
    pub preview_schema: bool,
    pub load: LoadState,
    pub status: Option<StatusMessage>,
    pub quit: bool,
}

impl AppState {
    pub fn new(config: Config, theme: Theme) -> Self {
        Self {
            tabs: vec![TabState::main()],
            active_tab: 0,
            focus: Focus::List,
            prev_focus: Focus::List,
            theme,
            config,
            show_help: false,
            command_bar: CommandBarState::default(),
            filter: FilterBarState::default(),
            list: JobListState::default(),
            preview_scroll: 0,
            preview_schema: false,
            load: LoadState::Loading,
            status: None,
            quit: false,
        }
    }

    pub fn finish_load(&mut self, result: LoadResult) {
        self.load = match result {
            Ok(catalog) => {
                tracing::debug!(jobs = catalog.len(), "catalog received");
                LoadState::Loaded(catalog)
            }
            Err(e) => {
                tracing::debug!(error = %e, "load failed");
                LoadState::Failed(e.to_string())
            }
        };
        self.list.clamp(self.visible_jobs().len());
        self.retitle_detail_tabs();
    }

    /// Jobs matching the current filter, in sheet order.
    pub fn visible_jobs(&self) -> Vec<&JobRecord> {
        match &self.load {
            LoadState::Loaded(catalog) => catalog.filter(&self.filter.query),
            _ => Vec::new(),
        }
    }

    pub fn selected_job(&self) -> Option<&JobRecord> {
        self.visible_jobs().get(self.list.selected).copied()
    }

    /// Resolve a job id against the load state.
    pub fn detail_view(&self, id: &str) -> DetailView<'_> {
        match &self.load {
            LoadState::Loading => DetailView::Loading,
            LoadState::Failed(msg) => DetailView::Failed(msg),
            LoadState::Loaded(catalog) => catalog.find(id).map_or(DetailView::NotFound, DetailView::Job),
        }
    }

    /// Switch to the detail tab for `id`, opening one if needed.
    pub fn open_detail(&mut self, id: &str) {
        if let Some(index) = self.tabs.iter().position(|t| t.detail_id() == Some(id)) {
            self.active_tab = index;
            return;
        }
        let label = match self.detail_view(id) {
            DetailView::Job(job) => job.title.clone(),
            _ => id.to_string(),
        };
        tracing::debug!(%id, "opening detail tab");
        self.tabs.push(TabState::detail(id, &label));
        self.active_tab = self.tabs.len() - 1;
    }

    pub fn close_tab_or_quit(&mut self) {
        if self.active_tab == 0 {
            tracing::debug!("quit");
            self.quit = true;
        } else {
            tracing::debug!(tab = self.active_tab, "closing tab");
            self.tabs.remove(self.active_tab);
            self.active_tab = self.active_tab.saturating_sub(1);
        }
    }

    pub fn toggle_schema(&mut self) {
        match &mut self.tabs[self.active_tab].kind {
            TabKind::Detail(detail) => {
                detail.show_schema = !detail.show_schema;
                detail.scroll = 0;
            }
            TabKind::Main => {
                self.preview_schema = !self.preview_schema;
                self.preview_scroll = 0;
            }
        }
    }

    /// Tabs opened by id before the catalog arrived are labelled with the id;
    /// swap in the job title once it is known.
    fn retitle_detail_tabs(&mut self) {
        let LoadState::Loaded(catalog) = &self.load else {
            return;
        };
        for tab in &mut self.tabs {
            if let Some(job) = tab.detail_id().and_then(|id| catalog.find(id)) {
                tab.label = tab_label(&job.title);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
    pending: Option<oneshot::Receiver<LoadResult>>,
}

impl App {
    pub fn new(config: Config, theme: Theme, pending: oneshot::Receiver<LoadResult>) -> Self {
        Self { state: AppState::new(config, theme), pending: Some(pending) }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Pick up the load result if the background task has finished.
    pub fn poll_load(&mut self) {
        let Some(rx) = self.pending.as_mut() else {
            return;
        };
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Closed) => Err(LoadError::Fetch("Failed to fetch jobs file".to_string())),
        };
        self.pending = None;
        self.state.finish_load(result);
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore the terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> anyhow::Result<()> {
        loop {
            self.poll_load();
            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(16))? {
                match ct_event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        let raw = Event::Key(key);
                        let app_event = if is_insert_mode(self.state.focus) {
                            event::to_app_event_insert(raw)
                        } else {
                            event::to_app_event(raw)
                        };
                        if let Some(ev) = app_event {
                            tracing::debug!(focus = ?self.state.focus, event = ?ev, "key event");
                            self.handle(ev);
                        }
                    }
                    other => {
                        if let Some(ev) = event::to_app_event(other) {
                            self.handle(ev);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    pub fn handle(&mut self, event: AppEvent) {
        let s = &mut self.state;

        // Help popup intercepts all events; only close keys pass through.
        if s.show_help {
            if matches!(event, AppEvent::Char('?') | AppEvent::Escape | AppEvent::Quit) {
                tracing::debug!("help popup closed");
                s.show_help = false;
            }
            return;
        }

        if s.focus == Focus::Command {
            match event {
                AppEvent::Escape => {
                    tracing::debug!("command bar cancelled");
                    s.command_bar.clear();
                    s.focus = s.prev_focus;
                }
                AppEvent::Enter => match Command::parse(&s.command_bar.input) {
                    Ok(cmd) => {
                        tracing::debug!(command = ?cmd, "executing command");
                        s.command_bar.clear();
                        s.focus = s.prev_focus;
                        execute_command(s, cmd);
                    }
                    Err(msg) if msg.is_empty() => {
                        s.command_bar.clear();
                        s.focus = s.prev_focus;
                    }
                    Err(msg) => s.command_bar.error = Some(msg),
                },
                AppEvent::Quit => s.quit = true,
                other => s.command_bar.handle(&other),
            }
            return;
        }

        let on_main = s.active_tab == 0;
        match event {
            AppEvent::Char('?') if s.focus != Focus::Filter => {
                tracing::debug!("help popup opened");
                s.show_help = true;
            }

            AppEvent::Char(':') if s.focus != Focus::Filter => {
                tracing::debug!(prev_focus = ?s.focus, "entering command mode");
                s.prev_focus = s.focus;
                s.command_bar.clear();
                s.status = None;
                s.focus = Focus::Command;
            }

            AppEvent::Quit => s.close_tab_or_quit(),

            AppEvent::Escape => {
                s.status = None;
                if s.focus == Focus::Filter {
                    tracing::debug!("focus: Filter -> List");
                    s.focus = Focus::List;
                }
            }

            // Tab-cycle focus on the main tab: List → Preview → Filter → List
            AppEvent::FocusNext if on_main => {
                let next = match s.focus {
                    Focus::List => Focus::Preview,
                    Focus::Preview => Focus::Filter,
                    Focus::Filter | Focus::Command => Focus::List,
                };
                tracing::debug!(from = ?s.focus, to = ?next, "focus cycle");
                s.focus = next;
            }

            AppEvent::FilterFocus if on_main => {
                tracing::debug!("focus -> Filter");
                s.focus = Focus::Filter;
            }

            AppEvent::TabNext | AppEvent::TabPrev => {
                let n = s.tabs.len();
                s.active_tab = if event == AppEvent::TabNext {
                    (s.active_tab + 1) % n
                } else {
                    (s.active_tab + n - 1) % n
                };
                tracing::debug!(tab = s.active_tab, "tab switched");
            }

            AppEvent::Enter if on_main && s.focus == Focus::Filter => {
                s.focus = Focus::List;
            }

            AppEvent::Enter if on_main => {
                if let Some(id) = s.selected_job().map(|job| job.id.clone()) {
                    s.open_detail(&id);
                }
            }

            AppEvent::Resize(_, _) => {}

            other => dispatch_to_focused(s, other),
        }
    }
}

/// True when a text-input widget has focus, so letters type rather than
/// trigger shortcuts.
fn is_insert_mode(focus: Focus) -> bool {
    matches!(focus, Focus::Filter | Focus::Command)
}

/// Route an event to whatever owns the current focus.
fn dispatch_to_focused(s: &mut AppState, event: AppEvent) {
    if let TabKind::Detail(detail) = &mut s.tabs[s.active_tab].kind {
        scroll(&mut detail.scroll, &event);
        return;
    }
    match s.focus {
        Focus::List => {
            let len = s.visible_jobs().len();
            if s.list.handle(&event, len) {
                s.preview_scroll = 0;
            }
        }
        Focus::Preview => scroll(&mut s.preview_scroll, &event),
        Focus::Filter => {
            if s.filter.handle(&event) {
                s.list.selected = 0;
                s.preview_scroll = 0;
            }
        }
        Focus::Command => {}
    }
}

fn scroll(offset: &mut u16, event: &AppEvent) {
    *offset = match event {
        AppEvent::Nav(Direction::Up) => offset.saturating_sub(1),
        AppEvent::Nav(Direction::Down) => offset.saturating_add(1),
        AppEvent::ScrollUp => offset.saturating_sub(PAGE_STEP),
        AppEvent::ScrollDown => offset.saturating_add(PAGE_STEP),
        AppEvent::ToTop => 0,
        _ => *offset,
    };
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let tab = &state.tabs[state.active_tab];
    let relative = state.config.ui.relative_dates;

    match &tab.kind {
        TabKind::Main => {
            // tab bar | body | filter bar | status line
            let [tabs_area, body, filter_area, status_area] = Layout::vertical([
                Constraint::Length(1),
                Constraint::Fill(1),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .areas(area);
            let pct = state.config.ui.list_pane_width_pct.clamp(10, 90);
            let [list_area, preview_area] =
                Layout::horizontal([Constraint::Percentage(pct), Constraint::Fill(1)]).areas(body);

            frame.render_widget(TabBar::new(&state.tabs, state.active_tab, &state.theme), tabs_area);

            let jobs = state.visible_jobs();
            let counts = match &state.load {
                LoadState::Loaded(catalog) => Some((jobs.len(), catalog.len())),
                _ => None,
            };
            let preview = match (&state.load, jobs.get(state.list.selected).copied()) {
                (_, Some(job)) => DetailView::Job(job),
                (LoadState::Loaded(_), None) => DetailView::NotFound,
                (LoadState::Failed(msg), None) => DetailView::Failed(msg),
                (LoadState::Loading, None) => DetailView::Loading,
            };
            let list_view = match &state.load {
                LoadState::Loading => ListView::Loading,
                LoadState::Failed(msg) => ListView::Failed(msg),
                LoadState::Loaded(_) => ListView::Jobs(jobs),
            };

            frame.render_widget(
                JobList::new(list_view, &state.list, state.focus == Focus::List, &state.theme)
                    .relative_dates(relative),
                list_area,
            );
            frame.render_widget(
                JobDetail::new(preview, state.focus == Focus::Preview, &state.theme)
                    .title("Preview")
                    .scroll(state.preview_scroll)
                    .show_schema(state.preview_schema)
                    .relative_dates(relative),
                preview_area,
            );
            let filter = FilterBar::new(&state.filter, state.focus == Focus::Filter, counts, &state.theme);
            let cursor = filter.cursor_position(filter_area);
            frame.render_widget(filter, filter_area);
            frame.render_widget(StatusLine::new(state.status.as_ref(), &state.theme), status_area);

            if state.focus == Focus::Filter && !state.show_help {
                frame.set_cursor_position(cursor);
            }
        }
        TabKind::Detail(detail) => {
            let [tabs_area, body, status_area] =
                Layout::vertical([Constraint::Length(1), Constraint::Fill(1), Constraint::Length(1)]).areas(area);
            frame.render_widget(TabBar::new(&state.tabs, state.active_tab, &state.theme), tabs_area);
            frame.render_widget(
                JobDetail::new(state.detail_view(&detail.id), true, &state.theme)
                    .title(&tab.label)
                    .scroll(detail.scroll)
                    .show_schema(detail.show_schema)
                    .relative_dates(relative),
                body,
            );
            frame.render_widget(StatusLine::new(state.status.as_ref(), &state.theme), status_area);
        }
    }

    if state.show_help {
        frame.render_widget(HelpPopup::new(&state.theme), area);
    }

    // Command bar overlays the bottom row of the screen
    if state.focus == Focus::Command {
        let cmd_area = Rect { y: area.bottom().saturating_sub(1), height: 1, ..area };
        frame.render_widget(CommandBar::new(&state.command_bar, &state.theme), cmd_area);
        frame.set_cursor_position((state.command_bar.cursor_col(cmd_area), cmd_area.y));
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
