//! Job list — the selectable left pane of the main tab.
//!
//! # Navigation (when focused)
//!
//! | Key | Action |
//! |-----|--------|
//! | `↑` / `k`, `↓` / `j` | Move selection by one |
//! | `PageUp` / `PageDown` | Move selection by a page |
//! | `g` / `G` | First / last job |
//! | `Enter` | Open the selected job in a detail tab |

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use chrono::{DateTime, Utc};
use jobboard_core::display::{posted_ago, type_label};
use jobboard_core::JobRecord;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget, Wrap},
};

const PAGE_STEP: usize = 10;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct JobListState {
    /// Index into the currently filtered jobs.
    pub selected: usize,
}

impl JobListState {
    /// Apply a navigation event against a list of `len` jobs. Returns `true`
    /// when the selection moved.
    pub fn handle(&mut self, event: &AppEvent, len: usize) -> bool {
        if len == 0 {
            return false;
        }
        let last = len - 1;
        let before = self.selected;
        self.selected = match event {
            AppEvent::Nav(Direction::Up) => self.selected.saturating_sub(1),
            AppEvent::Nav(Direction::Down) => (self.selected + 1).min(last),
            AppEvent::ScrollUp => self.selected.saturating_sub(PAGE_STEP),
            AppEvent::ScrollDown => (self.selected + PAGE_STEP).min(last),
            AppEvent::ToTop => 0,
            AppEvent::ToBottom => last,
            _ => self.selected,
        }
        .min(last);
        if self.selected != before {
            tracing::debug!(selected = self.selected, "list: selection moved");
        }
        self.selected != before
    }

    /// Clamp the selection after the list shrank (e.g. a new filter).
    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

/// What the list pane shows.
#[derive(Debug)]
pub enum ListView<'a> {
    Loading,
    Failed(&'a str),
    Jobs(Vec<&'a JobRecord>),
}

pub struct JobList<'a> {
    view: ListView<'a>,
    state: &'a JobListState,
    focused: bool,
    relative_dates: bool,
    now: DateTime<Utc>,
    theme: &'a Theme,
}

impl<'a> JobList<'a> {
    pub fn new(view: ListView<'a>, state: &'a JobListState, focused: bool, theme: &'a Theme) -> Self {
        Self { view, state, focused, relative_dates: true, now: Utc::now(), theme }
    }

    pub fn relative_dates(mut self, relative: bool) -> Self {
        self.relative_dates = relative;
        self
    }

    pub fn now(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }
}

impl Widget for JobList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };
        let block = Block::bordered().title("Jobs").border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let jobs = match self.view {
            ListView::Loading => {
                Paragraph::new(Span::styled("Loading jobs...", self.theme.muted)).render(inner, buf);
                return;
            }
            ListView::Failed(msg) => {
                Paragraph::new(Span::styled(format!("Error loading jobs: {msg}"), self.theme.error))
                    .wrap(Wrap { trim: true })
                    .render(inner, buf);
                return;
            }
            ListView::Jobs(jobs) if jobs.is_empty() => {
                Paragraph::new(Span::styled("No jobs found.", self.theme.muted)).render(inner, buf);
                return;
            }
            ListView::Jobs(jobs) => jobs,
        };

        // Two rows per job: title line, then company / type / date.
        let per_page = (inner.height as usize / 2).max(1);
        let selected = self.state.selected.min(jobs.len() - 1);
        let start = (selected + 1).saturating_sub(per_page);
        let end = (start + per_page).min(jobs.len());

        let mut lines: Vec<Line> = Vec::with_capacity((end - start) * 2);
        for (index, job) in jobs[start..end].iter().enumerate() {
            let highlight = if start + index == selected {
                self.theme.selected
            } else {
                Style::default()
            };
            let posted = if self.relative_dates {
                posted_ago(job.posted_date, self.now)
            } else {
                job.posted_date.format("%Y-%m-%d").to_string()
            };
            lines.push(Line::from(Span::styled(job.title.clone(), self.theme.title)).patch_style(highlight));
            lines.push(
                Line::from(vec![
                    Span::raw("  "),
                    Span::styled(job.company.clone(), self.theme.company_style(&job.company)),
                    Span::styled(" · ", self.theme.muted),
                    Span::styled(type_label(&job.job_type), self.theme.type_style(&job.job_type)),
                    Span::styled(format!(" · {posted}"), self.theme.muted),
                ])
                .patch_style(highlight),
            );
        }

        let text_area = Rect { width: inner.width.saturating_sub(1), ..inner };
        let sb_area = Rect { x: inner.right().saturating_sub(1), width: 1, ..inner };
        Paragraph::new(lines).render(text_area, buf);

        let mut sb_state = ScrollbarState::new(jobs.len())
            .position(selected)
            .viewport_content_length(per_page);
        StatefulWidget::render(
            Scrollbar::new(ScrollbarOrientation::VerticalRight).begin_symbol(None).end_symbol(None),
            sb_area,
            buf,
            &mut sb_state,
        );
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
