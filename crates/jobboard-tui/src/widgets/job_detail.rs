//! Job detail — full view of one posting, used by the preview pane and by
//! detail tabs. `:schema` swaps the body for the schema.org JSON-LD block.

use crate::theme::Theme;
use chrono::{DateTime, Utc};
use jobboard_core::display::{posted_ago, salary_range, type_label};
use jobboard_core::structured_data::JobPosting;
use jobboard_core::JobRecord;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};

/// What a detail pane shows.
#[derive(Debug, Clone, Copy)]
pub enum DetailView<'a> {
    Loading,
    Failed(&'a str),
    NotFound,
    Job(&'a JobRecord),
}

pub struct JobDetail<'a> {
    view: DetailView<'a>,
    focused: bool,
    scroll: u16,
    show_schema: bool,
    relative_dates: bool,
    now: DateTime<Utc>,
    title: &'a str,
    theme: &'a Theme,
}

impl<'a> JobDetail<'a> {
    pub fn new(view: DetailView<'a>, focused: bool, theme: &'a Theme) -> Self {
        Self {
            view,
            focused,
            scroll: 0,
            show_schema: false,
            relative_dates: true,
            now: Utc::now(),
            title: "Details",
            theme,
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    pub fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }

    pub fn show_schema(mut self, show: bool) -> Self {
        self.show_schema = show;
        self
    }

    pub fn relative_dates(mut self, relative: bool) -> Self {
        self.relative_dates = relative;
        self
    }

    pub fn now(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    fn lines(&self) -> Vec<Line<'a>> {
        match self.view {
            DetailView::Loading => vec![Line::from(Span::styled("Loading job details...", self.theme.muted))],
            DetailView::Failed(msg) => vec![Line::from(Span::styled(
                format!("Error loading job details: {msg}"),
                self.theme.error,
            ))],
            DetailView::NotFound => vec![Line::from(Span::styled("Job not found", self.theme.error))],
            DetailView::Job(job) if self.show_schema => schema_lines(job, self.now, self.theme),
            DetailView::Job(job) => job_lines(job, self.relative_dates, self.now, self.theme),
        }
    }
}

fn job_lines<'a>(job: &'a JobRecord, relative_dates: bool, now: DateTime<Utc>, theme: &Theme) -> Vec<Line<'a>> {
    let posted = if relative_dates {
        format!("Posted {}", posted_ago(job.posted_date, now))
    } else {
        format!("Posted {}", job.posted_date.format("%Y-%m-%d"))
    };

    let mut lines = vec![
        Line::from(Span::styled(job.title.as_str(), theme.title)),
        Line::from(Span::styled(job.company.as_str(), theme.company_style(&job.company))),
        Line::from(vec![
            Span::raw(job.location.as_str()),
            Span::styled(" · ", theme.muted),
            Span::styled(type_label(&job.job_type), theme.type_style(&job.job_type)),
        ]),
        Line::from(Span::styled(salary_range(&job.salary), theme.salary)),
        Line::from(Span::styled(posted, theme.muted)),
        Line::default(),
        Line::from(Span::styled("Description", theme.title)),
    ];
    lines.extend(job.description.lines().map(Line::from));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled("Requirements", theme.title)));
    lines.extend(job.requirements.iter().map(|r| Line::from(format!("  • {r}"))));
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled("Apply: ", theme.muted),
        Span::raw(job.application_url.as_str()),
    ]));
    lines
}

fn schema_lines<'a>(job: &JobRecord, now: DateTime<Utc>, theme: &Theme) -> Vec<Line<'a>> {
    match JobPosting::from_record_at(job, now).to_json() {
        Ok(json) => json.lines().map(|l| Line::from(l.to_string())).collect(),
        Err(e) => vec![Line::from(Span::styled(format!("Error rendering JSON-LD: {e}"), theme.error))],
    }
}

impl Widget for JobDetail<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };
        let title = if self.show_schema {
            format!("{} (JSON-LD)", self.title)
        } else {
            self.title.to_string()
        };
        let block = Block::bordered().title(title).border_style(border_style);

        Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(area, buf);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
