// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

use crate::app::{AppState, StatusMessage};
use crate::theme::Theme;
use chrono::Utc;
use jobboard_sheets::template::{write_template, TEMPLATE_FAILED};
use jobboard_sheets::upload::upload_file;
use std::path::PathBuf;

/// A parsed, validated command ready to be executed by the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Close the active detail tab; on the main tab, quit
    Quit,
    // Quit regardless of the active tab
    Exit,
    Help,
    Theme(String),
    // Open a detail tab for a job id
    Open(String),
    // Write the template workbook, optionally to an explicit path
    Template(Option<PathBuf>),
    Upload(PathBuf),
    // Toggle the JSON-LD view of the shown job
    Schema,
}

impl Command {
    /// Parse a raw command string (the text after the `:` prefix).
    ///
    /// An empty string returns `Err("")` as a sentinel meaning "close
    /// without acting".
    pub fn parse(input: &str) -> Result<Command, String> {
        let input = input.trim();
        if input.is_empty() {
            return Err(String::new());
        }

        let (word, rest) = input
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((input, ""));

        match word {
            "q" | "quit" => Ok(Command::Quit),
            "q!" | "quit!" => Ok(Command::Exit),
            "help" => Ok(Command::Help),
            "schema" => Ok(Command::Schema),
            "theme" if rest.is_empty() => Err("usage: theme <default|gruvbox>".to_string()),
            "theme" => Ok(Command::Theme(rest.to_string())),
            "open" if rest.is_empty() => Err("usage: open <id>".to_string()),
            "open" => Ok(Command::Open(rest.to_string())),
            "template" if rest.is_empty() => Ok(Command::Template(None)),
            "template" => Ok(Command::Template(Some(PathBuf::from(rest)))),
            "upload" if rest.is_empty() => Err("usage: upload <path>".to_string()),
            "upload" => Ok(Command::Upload(PathBuf::from(rest))),
            other => Err(format!("unknown command: {other}")),
        }
    }
}

/// Execute a parsed [`Command`] against the application state.
pub fn execute_command(s: &mut AppState, cmd: Command) {
    match cmd {
        Command::Quit => s.close_tab_or_quit(),
        Command::Exit => {
            s.quit = true;
        }
        Command::Help => {
            s.show_help = !s.show_help;
        }
        Command::Theme(name) => match Theme::by_name(&name) {
            Some(theme) => {
                tracing::debug!(theme = %name, "theme switched");
                s.theme = theme;
            }
            None => s.status = Some(StatusMessage::error(format!("unknown theme: {name}"))),
        },
        Command::Open(id) => s.open_detail(&id),
        Command::Template(path) => {
            let path = path.unwrap_or_else(|| PathBuf::from(&s.config.template.file_name));
            s.status = Some(match write_template(&path, Utc::now().date_naive()) {
                Ok(()) => StatusMessage::info(format!("Template written to {}", path.display())),
                Err(e) => {
                    tracing::error!(path = %path.display(), error = %e, "template export failed");
                    StatusMessage::error(TEMPLATE_FAILED)
                }
            });
        }
        Command::Upload(path) => {
            s.status = Some(match upload_file(&path, Utc::now().date_naive()) {
                Ok(report) => StatusMessage::info(format!(
                    "{} ({} valid, {} skipped)",
                    report.message(),
                    report.jobs.len(),
                    report.skipped
                )),
                Err(e) => StatusMessage::error(e.to_string()),
            });
        }
        Command::Schema => s.toggle_schema(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_quit() {
        assert_eq!(Command::parse("q"), Ok(Command::Quit));
        assert_eq!(Command::parse("  quit  "), Ok(Command::Quit));
        assert_eq!(Command::parse("q!"), Ok(Command::Exit));
    }

    #[test]
    fn parse_theme() {
        assert_eq!(Command::parse("theme gruvbox"), Ok(Command::Theme("gruvbox".to_string())));
        assert!(Command::parse("theme").is_err());
    }

    #[test]
    fn parse_open() {
        assert_eq!(Command::parse("open 42"), Ok(Command::Open("42".to_string())));
        assert_eq!(Command::parse("open"), Err("usage: open <id>".to_string()));
    }

    #[test]
    fn parse_template_and_upload() {
        assert_eq!(Command::parse("template"), Ok(Command::Template(None)));
        assert_eq!(
            Command::parse("template out/jobs.xlsx"),
            Ok(Command::Template(Some(PathBuf::from("out/jobs.xlsx"))))
        );
        assert_eq!(
            Command::parse("upload ~/new jobs.xlsx"),
            Ok(Command::Upload(PathBuf::from("~/new jobs.xlsx")))
        );
        assert!(Command::parse("upload").is_err());
    }

    #[test]
    fn parse_help_and_schema() {
        assert_eq!(Command::parse("help"), Ok(Command::Help));
        assert_eq!(Command::parse("schema"), Ok(Command::Schema));
    }

    #[test]
    fn parse_empty_returns_sentinel_err() {
        assert_eq!(Command::parse(""), Err(String::new()));
        assert_eq!(Command::parse("  "), Err(String::new()));
    }

    #[test]
    fn parse_unknown() {
        let err = Command::parse("frobnicate").unwrap_err();
        assert!(err.contains("frobnicate"));
    }
}
