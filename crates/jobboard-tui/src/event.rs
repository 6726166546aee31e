//! Semantic application events — crossterm key events mapped to a
//! widget-agnostic vocabulary so widgets never touch crossterm directly.
//!
//! # Keybindings
//!
//! | Key(s)                  | Event              |
//! |-------------------------|--------------------|
//! | `q`, `Ctrl+c`           | `Quit`             |
//! | `Tab`                   | `FocusNext`        |
//! | `/`                     | `FilterFocus`      |
//! | `PageUp`, `Ctrl+u`      | `ScrollUp`         |
//! | `PageDown`, `Ctrl+d`    | `ScrollDown`       |
//! | `g`                     | `ToTop`            |
//! | `G`                     | `ToBottom`         |
//! | `]`                     | `TabNext`          |
//! | `[`                     | `TabPrev`          |
//! | `↑` / `k`               | `Nav(Up)`          |
//! | `↓` / `j`               | `Nav(Down)`        |
//! | `←` / `h`               | `Nav(Left)`        |
//! | `→` / `l`               | `Nav(Right)`       |
//! | printable char          | `Char(c)`          |
//! | `Backspace`             | `Backspace`        |
//! | `Enter`                 | `Enter`            |
//! | terminal resize         | `Resize(w, h)`     |
//!
//! ## Insert mode
//!
//! While the filter bar or the command bar is focused the event loop calls
//! [`to_app_event_insert`] instead: every printable character (including
//! `q`, `g`, `G`, hjkl and brackets) becomes `Char`, arrows still produce
//! `Nav` so `←`/`→` move the text cursor, and only `Ctrl+c`, `Escape`,
//! `Enter`, `Tab` and `Backspace` keep their special bindings.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

/// Cardinal direction for list navigation and text-cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A semantic application event derived from a raw crossterm [`Event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Exit the application (or close the active detail tab).
    Quit,
    /// Move keyboard focus to the next pane.
    FocusNext,
    /// Transfer focus to the filter bar.
    FilterFocus,
    /// Page up in the focused list or detail view.
    ScrollUp,
    /// Page down in the focused list or detail view.
    ScrollDown,
    ToTop,
    ToBottom,
    TabNext,
    TabPrev,
    Nav(Direction),
    /// A printable character forwarded to the active text input.
    Char(char),
    Backspace,
    /// Open the selected job, or confirm the active input.
    Enter,
    Resize(u16, u16),
    /// Dismiss the active modal (filter focus, help popup, command bar).
    Escape,
}

/// Map a raw crossterm [`Event`] to an [`AppEvent`] (normal / navigation mode).
///
/// Returns `None` for mouse events and unbound keys.
pub fn to_app_event(event: Event) -> Option<AppEvent> {
    match event {
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::Key(key) => map_key(key),
        _ => None,
    }
}

/// Map a raw crossterm [`Event`] to an [`AppEvent`] for text-input mode.
pub fn to_app_event_insert(event: Event) -> Option<AppEvent> {
    match event {
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::Key(key) => map_key_insert(key),
        _ => None,
    }
}

fn map_key(key: KeyEvent) -> Option<AppEvent> {
    use KeyCode::*;
    use KeyModifiers as Mod;

    match key.code {
        Char('q') if key.modifiers == Mod::NONE => Some(AppEvent::Quit),
        Char('c') if key.modifiers == Mod::CONTROL => Some(AppEvent::Quit),

        Tab if key.modifiers == Mod::NONE => Some(AppEvent::FocusNext),
        Char('/') if key.modifiers == Mod::NONE => Some(AppEvent::FilterFocus),

        PageUp => Some(AppEvent::ScrollUp),
        PageDown => Some(AppEvent::ScrollDown),
        Char('u') if key.modifiers == Mod::CONTROL => Some(AppEvent::ScrollUp),
        Char('d') if key.modifiers == Mod::CONTROL => Some(AppEvent::ScrollDown),

        Char('g') if key.modifiers == Mod::NONE => Some(AppEvent::ToTop),
        // Uppercase: SHIFT may or may not be reported, match on the code alone
        Char('G') => Some(AppEvent::ToBottom),

        Char(']') if key.modifiers == Mod::NONE => Some(AppEvent::TabNext),
        Char('[') if key.modifiers == Mod::NONE => Some(AppEvent::TabPrev),

        Up | Char('k') if key.modifiers == Mod::NONE => Some(AppEvent::Nav(Direction::Up)),
        Down | Char('j') if key.modifiers == Mod::NONE => Some(AppEvent::Nav(Direction::Down)),
        Left | Char('h') if key.modifiers == Mod::NONE => Some(AppEvent::Nav(Direction::Left)),
        Right | Char('l') if key.modifiers == Mod::NONE => Some(AppEvent::Nav(Direction::Right)),

        Char(c) if key.modifiers == Mod::NONE || key.modifiers == Mod::SHIFT => {
            Some(AppEvent::Char(c))
        }

        Backspace if key.modifiers == Mod::NONE => Some(AppEvent::Backspace),
        Enter if key.modifiers == Mod::NONE => Some(AppEvent::Enter),
        Esc => Some(AppEvent::Escape),

        _ => None,
    }
}

fn map_key_insert(key: KeyEvent) -> Option<AppEvent> {
    use KeyCode::*;
    use KeyModifiers as Mod;

    match key.code {
        Char('c') if key.modifiers == Mod::CONTROL => Some(AppEvent::Quit),

        Up => Some(AppEvent::Nav(Direction::Up)),
        Down => Some(AppEvent::Nav(Direction::Down)),
        Left => Some(AppEvent::Nav(Direction::Left)),
        Right => Some(AppEvent::Nav(Direction::Right)),

        Tab if key.modifiers == Mod::NONE => Some(AppEvent::FocusNext),

        Char(c) if key.modifiers == Mod::NONE || key.modifiers == Mod::SHIFT => {
            Some(AppEvent::Char(c))
        }

        Backspace if key.modifiers == Mod::NONE => Some(AppEvent::Backspace),
        Enter if key.modifiers == Mod::NONE => Some(AppEvent::Enter),
        Esc => Some(AppEvent::Escape),

        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
