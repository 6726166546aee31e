//! jobboard TUI — ratatui application shell.

pub mod app;
pub mod commands;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::App;

use anyhow::Context;
use jobboard_core::config::Config;
use jobboard_sheets::{load_catalog, DataSource};
use tokio::sync::oneshot;

/// Start the TUI. The job sheet is fetched on a background runtime while
/// the interface is already up and showing the loading state.
pub fn run(config: Config, source: DataSource) -> anyhow::Result<()> {
    let theme = theme::Theme::by_name(&config.ui.theme).unwrap_or_else(|| {
        tracing::warn!(theme = %config.ui.theme, "unknown theme, using default");
        theme::Theme::load_default()
    });

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    let (tx, rx) = oneshot::channel();
    runtime.spawn(async move {
        let result = load_catalog(&source).await;
        // The receiver is gone only if the UI already exited.
        let _ = tx.send(result);
    });

    App::new(config, theme, rx).run()
}
