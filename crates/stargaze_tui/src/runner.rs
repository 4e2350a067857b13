//! TUI runner - main loop and backend integration.
//!
//! This module contains the main TUI loop that works with any backend
//! implementing the GalleryBackend trait.

use crate::{App, AppMode, Event, EventHandler, GalleryBackend};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use stargaze_core::GalleryConfig;
use stargaze_error::{StargazeResult, TuiError, TuiErrorKind};
use std::io;

/// Action requested by a key press that the loop must perform itself.
enum Action {
    /// Fetch the feed and repopulate the gallery
    Fetch,
}

/// Run the TUI with the provided backend.
///
/// # Arguments
///
/// * `backend` - Backend implementation for feed fetches
/// * `config` - Gallery configuration built at startup
pub async fn run_tui(
    backend: &mut dyn GalleryBackend,
    config: GalleryConfig,
) -> StargazeResult<()> {
    // Setup terminal
    enable_raw_mode().map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalSetup(format!(
            "Failed to enable raw mode: {}",
            e
        )))
    })?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture).map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalSetup(format!(
            "Failed to setup terminal: {}",
            e
        )))
    })?;

    let backend_impl = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend_impl).map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalSetup(format!(
            "Failed to create terminal: {}",
            e
        )))
    })?;

    // Create app state
    let mut app = App::new(config);
    let events = EventHandler::new(250);

    // Main loop
    while !app.should_quit {
        terminal
            .draw(|f| crate::ui::draw(f, &app))
            .map_err(|e| TuiError::new(TuiErrorKind::Rendering(format!("Failed to draw: {}", e))))?;

        let Ok(Some(event)) = events.next() else {
            continue;
        };
        let action = match event {
            Event::Key(key) => handle_key(&mut app, key),
            Event::Tick => None,
        };

        if let Some(Action::Fetch) = action
            && app.begin_fetch()
        {
            // Show the loading placeholder for one frame before the request
            // goes out; the fetch is awaited inline, which is what keeps the
            // trigger disabled for the duration.
            terminal.draw(|f| crate::ui::draw(f, &app)).map_err(|e| {
                TuiError::new(TuiErrorKind::Rendering(format!("Failed to draw: {}", e)))
            })?;

            let result = backend.fetch_gallery(&app.config.filter).await;
            if let Err(err) = &result {
                tracing::error!(error = %err, "Feed fetch failed");
            }
            app.finish_fetch(result);
        }
    }

    // Cleanup terminal
    disable_raw_mode().map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalRestore(format!(
            "Failed to disable raw mode: {}",
            e
        )))
    })?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalRestore(format!(
            "Failed to cleanup terminal: {}",
            e
        )))
    })?;
    terminal.show_cursor().map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalRestore(format!(
            "Failed to show cursor: {}",
            e
        )))
    })?;

    Ok(())
}

/// Handle a single key press, returning any action the loop must perform.
fn handle_key(app: &mut App, key: crossterm::event::KeyEvent) -> Option<Action> {
    use crossterm::event::{KeyCode, KeyModifiers};

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return None;
    }

    match app.mode {
        // While the overlay is open it owns the keys; Escape, the close key,
        // and stepping back all close it.
        AppMode::Detail => match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Backspace | KeyCode::Enter => {
                app.close_detail()
            }
            _ => {}
        },
        AppMode::Gallery => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => app.quit(),
            KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => app.select_next(),
            KeyCode::Enter => app.open_detail(),
            KeyCode::Char('f') => return Some(Action::Fetch),
            KeyCode::Char('d') => app.reroll_fact(),
            _ => {}
        },
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use stargaze_core::{MediaItem, MediaKind};
    use stargaze_feed::FeedOutcome;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn populated_app() -> App {
        let mut app = App::new(GalleryConfig::default());
        app.finish_fetch(Ok(FeedOutcome::Loaded(vec![MediaItem {
            title: Some("a".to_string()),
            media_type: MediaKind::Image,
            url: Some("https://x/a.jpg".to_string()),
            ..Default::default()
        }])));
        app
    }

    #[test]
    fn test_fetch_key_requests_action() {
        let mut app = App::new(GalleryConfig::default());
        assert!(matches!(
            handle_key(&mut app, key(KeyCode::Char('f'))),
            Some(Action::Fetch)
        ));
    }

    #[test]
    fn test_escape_closes_overlay_instead_of_quitting() {
        let mut app = populated_app();
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.mode, AppMode::Detail);

        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.mode, AppMode::Gallery);
        assert!(!app.should_quit);

        handle_key(&mut app, key(KeyCode::Esc));
        assert!(app.should_quit);
    }

    #[test]
    fn test_close_key_closes_overlay() {
        let mut app = populated_app();
        handle_key(&mut app, key(KeyCode::Enter));
        handle_key(&mut app, key(KeyCode::Char('q')));
        assert_eq!(app.mode, AppMode::Gallery);
        assert!(!app.should_quit);
    }
}
