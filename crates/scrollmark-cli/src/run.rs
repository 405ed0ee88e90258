use std::io;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};

use scrollmark_core::AppConfig;
use scrollmark_tui::{
    app::Pager,
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    keymap::Keymap,
    widgets::{ContentWidget, ProgressBarWidget, StatusBarWidget},
};

pub fn run(config: Arc<AppConfig>, text: &str, title: &str) -> Result<()> {
    let keymap = Keymap::from_config(&config.keymap);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle("Scrollmark")
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Mount the host view. Its progress tracker subscribes here and is
    // released in close() below, or on drop for the `?` exit paths.
    let mut pager = Pager::new(text, title, config.clone());
    let event_handler = EventHandler::new(config.ui.tick_rate_ms, &config.scroll);

    // Checked at the END of each iteration to pick the NEXT iteration's
    // tick rate
    let mut needs_fast_update = false;

    // Main loop
    loop {
        // Advance the scroll animation
        pager.tick();

        // Draw UI
        terminal.draw(|frame| {
            let size = frame.area();
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1), // progress bar
                    Constraint::Min(1),    // content
                    Constraint::Length(1), // status bar
                ])
                .split(size);

            ContentWidget::render(frame, layout[1], &mut pager);
            ProgressBarWidget::render(frame, layout[0], pager.progress().y);
            StatusBarWidget::render(frame, layout[2], &pager);
        })?;

        // Handle events (faster tick rate while a scroll animation runs)
        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, pager.pending_key, &keymap);
                    pager.apply(action);
                }
                AppEvent::Wheel(notches) => pager.wheel(notches),
                AppEvent::Resize(_, _) => {
                    // The next draw records the new content area; the pager
                    // turns that into a resize notification
                }
                AppEvent::Tick => {}
            }
        }

        needs_fast_update = pager.needs_fast_tick();

        if pager.should_quit {
            break;
        }
    }

    // Unmount the host view before tearing the terminal down
    pager.close();

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
