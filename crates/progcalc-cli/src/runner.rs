//! Terminal session: setup, event loop and teardown

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use progcalc::clipboard::{Clipboard, MemoryClipboard};
use progcalc::config::ShellConfig;
use progcalc::tui::{render, CalculatorApp};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::Rect;
use ratatui::Terminal;
use tracing::info;

use crate::error::{CliError, CliResult};

/// Clipboard chosen at launch
pub type BoxedClipboard = Box<dyn Clipboard>;

/// Runs the calculator until the user quits.
///
/// The terminal is restored on every exit path, including errors from the
/// event loop.
pub fn run(config: &ShellConfig) -> CliResult<()> {
    let mut app = CalculatorApp::with_clipboard(config, clipboard_for(config));
    let tick = Duration::from_millis(config.tick_ms);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
        let _ = restore();
        return Err(e.into());
    }
    info!(tick_ms = config.tick_ms, panels = ?config.panels(), "shell started");

    let result = Terminal::new(CrosstermBackend::new(stdout))
        .map_err(CliError::from)
        .and_then(|mut terminal| event_loop(&mut terminal, &mut app, tick));

    let restored = restore();
    info!("shell stopped");
    result?;
    restored
}

fn restore() -> CliResult<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show)?;
    Ok(())
}

/// Draws, then waits at most until the next tick for one input event.
fn event_loop<B: Backend, C: Clipboard>(
    terminal: &mut Terminal<B>,
    app: &mut CalculatorApp<C>,
    tick: Duration,
) -> CliResult<()> {
    let mut last_tick = Instant::now();
    while !app.should_quit() {
        terminal.draw(|frame| render(app, frame))?;

        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            let size = terminal.size()?;
            dispatch(app, event::read()?, Rect::new(0, 0, size.width, size.height));
        }
        if last_tick.elapsed() >= tick {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
    Ok(())
}

/// Routes one terminal event to the app; `area` is the current frame size
pub fn dispatch<C: Clipboard>(app: &mut CalculatorApp<C>, event: Event, area: Rect) {
    match event {
        Event::Key(key) => app.handle_key_event(key),
        Event::Mouse(mouse) => app.handle_mouse_event(mouse, area),
        _ => {}
    }
}

/// The system clipboard when enabled and available, else an in-memory one
#[must_use]
pub fn clipboard_for(config: &ShellConfig) -> BoxedClipboard {
    if config.clipboard {
        system_clipboard()
    } else {
        Box::new(MemoryClipboard::new())
    }
}

#[cfg(feature = "system-clipboard")]
fn system_clipboard() -> BoxedClipboard {
    Box::new(progcalc::clipboard::SystemClipboard::new())
}

#[cfg(not(feature = "system-clipboard"))]
fn system_clipboard() -> BoxedClipboard {
    tracing::warn!("built without system clipboard support, copies stay in memory");
    Box::new(MemoryClipboard::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{
        KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };

    fn app() -> CalculatorApp<BoxedClipboard> {
        let config = ShellConfig::new().with_clipboard(false);
        CalculatorApp::with_clipboard(&config, clipboard_for(&config))
    }

    fn key(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 40,
    };

    #[test]
    fn test_dispatch_keys() {
        let mut app = app();
        for c in ['1', '2', '+', '3'] {
            dispatch(&mut app, key(c), AREA);
        }
        dispatch(
            &mut app,
            Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            AREA,
        );
        assert_eq!(app.state().display(), "15");
    }

    #[test]
    fn test_dispatch_mouse_uses_area() {
        let mut app = app();
        let toggle = app.layout(AREA).history_toggle;
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: toggle.x,
            row: toggle.y,
            modifiers: KeyModifiers::NONE,
        };
        dispatch(&mut app, Event::Mouse(click), AREA);
        assert!(app.state().panels().history);
    }

    #[test]
    fn test_dispatch_ignores_other_events() {
        let mut app = app();
        dispatch(&mut app, Event::Resize(100, 50), AREA);
        dispatch(&mut app, Event::FocusLost, AREA);
        assert_eq!(app.state().display(), "0");
        assert!(!app.should_quit());
    }

    #[test]
    fn test_dispatch_quit() {
        let mut app = app();
        dispatch(&mut app, key('q'), AREA);
        assert!(app.should_quit());
    }

    #[test]
    fn test_memory_clipboard_when_disabled() {
        let config = ShellConfig::new().with_clipboard(false);
        let mut app = CalculatorApp::with_clipboard(&config, clipboard_for(&config));
        for c in ['2', '5', '5', 'x'] {
            dispatch(&mut app, key(c), AREA);
        }
        assert!(format!("{:?}", app.clipboard()).contains("\"FF\""));
    }
}
