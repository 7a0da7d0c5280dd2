//! Terminal front end.
//!
//! Owns the terminal for the lifetime of the session: raw mode, the alternate
//! screen and bracketed paste, so a drag-and-drop of files arrives as one
//! [`Event::Paste`] block. Every loop turn draws the screen, waits up to one
//! tick for input and then checks on the background merge.

mod input;
mod render;

pub use input::{Action, action_for};
pub use render::render;

use std::io::{self, Write};
use std::panic::{self, PanicHookInfo};
use std::sync::Arc;

use crossterm::event::{
    self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::session::{Session, SessionEvent};

/// Run the interactive UI until the user quits.
pub fn run(session: &mut Session) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.clear()?;

    let original_hook = chain_panic_hook(restore_terminal);
    let result = run_event_loop(&mut terminal, session);
    restore_panic_hook(original_hook);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

type PanicHook = Arc<dyn Fn(&PanicHookInfo<'_>) + Send + Sync + 'static>;

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
}

/// Run `cleanup` before the current panic hook. Returns that hook so it can
/// be put back with [`restore_panic_hook`].
fn chain_panic_hook(cleanup: fn()) -> PanicHook {
    let original: PanicHook = Arc::from(panic::take_hook());
    let chained = Arc::clone(&original);
    panic::set_hook(Box::new(move |panic_info| {
        cleanup();
        chained(panic_info);
    }));
    original
}

fn restore_panic_hook(original: PanicHook) {
    let _ = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| original(panic_info)));
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: &mut Session,
) -> io::Result<()> {
    let tick = session.config().tick;
    loop {
        terminal.draw(|frame| render(frame, session))?;

        if event::poll(tick)? {
            match event::read()? {
                Event::Paste(text) => {
                    session.ingest(&text);
                }
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(action) = action_for(key)
                        && !input::apply(session, action)
                    {
                        return Ok(());
                    }
                }
                _ => {}
            }
        }

        session.poll_merge();

        for event in session.drain_events() {
            if event == SessionEvent::Bell {
                let backend = terminal.backend_mut();
                backend.write_all(b"\x07")?;
                backend.flush()?;
            }
        }
    }
}
