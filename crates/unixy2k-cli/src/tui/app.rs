//! # Main TUI Application
//!
//! Terminal runtime for the countdown screen: sets up the alternate screen,
//! feeds crossterm events and clock ticks into the state machine, and
//! executes the commands it returns.

use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use unixy2k_core::PhysicalClock;

use super::state::{transition, TuiCommand, TuiMessage, TuiState};
use super::styles::Styles;
use super::view;
use crate::Result;

/// Full-screen countdown application
pub struct TuiApp<C> {
    clock: C,
    styles: Styles,
    tick: Duration,
    state: TuiState,
    next_tick: Option<Instant>,
    should_quit: bool,
}

impl<C: PhysicalClock> TuiApp<C> {
    /// Create a new TUI application ticking every `tick_ms`
    pub fn new(clock: C, styles: Styles, tick_ms: u64) -> Self {
        Self {
            clock,
            styles,
            tick: Duration::from_millis(tick_ms),
            state: TuiState::new(),
            next_tick: None,
            should_quit: false,
        }
    }

    /// Run the TUI application
    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal, restoring it on panic
        install_restore_hook(|| {
            let _ = restore_terminal();
        });
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let res = self.run_app(&mut terminal).await;

        restore_terminal()?;
        terminal.show_cursor()?;

        res
    }

    /// Main application loop
    async fn run_app<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let (state, commands) = TuiState::init();
        self.state = state;
        self.apply(commands);

        let status = crate::handlers::sample(&self.clock).await;
        self.dispatch(TuiMessage::Tick(status));

        // Draw the placeholder before the first size report arrives
        terminal.draw(|f| view::render(f, &self.state, &self.styles))?;
        let size = terminal.size()?;
        self.dispatch(TuiMessage::Resize {
            width: size.width,
            height: size.height,
        });

        while !self.should_quit {
            if self.tick_due() {
                self.next_tick = None;
                let status = crate::handlers::sample(&self.clock).await;
                self.dispatch(TuiMessage::Tick(status));
            }

            terminal.draw(|f| view::render(f, &self.state, &self.styles))?;

            if event::poll(self.poll_timeout())? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.dispatch(TuiMessage::Key(key));
                    }
                    Event::Resize(width, height) => {
                        self.dispatch(TuiMessage::Resize { width, height });
                    }
                    _ => {}
                }
            }
        }

        tracing::debug!("countdown screen closed");
        Ok(())
    }

    fn dispatch(&mut self, message: TuiMessage) {
        let (state, commands) = transition(&self.state, message);
        if let Some(error) = state.entered_error(&self.state) {
            tracing::warn!(error = %error, "failed to read clock");
        }
        self.state = state;
        self.apply(commands);
    }

    fn apply(&mut self, commands: Vec<TuiCommand>) {
        for command in commands {
            match command {
                TuiCommand::ScheduleTick => self.next_tick = Some(Instant::now() + self.tick),
                TuiCommand::Quit => self.should_quit = true,
            }
        }
    }

    fn tick_due(&self) -> bool {
        self.next_tick.is_some_and(|at| Instant::now() >= at)
    }

    fn poll_timeout(&self) -> Duration {
        self.next_tick
            .map_or(self.tick, |at| at.saturating_duration_since(Instant::now()))
    }

    /// Get reference to app state
    pub fn state(&self) -> &TuiState {
        &self.state
    }
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)
}

/// Run `restore` before the current panic hook reports the panic
fn install_restore_hook<F>(restore: F)
where
    F: Fn() + Send + Sync + 'static,
{
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore();
        previous(info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use unixy2k_core::FixedClock;

    fn app() -> TuiApp<FixedClock> {
        TuiApp::new(FixedClock::from_epoch(0).unwrap(), Styles::default(), 100)
    }

    #[test]
    fn test_init_schedules_tick() {
        let mut app = app();
        assert_eq!(app.poll_timeout(), Duration::from_millis(100));

        let (state, commands) = TuiState::init();
        app.state = state;
        app.apply(commands);
        assert!(app.next_tick.is_some());
        assert!(app.poll_timeout() <= Duration::from_millis(100));
    }

    #[tokio::test]
    async fn test_tick_then_quit() {
        let mut app = app();
        let status = crate::handlers::sample(&app.clock).await;
        app.dispatch(TuiMessage::Tick(status));
        assert!(!app.tick_due());
        assert!(app.poll_timeout() <= Duration::from_millis(100));
        assert_eq!(app.state().status().map(|s| s.epoch_seconds), Some(0));

        app.dispatch(TuiMessage::Key(crossterm::event::KeyEvent::new(
            crossterm::event::KeyCode::Char('q'),
            crossterm::event::KeyModifiers::NONE,
        )));
        assert!(app.should_quit);
    }

    #[test]
    fn test_draws_after_resize() {
        let mut app = app();
        app.dispatch(TuiMessage::Resize {
            width: 80,
            height: 20,
        });
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal
            .draw(|f| view::render(f, app.state(), &app.styles))
            .unwrap();
        assert!(!app.state().is_initializing());
    }

    #[test]
    fn test_panic_hook_restores_terminal_first() {
        let restored = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&restored);
        install_restore_hook(move || flag.store(true, Ordering::SeqCst));

        let result = std::panic::catch_unwind(|| panic!("draw failed"));
        // back to the default hook
        drop(std::panic::take_hook());

        assert!(result.is_err());
        assert!(restored.load(Ordering::SeqCst));
    }
}
