//! TUI application state and logic

use crate::game::{GameState, MAX_GUESSES, Session, StreakRecord, SubmitOutcome};
use crate::output::formatters;
use crate::storage::StateStore;
use crate::wordlists::ValidGuesses;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::warn;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How long a transient notice stays on screen
const NOTICE_TTL: Duration = Duration::from_millis(1800);

/// Event poll interval; also drives the once-per-second timer redraw
const TICK: Duration = Duration::from_millis(250);

#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    pub style: NoticeStyle,
    shown_at: Instant,
    sticky: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeStyle {
    Info,
    Success,
    Error,
}

/// Application state
pub struct App<'a> {
    pub session: Session,
    valid: &'a ValidGuesses,
    store: &'a dyn StateStore,
    pub notice: Option<Notice>,
    pub streak: StreakRecord,
    pub should_quit: bool,
    elapsed_base: Duration,
    started: Instant,
    frozen_elapsed: Option<Duration>,
}

impl<'a> App<'a> {
    /// Build the app around a session, resumed or fresh
    ///
    /// `elapsed_secs` is the restored timer snapshot (zero for a fresh game).
    #[must_use]
    pub fn new(
        session: Session,
        elapsed_secs: u64,
        valid: &'a ValidGuesses,
        store: &'a dyn StateStore,
    ) -> Self {
        let elapsed_base = Duration::from_secs(elapsed_secs);
        let frozen_elapsed = session.state().is_over().then_some(elapsed_base);
        let streak = store.load_streak();

        let mut app = Self {
            session,
            valid,
            store,
            notice: None,
            streak,
            should_quit: false,
            elapsed_base,
            started: Instant::now(),
            frozen_elapsed,
        };

        match app.session.state() {
            GameState::Won => app.show_win_notice(),
            GameState::Lost => app.show_loss_notice(),
            GameState::InProgress => app.set_notice(
                "Type a guess, Enter to submit, Esc to quit",
                NoticeStyle::Info,
                true,
            ),
        }
        app
    }

    /// Elapsed play time, frozen at the moment the game ended
    #[must_use]
    pub fn elapsed_secs(&self) -> u64 {
        self.frozen_elapsed
            .unwrap_or_else(|| self.elapsed_base + self.started.elapsed())
            .as_secs()
    }

    fn on_letter(&mut self, key: char) {
        if self.session.apply_letter(key) {
            self.persist();
        }
    }

    fn on_backspace(&mut self) {
        if self.session.apply_backspace() {
            self.persist();
        }
    }

    fn on_enter(&mut self) {
        match self.session.submit_guess(self.valid) {
            SubmitOutcome::Accepted { state, .. } => {
                match state {
                    GameState::Won => {
                        self.frozen_elapsed =
                            Some(self.elapsed_base + self.started.elapsed());
                        self.record_win();
                        self.show_win_notice();
                    }
                    GameState::Lost => {
                        self.frozen_elapsed =
                            Some(self.elapsed_base + self.started.elapsed());
                        self.show_loss_notice();
                    }
                    GameState::InProgress => self.notice = None,
                }
                self.persist();
            }
            SubmitOutcome::NotAWord => {
                self.set_notice("Not a valid word", NoticeStyle::Error, false);
            }
            SubmitOutcome::Incomplete | SubmitOutcome::Finished => {}
        }
    }

    fn record_win(&mut self) {
        self.streak.record_win(self.session.puzzle().date);
        if let Err(e) = self.store.save_streak(&self.streak) {
            warn!("cannot save streak: {e}");
        }
    }

    fn show_win_notice(&mut self) {
        let used = self.session.attempts().len();
        let time = formatters::elapsed(self.elapsed_secs());
        self.set_notice(
            &format!("Solved today's Physicle in {used}/{MAX_GUESSES} guesses! Time: {time}"),
            NoticeStyle::Success,
            true,
        );
    }

    fn show_loss_notice(&mut self) {
        let word = self.session.puzzle().word.text();
        self.set_notice(
            &format!("Out of guesses. The word was: {word}"),
            NoticeStyle::Error,
            true,
        );
    }

    fn set_notice(&mut self, text: &str, style: NoticeStyle, sticky: bool) {
        self.notice = Some(Notice {
            text: text.to_string(),
            style,
            shown_at: Instant::now(),
            sticky,
        });
    }

    /// Drop a transient notice once its time is up
    pub fn expire_notice(&mut self) {
        let expired = self
            .notice
            .as_ref()
            .is_some_and(|n| !n.sticky && n.shown_at.elapsed() > NOTICE_TTL);
        if expired {
            self.notice = None;
        }
    }

    fn persist(&self) {
        let saved = self.session.to_saved(self.elapsed_secs());
        if let Err(e) = self.store.save_session(&saved) {
            warn!("cannot save session: {e}");
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        app.expire_notice();
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Poll with a timeout so the timer keeps ticking without input
        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
        {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Esc => {
                    app.should_quit = true;
                }
                KeyCode::Char('q') if app.session.state().is_over() => {
                    // Letters are game input while playing; q only quits
                    // once the board is locked
                    app.should_quit = true;
                }
                KeyCode::Char(c) => app.on_letter(c),
                KeyCode::Backspace => app.on_backspace(),
                KeyCode::Enter => app.on_enter(),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
