use std::time::{Duration, Instant};

use crate::config::Config;
use crate::error::Result;
use crate::keymap::{action_for, Action};
use crate::runtime::AppEvent;
use crate::session::TypingSession;

/// Redraw at least this often so the screen never looks frozen.
pub const UI_REFRESH: Duration = Duration::from_millis(250);

#[derive(Debug)]
pub struct App {
    pub session: TypingSession,
    should_quit: bool,
    input_closed: bool,
}

impl App {
    pub fn new(session: TypingSession) -> Self {
        Self {
            session,
            should_quit: false,
            input_closed: false,
        }
    }

    pub fn from_config(cfg: &Config) -> Result<Self> {
        cfg.validate()?;
        let vocabulary = cfg.vocabulary()?;
        Ok(Self::new(TypingSession::new(
            vocabulary,
            cfg.mode,
            cfg.duration_secs,
        )))
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// True once the input stream went away under the app.
    pub fn input_closed(&self) -> bool {
        self.input_closed
    }

    /// How long the runner may block before the session needs attention.
    pub fn wakeup(&self, now: Instant) -> Option<Duration> {
        self.session.next_wakeup(now)
    }

    /// Returns true when the screen should be redrawn.
    pub fn handle_event(&mut self, event: AppEvent, now: Instant) -> bool {
        match event {
            AppEvent::Tick => {
                let before = self.session.time_remaining();
                self.session.on_tick(now);
                before != self.session.time_remaining()
            }
            AppEvent::Resize => true,
            AppEvent::Closed => {
                tracing::warn!("input stream closed, quitting");
                self.input_closed = true;
                self.should_quit = true;
                false
            }
            AppEvent::Key(key) => {
                let action = action_for(key, self.session.phase());
                self.apply(action, now);
                true
            }
        }
    }

    pub fn apply(&mut self, action: Action, now: Instant) {
        // settle due ticks before the keystroke lands
        self.session.on_tick(now);

        match action {
            Action::Quit => {
                tracing::debug!("quit requested");
                self.should_quit = true;
            }
            Action::Start => self.session.start(now),
            Action::Restart => self.session.restart(),
            Action::NextMode => self.session.change_mode(self.session.mode().next()),
            Action::PrevMode => self.session.change_mode(self.session.mode().prev()),
            Action::Type(key) => self.session.handle_key_at(key, now),
        }
    }
}
