//! Application state management

use chrono::Local;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::dashboard::{Dashboard, TickOutcome};
use crate::layout::{MenuEntry, MENU};
use crate::metrics::{RandomSource, RngSource};

/// Poll timeout used once both tickers are stopped
const IDLE_POLL: Duration = Duration::from_millis(250);

/// How long a status message stays in the footer
const STATUS_TIMEOUT: Duration = Duration::from_secs(5);

/// Application state
pub struct App<S: RandomSource = RngSource> {
    /// Clock, metrics and tickers
    pub dashboard: Dashboard<S>,
    /// Application configuration
    pub config: Config,
    /// Index into [`MENU`] of the highlighted button
    pub focused_menu: usize,
    /// Status message to display (cleared after timeout)
    pub status_message: Option<(String, Instant)>,
}

impl App<RngSource> {
    /// Create a new application instance
    pub fn new(config: Config) -> Self {
        let dashboard = Dashboard::from_config(&config);
        Self::with_dashboard(config, dashboard)
    }
}

impl<S: RandomSource> App<S> {
    pub fn with_dashboard(config: Config, dashboard: Dashboard<S>) -> Self {
        Self {
            dashboard,
            config,
            focused_menu: 0,
            status_message: None,
        }
    }

    /// Apply any due clock/metrics ticks
    pub fn on_tick(&mut self, now: Instant) -> TickOutcome {
        self.dashboard.advance(now, Local::now())
    }

    /// How long the event loop may block waiting for input
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.dashboard
            .time_until_next_tick(now)
            .unwrap_or(IDLE_POLL)
    }

    pub fn focus_next(&mut self) {
        self.focused_menu = (self.focused_menu + 1) % MENU.len();
    }

    pub fn focus_previous(&mut self) {
        if self.focused_menu > 0 {
            self.focused_menu -= 1;
        } else {
            self.focused_menu = MENU.len() - 1;
        }
    }

    pub fn focused_entry(&self) -> MenuEntry {
        MENU[self.focused_menu]
    }

    /// Save current configuration to disk
    pub fn save_config(&mut self) -> crate::Result<()> {
        self.config.save()?;
        self.set_status_message("Configuration saved successfully");
        Ok(())
    }

    /// Set a temporary status message
    pub fn set_status_message(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), Instant::now()));
    }

    /// Get current status message if not expired
    pub fn get_status_message(&self) -> Option<&str> {
        if let Some((msg, timestamp)) = &self.status_message {
            if timestamp.elapsed() < STATUS_TIMEOUT {
                return Some(msg.as_str());
            }
        }
        None
    }

    /// Stop the tickers before the terminal is restored
    pub fn teardown(&mut self) {
        self.dashboard.teardown();
    }
}
