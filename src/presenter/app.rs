//! Presenter state and commands
//!
//! `App` is the single owner of everything shown on screen. It is mutated
//! only from the UI loop: poll outcomes arrive as [`PollEvent`]s drained from
//! the worker channel, key presses arrive as [`AppAction`]s.

use super::format::{clock_time, loading_text, PriceFormat};
use super::schedule::{Highlight, LoadingAnimation};
use super::state::{ConnectivityStatus, PriceState, Trend};
use crate::error::ErrorKind;
use crate::feed::{PollEvent, PriceSample, StopHandle};
use std::time::Instant;

/// Actions the app can take
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Close the dashboard
    Quit,
    /// Flip between maximized and windowed layout
    ToggleFullscreen,
    /// Toggle help display
    ToggleHelp,
    /// No action
    None,
}

/// Layout mode of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Dashboard spans the whole terminal
    #[default]
    Maximized,
    /// Dashboard drawn in a centered compact panel
    Windowed,
}

impl DisplayMode {
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Maximized => DisplayMode::Windowed,
            DisplayMode::Windowed => DisplayMode::Maximized,
        }
    }
}

/// Color of the big price line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceTone {
    Neutral,
    Up,
    Down,
}

/// Formatted snapshot of everything the dashboard shows
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub price: String,
    pub price_tone: PriceTone,
    /// Change line and its direction; absent until two samples are known
    pub change: Option<(String, Trend)>,
    pub last_update: String,
    pub status: ConnectivityStatus,
}

/// TUI application state
pub struct App {
    price: PriceState,
    status: ConnectivityStatus,
    loading: LoadingAnimation,
    highlight: Option<Highlight>,
    display_mode: DisplayMode,
    show_help: bool,
    closed: bool,
    dirty: bool,
    stop: StopHandle,
    format: PriceFormat,
    exchange: String,
}

impl App {
    /// Create a new application instance
    pub fn new(stop: StopHandle, format: PriceFormat, exchange: impl Into<String>) -> Self {
        Self::new_at(stop, format, exchange, Instant::now())
    }

    /// Create with an explicit start instant for the loading animation
    pub fn new_at(
        stop: StopHandle,
        format: PriceFormat,
        exchange: impl Into<String>,
        start: Instant,
    ) -> Self {
        Self {
            price: PriceState::new(),
            status: ConnectivityStatus::default(),
            loading: LoadingAnimation::new(start),
            highlight: None,
            display_mode: DisplayMode::default(),
            show_help: false,
            closed: false,
            dirty: true,
            stop,
            format,
            exchange: exchange.into(),
        }
    }

    /// Apply one outcome handed over by the poller
    pub fn handle_poll_event(&mut self, event: PollEvent, now: Instant) {
        match event {
            PollEvent::Sample(sample) => self.on_sample_at(sample, now),
            PollEvent::Failed(kind) => self.on_error(kind),
        }
    }

    /// Record a new price
    pub fn on_sample(&mut self, sample: PriceSample) {
        self.on_sample_at(sample, Instant::now());
    }

    /// Record a new price observed at UI instant `now`
    pub fn on_sample_at(&mut self, sample: PriceSample, now: Instant) {
        let trend = self.price.apply(sample);
        self.status = ConnectivityStatus::Live;
        self.loading.stop();
        self.highlight = trend.and_then(|t| Highlight::for_trend(t, now));
        self.dirty = true;

        tracing::debug!(
            price = sample.value,
            delta = self.price.delta(),
            delta_pct = self.price.delta_percent(),
            "Price updated"
        );
    }

    /// Record a failed poll; the price itself is left alone
    pub fn on_error(&mut self, kind: ErrorKind) {
        let status = ConnectivityStatus::from_error(kind);
        if status != self.status {
            tracing::info!(?status, "Connectivity changed");
        }
        self.status = status;
        self.dirty = true;
    }

    /// Advance UI-bound timers
    pub fn tick(&mut self, now: Instant) {
        if self.loading.is_running() && self.loading.tick(now) {
            self.dirty = true;
        }
        if self.highlight.is_some_and(|h| h.is_expired(now)) {
            self.highlight = None;
            self.dirty = true;
        }
    }

    /// Handle an application action
    pub fn handle_action(&mut self, action: AppAction) {
        match action {
            AppAction::Quit => {
                self.close();
            }
            AppAction::ToggleFullscreen => self.toggle_fullscreen(),
            AppAction::ToggleHelp => {
                self.show_help = !self.show_help;
                self.dirty = true;
            }
            AppAction::None => {}
        }
    }

    pub fn toggle_fullscreen(&mut self) {
        self.display_mode = self.display_mode.toggled();
        self.dirty = true;
    }

    /// Stop the poller and mark the dashboard for teardown
    ///
    /// Returns true only for the call that actually closed.
    pub fn close(&mut self) -> bool {
        if self.closed {
            return false;
        }
        self.stop.raise();
        self.closed = true;
        tracing::info!("Dashboard closing");
        true
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Force a redraw on the next loop pass
    pub fn request_render(&mut self) {
        self.dirty = true;
    }

    /// Whether something changed since the last call
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    /// Format the current state for drawing
    pub fn render(&self) -> View {
        let price = match self.price.current() {
            Some(current) => self.format.price(current.value),
            None => loading_text(self.loading.frame()),
        };

        let price_tone = match self.highlight.map(|h| h.trend) {
            Some(Trend::Up) => PriceTone::Up,
            Some(Trend::Down) => PriceTone::Down,
            _ => PriceTone::Neutral,
        };

        let change = self.price.previous().map(|_| {
            let delta = self.price.delta();
            let trend = match delta {
                d if d > 0 => Trend::Up,
                d if d < 0 => Trend::Down,
                _ => Trend::Flat,
            };
            (self.format.change(delta, self.price.delta_percent()), trend)
        });

        let last_update = self
            .price
            .current()
            .map(|s| clock_time(&s.observed_at))
            .unwrap_or_else(|| "--:--:--".to_string());

        View {
            price,
            price_tone,
            change,
            last_update,
            status: self.status,
        }
    }

    pub fn price_state(&self) -> &PriceState {
        &self.price
    }

    pub fn status(&self) -> ConnectivityStatus {
        self.status
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    pub fn exchange(&self) -> &str {
        &self.exchange
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_running()
    }
}
