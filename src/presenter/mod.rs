//! Terminal presenter
//!
//! Owns the display state and renders it with ratatui. Everything here runs
//! on the UI loop; the poller only reaches it through the [`PollEvent`]
//! channel drained by [`run_loop`].

pub mod app;
mod event;
pub mod format;
pub mod schedule;
pub mod state;
mod terminal;
mod ui;
pub mod widgets;

pub use app::{App, AppAction, DisplayMode, PriceTone, View};
pub use event::{Event, EventHandler, TICK_RATE};
pub use format::PriceFormat;
pub use state::{ConnectivityStatus, PriceState, Trend};
pub use terminal::{TerminalGuard, Tui};
pub use ui::draw;

use crate::feed::{PollEvent, StopSignal};
use crate::telemetry::{record_latency, LatencyMetric};
use ratatui::{backend::Backend, Terminal};
use std::time::Instant;
use tokio::sync::mpsc;

/// Drive the dashboard until the app is closed
///
/// Each pass drains pending poll outcomes, advances timers, redraws if
/// anything changed, then waits for one input event (or a tick). A raised
/// `quit` closes the app the same way the quit key does.
pub fn run_loop<B, F>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    poll_rx: &mut mpsc::UnboundedReceiver<PollEvent>,
    quit: &StopSignal,
    mut next_event: F,
) -> anyhow::Result<()>
where
    B: Backend,
    F: FnMut() -> anyhow::Result<Event>,
{
    while !app.is_closed() {
        if quit.is_raised() {
            tracing::info!("Quit requested outside the dashboard");
            app.handle_action(AppAction::Quit);
            break;
        }

        let now = Instant::now();
        while let Ok(event) = poll_rx.try_recv() {
            app.handle_poll_event(event, now);
        }
        app.tick(now);

        if app.take_dirty() {
            let started = Instant::now();
            terminal.draw(|f| draw(f, app))?;
            record_latency(LatencyMetric::FrameDraw, started.elapsed());
        }

        match next_event()? {
            Event::Key(key) => app.handle_action(EventHandler::key_to_action(key)),
            Event::Resize(..) => app.request_render(),
            Event::Tick => {}
        }
    }

    Ok(())
}
