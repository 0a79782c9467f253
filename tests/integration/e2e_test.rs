//! End-to-end integration tests

use btc_ticker::config::{Config, DEFAULT_ENDPOINT};
use btc_ticker::feed::{stop_signal, PollEvent, PriceSample};
use btc_ticker::presenter::{draw, run_loop, App, DisplayMode, Event, PriceFormat};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use std::collections::VecDeque;
use tokio::sync::mpsc;

#[test]
fn test_config_example_loads() {
    let config: Config = toml::from_str(include_str!("../../config.toml.example")).unwrap();
    assert_eq!(config.feed.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(config.feed.exchange, "Indodax");
    assert_eq!(config.display.currency_prefix, "Rp");
    assert_eq!(config.display.thousands_separator, '.');
    assert!(config.telemetry.log_file.is_none());
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[test]
fn test_dashboard_session() {
    let config = Config::default();
    let (handle, signal) = stop_signal();
    let (_quit_handle, quit) = stop_signal();
    let mut app = App::new(
        handle,
        PriceFormat::from(&config.display),
        config.feed.exchange.clone(),
    );
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    let (tx, mut rx) = mpsc::unbounded_channel();

    tx.send(PollEvent::Sample(PriceSample::now(1_000_000))).unwrap();
    tx.send(PollEvent::Sample(PriceSample::now(1_050_000))).unwrap();

    // Esc twice is a round trip; q closes
    let mut script: VecDeque<Event> =
        VecDeque::from(vec![Event::Tick, key(KeyCode::Esc), key(KeyCode::Esc), key(KeyCode::Char('q'))]);
    run_loop(&mut terminal, &mut app, &mut rx, &quit, || {
        Ok(script.pop_front().unwrap_or(Event::Tick))
    })
    .unwrap();

    assert!(app.is_closed());
    assert!(signal.is_raised());
    assert_eq!(app.display_mode(), DisplayMode::Maximized);

    // A second close is a no-op
    assert!(!app.close());

    terminal.draw(|f| draw(f, &app)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
    }
    assert!(text.contains("Rp 1.050.000"));
    assert!(text.contains("+Rp 50.000 (+5.00%)"));
    assert!(text.contains("Live"));
}
