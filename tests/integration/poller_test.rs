//! Poller + presenter scenarios against a local ticker endpoint

mod common;

use btc_ticker::feed::{
    stop_signal, IndodaxClient, PollEvent, Poller, StopHandle, TickerClientConfig,
};
use btc_ticker::presenter::{App, ConnectivityStatus, PriceFormat, Trend};
use common::{spawn_responder, Reply};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Start a fast poller against `replies`, returning its event stream
fn start(
    url: String,
    timeout: Duration,
) -> (mpsc::UnboundedReceiver<PollEvent>, StopHandle, JoinHandle<()>) {
    let client =
        IndodaxClient::with_config(TickerClientConfig::new(url).timeout(timeout)).unwrap();
    let (handle, stop) = stop_signal();
    let (tx, rx) = mpsc::unbounded_channel();

    let task = tokio::spawn(async move {
        let poller = Poller::with_interval(client, Duration::from_millis(20));
        let sample_tx = tx.clone();
        poller
            .run(
                move |s| {
                    let _ = sample_tx.send(PollEvent::Sample(s));
                },
                move |k| {
                    let _ = tx.send(PollEvent::Failed(k));
                },
                stop,
            )
            .await;
    });

    (rx, handle, task)
}

async fn next(rx: &mut mpsc::UnboundedReceiver<PollEvent>) -> PollEvent {
    tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("no poll event")
        .expect("poller channel closed")
}

fn app() -> (App, btc_ticker::feed::StopSignal) {
    let (handle, signal) = stop_signal();
    (App::new(handle, PriceFormat::default(), "Indodax"), signal)
}

#[tokio::test]
async fn test_price_rise_scenario() {
    let url = spawn_responder(vec![Reply::ticker("1000000"), Reply::ticker("1050000")]).await;
    let (mut rx, stop, task) = start(url, Duration::from_secs(2));
    let (mut app, _) = app();

    app.handle_poll_event(next(&mut rx).await, Instant::now());
    app.handle_poll_event(next(&mut rx).await, Instant::now());
    stop.raise();
    tokio::time::timeout(Duration::from_secs(1), task)
        .await
        .expect("poller did not stop")
        .unwrap();

    let view = app.render();
    assert_eq!(view.price, "Rp 1.050.000");
    assert_eq!(
        view.change,
        Some(("+Rp 50.000 (+5.00%)".to_string(), Trend::Up))
    );
    assert_eq!(view.status, ConnectivityStatus::Live);
}

#[tokio::test]
async fn test_server_error_keeps_last_price() {
    let url = spawn_responder(vec![
        Reply::ticker("1000000"),
        Reply::Status(500, "internal error".to_string()),
    ])
    .await;
    let (mut rx, stop, _task) = start(url, Duration::from_secs(2));
    let (mut app, _) = app();

    app.handle_poll_event(next(&mut rx).await, Instant::now());
    let before = app.price_state().clone();

    let event = next(&mut rx).await;
    assert!(matches!(event, PollEvent::Failed(_)));
    app.handle_poll_event(event, Instant::now());
    stop.raise();

    assert_eq!(app.status(), ConnectivityStatus::Error);
    assert_eq!(app.price_state(), &before);
    assert_eq!(app.render().price, "Rp 1.000.000");
}

#[tokio::test]
async fn test_timeout_shows_no_connection() {
    let url = spawn_responder(vec![Reply::Hang]).await;
    let (mut rx, stop, _task) = start(url, Duration::from_millis(200));
    let (mut app, _) = app();

    app.handle_poll_event(next(&mut rx).await, Instant::now());
    stop.raise();

    assert_eq!(app.status(), ConnectivityStatus::NoConnection);
    assert!(app.price_state().current().is_none());
}

#[tokio::test]
async fn test_recovery_after_errors_diffs_against_last_success() {
    let url = spawn_responder(vec![
        Reply::ticker("2000000"),
        Reply::Status(502, "bad gateway".to_string()),
        Reply::ok("not json"),
        Reply::ticker("1900000"),
    ])
    .await;
    let (mut rx, stop, _task) = start(url, Duration::from_secs(2));
    let (mut app, _) = app();

    let mut statuses = Vec::new();
    for _ in 0..4 {
        app.handle_poll_event(next(&mut rx).await, Instant::now());
        statuses.push(app.status());
    }
    stop.raise();

    assert_eq!(
        statuses,
        vec![
            ConnectivityStatus::Live,
            ConnectivityStatus::Error,
            ConnectivityStatus::Error,
            ConnectivityStatus::Live,
        ]
    );
    assert_eq!(app.price_state().delta(), -100_000);
    assert_eq!(
        app.render().change,
        Some(("-Rp 100.000 (-5.00%)".to_string(), Trend::Down))
    );
}

#[tokio::test]
async fn test_close_stops_poller() {
    let url = spawn_responder(vec![Reply::ticker("1000000")]).await;
    let client =
        IndodaxClient::with_config(TickerClientConfig::new(url)).unwrap();
    let (handle, stop) = stop_signal();
    let mut app = App::new(handle, PriceFormat::default(), "Indodax");

    let task = tokio::spawn(async move {
        Poller::new(client).run(|_| {}, |_| {}, stop).await;
    });

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(app.close());
    assert!(!app.close());

    tokio::time::timeout(Duration::from_secs(1), task)
        .await
        .expect("poller outlived close")
        .unwrap();
}
