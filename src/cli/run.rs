//! Run command implementation

use crate::config::Config;
use crate::feed::{
    stop_signal, IndodaxClient, PollEvent, Poller, StopHandle, TickerClientConfig,
    REQUEST_TIMEOUT,
};
use crate::presenter::{run_loop, App, EventHandler, PriceFormat, TerminalGuard};
use clap::Args;
use std::time::Duration;
use tokio::sync::mpsc;

/// Extra time allowed for the poller beyond one request timeout at shutdown
const SHUTDOWN_GRACE: Duration = Duration::from_secs(1);

#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Override the ticker endpoint URL
    #[arg(long)]
    pub endpoint: Option<String>,
}

impl RunArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let endpoint = self
            .endpoint
            .clone()
            .unwrap_or_else(|| config.feed.endpoint.clone());
        let client = IndodaxClient::with_config(TickerClientConfig::new(endpoint))?;
        tracing::info!(url = client.url(), "Starting dashboard");

        // Nothing is spawned until the terminal is ours
        let mut guard = TerminalGuard::enter()?;

        let (stop_handle, stop) = stop_signal();
        let (quit_handle, quit) = stop_signal();
        let (poll_tx, mut poll_rx) = mpsc::unbounded_channel();

        let signal_task = tokio::spawn(forward_termination(quit_handle));
        let poll_task = tokio::spawn(async move {
            let poller = Poller::new(client);
            let sample_tx = poll_tx.clone();
            poller
                .run(
                    move |sample| {
                        let _ = sample_tx.send(PollEvent::Sample(sample));
                    },
                    move |kind| {
                        let _ = poll_tx.send(PollEvent::Failed(kind));
                    },
                    stop,
                )
                .await;
        });

        let mut app = App::new(
            stop_handle,
            PriceFormat::from(&config.display),
            config.feed.exchange.clone(),
        );
        let events = EventHandler::default();

        // The UI loop blocks on terminal input; keep it off the async workers
        let result = tokio::task::block_in_place(|| {
            run_loop(guard.terminal_mut(), &mut app, &mut poll_rx, &quit, || {
                events.next_event()
            })
        });

        // Loop may also end on an error; either way close exactly once
        app.close();
        signal_task.abort();

        match tokio::time::timeout(REQUEST_TIMEOUT + SHUTDOWN_GRACE, poll_task).await {
            Ok(Ok(())) => tracing::debug!("Poller joined"),
            Ok(Err(e)) => tracing::error!(error = %e, "Poller task failed"),
            Err(_) => tracing::warn!("Poller did not stop in time"),
        }

        guard.restore()?;
        result
    }
}

/// Raise `quit` when the process is asked to terminate
///
/// Hangup covers the hosting terminal window being closed.
async fn forward_termination(quit: StopHandle) {
    match wait_for_termination().await {
        Ok(name) => {
            tracing::info!(signal = name, "Termination signal received");
            quit.raise();
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to install signal handlers");
            // Keep the handle alive; dropping it would read as a quit
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(unix)]
async fn wait_for_termination() -> std::io::Result<&'static str> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut terminate = signal(SignalKind::terminate())?;
    let mut hangup = signal(SignalKind::hangup())?;
    let mut interrupt = signal(SignalKind::interrupt())?;

    Ok(tokio::select! {
        _ = terminate.recv() => "SIGTERM",
        _ = hangup.recv() => "SIGHUP",
        _ = interrupt.recv() => "SIGINT",
    })
}

#[cfg(not(unix))]
async fn wait_for_termination() -> std::io::Result<&'static str> {
    tokio::signal::ctrl_c().await?;
    Ok("ctrl-c")
}
