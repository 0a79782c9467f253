//! Cooperative stop signal for the polling loop

use tokio::sync::watch;

/// Create a connected stop handle and signal
pub fn stop_signal() -> (StopHandle, StopSignal) {
    let (tx, rx) = watch::channel(false);
    (StopHandle { tx }, StopSignal { rx })
}

/// Raising side, owned by the presenter
#[derive(Debug)]
pub struct StopHandle {
    tx: watch::Sender<bool>,
}

impl StopHandle {
    /// Request the loop to stop. Safe to call any number of times.
    pub fn raise(&self) {
        self.tx.send_replace(true);
    }

    /// Whether a stop has been requested
    pub fn is_raised(&self) -> bool {
        *self.tx.borrow()
    }
}

/// Observing side, owned by the polling loop
///
/// Dropping every [`StopHandle`] counts as a stop request.
#[derive(Debug, Clone)]
pub struct StopSignal {
    rx: watch::Receiver<bool>,
}

impl StopSignal {
    /// Non-blocking check
    pub fn is_raised(&self) -> bool {
        *self.rx.borrow() || self.rx.has_changed().is_err()
    }

    /// Resolve once a stop has been requested
    pub async fn raised(&mut self) {
        loop {
            if *self.rx.borrow_and_update() {
                return;
            }
            // Err means the handle was dropped, which is treated the same way
            if self.rx.changed().await.is_err() {
                return;
            }
        }
    }
}
