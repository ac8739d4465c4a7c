//! FILENAME: core/engine/src/debounce.rs
//! PURPOSE: Last-value-wins coalescing of rapid event streams.
//! CONTEXT: Window resizes arrive in bursts while the layout settles, but
//! the session only wants the final tape capacity. Each submission restarts
//! the quiet window; when it elapses the latest value is delivered.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Quiet window used for tape resize events.
pub const RESIZE_QUIET_WINDOW: Duration = Duration::from_millis(100);

/// Coalesces a stream of values into single deliveries after a quiet window.
///
/// A submission while a delivery is pending supersedes it; the pending
/// timer is not cancelled, the newer value simply restarts the window.
/// Dropping the debouncer delivers any value still pending, then stops the
/// worker.
pub struct Debouncer<T: Send + 'static> {
    sender: Option<Sender<T>>,
    worker: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Spawn a debouncer delivering settled values to `on_settle`.
    pub fn new<F>(quiet_window: Duration, mut on_settle: F) -> Self
    where
        F: FnMut(T) + Send + 'static,
    {
        let (sender, receiver) = mpsc::channel::<T>();
        let worker = thread::spawn(move || {
            while let Ok(first) = receiver.recv() {
                let mut latest = first;
                loop {
                    match receiver.recv_timeout(quiet_window) {
                        // Superseded: keep the newer value, restart the window.
                        Ok(newer) => latest = newer,
                        Err(RecvTimeoutError::Timeout) => {
                            on_settle(latest);
                            break;
                        }
                        Err(RecvTimeoutError::Disconnected) => {
                            on_settle(latest);
                            return;
                        }
                    }
                }
            }
        });
        Debouncer {
            sender: Some(sender),
            worker: Some(worker),
        }
    }

    /// Submit a value, superseding any value still waiting out its window.
    pub fn submit(&self, value: T) {
        if let Some(sender) = &self.sender {
            // The worker only goes away on drop, so a send cannot fail while
            // the debouncer is alive.
            let _ = sender.send(value);
        }
    }
}

impl<T: Send + 'static> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.sender.take();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}
