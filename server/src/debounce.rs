//! Trailing-edge debouncing for bursty triggers.
//!
//! A [`Debouncer`] owns one pending scheduled run at a time. Each `call`
//! supersedes the previous pending run, so a burst of calls inside the
//! delay window collapses to a single execution with the last argument.
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::{task::JoinHandle, time::sleep};

pub struct Debouncer<T> {
    func: Arc<dyn Fn(T) + Send + Sync>,
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

    pub fn new(func: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self::with_delay(func, Self::DEFAULT_DELAY)
    }

    pub fn with_delay(func: impl Fn(T) + Send + Sync + 'static, delay: Duration) -> Self {
        Self {
            func: Arc::new(func),
            delay,
            pending: Mutex::new(None),
        }
    }

    /// Schedules `func(arg)` to run after the delay, cancelling any run
    /// still pending from an earlier call. Fire-and-forget: nothing is
    /// returned from the wrapped function, and a panic inside it stays
    /// in the spawned task.
    pub fn call(&self, arg: T) {
        let func = self.func.clone();
        let delay = self.delay;

        let task = tokio::spawn(async move {
            sleep(delay).await;
            func(arg);
        });

        if let Some(previous) = self.pending.lock().unwrap().replace(task) {
            previous.abort();
        }
    }

    /// Drops the pending run, if any, without replacing it.
    pub fn cancel(&self) {
        if let Some(task) = self.pending.lock().unwrap().take() {
            task.abort();
        }
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Ok(mut pending) = self.pending.lock() {
            if let Some(task) = pending.take() {
                task.abort();
            }
        }
    }
}
