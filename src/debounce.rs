//! Coalescing of rapid input events.
//!
//! A [`Debouncer`] runs a callback once input has been quiet for a delay.
//! Every [`trigger`](Debouncer::trigger) replaces the pending value and
//! restarts the delay, so a burst of edits results in a single conversion of
//! the last one.
//!
//! ```
//! use std::{sync::mpsc, time::Duration};
//! use tex2mml::Debouncer;
//!
//! let (tx, rx) = mpsc::channel();
//! let debouncer = Debouncer::new(Duration::from_millis(20), move |latex: String| {
//!     tx.send(latex).unwrap();
//! });
//! debouncer.trigger("x".to_owned());
//! debouncer.trigger("x^2".to_owned());
//! assert_eq!(rx.recv().unwrap(), "x^2");
//! ```

use std::{
    sync::mpsc::{self, RecvTimeoutError, Sender},
    thread::{self, JoinHandle},
    time::{Duration, Instant},
};

/// Quiet period used by front ends that convert while typing.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

enum Message<T> {
    Trigger(T),
    Cancel,
    Flush,
}

/// Runs a callback with the latest value after a quiet period.
///
/// The callback runs on a worker thread owned by the debouncer. Dropping the
/// debouncer stops the worker and discards a pending value.
pub struct Debouncer<T> {
    sender: Option<Sender<Message<T>>>,
    worker: Option<JoinHandle<()>>,
    delay: Duration,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Start a debouncer calling `callback` once input is quiet for `delay`.
    pub fn new<F>(delay: Duration, callback: F) -> Self
    where
        F: FnMut(T) + Send + 'static,
    {
        let (sender, receiver) = mpsc::channel();
        let worker = thread::spawn(move || run(receiver, delay, callback));
        Self {
            sender: Some(sender),
            worker: Some(worker),
            delay,
        }
    }

    /// The quiet period.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replace any pending value with `value` and restart the delay.
    pub fn trigger(&self, value: T) {
        self.send(Message::Trigger(value));
    }

    /// Drop the pending value, if any.
    pub fn cancel(&self) {
        self.send(Message::Cancel);
    }

    /// Run the callback with the pending value now instead of after the delay.
    pub fn flush(&self) {
        self.send(Message::Flush);
    }

    fn send(&self, message: Message<T>) {
        let sent = self
            .sender
            .as_ref()
            .map_or(false, |sender| sender.send(message).is_ok());
        if !sent {
            log::warn!("debounce worker is gone, dropping event");
        }
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        // closing the channel ends the worker loop
        self.sender.take();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                log::error!("debounce callback panicked");
            }
        }
    }
}

fn run<T, F>(receiver: mpsc::Receiver<Message<T>>, delay: Duration, mut callback: F)
where
    F: FnMut(T),
{
    // a value whose deadline is past `Instant`'s range waits for a flush
    let mut pending: Option<(T, Option<Instant>)> = None;
    loop {
        let message = match pending.as_ref().map(|(_, deadline)| *deadline) {
            Some(Some(deadline)) => {
                let now = Instant::now();
                if now >= deadline {
                    if let Some((value, _)) = pending.take() {
                        callback(value);
                    }
                    continue;
                }
                match receiver.recv_timeout(deadline - now) {
                    Ok(message) => message,
                    Err(RecvTimeoutError::Timeout) => continue,
                    Err(RecvTimeoutError::Disconnected) => break,
                }
            }
            Some(None) | None => match receiver.recv() {
                Ok(message) => message,
                Err(_) => break,
            },
        };
        match message {
            Message::Trigger(value) => {
                if pending.is_some() {
                    log::trace!("superseding pending event");
                }
                pending = Some((value, Instant::now().checked_add(delay)));
            }
            Message::Cancel => pending = None,
            Message::Flush => {
                if let Some((value, _)) = pending.take() {
                    callback(value);
                }
            }
        }
    }
}
