use std::time::Duration;

use tokio::time::{sleep_until, Instant};

// Every push re-arms the deadline. A zero delay applies input immediately.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    current: T,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(initial: T, delay: Duration) -> Self {
        Self {
            delay,
            current: initial,
            pending: None,
        }
    }

    pub fn current(&self) -> &T {
        &self.current
    }

    pub fn latest(&self) -> &T {
        self.pending
            .as_ref()
            .map(|(value, _)| value)
            .unwrap_or(&self.current)
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, at)| *at)
    }

    pub fn push(&mut self, value: T) {
        if self.delay.is_zero() {
            self.pending = None;
            self.current = value;
        } else {
            self.pending = Some((value, Instant::now() + self.delay));
        }
    }

    pub fn flush(&mut self) -> bool {
        match self.pending.take() {
            Some((value, _)) => {
                self.current = value;
                true
            }
            None => false,
        }
    }

    pub fn reset(&mut self, value: T) {
        self.pending = None;
        self.current = value;
    }

    // Never resolves when nothing is armed
    pub async fn settle(&mut self) {
        match self.deadline() {
            Some(at) => {
                sleep_until(at).await;
                self.flush();
            }
            None => std::future::pending().await,
        }
    }
}
