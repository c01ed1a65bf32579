use std::io::{stdout, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use crate::shared::constants::{ERASE_LINE, SPINNER_FREQ_HZ, SPINNER_MAX_POINTS};
use crate::style::Formatter;

/// Cooperative stop request shared with the animation thread, checked once
/// per animation frame.
#[derive(Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Background ellipsis animation behind a fixed message.
///
/// The message and formatter are moved into the thread at start; the cancel
/// token is the only state shared afterwards. Cancellation lands within one
/// animation frame.
pub struct Spinner {
    token: CancelToken,
    handle: Option<JoinHandle<()>>,
}

impl Spinner {
    pub fn start(message: String, formatter: Formatter) -> Self {
        let token = CancelToken::new();
        let thread_token = token.clone();

        let handle = std::thread::spawn(move || {
            let interval = Duration::from_secs_f64(1.0 / SPINNER_FREQ_HZ);
            let mut points = 0usize;

            while !thread_token.is_cancelled() {
                points = points % SPINNER_MAX_POINTS + 1;
                let line = format!("{}{}", message, ".".repeat(points));

                let mut out = stdout();
                let _ = write!(out, "\r{}{}", formatter.render(&line), ERASE_LINE);
                let _ = out.flush();

                std::thread::sleep(interval);
            }
        });

        Self {
            token,
            handle: Some(handle),
        }
    }

    /// Request cancellation and wait for the animation thread to finish.
    pub fn stop(mut self) {
        self.token.cancel();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.token.cancel();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn token_starts_live_and_cancels_once() {
        let token = CancelToken::new();
        assert!(!token.is_cancelled());
        token.cancel();
        assert!(token.is_cancelled());
        token.cancel();
        assert!(token.is_cancelled());
    }

    #[test]
    fn clones_observe_the_same_cancellation() {
        let token = CancelToken::new();
        let seen_by_thread = token.clone();
        token.cancel();
        assert!(seen_by_thread.is_cancelled());
    }

    #[test]
    fn stop_joins_within_one_animation_frame() {
        let spinner = Spinner::start("working".to_string(), Formatter::new());
        let begin = Instant::now();
        spinner.stop();
        // One frame at 2 Hz is 500 ms; joining must not hang past it by much.
        assert!(begin.elapsed() < Duration::from_secs(2));
    }
}
