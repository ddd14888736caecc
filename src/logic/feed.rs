//! Feed Scheduler
//!
//! Scheduled tick workers behind the simulated live feeds. Each `spawn`
//! returns a [`FeedHandle`] owned by the view that started the feed;
//! cancelling the handle (or just dropping it) flips the stop flag and
//! joins the worker, so no timer ever outlives its view.
//!
//! A tick never overlaps itself: the worker runs one tick to completion,
//! then sleeps for the interval, polling the stop flag in short slices so
//! cancellation stays prompt.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Stop-flag poll slice while sleeping between ticks (milliseconds)
const CANCEL_POLL_MS: u64 = 50;

/// Cancellation handle for a running feed worker
pub struct FeedHandle {
    name: &'static str,
    running: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

impl FeedHandle {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_running(&self) -> bool {
        self.worker.is_some() && self.running.load(Ordering::SeqCst)
    }

    /// Stop the worker and wait for it to exit.
    pub fn cancel(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
            log::info!("Feed '{}' cancelled", self.name);
        }
    }
}

impl Drop for FeedHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Spawn a tick worker firing every `interval_ms`. The first tick fires
/// after one full interval.
pub fn spawn<F>(name: &'static str, interval_ms: u64, mut tick: F) -> FeedHandle
where
    F: FnMut() + Send + 'static,
{
    let running = Arc::new(AtomicBool::new(true));
    let flag = Arc::clone(&running);

    let worker = thread::spawn(move || {
        log::info!("Feed '{}' started (interval: {}ms)", name, interval_ms);

        while flag.load(Ordering::SeqCst) {
            let mut waited = 0;
            while waited < interval_ms && flag.load(Ordering::SeqCst) {
                let slice = CANCEL_POLL_MS.min(interval_ms - waited);
                thread::sleep(Duration::from_millis(slice));
                waited += slice;
            }

            if !flag.load(Ordering::SeqCst) {
                break;
            }

            tick();
        }

        log::info!("Feed '{}' stopped", name);
    });

    FeedHandle {
        name,
        running,
        worker: Some(worker),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicU32;

    #[test]
    fn test_feed_ticks_and_cancels() {
        let counter = Arc::new(AtomicU32::new(0));
        let ticked = Arc::clone(&counter);

        let handle = spawn("test-feed", 10, move || {
            ticked.fetch_add(1, Ordering::SeqCst);
        });

        assert!(handle.is_running());
        thread::sleep(Duration::from_millis(200));
        assert!(counter.load(Ordering::SeqCst) > 0);

        handle.cancel();

        // cancel() joined the worker; the count is final now
        let after_cancel = counter.load(Ordering::SeqCst);
        thread::sleep(Duration::from_millis(50));
        assert_eq!(counter.load(Ordering::SeqCst), after_cancel);
    }

    #[test]
    fn test_drop_cancels() {
        let counter = Arc::new(AtomicU32::new(0));
        let ticked = Arc::clone(&counter);

        let handle = spawn("drop-feed", 10, move || {
            ticked.fetch_add(1, Ordering::SeqCst);
        });

        thread::sleep(Duration::from_millis(50));
        drop(handle);

        let after_drop = counter.load(Ordering::SeqCst);
        thread::sleep(Duration::from_millis(50));
        assert_eq!(counter.load(Ordering::SeqCst), after_drop);
    }

    #[test]
    fn test_prompt_cancellation_of_slow_feed() {
        let handle = spawn("slow-feed", 60_000, || {});
        thread::sleep(Duration::from_millis(20));

        let start = std::time::Instant::now();
        handle.cancel();

        // Cancelling must not wait out the 60s interval
        assert!(start.elapsed() < Duration::from_secs(1));
    }
}
