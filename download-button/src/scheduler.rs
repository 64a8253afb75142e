/// Frame scheduling: a start/stop periodic callback, and a thread-backed timer.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use tracing::{trace, warn};

/// Frame period while the wipe animation runs (~30 FPS).
pub const FRAME_PERIOD: Duration = Duration::from_millis(33);

/// A repeating timer the button can start and stop.
///
/// Both calls must be idempotent: starting a running timer or stopping a
/// stopped one does nothing.
pub trait Scheduler {
    fn start(&mut self, period: Duration);
    fn stop(&mut self);
    fn is_running(&self) -> bool;
}

type TickFn = Arc<dyn Fn() + Send + Sync>;

/// Runs the tick callback on a background thread every period.
///
/// The callback runs on the timer thread, so it should only hand a message to
/// the thread that owns the button (typically by sending on a channel).
pub struct FrameTimer {
    on_tick: TickFn,
    worker: Option<Worker>,
}

struct Worker {
    // Dropping this wakes the thread and ends it.
    stop_tx: Sender<()>,
    handle: JoinHandle<()>,
}

impl FrameTimer {
    pub fn new(on_tick: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            on_tick: Arc::new(on_tick),
            worker: None,
        }
    }
}

impl Scheduler for FrameTimer {
    fn start(&mut self, period: Duration) {
        if self.worker.is_some() {
            return;
        }
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let on_tick = Arc::clone(&self.on_tick);
        let handle = std::thread::Builder::new()
            .name("frame-timer".into())
            .spawn(move || loop {
                match stop_rx.recv_timeout(period) {
                    Err(RecvTimeoutError::Timeout) => {
                        trace!("frame tick");
                        on_tick();
                    }
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            });
        match handle {
            Ok(handle) => self.worker = Some(Worker { stop_tx, handle }),
            Err(e) => warn!("failed to spawn frame timer: {}", e),
        }
    }

    fn stop(&mut self) {
        if let Some(Worker { stop_tx, handle }) = self.worker.take() {
            drop(stop_tx);
            if handle.join().is_err() {
                warn!("frame timer thread panicked");
            }
        }
    }

    fn is_running(&self) -> bool {
        self.worker.is_some()
    }
}

impl Drop for FrameTimer {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Records start/stop calls; ticks are delivered by hand.
    #[derive(Debug, Default)]
    pub struct ManualScheduler {
        pub running: bool,
        pub period: Option<Duration>,
        pub starts: u32,
        pub stops: u32,
    }

    impl Scheduler for ManualScheduler {
        fn start(&mut self, period: Duration) {
            self.starts += 1;
            self.running = true;
            self.period = Some(period);
        }

        fn stop(&mut self) {
            self.stops += 1;
            self.running = false;
        }

        fn is_running(&self) -> bool {
            self.running
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn timer_ticks_until_stopped() {
        let (tx, rx) = mpsc::channel();
        let mut timer = FrameTimer::new(move || {
            let _ = tx.send(());
        });
        timer.start(Duration::from_millis(5));
        timer.start(Duration::from_millis(5));
        assert!(timer.is_running());

        for _ in 0..3 {
            rx.recv_timeout(Duration::from_secs(2)).unwrap();
        }

        timer.stop();
        timer.stop();
        assert!(!timer.is_running());

        // Drain anything sent before the stop, then expect silence
        while rx.try_recv().is_ok() {}
        assert!(rx.recv_timeout(Duration::from_millis(30)).is_err());
    }

    #[test]
    fn stop_does_not_wait_for_the_period() {
        let mut timer = FrameTimer::new(|| {});
        timer.start(Duration::from_secs(60));
        let begun = Instant::now();
        timer.stop();
        assert!(begun.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn restarts_after_stop() {
        let (tx, rx) = mpsc::channel();
        let mut timer = FrameTimer::new(move || {
            let _ = tx.send(());
        });
        timer.start(FRAME_PERIOD);
        timer.stop();
        timer.start(FRAME_PERIOD);
        rx.recv_timeout(Duration::from_secs(2)).unwrap();
    }
}
