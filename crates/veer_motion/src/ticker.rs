//! Frame ticker
//!
//! Hosts with their own frame loop should call
//! [`MotionScheduler::tick`] themselves. For everything else,
//! [`FrameTicker::start`] spawns a paced loop over a shared scheduler
//! and hands back a [`TickerHandle`]. The loop runs until the handle is
//! cancelled or dropped; there is no way to leak a perpetual per-frame
//! callback.

use crate::scheduler::MotionScheduler;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{debug, warn};

/// A scheduler shared between the ticker thread and event handlers
pub type SharedScheduler = Arc<Mutex<MotionScheduler>>;

/// Convenience constructor for a shareable scheduler
pub fn shared_scheduler() -> SharedScheduler {
    Arc::new(Mutex::new(MotionScheduler::new()))
}

/// Spawns and paces the tick loop
pub struct FrameTicker;

impl FrameTicker {
    /// Start ticking `scheduler` at its target FPS.
    ///
    /// Target updates from event handlers lock the same scheduler, so
    /// each tick sees the latest targets (last write wins). The
    /// returned handle must be kept alive for as long as the loop
    /// should run.
    pub fn start(scheduler: SharedScheduler) -> TickerHandle {
        let running = Arc::new(AtomicBool::new(true));
        let flag = running.clone();

        let thread = thread::spawn(move || {
            debug!("frame ticker started");
            while flag.load(Ordering::Relaxed) {
                let frame = {
                    let mut scheduler = scheduler.lock().unwrap();
                    scheduler.tick();
                    Duration::from_secs_f32(1.0 / scheduler.target_fps() as f32)
                };
                thread::sleep(frame);
            }
            debug!("frame ticker stopped");
        });

        TickerHandle {
            running,
            thread: Some(thread),
        }
    }
}

/// Cancellation handle for a running frame ticker.
///
/// Dropping the handle cancels the loop, so a detached element cannot
/// leave its ticker running behind it.
pub struct TickerHandle {
    running: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl TickerHandle {
    /// Stop the tick loop and wait for the ticker thread to exit
    pub fn cancel(mut self) {
        self.stop();
    }

    /// Whether the loop has not been cancelled yet
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }

    fn stop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                warn!("frame ticker thread panicked");
            }
        }
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.stop();
    }
}
