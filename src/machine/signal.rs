//! Running flag shared between the controller and the timing loop.

use super::policy::ShutdownPolicy;
use parking_lot::{Condvar, Mutex};
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

/// Cooperative stop signal.
///
/// The flag itself is atomic; the mutex and condvar only exist so an
/// interruptible wait can be woken early.
#[derive(Debug, Default)]
pub(crate) struct StopSignal {
    running: AtomicBool,
    gate: Mutex<()>,
    wake: Condvar,
}

impl StopSignal {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Flip the flag from stopped to running. Returns `false` if it was
    /// already running.
    pub(crate) fn arm(&self) -> bool {
        self.running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Clear the flag and wake any interruptible waiter. Returns whether it
    /// was set.
    pub(crate) fn disarm(&self) -> bool {
        let was_running = self.running.swap(false, Ordering::AcqRel);
        let _gate = self.gate.lock();
        self.wake.notify_all();
        was_running
    }

    /// Dwell for `duration`. Returns `true` if the full duration elapsed and
    /// `false` if an interruptible wait was cut short by [`StopSignal::disarm`].
    pub(crate) fn wait(&self, duration: Duration, policy: ShutdownPolicy) -> bool {
        match policy {
            ShutdownPolicy::AtBoundary => {
                thread::sleep(duration);
                true
            }
            ShutdownPolicy::Interruptible => {
                // A dwell too long to express as an Instant only ends on stop.
                let deadline = Instant::now().checked_add(duration);
                let mut gate = self.gate.lock();
                while self.is_running() {
                    match deadline {
                        Some(deadline) => {
                            if self.wake.wait_until(&mut gate, deadline).timed_out() {
                                return true;
                            }
                        }
                        None => self.wake.wait(&mut gate),
                    }
                }
                false
            }
        }
    }
}
