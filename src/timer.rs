// SPDX-License-Identifier: MPL-2.0
//! Deferred callbacks for toast expiry and debounced saves.
//!
//! All time-deferred work in the application (toast auto-removal, the
//! settings flush debounce) runs on one background tokio runtime owned
//! by this module. Keeping the runtime here means the scheduling entry
//! points work the same from the Iced update loop and from plain unit
//! tests.

use std::sync::OnceLock;
use std::time::Duration;
use tokio::runtime::Runtime;
use tokio::task::JoinHandle;

/// Process-wide runtime for deferred callbacks (created on first use).
static RUNTIME: OnceLock<Runtime> = OnceLock::new();

fn runtime() -> &'static Runtime {
    RUNTIME.get_or_init(|| {
        tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("shutterbox-timer")
            .enable_time()
            .build()
            .expect("failed to build timer runtime")
    })
}

/// Runs `callback` after `delay` on the timer runtime.
///
/// The returned handle can be aborted to cancel the callback before it
/// fires; dropping the handle does not cancel it.
pub fn spawn_after<F>(delay: Duration, callback: F) -> JoinHandle<()>
where
    F: FnOnce() + Send + 'static,
{
    runtime().spawn(async move {
        tokio::time::sleep(delay).await;
        callback();
    })
}
