// SPDX-License-Identifier: MPL-2.0
//! End-to-end tests for the timing-dependent behavior: toast expiry,
//! debounced persistence, and store round-trips.
//!
//! These run against the real timer runtime, so they use real sleeps
//! with generous margins rather than mocked clocks.

use shutterbox::error::Result;
use shutterbox::sound::{SoundPlayer, SoundSettings};
use shutterbox::storage::{FileStore, MemoryStore, Store};
use shutterbox::ui::notifications::{registry, Registry, Toast};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Polls until `predicate` holds or `deadline` elapses.
fn wait_for(deadline: Duration, mut predicate: impl FnMut() -> bool) -> bool {
    let start = Instant::now();
    while start.elapsed() < deadline {
        if predicate() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(25));
    }
    predicate()
}

/// Store double that counts writes per key on top of an in-memory table.
#[derive(Default)]
struct CountingStore {
    inner: MemoryStore,
    writes: Mutex<Vec<(String, String)>>,
}

impl CountingStore {
    fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn writes_for(&self, key: &str) -> Vec<String> {
        self.writes
            .lock()
            .unwrap()
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
            .collect()
    }
}

impl Store for CountingStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.writes
            .lock()
            .unwrap()
            .push((key.to_string(), value.to_string()));
        self.inner.set(key, value)
    }
}

/// Player double that only counts invocations.
struct CountingPlayer(AtomicUsize);

impl CountingPlayer {
    fn new() -> Arc<Self> {
        Arc::new(Self(AtomicUsize::new(0)))
    }
}

impl SoundPlayer for CountingPlayer {
    fn play(&self, _volume: f32) -> Result<()> {
        self.0.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Toast expiry
// ---------------------------------------------------------------------------

#[test]
fn toast_expires_after_its_duration() {
    let reg = Arc::new(Registry::new());
    reg.show(Toast::info("short-lived").duration(Duration::from_millis(100)));

    // Still present well inside the duration
    std::thread::sleep(Duration::from_millis(50));
    assert_eq!(reg.toasts().len(), 1, "toast removed too early");

    // Gone once the timer has fired (generous slack for CI schedulers)
    assert!(
        wait_for(Duration::from_secs(2), || reg.is_empty()),
        "toast was not auto-removed"
    );
}

#[test]
fn zero_duration_toast_stays_until_removed() {
    let reg = Arc::new(Registry::new());
    let id = reg.show(Toast::warning("sticky").duration(Duration::ZERO));

    std::thread::sleep(Duration::from_millis(300));
    assert_eq!(reg.toasts().len(), 1, "sticky toast disappeared on its own");

    reg.remove(id);
    assert!(reg.is_empty());
}

#[test]
fn early_removal_makes_the_timer_firing_a_no_op() {
    let reg = Arc::new(Registry::new());
    let doomed = reg.show(Toast::info("doomed").duration(Duration::from_millis(100)));
    let survivor = reg.show(Toast::info("survivor").duration(Duration::ZERO));

    // Remove before the timer fires; the later firing must not disturb
    // anything else.
    reg.remove(doomed);
    std::thread::sleep(Duration::from_millis(300));

    let toasts = reg.toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].id(), survivor);
}

#[test]
fn concurrent_expiries_are_independent() {
    let reg = Arc::new(Registry::new());
    reg.show(Toast::info("fast").duration(Duration::from_millis(80)));
    reg.show(Toast::info("slow").duration(Duration::from_millis(400)));

    assert!(
        wait_for(Duration::from_secs(2), || reg.toasts().len() == 1),
        "fast toast did not expire first"
    );
    assert_eq!(reg.toasts()[0].title(), "slow");

    assert!(
        wait_for(Duration::from_secs(2), || reg.is_empty()),
        "slow toast did not expire"
    );
}

// ---------------------------------------------------------------------------
// Debounced persistence
// ---------------------------------------------------------------------------

#[test]
fn rapid_changes_coalesce_into_one_write() {
    let store = CountingStore::new();
    let settings = SoundSettings::with_store(store.clone(), CountingPlayer::new());

    // Three changes 100ms apart, all inside one quiet window
    settings.set_volume(30);
    std::thread::sleep(Duration::from_millis(100));
    settings.set_volume(60);
    std::thread::sleep(Duration::from_millis(100));
    settings.set_volume(90);

    // Nothing persisted while the window is still open
    assert!(store.writes_for("settings_volume").is_empty());

    // Exactly one write, carrying the final value (the muted key is
    // written last, so waiting on it covers both)
    assert!(
        wait_for(Duration::from_secs(3), || {
            !store.writes_for("settings_muted").is_empty()
        }),
        "debounced write never happened"
    );
    assert_eq!(store.writes_for("settings_volume"), vec!["90".to_string()]);
    assert_eq!(store.writes_for("settings_muted"), vec!["false".to_string()]);
    assert!(!settings.is_save_pending());
}

#[test]
fn a_change_during_the_quiet_window_reschedules_the_flush() {
    let store = CountingStore::new();
    let settings = SoundSettings::with_store(store.clone(), CountingPlayer::new());

    settings.set_volume(20);
    std::thread::sleep(Duration::from_millis(800));
    settings.set_muted(true);

    // 1.2s after the first change: its timer would have fired by now had
    // the second change not canceled it.
    std::thread::sleep(Duration::from_millis(400));
    assert!(
        store.writes_for("settings_volume").is_empty(),
        "canceled flush still wrote"
    );

    assert!(
        wait_for(Duration::from_secs(3), || {
            !store.writes_for("settings_muted").is_empty()
        }),
        "rescheduled flush never happened"
    );
    assert_eq!(store.writes_for("settings_volume"), vec!["20".to_string()]);
    assert_eq!(store.writes_for("settings_muted"), vec!["true".to_string()]);
}

#[test]
fn flush_announces_success_through_the_shared_registry() {
    let settings = SoundSettings::with_store(Arc::new(MemoryStore::new()), CountingPlayer::new());

    settings.set_volume(77);

    assert!(
        wait_for(Duration::from_secs(3), || {
            registry()
                .toasts()
                .iter()
                .any(|t| t.title() == "Settings saved")
        }),
        "no success toast after flush"
    );
}

// ---------------------------------------------------------------------------
// Store round-trips
// ---------------------------------------------------------------------------

#[test]
fn settings_round_trip_through_a_file_store() {
    let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
    let store = Arc::new(FileStore::new(temp_dir.path()));

    let settings = SoundSettings::with_store(store.clone(), CountingPlayer::new());
    settings.set_volume(42);
    settings.set_muted(true);

    assert!(
        wait_for(Duration::from_secs(3), || {
            store.get("settings_muted").is_some()
        }),
        "values were never persisted"
    );

    // A fresh instance over the same store sees the same values
    let reloaded = SoundSettings::with_store(store, CountingPlayer::new());
    assert_eq!(reloaded.volume(), 42);
    assert!(reloaded.muted());
}

#[test]
fn fresh_store_yields_default_settings() {
    let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
    let store = Arc::new(FileStore::new(temp_dir.path()));

    let settings = SoundSettings::with_store(store, CountingPlayer::new());
    assert_eq!(settings.volume(), 10);
    assert!(!settings.muted());
}
