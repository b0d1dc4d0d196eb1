// SPDX-License-Identifier: MPL-2.0
//! Persisted sound preferences with debounced saves.
//!
//! `SoundSettings` holds the current volume/mute preference and writes
//! changes to the [`Store`] after a quiet period, so dragging the volume
//! slider produces a single write instead of one per intermediate value.
//! Each flush is announced with a success toast.
//!
//! Per debounce cycle the writer goes `Idle -> Pending -> Idle`: a value
//! change while a flush is pending cancels and reschedules it, never
//! stacking multiple pending writes.

use super::player::{CpalPlayer, SilentPlayer, SoundPlayer};
use crate::app::paths;
use crate::storage::{FileStore, MemoryStore, Store};
use crate::timer;
use crate::ui::notifications::{self, Toast};
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::{Arc, Mutex, OnceLock};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Store key for the volume preference (decimal integer string).
const VOLUME_KEY: &str = "settings_volume";

/// Store key for the mute preference (`"true"` / `"false"`).
const MUTED_KEY: &str = "settings_muted";

/// Volume used when no value is persisted.
pub const DEFAULT_VOLUME: u8 = 10;

/// Upper bound of the volume scale.
pub const MAX_VOLUME: u8 = 100;

/// Quiet period before a changed preference is written out.
const SAVE_DEBOUNCE: Duration = Duration::from_millis(1000);

/// Display duration of the "Settings saved" toast.
const SAVED_TOAST_DURATION: Duration = Duration::from_millis(2000);

/// Shared volume/mute preference with debounced persistence.
pub struct SoundSettings {
    store: Arc<dyn Store>,
    player: Arc<dyn SoundPlayer>,
    volume: AtomicU8,
    muted: AtomicBool,
    /// Handle of the pending flush, if a debounce window is open.
    pending_save: Mutex<Option<JoinHandle<()>>>,
}

static SETTINGS: OnceLock<Arc<SoundSettings>> = OnceLock::new();

/// Returns the process-wide sound settings.
///
/// The first call loads persisted values from the config directory (or
/// defaults when absent) and sets up the shutter-sound player; every
/// call returns a handle to the same instance.
pub fn settings() -> Arc<SoundSettings> {
    Arc::clone(SETTINGS.get_or_init(|| {
        let store: Arc<dyn Store> = match paths::get_app_config_dir() {
            Some(dir) => Arc::new(FileStore::new(&dir)),
            None => {
                eprintln!("No config directory available; sound settings will not persist");
                Arc::new(MemoryStore::new())
            }
        };

        let player: Arc<dyn SoundPlayer> = match CpalPlayer::new() {
            Ok(player) => Arc::new(player),
            Err(error) => {
                eprintln!("Shutter sound unavailable: {}", error);
                Arc::new(SilentPlayer)
            }
        };

        SoundSettings::with_store(store, player)
    }))
}

impl SoundSettings {
    /// Creates settings backed by an explicit store and player.
    ///
    /// Application code goes through [`settings`]; this form exists for
    /// tests and headless embedding. Persisted values are loaded
    /// immediately; a value that fails to parse falls back to its
    /// default.
    pub fn with_store(store: Arc<dyn Store>, player: Arc<dyn SoundPlayer>) -> Arc<Self> {
        let volume: u8 = load_value(store.as_ref(), VOLUME_KEY, DEFAULT_VOLUME);
        let muted: bool = load_value(store.as_ref(), MUTED_KEY, false);

        Arc::new(Self {
            store,
            player,
            volume: AtomicU8::new(volume.min(MAX_VOLUME)),
            muted: AtomicBool::new(muted),
            pending_save: Mutex::new(None),
        })
    }

    /// Returns the current volume (0-100).
    #[must_use]
    pub fn volume(&self) -> u8 {
        self.volume.load(Ordering::Relaxed)
    }

    /// Returns whether playback is muted.
    #[must_use]
    pub fn muted(&self) -> bool {
        self.muted.load(Ordering::Relaxed)
    }

    /// Sets the volume (clamped to 0-100) and schedules a debounced save.
    pub fn set_volume(self: &Arc<Self>, volume: u8) {
        self.volume.store(volume.min(MAX_VOLUME), Ordering::Relaxed);
        self.schedule_save();
    }

    /// Sets the mute state and schedules a debounced save.
    pub fn set_muted(self: &Arc<Self>, muted: bool) {
        self.muted.store(muted, Ordering::Relaxed);
        self.schedule_save();
    }

    /// Returns whether a flush is currently scheduled.
    #[must_use]
    pub fn is_save_pending(&self) -> bool {
        self.pending_save
            .lock()
            .expect("pending save lock poisoned")
            .is_some()
    }

    /// Plays the shutter sound at the current volume.
    ///
    /// Does nothing while muted. Playback failures are logged and never
    /// interrupt the caller.
    pub fn play_shutter_sound(&self) {
        if self.muted() {
            return;
        }

        let level = f32::from(self.volume()) / f32::from(MAX_VOLUME);
        if let Err(error) = self.player.play(level) {
            eprintln!("Error playing sound: {}", error);
        }
    }

    /// Cancels any pending flush and opens a fresh quiet window.
    fn schedule_save(self: &Arc<Self>) {
        let weak = Arc::downgrade(self);
        let mut pending = self
            .pending_save
            .lock()
            .expect("pending save lock poisoned");

        if let Some(previous) = pending.take() {
            previous.abort();
        }

        *pending = Some(timer::spawn_after(SAVE_DEBOUNCE, move || {
            if let Some(settings) = weak.upgrade() {
                settings.flush();
            }
        }));
    }

    /// Writes both current values to the store and announces success.
    fn flush(&self) {
        // Clear the handle before performing the effect, so a change
        // arriving during the write opens a fresh debounce window.
        self.pending_save
            .lock()
            .expect("pending save lock poisoned")
            .take();

        let volume = self.volume();
        let muted = self.muted();

        let written = self
            .store
            .set(VOLUME_KEY, &volume.to_string())
            .and_then(|()| self.store.set(MUTED_KEY, &muted.to_string()));

        match written {
            Ok(()) => {
                notifications::registry().show(
                    Toast::success("Settings saved")
                        .description("Audio preferences updated.")
                        .duration(SAVED_TOAST_DURATION),
                );
            }
            Err(error) => {
                // No toast on failure; the user just doesn't get the
                // confirmation.
                eprintln!("Failed to save sound settings: {}", error);
            }
        }
    }
}

/// Reads and parses a stored value, falling back to `default` when the
/// key is absent or malformed.
fn load_value<T: FromStr>(store: &dyn Store, key: &str, default: T) -> T {
    match store.get(key) {
        None => default,
        Some(raw) => match raw.parse() {
            Ok(value) => value,
            Err(_) => {
                eprintln!("Ignoring malformed {} value: {:?}", key, raw);
                default
            }
        },
    }
}
