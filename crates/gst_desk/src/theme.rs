//! # Theme Store
//!
//! One theme per process. Each page initialises the store on load and tears
//! it down on unmount. The first `init` attaches persistence and reads the
//! stored preference; later ones share that attachment. Only the last
//! `teardown` flushes the preference and detaches.
//!
//! ```text
//!  init(persistence) ──► load preference ──► resolve against system mode
//!        │                                             │
//!  set_preference ──► persist ◄──────────── teardown (flush, detach)
//! ```

use std::sync::Arc;

use gst_ui::{ThemeMode, ThemePreference};
use parking_lot::{Mutex, RwLock};
use tracing::{debug, info};

/// Where the chosen theme is kept between page loads.
pub trait ThemePersistence: Send + Sync {
    /// Returns the stored preference, if any.
    fn load(&self) -> Option<ThemePreference>;

    /// Stores a preference.
    fn store(&self, preference: ThemePreference);
}

/// Persistence that lives as long as the process.
///
/// Clones share the same slot, so a test can keep one and hand the other to
/// the store.
#[derive(Debug, Clone, Default)]
pub struct MemoryThemePersistence {
    slot: Arc<Mutex<Option<ThemePreference>>>,
    writes: Arc<Mutex<u32>>,
}

impl MemoryThemePersistence {
    /// Creates persistence that already holds `preference`.
    #[must_use]
    pub fn with(preference: ThemePreference) -> Self {
        let persistence = Self::default();
        *persistence.slot.lock() = Some(preference);
        persistence
    }

    /// Returns what is currently stored.
    #[must_use]
    pub fn stored(&self) -> Option<ThemePreference> {
        *self.slot.lock()
    }

    /// Number of writes so far.
    #[must_use]
    pub fn writes(&self) -> u32 {
        *self.writes.lock()
    }
}

impl ThemePersistence for MemoryThemePersistence {
    fn load(&self) -> Option<ThemePreference> {
        self.stored()
    }

    fn store(&self, preference: ThemePreference) {
        *self.slot.lock() = Some(preference);
        *self.writes.lock() += 1;
    }
}

struct ThemeState {
    preference: ThemePreference,
    system: ThemeMode,
    persistence: Option<Box<dyn ThemePersistence>>,
    attachments: u32,
}

/// Thread-safe theme state shared by everything on the page.
pub struct ThemeStore {
    state: RwLock<ThemeState>,
}

impl ThemeStore {
    /// Creates an uninitialised store.
    ///
    /// `fallback` applies until a stored preference is loaded; `system` is the
    /// operating system's current mode.
    #[must_use]
    pub fn new(fallback: ThemePreference, system: ThemeMode) -> Self {
        Self {
            state: RwLock::new(ThemeState {
                preference: fallback,
                system,
                persistence: None,
                attachments: 0,
            }),
        }
    }

    /// Creates a store ready to share.
    #[must_use]
    pub fn shared(fallback: ThemePreference, system: ThemeMode) -> Arc<Self> {
        Arc::new(Self::new(fallback, system))
    }

    /// Registers one user of the store and returns the resolved mode.
    ///
    /// The first call attaches `persistence` and loads the stored preference.
    /// While attached, further calls only count; their `persistence` is
    /// dropped in favour of the one already in use.
    pub fn init(&self, persistence: Box<dyn ThemePersistence>) -> ThemeMode {
        let mut state = self.state.write();
        state.attachments += 1;
        if state.persistence.is_none() {
            if let Some(stored) = persistence.load() {
                state.preference = stored;
            }
            state.persistence = Some(persistence);
        }

        let mode = state.preference.resolve(state.system);
        info!(
            preference = ?state.preference,
            ?mode,
            attachments = state.attachments,
            "theme store initialised"
        );
        mode
    }

    /// Releases one user of the store.
    ///
    /// The last release flushes the preference and detaches persistence.
    /// Returns false if nothing was attached.
    pub fn teardown(&self) -> bool {
        let mut state = self.state.write();
        if state.attachments == 0 {
            return false;
        }
        state.attachments -= 1;
        if state.attachments > 0 {
            debug!(attachments = state.attachments, "theme store released");
            return true;
        }

        if let Some(persistence) = state.persistence.take() {
            persistence.store(state.preference);
        }
        debug!(preference = ?state.preference, "theme store torn down");
        true
    }

    /// Returns true while at least one [`init`](Self::init) is not yet
    /// matched by a [`teardown`](Self::teardown).
    #[must_use]
    pub fn is_initialised(&self) -> bool {
        self.state.read().attachments > 0
    }

    /// Number of users currently attached.
    #[must_use]
    pub fn attachments(&self) -> u32 {
        self.state.read().attachments
    }

    /// Theme currently applied.
    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        let state = self.state.read();
        state.preference.resolve(state.system)
    }

    /// Theme the user asked for.
    #[must_use]
    pub fn preference(&self) -> ThemePreference {
        self.state.read().preference
    }

    /// Records a new preference and persists it if attached.
    pub fn set_preference(&self, preference: ThemePreference) {
        let mut state = self.state.write();
        state.preference = preference;
        if let Some(persistence) = &state.persistence {
            persistence.store(preference);
        }
        info!(?preference, "theme changed");
    }

    /// Updates the operating system's mode.
    pub fn set_system_mode(&self, system: ThemeMode) {
        self.state.write().system = system;
    }
}
