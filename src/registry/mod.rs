//! Process-wide registry of constructed client handles.
//!
//! Each name is constructed at most once per registry. The check for an
//! existing handle and the construction of a new one happen under the same
//! lock, so callers racing on first use never build two handles.

use crate::app::{FirebaseApp, DEFAULT_APP_NAME};
use crate::core::InitError;
use crate::credential::{EnvSource, ServiceAccountConfig};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};


static GLOBAL: OnceLock<AppRegistry> = OnceLock::new();

#[derive(Default)]
struct Entries {
    // Registration order is kept so `apps()` is stable.
    apps: Vec<Arc<FirebaseApp>>,
}

impl Entries {
    fn find(&self, name: &str) -> Option<&Arc<FirebaseApp>> {
        self.apps.iter().find(|app| app.name() == name)
    }
}

/// A set of named [`FirebaseApp`] handles.
#[derive(Default)]
pub struct AppRegistry {
    entries: Mutex<Entries>,
}

impl AppRegistry {
    /// Creates an empty registry, independent of the global one.
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry behind [`crate::get_client`].
    pub fn global() -> &'static AppRegistry {
        GLOBAL.get_or_init(AppRegistry::new)
    }

    fn lock(&self) -> MutexGuard<'_, Entries> {
        // Entries are only pushed after a successful construction, so a
        // panicking initializer cannot leave them inconsistent.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the handle registered under `name`, building it with `init` if absent.
    ///
    /// `init` is not called when the handle already exists. A failed `init`
    /// registers nothing, so a later call tries again.
    pub fn get_or_try_init_with<F>(
        &self,
        name: &str,
        init: F,
    ) -> Result<Arc<FirebaseApp>, InitError>
    where
        F: FnOnce() -> Result<FirebaseApp, InitError>,
    {
        let mut entries = self.lock();
        if let Some(app) = entries.find(name) {
            tracing::debug!(app = name, "reusing initialized Firebase app");
            return Ok(app.clone());
        }

        let app = Arc::new(init()?);
        entries.apps.push(app.clone());
        Ok(app)
    }

    /// Returns the handle registered under `name`, reading credentials from
    /// `source` the first time.
    pub fn get_or_init<S>(&self, name: &str, source: &S) -> Result<Arc<FirebaseApp>, InitError>
    where
        S: EnvSource + ?Sized,
    {
        self.get_or_try_init_with(name, || {
            let config = ServiceAccountConfig::from_source(source)?;
            let app = FirebaseApp::new(name, &config).map_err(|e| {
                tracing::error!(app = name, error = %e, "failed to initialize Firebase Admin SDK");
                InitError::from(e)
            })?;
            tracing::info!(
                app = name,
                project_id = app.project_id(),
                client_email = app.client_email(),
                "Firebase Admin SDK initialized"
            );
            Ok(app)
        })
    }

    /// The default app, reading credentials from `source` the first time.
    pub fn default_app<S>(&self, source: &S) -> Result<Arc<FirebaseApp>, InitError>
    where
        S: EnvSource + ?Sized,
    {
        self.get_or_init(DEFAULT_APP_NAME, source)
    }

    pub fn app(&self, name: &str) -> Option<Arc<FirebaseApp>> {
        self.lock().find(name).cloned()
    }

    /// All registered handles, in registration order.
    pub fn apps(&self) -> Vec<Arc<FirebaseApp>> {
        self.lock().apps.clone()
    }

    pub fn len(&self) -> usize {
        self.lock().apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
