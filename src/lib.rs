//! Guarded, process-wide initialization of the Firebase Admin client.
//!
//! Credentials come from three environment variables:
//!
//! * `FIREBASE_PROJECT_ID`
//! * `FIREBASE_CLIENT_EMAIL`
//! * `FIREBASE_PRIVATE_KEY` (PEM, literal `\n` escapes are accepted)
//!
//! The first call to [`get_client`] validates them and builds the client; every
//! later call returns the same handle.
//!
//! ```rust,no_run
//! # fn run() -> Result<(), firebase_admin_bootstrap::InitError> {
//! let app = firebase_admin_bootstrap::get_client()?;
//! println!("connected to {}", app.project_id());
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod core;
pub mod credential;
pub mod registry;

#[cfg(test)]
pub(crate) mod test_support;

pub use app::{FirebaseApp, DEFAULT_APP_NAME};
pub use crate::core::{ConstructionError, InitError};
pub use credential::{EnvSource, ProcessEnv, ServiceAccountConfig};
pub use registry::AppRegistry;

use std::sync::Arc;

/// Returns the process-wide default client, initializing it on first use.
///
/// Failures are not cached; the environment is read again on the next call.
pub fn get_client() -> Result<Arc<FirebaseApp>, InitError> {
    AppRegistry::global().default_app(&ProcessEnv)
}
