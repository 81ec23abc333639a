//! The shared Firebase Admin client handle.

use crate::core::middleware::AuthMiddleware;
use crate::core::ConstructionError;
use crate::credential::ServiceAccountConfig;
use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::policies::ExponentialBackoff;
use reqwest_retry::RetryTransientMiddleware;
use rsa::pkcs8::DecodePrivateKey;
use rsa::RsaPrivateKey;
use std::fmt;
use std::sync::Arc;
use yup_oauth2::ServiceAccountKey;


/// Name of the app returned by [`crate::get_client`].
pub const DEFAULT_APP_NAME: &str = "[DEFAULT]";

const TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
const AUTH_URI: &str = "https://accounts.google.com/o/oauth2/auth";
const AUTH_PROVIDER_CERT_URL: &str = "https://www.googleapis.com/oauth2/v1/certs";

/// Authenticated connection context for Firebase services.
///
/// Requests sent through [`FirebaseApp::http_client`] carry a bearer token for
/// the configured service account and are retried on transient failures.
pub struct FirebaseApp {
    name: String,
    key: Arc<ServiceAccountKey>,
    client: ClientWithMiddleware,
}

impl FirebaseApp {
    /// Builds a client handle from validated credentials.
    ///
    /// The private key is parsed up front so a key that passes the PEM header
    /// check but is not a usable RSA key fails here instead of on the first
    /// request. No network traffic happens.
    pub fn new(
        name: impl Into<String>,
        config: &ServiceAccountConfig,
    ) -> Result<Self, ConstructionError> {
        RsaPrivateKey::from_pkcs8_pem(config.expose_private_key())?;

        let key = Arc::new(service_account_key(config));
        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(3);

        let client = ClientBuilder::new(Client::builder().build()?)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .with(AuthMiddleware::new(key.clone()))
            .build();

        Ok(Self {
            name: name.into(),
            key,
            client,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn project_id(&self) -> &str {
        self.key.project_id.as_deref().unwrap_or_default()
    }

    pub fn client_email(&self) -> &str {
        &self.key.client_email
    }

    /// The service-account key, for clients that manage their own authentication.
    pub fn service_account_key(&self) -> &ServiceAccountKey {
        &self.key
    }

    /// HTTP client with retry and bearer-token middleware installed.
    pub fn http_client(&self) -> &ClientWithMiddleware {
        &self.client
    }
}

impl fmt::Debug for FirebaseApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FirebaseApp")
            .field("name", &self.name)
            .field("project_id", &self.project_id())
            .field("client_email", &self.client_email())
            .finish_non_exhaustive()
    }
}

fn service_account_key(config: &ServiceAccountConfig) -> ServiceAccountKey {
    ServiceAccountKey {
        key_type: Some("service_account".to_string()),
        project_id: Some(config.project_id().to_string()),
        private_key_id: None,
        private_key: config.expose_private_key().to_string(),
        client_email: config.client_email().to_string(),
        client_id: None,
        auth_uri: Some(AUTH_URI.to_string()),
        token_uri: TOKEN_URI.to_string(),
        auth_provider_x509_cert_url: Some(AUTH_PROVIDER_CERT_URL.to_string()),
        client_x509_cert_url: None,
    }
}
