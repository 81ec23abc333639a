use thiserror::Error;

/// Errors raised while resolving the shared Firebase Admin client.
///
/// None of these are retried: missing or malformed static configuration does not
/// fix itself, so they are meant to reach the start-up sequence unchanged.
#[derive(Error, Debug)]
pub enum InitError {
    /// One or more required environment variables are absent or blank.
    #[error(
        "Missing required Firebase Admin SDK configuration: {}. \
         Set these environment variables in the deployment settings.",
        .0.join(", ")
    )]
    ConfigurationMissing(Vec<&'static str>),
    /// A variable is present but structurally invalid.
    #[error("Malformed Firebase Admin SDK configuration: {key} {reason}")]
    ConfigurationMalformed {
        key: &'static str,
        reason: &'static str,
    },
    /// The client could not be built from otherwise well-formed configuration.
    #[error("Failed to initialize Firebase Admin SDK")]
    ConstructionFailed(#[source] ConstructionError),
}

/// Errors raised by [`FirebaseApp::new`](crate::FirebaseApp::new).
#[derive(Error, Debug)]
pub enum ConstructionError {
    /// The private key is not a valid PKCS#8 RSA key.
    #[error("private key could not be parsed as a PKCS#8 RSA key")]
    InvalidPrivateKey(#[source] InvalidKeyEncoding),
    /// The underlying HTTP client could not be built.
    #[error("HTTP client setup failed")]
    HttpClient(#[from] reqwest::Error),
}

/// Cause of [`ConstructionError::InvalidPrivateKey`].
///
/// The parser's own error reports lengths and offsets inside the key, so it is
/// dropped and only this fixed message is kept in the chain.
#[derive(Error, Debug)]
#[error("invalid key encoding")]
pub struct InvalidKeyEncoding;

impl From<rsa::pkcs8::Error> for ConstructionError {
    fn from(_: rsa::pkcs8::Error) -> Self {
        ConstructionError::InvalidPrivateKey(InvalidKeyEncoding)
    }
}

impl From<ConstructionError> for InitError {
    fn from(err: ConstructionError) -> Self {
        InitError::ConstructionFailed(err)
    }
}

impl InitError {
    /// Names of the environment variables this error is about.
    pub fn keys(&self) -> Vec<&'static str> {
        match self {
            InitError::ConfigurationMissing(keys) => keys.clone(),
            InitError::ConfigurationMalformed { key, .. } => vec![*key],
            InitError::ConstructionFailed(_) => Vec::new(),
        }
    }
}
