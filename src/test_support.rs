use crate::credential::{CLIENT_EMAIL_VAR, PRIVATE_KEY_VAR, PROJECT_ID_VAR};
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

pub const TEST_PRIVATE_KEY: &str = include_str!("../tests/fixtures/service_account_key.pem");
pub const TEST_PROJECT_ID: &str = "test-project";
pub const TEST_CLIENT_EMAIL: &str = "test@test-project.iam.gserviceaccount.com";

/// The fixture key as it is usually stored in an environment variable.
pub fn escaped_private_key() -> String {
    TEST_PRIVATE_KEY.trim_end().replace('\n', "\\n")
}

pub fn source(project_id: &str, client_email: &str, private_key: &str) -> HashMap<String, String> {
    HashMap::from([
        (PROJECT_ID_VAR.to_string(), project_id.to_string()),
        (CLIENT_EMAIL_VAR.to_string(), client_email.to_string()),
        (PRIVATE_KEY_VAR.to_string(), private_key.to_string()),
    ])
}

pub fn valid_source() -> HashMap<String, String> {
    source(TEST_PROJECT_ID, TEST_CLIENT_EMAIL, &escaped_private_key())
}

#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Runs `f` with a subscriber that records every event on this thread.
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .without_time()
        .finish();
    let out = tracing::subscriber::with_default(subscriber, f);
    (out, buffer.contents())
}
