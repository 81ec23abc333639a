use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

/// Verifies that Firebase Admin credentials in the environment can build a client.
#[derive(Debug, Parser)]
#[command(name = "firebase-admin-check", version)]
struct Cli {
    /// Log output format.
    #[arg(long, value_enum, default_value = "pretty", env = "FIREBASE_ADMIN_LOG_FORMAT")]
    log_format: LogFormat,
}

fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);
    match format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_format);

    let app = firebase_admin_bootstrap::get_client()?;
    tracing::info!(
        project_id = app.project_id(),
        client_email = app.client_email(),
        "credentials accepted"
    );
    Ok(())
}
