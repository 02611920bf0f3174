//! Find-similar quickstart binary.

use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use facefind_client::FaceClient;
use facefind_quickstart::{run_find_similar, FIRST_IMAGE_URL, SECOND_IMAGE_URL};

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing with colored output for dev, JSON for production
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let env_filter = EnvFilter::from_default_env()
        .add_directive("facefind_client=info".parse().unwrap())
        .add_directive("facefind_quickstart=info".parse().unwrap());

    if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_ansi(true)
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false),
            )
            .with(env_filter)
            .init();
    }

    info!("Starting facefind-quickstart");

    let client = match FaceClient::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to create face client: {}", e);
            std::process::exit(1);
        }
    };

    // Remote failures degrade silently inside the flow; only a broken
    // stdout surfaces here.
    let mut stdout = std::io::stdout();
    if let Err(e) = run_find_similar(&client, FIRST_IMAGE_URL, SECOND_IMAGE_URL, &mut stdout).await
    {
        error!("Failed to write report: {}", e);
    }

    info!("Quickstart complete");
}
