//! Development server for ParkDesk UI development.
//!
//! Runs the in-memory mock of the booking backend with seeded suppliers,
//! products and bookings so the dashboard has realistic data to render.
//!
//! Usage: cargo run -p dev-server

use anyhow::Result;
use test_helpers::backend::{
    ADMIN_PASSWORD, ADMIN_USERNAME, TEST_BEARER_TOKEN,
};
use test_helpers::mock::DevDataset;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let subscriber = test_helpers::telemetry::get_subscriber("info".into());
    test_helpers::telemetry::init_subscriber(subscriber);

    info!("Starting ParkDesk development backend");
    let app = test_helpers::spawn_app().await;
    info!("Mock backend running on http://127.0.0.1:{}", app.port);

    let dataset = DevDataset::create(&app).await?;
    dataset.print_summary();

    info!("Login: {ADMIN_USERNAME} / {ADMIN_PASSWORD}");
    info!("Bearer fallback token: {TEST_BEARER_TOKEN}");
    info!(
        "UI: cd ui && BACKEND_URL=http://127.0.0.1:{} trunk serve",
        app.port
    );
    info!("Press Ctrl+C to shutdown");

    tokio::signal::ctrl_c().await?;
    info!("Shutting down development backend");
    Ok(())
}
