//! Populate an empty catalog with sample tracks.
//!
//! Uses the same configuration as the server (`APP_ENV`, `DATABASE_URL`) and
//! applies migrations first, so it can run against a brand-new database.

use music_library_api::config::ServerConfig;
use music_library_api::telemetry;
use music_library_db::repositories::TrackRepo;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    telemetry::init_tracing();

    let config = ServerConfig::from_env().expect("Invalid configuration");

    let pool = music_library_db::create_pool(&config.database_url)
        .await
        .expect("Failed to connect to database");

    music_library_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    let repo = TrackRepo::new(pool.clone());
    let inserted = music_library_db::seed::seed_sample_tracks(&repo)
        .await
        .expect("Failed to seed tracks");

    tracing::info!(inserted, database_url = %config.database_url, "Seeding finished");
    pool.close().await;
}
