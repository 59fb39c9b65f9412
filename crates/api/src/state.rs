use std::sync::Arc;

use music_library_db::repositories::TrackStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Persistence client for tracks. Constructed once at startup.
    pub tracks: Arc<dyn TrackStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(tracks: Arc<dyn TrackStore>, config: ServerConfig) -> Self {
        Self {
            tracks,
            config: Arc::new(config),
        }
    }
}
