use async_trait::async_trait;
use music_library_core::track::TrackFields;
use music_library_core::types::DbId;

use crate::models::track::Track;

/// The persistence client for tracks.
///
/// Handlers only see this trait, so the HTTP layer can run against
/// [`TrackRepo`](super::TrackRepo) in production and an in-memory double in
/// tests. Storage failures are returned as-is; callers decide how to report
/// them.
#[async_trait]
pub trait TrackStore: Send + Sync {
    /// Insert a new track. The store assigns `track_id`.
    async fn create(&self, input: &TrackFields) -> Result<Track, sqlx::Error>;

    /// All tracks in insertion order.
    async fn list(&self) -> Result<Vec<Track>, sqlx::Error>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Track>, sqlx::Error>;

    /// Overwrite every mutable field. Returns `None` if no row has this id.
    async fn update(&self, id: DbId, input: &TrackFields) -> Result<Option<Track>, sqlx::Error>;

    /// Remove a track, returning the number of rows removed (0 or 1).
    async fn delete(&self, id: DbId) -> Result<u64, sqlx::Error>;

    /// Check that the backing storage is reachable.
    async fn ping(&self) -> Result<(), sqlx::Error>;
}
