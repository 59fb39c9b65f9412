//! Repository for the `tracks` table.

use async_trait::async_trait;
use music_library_core::track::TrackFields;
use music_library_core::types::DbId;

use super::TrackStore;
use crate::models::track::Track;
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "track_id, song_title, artist_name, album_name, genre, duration, release_year";

/// SQLite-backed [`TrackStore`].
#[derive(Debug, Clone)]
pub struct TrackRepo {
    pool: DbPool,
}

impl TrackRepo {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TrackStore for TrackRepo {
    async fn create(&self, input: &TrackFields) -> Result<Track, sqlx::Error> {
        let query = format!(
            "INSERT INTO tracks (song_title, artist_name, album_name, genre, duration, release_year) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6) \
             RETURNING {COLUMNS}"
        );
        let track = sqlx::query_as::<_, Track>(&query)
            .bind(&input.song_title)
            .bind(&input.artist_name)
            .bind(&input.album_name)
            .bind(&input.genre)
            .bind(input.duration)
            .bind(input.release_year)
            .fetch_one(&self.pool)
            .await?;
        tracing::debug!(track_id = track.track_id, "Track inserted");
        Ok(track)
    }

    async fn list(&self) -> Result<Vec<Track>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tracks ORDER BY track_id");
        sqlx::query_as::<_, Track>(&query)
            .fetch_all(&self.pool)
            .await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Track>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tracks WHERE track_id = ?1");
        sqlx::query_as::<_, Track>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn update(&self, id: DbId, input: &TrackFields) -> Result<Option<Track>, sqlx::Error> {
        let query = format!(
            "UPDATE tracks SET \
                song_title = ?2, \
                artist_name = ?3, \
                album_name = ?4, \
                genre = ?5, \
                duration = ?6, \
                release_year = ?7 \
             WHERE track_id = ?1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Track>(&query)
            .bind(id)
            .bind(&input.song_title)
            .bind(&input.artist_name)
            .bind(&input.album_name)
            .bind(&input.genre)
            .bind(input.duration)
            .bind(input.release_year)
            .fetch_optional(&self.pool)
            .await
    }

    async fn delete(&self, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tracks WHERE track_id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }
}
