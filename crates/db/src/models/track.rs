//! Track entity model.

use music_library_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `tracks` table.
///
/// Serialized with the camelCase keys clients use (`trackId`, `songTitle`, ...).
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub track_id: DbId,
    pub song_title: String,
    pub artist_name: String,
    pub album_name: String,
    pub genre: String,
    pub duration: Option<i64>,
    pub release_year: Option<i64>,
}
