//! Sample catalog used to populate an empty database.

use music_library_core::track::TrackFields;

use crate::repositories::TrackStore;

/// (song title, artist, album, genre, duration in seconds, release year)
const SAMPLE_TRACKS: &[(&str, &str, &str, &str, i64, i64)] = &[
    ("Bohemian Rhapsody", "Queen", "A Night at the Opera", "Rock", 355, 1975),
    ("Billie Jean", "Michael Jackson", "Thriller", "Pop", 294, 1982),
    ("Smells Like Teen Spirit", "Nirvana", "Nevermind", "Grunge", 301, 1991),
    ("So What", "Miles Davis", "Kind of Blue", "Jazz", 562, 1959),
    ("Hotel California", "Eagles", "Hotel California", "Rock", 391, 1976),
    ("Lose Yourself", "Eminem", "8 Mile", "Hip-Hop", 326, 2002),
    ("Clair de Lune", "Claude Debussy", "Suite bergamasque", "Classical", 300, 1905),
    ("Blinding Lights", "The Weeknd", "After Hours", "Synth-pop", 200, 2020),
];

pub fn sample_tracks() -> Vec<TrackFields> {
    SAMPLE_TRACKS
        .iter()
        .map(
            |&(song_title, artist_name, album_name, genre, duration, release_year)| TrackFields {
                song_title: song_title.to_string(),
                artist_name: artist_name.to_string(),
                album_name: album_name.to_string(),
                genre: genre.to_string(),
                duration,
                release_year,
            },
        )
        .collect()
}

/// Insert the sample tracks if the catalog is empty.
///
/// Returns the number of tracks inserted; an already populated catalog is
/// left untouched and yields `0`.
pub async fn seed_sample_tracks(store: &dyn TrackStore) -> Result<usize, sqlx::Error> {
    if !store.list().await?.is_empty() {
        tracing::info!("Tracks table already populated, skipping seed");
        return Ok(0);
    }

    let tracks = sample_tracks();
    for fields in &tracks {
        store.create(fields).await?;
    }
    tracing::info!(count = tracks.len(), "Seeded sample tracks");
    Ok(tracks.len())
}
