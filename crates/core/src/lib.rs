//! Domain types shared by the persistence and HTTP layers of the music
//! library service.

pub mod error;
pub mod track;
pub mod types;
