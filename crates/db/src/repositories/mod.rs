//! Storage-backed operations, one repository per table.

mod track_repo;
mod track_store;

pub use track_repo::TrackRepo;
pub use track_store::TrackStore;
