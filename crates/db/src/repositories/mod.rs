//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod artwork_repo;
pub mod exhibition_repo;
pub mod museum_repo;

pub use artwork_repo::ArtworkRepo;
pub use exhibition_repo::ExhibitionRepo;
pub use museum_repo::MuseumRepo;
