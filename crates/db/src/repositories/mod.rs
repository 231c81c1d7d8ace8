//! SQL repositories. Each is a zero-sized type with associated functions
//! taking the pool explicitly.

pub mod video_repo;

pub use video_repo::VideoRepo;
