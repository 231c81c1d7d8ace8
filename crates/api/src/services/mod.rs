//! The two surfaces over the video store.
//!
//! - [`AdminService`] -- list everything, register metadata, publish.
//! - [`PublicService`] -- published videos only, never mutates.
//!
//! Neither holds state of its own; each call is one store round trip.

pub mod admin;
pub mod public;

pub use admin::AdminService;
pub use public::PublicService;
