//! Shared crate for the route agent frontend.
//!
//! Holds everything that does not need a browser or a network: the wire types exchanged with the
//! routing backend, endpoint resolution, display formatting, and the form state machine that the
//! yew app drives.

pub mod config;
pub mod error;
pub mod examples;
pub mod format;
pub mod queries;
pub mod submission;
pub mod view;

pub use error::RouteError;
