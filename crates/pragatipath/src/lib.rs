//! Domain library for the PragatiPath placement portal's scoring service.
//!
//! The [`employability`] module carries the scoring engine, the repository
//! seams it reads through, the service facade, and the HTTP router. The
//! remaining modules hold the service-wide configuration, telemetry, and
//! error plumbing shared with the deployable API crate.

pub mod config;
pub mod employability;
pub mod error;
pub mod telemetry;
