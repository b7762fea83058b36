//! Name-to-gender resolution.
//!
//! This crate provides:
//! - [`Detector`] — offline, deterministic name table lookup
//! - [`GenderApiClient`] — the external gender-inference service client
//! - [`GenderResolver`] — the detector → cache → service cascade

pub mod detector;
pub mod resolver;
pub mod service;

pub use detector::Detector;
pub use resolver::GenderResolver;
pub use service::GenderApiClient;
