//! Flat-file persistence for gendercite.
//!
//! This crate provides:
//! - [`NameCache`] — the name→gender JSON cache, written through on update
//! - [`ResultsTable`] — the accumulated CSV results table
//!
//! Both treat a missing prior file as a normal startup condition.

pub mod cache;
pub mod table;

pub use cache::NameCache;
pub use table::ResultsTable;
