//! BookConnect core library exports
//!
//! The catalog engine is UI-agnostic: it owns the dataset, derives the
//! current result set from a [`catalog::Filter`], and reveals that set in
//! fixed-size pages. Rendering layers consume plain data from [`view`].

pub mod catalog;
pub mod config;
pub mod error;
pub mod theme;
pub mod view;

pub use error::{CatalogError, Result};
