//! Data-driven character content and loaders.
//!
//! This crate houses the seed data a sheet is created from and the loaders
//! that read it:
//! - Character seeds (data-driven via RON)
//! - Sheet configuration (data-driven via TOML)
//! - Built-in presets compiled into the binary
//!
//! Seeds are read once at character-load time and never written back.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub mod presets;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, LoadResult, SheetLoader};
