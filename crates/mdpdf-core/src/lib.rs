//! mdpdf Core
//!
//! This crate provides core types, state, and error definitions
//! for the mdpdf Markdown-to-PDF converter.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`ScanState`] - The scanner state threaded through a single pass
//! - [`BlockKind`], [`FontFace`] - Block and font enums
//! - [`Table`], [`Rgb`] - Table buffer and color types
//! - [`MdpdfError`] - Error types

pub mod enums;
pub mod error;
pub mod state;
pub mod types;

pub use enums::{BlockKind, FontFace};
pub use error::{MdpdfError, Result};
pub use state::ScanState;
pub use types::{Rgb, Table};
