//! Public API for the grunge-style crate.
//!
//! This module provides the high-level API: [`Stylizer`] builder and
//! [`StyleError`] unified error type.

mod builder;
mod error;

pub use builder::Stylizer;
pub use error::StyleError;
