//! Grunge - a soft grunge image bot
//!
//! Picks a word, finds a photograph of it, pixelates and pastelizes it with
//! `grunge-style`, and publishes the result with a framed caption on a timer.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod services;
