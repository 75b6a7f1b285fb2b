//! Handmark hand-landmark detection adapter.
//!
//! This crate wraps a pluggable hand-landmark detection engine behind a small, typed
//! API: construct a [`LandmarkDetector`] once with a [`HandsConfig`], then feed it
//! RGB frames and get back a flat mapping from landmark index to normalized `(x, y)`
//! coordinates.
//!
//! The detection engine itself — the model that locates hands and regresses their
//! landmarks — lives behind the [`HandEngine`] trait and is supplied by the caller.
//! This crate performs no detection of its own; it marshals configuration into the
//! engine and reshapes the engine's per-hand landmark lists into a [`LandmarkMap`].
//!
//! # Coordinates
//!
//! All landmark positions are *normalized*: expressed as fractions of the frame's
//! width and height, in `0.0..=1.0`, with the origin in the top-left corner and Y
//! pointing down (the convention used by the input image).
//!
//! [`LandmarkDetector`]: detector::LandmarkDetector
//! [`HandsConfig`]: engine::HandsConfig
//! [`HandEngine`]: engine::HandEngine
//! [`LandmarkMap`]: landmark::LandmarkMap

use log::LevelFilter;

pub mod detector;
pub mod engine;
pub mod landmark;

#[cfg(test)]
mod test;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = LevelFilter::Debug;
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_PKG_NAME")), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// The calling crate and this library will log at *debug* level; the `RUST_LOG`
/// environment variable can override this.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
