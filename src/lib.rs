//! Library exports for reusing fingerpaint subsystems.
//!
//! Exposes the drawing engine (scene, gesture dispatch, SVG rendering)
//! alongside configuration, session persistence, and export support so
//! that host shells (mobile bridges, test harnesses, the CLI) can share
//! the same canvas semantics.

pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod session;
pub mod util;

pub use config::Config;
