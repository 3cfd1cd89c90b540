//! Kaleidoscope - parametric kaleidoscope pattern generator.
//!
//! A stack of angular harmonics is summed over a polar grid, normalized,
//! cut to a disk and painted through a color gradient. Everything is
//! determined by [`PatternParameters`], seed included, so the same
//! parameters always give the same image.

pub mod config;
pub mod error;
pub mod field;
pub mod generators;
pub mod palette;
pub mod params;
pub mod render;
pub mod session;
pub mod stats;
pub mod synth;

pub use config::KaleidoConfig;
pub use error::{Error, Result, ValidationError};
pub use field::ScalarField;
pub use generators::Generator;
pub use palette::{ColorTheme, Gradient, Rgb};
pub use params::{PatternParameters, Resolution};
pub use render::{render, RenderedImage, Renderer};
pub use session::{SeedMode, SessionState};
pub use stats::PatternStats;
pub use synth::{synthesize, synthesize_with_rng};
