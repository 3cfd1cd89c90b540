//! Pattern generators - each turns parameters into a finished image.

pub mod kaleidoscope;

use crate::error::Result;
use crate::params::PatternParameters;
use crate::render::RenderedImage;

/// Trait for all pattern generators.
pub trait Generator {
    /// Name of this generator style.
    fn name(&self) -> &'static str;

    /// Generate an image from the given parameters.
    fn generate(&self, params: &PatternParameters) -> Result<RenderedImage>;

    /// File extension for this generator's output.
    fn extension(&self) -> &'static str;
}
