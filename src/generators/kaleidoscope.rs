//! Kaleidoscope generator.
//!
//! Runs the harmonic synthesis for a set of parameters and paints the
//! result through the parameters' gradient onto a solid background.

use crate::error::Result;
use crate::field::ScalarField;
use crate::generators::Generator;
use crate::palette::Rgb;
use crate::params::PatternParameters;
use crate::render::{RenderedImage, Renderer};
use crate::synth::synthesize;

pub struct KaleidoscopeGenerator {
    pub background: Rgb,
}

impl Default for KaleidoscopeGenerator {
    fn default() -> Self {
        Self {
            background: Rgb::BLACK,
        }
    }
}

impl KaleidoscopeGenerator {
    pub fn new(background: Rgb) -> Self {
        Self { background }
    }

    /// Synthesize and render, keeping the field around for inspection.
    pub fn generate_with_field(
        &self,
        params: &PatternParameters,
    ) -> Result<(ScalarField, RenderedImage)> {
        let field = synthesize(params)?;
        let image = Renderer::new(&params.colors)?
            .with_background(self.background)
            .render(&field);
        Ok((field, image))
    }
}

impl Generator for KaleidoscopeGenerator {
    fn name(&self) -> &'static str {
        "kaleidoscope"
    }

    fn generate(&self, params: &PatternParameters) -> Result<RenderedImage> {
        self.generate_with_field(params).map(|(_, image)| image)
    }

    fn extension(&self) -> &'static str {
        "png"
    }
}
