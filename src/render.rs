//! Colorizing fields and encoding them as PNG.

use crate::error::{Result, ValidationError};
use crate::field::ScalarField;
use crate::palette::{Gradient, Rgb};
use image::{ImageFormat, RgbImage};
use std::io::Cursor;
use std::path::Path;

/// Number of discrete colors the gradient is sampled into.
pub const GRADIENT_RESOLUTION: usize = 256;

/// Maps field intensities to pixels.
#[derive(Debug, Clone)]
pub struct Renderer {
    lut: Vec<Rgb>,
    background: Rgb,
}

impl Renderer {
    pub fn new(colors: &[Rgb]) -> std::result::Result<Self, ValidationError> {
        let lut = Gradient::new(colors)?.lookup_table(GRADIENT_RESOLUTION);
        Ok(Self {
            lut,
            background: Rgb::BLACK,
        })
    }

    /// Color painted over masked cells. Black unless overridden.
    pub fn with_background(mut self, background: Rgb) -> Self {
        self.background = background;
        self
    }

    fn color_for(&self, value: f64) -> Rgb {
        let last = self.lut.len() - 1;
        let idx = if value.is_nan() {
            0
        } else {
            ((value.clamp(0.0, 1.0) * self.lut.len() as f64) as usize).min(last)
        };
        self.lut[idx]
    }

    /// Paint `field`. The top image row is the top of the picture
    /// (the field's last row).
    pub fn render(&self, field: &ScalarField) -> RenderedImage {
        let size = field.size();
        let image = RgbImage::from_fn(size, size, |px, py| {
            let row = size - 1 - py;
            let color = if field.is_masked(px, row) {
                self.background
            } else {
                self.color_for(field.get(px, row))
            };
            image::Rgb(color.0)
        });
        RenderedImage { image }
    }
}

/// Render `field` through the gradient built from `colors`, matted on black.
pub fn render(field: &ScalarField, colors: &[Rgb]) -> Result<RenderedImage> {
    Ok(Renderer::new(colors)?.render(field))
}

/// A colorized pattern ready to encode.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedImage {
    image: RgbImage,
}

impl RenderedImage {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Pixel at `(x, y)`, with `y = 0` the top row.
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        Rgb(self.image.get_pixel(x, y).0)
    }

    pub fn as_image(&self) -> &RgbImage {
        &self.image
    }

    /// Encode as PNG. The returned cursor is rewound to the start.
    pub fn encode(&self) -> Result<Cursor<Vec<u8>>> {
        let mut buf = Cursor::new(Vec::new());
        self.image.write_to(&mut buf, ImageFormat::Png)?;
        buf.set_position(0);
        Ok(buf)
    }

    /// Encode and write to `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        let buf = self.encode()?;
        std::fs::write(path, buf.into_inner())?;
        Ok(())
    }
}
