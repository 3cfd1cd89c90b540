//! Colors, gradients and theme presets.
//!
//! Hex strings coming from the user are parsed into [`Rgb`] at the
//! boundary; everything past that point works on fixed 8-bit channels.

use crate::error::ValidationError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const BLACK: Rgb = Rgb([0, 0, 0]);
    pub const WHITE: Rgb = Rgb([255, 255, 255]);

    /// Parse `#RRGGBB` (the leading `#` is optional, case-insensitive).
    pub fn from_hex(hex: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidColor(hex.to_string());
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(invalid());
        }

        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        Ok(Rgb([channel(0)?, channel(2)?, channel(4)?]))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0[0], self.0[1], self.0[2])
    }

    /// Linear blend toward `other`, rounded to the nearest channel value.
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb([
            mix(self.0[0], other.0[0]),
            mix(self.0[1], other.0[1]),
            mix(self.0[2], other.0[2]),
        ])
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgb::from_hex(s)
    }
}

impl TryFrom<String> for Rgb {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Rgb::from_hex(&value)
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_hex()
    }
}

/// Parse a comma-separated list of hex colors, e.g. `"#3988A4,#67C2D4"`.
pub fn parse_color_list(list: &str) -> Result<Vec<Rgb>, ValidationError> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(Rgb::from_hex)
        .collect()
}

/// Number of colors picked for a random palette.
pub const RANDOM_PALETTE_SIZE: usize = 5;

/// Draw a palette of uniformly random colors.
pub fn random_colors(rng: &mut impl Rng, count: usize) -> Vec<Rgb> {
    (0..count).map(|_| Rgb(rng.gen())).collect()
}

/// Continuous color ramp over [0, 1].
///
/// Control colors are spaced evenly: the first sits at 0, the last at 1,
/// and values in between are blended linearly channel by channel.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    stops: Vec<Rgb>,
}

impl Gradient {
    pub fn new(colors: &[Rgb]) -> Result<Self, ValidationError> {
        if colors.len() < 2 {
            return Err(ValidationError::TooFewColors(colors.len()));
        }
        Ok(Self {
            stops: colors.to_vec(),
        })
    }

    /// Color at intensity `t`. Values outside [0, 1] (and NaN) are clamped.
    pub fn sample(&self, t: f64) -> Rgb {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let segments = self.stops.len() - 1;
        let pos = t * segments as f64;
        let idx = (pos.floor() as usize).min(segments - 1);
        self.stops[idx].lerp(self.stops[idx + 1], pos - idx as f64)
    }

    /// Sample the ramp at `n` evenly spaced points, endpoints included.
    pub fn lookup_table(&self, n: usize) -> Vec<Rgb> {
        match n {
            0 => Vec::new(),
            1 => vec![self.sample(0.0)],
            _ => (0..n)
                .map(|i| self.sample(i as f64 / (n - 1) as f64))
                .collect(),
        }
    }
}

/// Built-in color themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTheme {
    Rainbow,
    Ocean,
    Sunset,
    Pastel,
    Monochrome,
    Neon,
}

impl ColorTheme {
    pub fn all() -> [ColorTheme; 6] {
        [
            ColorTheme::Rainbow,
            ColorTheme::Ocean,
            ColorTheme::Sunset,
            ColorTheme::Pastel,
            ColorTheme::Monochrome,
            ColorTheme::Neon,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ColorTheme::Rainbow => "rainbow",
            ColorTheme::Ocean => "ocean",
            ColorTheme::Sunset => "sunset",
            ColorTheme::Pastel => "pastel",
            ColorTheme::Monochrome => "monochrome",
            ColorTheme::Neon => "neon",
        }
    }

    pub fn from_name(name: &str) -> Option<ColorTheme> {
        let name = name.trim().to_ascii_lowercase();
        Self::all().into_iter().find(|t| t.name() == name)
    }

    fn hex(&self) -> [&'static str; 7] {
        match self {
            ColorTheme::Rainbow => [
                "#FF0000", "#FF7F00", "#FFFF00", "#00FF00", "#0000FF", "#4B0082", "#8B00FF",
            ],
            ColorTheme::Ocean => [
                "#0077be", "#87ceeb", "#00ffff", "#006994", "#00008B", "#120a8f", "#000000",
            ],
            ColorTheme::Sunset => [
                "#ff7e5f", "#feb47b", "#ffac81", "#ff8c69", "#ff7f50", "#ff6347", "#ff4500",
            ],
            ColorTheme::Pastel => [
                "#ffb6c1", "#ffc0cb", "#f08080", "#e6e6fa", "#b0e0e6", "#add8e6", "#87ceeb",
            ],
            ColorTheme::Monochrome => [
                "#000000", "#222222", "#444444", "#666666", "#888888", "#aaaaaa", "#ffffff",
            ],
            ColorTheme::Neon => [
                "#ff00ff", "#00ffff", "#ff0000", "#00ff00", "#0000ff", "#ffff00", "#ff00ff",
            ],
        }
    }

    /// Control colors of this theme, in gradient order.
    pub fn colors(&self) -> Vec<Rgb> {
        self.hex()
            .iter()
            .filter_map(|h| Rgb::from_hex(h).ok())
            .collect()
    }
}

impl fmt::Display for ColorTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn parses_hex_with_and_without_hash() {
        assert_eq!(Rgb::from_hex("#FF7F00").unwrap(), Rgb([255, 127, 0]));
        assert_eq!(Rgb::from_hex("0077be").unwrap(), Rgb([0, 119, 190]));
        assert_eq!(Rgb([18, 10, 143]).to_hex(), "#120a8f");
    }

    #[test]
    fn rejects_malformed_hex() {
        for bad in ["", "#12345", "#1234567", "#GG0000", "#ééé"] {
            assert!(
                matches!(Rgb::from_hex(bad), Err(ValidationError::InvalidColor(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn parses_color_lists() {
        let colors = parse_color_list("#000000, #ffffff,").unwrap();
        assert_eq!(colors, vec![Rgb::BLACK, Rgb::WHITE]);
        assert!(parse_color_list("#000000,nope").is_err());
    }

    #[test]
    fn gradient_needs_two_stops() {
        assert_eq!(
            Gradient::new(&[Rgb::BLACK]),
            Err(ValidationError::TooFewColors(1))
        );
    }

    #[test]
    fn gradient_hits_control_points() {
        let red = Rgb([255, 0, 0]);
        let g = Gradient::new(&[Rgb::BLACK, red, Rgb::WHITE]).unwrap();
        assert_eq!(g.sample(0.0), Rgb::BLACK);
        assert_eq!(g.sample(0.5), red);
        assert_eq!(g.sample(1.0), Rgb::WHITE);
        assert_eq!(g.sample(0.25), Rgb([128, 0, 0]));
        assert_eq!(g.sample(-3.0), Rgb::BLACK);
        assert_eq!(g.sample(f64::NAN), Rgb::BLACK);
    }

    #[test]
    fn lookup_table_spans_endpoints() {
        let g = Gradient::new(&[Rgb::BLACK, Rgb::WHITE]).unwrap();
        let lut = g.lookup_table(256);
        assert_eq!(lut.len(), 256);
        assert_eq!(lut[0], Rgb::BLACK);
        assert_eq!(lut[255], Rgb::WHITE);
        assert_eq!(lut[128], Rgb([128, 128, 128]));
    }

    #[test]
    fn every_theme_has_seven_colors() {
        for theme in ColorTheme::all() {
            assert_eq!(theme.colors().len(), 7, "{theme}");
            assert_eq!(ColorTheme::from_name(theme.name()), Some(theme));
        }
        assert_eq!(ColorTheme::from_name("Ocean"), Some(ColorTheme::Ocean));
        assert_eq!(ColorTheme::from_name("plaid"), None);
    }

    #[test]
    fn random_colors_follow_the_seed() {
        let mut a = rand::rngs::StdRng::seed_from_u64(7);
        let mut b = rand::rngs::StdRng::seed_from_u64(7);
        assert_eq!(random_colors(&mut a, 5), random_colors(&mut b, 5));
    }
}
