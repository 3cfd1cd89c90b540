//! Pattern parameters and their bounds.
//!
//! [`PatternParameters::validate`] rejects anything outside the documented
//! ranges before synthesis starts. Callers that would rather coerce raw
//! input into range can use [`PatternParameters::clamped`] first.

use crate::error::ValidationError;
use crate::palette::{ColorTheme, Rgb};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

pub const COMPLEXITY_RANGE: RangeInclusive<u32> = 1..=20;
pub const SEGMENTS_RANGE: RangeInclusive<u32> = 4..=24;
pub const SCALE_RANGE: RangeInclusive<f64> = 0.1..=5.0;
pub const ZOOM_RANGE: RangeInclusive<f64> = 0.5..=2.0;
/// Rotation is half-open: 360 wraps back to 0.
pub const ROTATION_MAX: f64 = 360.0;
pub const MIN_COLORS: usize = 2;
/// Keeps the sampling grid and the PNG within memory.
pub const GRID_SIZE_RANGE: RangeInclusive<u32> = 1..=8192;

/// Upper bound (exclusive) for randomly drawn seeds.
pub const RANDOM_SEED_LIMIT: u32 = 100_000;

/// Sampling resolution presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Low,
    Medium,
    High,
}

impl Resolution {
    pub fn grid_size(&self) -> u32 {
        match self {
            Resolution::Low => 500,
            Resolution::Medium => 800,
            Resolution::High => 1200,
        }
    }

    pub fn from_name(name: &str) -> Option<Resolution> {
        match name.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Resolution::Low),
            "medium" => Some(Resolution::Medium),
            "high" => Some(Resolution::High),
            _ => None,
        }
    }
}

/// Everything that determines a generated pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternParameters {
    /// Number of superposed harmonics.
    pub complexity: u32,
    /// Angular symmetry order.
    pub segments: u32,
    /// Half-width of the sampled plane.
    pub scale: f64,
    /// Radial magnification.
    pub zoom: f64,
    pub rotation_degrees: f64,
    /// Gradient control colors, low intensity first.
    pub colors: Vec<Rgb>,
    pub seed: u32,
    /// Side length of the square sampling grid.
    pub grid_size: u32,
}

impl Default for PatternParameters {
    fn default() -> Self {
        Self {
            complexity: 8,
            segments: 8,
            scale: 2.0,
            zoom: 1.0,
            rotation_degrees: 0.0,
            colors: ColorTheme::Rainbow.colors(),
            seed: 42,
            grid_size: Resolution::Medium.grid_size(),
        }
    }
}

impl PatternParameters {
    /// Check every field against its bounds.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_int("complexity", self.complexity, &COMPLEXITY_RANGE)?;
        check_int("segments", self.segments, &SEGMENTS_RANGE)?;
        if self.segments % 2 != 0 {
            return Err(ValidationError::OddSegments(self.segments));
        }
        check_float("scale", self.scale, &SCALE_RANGE)?;
        check_float("zoom", self.zoom, &ZOOM_RANGE)?;

        let rotation = self.rotation_degrees;
        if !rotation.is_finite() {
            return Err(ValidationError::NotFinite {
                name: "rotation_degrees",
                value: rotation,
            });
        }
        if !(0.0..ROTATION_MAX).contains(&rotation) {
            return Err(ValidationError::OutOfRange {
                name: "rotation_degrees",
                value: rotation,
                min: 0.0,
                max: ROTATION_MAX,
            });
        }

        if self.colors.len() < MIN_COLORS {
            return Err(ValidationError::TooFewColors(self.colors.len()));
        }
        check_int("grid_size", self.grid_size, &GRID_SIZE_RANGE)
    }

    /// Coerce every field into range.
    ///
    /// Integers and floats are clamped to their bounds (non-finite floats
    /// fall to the lower bound), odd segment counts round down to even,
    /// rotation wraps modulo 360, a lone color is duplicated into a flat
    /// gradient and the grid size is clamped like the integers. An empty
    /// color list cannot be repaired and is left for `validate` to reject.
    pub fn clamped(mut self) -> Self {
        self.complexity = self
            .complexity
            .clamp(*COMPLEXITY_RANGE.start(), *COMPLEXITY_RANGE.end());
        self.segments = self
            .segments
            .clamp(*SEGMENTS_RANGE.start(), *SEGMENTS_RANGE.end())
            & !1;
        self.scale = clamp_float(self.scale, &SCALE_RANGE);
        self.zoom = clamp_float(self.zoom, &ZOOM_RANGE);
        self.rotation_degrees = if self.rotation_degrees.is_finite() {
            // rem_euclid can round up to exactly 360 for tiny negatives
            let wrapped = self.rotation_degrees.rem_euclid(ROTATION_MAX);
            if wrapped >= ROTATION_MAX {
                0.0
            } else {
                wrapped
            }
        } else {
            0.0
        };
        if self.colors.len() == 1 {
            self.colors.push(self.colors[0]);
        }
        self.grid_size = self
            .grid_size
            .clamp(*GRID_SIZE_RANGE.start(), *GRID_SIZE_RANGE.end());
        self
    }

    /// Rotation in radians.
    pub fn rotation_radians(&self) -> f64 {
        self.rotation_degrees.to_radians()
    }
}

fn check_int(
    name: &'static str,
    value: u32,
    range: &RangeInclusive<u32>,
) -> Result<(), ValidationError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            name,
            value: value as f64,
            min: *range.start() as f64,
            max: *range.end() as f64,
        })
    }
}

fn check_float(
    name: &'static str,
    value: f64,
    range: &RangeInclusive<f64>,
) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { name, value });
    }
    if range.contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            name,
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

fn clamp_float(value: f64, range: &RangeInclusive<f64>) -> f64 {
    if value.is_finite() {
        value.clamp(*range.start(), *range.end())
    } else {
        *range.start()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(PatternParameters::default().validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_fields() {
        let base = PatternParameters::default();

        let p = PatternParameters {
            complexity: 0,
            ..base.clone()
        };
        assert!(matches!(
            p.validate(),
            Err(ValidationError::OutOfRange {
                name: "complexity",
                ..
            })
        ));

        let p = PatternParameters {
            segments: 26,
            ..base.clone()
        };
        assert!(matches!(
            p.validate(),
            Err(ValidationError::OutOfRange {
                name: "segments",
                ..
            })
        ));

        let p = PatternParameters {
            segments: 7,
            ..base.clone()
        };
        assert_eq!(p.validate(), Err(ValidationError::OddSegments(7)));

        let p = PatternParameters {
            zoom: 2.5,
            ..base.clone()
        };
        assert!(matches!(
            p.validate(),
            Err(ValidationError::OutOfRange { name: "zoom", .. })
        ));

        let p = PatternParameters {
            rotation_degrees: 360.0,
            ..base.clone()
        };
        assert!(p.validate().is_err());

        let p = PatternParameters {
            colors: vec![Rgb::BLACK],
            ..base.clone()
        };
        assert_eq!(p.validate(), Err(ValidationError::TooFewColors(1)));

        let p = PatternParameters {
            grid_size: 0,
            ..base.clone()
        };
        assert!(matches!(
            p.validate(),
            Err(ValidationError::OutOfRange {
                name: "grid_size",
                ..
            })
        ));

        let p = PatternParameters {
            grid_size: 4_000_000_000,
            ..base
        };
        assert!(matches!(
            p.validate(),
            Err(ValidationError::OutOfRange {
                name: "grid_size",
                ..
            })
        ));
    }

    #[test]
    fn rejects_non_finite_floats() {
        let p = PatternParameters {
            scale: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            p.validate(),
            Err(ValidationError::NotFinite { name: "scale", .. })
        ));
    }

    #[test]
    fn error_message_names_the_field() {
        let p = PatternParameters {
            scale: 9.0,
            ..Default::default()
        };
        let msg = p.validate().unwrap_err().to_string();
        assert!(msg.contains("scale"), "{msg}");
        assert!(msg.contains('9'), "{msg}");
    }

    #[test]
    fn clamping_yields_valid_parameters() {
        let p = PatternParameters {
            complexity: 0,
            segments: 25,
            scale: f64::INFINITY,
            zoom: 0.1,
            rotation_degrees: -90.0,
            colors: vec![Rgb::WHITE],
            seed: 1,
            grid_size: 0,
        }
        .clamped();

        assert!(p.validate().is_ok());
        assert_eq!(p.complexity, 1);
        assert_eq!(p.segments, 24);
        assert_eq!(p.scale, 0.1);
        assert_eq!(p.zoom, 0.5);
        assert_eq!(p.rotation_degrees, 270.0);
        assert_eq!(p.colors, vec![Rgb::WHITE, Rgb::WHITE]);
        assert_eq!(p.grid_size, 1);
    }

    #[test]
    fn clamping_caps_huge_grids() {
        let p = PatternParameters {
            grid_size: u32::MAX,
            ..Default::default()
        }
        .clamped();
        assert_eq!(p.grid_size, *GRID_SIZE_RANGE.end());
        assert!(p.validate().is_ok());
    }

    #[test]
    fn clamping_rounds_odd_segments_down() {
        let p = PatternParameters {
            segments: 9,
            ..Default::default()
        }
        .clamped();
        assert_eq!(p.segments, 8);
    }

    #[test]
    fn resolution_presets() {
        assert_eq!(Resolution::from_name("LOW").map(|r| r.grid_size()), Some(500));
        assert_eq!(Resolution::Medium.grid_size(), 800);
        assert_eq!(Resolution::High.grid_size(), 1200);
        assert_eq!(Resolution::from_name("ultra"), None);
    }
}
