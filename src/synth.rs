//! Pattern synthesis.
//!
//! The plane `[-scale, scale]²` is sampled on a square grid and converted
//! to polar form. A stack of angular harmonics is summed over it, the sum
//! is normalized to [0, 1] and everything outside the disk of radius
//! `scale` is zeroed, leaving the circular kaleidoscope.

use crate::error::Result;
use crate::field::ScalarField;
use crate::params::PatternParameters;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;
use std::time::Instant;
use tracing::{debug, warn};

/// One sinusoidal term of the pattern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Harmonic {
    pub frequency: f64,
    pub amplitude: f64,
    /// Radial phase multiplier in [0, 2π).
    pub phase: f64,
}

/// Draw `complexity` harmonics. Phases are consumed from `rng` in order.
pub fn harmonics(complexity: u32, rng: &mut impl Rng) -> Vec<Harmonic> {
    (0..complexity)
        .map(|i| {
            let n = (i + 1) as f64;
            Harmonic {
                frequency: n,
                amplitude: 1.0 / n,
                phase: rng.gen_range(0.0..TAU),
            }
        })
        .collect()
}

/// Polar coordinates of every grid sample.
#[derive(Debug, Clone)]
pub struct PolarGrid {
    size: u32,
    /// Radius, already multiplied by zoom.
    pub radius: Vec<f64>,
    /// Angle, already offset by the rotation.
    pub theta: Vec<f64>,
}

impl PolarGrid {
    pub fn new(size: u32, scale: f64, zoom: f64, rotation: f64) -> Self {
        let axis = linspace(-scale, scale, size as usize);
        let cells = axis.len() * axis.len();
        let mut radius = Vec::with_capacity(cells);
        let mut theta = Vec::with_capacity(cells);

        for y in &axis {
            for x in &axis {
                radius.push(x.hypot(*y) * zoom);
                theta.push(y.atan2(*x) + rotation);
            }
        }

        Self {
            size,
            radius,
            theta,
        }
    }

    pub fn for_params(params: &PatternParameters) -> Self {
        Self::new(
            params.grid_size,
            params.scale,
            params.zoom,
            params.rotation_radians(),
        )
    }

    pub fn size(&self) -> u32 {
        self.size
    }
}

/// `n` evenly spaced points from `start` to `end`, both included.
fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut points: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            points[n - 1] = end;
            points
        }
    }
}

/// Sum the harmonics over the grid, before normalization.
pub fn accumulate(grid: &PolarGrid, harmonics: &[Harmonic], segments: u32) -> Vec<f64> {
    let segments = segments as f64;
    let mut field = vec![0.0; grid.radius.len()];

    for h in harmonics {
        let angular = h.frequency * segments;
        for ((v, r), theta) in field.iter_mut().zip(&grid.radius).zip(&grid.theta) {
            *v += h.amplitude * (angular * theta + h.phase * r).sin();
        }
    }

    field
}

/// Rescale to [0, 1] in place using the observed range.
///
/// Returns `true` if the field was flat, in which case it is zeroed.
fn normalize(values: &mut [f64]) -> bool {
    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(*v), hi.max(*v))
        });

    if values.is_empty() || max == min {
        values.iter_mut().for_each(|v| *v = 0.0);
        return true;
    }

    let span = max - min;
    for v in values.iter_mut() {
        *v = ((*v - min) / span).clamp(0.0, 1.0);
    }
    false
}

/// Synthesize the pattern for `params`, seeding the generator from
/// `params.seed`.
pub fn synthesize(params: &PatternParameters) -> Result<ScalarField> {
    let mut rng = StdRng::seed_from_u64(params.seed as u64);
    synthesize_with_rng(params, &mut rng)
}

/// Synthesize using a caller-supplied generator.
///
/// All randomness is drawn from `rng`, so the result depends only on
/// `params` and the generator's state.
pub fn synthesize_with_rng(params: &PatternParameters, rng: &mut impl Rng) -> Result<ScalarField> {
    params.validate()?;
    let started = Instant::now();

    let grid = PolarGrid::for_params(params);
    let harmonics = harmonics(params.complexity, rng);
    let mut values = accumulate(&grid, &harmonics, params.segments);

    let degenerate = normalize(&mut values);
    if degenerate {
        warn!(
            seed = params.seed,
            grid_size = params.grid_size,
            "accumulated field is flat; using an all-zero field"
        );
    }

    let masked: Vec<bool> = grid.radius.iter().map(|r| *r >= params.scale).collect();
    for (v, m) in values.iter_mut().zip(&masked) {
        if *m {
            *v = 0.0;
        }
    }

    debug!(
        seed = params.seed,
        complexity = params.complexity,
        segments = params.segments,
        grid_size = params.grid_size,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "synthesized field"
    );

    Ok(ScalarField::new(params.grid_size, values, masked, degenerate))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_includes_endpoints() {
        assert_eq!(linspace(-1.0, 1.0, 5), vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
        assert_eq!(linspace(-2.0, 2.0, 1), vec![-2.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn harmonics_decay() {
        let mut rng = StdRng::seed_from_u64(3);
        let hs = harmonics(4, &mut rng);
        assert_eq!(hs.len(), 4);
        for (i, h) in hs.iter().enumerate() {
            assert_eq!(h.frequency, (i + 1) as f64);
            assert_eq!(h.amplitude, 1.0 / (i + 1) as f64);
            assert!((0.0..TAU).contains(&h.phase));
        }
    }

    #[test]
    fn normalize_spans_unit_interval() {
        let mut v = vec![-2.0, 0.0, 2.0];
        assert!(!normalize(&mut v));
        assert_eq!(v, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn normalize_flat_field_is_zero() {
        let mut v = vec![0.3; 10];
        assert!(normalize(&mut v));
        assert!(v.iter().all(|x| *x == 0.0));
    }

    #[test]
    fn polar_grid_is_centered() {
        let grid = PolarGrid::new(3, 1.0, 2.0, 0.0);
        assert_eq!(grid.size(), 3);
        // middle sample sits on the origin
        assert_eq!(grid.radius[4], 0.0);
        // corner (1, 1) with zoom 2
        assert!((grid.radius[8] - 2.0 * 2f64.sqrt()).abs() < 1e-12);
        // (x = 1, y = 0) points along +x
        assert_eq!(grid.theta[5], 0.0);
    }

    #[test]
    fn rotation_offsets_theta() {
        let plain = PolarGrid::new(4, 1.0, 1.0, 0.0);
        let turned = PolarGrid::new(4, 1.0, 1.0, 0.5);
        for (a, b) in plain.theta.iter().zip(&turned.theta) {
            assert!((b - a - 0.5).abs() < 1e-12);
        }
    }
}
