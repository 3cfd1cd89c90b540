//! Summary numbers shown next to a generated pattern.

use crate::params::PatternParameters;
use serde::Serialize;
use std::collections::HashSet;

const PATTERN_TYPES: [&str; 5] = [
    "Simple Star",
    "Crystal Flower",
    "Cosmic Spiral",
    "Kaleidoscope Nova",
    "Fractal Dimension",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatternStats {
    /// `complexity * segments / 5`, out of 100 at the largest settings.
    pub complexity_score: f64,
    pub pattern_type: &'static str,
    /// Distinct gradient colors.
    pub color_count: usize,
}

impl PatternStats {
    pub fn from_params(params: &PatternParameters) -> Self {
        let product = params.complexity as u64 * params.segments as u64;
        let level = (product / 20).min(PATTERN_TYPES.len() as u64 - 1) as usize;
        let distinct: HashSet<_> = params.colors.iter().collect();

        Self {
            complexity_score: product as f64 / 5.0,
            pattern_type: PATTERN_TYPES[level],
            color_count: distinct.len(),
        }
    }
}

/// What gets written next to an image when parameters are saved.
#[derive(Debug, Serialize)]
pub struct PatternReport<'a> {
    pub params: &'a PatternParameters,
    pub stats: PatternStats,
    pub fingerprint: String,
    pub degenerate: bool,
}
