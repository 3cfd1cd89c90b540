//! The normalized intensity grid produced by synthesis.

use sha2::{Digest, Sha256};

/// A square grid of intensities in [0, 1].
///
/// Stored row major. Row 0 lies at `y = -scale` and column 0 at
/// `x = -scale`, so the first row is the bottom of the picture.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarField {
    size: u32,
    values: Vec<f64>,
    /// Cells outside the sampled disk.
    masked: Vec<bool>,
    degenerate: bool,
}

impl ScalarField {
    pub(crate) fn new(size: u32, values: Vec<f64>, masked: Vec<bool>, degenerate: bool) -> Self {
        debug_assert_eq!(values.len(), (size as usize).pow(2));
        debug_assert_eq!(masked.len(), values.len());
        Self {
            size,
            values,
            masked,
            degenerate,
        }
    }

    /// An unmasked field with every cell set to `value` (clamped to [0, 1]).
    pub fn uniform(size: u32, value: f64) -> Self {
        let value = if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, 1.0)
        };
        let cells = (size as usize).pow(2);
        Self::new(size, vec![value; cells], vec![false; cells], false)
    }

    /// Side length of the grid.
    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    fn index(&self, col: u32, row: u32) -> usize {
        assert!(
            col < self.size && row < self.size,
            "cell ({col}, {row}) outside {0}x{0} field",
            self.size
        );
        row as usize * self.size as usize + col as usize
    }

    /// Intensity at `(col, row)`. Panics when out of bounds.
    pub fn get(&self, col: u32, row: u32) -> f64 {
        self.values[self.index(col, row)]
    }

    /// Whether `(col, row)` lies outside the sampled disk.
    pub fn is_masked(&self, col: u32, row: u32) -> bool {
        self.masked[self.index(col, row)]
    }

    pub fn masked_count(&self) -> usize {
        self.masked.iter().filter(|m| **m).count()
    }

    /// True when the accumulated field was flat and normalization
    /// produced all zeros.
    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }

    /// Iterate over rows, bottom first.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks(self.size.max(1) as usize)
    }

    /// SHA-256 of the field contents, hex encoded.
    ///
    /// Identical parameters always produce the same fingerprint.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.size.to_le_bytes());
        for (value, masked) in self.values.iter().zip(&self.masked) {
            hasher.update(value.to_bits().to_le_bytes());
            hasher.update([*masked as u8]);
        }
        hasher
            .finalize()
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect()
    }
}
