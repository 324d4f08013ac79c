use slope_core::ScalarField;

/// Field values sampled over a square grid.
///
/// The grid uses the same coordinates on both axes. Row `i` holds the samples
/// at `y = ys()[i]` and column `j` holds the samples at `x = xs()[j]`, which is
/// the layout surface plots expect.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    xs: Vec<f64>,
    ys: Vec<f64>,
    rows: Vec<Vec<f64>>,
}

impl Surface {
    /// Coordinate range used when no other is given.
    pub const DEFAULT_LIMITS: [f64; 2] = [-10.0, 10.0];

    /// Samples per axis used when no other is given.
    pub const DEFAULT_RESOLUTION: usize = 30;

    /// Samples `field` on `resolution` evenly spaced coordinates per axis.
    ///
    /// Coordinates run from `limits[0]` to `limits[1]` inclusive. A resolution
    /// of one samples only `limits[0]`; zero produces an empty surface.
    #[must_use]
    pub fn sample(field: &impl ScalarField, limits: [f64; 2], resolution: usize) -> Self {
        let xs = linspace(limits, resolution);
        let ys = xs.clone();

        let rows = ys
            .iter()
            .map(|&y| xs.iter().map(|&x| field.value(x, y)).collect())
            .collect();

        Self { xs, ys, rows }
    }

    /// Samples `field` with [`Self::DEFAULT_LIMITS`] and [`Self::DEFAULT_RESOLUTION`].
    #[must_use]
    pub fn sample_default(field: &impl ScalarField) -> Self {
        Self::sample(field, Self::DEFAULT_LIMITS, Self::DEFAULT_RESOLUTION)
    }

    /// Returns the x coordinate of each column.
    #[must_use]
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// Returns the y coordinate of each row.
    #[must_use]
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Returns the sampled values, one row per y coordinate.
    #[must_use]
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Returns the value at `(xs()[col], ys()[row])`, if in range.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.rows.get(row)?.get(col).copied()
    }

    /// Returns the smallest and largest sampled values.
    ///
    /// Non-finite samples are skipped. Returns `None` if nothing finite
    /// was sampled.
    #[must_use]
    pub fn value_range(&self) -> Option<[f64; 2]> {
        self.rows
            .iter()
            .flatten()
            .copied()
            .filter(|z| z.is_finite())
            .fold(None, |range, z| match range {
                None => Some([z, z]),
                Some([lo, hi]) => Some([lo.min(z), hi.max(z)]),
            })
    }
}

/// Evenly spaced values over `[start, end]`, with `end` hit exactly.
fn linspace([start, end]: [f64; 2], n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            #[allow(clippy::cast_precision_loss)]
            let step = (end - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n)
                .map(|i| {
                    #[allow(clippy::cast_precision_loss)]
                    let i = i as f64;
                    start + i * step
                })
                .collect();
            values[n - 1] = end;
            values
        }
    }
}
