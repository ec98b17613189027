//! Empirical cumulative distribution functions over integer samples.

/// Empirical CDF of a sample set: `F(x)` is the fraction of samples `<= x`.
///
/// ```rust
/// use tracking_gantt_core::Ecdf;
///
/// let ecdf = Ecdf::new(&[12, 10, 11]);
/// assert_eq!(ecdf.eval(9), 0.0);
/// assert_eq!(ecdf.eval(10), 1.0 / 3.0);
/// assert_eq!(ecdf.eval(12), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ecdf {
    sorted: Vec<i64>,
}

impl Ecdf {
    /// Build from unsorted samples.
    pub fn new(samples: &[i64]) -> Self {
        let mut sorted = samples.to_vec();
        sorted.sort_unstable();
        Self { sorted }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    /// Whether there are no samples.
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// Smallest sample.
    pub fn min(&self) -> Option<i64> {
        self.sorted.first().copied()
    }

    /// Largest sample.
    pub fn max(&self) -> Option<i64> {
        self.sorted.last().copied()
    }

    /// Fraction of samples `<= x`; 0 for an empty sample set.
    pub fn eval(&self, x: i64) -> f64 {
        if self.sorted.is_empty() {
            return 0.0;
        }
        let at_or_below = self.sorted.partition_point(|&s| s <= x);
        at_or_below as f64 / self.sorted.len() as f64
    }

    /// Smallest sample whose ECDF value reaches `p` (clamped to `[0, 1]`).
    pub fn quantile(&self, p: f64) -> Option<i64> {
        let n = self.sorted.len();
        if n == 0 {
            return None;
        }
        let p = p.clamp(0.0, 1.0);
        let rank = (p * n as f64).ceil() as usize;
        Some(self.sorted[rank.clamp(1, n) - 1])
    }
}
