/// Min, max, mean and median of a payoff series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    min: f64,
    max: f64,
    mean: f64,
    median: f64,
}

impl Summary {
    /// `None` for an empty series. The median of an even-length series is
    /// the mean of its two middle values.
    pub fn of(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        let n = sorted.len();
        let median = match n % 2 {
            0 => (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0,
            _ => sorted[n / 2],
        };
        Some(Self {
            min: sorted[0],
            max: sorted[n - 1],
            mean: sorted.iter().sum::<f64>() / n as f64,
            median,
        })
    }
    pub fn min(&self) -> f64 {
        self.min
    }
    pub fn max(&self) -> f64 {
        self.max
    }
    pub fn mean(&self) -> f64 {
        self.mean
    }
    pub fn median(&self) -> f64 {
        self.median
    }
    /// Rows in display order.
    pub fn rows(&self) -> [(&'static str, f64); 4] {
        [
            ("Min", self.min),
            ("Max", self.max),
            ("Mean", self.mean),
            ("Median", self.median),
        ]
    }
}
