/// Equal-width histogram over the observed range of a series.
///
/// Bins are half-open except the last, which also holds the maximum. A
/// constant series is spread over `[v - 0.5, v + 0.5]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    lo: f64,
    hi: f64,
    counts: Vec<usize>,
}

impl Histogram {
    /// `None` for an empty series or zero bins.
    pub fn new(values: &[f64], bins: usize) -> Option<Self> {
        if values.is_empty() || bins == 0 {
            return None;
        }
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let (lo, hi) = match max > min {
            true => (min, max),
            false => (min - 0.5, max + 0.5),
        };
        let width = (hi - lo) / bins as f64;
        let mut counts = vec![0; bins];
        for v in values {
            let i = ((v - lo) / width).floor() as usize;
            counts[i.min(bins - 1)] += 1;
        }
        Some(Self { lo, hi, counts })
    }
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }
    /// Lower edge of every bin followed by the upper edge of the last.
    pub fn edges(&self) -> Vec<f64> {
        let width = (self.hi - self.lo) / self.counts.len() as f64;
        (0..=self.counts.len())
            .map(|i| self.lo + width * i as f64)
            .collect()
    }
}

impl std::fmt::Display for Histogram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const BAR: usize = 40;
        let peak = self.counts.iter().copied().max().unwrap_or(0).max(1);
        let edges = self.edges();
        for (i, count) in self.counts.iter().enumerate() {
            writeln!(
                f,
                "[{:>7.2}, {:>7.2}{} {:<width$} {}",
                edges[i],
                edges[i + 1],
                if i + 1 == self.counts.len() { "]" } else { ")" },
                "█".repeat(count * BAR / peak),
                count,
                width = BAR,
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_everything() {
        let values = (0..100).map(|i| (i % 17) as f64 - 4.0).collect::<Vec<_>>();
        let h = Histogram::new(&values, 10).unwrap();
        assert_eq!(h.counts().len(), 10);
        assert_eq!(h.counts().iter().sum::<usize>(), 100);
    }

    #[test]
    fn maximum_lands_in_last_bin() {
        let h = Histogram::new(&[0.0, 10.0], 10).unwrap();
        assert_eq!(h.counts()[0], 1);
        assert_eq!(h.counts()[9], 1);
        assert_eq!(h.edges().first(), Some(&0.0));
        assert_eq!(h.edges().last(), Some(&10.0));
    }

    #[test]
    fn constant_series() {
        let h = Histogram::new(&[3.0; 7], 10).unwrap();
        assert_eq!(h.edges()[0], 2.5);
        assert_eq!(h.counts()[5], 7);
    }

    #[test]
    fn degenerate() {
        assert_eq!(Histogram::new(&[], 10), None);
        assert_eq!(Histogram::new(&[1.0], 0), None);
    }

    #[test]
    fn renders_one_line_per_bin() {
        let h = Histogram::new(&[1.0, 2.0, 2.0, 3.0], 4).unwrap();
        assert_eq!(h.to_string().lines().count(), 4);
    }
}
