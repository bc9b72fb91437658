/// Trailing moving average over a series.
///
/// Yields one item per input value: `None` until a full window is
/// available, then the mean of the last `window` values. A zero window
/// never fills.
pub struct Rolling<'a> {
    values: &'a [f64],
    window: usize,
    index: usize,
}

impl<'a> From<(&'a [f64], usize)> for Rolling<'a> {
    fn from((values, window): (&'a [f64], usize)) -> Self {
        Self {
            values,
            window,
            index: 0,
        }
    }
}

impl Iterator for Rolling<'_> {
    type Item = Option<f64>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.values.len() {
            return None;
        }
        self.index += 1;
        match self.window {
            w if w == 0 || self.index < w => Some(None),
            w => {
                let tail = &self.values[self.index - w..self.index];
                Some(Some(tail.iter().sum::<f64>() / w as f64))
            }
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.values.len() - self.index;
        (n, Some(n))
    }
}
