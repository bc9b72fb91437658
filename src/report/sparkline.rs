/// One-line text chart of a series, one glyph per value.
///
/// Glyph height scales linearly between the series minimum and maximum;
/// missing values render as blanks.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sparkline(Vec<Option<f64>>);

impl Sparkline {
    const GLYPHS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
    fn glyph(v: f64, lo: f64, hi: f64) -> char {
        match hi > lo {
            false => Self::GLYPHS[Self::GLYPHS.len() / 2],
            true => {
                let scale = (Self::GLYPHS.len() - 1) as f64;
                Self::GLYPHS[((v - lo) / (hi - lo) * scale).round() as usize]
            }
        }
    }
}

impl From<Vec<Option<f64>>> for Sparkline {
    fn from(values: Vec<Option<f64>>) -> Self {
        Self(values)
    }
}
impl From<&[f64]> for Sparkline {
    fn from(values: &[f64]) -> Self {
        Self(values.iter().copied().map(Some).collect())
    }
}

impl std::fmt::Display for Sparkline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let present = self.0.iter().flatten().copied();
        let lo = present.clone().fold(f64::INFINITY, f64::min);
        let hi = present.fold(f64::NEG_INFINITY, f64::max);
        let line = self
            .0
            .iter()
            .map(|v| v.map_or(' ', |v| Self::glyph(v, lo, hi)))
            .collect::<String>();
        write!(f, "{}", line)
    }
}
