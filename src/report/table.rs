use super::*;

/// Side-by-side summaries of several series, one column each.
#[derive(Debug, Clone, Default)]
pub struct Table {
    title: String,
    columns: Vec<(String, Option<Summary>)>,
}

impl Table {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            columns: Vec::new(),
        }
    }
    /// Appends a column; an empty series shows as dashes.
    pub fn column(mut self, label: &str, values: &[f64]) -> Self {
        self.columns.push((label.to_string(), Summary::of(values)));
        self
    }
    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .map(|(label, _)| label.chars().count().max(8))
            .collect()
    }
    fn rule(&self, l: &str, m: &str, r: &str) -> String {
        let cells = self
            .widths()
            .iter()
            .map(|w| "─".repeat(w + 2))
            .collect::<Vec<String>>();
        format!("{}{}{}{}{}", l, "─".repeat(8), m, cells.join(m), r)
    }
}

#[rustfmt::skip]
impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let widths = self.widths();
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", self.rule("┌", "┬", "┐"))?;
        write!(f, "│{:<8}", "")?;
        for ((label, _), w) in self.columns.iter().zip(&widths) {
            write!(f, "│ {:>w$} ", label, w = w)?;
        }
        writeln!(f, "│")?;
        writeln!(f, "{}", self.rule("├", "┼", "┤"))?;
        for (row, name) in ["Min", "Max", "Mean", "Median"].iter().enumerate() {
            write!(f, "│ {:<7}", name)?;
            for ((_, summary), w) in self.columns.iter().zip(&widths) {
                match summary {
                    Some(s) => write!(f, "│ {:>w$.2} ", s.rows()[row].1, w = w)?,
                    None    => write!(f, "│ {:>w$} ", "-", w = w)?,
                }
            }
            writeln!(f, "│")?;
        }
        writeln!(f, "{}", self.rule("└", "┴", "┘"))?;
        Ok(())
    }
}
