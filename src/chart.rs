//! Text bar charts for sort snapshots.
//!
//! Stateless consumer of [`HeapSorter`](crate::HeapSorter) state: feed it any
//! snapshot from the step log (or the final working array) and it renders one
//! horizontal bar per element, scaled to `width` characters.

/// Render `values` as a horizontal bar chart, one `index | bar value` row per
/// element. Bars are scaled so the largest value spans `width` characters;
/// non-positive values get an empty bar. Returns an empty string for an empty
/// snapshot.
pub fn render<T: Copy + Into<f64>>(values: &[T], width: usize) -> String {
    let floats: Vec<f64> = values.iter().map(|&v| v.into()).collect();
    let max = floats.iter().cloned().fold(0.0_f64, f64::max);

    let mut out = String::new();
    for (index, value) in floats.iter().enumerate() {
        let len = if max > 0.0 && *value > 0.0 {
            ((value / max) * width as f64).round() as usize
        } else {
            0
        };
        out.push_str(&format!("{index:>4} | {:<width$} {value}\n", "#".repeat(len)));
    }
    out
}
