//! src/report.rs
use std::collections::HashMap;
use std::io::Write;

const BAR_WIDTH: u64 = 50;

/// Selects the top `k` entries ordered by count descending. Equal counts
/// fall back to lexicographic word order so the report is deterministic.
/// Fewer than `k` distinct words reports all of them.
pub fn top_words(counts: &HashMap<String, u64>, k: usize) -> Vec<(String, u64)> {
    let mut entries: Vec<(String, u64)> = counts
        .iter()
        .map(|(word, count)| (word.clone(), *count))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries.truncate(k);
    entries
}

/// Renders a horizontal bar chart: word labels on the left, bars scaled so
/// the highest count fills `BAR_WIDTH` characters. Writes nothing for an
/// empty report.
pub fn render_bar_chart<W: Write>(entries: &[(String, u64)], out: &mut W) -> std::io::Result<()> {
    let Some(max) = entries.iter().map(|(_, count)| *count).max() else {
        return Ok(());
    };
    let label_width = entries
        .iter()
        .map(|(word, _)| word.chars().count())
        .max()
        .unwrap_or(0);

    for (word, count) in entries {
        let bar = "#".repeat((count * BAR_WIDTH / max).max(1) as usize);
        writeln!(out, "{word:<label_width$}  {bar} {count}")?;
    }
    Ok(())
}
