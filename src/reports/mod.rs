use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;
use std::path::Path;
use stylescore::api::{BatchEntry, BatchOutcome};
use stylescore::config::ScoreWeights;
use stylescore::{StyleResult, StyleScore};

const SUBSCORE_LABELS: [&str; 6] = [
    "Color Harmony (C)",
    "Pattern Balance (P)",
    "Texture Mix (T)",
    "Highlight (H)",
    "Proportion (B)",
    "Repetition (R)",
];

fn grade_color(value: f64) -> Color {
    if value >= 0.8 {
        Color::Green
    } else if value < 0.5 {
        Color::Red
    } else {
        Color::Yellow
    }
}

pub fn print_score_table(outfit_id: &str, score: &StyleScore, weights: &ScoreWeights) {
    println!("\nOutfit: {}", outfit_id);
    println!("Style Score: {:.1}/100 ({})", score.style_score, score.version);

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Subscore").add_attribute(Attribute::Bold),
        Cell::new("Value").fg(Color::Cyan),
        Cell::new("Weight"),
        Cell::new("Points"),
    ]);

    for i in 1..=3 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    let values = score.subscores.as_array();
    for ((label, value), weight) in SUBSCORE_LABELS
        .iter()
        .zip(values)
        .zip(weights.as_array())
    {
        table.add_row(vec![
            Cell::new(label),
            Cell::new(format!("{:.3}", value)).fg(grade_color(value)),
            Cell::new(format!("{:.2}", weight)),
            Cell::new(format!("{:.1}", 100.0 * weight * value)),
        ]);
    }
    println!("{}", table);

    println!("Explanations:");
    for line in &score.explanations {
        println!("  - {}", line);
    }
}

pub fn print_batch_summary(entries: &[BatchEntry]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Outfit").add_attribute(Attribute::Bold),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("C"),
        Cell::new("P"),
        Cell::new("T"),
        Cell::new("H"),
        Cell::new("B"),
        Cell::new("R"),
        Cell::new("Extraction"),
    ]);

    for i in 1..=7 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for entry in entries {
        let mut row = vec![Cell::new(&entry.outfit_id).add_attribute(Attribute::Bold)];
        match &entry.outcome {
            BatchOutcome::Score(s) => {
                row.push(Cell::new(format!("{:.1}", s.style_score)).fg(Color::Cyan));
                for v in s.subscores.as_array() {
                    row.push(Cell::new(format!("{:.3}", v)).fg(grade_color(v)));
                }
            }
            BatchOutcome::Error(e) => {
                row.push(Cell::new("ERR").fg(Color::Red));
                row.push(Cell::new(&e.error).fg(Color::Red));
                row.extend((0..5).map(|_| Cell::new("")));
            }
        }
        row.push(Cell::new(&entry.extraction_version));
        table.add_row(row);
    }
    println!("\n{}", table);

    let scored: Vec<f64> = entries
        .iter()
        .filter_map(|e| e.score().map(|s| s.style_score))
        .collect();
    if !scored.is_empty() {
        let mean = scored.iter().sum::<f64>() / scored.len() as f64;
        println!(
            "Scored {}/{} outfits. Mean style score: {:.1}",
            scored.len(),
            entries.len(),
            mean
        );
    }
}

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    outfit_id: &'a str,
    extraction_version: &'a str,
    style_score: Option<f64>,
    c: Option<f64>,
    p: Option<f64>,
    t: Option<f64>,
    h: Option<f64>,
    b: Option<f64>,
    r: Option<f64>,
    error: Option<&'a str>,
}

pub fn write_batch_csv<P: AsRef<Path>>(entries: &[BatchEntry], path: P) -> StyleResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    for entry in entries {
        let sub = entry.score().map(|s| s.subscores.as_array());
        let pick = |i: usize| sub.map(|a| a[i]);
        wtr.serialize(CsvRow {
            outfit_id: &entry.outfit_id,
            extraction_version: &entry.extraction_version,
            style_score: entry.score().map(|s| s.style_score),
            c: pick(0),
            p: pick(1),
            t: pick(2),
            h: pick(3),
            b: pick(4),
            r: pick(5),
            error: entry.error().map(|e| e.error.as_str()),
        })?;
    }

    wtr.flush()?;
    Ok(())
}
