//! Drag Reflow Example - Text flowing around movable shapes
//!
//! This example demonstrates the full pipeline:
//! - A three-paragraph column with monospace metrics
//! - A rectangle dragged through the column, step by step
//! - A circle whose occluded chord differs from band to band
//! - Revision counters showing which paragraphs actually relayouted
//!
//! Run with: cargo run --example drag_reflow

use maskflow::{
    DocumentFlow, FlowOptions, LineSegment, Mask, MonospaceMetrics, SegmentWidth, TextStyle,
};

fn main() {
    println!("=== maskflow Drag Reflow Example ===\n");

    // 600 units wide, 10 units per character: 60 cells per line.
    let options = FlowOptions::new(600.0).with_style(TextStyle::new(10.0));
    let mut document = DocumentFlow::new(options, MonospaceMetrics::with_aspect(1.0));

    document.push_paragraph(
        "the mask engine routes every line of text around whatever shapes float over the column",
    );
    document.push_paragraph(
        "drag a shape and only the paragraphs it touches relayout the rest just translate",
    );
    document.push_paragraph(
        "a circle occludes a chord per band a rectangle a constant span both padded by clearance",
    );
    document.reflow();

    println!("Initial column ({} units tall):", document.total_height());
    print_column(&document);

    // A 100x33 rectangle parked below the text: nothing to route around yet.
    println!("\nAdding a 100x33 rectangle at (250, 400)...");
    let rect = document.add_mask(Mask::rect(100.0, 33.0, 250.0, 400.0));
    print_column(&document);

    // Drag it up through the column. Each step is one synchronous reflow.
    println!("\nDragging the rectangle up the column:");
    for y in [120.0, 60.0, 0.0] {
        println!("\n  -> rectangle at (250, {y})");
        document.move_mask(rect, 250.0, y);
        print_column(&document);
        println!("  total height: {}", document.total_height());
    }

    println!("\nDragging it away again:");
    document.move_mask(rect, 250.0, 400.0);
    print_column(&document);

    // A circle's span is a chord: wider near its center row, narrower near
    // the poles, plus the clearance on both sides.
    println!("\nAdding a radius-50 circle at (250, 46)...");
    document.add_mask(Mask::circle(50.0, 250.0, 46.0));
    print_column(&document);
    println!("  total height: {}", document.total_height());

    println!("\n=== Drag Reflow Example Complete ===");
}

// ===== Rendering helpers =====

/// Print every resolved paragraph as rows of 10-unit character cells.
/// Fillers render as shaded blocks, fixed-width spans pad with spaces.
fn print_column(document: &DocumentFlow<MonospaceMetrics>) {
    for (index, paragraph) in document.paragraphs().enumerate() {
        let Some(top_y) = paragraph.top_y() else {
            println!("  paragraph {index}: unresolved");
            continue;
        };
        println!(
            "  paragraph {index} @ y={top_y} (revision {})",
            paragraph.revision()
        );
        let lines = paragraph
            .segments()
            .iter()
            .map(|segment| segment.line)
            .max()
            .map_or(0, |last| last + 1);
        for line in 0..lines {
            let row: String = paragraph
                .segments()
                .iter()
                .filter(|segment| segment.line == line)
                .map(render_segment)
                .collect();
            println!("  |{row}|");
        }
    }
}

fn render_segment(segment: &LineSegment) -> String {
    match segment.width {
        SegmentWidth::Natural => segment.text.clone(),
        SegmentWidth::Fixed(width) => {
            let cells = (width / 10.0).round() as usize;
            if segment.is_filler() {
                "\u{2591}".repeat(cells)
            } else {
                let used = segment.text.chars().count();
                format!("{}{}", segment.text, " ".repeat(cells.saturating_sub(used)))
            }
        }
    }
}
