//! Terminal renderer

use super::snapshot::RenderSnapshot;

fn glyph(asset: &str) -> char {
    match asset {
        "enemy" => 'V',
        "breach" => '!',
        _ => '.',
    }
}

/// Draw a snapshot as a bordered character grid followed by the text panels
pub fn render_text(snapshot: &RenderSnapshot) -> String {
    let mut out = String::new();
    let border = format!("+{}+\n", "-".repeat(snapshot.cols));

    out.push_str(&border);
    for row in snapshot.cells.chunks(snapshot.cols.max(1)) {
        out.push('|');
        out.extend(row.iter().map(|asset| glyph(asset)));
        out.push_str("|\n");
    }
    out.push_str(&border);

    if let Some(status) = &snapshot.status {
        out.push_str(status);
        out.push('\n');
    }
    out.push_str(&snapshot.instruction);
    out.push('\n');
    out
}
