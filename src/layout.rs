// ABOUTME: Split-layout formatting for Slideas pages
// ABOUTME: Rewrites `Layout: Split` column groups into Reveal.js column containers

use crate::line::LineKind;

const CONTAINER_OPEN: &str = ":::: {.columns}";
const CONTAINER_CLOSE: &str = "::::";
const COLUMN_CLOSE: &str = ":::";

/// Number of lines after a split directive that belong to the split block:
/// everything up to the first note line outside a code block, or the rest of the page.
pub fn split_extent(lines: &[&str]) -> usize {
    let mut in_code = false;
    for (i, line) in lines.iter().enumerate() {
        match LineKind::classify(line) {
            LineKind::Fence => in_code = !in_code,
            LineKind::Note(_) if !in_code => return i,
            _ => {}
        }
    }
    lines.len()
}

/// Format the lines of a split block as evenly sized columns inside one container.
pub fn format_split(lines: &[&str]) -> String {
    let columns = split_columns(lines);
    let width = 100 / columns.len();

    let mut output = Vec::new();
    output.push(CONTAINER_OPEN.to_string());
    for column in columns {
        output.push(format!("::: {{.column width=\"{}%\"}}", width));
        output.extend(column.iter().map(|line| line.to_string()));
        output.push(COLUMN_CLOSE.to_string());
    }
    output.push(CONTAINER_CLOSE.to_string());

    format!("{}\n", output.join("\n"))
}

/// Partition lines at each column separator. Separators inside code blocks are content.
fn split_columns<'a>(lines: &[&'a str]) -> Vec<Vec<&'a str>> {
    let mut columns = vec![Vec::new()];
    let mut in_code = false;

    for &line in lines {
        match LineKind::classify(line) {
            LineKind::ColumnSeparator if !in_code => columns.push(Vec::new()),
            kind => {
                if kind == LineKind::Fence {
                    in_code = !in_code;
                }
                if let Some(column) = columns.last_mut() {
                    column.push(line);
                }
            }
        }
    }

    columns
}
