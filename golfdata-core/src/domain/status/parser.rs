// golfdata-core/src/domain/status/parser.rs
//
// Pattern-based extraction of the banestatus table.
// Rows and cells are located with non-greedy spans; each kept cell is then
// run through an HTML5 fragment parser, which drops nested markup and decodes
// character references in one pass. Well-formedness is not checked.

use std::sync::LazyLock;

use regex::Regex;
use scraper::Html;
use tracing::trace;

use super::StatusRecord;

/// Name, status, last-updated.
const REQUIRED_CELLS: usize = 3;

#[allow(clippy::expect_used)]
static ROW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<tr\b[^>]*>(.*?)</tr\s*>").expect("row pattern"));

#[allow(clippy::expect_used)]
static CELL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<td\b[^>]*>(.*?)</td\s*>").expect("cell pattern"));

/// Lazily yields one record per qualifying `<tr>`, in document order.
///
/// A row qualifies when it has at least three `<td>` cells and its name and
/// status are non-empty once cleaned. Everything else is skipped silently.
pub fn parse_rows(html: &str) -> impl Iterator<Item = StatusRecord> + '_ {
    ROW.captures_iter(html)
        .filter_map(|caps| caps.get(1))
        .filter_map(|inner| parse_row(inner.as_str()))
}

fn parse_row(row: &str) -> Option<StatusRecord> {
    let cells: Vec<&str> = CELL
        .captures_iter(row)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .take(REQUIRED_CELLS)
        .collect();

    let [name, status, updated] = cells.as_slice() else {
        trace!(cells = cells.len(), "skipping row with too few cells");
        return None;
    };

    let name = clean_cell(name);
    let status = clean_cell(status);
    if name.is_empty() || status.is_empty() {
        trace!(%name, %status, "skipping row with empty name or status");
        return None;
    }

    Some(StatusRecord {
        name,
        status,
        updated: clean_cell(updated),
    })
}

/// Visible text of a cell: tags removed, entities decoded, whitespace trimmed.
pub fn clean_cell(fragment: &str) -> String {
    let doc = Html::parse_fragment(fragment);
    let text: String = doc.root_element().text().collect();
    text.trim().to_string()
}
