//! Plain-text address lists
//!
//! Each line is `address[,amount[,...]]`. Only the first two fields are used;
//! both are trimmed. No line is skipped, so blank lines (including the one
//! after a trailing newline) become empty rows.

use super::ImportedRow;

/// Parse a plain-text address list into rows, one per line
pub fn parse_text(bytes: &[u8]) -> Vec<ImportedRow> {
    let text = String::from_utf8_lossy(bytes);
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);

    text.split('\n').map(parse_line).collect()
}

fn parse_line(line: &str) -> ImportedRow {
    let mut fields = line.split(',');
    let address = fields.next().unwrap_or_default().trim();
    let amount = fields.next().map(str::trim).unwrap_or_default();

    ImportedRow::new(address, amount)
}
