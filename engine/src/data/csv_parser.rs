// Single-pass CSV tokenizer: comma delimited, double-quote quoting with
// doubled-quote escapes, LF / CRLF / bare CR line endings.
use tracing::debug;

pub type Row = Vec<String>;

const BOM: char = '\u{feff}';

/// Splits `text` into rows of cells.
///
/// Never fails: an unterminated quote simply runs to the end of input and the
/// pending field is flushed. Rows whose cells are all blank are dropped; short
/// rows are kept as they are.
pub fn parse(text: &str) -> Vec<Row> {
    let text = text.strip_prefix(BOM).unwrap_or(text);

    let mut rows: Vec<Row> = Vec::new();
    let mut row: Row = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            match ch {
                '"' if chars.peek() == Some(&'"') => {
                    field.push('"');
                    chars.next();
                }
                '"' => in_quotes = false,
                _ => field.push(ch),
            }
            continue;
        }

        match ch {
            '"' => in_quotes = true,
            ',' => row.push(std::mem::take(&mut field)),
            // CR never reaches field text; a bare CR ends the row like LF.
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' | '\r' => {
                row.push(std::mem::take(&mut field));
                push_row(&mut rows, std::mem::take(&mut row));
            }
            _ => field.push(ch),
        }
    }

    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        push_row(&mut rows, row);
    }

    debug!(rows = rows.len(), unterminated_quote = in_quotes, "Parsed CSV text");
    rows
}

fn push_row(rows: &mut Vec<Row>, row: Row) {
    if row.iter().any(|cell| !cell.trim().is_empty()) {
        rows.push(row);
    }
}
