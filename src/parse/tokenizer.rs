//! Cell tokenizer for the data block of a CSV document.
//!
//! The tokenizer produces a flat, row-major list of cells. Row boundaries are
//! not kept; callers recover them from the column count.

/// Field delimiter.
pub const DELIMITER: u8 = b',';

/// Sequences left behind when a `"` was lost to lossy re-encoding: the
/// U+FFFD replacement character (UTF-8 bytes EF BF BD) and the same three
/// bytes read back as Latin-1.
pub const REPLACEMENT_SEQUENCES: [&str; 2] = ["\u{FFFD}", "\u{EF}\u{BF}\u{BD}"];

#[inline]
fn is_line_terminator(b: u8) -> bool {
    b == b'\n' || b == b'\r'
}

#[inline]
fn is_cell_terminator(b: u8) -> bool {
    b == DELIMITER || is_line_terminator(b)
}

#[inline]
fn is_quote(b: u8) -> bool {
    b == b'"' || b == b'\''
}

/// Tokenize a data block (the CSV text after the header line) into cells,
/// then repair replacement sequences.
pub fn tokenize(block: &str) -> Vec<String> {
    let mut cells = split_cells(block);
    repair_cells(&mut cells);
    cells
}

/// Tokenize a data block into cells without any post-processing.
///
/// A single trailing delimiter or line terminator is dropped first so it does
/// not produce an empty last cell. Malformed quoting is not an error: an
/// unterminated quoted cell runs to the end of the input.
pub fn split_cells(block: &str) -> Vec<String> {
    let block = trim_trailing_separator(block);
    let bytes = block.as_bytes();

    let estimated = bytecount::count(bytes, DELIMITER) + bytecount::count(bytes, b'\n') + 1;
    let mut cells = Vec::with_capacity(estimated);

    let mut pos = 0;
    while pos < bytes.len() {
        cells.push(parse_cell(block, &mut pos));

        // Step over the character that ended the cell, and a line terminator
        // right after it, so `\r\n` and `,\n` both end a row. Stray text after
        // a closing quote is skipped one whole character at a time.
        pos += block
            .get(pos..)
            .and_then(|rest| rest.chars().next())
            .map_or(1, char::len_utf8);
        if pos < bytes.len() && is_line_terminator(bytes[pos]) {
            pos += 1;
        }
    }

    cells
}

fn trim_trailing_separator(block: &str) -> &str {
    match block.as_bytes().last() {
        Some(&b) if is_cell_terminator(b) => &block[..block.len() - 1],
        _ => block,
    }
}

/// Parse one cell starting at `pos`, leaving `pos` on the byte after it.
fn parse_cell(block: &str, pos: &mut usize) -> String {
    match block.as_bytes().get(*pos) {
        Some(&q) if is_quote(q) => parse_quoted(block, pos, q),
        Some(_) => parse_unquoted(block, pos),
        None => String::new(),
    }
}

fn parse_unquoted(block: &str, pos: &mut usize) -> String {
    let bytes = block.as_bytes();
    let start = *pos;
    while *pos < bytes.len() && !is_cell_terminator(bytes[*pos]) {
        *pos += 1;
    }
    block[start..*pos].to_string()
}

/// Parse a cell opened by `quote`. Only the same quote character closes it;
/// a doubled quote is an escaped literal.
fn parse_quoted(block: &str, pos: &mut usize, quote: u8) -> String {
    let bytes = block.as_bytes();
    *pos += 1;

    let mut cell = String::new();
    let mut segment = *pos;
    while *pos < bytes.len() {
        if bytes[*pos] == quote {
            if bytes.get(*pos + 1) == Some(&quote) {
                cell.push_str(&block[segment..=*pos]);
                *pos += 2;
                segment = *pos;
                continue;
            }
            break;
        }
        *pos += 1;
    }
    cell.push_str(&block[segment..*pos]);

    // Past the closing quote.
    *pos += 1;
    cell
}

/// Replace every [`REPLACEMENT_SEQUENCES`] entry in each cell with `"`.
pub fn repair_cells(cells: &mut [String]) {
    for cell in cells.iter_mut() {
        repair_replacement_chars(cell);
    }
}

/// Replace every [`REPLACEMENT_SEQUENCES`] entry in `cell` with `"`.
pub fn repair_replacement_chars(cell: &mut String) {
    for seq in REPLACEMENT_SEQUENCES {
        if cell.contains(seq) {
            *cell = cell.replace(seq, "\"");
        }
    }
}
