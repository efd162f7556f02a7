//! Minimal CSV/TSV writing, quote and CRLF tolerant.

use std::io::{self, Write};

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single separated row to any writer, quoting fields as needed.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first {
            write!(w, "{sep}")?;
        } else {
            first = false;
        }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{escaped}\"")?;
        } else {
            write!(w, "{cell}")?;
        }
    }
    writeln!(w)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_to_string(row: &[&str], sep: char) -> String {
        let mut buf = Vec::new();
        let owned: Vec<String> = row.iter().map(|s| s.to_string()).collect();
        write_row(&mut buf, &owned, sep).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn plain_fields_are_not_quoted() {
        assert_eq!(row_to_string(&["水", "water", "42"], ','), "水,water,42\n");
    }

    #[test]
    fn separators_quotes_and_newlines_force_quoting() {
        assert_eq!(
            row_to_string(&["a,b", "c\"d", "e\nf"], ','),
            "\"a,b\",\"c\"\"d\",\"e\nf\"\n"
        );
        // Commas are harmless when the separator is a tab.
        assert_eq!(row_to_string(&["a,b"], '\t'), "a,b\n");
    }
}
