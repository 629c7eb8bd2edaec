//! Read comma- or tab-separated exports into header-keyed rows.
//!
//! This is deliberately a loose reader, not a CSV implementation: a `"` toggles
//! quoting on and off and there is no escape-by-doubling.

use crate::error::{Error, Result};
use std::io::Read;
use std::path::Path;

/// One data line, as `(header, value)` pairs in column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub fields: Vec<(String, String)>,
}

impl Row {
    pub fn new(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }
}

/// Read the whole input from a file, or from standard input when `path` is `None`.
///
/// Bytes that are not valid UTF-8 are replaced rather than failing the run, so a
/// Latin-1 name only garbles that one cell.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    let bytes = match path {
        Some(path) => std::fs::read(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?,
        None => {
            let mut bytes = Vec::new();
            std::io::stdin()
                .read_to_end(&mut bytes)
                .map_err(|source| Error::Io {
                    path: "<stdin>".into(),
                    source,
                })?;
            bytes
        }
    };
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Parse delimited text. The first non-blank line is the header; the separator is
/// a tab if the header contains one, otherwise a comma.
pub fn parse_table(text: &str) -> Vec<Row> {
    // Spreadsheet "CSV UTF-8" exports start with a byte-order mark.
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text
        .split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .filter(|l| !l.trim().is_empty());

    let Some(header) = lines.next() else {
        return Vec::new();
    };
    let sep = if header.contains('\t') { '\t' } else { ',' };
    let columns = split_line(header, sep);

    lines
        .map(|line| {
            let mut cells = split_line(line, sep).into_iter();
            let fields = columns
                .iter()
                .map(|col| (col.clone(), cells.next().unwrap_or_default()))
                .collect();
            Row::new(fields)
        })
        .collect()
}

fn split_line(line: &str, sep: char) -> Vec<String> {
    let mut out = Vec::new();
    let mut cur = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        if ch == '"' {
            in_quotes = !in_quotes;
        } else if in_quotes || ch != sep {
            cur.push(ch);
        } else {
            out.push(cur.trim().to_string());
            cur.clear();
        }
    }
    out.push(cur.trim().to_string());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(row: &Row) -> Vec<&str> {
        row.fields.iter().map(|(_, v)| v.as_str()).collect()
    }

    #[test]
    fn test_parse_csv() {
        let rows = parse_table("Name,Title\nAda Lovelace,Engineer\r\nGrace Hopper,Admiral\n");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].fields[0], ("Name".to_string(), "Ada Lovelace".to_string()));
        assert_eq!(values(&rows[1]), vec!["Grace Hopper", "Admiral"]);
    }

    #[test]
    fn test_tab_separated_header() {
        let rows = parse_table("Name\tLocation\nAda\tLondon, UK\n");
        assert_eq!(values(&rows[0]), vec!["Ada", "London, UK"]);
    }

    #[test]
    fn test_quoted_separator() {
        let rows = parse_table("Name,Location\n\"Hopper, Grace\", \"Arlington, VA\" \n");
        assert_eq!(values(&rows[0]), vec!["Hopper, Grace", "Arlington, VA"]);
    }

    #[test]
    fn test_doubled_quote_is_not_an_escape() {
        let rows = parse_table("Title\n\"Engineer \"\"Platform\"\"\"\n");
        assert_eq!(values(&rows[0]), vec!["Engineer Platform"]);
    }

    #[test]
    fn test_missing_and_extra_cells() {
        let rows = parse_table("A,B,C\n1\n1,2,3,4\n");
        assert_eq!(values(&rows[0]), vec!["1", "", ""]);
        assert_eq!(values(&rows[1]), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_blank_lines_and_header_only() {
        assert!(parse_table("").is_empty());
        assert!(parse_table("Name,Title\n\n   \n").is_empty());
        assert_eq!(parse_table("\n\nName\n\nAda\n").len(), 1);
    }

    #[test]
    fn test_byte_order_mark_is_stripped() {
        let rows = parse_table("\u{feff}Name,Title\nAda,Engineer\n");
        assert_eq!(rows[0].fields[0].0, "Name");
        assert_eq!(values(&rows[0]), vec!["Ada", "Engineer"]);
    }

    #[test]
    fn test_read_invalid_utf8_is_lossy() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.csv");
        std::fs::write(&path, b"Name,Title\nJos\xe9 Garc\xeda,Engineer\n").unwrap();

        let text = read_input(Some(&path)).unwrap();
        let rows = parse_table(&text);
        assert_eq!(rows.len(), 1);
        assert_eq!(values(&rows[0]), vec!["Jos\u{fffd} Garc\u{fffd}a", "Engineer"]);
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_input(Some(Path::new("/definitely/not/here.csv"))).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.csv"));
    }
}
