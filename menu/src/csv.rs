use std::collections::HashMap;

/// One parsed data line: column name to trimmed value.
///
/// Absent columns read as empty string, so downstream code never has to
/// distinguish "column missing" from "cell left blank".
#[derive(Debug, Clone, Default)]
pub struct Row {
    fields: HashMap<String, String>,
}

impl Row {
    pub fn get(&self, key: &str) -> &str {
        self.fields.get(key).map(String::as_str).unwrap_or("")
    }

    #[cfg(test)]
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            fields: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

/// Parse a CSV blob into rows.
///
/// The first line is the header; each later line is zipped against it
/// positionally. Short lines pad with empty strings, extra fields are
/// dropped. Empty input yields no rows. Nothing here ever fails: the source
/// is a hand-edited spreadsheet export, so garbled input degrades to sparse
/// fields rather than an error.
///
/// Quoting follows the usual CSV rules for commas (`"a, b"` is one field,
/// `""` inside quotes is a literal quote) but quoted fields may not span
/// lines, since the blob is split into lines first.
pub fn parse_rows(text: &str) -> Vec<Row> {
    let mut lines = text.trim().lines();

    let Some(header_line) = lines.next() else {
        return Vec::new();
    };
    let headers = split_line(header_line);

    lines
        .map(|line| {
            let cols = split_line(line);

            Row {
                fields: headers
                    .iter()
                    .enumerate()
                    .map(|(i, header)| {
                        (header.clone(), cols.get(i).cloned().unwrap_or_default())
                    })
                    .collect(),
            }
        })
        .collect()
}

fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                // escaped quote, stays literal
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);

    fields.into_iter().map(|f| f.trim().to_string()).collect()
}
