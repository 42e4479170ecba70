//! Tolerant decode of delimited spreadsheet text into loosely-typed
//! rows. Exports with mismatched column counts or stray quoting come
//! out of real academy spreadsheets all the time, so this layer pads
//! and trims instead of erroring; validation happens in normalization.

/// One cell as found in the source. Spreadsheet decoders hand over
/// numeric cells (dates, counts) as numbers; CSV text is always text.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Text(String),
    Number(f64),
}

impl RawValue {
    pub fn to_display(&self) -> String {
        match self {
            RawValue::Text(text) => text.clone(),
            RawValue::Number(n) if n.fract() == 0.0 => format!("{}", *n as i64),
            RawValue::Number(n) => n.to_string(),
        }
    }
}

/// An ordered header -> value mapping for one source row. Header text
/// keeps its source casing and whitespace; lookups that need tolerance
/// go through [`crate::fields::resolve`].
#[derive(Debug, Clone, Default)]
pub struct RawRow {
    cells: Vec<(String, RawValue)>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, header: impl Into<String>, value: RawValue) {
        self.cells.push((header.into(), value));
    }

    /// Exact-key lookup.
    pub fn get(&self, header: &str) -> Option<&RawValue> {
        self.cells
            .iter()
            .find(|(key, _)| key == header)
            .map(|(_, value)| value)
    }

    /// Lookup comparing every key with surrounding whitespace removed.
    pub fn get_trimmed(&self, header: &str) -> Option<&RawValue> {
        self.cells
            .iter()
            .find(|(key, _)| key.trim() == header)
            .map(|(_, value)| value)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Parse a CSV blob: first line is the header row, commas separate
/// fields except inside double quotes, blank lines are skipped. Short
/// rows are padded with empty fields rather than rejected.
pub fn parse_csv(text: &str) -> Vec<RawRow> {
    let mut lines = text.lines();
    let headers: Vec<String> = match lines.next() {
        Some(line) => split_fields(line).into_iter().map(clean_field).collect(),
        None => return Vec::new(),
    };

    let mut rows = Vec::new();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let values = split_fields(line);
        let mut row = RawRow::new();
        for (index, header) in headers.iter().enumerate() {
            let value = values
                .get(index)
                .map(|field| clean_field(field.clone()))
                .unwrap_or_default();
            row.push(header.clone(), RawValue::Text(value));
        }
        if !row.is_empty() {
            rows.push(row);
        }
    }
    rows
}

/// Split on commas outside of quotes. Quote characters toggle quoted
/// mode and are not accumulated into the field.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    fields.push(current);
    fields
}

/// Trim surrounding whitespace, then strip one layer of surrounding
/// double quotes if both ends still carry one.
fn clean_field(field: String) -> String {
    let trimmed = field.trim();
    if trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"') {
        trimmed[1..trimmed.len() - 1].to_string()
    } else {
        trimmed.to_string()
    }
}
