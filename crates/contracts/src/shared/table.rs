//! Static column schema shared by header rendering, row rendering and
//! draft-input rendering. Each line-item table declares one ordered
//! `ColumnDef` list; everything else is driven off it.

/// Rendering/coercion class of a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Fixed-point money value, stored as a canonical "0.00" string.
    Currency,
    /// Plain numeric value, stored as `f64`.
    Number,
    /// Free-form text.
    Text,
}

/// Definition of one table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    /// Technical field name.
    pub key: &'static str,
    /// Header caption.
    pub label: &'static str,
    /// Data kind; drives display formatting and input coercion.
    pub kind: ColumnKind,
}

/// A line-item row addressable through its static schema.
///
/// `field`/`set_field` are keyed by [`ColumnDef::key`]; unknown keys read as
/// an empty string and write as a no-op. Writes are permissive: numeric
/// fields coerce invalid input to 0, currency fields normalize raw
/// keystrokes into the canonical two-decimal string.
pub trait TableRow: Default + Clone {
    fn columns() -> &'static [ColumnDef];

    /// Raw (unformatted) value of a field, suitable for an edit input.
    fn field(&self, key: &str) -> String;

    /// Permissive field write, coerced per the column kind.
    fn set_field(&mut self, key: &str, raw: &str);

    /// All field values in schema order.
    fn cells(&self) -> Vec<String> {
        Self::columns().iter().map(|c| self.field(c.key)).collect()
    }
}

/// Permissive numeric parse: invalid or empty input becomes 0.
pub fn parse_number(raw: &str) -> f64 {
    let value = raw.trim().parse::<f64>().unwrap_or(0.0);
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Raw display of a numeric field: whole values print without a fraction.
pub fn number_to_raw(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_permissive() {
        assert_eq!(parse_number("2.5"), 2.5);
        assert_eq!(parse_number(" 7 "), 7.0);
        assert_eq!(parse_number("abc"), 0.0);
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("NaN"), 0.0);
    }

    #[test]
    fn test_number_to_raw() {
        assert_eq!(number_to_raw(2.0), "2");
        assert_eq!(number_to_raw(0.0), "0");
        assert_eq!(number_to_raw(2.5), "2.5");
        assert_eq!(number_to_raw(-3.0), "-3");
    }
}
