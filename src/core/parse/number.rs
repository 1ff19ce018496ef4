//! Numeric normalizers for free-form export cells.
//!
//! Export files mix thousands separators, decimal commas, apostrophes and
//! non-breaking spaces. Two parsers exist on purpose:
//!
//! - `normalize_number` for quantity-like fields, where a single comma
//!   followed by exactly three digits is read as a thousands separator
//!   ("1,234" → 1234).
//! - `normalize_weight` for the weight column, where a comma is always the
//!   decimal separator ("2,304" kg → 2.304), since weights with a
//!   three-digit fractional part are common and must not be multiplied by
//!   a thousand.
//!
//! Both are total: anything unparseable yields None, and the public
//! `parse_*` wrappers substitute 0.0. A bad cell never rejects a row.

fn strip_separators(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    let lower = trimmed.to_lowercase();
    if lower == "nan" || lower == "none" {
        return None;
    }
    Some(
        trimmed
            .chars()
            .filter(|c| *c != '\u{00A0}' && *c != ' ' && *c != '\'')
            .collect(),
    )
}

/// Generic numeric parser for quantity-like fields.
pub fn normalize_number(s: &str) -> Option<f64> {
    let mut st = strip_separators(s)?;

    if st.contains(',') && st.contains('.') {
        // mixed format: dots are thousands, comma is decimal
        st = st.replace('.', "").replace(',', ".");
    } else if st.matches('.').count() > 1 {
        // several dots: all of them thousands separators
        st = st.replace('.', "");
    } else if st.contains(',') {
        let parts: Vec<&str> = st.split(',').collect();
        if parts.len() == 2 && parts[1].len() == 3 && parts[1].chars().all(|c| c.is_ascii_digit()) {
            // 1,234 → thousands separator
            st = format!("{}{}", parts[0], parts[1]);
        } else {
            st = st.replace(',', ".");
        }
    }

    st.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Weight parser (kilograms). A comma is always the decimal separator.
pub fn normalize_weight(s: &str) -> Option<f64> {
    let mut st = strip_separators(s)?;

    if st.contains(',') && st.contains('.') {
        st = st.replace('.', "");
    }
    st = st.replace(',', ".");

    st.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Total wrapper: unparseable quantity → 0.0.
pub fn parse_qty(s: &str) -> f64 {
    normalize_number(s).unwrap_or(0.0)
}

/// Total wrapper: unparseable weight → 0.0.
pub fn parse_weight_kg(s: &str) -> f64 {
    normalize_weight(s).unwrap_or(0.0)
}
