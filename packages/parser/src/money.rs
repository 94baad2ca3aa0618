//! Currency token normalization.

/// Normalizes a currency token to a plain two-decimal amount.
///
/// Thousands separators and `$` are stripped, and a value wrapped in
/// parentheses is negative: `"$1,234.00"` becomes `"1234.00"` and
/// `"(12.50)"` becomes `"-12.50"`. Text that is still not a number after
/// stripping is returned as-is (minus the stripped characters) instead of
/// failing the row.
#[must_use]
pub fn normalize_currency(raw: &str) -> String {
    let mut s = raw.trim().replace(',', "");
    if let Some(rest) = s.strip_prefix('$') {
        s = rest.to_owned();
    }
    if s.starts_with('(') && s.ends_with(')') {
        s = format!("-{}", &s[1..s.len() - 1]);
    }
    // A minus sign may sit in front of the symbol: "-$5.00".
    let s = s.replace('$', "");

    format_two_decimals(&s).unwrap_or(s)
}

/// Renders a plain decimal number with exactly two fraction digits, or
/// `None` if `s` is not one.
fn format_two_decimals(s: &str) -> Option<String> {
    let (sign, unsigned) = match s.as_bytes().first() {
        Some(b'-') => ("-", &s[1..]),
        Some(b'+') => ("", &s[1..]),
        _ => ("", s),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    if !int_part.bytes().all(|b| b.is_ascii_digit())
        || !frac_part.bytes().all(|b| b.is_ascii_digit())
        || frac_part.len() > 2
    {
        return None;
    }

    let int_part = match int_part.trim_start_matches('0') {
        "" => "0",
        digits => digits,
    };

    Some(format!("{sign}{int_part}.{frac_part:0<2}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_symbol_and_separators() {
        assert_eq!(normalize_currency("$1,234.00"), "1234.00");
        assert_eq!(normalize_currency("$1,234,567.89"), "1234567.89");
    }

    #[test]
    fn parentheses_mean_negative() {
        assert_eq!(normalize_currency("(12.50)"), "-12.50");
        assert_eq!(normalize_currency("($12.50)"), "-12.50");
    }

    #[test]
    fn leading_minus_is_kept() {
        assert_eq!(normalize_currency("-$5.00"), "-5.00");
        assert_eq!(normalize_currency("-7"), "-7.00");
    }

    #[test]
    fn integers_gain_two_decimals() {
        assert_eq!(normalize_currency("0"), "0.00");
        assert_eq!(normalize_currency("$45"), "45.00");
        assert_eq!(normalize_currency("007.10"), "7.10");
    }

    #[test]
    fn non_numeric_text_passes_through() {
        assert_eq!(normalize_currency("(12.50"), "(12.50");
        assert_eq!(normalize_currency("(-3.00)"), "--3.00");
        assert_eq!(normalize_currency("N/A"), "N/A");
    }
}
