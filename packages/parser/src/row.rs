//! The canonical service-row shape and its parser.
//!
//! A reconstructed row reads
//! `01/23/2025 SOME SERVICE TEXT $123.45 $0.00 $0.00 B6 N3`: a date, a
//! free-text description, three currency amounts (provider billed, payer
//! paid, your responsibility), and a short list of message codes.

use std::sync::LazyLock;

use eob_claims_models::ServiceRow;
use regex::Regex;

use crate::money::normalize_currency;
use crate::normalize::collapse_whitespace;

/// A currency amount: optional parentheses, minus sign, and `$`, with
/// optional thousands separators and cents.
pub(crate) const CURRENCY: &str = r"\(?-?\$?(?:\d{1,3}(?:,\d{3})*|\d+)(?:\.\d{2})?\)?";

/// Any currency-shaped token, used as a cheap completeness pre-check.
static CURRENCY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(CURRENCY).expect("valid regex"));

/// A complete single-line service row.
static SERVICE_ROW_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^(?P<service_date>\d{{2}}/\d{{2}}/\d{{4}})\s+(?P<service>.*?)\s+(?P<provider_billed>{CURRENCY})\s+(?P<payer_paid>{CURRENCY})\s+(?P<your_responsibility>{CURRENCY})\s+(?P<message_codes>[A-Z0-9 ]{{1,40}})$"
    ))
    .expect("valid regex")
});

/// Checks whether `buffer` already holds a complete row.
///
/// The buffer must contain at least three currency-shaped tokens and,
/// once whitespace-collapsed, match the canonical row shape. Returns the
/// collapsed single-line row on success.
#[must_use]
pub fn finalize_row(buffer: &str) -> Option<String> {
    if CURRENCY_RE.find_iter(buffer).take(3).count() < 3 {
        return None;
    }

    let one_line = collapse_whitespace(buffer);
    SERVICE_ROW_RE.is_match(&one_line).then_some(one_line)
}

/// Parses a finalized row into its typed fields.
///
/// Returns `None` if `row` does not match the canonical shape.
#[must_use]
pub fn parse_service_row(row: &str) -> Option<ServiceRow> {
    let caps = SERVICE_ROW_RE.captures(row)?;
    let group = |name: &str| caps.name(name).map_or("", |m| m.as_str());

    Some(ServiceRow {
        service_date: group("service_date").to_owned(),
        services_provided: group("service").trim().to_owned(),
        provider_billed: normalize_currency(group("provider_billed")),
        payer_paid: normalize_currency(group("payer_paid")),
        your_responsibility: normalize_currency(group("your_responsibility")),
        message_codes: group("message_codes").trim().to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_complete_row() {
        let row = parse_service_row("01/23/2025 OFFICE VISIT EST $123.45 $100.00 $23.45 B6 N3")
            .unwrap();

        assert_eq!(row.service_date, "01/23/2025");
        assert_eq!(row.services_provided, "OFFICE VISIT EST");
        assert_eq!(row.provider_billed, "123.45");
        assert_eq!(row.payer_paid, "100.00");
        assert_eq!(row.your_responsibility, "23.45");
        assert_eq!(row.message_codes, "B6 N3");
    }

    #[test]
    fn parses_negative_and_separated_amounts() {
        let row = parse_service_row("02/01/2025 ADJUSTMENT $1,200.00 ($50.00) 0 AR").unwrap();

        assert_eq!(row.provider_billed, "1200.00");
        assert_eq!(row.payer_paid, "-50.00");
        assert_eq!(row.your_responsibility, "0.00");
        assert_eq!(row.message_codes, "AR");
    }

    #[test]
    fn rejects_rows_without_codes() {
        assert!(parse_service_row("01/23/2025 OFFICE VISIT $1.00 $2.00 $3.00").is_none());
    }

    #[test]
    fn finalize_collapses_whitespace() {
        let done = finalize_row("01/23/2025  LAB\n WORK  $10.00 $8.00\t$2.00  17");
        assert_eq!(done.as_deref(), Some("01/23/2025 LAB WORK $10.00 $8.00 $2.00 17"));
    }

    #[test]
    fn finalize_waits_for_the_trailing_fields() {
        assert_eq!(finalize_row("01/23/2025 LAB WORK"), None);
        assert_eq!(finalize_row("01/23/2025 LAB WORK $10.00 $8.00"), None);
        assert_eq!(finalize_row("01/23/2025 LAB WORK $10.00 $8.00 $2.00"), None);
    }

    #[test]
    fn finalize_rejects_lowercase_codes() {
        assert_eq!(finalize_row("01/23/2025 LAB $10.00 $8.00 $2.00 see note"), None);
    }

    #[test]
    fn message_codes_allow_up_to_forty_characters() {
        let forty = "A".repeat(40);
        let row = parse_service_row(&format!("01/23/2025 LAB $1.00 $2.00 $3.00 {forty}")).unwrap();
        assert_eq!(row.message_codes, forty);

        let forty_one = "A".repeat(41);
        assert_eq!(
            finalize_row(&format!("01/23/2025 LAB $1.00 $2.00 $3.00 {forty_one}")),
            None
        );
    }

    #[test]
    fn trailing_whitespace_is_not_a_message_code() {
        assert_eq!(finalize_row("01/23/2025 LAB $1.00 $2.00 $3.00   "), None);
    }

    #[test]
    fn bare_numbers_in_a_description_stay_in_the_description() {
        let row = parse_service_row("01/23/2025 REFUND 2 OF 3 $10.00 $0.00 $10.00 AR").unwrap();

        assert_eq!(row.services_provided, "REFUND 2 OF 3");
        assert_eq!(row.provider_billed, "10.00");
        assert_eq!(row.payer_paid, "0.00");
        assert_eq!(row.your_responsibility, "10.00");
        assert_eq!(row.message_codes, "AR");
    }

    #[test]
    fn bare_numbers_in_a_description_can_finalize_early() {
        let buffer = "01/23/2025 LAB PANEL 1 2 3 TESTS";
        assert_eq!(finalize_row(buffer).as_deref(), Some(buffer));

        let row = parse_service_row(buffer).unwrap();
        assert_eq!(row.services_provided, "LAB PANEL");
        assert_eq!(row.provider_billed, "1.00");
        assert_eq!(row.payer_paid, "2.00");
        assert_eq!(row.your_responsibility, "3.00");
        assert_eq!(row.message_codes, "TESTS");
    }

    #[test]
    fn generated_rows_parse_back_to_their_parts() {
        let descriptions = ["OFFICE VISIT", "MRI BRAIN W/O CONTRAST", "LAB-PANEL, CBC"];
        let amounts = [
            ("$1,234.00", "1234.00"),
            ("(12.50)", "-12.50"),
            ("0", "0.00"),
            ("$45.10", "45.10"),
        ];
        let codes = ["17", "B6 N3", "AR"];

        for description in descriptions {
            for code in codes {
                for i in 0..amounts.len() {
                    let (billed, billed_out) = amounts[i];
                    let (paid, paid_out) = amounts[(i + 1) % amounts.len()];
                    let (owed, owed_out) = amounts[(i + 2) % amounts.len()];
                    let line = format!("01/23/2025 {description} {billed} {paid} {owed} {code}");

                    assert_eq!(finalize_row(&line).as_deref(), Some(line.as_str()), "{line}");
                    let row = parse_service_row(&line).unwrap();
                    assert_eq!(row.service_date, "01/23/2025", "{line}");
                    assert_eq!(row.services_provided, description, "{line}");
                    assert_eq!(row.provider_billed, billed_out, "{line}");
                    assert_eq!(row.payer_paid, paid_out, "{line}");
                    assert_eq!(row.your_responsibility, owed_out, "{line}");
                    assert_eq!(row.message_codes, code, "{line}");
                }
            }
        }
    }
}
