//! Recovering numbers from pre-formatted currency summary strings.

use crate::{Error, money::MonetaryAmount};

/// Parse a summary string such as "R$ 1.234,56" into a number.
///
/// The string is read in the Brazilian convention: `.` groups thousands and
/// the first `,` separates the fractional digits. Everything other than digits,
/// `.` and `,` (currency symbols, spaces, signs) is ignored.
///
/// Strings that do not contain a number parse as `0.0`. This function never
/// fails, so a malformed total contributes nothing to an aggregation instead of
/// breaking it.
pub fn parse_currency_summary(summary: &str) -> f64 {
    let cleaned: String = summary
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .collect();

    let number = match cleaned.split_once(',') {
        Some((integer_part, fractional_part)) => {
            format!("{}.{fractional_part}", integer_part.replace('.', ""))
        }
        None => cleaned.replace('.', ""),
    };

    match number.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            tracing::warn!("could not parse currency summary {summary:?}, counting it as zero");
            0.0
        }
    }
}

/// Parse a summary string, such as the price of an existing transaction, into
/// an amount that can be edited.
///
/// # Errors
///
/// Returns an [Error::InvalidAmount] if the parsed number is too large to be
/// represented as an amount.
pub fn amount_from_summary(summary: &str) -> Result<MonetaryAmount, Error> {
    MonetaryAmount::from_major_units(parse_currency_summary(summary))
}

#[cfg(test)]
mod tests {
    use crate::{
        Error,
        amount_field::AmountEditor,
        money::{MonetaryAmount, format_amount, format_currency},
        statistics::{amount_from_summary, parse_currency_summary},
    };

    #[test]
    fn parses_grouped_amount_with_symbol() {
        assert_eq!(parse_currency_summary("R$ 1.234,56"), 1234.56);
    }

    #[test]
    fn parses_zero() {
        assert_eq!(parse_currency_summary("R$ 0,00"), 0.0);
    }

    #[test]
    fn garbage_parses_as_zero() {
        assert_eq!(parse_currency_summary("garbage"), 0.0);
        assert_eq!(parse_currency_summary(""), 0.0);
        assert_eq!(parse_currency_summary("R$ ,"), 0.0);
        assert_eq!(parse_currency_summary("..."), 0.0);
    }

    #[test]
    fn dots_without_comma_are_grouping() {
        assert_eq!(parse_currency_summary("R$ 1.234"), 1234.0);
        assert_eq!(parse_currency_summary("1.234.567"), 1_234_567.0);
    }

    #[test]
    fn parses_without_symbol_or_grouping() {
        assert_eq!(parse_currency_summary("12,5"), 12.5);
        assert_eq!(parse_currency_summary("42"), 42.0);
        assert_eq!(parse_currency_summary("R$\u{a0}7,05"), 7.05);
    }

    #[test]
    fn trailing_comma_parses_integer_part() {
        assert_eq!(parse_currency_summary("R$ 1.000,"), 1000.0);
    }

    #[test]
    fn sign_is_ignored() {
        assert_eq!(parse_currency_summary("-R$ 5,00"), 5.0);
    }

    #[test]
    fn punctuation_in_fractional_part_parses_as_zero() {
        assert_eq!(parse_currency_summary("1,2,3"), 0.0);
        assert_eq!(parse_currency_summary("1,2.3"), 0.0);
    }

    #[test]
    fn is_deterministic() {
        let summary = "R$ 98.765,43";

        assert_eq!(
            parse_currency_summary(summary).to_bits(),
            parse_currency_summary(summary).to_bits()
        );
    }

    /// Sample cent values across the whole range, including the edges.
    fn sample_cents() -> Vec<u64> {
        let mut samples = vec![
            0,
            1,
            9,
            10,
            99,
            100,
            101,
            999,
            1_000,
            99_999,
            100_000,
            123_456,
            100_000_000_000_000,
            99_999_999_999_999,
        ];

        // Linear congruential generator for a reproducible spread of values.
        let mut state: u64 = 0x2545_f491_4f6c_dd1d;
        for _ in 0..2_000 {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            let magnitude = 10u64.pow((state >> 60) as u32 % 15 + 1);
            samples.push((state >> 11) % magnitude);
        }

        samples
    }

    #[test]
    fn amount_field_format_round_trips() {
        for cents in sample_cents() {
            let amount = MonetaryAmount::from_minor_units(cents);
            let parsed = parse_currency_summary(&format_amount(amount));

            assert_eq!(
                (parsed * 100.0).round() as u64,
                cents,
                "round trip of {cents} cents through {:?}",
                format_amount(amount)
            );
        }
    }

    #[test]
    fn summary_format_round_trips() {
        for cents in sample_cents() {
            let amount = MonetaryAmount::from_minor_units(cents);
            let parsed = parse_currency_summary(&format_currency(amount));

            assert_eq!(
                MonetaryAmount::from_major_units(parsed),
                Ok(amount),
                "round trip of {cents} cents"
            );
        }
    }

    #[test]
    fn editor_display_round_trips() {
        let mut editor = AmountEditor::default();

        let amount = editor.on_user_input("98765432101234");

        assert_eq!(
            parse_currency_summary(editor.display_value()),
            amount.major_units()
        );
    }

    #[test]
    fn price_of_existing_transaction_becomes_amount() {
        assert_eq!(
            amount_from_summary("R$ 1.234,56"),
            Ok(MonetaryAmount::from_minor_units(123_456))
        );
        assert_eq!(amount_from_summary("garbage"), Ok(MonetaryAmount::ZERO));
    }

    #[test]
    fn price_too_large_is_an_error() {
        let result = amount_from_summary("R$ 99.999.999.999.999.999,00");

        assert!(matches!(result, Err(Error::InvalidAmount(_))), "got {result:?}");
    }

    #[test]
    fn price_feeds_editor_reset() {
        let mut editor = AmountEditor::default();
        editor.on_user_input("5");

        editor.set_external_value(amount_from_summary("R$ 12,50").unwrap());

        assert_eq!(editor.display_value(), "12,50");
    }
}
