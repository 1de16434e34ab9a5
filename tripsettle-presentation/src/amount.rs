use tripsettle_domain::Money;

/// Two-decimal rendering of a cent amount, e.g. `-0.05` or `12.30`.
pub fn format_cents(amount: Money) -> String {
    amount.to_string()
}

/// Like [`format_cents`], with an explicit `+` on non-negative amounts.
pub fn format_signed_cents(amount: Money) -> String {
    if amount >= Money::ZERO {
        format!("+{amount}")
    } else {
        amount.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::positive(1230, "12.30", "+12.30")]
    #[case::negative_fraction(-5, "-0.05", "-0.05")]
    #[case::zero(0, "0.00", "+0.00")]
    #[case::large(123456789, "1234567.89", "+1234567.89")]
    fn formats_cents(#[case] cents: i64, #[case] plain: &str, #[case] signed: &str) {
        let amount = Money::from_cents(cents);

        assert_eq!(format_cents(amount), plain);
        assert_eq!(format_signed_cents(amount), signed);
    }
}
