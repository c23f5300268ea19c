//! Cell formatting, pure functions of the row values.

use rust_decimal::Decimal;

const MISSING: &str = "-";
const NO_CHART: &str = "—";

/// Format a numeric value with Indian digit grouping and at most two
/// fraction digits, trailing zeros trimmed: `1234567.891` becomes
/// `12,34,567.89`. Missing values render as a dash.
pub fn format_inr(value: Option<Decimal>) -> String {
    let Some(value) = value else {
        return MISSING.to_string();
    };

    let rounded = value.round_dp(2).normalize();
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut out = String::new();
    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }
    out.push_str(&group_indian(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Format a traded-volume count the same way.
pub fn format_volume(value: Option<u64>) -> String {
    format_inr(value.map(Decimal::from))
}

/// Signed delta with an up/down glyph: zero and positive are up.
pub fn delta_cell(value: Option<Decimal>) -> String {
    let Some(value) = value else {
        return MISSING.to_string();
    };
    let glyph = if value.is_sign_negative() && !value.is_zero() {
        '▼'
    } else {
        '▲'
    };
    format!("{} {}", glyph, format_inr(Some(value)))
}

/// Percent variant of [`delta_cell`].
pub fn percent_cell(value: Option<Decimal>) -> String {
    match value {
        Some(v) => format!("{}%", delta_cell(Some(v))),
        None => MISSING.to_string(),
    }
}

/// Chart reference, or the placeholder glyph when absent.
pub fn chart_cell(url: Option<&str>) -> String {
    match url {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => NO_CHART.to_string(),
    }
}

/// Indian grouping: the last three digits stand alone, everything
/// before them groups in twos.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let head_bytes = head.as_bytes();
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head_bytes.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_indian_grouping() {
        assert_eq!(format_inr(Some(dec!(0))), "0");
        assert_eq!(format_inr(Some(dec!(999))), "999");
        assert_eq!(format_inr(Some(dec!(1000))), "1,000");
        assert_eq!(format_inr(Some(dec!(123456))), "1,23,456");
        assert_eq!(format_inr(Some(dec!(1234567))), "12,34,567");
        assert_eq!(format_inr(Some(dec!(1234567890))), "1,23,45,67,890");
    }

    #[test]
    fn test_fraction_digits_capped_at_two() {
        assert_eq!(format_inr(Some(dec!(2851.3))), "2,851.3");
        assert_eq!(format_inr(Some(dec!(2851.347))), "2,851.35");
        assert_eq!(format_inr(Some(dec!(2851.00))), "2,851");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(format_inr(Some(dec!(-123456.78))), "-1,23,456.78");
        assert_eq!(format_inr(Some(dec!(-0.004))), "0");
    }

    #[test]
    fn test_missing_renders_as_dash() {
        assert_eq!(format_inr(None), "-");
        assert_eq!(format_volume(None), "-");
        assert_eq!(delta_cell(None), "-");
        assert_eq!(percent_cell(None), "-");
    }

    #[test]
    fn test_delta_glyph_by_sign() {
        assert_eq!(delta_cell(Some(dec!(12.5))), "▲ 12.5");
        assert_eq!(delta_cell(Some(dec!(0))), "▲ 0");
        assert_eq!(delta_cell(Some(dec!(-8.25))), "▼ -8.25");
        assert_eq!(percent_cell(Some(dec!(-0.43))), "▼ -0.43%");
    }

    #[test]
    fn test_volume_grouping() {
        assert_eq!(format_volume(Some(4521890)), "45,21,890");
    }

    #[test]
    fn test_chart_cell() {
        assert_eq!(chart_cell(Some("https://x/c.svg")), "https://x/c.svg");
        assert_eq!(chart_cell(Some("")), "—");
        assert_eq!(chart_cell(None), "—");
    }
}
