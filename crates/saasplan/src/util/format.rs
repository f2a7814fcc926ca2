//! Number formatting for text reports

fn group_thousands(whole: u64) -> String {
    let digits = whole.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a currency value without cents, e.g. `€12,345` or `-€850`
pub fn format_currency(value: f64) -> String {
    let whole = value.abs().round() as u64;
    let sign = if value < 0.0 && whole > 0 { "-" } else { "" };
    format!("{sign}€{}", group_thousands(whole))
}

/// Like `format_currency`, but always carries a sign
pub fn format_signed_currency(value: f64) -> String {
    let formatted = format_currency(value);
    if formatted.starts_with('-') {
        formatted
    } else {
        format!("+{formatted}")
    }
}

/// Describe a breakeven shift in months
pub fn format_month_delta(delta: i64) -> String {
    match delta {
        0 => "no change".to_string(),
        -1 => "1 month earlier".to_string(),
        1 => "1 month later".to_string(),
        d if d < 0 => format!("{} months earlier", -d),
        d => format!("{d} months later"),
    }
}

/// Format hours with a sign, rounded to whole hours
pub fn format_signed_hours(hours: f64) -> String {
    let rounded = hours.round();
    if rounded > 0.0 {
        format!("+{rounded:.0} h")
    } else if rounded < 0.0 {
        format!("{rounded:.0} h")
    } else {
        "0 h".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "€0");
        assert_eq!(format_currency(907.2), "€907");
        assert_eq!(format_currency(1_234_567.6), "€1,234,568");
        assert_eq!(format_currency(-30_185.81), "-€30,186");
        // Rounds to zero without a dangling sign
        assert_eq!(format_currency(-0.2), "€0");
    }

    #[test]
    fn test_format_signed_currency() {
        assert_eq!(format_signed_currency(2_482.1), "+€2,482");
        assert_eq!(format_signed_currency(-4_527.9), "-€4,528");
    }

    #[test]
    fn test_format_month_delta() {
        assert_eq!(format_month_delta(0), "no change");
        assert_eq!(format_month_delta(-1), "1 month earlier");
        assert_eq!(format_month_delta(-4), "4 months earlier");
        assert_eq!(format_month_delta(3), "3 months later");
    }

    #[test]
    fn test_format_signed_hours() {
        assert_eq!(format_signed_hours(-5.4432), "-5 h");
        assert_eq!(format_signed_hours(7.8), "+8 h");
        assert_eq!(format_signed_hours(0.3), "0 h");
    }
}
