//! Number formatting in the it-CH style used across the dashboard

/// Swiss thousands separator (U+2019)
pub const THOUSANDS_SEPARATOR: char = '’';

/// Integer with it-CH grouping: `120000` -> `120’000`
pub fn format_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(THOUSANDS_SEPARATOR);
        }
        grouped.push(c);
    }
    grouped
}

/// Whole-franc currency string: `48200` -> `CHF 48’200`
pub fn format_chf(amount: i64) -> String {
    if amount < 0 {
        format!("CHF -{}", format_thousands(amount.abs()))
    } else {
        format!("CHF {}", format_thousands(amount))
    }
}

/// Fraction rendered as a rounded percentage: `0.615` -> `62%`
pub fn format_pct(fraction: f64) -> String {
    format!("{}%", (fraction * 100.0).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_950), "1’950");
        assert_eq!(format_thousands(120_000), "120’000");
        assert_eq!(format_thousands(1_234_567), "1’234’567");
        assert_eq!(format_thousands(-4_500), "-4’500");
    }

    #[test]
    fn test_format_chf() {
        assert_eq!(format_chf(48_200), "CHF 48’200");
        assert_eq!(format_chf(7_230), "CHF 7’230");
        assert_eq!(format_chf(58), "CHF 58");
        assert_eq!(format_chf(-1_200), "CHF -1’200");
    }

    #[test]
    fn test_format_pct() {
        assert_eq!(format_pct(0.82), "82%");
        assert_eq!(format_pct(0.615), "62%");
    }
}
