//! Display helpers shared by forms, bills and attachments

use chrono::NaiveDate;

const COUNTRY_CODE: &str = "968";

/// Normalise a phone input to `+968 XXXX XXXX`, progressively while typing.
///
/// Non-digits are dropped and the country code is prefixed when missing.
/// Example: "96892223344" -> "+968 9222 3344", "9222" -> "+968 9222"
pub fn format_phone(raw: &str) -> String {
    let mut digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    if !digits.is_empty() && !digits.starts_with(COUNTRY_CODE) {
        digits = format!("{}{}", COUNTRY_CODE, digits);
    }

    let len = digits.len();
    if len > 3 {
        let mut out = format!("+{} {}", &digits[..3], &digits[3..len.min(7)]);
        if len > 7 {
            out.push(' ');
            out.push_str(&digits[7..len.min(11)]);
        }
        out
    } else if len > 0 {
        format!("+{}", digits)
    } else {
        digits
    }
}

/// Human readable attachment size, 1024 based, at most two decimals
/// Example: 1536 -> "1.5 KB"
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 3] = ["Bytes", "KB", "MB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut index = 0;
    let mut divisor = 1u64;
    while index + 1 < UNITS.len() && bytes >= divisor * 1024 {
        divisor *= 1024;
        index += 1;
    }

    let value = (bytes as f64 / divisor as f64 * 100.0).round() / 100.0;
    format!("{} {}", value, UNITS[index])
}

/// Example: (12.5, "OMR") -> "OMR 12.50"
pub fn format_currency(amount: f64, currency: &str) -> String {
    format!("{} {:.2}", currency, amount)
}

/// Example: 2024-03-05 -> "Mar 5, 2024"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Service request reference shown after a successful submission
/// Example: (2024, 7) -> "SR-2024-007"
pub fn format_request_id(year: i32, sequence: u32) -> String {
    format!("SR-{}-{:03}", year, sequence % 1000)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_phone() {
        assert_eq!(format_phone("96892223344"), "+968 9222 3344");
        assert_eq!(format_phone("92223344"), "+968 9222 3344");
        assert_eq!(format_phone("+968 9222-3344"), "+968 9222 3344");
        assert_eq!(format_phone("9222"), "+968 9222");
        assert_eq!(format_phone("968"), "+968");
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("abc"), "");
    }

    #[test]
    fn test_format_phone_truncates_extra_digits() {
        assert_eq!(format_phone("968922233445566"), "+968 9222 3344");
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(500), "500 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(2 * 1024 * 1024), "2 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3072 MB");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(12.5, "OMR"), "OMR 12.50");
        assert_eq!(format_currency(0.0, "OMR"), "OMR 0.00");
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_date(date), "Mar 5, 2024");
    }

    #[test]
    fn test_format_request_id() {
        assert_eq!(format_request_id(2024, 7), "SR-2024-007");
        assert_eq!(format_request_id(2024, 999), "SR-2024-999");
        assert_eq!(format_request_id(2025, 1042), "SR-2025-042");
    }
}
